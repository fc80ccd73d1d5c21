//! End-to-end rendering of table constraints.
//!
//! These tests only check the emitted text; the SQLite crate's tests run
//! the same fragments through a real database.

mod common;

use common::{assert_appended, expr_rendering_as};
use tessera_core::{col, ColumnIndex, Conflict, Describable, Order, TableConstraint};

const NAMES: &[&str] = &["", "pk", "uq_users_email", "\"needs quoting\"", "[bracketed]"];

#[test]
fn test_named_prefix_for_all_names() {
    for name in NAMES {
        assert_eq!(
            TableConstraint::named(name).description(),
            format!("CONSTRAINT {name}")
        );
        assert_eq!(
            TableConstraint::named(String::from(*name)).description(),
            format!("CONSTRAINT {name}")
        );
    }
}

#[test]
fn test_on_conflict_appends_keyword() {
    for name in NAMES {
        let before = TableConstraint::named(name);
        let prefix = before.to_description();
        for conflict in Conflict::ALL {
            let after = before.clone().on_conflict(conflict);
            assert_appended(
                &prefix,
                &after,
                &format!(" ON CONFLICT {}", conflict.keyword().unwrap()),
            );
        }
        let unchanged = before.clone().on_conflict(Conflict::NotSet);
        assert_appended(&prefix, &unchanged, "");
    }
}

#[test]
fn test_make_check_appends_expression() {
    let expressions = [
        expr_rendering_as("age > 0"),
        col("price").between(0, 1000),
        col("status").in_list(["draft", "published"]),
    ];
    for expr in &expressions {
        let after = TableConstraint::named("c").make_check(expr);
        assert_appended(
            "CONSTRAINT c",
            &after,
            &format!(" CHECK ({})", expr.description()),
        );
    }
}

#[test]
fn test_scenario_named_abort() {
    let constraint = TableConstraint::named("pk").on_conflict(Conflict::Abort);
    assert_eq!(constraint.description(), "CONSTRAINT pk ON CONFLICT ABORT");
}

#[test]
fn test_scenario_anonymous_check() {
    let constraint = TableConstraint::new().make_check(&expr_rendering_as("age > 0"));
    assert_eq!(constraint.description(), " CHECK (age > 0)");
}

#[test]
fn test_scenario_not_set_contributes_nothing() {
    let constraint = TableConstraint::named("chk1")
        .on_conflict(Conflict::NotSet)
        .make_check(&expr_rendering_as("x <> 0"));
    assert_eq!(constraint.description(), "CONSTRAINT chk1 CHECK (x <> 0)");
}

#[test]
fn test_policy_from_configuration_text() {
    let policy: Conflict = "replace".parse().unwrap();
    let constraint = TableConstraint::named("uq")
        .make_unique([ColumnIndex::from("slug").order(Order::Asc)])
        .on_conflict(policy);
    assert_eq!(
        constraint.description(),
        "CONSTRAINT uq UNIQUE (slug ASC) ON CONFLICT REPLACE"
    );
}
