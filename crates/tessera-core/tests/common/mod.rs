#![allow(dead_code)]

use tessera_core::{Describable, Expr};

/// An expression that renders exactly as `sql`.
pub fn expr_rendering_as(sql: &str) -> Expr {
    Expr::raw(sql)
}

/// Asserts that applying a modifier appended exactly `suffix`.
pub fn assert_appended<D: Describable>(before: &str, after: &D, suffix: &str) {
    assert_eq!(
        after.description(),
        format!("{before}{suffix}"),
        "Expected {suffix:?} to be appended to {before:?}"
    );
}
