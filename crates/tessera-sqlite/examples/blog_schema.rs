//! Example: Blog schema
//!
//! Assembles the DDL for a small blog (users, posts, tags) and prints each
//! statement. The subscriber installed in `main` also prints the `DEBUG`
//! events emitted while statements are rendered.
//!
//! Run with: cargo run --example blog_schema -p tessera-sqlite

use tessera_core::{
    col, ColumnDef, ColumnIndex, ColumnType, Conflict, DefaultTime, Expr, ForeignKey,
    ForeignKeyAction, Order, TableConstraint,
};
use tessera_sqlite::{CreateIndex, CreateTable, Insert, Statement};

// =============================================================================
// Tables
// =============================================================================

fn users() -> CreateTable {
    CreateTable::new("users")
        .if_not_exists()
        .column(ColumnDef::new(&col("id"), ColumnType::Integer).make_primary(
            Order::NotSet,
            true,
            Conflict::NotSet,
        ))
        .column(
            ColumnDef::new(&col("username"), ColumnType::Text)
                .make_not_null(Conflict::NotSet)
                .make_collate("NOCASE"),
        )
        .column(
            ColumnDef::new(&col("created_at"), ColumnType::Text)
                .make_not_null(Conflict::NotSet)
                .make_default_current(DefaultTime::Timestamp),
        )
        .constraint(
            TableConstraint::named("uq_username")
                .make_unique(["username"])
                .on_conflict(Conflict::Abort),
        )
        .constraint(TableConstraint::named("ck_username").make_check(
            &Expr::function("length", [col("username")]).between(3, 32),
        ))
}

fn posts() -> CreateTable {
    CreateTable::new("posts")
        .if_not_exists()
        .column(ColumnDef::new(&col("id"), ColumnType::Integer).make_primary(
            Order::NotSet,
            true,
            Conflict::NotSet,
        ))
        .column(ColumnDef::new(&col("author_id"), ColumnType::Integer).make_not_null(Conflict::NotSet))
        .column(ColumnDef::new(&col("title"), ColumnType::Text).make_not_null(Conflict::NotSet))
        .column(ColumnDef::new(&col("published"), ColumnType::Integer).make_default(false))
        .constraint(TableConstraint::named("fk_posts_author").make_foreign_key(
            ["author_id"],
            &ForeignKey::new("users", ["id"]).on_delete(ForeignKeyAction::Cascade),
        ))
}

fn post_tags() -> CreateTable {
    CreateTable::new("post_tags")
        .column(ColumnDef::new(&col("post_id"), ColumnType::Integer))
        .column(ColumnDef::new(&col("tag"), ColumnType::Text))
        .constraint(
            TableConstraint::named("pk_post_tags")
                .make_primary(["post_id", "tag"])
                .on_conflict(Conflict::Ignore),
        )
        .without_rowid()
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let statements: Vec<Box<dyn Statement>> = vec![
        Box::new(users()),
        Box::new(posts()),
        Box::new(post_tags()),
        Box::new(
            CreateIndex::new("idx_posts_published", "posts")
                .if_not_exists()
                .column(ColumnIndex::from("author_id"))
                .column(ColumnIndex::from("id").order(Order::Desc))
                .where_clause(col("published").eq(true)),
        ),
        Box::new(
            Insert::into_table("post_tags")
                .or(Conflict::Ignore)
                .columns(["post_id", "tag"])
                .values([Expr::bind(), Expr::bind()]),
        ),
    ];

    for statement in &statements {
        println!("{};", statement.sql());
    }
}
