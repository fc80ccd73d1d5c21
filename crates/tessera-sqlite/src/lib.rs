//! # tessera-sqlite
//!
//! Assembles complete SQLite statements from `tessera-core` fragments.
//!
//! Fragments (column definitions, table constraints, indexed columns,
//! expressions) render themselves; the builders in this crate only decide
//! where each description goes inside the statement and join them with the
//! right punctuation. The resulting text is handed to whatever executes
//! SQL, this crate never opens a connection.
//!
//! - **[ON CONFLICT]**: SQLite accepts a conflict policy on `PRIMARY KEY`,
//!   `UNIQUE` and `NOT NULL` constraints, and as `INSERT OR <policy>`.
//!   [`Insert::or`] takes the same [`Conflict`] value as the constraint
//!   builders.
//! - **[WITHOUT ROWID]** tables are supported through
//!   [`CreateTable::without_rowid`].
//! - **[Partial indexes]** are supported through
//!   [`CreateIndex::where_clause`].
//!
//! Every statement implements [`Statement`]; [`Statement::sql`] renders the
//! text and logs it at `DEBUG` level through `tracing`.
//!
//! [ON CONFLICT]: https://www.sqlite.org/lang_conflict.html
//! [WITHOUT ROWID]: https://www.sqlite.org/withoutrowid.html
//! [Partial indexes]: https://www.sqlite.org/partialindex.html
//!
//! ## Example
//!
//! ```rust
//! use tessera_core::{col, ColumnDef, ColumnType, Conflict, Order, TableConstraint};
//! use tessera_sqlite::{CreateTable, Statement};
//!
//! let sql = CreateTable::new("users")
//!     .if_not_exists()
//!     .column(ColumnDef::new(&col("id"), ColumnType::Integer).make_primary(
//!         Order::NotSet,
//!         true,
//!         Conflict::NotSet,
//!     ))
//!     .column(ColumnDef::new(&col("email"), ColumnType::Text).make_not_null(Conflict::NotSet))
//!     .constraint(
//!         TableConstraint::named("uq_email")
//!             .make_unique(["email"])
//!             .on_conflict(Conflict::Replace),
//!     )
//!     .sql();
//!
//! assert_eq!(
//!     sql,
//!     "CREATE TABLE IF NOT EXISTS users(id INTEGER PRIMARY KEY AUTOINCREMENT, \
//!      email TEXT NOT NULL, CONSTRAINT uq_email UNIQUE (email) ON CONFLICT REPLACE)"
//! );
//! ```

pub mod builder;
mod statement;

pub use builder::{CreateIndex, CreateTable, DropIndex, DropTable, Insert};
pub use statement::{Statement, StatementKind};
pub use tessera_core::Conflict;
