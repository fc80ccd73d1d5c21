//! # tessera-core
//!
//! Self-describing SQL fragments.
//!
//! Every value in this crate knows how to render itself as a piece of SQL
//! text through the [`Describable`] trait. Clause builders such as
//! [`TableConstraint`], [`ColumnDef`] and [`ColumnIndex`] start from a
//! seeded buffer and only ever append to it, so the text read back after
//! any call is a finished fragment ready to be spliced into a statement.
//!
//! ## Example
//!
//! ```rust
//! use tessera_core::{col, Conflict, Describable, TableConstraint};
//!
//! let constraint = TableConstraint::named("adult")
//!     .on_conflict(Conflict::Abort)
//!     .make_check(&col("age").gt(17));
//!
//! assert_eq!(
//!     constraint.description(),
//!     "CONSTRAINT adult ON CONFLICT ABORT CHECK (age > 17)"
//! );
//! ```
//!
//! ## What this crate does not do
//!
//! Fragments are plain text. Nothing here parses SQL, checks identifiers
//! against a schema, or reorders modifiers: composing modifiers in an order
//! SQLite does not accept produces text that SQLite will reject when the
//! statement is prepared.

pub mod column_def;
pub mod column_index;
pub mod conflict;
pub mod describable;
pub mod error;
pub mod expr;
pub mod foreign_key;
pub mod table_constraint;

pub use column_def::{ColumnDef, ColumnType, DefaultTime};
pub use column_index::{ColumnIndex, Order};
pub use conflict::Conflict;
pub use describable::Describable;
pub use error::{Error, Result};
pub use expr::{col, Column, Expr, Literal};
pub use foreign_key::{Deferrable, ForeignKey, ForeignKeyAction};
pub use table_constraint::TableConstraint;
