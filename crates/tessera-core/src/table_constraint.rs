//! Table constraints for CREATE TABLE.
//!
//! A [`TableConstraint`] starts either anonymous (empty) or named
//! (`CONSTRAINT <name>`) and grows through chained modifiers, each of which
//! appends one well-formed sub-clause at the point of the call:
//!
//! ```rust
//! use tessera_core::{Conflict, Describable, TableConstraint};
//!
//! let pk = TableConstraint::named("pk")
//!     .make_primary(["app", "name"])
//!     .on_conflict(Conflict::Replace);
//! assert_eq!(pk.description(), "CONSTRAINT pk PRIMARY KEY (app, name) ON CONFLICT REPLACE");
//! ```
//!
//! Modifiers are never reordered, deduplicated or validated against each
//! other. Calling `make_check` twice yields two CHECK clauses, and a
//! conflict clause placed where SQLite does not expect one is rejected only
//! when the statement is prepared. Invoking modifiers in grammatical order
//! is the caller's obligation.

use crate::column_index::ColumnIndex;
use crate::conflict::Conflict;
use crate::describable::{impl_describable, join, Describable};
use crate::foreign_key::ForeignKey;

/// A table-level constraint clause.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableConstraint {
    description: String,
}

impl TableConstraint {
    /// Creates an anonymous constraint with an empty description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a constraint whose description starts with `CONSTRAINT <name>`.
    ///
    /// The name is emitted verbatim; quoting is up to the caller.
    #[must_use]
    pub fn named(name: impl AsRef<str>) -> Self {
        Self {
            description: format!("CONSTRAINT {}", name.as_ref()),
        }
    }

    /// Appends `ON CONFLICT <policy>`.
    ///
    /// [`Conflict::NotSet`] appends nothing, so an optional policy can be
    /// forwarded without branching.
    #[must_use]
    pub fn on_conflict(mut self, conflict: Conflict) -> Self {
        conflict.append_clause(&mut self.description);
        self
    }

    /// Appends `CHECK (<expr>)`.
    #[must_use]
    pub fn make_check<E: Describable + ?Sized>(mut self, expr: &E) -> Self {
        self.description.push_str(" CHECK (");
        self.description.push_str(expr.description());
        self.description.push(')');
        self
    }

    /// Appends `PRIMARY KEY (<indexes>)`.
    #[must_use]
    pub fn make_primary<I>(self, indexes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ColumnIndex>,
    {
        self.append_keyed(" PRIMARY KEY (", indexes)
    }

    /// Appends `UNIQUE (<indexes>)`.
    #[must_use]
    pub fn make_unique<I>(self, indexes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ColumnIndex>,
    {
        self.append_keyed(" UNIQUE (", indexes)
    }

    /// Appends `FOREIGN KEY (<columns>) <foreign key clause>`.
    #[must_use]
    pub fn make_foreign_key<I>(mut self, columns: I, foreign_key: &ForeignKey) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let columns: Vec<String> = columns
            .into_iter()
            .map(|c| c.as_ref().to_owned())
            .collect();
        self.description.push_str(" FOREIGN KEY (");
        self.description.push_str(&join(&columns));
        self.description.push_str(") ");
        self.description.push_str(foreign_key.description());
        self
    }

    fn append_keyed<I>(mut self, keyword: &str, indexes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ColumnIndex>,
    {
        self.description.push_str(keyword);
        self.description
            .push_str(&join(indexes.into_iter().map(Into::<ColumnIndex>::into)));
        self.description.push(')');
        self
    }
}

impl_describable!(TableConstraint);
