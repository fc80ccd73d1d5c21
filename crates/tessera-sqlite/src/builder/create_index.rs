//! CREATE INDEX builder.

use tessera_core::{ColumnIndex, Describable, Expr};

use super::{descriptions, join_fragments};
use crate::statement::{impl_display_via_render, Statement, StatementKind};

/// A CREATE INDEX statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIndex {
    name: String,
    table: String,
    unique: bool,
    if_not_exists: bool,
    columns: Vec<ColumnIndex>,
    condition: Option<Expr>,
}

impl CreateIndex {
    /// Creates an index named `name` on `table`.
    #[must_use]
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            unique: false,
            if_not_exists: false,
            columns: Vec::new(),
            condition: None,
        }
    }

    /// Makes the index UNIQUE.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Uses IF NOT EXISTS clause.
    #[must_use]
    pub const fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    /// Adds an indexed column.
    #[must_use]
    pub fn column(mut self, column: impl Into<ColumnIndex>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Restricts the index to rows matching `condition` (a partial index).
    #[must_use]
    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.condition = Some(condition);
        self
    }
}

impl Statement for CreateIndex {
    fn kind(&self) -> StatementKind {
        StatementKind::CreateIndex
    }

    fn render(&self) -> String {
        let mut sql = String::from("CREATE ");
        if self.unique {
            sql.push_str("UNIQUE ");
        }
        sql.push_str("INDEX ");
        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&self.name);
        sql.push_str(" ON ");
        sql.push_str(&self.table);
        sql.push('(');
        sql.push_str(&join_fragments(descriptions(&self.columns)));
        sql.push(')');
        if let Some(ref condition) = self.condition {
            sql.push_str(" WHERE ");
            sql.push_str(condition.description());
        }
        sql
    }
}

impl_display_via_render!(CreateIndex);
