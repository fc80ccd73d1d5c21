//! DROP TABLE and DROP INDEX builders.

use crate::statement::{impl_display_via_render, Statement, StatementKind};

/// A DROP TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTable {
    name: String,
    if_exists: bool,
}

impl DropTable {
    /// Drops the table `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            if_exists: false,
        }
    }

    /// Uses IF EXISTS clause.
    #[must_use]
    pub const fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }
}

impl Statement for DropTable {
    fn kind(&self) -> StatementKind {
        StatementKind::DropTable
    }

    fn render(&self) -> String {
        let mut sql = String::from("DROP TABLE ");
        if self.if_exists {
            sql.push_str("IF EXISTS ");
        }
        sql.push_str(&self.name);
        sql
    }
}

/// A DROP INDEX statement.
///
/// SQLite index names are global, not per-table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropIndex {
    name: String,
    if_exists: bool,
}

impl DropIndex {
    /// Drops the index `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            if_exists: false,
        }
    }

    /// Uses IF EXISTS clause.
    #[must_use]
    pub const fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }
}

impl Statement for DropIndex {
    fn kind(&self) -> StatementKind {
        StatementKind::DropIndex
    }

    fn render(&self) -> String {
        let mut sql = String::from("DROP INDEX ");
        if self.if_exists {
            sql.push_str("IF EXISTS ");
        }
        sql.push_str(&self.name);
        sql
    }
}

impl_display_via_render!(DropTable, DropIndex);
