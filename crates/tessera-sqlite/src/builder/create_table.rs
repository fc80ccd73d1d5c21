//! CREATE TABLE builder.

use tessera_core::{ColumnDef, TableConstraint};

use super::{descriptions, join_fragments};
use crate::statement::{impl_display_via_render, Statement, StatementKind};

/// A CREATE TABLE statement.
///
/// ```rust
/// use tessera_core::{col, ColumnDef, ColumnType, TableConstraint};
/// use tessera_sqlite::{CreateTable, Statement};
///
/// let sql = CreateTable::new("readings")
///     .column(ColumnDef::new(&col("value"), ColumnType::Real))
///     .constraint(TableConstraint::new().make_check(&col("value").gt_eq(0)))
///     .render();
/// assert_eq!(sql, "CREATE TABLE readings(value REAL, CHECK (value >= 0))");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    name: String,
    if_not_exists: bool,
    columns: Vec<ColumnDef>,
    constraints: Vec<TableConstraint>,
    without_rowid: bool,
}

impl CreateTable {
    /// Creates a CREATE TABLE statement for `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            if_not_exists: false,
            columns: Vec::new(),
            constraints: Vec::new(),
            without_rowid: false,
        }
    }

    /// Uses IF NOT EXISTS clause.
    #[must_use]
    pub const fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    /// Adds a column definition.
    #[must_use]
    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    /// Adds column definitions.
    #[must_use]
    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnDef>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Adds a table-level constraint. Constraints with an empty description
    /// are skipped when rendering.
    #[must_use]
    pub fn constraint(mut self, constraint: TableConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Appends `WITHOUT ROWID`.
    #[must_use]
    pub const fn without_rowid(mut self) -> Self {
        self.without_rowid = true;
        self
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Statement for CreateTable {
    fn kind(&self) -> StatementKind {
        StatementKind::CreateTable
    }

    fn render(&self) -> String {
        let mut sql = String::from("CREATE TABLE ");
        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&self.name);
        sql.push('(');
        sql.push_str(&join_fragments(
            descriptions(&self.columns).chain(descriptions(&self.constraints)),
        ));
        sql.push(')');
        if self.without_rowid {
            sql.push_str(" WITHOUT ROWID");
        }
        sql
    }
}

impl_display_via_render!(CreateTable);
