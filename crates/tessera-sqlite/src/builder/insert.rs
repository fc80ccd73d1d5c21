//! INSERT builder with SQLite's `INSERT OR <policy>` form.

use tessera_core::{Conflict, Expr};

use super::descriptions;
use crate::statement::{impl_display_via_render, Statement, StatementKind};

/// An INSERT statement.
///
/// Values are expressions, typically [`Expr::bind`] placeholders when the
/// statement is prepared with parameters.
///
/// ```rust
/// use tessera_core::{Conflict, Expr};
/// use tessera_sqlite::{Insert, Statement};
///
/// let sql = Insert::into_table("users")
///     .or(Conflict::Replace)
///     .columns(["id", "name"])
///     .values([Expr::bind(), Expr::bind()])
///     .render();
/// assert_eq!(sql, "INSERT OR REPLACE INTO users(id, name) VALUES(?, ?)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insert {
    table: String,
    conflict: Conflict,
    columns: Vec<String>,
    rows: Vec<Vec<Expr>>,
}

impl Insert {
    /// Creates an INSERT into `table`.
    #[must_use]
    pub fn into_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            conflict: Conflict::NotSet,
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Sets the conflict policy. [`Conflict::NotSet`] renders a plain INSERT.
    #[must_use]
    pub const fn or(mut self, conflict: Conflict) -> Self {
        self.conflict = conflict;
        self
    }

    /// Specifies the columns to insert into.
    #[must_use]
    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a row of values. Without any row the statement inserts
    /// `DEFAULT VALUES`.
    #[must_use]
    pub fn values<I>(mut self, row: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }
}

impl Statement for Insert {
    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }

    fn render(&self) -> String {
        let mut sql = String::from("INSERT");
        if let Some(keyword) = self.conflict.keyword() {
            sql.push_str(" OR ");
            sql.push_str(keyword);
        }
        sql.push_str(" INTO ");
        sql.push_str(&self.table);
        if !self.columns.is_empty() {
            sql.push('(');
            sql.push_str(&self.columns.join(", "));
            sql.push(')');
        }
        if self.rows.is_empty() {
            sql.push_str(" DEFAULT VALUES");
            return sql;
        }
        sql.push_str(" VALUES");
        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|row| format!("({})", descriptions(row).collect::<Vec<_>>().join(", ")))
            .collect();
        sql.push_str(&rows.join(", "));
        sql
    }
}

impl_display_via_render!(Insert);
