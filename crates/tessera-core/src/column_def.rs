//! Column definitions for CREATE TABLE and ALTER TABLE ... ADD COLUMN.
//!
//! Like [`TableConstraint`](crate::TableConstraint), a [`ColumnDef`] only
//! appends: each `make_*` call adds one column constraint at the end of the
//! definition.

use core::fmt;
use core::str::FromStr;

use crate::column_index::Order;
use crate::conflict::Conflict;
use crate::describable::{impl_describable, Describable};
use crate::error::Error;
use crate::expr::{Column, Expr, Literal};
use crate::foreign_key::ForeignKey;

/// SQLite column type affinity.
///
/// See <https://www.sqlite.org/datatype3.html>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ColumnType {
    /// INTEGER affinity.
    Integer,
    /// REAL affinity.
    Real,
    /// TEXT affinity.
    Text,
    /// BLOB (no affinity).
    Blob,
    /// NUMERIC affinity.
    Numeric,
}

impl ColumnType {
    /// Returns the SQL type name.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
            Self::Blob => "BLOB",
            Self::Numeric => "NUMERIC",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for ColumnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INTEGER" | "INT" => Ok(Self::Integer),
            "REAL" | "FLOAT" | "DOUBLE" => Ok(Self::Real),
            "TEXT" => Ok(Self::Text),
            "BLOB" => Ok(Self::Blob),
            "NUMERIC" => Ok(Self::Numeric),
            _ => Err(Error::UnknownColumnType(s.to_owned())),
        }
    }
}

/// The time keyword a column can default to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultTime {
    /// `CURRENT_TIME`.
    Time,
    /// `CURRENT_DATE`.
    Date,
    /// `CURRENT_TIMESTAMP`.
    Timestamp,
}

impl DefaultTime {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Time => "CURRENT_TIME",
            Self::Date => "CURRENT_DATE",
            Self::Timestamp => "CURRENT_TIMESTAMP",
        }
    }
}

/// A column definition: `name [TYPE] [constraint ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    description: String,
}

impl ColumnDef {
    /// Creates `name TYPE`.
    #[must_use]
    pub fn new(column: &Column, column_type: ColumnType) -> Self {
        Self {
            description: format!("{} {}", column.description(), column_type.keyword()),
        }
    }

    /// Creates a definition with no declared type.
    #[must_use]
    pub fn untyped(column: &Column) -> Self {
        Self {
            description: column.to_description(),
        }
    }

    /// Appends `PRIMARY KEY [ASC|DESC] [ON CONFLICT ..] [AUTOINCREMENT]`.
    #[must_use]
    pub fn make_primary(mut self, order: Order, autoincrement: bool, conflict: Conflict) -> Self {
        self.description.push_str(" PRIMARY KEY");
        order.append_to(&mut self.description);
        conflict.append_clause(&mut self.description);
        if autoincrement {
            self.description.push_str(" AUTOINCREMENT");
        }
        self
    }

    /// Appends `NOT NULL [ON CONFLICT ..]`.
    #[must_use]
    pub fn make_not_null(mut self, conflict: Conflict) -> Self {
        self.description.push_str(" NOT NULL");
        conflict.append_clause(&mut self.description);
        self
    }

    /// Appends `UNIQUE [ON CONFLICT ..]`.
    #[must_use]
    pub fn make_unique(mut self, conflict: Conflict) -> Self {
        self.description.push_str(" UNIQUE");
        conflict.append_clause(&mut self.description);
        self
    }

    /// Appends `DEFAULT <literal>`.
    #[must_use]
    pub fn make_default(mut self, value: impl Into<Literal>) -> Self {
        self.description.push_str(" DEFAULT ");
        self.description.push_str(&value.into().to_sql());
        self
    }

    /// Appends `DEFAULT (<expr>)`.
    #[must_use]
    pub fn make_default_expr(mut self, expr: &Expr) -> Self {
        self.description.push_str(" DEFAULT (");
        self.description.push_str(expr.description());
        self.description.push(')');
        self
    }

    /// Appends `DEFAULT CURRENT_TIME|CURRENT_DATE|CURRENT_TIMESTAMP`.
    #[must_use]
    pub fn make_default_current(mut self, time: DefaultTime) -> Self {
        self.description.push_str(" DEFAULT ");
        self.description.push_str(time.keyword());
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

    /// Appends `COLLATE <name>`.
    #[must_use]
    pub fn make_collate(mut self, collation: &str) -> Self {
        self.description.push_str(" COLLATE ");
        self.description.push_str(collation);
        self
    }

    /// Appends a `REFERENCES` clause.
    #[must_use]
    pub fn make_foreign_key(mut self, foreign_key: &ForeignKey) -> Self {
        self.description.push(' ');
        self.description.push_str(foreign_key.description());
        self
    }
}

impl_describable!(ColumnDef);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::col;
    use crate::foreign_key::ForeignKeyAction;

    #[test]
    fn test_typed_and_untyped() {
        assert_eq!(
            ColumnDef::new(&col("id"), ColumnType::Integer).description(),
            "id INTEGER"
        );
        assert_eq!(ColumnDef::untyped(&col("payload")).description(), "payload");
    }

    #[test]
    fn test_primary_key_autoincrement() {
        let def = ColumnDef::new(&col("id"), ColumnType::Integer).make_primary(
            Order::Asc,
            true,
            Conflict::Rollback,
        );
        assert_eq!(
            def.description(),
            "id INTEGER PRIMARY KEY ASC ON CONFLICT ROLLBACK AUTOINCREMENT"
        );
    }

    #[test]
    fn test_primary_key_plain() {
        let def = ColumnDef::new(&col("id"), ColumnType::Integer).make_primary(
            Order::NotSet,
            false,
            Conflict::NotSet,
        );
        assert_eq!(def.description(), "id INTEGER PRIMARY KEY");
    }

    #[test]
    fn test_not_null_unique() {
        let def = ColumnDef::new(&col("email"), ColumnType::Text)
            .make_not_null(Conflict::NotSet)
            .make_unique(Conflict::Ignore)
            .make_collate("NOCASE");
        assert_eq!(
            def.description(),
            "email TEXT NOT NULL UNIQUE ON CONFLICT IGNORE COLLATE NOCASE"
        );
    }

    #[test]
    fn test_defaults() {
        let def = ColumnDef::new(&col("active"), ColumnType::Integer).make_default(true);
        assert_eq!(def.description(), "active INTEGER DEFAULT TRUE");

        let def = ColumnDef::new(&col("title"), ColumnType::Text).make_default("it's");
        assert_eq!(def.description(), "title TEXT DEFAULT 'it''s'");

        let def = ColumnDef::new(&col("created_at"), ColumnType::Text)
            .make_default_current(DefaultTime::Timestamp);
        assert_eq!(def.description(), "created_at TEXT DEFAULT CURRENT_TIMESTAMP");

        let def = ColumnDef::new(&col("expires"), ColumnType::Integer)
            .make_default_expr(&Expr::function("unixepoch", Vec::<Expr>::new()).add(3600));
        assert_eq!(def.description(), "expires INTEGER DEFAULT (unixepoch() + 3600)");

        let def = ColumnDef::untyped(&col("note")).make_default(None::<String>);
        assert_eq!(def.description(), "note DEFAULT NULL");

        let def = ColumnDef::new(&col("ratio"), ColumnType::Real).make_default(f64::NAN);
        assert_eq!(def.description(), "ratio REAL DEFAULT NULL");
        let def = ColumnDef::new(&col("floor"), ColumnType::Real).make_default(f64::NEG_INFINITY);
        assert_eq!(def.description(), "floor REAL DEFAULT -9e999");
    }

    #[test]
    fn test_check_and_reference() {
        let def = ColumnDef::new(&col("owner_id"), ColumnType::Integer)
            .make_check(&col("owner_id").gt(0))
            .make_foreign_key(
                &ForeignKey::new("users", ["id"]).on_delete(ForeignKeyAction::SetNull),
            );
        assert_eq!(
            def.description(),
            "owner_id INTEGER CHECK (owner_id > 0) REFERENCES users(id) ON DELETE SET NULL"
        );
    }

    #[test]
    fn test_column_type_parse() {
        assert_eq!("integer".parse::<ColumnType>(), Ok(ColumnType::Integer));
        assert_eq!("Double".parse::<ColumnType>(), Ok(ColumnType::Real));
        assert_eq!(ColumnType::Blob.to_string(), "BLOB");
        assert_eq!(
            "json".parse::<ColumnType>(),
            Err(Error::UnknownColumnType("json".into()))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_column_type_serde() {
        assert_eq!(
            serde_json::to_string(&ColumnType::Integer).unwrap(),
            "\"INTEGER\""
        );
        assert_eq!(
            serde_json::from_str::<ColumnType>("\"NUMERIC\"").unwrap(),
            ColumnType::Numeric
        );
        assert!(serde_json::from_str::<ColumnType>("\"JSON\"").is_err());
    }
}
