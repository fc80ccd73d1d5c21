//! The `REFERENCES` clause shared by column and table constraints.
//!
//! See <https://www.sqlite.org/foreignkeys.html>.

use core::str::FromStr;

use crate::describable::{impl_describable, join};
use crate::error::Error;

/// Foreign key referential action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ForeignKeyAction {
    /// Set the child key to NULL.
    SetNull,
    /// Set the child key to its column default.
    SetDefault,
    /// Propagate the change to the child rows.
    Cascade,
    /// Refuse the change while child rows exist.
    Restrict,
    /// Defer the check to the end of the statement.
    NoAction,
}

impl ForeignKeyAction {
    /// Returns the SQL representation of the action.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
            Self::Cascade => "CASCADE",
            Self::Restrict => "RESTRICT",
            Self::NoAction => "NO ACTION",
        }
    }
}

impl FromStr for ForeignKeyAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        [
            Self::SetNull,
            Self::SetDefault,
            Self::Cascade,
            Self::Restrict,
            Self::NoAction,
        ]
        .into_iter()
        .find(|action| action.as_sql().eq_ignore_ascii_case(&normalized))
        .ok_or_else(|| Error::UnknownForeignKeyAction(s.to_owned()))
    }
}

/// When a deferrable foreign key is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deferrable {
    /// `DEFERRABLE INITIALLY DEFERRED`: checked at commit.
    InitiallyDeferred,
    /// `DEFERRABLE INITIALLY IMMEDIATE`: checked per statement.
    InitiallyImmediate,
    /// `NOT DEFERRABLE`.
    Not,
}

impl Deferrable {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::InitiallyDeferred => "DEFERRABLE INITIALLY DEFERRED",
            Self::InitiallyImmediate => "DEFERRABLE INITIALLY IMMEDIATE",
            Self::Not => "NOT DEFERRABLE",
        }
    }
}

/// A foreign key clause: `REFERENCES table(cols) [ON DELETE ..] [ON UPDATE ..]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    description: String,
}

impl ForeignKey {
    /// References `columns` of `table`. An empty column list references the
    /// parent table's primary key.
    #[must_use]
    pub fn new<I>(table: &str, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut description = format!("REFERENCES {table}");
        let columns: Vec<String> = columns
            .into_iter()
            .map(|c| c.as_ref().to_owned())
            .collect();
        if !columns.is_empty() {
            description.push('(');
            description.push_str(&join(&columns));
            description.push(')');
        }
        Self { description }
    }

    /// Appends an `ON DELETE` action.
    #[must_use]
    pub fn on_delete(mut self, action: ForeignKeyAction) -> Self {
        self.description.push_str(" ON DELETE ");
        self.description.push_str(action.as_sql());
        self
    }

    /// Appends an `ON UPDATE` action.
    #[must_use]
    pub fn on_update(mut self, action: ForeignKeyAction) -> Self {
        self.description.push_str(" ON UPDATE ");
        self.description.push_str(action.as_sql());
        self
    }

    /// Appends a deferral mode.
    #[must_use]
    pub fn deferrable(mut self, mode: Deferrable) -> Self {
        self.description.push(' ');
        self.description.push_str(mode.as_sql());
        self
    }
}

impl_describable!(ForeignKey);
