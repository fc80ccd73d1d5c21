//! Indexed columns, as used by PRIMARY KEY, UNIQUE and CREATE INDEX.

use core::fmt;
use core::str::FromStr;

use crate::describable::{impl_describable, Describable};
use crate::error::Error;
use crate::expr::Column;

/// Sort order of an indexed column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Order {
    /// No explicit order; nothing is rendered.
    #[default]
    NotSet,
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl Order {
    /// Returns the SQL keyword, or `None` for [`Order::NotSet`].
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::NotSet => None,
            Self::Asc => Some("ASC"),
            Self::Desc => Some("DESC"),
        }
    }

    /// Appends `" <keyword>"` to `out` unless the order is unset.
    pub(crate) fn append_to(self, out: &mut String) {
        if let Some(keyword) = self.keyword() {
            out.push(' ');
            out.push_str(keyword);
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().unwrap_or_default())
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" => Ok(Self::NotSet),
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(Error::UnknownOrder(s.to_owned())),
        }
    }
}

/// A column inside an index or key definition: `name [COLLATE c] [ASC|DESC]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    description: String,
}

impl ColumnIndex {
    /// Creates an indexed column with no collation or order.
    #[must_use]
    pub fn new(column: &Column) -> Self {
        Self {
            description: column.to_description(),
        }
    }

    /// Appends a `COLLATE` clause.
    #[must_use]
    pub fn collate(mut self, collation: &str) -> Self {
        self.description.push_str(" COLLATE ");
        self.description.push_str(collation);
        self
    }

    /// Appends the sort order. [`Order::NotSet`] appends nothing.
    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        order.append_to(&mut self.description);
        self
    }
}

impl_describable!(ColumnIndex);

impl From<Column> for ColumnIndex {
    fn from(column: Column) -> Self {
        Self::new(&column)
    }
}

impl From<&Column> for ColumnIndex {
    fn from(column: &Column) -> Self {
        Self::new(column)
    }
}

impl From<&str> for ColumnIndex {
    fn from(name: &str) -> Self {
        Self::new(&Column::new(name))
    }
}
