//! The contract shared by every assembled statement.

use core::fmt;

use tracing::debug;

/// The kind of an assembled statement, used as a logging field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// `CREATE TABLE`.
    CreateTable,
    /// `CREATE INDEX`.
    CreateIndex,
    /// `DROP TABLE`.
    DropTable,
    /// `DROP INDEX`.
    DropIndex,
    /// `INSERT`.
    Insert,
}

impl StatementKind {
    /// Returns the leading SQL keywords of the statement kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateTable => "CREATE TABLE",
            Self::CreateIndex => "CREATE INDEX",
            Self::DropTable => "DROP TABLE",
            Self::DropIndex => "DROP INDEX",
            Self::Insert => "INSERT",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete SQL statement assembled from fragments.
pub trait Statement {
    /// Returns the statement kind.
    fn kind(&self) -> StatementKind;

    /// Renders the statement text without side effects.
    fn render(&self) -> String;

    /// Renders the statement text and logs it.
    fn sql(&self) -> String {
        let sql = self.render();
        debug!(kind = %self.kind(), sql = %sql, "assembled statement");
        sql
    }
}

/// Implements `Display` for statements by delegating to [`Statement::render`].
macro_rules! impl_display_via_render {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::core::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(&$crate::statement::Statement::render(self))
                }
            }
        )+
    };
}

pub(crate) use impl_display_via_render;
