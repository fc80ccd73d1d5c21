//! ON CONFLICT resolution policies.
//!
//! See <https://www.sqlite.org/lang_conflict.html>.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// An ON CONFLICT resolution policy.
///
/// [`Conflict::NotSet`] is the sentinel for "no explicit policy": clause
/// builders emit nothing for it, which lets callers forward an optional
/// policy without branching.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Conflict {
    /// No policy; suppresses the ON CONFLICT clause.
    #[default]
    NotSet,
    /// Roll back the whole transaction.
    Rollback,
    /// Back out the current statement (SQLite's default behaviour).
    Abort,
    /// Stop the statement, keeping changes made so far.
    Fail,
    /// Skip the offending row.
    Ignore,
    /// Delete the conflicting rows, then proceed.
    Replace,
}

impl Conflict {
    /// Every policy that renders a keyword.
    pub const ALL: [Self; 5] = [
        Self::Rollback,
        Self::Abort,
        Self::Fail,
        Self::Ignore,
        Self::Replace,
    ];

    /// Returns the SQL keyword, or `None` for [`Conflict::NotSet`].
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::NotSet => None,
            Self::Rollback => Some("ROLLBACK"),
            Self::Abort => Some("ABORT"),
            Self::Fail => Some("FAIL"),
            Self::Ignore => Some("IGNORE"),
            Self::Replace => Some("REPLACE"),
        }
    }

    /// Returns whether an explicit policy was chosen.
    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::NotSet)
    }

    /// Appends `" ON CONFLICT <keyword>"` to `out` unless the policy is unset.
    pub(crate) fn append_clause(self, out: &mut String) {
        if let Some(keyword) = self.keyword() {
            out.push_str(" ON CONFLICT ");
            out.push_str(keyword);
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().unwrap_or_default())
    }
}

impl FromStr for Conflict {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::NotSet);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.keyword().is_some_and(|k| k.eq_ignore_ascii_case(trimmed)))
            .ok_or_else(|| Error::UnknownConflict(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(Conflict::NotSet.keyword(), None);
        assert_eq!(Conflict::Rollback.keyword(), Some("ROLLBACK"));
        assert_eq!(Conflict::Abort.keyword(), Some("ABORT"));
        assert_eq!(Conflict::Fail.keyword(), Some("FAIL"));
        assert_eq!(Conflict::Ignore.keyword(), Some("IGNORE"));
        assert_eq!(Conflict::Replace.keyword(), Some("REPLACE"));
    }

    #[test]
    fn test_default_is_not_set() {
        assert_eq!(Conflict::default(), Conflict::NotSet);
        assert!(!Conflict::NotSet.is_set());
        assert!(Conflict::ALL.iter().all(|c| c.is_set()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Conflict::Replace.to_string(), "REPLACE");
        assert_eq!(Conflict::NotSet.to_string(), "");
    }

    #[test]
    fn test_append_clause() {
        let mut sql = String::from("UNIQUE (email)");
        Conflict::NotSet.append_clause(&mut sql);
        assert_eq!(sql, "UNIQUE (email)");
        Conflict::Ignore.append_clause(&mut sql);
        assert_eq!(sql, "UNIQUE (email) ON CONFLICT IGNORE");
    }

    #[test]
    fn test_parse() {
        assert_eq!("abort".parse::<Conflict>(), Ok(Conflict::Abort));
        assert_eq!(" Replace ".parse::<Conflict>(), Ok(Conflict::Replace));
        assert_eq!("".parse::<Conflict>(), Ok(Conflict::NotSet));
        for conflict in Conflict::ALL {
            assert_eq!(conflict.to_string().parse::<Conflict>(), Ok(conflict));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "upsert".parse::<Conflict>().unwrap_err();
        assert_eq!(err, Error::UnknownConflict("upsert".into()));
        assert!(err.to_string().contains("'upsert'"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        assert_eq!(
            serde_json::to_string(&Conflict::Rollback).unwrap(),
            "\"ROLLBACK\""
        );
        assert_eq!(
            serde_json::from_str::<Conflict>("\"NOT_SET\"").unwrap(),
            Conflict::NotSet
        );
    }
}
