//! Statement builders.
//!
//! Each builder collects fragment descriptions and renders them on demand;
//! rendering is pure, so a builder can be rendered any number of times.

mod create_index;
mod create_table;
mod drop;
mod insert;

pub use create_index::CreateIndex;
pub use create_table::CreateTable;
pub use drop::{DropIndex, DropTable};
pub use insert::Insert;

use tessera_core::Describable;

/// Joins non-empty fragment descriptions with `", "`, trimming the leading
/// space that anonymous clause fragments start with.
pub(crate) fn join_fragments<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .map(str::trim_start)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collects the description of each fragment.
pub(crate) fn descriptions<D: Describable>(fragments: &[D]) -> impl Iterator<Item = &str> {
    fragments.iter().map(Describable::description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_fragments_skips_empty() {
        assert_eq!(
            join_fragments(["a INTEGER", "", " CHECK (a > 0)"]),
            "a INTEGER, CHECK (a > 0)"
        );
        assert_eq!(join_fragments(Vec::<&str>::new()), "");
    }
}
