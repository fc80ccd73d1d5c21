//! The capability shared by every SQL fragment: rendering itself as text.

/// A value that renders itself as a piece of SQL text.
///
/// Implementors own a single text buffer that is seeded when the value is
/// constructed and only ever grows through the type's own modifiers. The
/// description is valid SQL for the fragment kind after every public call.
pub trait Describable {
    /// Returns the rendered SQL text.
    fn description(&self) -> &str;

    /// Returns whether nothing has been rendered yet.
    fn is_empty(&self) -> bool {
        self.description().is_empty()
    }

    /// Returns an owned copy of the rendered SQL text.
    fn to_description(&self) -> String {
        self.description().to_owned()
    }
}

impl<T: Describable + ?Sized> Describable for &T {
    fn description(&self) -> &str {
        (**self).description()
    }
}

impl Describable for str {
    fn description(&self) -> &str {
        self
    }
}

impl Describable for String {
    fn description(&self) -> &str {
        self
    }
}

/// Joins the descriptions of `items` with `", "`.
pub(crate) fn join<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Describable,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(item.description());
    }
    out
}

/// Implements [`Describable`] and `Display` for a type whose rendered text
/// lives in a `description: String` field.
macro_rules! impl_describable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::describable::Describable for $ty {
                fn description(&self) -> &str {
                    &self.description
                }
            }

            impl ::core::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(&self.description)
                }
            }
        )+
    };
}

pub(crate) use impl_describable;
