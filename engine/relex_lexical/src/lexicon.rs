//! Contains the [`Lexicon`] type, the ordered mapping that drives a
//! [`Tokenizer`](crate::tokenizer::Tokenizer).

use std::borrow::Cow;

use enum_as_inner::EnumAsInner;

use crate::kind::Kind;

/// The pattern text associated with one lexicon entry.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner,
)]
pub enum Fragment {
    /// A regular-expression fragment, spliced into the combined pattern
    /// verbatim.
    Pattern(String),

    /// A literal substring, escaped before being spliced into the combined
    /// pattern.
    Literal(String),
}

impl Fragment {
    /// Creates a [`Fragment::Pattern`] from the given pattern text.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern(pattern.into())
    }

    /// Creates a [`Fragment::Literal`] from the given literal text.
    pub fn literal(literal: impl Into<String>) -> Self {
        Self::Literal(literal.into())
    }

    /// Returns the pattern text this fragment contributes to the combined
    /// pattern, escaping [`Fragment::Literal`] variants.
    #[must_use]
    pub fn to_pattern(&self) -> Cow<'_, str> {
        match self {
            Self::Pattern(pattern) => Cow::Borrowed(pattern.as_str()),
            Self::Literal(literal) => Cow::Owned(regex::escape(literal)),
        }
    }
}

/// The caller-supplied ordered mapping from [`Kind`] to [`Fragment`].
///
/// Declaration order is match priority: when several fragments could match
/// at the same offset, the first-declared kind wins. Broad fragments (such
/// as `\w+`) therefore belong after the narrow punctuation fragments they
/// would otherwise shadow. No conflict detection is performed; the order the
/// caller declares is the order the engine obeys.
///
/// A lexicon is read-only to the tokenizer: compilation borrows it once at
/// construction and never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: Vec<(Kind, Fragment)>,
}

impl Lexicon {
    /// Creates an empty [`Lexicon`].
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Appends an entry mapping `kind` to `fragment` after every previously
    /// declared entry, giving it the lowest priority so far.
    ///
    /// Declaring the same kind twice is representable here but rejected when
    /// the lexicon is compiled.
    pub fn define(&mut self, kind: Kind, fragment: Fragment) -> &mut Self {
        self.entries.push((kind, fragment));
        self
    }

    /// Returns the number of entries declared.
    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Checks whether no entries have been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Iterates over the entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, (Kind, Fragment)> {
        self.entries.iter()
    }
}

impl FromIterator<(Kind, Fragment)> for Lexicon {
    fn from_iter<T: IntoIterator<Item = (Kind, Fragment)>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl Extend<(Kind, Fragment)> for Lexicon {
    fn extend<T: IntoIterator<Item = (Kind, Fragment)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a (Kind, Fragment);
    type IntoIter = std::slice::Iter<'a, (Kind, Fragment)>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

#[cfg(test)]
mod tests;
