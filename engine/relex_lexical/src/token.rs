//! Contains the [`Token`] type, one classified span of tokenized text.

use std::ops::Range;

use derive_new::new;
use getset::{CopyGetters, Getters};

use crate::kind::Kind;

/// A byte offset into the tokenized text.
pub type ByteIndex = usize;

/// A half-open byte range locating a token in the tokenized text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new,
)]
pub struct Span {
    /// The byte offset where the matched text begins.
    pub start: ByteIndex,

    /// The byte offset one past the end of the matched text.
    pub end: ByteIndex,
}

impl Span {
    /// Returns the number of bytes the span covers.
    #[must_use]
    pub const fn len(&self) -> usize { self.end - self.start }

    /// Checks whether the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.start == self.end }

    /// Returns the span as a [`Range`] usable for slicing the tokenized
    /// text.
    #[must_use]
    pub const fn range(&self) -> Range<ByteIndex> { self.start..self.end }
}

/// One classified span of tokenized text.
///
/// A token is created during tokenization and immutable afterwards; the
/// [`TokenStream`](crate::stream::TokenStream) that contains it owns it. The
/// text is always non-empty, guaranteed by the engine's forward-progress
/// invariant.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Getters,
    CopyGetters,
    new,
)]
pub struct Token {
    /// The kind the winning fragment classified this span as.
    #[get = "pub"]
    kind: Kind,

    /// The exact substring of the input that matched.
    #[get = "pub"]
    text: String,

    /// The location of the matched substring in the input.
    #[get_copy = "pub"]
    span: Span,
}

impl Token {
    /// Returns the byte offset where the match began.
    #[must_use]
    pub const fn position(&self) -> ByteIndex { self.span.start }
}
