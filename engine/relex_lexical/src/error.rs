//! Contains all kinds of errors that can occur while compiling a lexicon and
//! while tokenizing text.
//!
//! Every error is its own struct carrying the data that describes it; the
//! [`CompileError`] and [`TokenizeError`] enums group them by the phase they
//! can occur in. Compile errors are permanent: a lexicon that fails to
//! compile never yields a usable tokenizer. Tokenize errors are total for
//! the call that produced them; no partial stream accompanies them.

use enum_as_inner::EnumAsInner;
use thiserror::Error;

use crate::{kind::Kind, token::ByteIndex};

/// The identifier is not usable as a [`Kind`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error(
    "`{name}` is not usable as a kind identifier; expected the shape \
     `[A-Za-z_][A-Za-z0-9_]*`"
)]
pub struct InvalidKind {
    /// The rejected identifier.
    pub name: String,
}

/// The lexicon declares no entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("the lexicon is empty; the combined pattern needs at least one fragment")]
pub struct EmptyLexicon;

/// The lexicon declares the same kind more than once.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("the kind `{kind}` is declared more than once in the lexicon")]
pub struct DuplicateKind {
    /// The kind that was declared more than once.
    pub kind: Kind,
}

/// A fragment is not a valid pattern on its own.
#[derive(Debug, Clone, Error)]
#[error("the fragment of `{kind}` is not a valid pattern")]
pub struct MalformedFragment {
    /// The kind whose fragment was rejected.
    pub kind: Kind,

    /// The rejection reported by the pattern engine.
    #[source]
    pub error: regex::Error,
}

/// Every fragment is valid on its own, but the combined alternation was
/// rejected by the pattern engine.
///
/// This happens when fragments interfere with each other once spliced
/// together, most commonly a capture group inside a fragment sharing its
/// name with a declared kind.
#[derive(Debug, Clone, Error)]
#[error("the combined pattern was rejected by the pattern engine")]
pub struct MalformedCombinedPattern {
    /// The rejection reported by the pattern engine.
    #[source]
    pub error: regex::Error,
}

/// Is an enumeration containing all kinds of errors that can occur while
/// compiling a lexicon into a combined matcher.
#[derive(Debug, Clone, EnumAsInner, Error)]
#[allow(missing_docs)]
pub enum CompileError {
    #[error(transparent)]
    EmptyLexicon(#[from] EmptyLexicon),

    #[error(transparent)]
    DuplicateKind(#[from] DuplicateKind),

    #[error(transparent)]
    MalformedFragment(#[from] MalformedFragment),

    #[error(transparent)]
    MalformedCombinedPattern(#[from] MalformedCombinedPattern),
}

/// No lexicon entry matches the input at the given offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("no lexicon entry matches the input at byte {offset}")]
pub struct Unrecognized {
    /// The byte offset where the match attempt failed.
    pub offset: ByteIndex,
}

/// The winning fragment matched zero characters, which would keep the engine
/// from ever advancing past the offset.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("the fragment of `{kind}` matched zero characters at byte {offset}")]
pub struct ZeroLengthMatch {
    /// The byte offset where the zero-length match occurred.
    pub offset: ByteIndex,

    /// The kind whose fragment matched zero characters.
    pub kind: Kind,
}

/// Is an enumeration containing all kinds of errors that can occur while
/// tokenizing text.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, Error,
)]
#[allow(missing_docs)]
pub enum TokenizeError {
    #[error(transparent)]
    Unrecognized(#[from] Unrecognized),

    #[error(transparent)]
    ZeroLengthMatch(#[from] ZeroLengthMatch),
}

impl TokenizeError {
    /// Gets the byte offset where tokenization failed.
    #[must_use]
    pub const fn offset(&self) -> ByteIndex {
        match self {
            Self::Unrecognized(error) => error.offset,
            Self::ZeroLengthMatch(error) => error.offset,
        }
    }
}
