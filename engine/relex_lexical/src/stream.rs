//! Contains the [`TokenStream`] struct, the ordered, cursor-navigable
//! collection of tokens produced by one tokenize call.

use std::ops::Index;

use derive_more::Deref;
use getset::CopyGetters;

use crate::token::Token;

/// An ordered collection of [`Token`]s plus a cursor for sequential
/// consumption.
///
/// The token sequence is fixed once tokenization finishes; only the cursor
/// moves, and it always stays within `0..=len`. Random access and
/// structural queries go through the deref to the underlying token slice
/// (`get`, `len`, `is_empty`, `iter`) and leave the cursor untouched.
///
/// Sequential consumption is the [`Iterator`] implementation: `next`
/// returns the token at the cursor and advances by one,
/// [`peek`](Self::peek) looks at it without advancing, and
/// [`rewind`](Self::rewind) moves the cursor back for lookahead-driven
/// backtracking by a downstream parser. Because the cursor can be rewound,
/// the iterator is deliberately not fused: `next` produces tokens again
/// after having returned [`None`] once the cursor moves back.
///
/// A stream is meant for a single consumer; sharing one across threads
/// requires external synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Deref, CopyGetters)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,

    /// The current cursor position.
    #[get_copy = "pub"]
    cursor: usize,
}

impl TokenStream {
    /// Creates a new stream over the given tokens with the cursor at the
    /// start.
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Returns the token at the cursor without advancing; [`None`] once the
    /// cursor is at the end.
    #[must_use]
    pub fn peek(&self) -> Option<&Token> { self.tokens.get(self.cursor) }

    /// Moves the cursor back by `n` tokens, clamped at the start.
    pub fn rewind(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    /// Moves the cursor back to the start, making the stream consumable
    /// again from the first token.
    pub fn reset(&mut self) { self.cursor = 0; }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.cursor)?.clone();
        self.cursor += 1;

        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tokens.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}

#[cfg(test)]
mod tests;
