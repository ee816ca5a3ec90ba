//! Contains the [`Tokenizer`] struct, the engine that converts input text
//! into a [`TokenStream`].

use getset::Getters;

use crate::{
    error::{CompileError, TokenizeError, Unrecognized, ZeroLengthMatch},
    lexicon::Lexicon,
    pattern::CompiledMatcher,
    stream::TokenStream,
    token::{Span, Token},
};

pub mod strategy;

/// The tokenizer engine: owns the matcher compiled from a [`Lexicon`] and
/// converts input text into [`TokenStream`]s.
///
/// The matcher is compiled exactly once, at construction, and reused across
/// every [`tokenize`](Self::tokenize) call; it is never regenerated
/// mid-tokenization. All per-call state (offset, emitted tokens) is local to
/// the call, so one tokenizer can serve many sequential calls, and
/// concurrent calls share nothing mutable.
#[derive(Debug, Clone, Getters)]
pub struct Tokenizer {
    /// The combined matcher compiled from the lexicon.
    #[get = "pub"]
    matcher: CompiledMatcher,
}

impl Tokenizer {
    /// Creates a new [`Tokenizer`] by compiling the given lexicon.
    ///
    /// # Errors
    ///
    /// [`CompileError`]: the lexicon could not be compiled into a combined
    /// matcher. Compilation errors are permanent; no tokenizer is ever
    /// produced from the offending lexicon.
    pub fn new(lexicon: &Lexicon) -> Result<Self, CompileError> {
        Ok(Self { matcher: CompiledMatcher::compile(lexicon)? })
    }

    /// The generated combined pattern, for diagnostics and tests.
    #[must_use]
    pub fn pattern(&self) -> &str { self.matcher.pattern() }

    /// Tokenizes the given text into a [`TokenStream`].
    ///
    /// Matching is anchored: every match attempt begins exactly at the
    /// current offset, and an offset no fragment matches at is an error, not
    /// a skip. The call either tokenizes the whole text or fails at the
    /// first offending offset; no partial stream is returned.
    ///
    /// # Errors
    ///
    /// - [`Unrecognized`]: no lexicon entry matches at the reported offset.
    /// - [`ZeroLengthMatch`]: the winning fragment matched zero characters,
    ///   which would keep the engine from ever advancing.
    pub fn tokenize(&self, text: &str) -> Result<TokenStream, TokenizeError> {
        let mut tokens = Vec::new();
        let mut offset = 0;

        while offset < text.len() {
            let Some((kind, matched)) = self.matcher.match_at(text, offset)
            else {
                return Err(Unrecognized { offset }.into());
            };

            if matched.is_empty() {
                return Err(
                    ZeroLengthMatch { offset, kind: kind.clone() }.into()
                );
            }

            tokens.push(Token::new(
                kind.clone(),
                matched.to_owned(),
                Span::new(offset, offset + matched.len()),
            ));

            offset += matched.len();
        }

        log::trace!(
            "tokenized {} bytes into {} tokens",
            text.len(),
            tokens.len()
        );

        Ok(TokenStream::new(tokens))
    }
}
