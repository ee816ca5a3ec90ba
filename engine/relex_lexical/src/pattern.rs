//! Contains the [`CompiledMatcher`] struct, the combined alternation pattern
//! a [`Tokenizer`](crate::tokenizer::Tokenizer) matches with.

use std::collections::HashSet;

use getset::Getters;
use itertools::Itertools;
use regex::Regex;

use crate::{
    error::{
        CompileError, DuplicateKind, EmptyLexicon, MalformedCombinedPattern,
        MalformedFragment,
    },
    kind::Kind,
    lexicon::Lexicon,
    token::ByteIndex,
};

/// The single combined matcher compiled from a [`Lexicon`].
///
/// Every fragment is wrapped in a capture group named after its kind and the
/// alternatives are joined in declaration order, so the pattern engine's
/// leftmost-first alternation realizes the lexicon's first-declared-wins
/// priority. The whole alternation is anchored: a match attempt begins
/// exactly at the requested offset and never searches ahead.
///
/// A matcher is compiled once per tokenizer and reused across every
/// tokenize call; it holds no mutable state.
#[derive(Debug, Clone, Getters)]
pub struct CompiledMatcher {
    regex: Regex,

    /// The kinds of the lexicon the matcher was compiled from, in priority
    /// order.
    #[get = "pub"]
    kinds: Vec<Kind>,

    /// The generated combined pattern.
    ///
    /// This is a diagnostic view for debugging and tests; the engine never
    /// consults it.
    #[get = "pub"]
    pattern: String,
}

impl CompiledMatcher {
    /// Compiles the given lexicon into a single combined matcher.
    ///
    /// # Errors
    ///
    /// - [`EmptyLexicon`]: the lexicon declares no entries.
    /// - [`DuplicateKind`]: a kind is declared more than once.
    /// - [`MalformedFragment`]: a fragment is not a valid pattern on its
    ///   own.
    /// - [`MalformedCombinedPattern`]: the fragments are valid in isolation
    ///   but the combined alternation was rejected by the pattern engine.
    pub fn compile(lexicon: &Lexicon) -> Result<Self, CompileError> {
        if lexicon.is_empty() {
            return Err(EmptyLexicon.into());
        }

        let mut seen = HashSet::new();
        for (kind, fragment) in lexicon {
            if !seen.insert(kind) {
                return Err(DuplicateKind { kind: kind.clone() }.into());
            }

            // Attributes a syntax error to the entry that caused it rather
            // than to the combined pattern.
            if let Err(error) =
                Regex::new(&format!("(?:{})", fragment.to_pattern()))
            {
                return Err(
                    MalformedFragment { kind: kind.clone(), error }.into()
                );
            }
        }

        let pattern = format!(
            r"\A(?:{})",
            lexicon
                .iter()
                .map(|(kind, fragment)| format!(
                    "(?P<{kind}>{})",
                    fragment.to_pattern()
                ))
                .join("|")
        );

        let regex = Regex::new(&pattern)
            .map_err(|error| MalformedCombinedPattern { error })?;

        log::debug!(
            "compiled a lexicon of {} kinds into `{pattern}`",
            lexicon.len()
        );

        Ok(Self {
            regex,
            kinds: lexicon.iter().map(|(kind, _)| kind.clone()).collect(),
            pattern,
        })
    }

    /// Attempts a match starting exactly at `offset` and returns the winning
    /// kind along with the matched text.
    ///
    /// The winning kind is the first-declared kind whose group participated
    /// in the match. Returns [`None`] if no fragment matches at `offset`;
    /// the matcher never searches past the offset for a later match.
    pub(crate) fn match_at<'t>(
        &self,
        text: &'t str,
        offset: ByteIndex,
    ) -> Option<(&Kind, &'t str)> {
        let captures = self.regex.captures(&text[offset..])?;

        self.kinds.iter().find_map(|kind| {
            captures.name(kind.as_str()).map(|found| (kind, found.as_str()))
        })
    }
}

#[cfg(test)]
mod tests;
