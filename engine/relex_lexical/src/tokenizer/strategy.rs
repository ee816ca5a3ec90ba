#![allow(missing_docs)]

use std::fmt::{Display, Formatter, Write};

use lazy_static::lazy_static;
use proptest::{
    prelude::Arbitrary,
    prop_assert_eq, prop_oneof,
    strategy::{BoxedStrategy, Strategy},
    test_runner::TestCaseResult,
};
use relex_test_input::Input;

use crate::{
    kind::Kind,
    lexicon::{Fragment, Lexicon},
    stream::TokenStream,
};

/// The punctuation characters the reference lexicon declares, each under its
/// own kind.
pub const PUNCTUATIONS: [char; 7] = ['.', '#', ':', ';', '=', '(', ')'];

fn kind(identifier: &str) -> Kind {
    Kind::new(identifier).expect("reference kind identifiers are valid")
}

fn punctuation_kind(punctuation: char) -> &'static str {
    match punctuation {
        '.' => "T_DOT",
        '#' => "T_HASH",
        ':' => "T_COLON",
        ';' => "T_SEMICOLON",
        '=' => "T_EQUALS",
        '(' => "T_OPEN_PARENTHESIS",
        ')' => "T_CLOSE_PARENTHESIS",
        _ => unreachable!("not a reference punctuation"),
    }
}

lazy_static! {
    /// A lexicon shaped the way template languages declare theirs:
    /// whitespace and punctuation first, the broad word fragment last.
    pub static ref REFERENCE_LEXICON: Lexicon = {
        let mut lexicon = Lexicon::new();
        lexicon.define(kind("T_WHITESPACE"), Fragment::pattern(r"\s+"));

        for punctuation in PUNCTUATIONS {
            lexicon.define(
                kind(punctuation_kind(punctuation)),
                Fragment::literal(punctuation.to_string()),
            );
        }

        lexicon.define(kind("T_STRING"), Fragment::pattern(r"\w+"));
        lexicon
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Punctuation {
    pub punctuation: char,
}

impl Display for Punctuation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.punctuation)
    }
}

impl Arbitrary for Punctuation {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        proptest::sample::select(&PUNCTUATIONS[..])
            .prop_map(|punctuation| Self { punctuation })
            .boxed()
    }
}

impl Input<&crate::token::Token> for &Punctuation {
    fn assert(self, output: &crate::token::Token) -> TestCaseResult {
        prop_assert_eq!(
            output.kind().as_str(),
            punctuation_kind(self.punctuation)
        );
        prop_assert_eq!(output.text(), &self.punctuation.to_string());

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    pub word: String,
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.word)
    }
}

impl Arbitrary for Word {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        "[A-Za-z0-9_]{1,12}".prop_map(|word| Self { word }).boxed()
    }
}

impl Input<&crate::token::Token> for &Word {
    fn assert(self, output: &crate::token::Token) -> TestCaseResult {
        prop_assert_eq!(output.kind().as_str(), "T_STRING");
        prop_assert_eq!(output.text(), &self.word);

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WhiteSpaces {
    pub spaces: String,
}

impl Display for WhiteSpaces {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.spaces)
    }
}

impl Arbitrary for WhiteSpaces {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        "[ \t\n]{1,4}".prop_map(|spaces| Self { spaces }).boxed()
    }
}

impl Input<&crate::token::Token> for &WhiteSpaces {
    fn assert(self, output: &crate::token::Token) -> TestCaseResult {
        prop_assert_eq!(output.kind().as_str(), "T_WHITESPACE");
        prop_assert_eq!(output.text(), &self.spaces);

        Ok(())
    }
}

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::From,
)]
pub enum Token {
    WhiteSpaces(WhiteSpaces),
    Punctuation(Punctuation),
    Word(Word),
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WhiteSpaces(input) => Display::fmt(input, f),
            Self::Punctuation(input) => Display::fmt(input, f),
            Self::Word(input) => Display::fmt(input, f),
        }
    }
}

impl Arbitrary for Token {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            WhiteSpaces::arbitrary().prop_map(Self::WhiteSpaces),
            Punctuation::arbitrary().prop_map(Self::Punctuation),
            Word::arbitrary().prop_map(Self::Word),
        ]
        .boxed()
    }
}

impl Input<&crate::token::Token> for &Token {
    fn assert(self, output: &crate::token::Token) -> TestCaseResult {
        match self {
            Token::WhiteSpaces(input) => input.assert(output),
            Token::Punctuation(input) => input.assert(output),
            Token::Word(input) => input.assert(output),
        }
    }
}

/// Checks whether rendering `next` directly after `previous` would fuse the
/// two into one longer match of the same kind.
fn merges(previous: &Token, next: &Token) -> bool {
    matches!(
        (previous, next),
        (Token::Word(_), Token::Word(_))
            | (Token::WhiteSpaces(_), Token::WhiteSpaces(_))
    )
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Deref,
)]
pub struct TokenSequence {
    #[deref]
    pub tokens: Vec<Token>,
}

impl Display for TokenSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            Display::fmt(token, f)?;
        }

        Ok(())
    }
}

impl Arbitrary for TokenSequence {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        proptest::collection::vec(Token::arbitrary(), 0..24)
            .prop_map(|tokens| {
                // adjacent words (or whitespace runs) would re-tokenize as
                // one longer token, so drop the offenders
                let mut kept: Vec<Token> = Vec::new();

                for token in tokens {
                    if kept.last().is_some_and(|last| merges(last, &token)) {
                        continue;
                    }

                    kept.push(token);
                }

                Self { tokens: kept }
            })
            .boxed()
    }
}

impl Input<&TokenStream> for &TokenSequence {
    fn assert(self, output: &TokenStream) -> TestCaseResult {
        self.tokens.as_slice().assert(output.as_slice())?;

        let mut offset = 0;
        for token in output.as_slice() {
            prop_assert_eq!(token.position(), offset);
            offset += token.text().len();
        }

        Ok(())
    }
}
