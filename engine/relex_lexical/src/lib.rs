//! This crate provides the tokenizer engine of relex. The engine compiles a
//! caller-supplied [`lexicon::Lexicon`] into one combined matcher and
//! converts input text into a stream of classified tokens.
//!
//! The final output of a [`tokenizer::Tokenizer::tokenize`] call is a
//! [`stream::TokenStream`], an ordered, cursor-navigable collection of
//! [`token::Token`]s for a downstream parser to consume.
//!
//! ```
//! use relex_lexical::{
//!     kind::Kind,
//!     lexicon::{Fragment, Lexicon},
//!     tokenizer::Tokenizer,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut lexicon = Lexicon::new();
//! lexicon
//!     .define(Kind::new("T_DOT")?, Fragment::literal("."))
//!     .define(Kind::new("T_STRING")?, Fragment::pattern(r"\w+"));
//!
//! let tokenizer = Tokenizer::new(&lexicon)?;
//! let mut stream = tokenizer.tokenize("a.b")?;
//!
//! let token = stream.next().unwrap();
//! assert_eq!(token.kind().as_str(), "T_STRING");
//! assert_eq!(token.text(), "a");
//! assert_eq!(token.position(), 0);
//! # Ok(())
//! # }
//! ```

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod kind;
pub mod lexicon;
pub mod pattern;
pub mod stream;
pub mod token;
pub mod tokenizer;
