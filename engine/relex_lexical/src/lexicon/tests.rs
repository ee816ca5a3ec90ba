use super::{Fragment, Lexicon};
use crate::kind::Kind;

fn kind(identifier: &str) -> Kind { Kind::new(identifier).unwrap() }

#[test]
fn preserves_declaration_order() {
    let mut lexicon = Lexicon::new();
    lexicon
        .define(kind("T_DOT"), Fragment::literal("."))
        .define(kind("T_STRING"), Fragment::pattern(r"\w+"));

    let kinds: Vec<_> =
        lexicon.iter().map(|(kind, _)| kind.as_str()).collect();

    assert_eq!(kinds, ["T_DOT", "T_STRING"]);
    assert_eq!(lexicon.len(), 2);
    assert!(!lexicon.is_empty());
}

#[test]
fn collects_from_pairs() {
    let lexicon: Lexicon = [
        (kind("T_DOT"), Fragment::literal(".")),
        (kind("T_STRING"), Fragment::pattern(r"\w+")),
    ]
    .into_iter()
    .collect();

    assert_eq!(lexicon.len(), 2);

    let mut extended = lexicon;
    extended.extend([(kind("T_HASH"), Fragment::literal("#"))]);
    assert_eq!(extended.len(), 3);
}

#[test]
fn escapes_literals_into_pattern_text() {
    assert_eq!(Fragment::literal("a.b").to_pattern(), r"a\.b");
    assert_eq!(Fragment::pattern(r"\w+").to_pattern(), r"\w+");

    assert!(Fragment::literal(".").is_literal());
    assert!(Fragment::pattern(r"\.").is_pattern());
}
