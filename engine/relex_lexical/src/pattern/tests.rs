use super::CompiledMatcher;
use crate::{
    kind::Kind,
    lexicon::{Fragment, Lexicon},
};

fn kind(identifier: &str) -> Kind { Kind::new(identifier).unwrap() }

#[test]
fn rejects_an_empty_lexicon() {
    let error = CompiledMatcher::compile(&Lexicon::new()).unwrap_err();
    assert!(error.is_empty_lexicon());
}

#[test]
fn rejects_duplicate_kinds() {
    let mut lexicon = Lexicon::new();
    lexicon
        .define(kind("T_DOT"), Fragment::literal("."))
        .define(kind("T_DOT"), Fragment::pattern(r"\."));

    let error = CompiledMatcher::compile(&lexicon).unwrap_err();
    assert_eq!(error.into_duplicate_kind().unwrap().kind, kind("T_DOT"));
}

#[test]
fn attributes_a_malformed_fragment_to_its_kind() {
    let mut lexicon = Lexicon::new();
    lexicon
        .define(kind("T_GOOD"), Fragment::pattern(r"\w+"))
        .define(kind("T_BAD"), Fragment::pattern("("));

    let error = CompiledMatcher::compile(&lexicon).unwrap_err();
    assert_eq!(error.into_malformed_fragment().unwrap().kind, kind("T_BAD"));
}

#[test]
fn rejects_a_fragment_group_colliding_with_a_kind() {
    let mut lexicon = Lexicon::new();
    lexicon
        .define(kind("T_INNER"), Fragment::pattern(r"\d+"))
        .define(kind("T_OUTER"), Fragment::pattern("(?P<T_INNER>x)"));

    let error = CompiledMatcher::compile(&lexicon).unwrap_err();
    assert!(error.is_malformed_combined_pattern());
}

#[test]
fn match_attempts_are_anchored() {
    let mut lexicon = Lexicon::new();
    lexicon.define(kind("T_B"), Fragment::literal("b"));

    let matcher = CompiledMatcher::compile(&lexicon).unwrap();

    // `b` occurs at offset 1, but an anchored attempt at offset 0 must not
    // search forward to find it
    assert!(matcher.match_at("ab", 0).is_none());

    let (matched_kind, text) = matcher.match_at("ab", 1).unwrap();
    assert_eq!(matched_kind, &kind("T_B"));
    assert_eq!(text, "b");
}

#[test]
fn resolves_the_winning_kind_by_declaration_order() {
    let mut lexicon = Lexicon::new();
    lexicon
        .define(kind("T_A"), Fragment::literal("a"))
        .define(kind("T_WORD"), Fragment::pattern(r"\w+"));

    let matcher = CompiledMatcher::compile(&lexicon).unwrap();

    let (matched_kind, text) = matcher.match_at("aa", 0).unwrap();
    assert_eq!(matched_kind, &kind("T_A"));
    assert_eq!(text, "a");
}

#[test]
fn escapes_literal_fragments() {
    let mut lexicon = Lexicon::new();
    lexicon.define(kind("T_DOT"), Fragment::literal("."));

    let matcher = CompiledMatcher::compile(&lexicon).unwrap();

    assert_eq!(matcher.pattern(), r"\A(?:(?P<T_DOT>\.))");
    assert!(matcher.match_at("x", 0).is_none());
    assert!(matcher.match_at(".", 0).is_some());
}

#[test]
fn keeps_the_kinds_in_priority_order() {
    let mut lexicon = Lexicon::new();
    lexicon
        .define(kind("T_DOT"), Fragment::literal("."))
        .define(kind("T_HASH"), Fragment::literal("#"))
        .define(kind("T_STRING"), Fragment::pattern(r"\w+"));

    let matcher = CompiledMatcher::compile(&lexicon).unwrap();

    let kinds: Vec<_> =
        matcher.kinds().iter().map(Kind::as_str).collect();
    assert_eq!(kinds, ["T_DOT", "T_HASH", "T_STRING"]);
}
