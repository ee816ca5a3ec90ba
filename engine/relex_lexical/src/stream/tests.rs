use super::TokenStream;
use crate::{
    kind::Kind,
    token::{Span, Token},
};

fn kind(identifier: &str) -> Kind { Kind::new(identifier).unwrap() }

fn sample_stream() -> TokenStream {
    TokenStream::new(vec![
        Token::new(kind("T_STRING"), "a".to_owned(), Span::new(0, 1)),
        Token::new(kind("T_DOT"), ".".to_owned(), Span::new(1, 2)),
        Token::new(kind("T_STRING"), "b".to_owned(), Span::new(2, 3)),
    ])
}

#[test]
fn cursor_walks_the_stream_in_order() {
    let mut stream = sample_stream();

    assert_eq!(stream.peek().unwrap().text(), "a");
    assert_eq!(stream.next().unwrap().text(), "a");
    assert_eq!(stream.next().unwrap().text(), ".");
    assert_eq!(stream.next().unwrap().text(), "b");

    assert!(stream.next().is_none());
    assert!(stream.peek().is_none());
    assert_eq!(stream.cursor(), 3);
}

#[test]
fn rewind_replays_tokens() {
    let mut stream = sample_stream();

    for _ in 0..3 {
        assert!(stream.next().is_some());
    }
    assert!(stream.next().is_none());

    stream.rewind(1);
    assert_eq!(stream.next().unwrap().text(), "b");

    // rewinding past the start clamps at the first token
    stream.rewind(10);
    assert_eq!(stream.cursor(), 0);
    assert_eq!(stream.next().unwrap().text(), "a");
}

#[test]
fn reset_restarts_consumption() {
    let mut stream = sample_stream();

    assert!(stream.next().is_some());
    assert!(stream.next().is_some());

    stream.reset();

    assert_eq!(stream.cursor(), 0);
    assert_eq!(stream.next().unwrap().text(), "a");
}

#[test]
fn random_access_leaves_the_cursor_alone() {
    let mut stream = sample_stream();
    assert!(stream.next().is_some());

    assert_eq!(stream.len(), 3);
    assert!(!stream.is_empty());
    assert_eq!(stream[2].text(), "b");
    assert_eq!(stream.get(0).unwrap().text(), "a");
    assert!(stream.get(3).is_none());

    assert_eq!(stream.cursor(), 1);
}

#[test]
fn size_hint_reports_the_remaining_tokens() {
    let mut stream = sample_stream();
    assert_eq!(stream.size_hint(), (3, Some(3)));

    assert!(stream.next().is_some());
    assert_eq!(stream.size_hint(), (2, Some(2)));
}
