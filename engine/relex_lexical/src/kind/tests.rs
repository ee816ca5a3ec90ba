use std::str::FromStr;

use super::Kind;

#[test]
fn accepts_group_name_shaped_identifiers() {
    for identifier in ["T_STRING", "_private", "a", "Word2"] {
        let kind = Kind::new(identifier).unwrap();
        assert_eq!(kind.as_str(), identifier);
        assert_eq!(kind.to_string(), identifier);
    }
}

#[test]
fn rejects_identifiers_unusable_as_group_names() {
    for identifier in ["", "1st", "T-DOT", "T DOT", "dót", "a."] {
        let error = Kind::new(identifier).unwrap_err();
        assert_eq!(error.name, identifier);
    }
}

#[test]
fn parses_from_strings() {
    assert_eq!(Kind::from_str("T_DOT").unwrap().as_str(), "T_DOT");
    assert!(Kind::from_str("#").is_err());
}
