//! Contains the [`Kind`] type, the classification tag assigned to every
//! matched span.

use std::str::FromStr;

use crate::error::InvalidKind;

/// Checks if the given character is a valid first character of a kind
/// identifier.
fn is_first_kind_character(character: char) -> bool {
    character == '_' || character.is_ascii_alphabetic()
}

/// Checks if the given character is a valid character of a kind identifier.
fn is_kind_character(character: char) -> bool {
    character == '_' || character.is_ascii_alphanumeric()
}

/// The classification tag assigned to a matched span.
///
/// A [`Kind`] doubles as the name of the capture group its fragment is
/// wrapped in inside the combined pattern, so construction validates that the
/// identifier has the shape `[A-Za-z_][A-Za-z0-9_]*`. An identifier that
/// fails the validation can never end up in a
/// [`Lexicon`](crate::lexicon::Lexicon), which is what lets the pattern
/// compiler assume every kind names a well-formed group.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
)]
pub struct Kind(String);

impl Kind {
    /// Creates a new [`Kind`] from the given identifier.
    ///
    /// # Errors
    ///
    /// [`InvalidKind`]: the identifier is empty, starts with a character
    /// other than an ASCII letter or underscore, or contains a character
    /// other than ASCII alphanumerics and underscores.
    pub fn new(identifier: impl Into<String>) -> Result<Self, InvalidKind> {
        let identifier = identifier.into();

        let mut characters = identifier.chars();
        let valid = characters.next().is_some_and(is_first_kind_character)
            && characters.all(is_kind_character);

        if valid {
            Ok(Self(identifier))
        } else {
            Err(InvalidKind { name: identifier })
        }
    }

    /// Returns the identifier of this kind.
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl FromStr for Kind {
    type Err = InvalidKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::new(s) }
}

impl AsRef<str> for Kind {
    fn as_ref(&self) -> &str { &self.0 }
}

#[cfg(test)]
mod tests;
