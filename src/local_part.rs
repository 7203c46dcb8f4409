//! Local part type: the principal name before `@`.

use std::fmt;
use std::str::FromStr;

use crate::constants::{LOCAL_PART_FORBIDDEN_CHARS, MAX_PART_LENGTH};
use crate::error::LocalPartError;

/// A validated local part of an address.
///
/// Local parts are arbitrary UTF-8 of at most 1023 bytes that do not contain
/// any of `" & ' / : < > @`. No case folding is applied.
///
/// # Examples
///
/// ```
/// use xmpp_address::LocalPart;
///
/// let local = LocalPart::parse("juliet").unwrap();
/// assert_eq!(local.as_str(), "juliet");
///
/// assert!(LocalPart::parse("jul:iet").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalPart(String);

impl LocalPart {
    /// Parses a local part from a string.
    ///
    /// # Errors
    ///
    /// Returns `LocalPartError` if:
    /// - The input exceeds 1023 bytes
    /// - The input contains a forbidden character
    pub fn parse(input: &str) -> Result<Self, LocalPartError> {
        Self::from_bytes(input.as_bytes())
    }

    /// Parses a local part from raw bytes.
    ///
    /// The length limit is checked before the encoding, so oversized input
    /// is rejected as too long even when it is also invalid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `LocalPartError` if:
    /// - The input exceeds 1023 bytes
    /// - The input is not valid UTF-8
    /// - The input contains a forbidden character
    pub fn from_bytes(input: &[u8]) -> Result<Self, LocalPartError> {
        if input.len() > MAX_PART_LENGTH {
            return Err(LocalPartError::TooLong {
                max: MAX_PART_LENGTH,
                actual: input.len(),
            });
        }

        let s = std::str::from_utf8(input).map_err(|e| LocalPartError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;

        for (i, c) in s.chars().enumerate() {
            if !Self::is_valid_char(c) {
                return Err(LocalPartError::NotAllowedChar { char: c, position: i });
            }
        }

        Ok(Self(s.to_string()))
    }

    /// Returns the local part as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the character may appear in a local part.
    #[must_use]
    pub fn is_valid_char(c: char) -> bool {
        !LOCAL_PART_FORBIDDEN_CHARS.contains(&c)
    }
}

impl fmt::Display for LocalPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocalPart {
    type Err = LocalPartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for LocalPart {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LocalPart {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LocalPart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_local() {
        let local = LocalPart::parse("user.name").unwrap();
        assert_eq!(local.as_str(), "user.name");
    }

    #[test]
    fn case_is_preserved() {
        let local = LocalPart::parse("MixedCase").unwrap();
        assert_eq!(local.as_str(), "MixedCase");
    }

    #[test]
    fn unicode_is_accepted() {
        let local = LocalPart::parse("δοκιμή").unwrap();
        assert_eq!(local.as_str(), "δοκιμή");
    }

    #[test]
    fn each_forbidden_char_fails() {
        for c in LOCAL_PART_FORBIDDEN_CHARS {
            let input = format!("us{c}er");
            let result = LocalPart::parse(&input);
            assert_eq!(
                result,
                Err(LocalPartError::NotAllowedChar { char: c, position: 2 }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn position_counts_chars_not_bytes() {
        let result = LocalPart::parse("ñañ<");
        assert!(matches!(
            result,
            Err(LocalPartError::NotAllowedChar { char: '<', position: 3 })
        ));
    }

    #[test]
    fn parse_at_max_length() {
        let input = "a".repeat(MAX_PART_LENGTH);
        assert!(LocalPart::parse(&input).is_ok());
    }

    #[test]
    fn parse_too_long_fails() {
        let input = "a".repeat(MAX_PART_LENGTH + 1);
        let result = LocalPart::parse(&input);
        assert!(matches!(
            result,
            Err(LocalPartError::TooLong { max: 1023, actual: 1024 })
        ));
    }

    #[test]
    fn length_is_checked_before_characters() {
        let input = "<".repeat(MAX_PART_LENGTH + 1);
        let result = LocalPart::parse(&input);
        assert!(matches!(result, Err(LocalPartError::TooLong { .. })));
    }

    #[test]
    fn invalid_utf8_fails() {
        let result = LocalPart::from_bytes(b"ab\xffcd");
        assert_eq!(result, Err(LocalPartError::InvalidUtf8 { valid_up_to: 2 }));
    }

    #[test]
    fn length_is_checked_before_encoding() {
        let input = vec![0xff; MAX_PART_LENGTH + 1];
        let result = LocalPart::from_bytes(&input);
        assert!(matches!(result, Err(LocalPartError::TooLong { .. })));
    }
}
