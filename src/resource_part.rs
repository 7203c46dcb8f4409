//! Resource part type for addressing a specific session.

use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_PART_LENGTH;
use crate::error::ResourcePartError;

/// A validated resource part of an address.
///
/// The resource identifies one endpoint or session under a local/domain
/// pair. Any UTF-8 of at most 1023 bytes is accepted, including `@` and `/`.
///
/// # Examples
///
/// ```
/// use xmpp_address::ResourcePart;
///
/// let res = ResourcePart::parse("balcony").unwrap();
/// assert_eq!(res.as_str(), "balcony");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourcePart(String);

impl ResourcePart {
    /// Parses a resource part from a string.
    ///
    /// # Errors
    ///
    /// Returns `ResourcePartError::TooLong` if the input exceeds 1023 bytes.
    pub fn parse(input: &str) -> Result<Self, ResourcePartError> {
        Self::from_bytes(input.as_bytes())
    }

    /// Parses a resource part from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `ResourcePartError` if the input exceeds 1023 bytes or is not
    /// valid UTF-8, checked in that order.
    pub fn from_bytes(input: &[u8]) -> Result<Self, ResourcePartError> {
        if input.len() > MAX_PART_LENGTH {
            return Err(ResourcePartError::TooLong {
                max: MAX_PART_LENGTH,
                actual: input.len(),
            });
        }

        let s = std::str::from_utf8(input).map_err(|e| ResourcePartError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;

        Ok(Self(s.to_string()))
    }

    /// Returns the resource as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourcePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ResourcePart {
    type Err = ResourcePartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ResourcePart {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ResourcePart {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ResourcePart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
