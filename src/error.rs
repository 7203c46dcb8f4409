//! Error types for address parsing and construction.

use std::fmt;

use thiserror::Error;

/// The part of an address an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The local part, before `@`
    Local,
    /// The domain part
    Domain,
    /// The resource part, after `/`
    Resource,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Local => "local",
            Self::Domain => "domain",
            Self::Resource => "resource",
        })
    }
}

/// Errors that can occur when parsing an address from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse address '{input}': {kind}")]
pub struct ParseError {
    /// The input that failed to parse (lossily decoded if it was not UTF-8)
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Input is empty
    #[error("address is empty")]
    AddressIsEmpty,
    /// Input starts with `@`
    #[error("missing local part before '@'")]
    MissingLocalPart,
    /// Nothing follows the last `@`, or there is no domain at all
    #[error("missing domain part")]
    MissingDomainPart,
    /// Input ends with `/`
    #[error("missing resource part after '/'")]
    MissingResourcePart,
    /// Local part normalization failed
    #[error("invalid local part: {0}")]
    InvalidLocal(LocalPartError),
    /// Domain part normalization failed
    #[error("invalid domain part: {0}")]
    InvalidDomain(DomainPartError),
    /// Resource part normalization failed
    #[error("invalid resource part: {0}")]
    InvalidResource(ResourcePartError),
}

impl ParseErrorKind {
    /// Returns the part this error concerns, or `None` for an empty address.
    #[must_use]
    pub const fn part(&self) -> Option<Part> {
        match self {
            Self::AddressIsEmpty => None,
            Self::MissingLocalPart | Self::InvalidLocal(_) => Some(Part::Local),
            Self::MissingDomainPart | Self::InvalidDomain(_) => Some(Part::Domain),
            Self::MissingResourcePart | Self::InvalidResource(_) => Some(Part::Resource),
        }
    }

    /// Returns true if a part was not valid UTF-8.
    #[must_use]
    pub const fn is_invalid_utf8(&self) -> bool {
        matches!(
            self,
            Self::InvalidLocal(LocalPartError::InvalidUtf8 { .. })
                | Self::InvalidDomain(DomainPartError::InvalidUtf8 { .. })
                | Self::InvalidResource(ResourcePartError::InvalidUtf8 { .. })
        )
    }

    /// Returns true if a part exceeded [`MAX_PART_LENGTH`](crate::MAX_PART_LENGTH).
    #[must_use]
    pub const fn is_too_long(&self) -> bool {
        matches!(
            self,
            Self::InvalidLocal(LocalPartError::TooLong { .. })
                | Self::InvalidDomain(DomainPartError::TooLong { .. })
                | Self::InvalidResource(ResourcePartError::TooLong { .. })
        )
    }

    /// Returns true if the local part contained a forbidden character.
    #[must_use]
    pub const fn is_not_allowed_char(&self) -> bool {
        matches!(self, Self::InvalidLocal(LocalPartError::NotAllowedChar { .. }))
    }
}

impl From<BuilderError> for ParseErrorKind {
    fn from(e: BuilderError) -> Self {
        match e {
            BuilderError::MissingDomainPart => Self::MissingDomainPart,
            BuilderError::InvalidLocal(e) => Self::InvalidLocal(e),
            BuilderError::InvalidDomain(e) => Self::InvalidDomain(e),
            BuilderError::InvalidResource(e) => Self::InvalidResource(e),
        }
    }
}

/// Errors for constructing an address from explicit parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// Domain was empty
    #[error("missing domain part")]
    MissingDomainPart,
    /// Local part normalization failed
    #[error("invalid local part: {0}")]
    InvalidLocal(LocalPartError),
    /// Domain part normalization failed
    #[error("invalid domain part: {0}")]
    InvalidDomain(DomainPartError),
    /// Resource part normalization failed
    #[error("invalid resource part: {0}")]
    InvalidResource(ResourcePartError),
}

impl BuilderError {
    /// Returns the part this error concerns.
    #[must_use]
    pub const fn part(&self) -> Part {
        match self {
            Self::InvalidLocal(_) => Part::Local,
            Self::MissingDomainPart | Self::InvalidDomain(_) => Part::Domain,
            Self::InvalidResource(_) => Part::Resource,
        }
    }
}

/// Errors for local part normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalPartError {
    /// Local part exceeds maximum length
    #[error("local part length {actual} exceeds maximum {max} bytes")]
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Local part is not valid UTF-8
    #[error("local part is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the valid UTF-8 prefix
        valid_up_to: usize,
    },
    /// Local part contains a forbidden character
    #[error(
        "character '{char}' at position {position} is not allowed; local parts cannot contain \" & ' / : < > @"
    )]
    NotAllowedChar {
        /// The forbidden character
        char: char,
        /// Position in the input, in characters
        position: usize,
    },
}

/// Errors for domain part normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainPartError {
    /// Domain is empty after normalization
    #[error("domain part cannot be empty")]
    Empty,
    /// Domain is not valid UTF-8
    #[error("domain part is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the valid UTF-8 prefix
        valid_up_to: usize,
    },
    /// Internationalized domain conversion failed
    #[error("domain '{domain}' cannot be converted to its internationalized display form: {reason}")]
    Idna {
        /// The domain that failed conversion
        domain: String,
        /// Message of the underlying conversion error
        reason: String,
    },
    /// Domain exceeds maximum length after normalization
    #[error("domain part length {actual} exceeds maximum {max} bytes")]
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
}

/// Errors for resource part normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourcePartError {
    /// Resource exceeds maximum length
    #[error("resource part length {actual} exceeds maximum {max} bytes")]
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Resource is not valid UTF-8
    #[error("resource part is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the valid UTF-8 prefix
        valid_up_to: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_names_input_and_part() {
        let err = ParseError {
            input: "us<er@example.com".to_string(),
            kind: ParseErrorKind::InvalidLocal(LocalPartError::NotAllowedChar {
                char: '<',
                position: 2,
            }),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("failed to parse address 'us<er@example.com': invalid local part"));
        assert!(msg.contains("'<' at position 2"));
    }

    #[test]
    fn kind_reports_rejected_part() {
        assert_eq!(ParseErrorKind::AddressIsEmpty.part(), None);
        assert_eq!(ParseErrorKind::MissingLocalPart.part(), Some(Part::Local));
        assert_eq!(ParseErrorKind::MissingDomainPart.part(), Some(Part::Domain));
        assert_eq!(ParseErrorKind::MissingResourcePart.part(), Some(Part::Resource));
        assert_eq!(
            ParseErrorKind::InvalidResource(ResourcePartError::InvalidUtf8 { valid_up_to: 0 })
                .part(),
            Some(Part::Resource)
        );
    }

    #[test]
    fn taxonomy_predicates() {
        let too_long = ParseErrorKind::InvalidDomain(DomainPartError::TooLong {
            max: 1023,
            actual: 1024,
        });
        assert!(too_long.is_too_long());
        assert!(!too_long.is_invalid_utf8());

        let utf8 = ParseErrorKind::InvalidLocal(LocalPartError::InvalidUtf8 { valid_up_to: 3 });
        assert!(utf8.is_invalid_utf8());
        assert!(!utf8.is_not_allowed_char());
    }

    #[test]
    fn builder_error_converts_to_parse_kind() {
        let kind: ParseErrorKind = BuilderError::MissingDomainPart.into();
        assert_eq!(kind, ParseErrorKind::MissingDomainPart);

        let kind: ParseErrorKind = BuilderError::InvalidDomain(DomainPartError::Empty).into();
        assert_eq!(kind, ParseErrorKind::InvalidDomain(DomainPartError::Empty));
        assert_eq!(BuilderError::InvalidDomain(DomainPartError::Empty).part(), Part::Domain);
    }

    #[test]
    fn part_display() {
        assert_eq!(Part::Local.to_string(), "local");
        assert_eq!(Part::Domain.to_string(), "domain");
        assert_eq!(Part::Resource.to_string(), "resource");
    }
}
