//! Main address type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::constants::{LOCAL_SEPARATOR, RESOURCE_SEPARATOR};
use crate::decompose::decompose;
use crate::domain_part::DomainPart;
use crate::error::{BuilderError, ParseError, ParseErrorKind, ResourcePartError};
use crate::local_part::LocalPart;
use crate::resource_part::ResourcePart;

/// A parsed, validated and normalized address.
///
/// # Structure
///
/// ```text
/// [local "@"] domain ["/" resource]
/// ```
///
/// Every part has been normalized by the time an `Address` exists, so two
/// addresses are equal exactly when their normalized parts are equal.
///
/// # Examples
///
/// ```
/// use xmpp_address::Address;
///
/// let addr = Address::parse("juliet@Example.COM./balcony").unwrap();
/// assert_eq!(addr.local().map(|l| l.as_str()), Some("juliet"));
/// assert_eq!(addr.domain().as_str(), "example.com");
/// assert_eq!(addr.resource().map(|r| r.as_str()), Some("balcony"));
/// assert_eq!(addr.to_string(), "juliet@example.com/balcony");
///
/// assert_eq!(addr.bare().to_string(), "juliet@example.com");
/// assert_eq!(addr.domain_only().to_string(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    local: Option<LocalPart>,
    domain: DomainPart,
    resource: Option<ResourcePart>,
    /// Canonical string representation
    normalized: String,
}

impl Address {
    /// Parses an address from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is empty
    /// - The input starts with `@`, or has nothing after the last `@`
    /// - The input ends with `/`
    /// - Any part fails normalization
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_bytes(input.as_bytes())
    }

    /// Parses an address from raw bytes, reporting invalid UTF-8 per part.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for the same reasons as [`Address::parse`], and
    /// when a part is not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_address::Address;
    ///
    /// let err = Address::parse_bytes(b"user@example.com/\xff").unwrap_err();
    /// assert!(err.kind.is_invalid_utf8());
    /// ```
    pub fn parse_bytes(input: &[u8]) -> Result<Self, ParseError> {
        match Self::parse_inner(input) {
            Ok(address) => {
                tracing::trace!(address = %address, "parsed address");
                Ok(address)
            }
            Err(kind) => {
                let input = String::from_utf8_lossy(input).into_owned();
                tracing::debug!(input = %input, error = %kind, "rejected address");
                Err(ParseError { input, kind })
            }
        }
    }

    /// Parses an address that is known to be valid.
    ///
    /// Intended for literals in tests and static configuration.
    ///
    /// # Panics
    ///
    /// Panics with the parse error message if `input` is not a valid address.
    #[must_use]
    pub fn must_parse(input: &str) -> Self {
        match Self::parse(input) {
            Ok(address) => address,
            Err(e) => panic!("{e}"),
        }
    }

    /// Builds an address from explicit parts, normalizing each one.
    ///
    /// Empty `local` or `resource` values are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingDomainPart`] if `domain` is empty, or
    /// the error of the first part that fails normalization.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_address::Address;
    ///
    /// let addr = Address::from_parts(Some("test"), "gsvd.dev", Some("client")).unwrap();
    /// assert_eq!(addr.to_string(), "test@gsvd.dev/client");
    /// ```
    pub fn from_parts(
        local: Option<&str>,
        domain: &str,
        resource: Option<&str>,
    ) -> Result<Self, BuilderError> {
        Self::from_raw_parts(
            local.map(str::as_bytes),
            domain.as_bytes(),
            resource.map(str::as_bytes),
        )
    }

    /// Creates an address from already-validated parts.
    #[must_use]
    pub fn new(
        local: Option<LocalPart>,
        domain: DomainPart,
        resource: Option<ResourcePart>,
    ) -> Self {
        let normalized = Self::normalize(local.as_ref(), &domain, resource.as_ref());
        Self {
            local,
            domain,
            resource,
            normalized,
        }
    }

    /// Returns the local part, if present.
    #[must_use]
    pub const fn local(&self) -> Option<&LocalPart> {
        self.local.as_ref()
    }

    /// Returns the domain part.
    #[must_use]
    pub const fn domain(&self) -> &DomainPart {
        &self.domain
    }

    /// Returns the resource part, if present.
    #[must_use]
    pub const fn resource(&self) -> Option<&ResourcePart> {
        self.resource.as_ref()
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns true if a local part is present.
    #[must_use]
    pub const fn has_local(&self) -> bool {
        self.local.is_some()
    }

    /// Returns true if a resource part is present.
    #[must_use]
    pub const fn has_resource(&self) -> bool {
        self.resource.is_some()
    }

    /// Returns true if the address has no resource part.
    #[must_use]
    pub const fn is_bare(&self) -> bool {
        self.resource.is_none()
    }

    /// Returns true if the address consists of a domain alone.
    #[must_use]
    pub const fn is_domain_only(&self) -> bool {
        self.local.is_none() && self.resource.is_none()
    }

    /// Returns the address without its resource part.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_address::Address;
    ///
    /// let addr = Address::parse("user@example.com/phone").unwrap();
    /// assert_eq!(addr.bare().to_string(), "user@example.com");
    /// ```
    #[must_use]
    pub fn bare(&self) -> Self {
        Self::new(self.local.clone(), self.domain.clone(), None)
    }

    /// Returns an address holding only the local part.
    ///
    /// This is the one kind of address whose domain is empty; its string form
    /// is the bare local part, or the empty string if there was none.
    ///
    /// The result does not survive a trip through its string form: parsing
    /// `"user"` yields an address whose *domain* is `user`, and parsing `""`
    /// fails. The same holds for the `serde` representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_address::Address;
    ///
    /// let addr = Address::parse("user@example.com/phone").unwrap();
    /// assert_eq!(addr.local_only().to_string(), "user");
    /// ```
    #[must_use]
    pub fn local_only(&self) -> Self {
        Self::new(self.local.clone(), DomainPart::empty(), None)
    }

    /// Returns an address holding only the domain part.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_address::Address;
    ///
    /// let addr = Address::parse("user@example.com/phone").unwrap();
    /// assert_eq!(addr.domain_only().to_string(), "example.com");
    /// ```
    #[must_use]
    pub fn domain_only(&self) -> Self {
        Self::new(None, self.domain.clone(), None)
    }

    /// Returns a new address with the given resource, replacing any existing one.
    ///
    /// An empty resource yields the bare address.
    ///
    /// # Errors
    ///
    /// Returns `ResourcePartError` if the resource fails normalization.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_address::Address;
    ///
    /// let addr = Address::parse("user@example.com").unwrap();
    /// let full = addr.with_resource("laptop").unwrap();
    /// assert_eq!(full.to_string(), "user@example.com/laptop");
    /// ```
    pub fn with_resource(&self, resource: &str) -> Result<Self, ResourcePartError> {
        let resource = if resource.is_empty() {
            None
        } else {
            Some(ResourcePart::parse(resource)?)
        };
        Ok(Self::new(self.local.clone(), self.domain.clone(), resource))
    }

    /// Normalizes raw parts and logs the outcome; shared by `from_parts` and
    /// the builder.
    pub(crate) fn from_raw_parts(
        local: Option<&[u8]>,
        domain: &[u8],
        resource: Option<&[u8]>,
    ) -> Result<Self, BuilderError> {
        match Self::assemble(local, domain, resource) {
            Ok(address) => {
                tracing::trace!(address = %address, "built address");
                Ok(address)
            }
            Err(e) => {
                tracing::debug!(part = %e.part(), error = %e, "rejected address parts");
                Err(e)
            }
        }
    }

    fn parse_inner(input: &[u8]) -> Result<Self, ParseErrorKind> {
        let raw = decompose(input)?;
        Ok(Self::assemble(raw.local, raw.domain, raw.resource)?)
    }

    fn assemble(
        local: Option<&[u8]>,
        domain: &[u8],
        resource: Option<&[u8]>,
    ) -> Result<Self, BuilderError> {
        if domain.is_empty() {
            return Err(BuilderError::MissingDomainPart);
        }

        let local = local
            .filter(|l| !l.is_empty())
            .map(LocalPart::from_bytes)
            .transpose()
            .map_err(BuilderError::InvalidLocal)?;

        let domain = DomainPart::from_bytes(domain).map_err(BuilderError::InvalidDomain)?;

        let resource = resource
            .filter(|r| !r.is_empty())
            .map(ResourcePart::from_bytes)
            .transpose()
            .map_err(BuilderError::InvalidResource)?;

        Ok(Self::new(local, domain, resource))
    }

    fn normalize(
        local: Option<&LocalPart>,
        domain: &DomainPart,
        resource: Option<&ResourcePart>,
    ) -> String {
        let capacity = local.map_or(0, |l| l.as_str().len() + 1)
            + domain.as_str().len()
            + resource.map_or(0, |r| r.as_str().len() + 1);
        let mut result = String::with_capacity(capacity);

        if let Some(local) = local {
            result.push_str(local.as_str());
            if !domain.is_empty() {
                result.push(LOCAL_SEPARATOR);
            }
        }

        result.push_str(domain.as_str());

        if let Some(resource) = resource {
            result.push(RESOURCE_SEPARATOR);
            result.push_str(resource.as_str());
        }

        result
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for Address {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = ParseError;

    fn try_from(b: &[u8]) -> Result<Self, Self::Error> {
        Self::parse_bytes(b)
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.domain
            .cmp(&other.domain)
            .then_with(|| self.local.cmp(&other.local))
            .then_with(|| self.resource.cmp(&other.resource))
    }
}

/// Serializes as the canonical string.
///
/// Deserialization goes through [`Address::parse`], so a value from
/// [`Address::local_only`] does not deserialize back to itself.
#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
