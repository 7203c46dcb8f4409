//! Domain part type: the host an address belongs to.
//!
//! A domain part is either a bracketed IPv6 literal, a bare IPv4 literal, or
//! a host name. IP literals are kept exactly as written. Host names lose a
//! single trailing root dot and are converted to their internationalized
//! display form (`xn--` labels decoded, case and compatibility mapping per
//! UTS #46); they are never re-encoded to ASCII.
//!
//! Conversion applies the STD3 ASCII rules and the hyphen checks, so a name
//! can only map onto letters, digits, `-` and `.`. Full-width `＠` or `／`
//! are rejected rather than turned into address separators.

use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use idna::uts46::{AsciiDenyList, Hyphens, Uts46};

use crate::constants::MAX_PART_LENGTH;
use crate::error::DomainPartError;

/// What kind of host a domain part names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainKind {
    /// A host name in display form (e.g., "example.com")
    Name,
    /// An IPv4 literal (e.g., "192.168.1.1")
    Ipv4(Ipv4Addr),
    /// A bracketed IPv6 literal (e.g., "[2001:db8::1]")
    Ipv6(Ipv6Addr),
}

/// A validated and normalized domain part of an address.
///
/// # Examples
///
/// ```
/// use xmpp_address::{DomainKind, DomainPart};
///
/// let domain = DomainPart::parse("Example.COM.").unwrap();
/// assert_eq!(domain.as_str(), "example.com");
/// assert_eq!(domain.kind(), DomainKind::Name);
///
/// let domain = DomainPart::parse("xn--bcher-kva.example").unwrap();
/// assert_eq!(domain.as_str(), "bücher.example");
///
/// let domain = DomainPart::parse("[2001:db8::1]").unwrap();
/// assert_eq!(domain.as_str(), "[2001:db8::1]");
/// assert!(domain.is_ip());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainPart {
    kind: DomainKind,
    normalized: String,
}

impl DomainPart {
    /// Parses and normalizes a domain part from a string.
    ///
    /// # Errors
    ///
    /// Returns `DomainPartError` if:
    /// - Internationalized display conversion fails, including names with
    ///   characters outside letters, digits, `-` and `.` once mapped
    /// - The domain is empty once normalized (e.g., a lone ".")
    /// - The normalized domain exceeds 1023 bytes
    pub fn parse(input: &str) -> Result<Self, DomainPartError> {
        Self::from_bytes(input.as_bytes())
    }

    /// Parses and normalizes a domain part from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `DomainPartError` if the input is not valid UTF-8, or for any
    /// of the reasons listed on [`DomainPart::parse`].
    pub fn from_bytes(input: &[u8]) -> Result<Self, DomainPartError> {
        let s = std::str::from_utf8(input).map_err(|e| DomainPartError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;

        if let Some(kind) = Self::ip_literal(s) {
            return Ok(Self {
                kind,
                normalized: s.to_string(),
            });
        }

        let name = s.strip_suffix('.').unwrap_or(s);
        let (display, result) =
            Uts46::new().to_unicode(name.as_bytes(), AsciiDenyList::STD3, Hyphens::Check);
        if let Err(e) = result {
            return Err(DomainPartError::Idna {
                domain: name.to_string(),
                reason: e.to_string(),
            });
        }
        let display = display.into_owned();

        if display.is_empty() {
            return Err(DomainPartError::Empty);
        }

        if display.len() > MAX_PART_LENGTH {
            return Err(DomainPartError::TooLong {
                max: MAX_PART_LENGTH,
                actual: display.len(),
            });
        }

        // "10.0.0.1." loses its dot above and is an IP literal from here on.
        let kind = Self::ip_literal(&display).unwrap_or(DomainKind::Name);
        Ok(Self {
            kind,
            normalized: display,
        })
    }

    /// The empty domain carried by a local-only projection.
    pub(crate) const fn empty() -> Self {
        Self {
            kind: DomainKind::Name,
            normalized: String::new(),
        }
    }

    /// Returns the kind of host.
    #[must_use]
    pub const fn kind(&self) -> DomainKind {
        self.kind
    }

    /// Returns the IP address if the domain is an IP literal.
    #[must_use]
    pub const fn ip(&self) -> Option<IpAddr> {
        match self.kind {
            DomainKind::Name => None,
            DomainKind::Ipv4(ip) => Some(IpAddr::V4(ip)),
            DomainKind::Ipv6(ip) => Some(IpAddr::V6(ip)),
        }
    }

    /// Returns true if the domain is an IPv4 or IPv6 literal.
    #[must_use]
    pub const fn is_ip(&self) -> bool {
        !matches!(self.kind, DomainKind::Name)
    }

    /// Returns true if the domain is empty, which only happens for the
    /// domain of a local-only projection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Returns the normalized domain.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// IPv4-mapped IPv6 addresses (`[::ffff:a.b.c.d]`) are not IPv6 literals.
    fn ip_literal(s: &str) -> Option<DomainKind> {
        let ipv6 = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .and_then(|inner| inner.parse::<Ipv6Addr>().ok())
            .filter(|ip| ip.to_ipv4_mapped().is_none());
        if let Some(ip) = ipv6 {
            return Some(DomainKind::Ipv6(ip));
        }

        s.parse::<Ipv4Addr>().ok().map(DomainKind::Ipv4)
    }
}

impl fmt::Display for DomainPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl FromStr for DomainPart {
    type Err = DomainPartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DomainPart {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for DomainPart {
    type Error = DomainPartError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for DomainPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DomainPart {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DomainPart {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DomainPart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
