//! Splitting raw input into candidate local, domain and resource parts.
//!
//! Separators are located by scanning from the end: the last `/` starts the
//! resource, and the last `@` before it ends the local part. Both separators
//! are ASCII, so the scan is done on bytes and never lands inside a
//! multi-byte UTF-8 sequence. Encoding is validated later, per part.

use crate::constants;
use crate::error::ParseErrorKind;

const LOCAL_SEPARATOR: u8 = constants::LOCAL_SEPARATOR as u8;
const RESOURCE_SEPARATOR: u8 = constants::RESOURCE_SEPARATOR as u8;

/// Candidate parts of an address, not yet normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawParts<'a> {
    pub local: Option<&'a [u8]>,
    pub domain: &'a [u8],
    pub resource: Option<&'a [u8]>,
}

/// Splits `input` into its candidate parts.
pub(crate) fn decompose(input: &[u8]) -> Result<RawParts<'_>, ParseErrorKind> {
    if input.is_empty() {
        return Err(ParseErrorKind::AddressIsEmpty);
    }

    let (rest, resource) = split_resource(input)?;
    let (local, domain) = split_local(rest)?;

    Ok(RawParts {
        local,
        domain,
        resource,
    })
}

fn split_resource(input: &[u8]) -> Result<(&[u8], Option<&[u8]>), ParseErrorKind> {
    match input.iter().rposition(|&b| b == RESOURCE_SEPARATOR) {
        None => Ok((input, None)),
        Some(idx) if idx == input.len() - 1 => Err(ParseErrorKind::MissingResourcePart),
        Some(idx) => Ok((&input[..idx], Some(&input[idx + 1..]))),
    }
}

fn split_local(input: &[u8]) -> Result<(Option<&[u8]>, &[u8]), ParseErrorKind> {
    match input.iter().rposition(|&b| b == LOCAL_SEPARATOR) {
        None => Ok((None, input)),
        // Checked before the leading case so that a lone "@" reports the domain.
        Some(idx) if idx == input.len() - 1 => Err(ParseErrorKind::MissingDomainPart),
        Some(0) => Err(ParseErrorKind::MissingLocalPart),
        Some(idx) => Ok((Some(&input[..idx]), &input[idx + 1..])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts<'a>(
        local: Option<&'a str>,
        domain: &'a str,
        resource: Option<&'a str>,
    ) -> Result<RawParts<'a>, ParseErrorKind> {
        Ok(RawParts {
            local: local.map(str::as_bytes),
            domain: domain.as_bytes(),
            resource: resource.map(str::as_bytes),
        })
    }

    #[test]
    fn full_address() {
        assert_eq!(
            decompose(b"user@example.com/resource"),
            parts(Some("user"), "example.com", Some("resource"))
        );
    }

    #[test]
    fn domain_only() {
        assert_eq!(
            decompose(b"example.com"),
            parts(None, "example.com", None)
        );
    }

    #[test]
    fn domain_and_resource() {
        assert_eq!(
            decompose(b"conference.example.com/nickname"),
            parts(None, "conference.example.com", Some("nickname"))
        );
    }

    #[test]
    fn resource_may_contain_at_sign() {
        assert_eq!(
            decompose(b"user@example.com/res@ource"),
            parts(Some("user"), "example.com", Some("res@ource"))
        );
    }

    #[test]
    fn last_slash_wins() {
        assert_eq!(
            decompose(b"user@example.com/a/b"),
            parts(Some("user"), "example.com/a", Some("b"))
        );
    }

    #[test]
    fn last_at_wins() {
        assert_eq!(
            decompose(b"a@b@example.com"),
            parts(Some("a@b"), "example.com", None)
        );
    }

    #[test]
    fn resource_only_leaves_empty_domain() {
        assert_eq!(
            decompose(b"/resource"),
            parts(None, "", Some("resource"))
        );
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(decompose(b""), Err(ParseErrorKind::AddressIsEmpty));
    }

    #[test]
    fn trailing_slash_fails() {
        assert_eq!(
            decompose(b"user@example.com/"),
            Err(ParseErrorKind::MissingResourcePart)
        );
        assert_eq!(decompose(b"/"), Err(ParseErrorKind::MissingResourcePart));
    }

    #[test]
    fn leading_at_fails() {
        assert_eq!(
            decompose(b"@example.com/r"),
            Err(ParseErrorKind::MissingLocalPart)
        );
    }

    #[test]
    fn trailing_at_fails() {
        assert_eq!(decompose(b"user@"), Err(ParseErrorKind::MissingDomainPart));
        assert_eq!(
            decompose(b"user@/resource"),
            Err(ParseErrorKind::MissingDomainPart)
        );
    }

    #[test]
    fn lone_at_reports_missing_domain() {
        assert_eq!(decompose(b"@"), Err(ParseErrorKind::MissingDomainPart));
    }

    #[test]
    fn invalid_utf8_is_split_without_validation() {
        let raw = decompose(b"us\xffer@example.com/r\xfe").unwrap();
        assert_eq!(raw.local, Some(&b"us\xffer"[..]));
        assert_eq!(raw.domain, b"example.com");
        assert_eq!(raw.resource, Some(&b"r\xfe"[..]));
    }
}
