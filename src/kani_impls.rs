//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).
//! Arbitrary domains are IPv4 literals so that proofs never enter the
//! internationalized-domain tables, which are far beyond what the model
//! checker can explore.
//!
//! Unwind bounds cover the longest loop in each harness: eight forbidden
//! characters for local parts, and up to 29 bytes (6-byte local, 15-byte
//! IPv4 literal, 6-byte resource, two separators) for whole addresses.

use crate::decompose::decompose;
use crate::{Address, DomainPart, LocalPart, ResourcePart, LOCAL_PART_FORBIDDEN_CHARS};

/// Characters allowed in generated local parts (ASCII subset).
const LOCAL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789._-+";

/// Characters for generated resources, separators included.
const RESOURCE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789@:<>";

fn arbitrary_char(chars: &[u8]) -> char {
    let idx: usize = kani::any();
    let idx = idx % chars.len();
    chars[idx] as char
}

fn arbitrary_string(chars: &[u8], max_len: usize) -> String {
    let len: usize = kani::any();
    let len = 1 + (len % max_len);
    (0..len).map(|_| arbitrary_char(chars)).collect()
}

impl kani::Arbitrary for LocalPart {
    fn any() -> Self {
        let s = arbitrary_string(LOCAL_CHARS, 6);
        LocalPart::parse(&s).expect("valid local part by construction")
    }
}

impl kani::Arbitrary for ResourcePart {
    fn any() -> Self {
        let s = arbitrary_string(RESOURCE_CHARS, 6);
        ResourcePart::parse(&s).expect("valid resource by construction")
    }
}

impl kani::Arbitrary for DomainPart {
    fn any() -> Self {
        let octets: [u8; 4] = kani::any();
        let s = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
        DomainPart::parse(&s).expect("valid IPv4 literal by construction")
    }
}

impl kani::Arbitrary for Address {
    fn any() -> Self {
        let has_local: bool = kani::any();
        let has_resource: bool = kani::any();
        let local = if has_local { Some(kani::any()) } else { None };
        let resource = if has_resource { Some(kani::any()) } else { None };
        Address::new(local, kani::any(), resource)
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: decomposition never panics, whatever the bytes
#[kani::proof]
#[kani::unwind(8)]
fn proof_decompose_never_panics() {
    let bytes: [u8; 6] = kani::any();
    let len: usize = kani::any();
    kani::assume(len <= bytes.len());
    let _ = decompose(&bytes[..len]);
}

/// Proof: an accepted local part contains no forbidden character
#[kani::proof]
#[kani::unwind(10)]
fn proof_local_part_has_no_forbidden_chars() {
    let bytes: [u8; 4] = kani::any();
    kani::assume(bytes.is_ascii());
    if let Ok(local) = LocalPart::from_bytes(&bytes) {
        for c in LOCAL_PART_FORBIDDEN_CHARS {
            assert!(!local.as_str().contains(c));
        }
    }
}

/// Proof: parsing the canonical string yields the same address
#[kani::proof]
#[kani::unwind(40)]
fn proof_parse_roundtrip() {
    let addr: Address = kani::any();
    let reparsed = Address::parse(addr.as_str()).expect("canonical form should parse");
    assert_eq!(reparsed, addr);
}

/// Proof: the bare projection never carries a resource separator
#[kani::proof]
#[kani::unwind(40)]
fn proof_bare_has_no_resource() {
    let addr: Address = kani::any();
    assert!(!addr.bare().as_str().contains('/'));
}

/// Proof: the local-only projection carries no separators at all
#[kani::proof]
#[kani::unwind(40)]
fn proof_local_only_has_no_separators() {
    let addr: Address = kani::any();
    let local = addr.local_only();
    assert!(!local.as_str().contains('@'));
    assert!(!local.as_str().contains('/'));
}
