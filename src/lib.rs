//! Parser and normalizer for `local@domain/resource` network addresses.
//!
//! This crate turns an arbitrary input string, or a set of explicit parts,
//! into a canonical, comparable and round-trippable [`Address`], or rejects
//! it with an error naming the offending part.
//!
//! # Overview
//!
//! Addresses in federated messaging address users, servers and individual
//! client sessions with three parts:
//!
//! ```text
//! [local "@"] domain ["/" resource]
//! ```
//!
//! Parsing runs a fixed pipeline: the input is split on the last `/` and
//! then the last `@`, each part is normalized independently, and the parts
//! are assembled into an immutable value.
//!
//! # Quick Start
//!
//! ```rust
//! use xmpp_address::Address;
//!
//! let addr = Address::parse("juliet@capulet.example/balcony").unwrap();
//!
//! assert_eq!(addr.local().unwrap().as_str(), "juliet");
//! assert_eq!(addr.domain().as_str(), "capulet.example");
//! assert_eq!(addr.resource().unwrap().as_str(), "balcony");
//!
//! // Reduced views
//! assert_eq!(addr.bare().to_string(), "juliet@capulet.example");
//! assert_eq!(addr.domain_only().to_string(), "capulet.example");
//! assert_eq!(addr.local_only().to_string(), "juliet");
//! ```
//!
//! # Builder Pattern
//!
//! ```rust
//! use xmpp_address::AddressBuilder;
//!
//! let addr = AddressBuilder::new()
//!     .local("juliet")
//!     .domain("Capulet.Example.")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(addr.to_string(), "juliet@capulet.example");
//! ```
//!
//! # Normalization Rules
//!
//! | Part | Rules |
//! |------|-------|
//! | Local | at most 1023 bytes, UTF-8, none of `" & ' / : < > @` |
//! | Domain | IPv6 in brackets or IPv4 kept verbatim; otherwise one trailing `.` removed and converted to IDN display form; at most 1023 bytes after conversion |
//! | Resource | at most 1023 bytes, UTF-8 |
//!
//! # Logging
//!
//! Rejected inputs are reported as `debug` events and successful parses as
//! `trace` events through [`tracing`]. The crate never installs a subscriber.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod address;
mod builder;
mod constants;
mod decompose;
mod domain_part;
mod error;
#[cfg(kani)]
mod kani_impls;
mod local_part;
pub mod prelude;
mod resource_part;

pub use address::Address;
pub use builder::{AddressBuilder, HasDomain, NoDomain};
pub use constants::{
    LOCAL_PART_FORBIDDEN_CHARS, LOCAL_SEPARATOR, MAX_PART_LENGTH, RESOURCE_SEPARATOR,
};
pub use domain_part::{DomainKind, DomainPart};
pub use error::{
    BuilderError, DomainPartError, LocalPartError, ParseError, ParseErrorKind, Part,
    ResourcePartError,
};
pub use local_part::LocalPart;
pub use resource_part::ResourcePart;
