//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use xmpp_address::prelude::*;
//!
//! let addr = Address::parse("user@example.com/phone").unwrap();
//! ```
//!
//! Builder state markers (`NoDomain`, `HasDomain`) are intentionally
//! excluded as they are implementation details.

pub use crate::{
    // Core types
    Address, DomainKind, DomainPart, LocalPart, ResourcePart,
    // Builder
    AddressBuilder,
    // Errors
    BuilderError, DomainPartError, LocalPartError, ParseError, ParseErrorKind, Part,
    ResourcePartError,
    // Constants
    LOCAL_PART_FORBIDDEN_CHARS, LOCAL_SEPARATOR, MAX_PART_LENGTH, RESOURCE_SEPARATOR,
};
