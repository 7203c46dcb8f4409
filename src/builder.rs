//! Typestate builder for constructing [`Address`] instances from parts.
//!
//! The domain is the only mandatory part, so the builder has two states:
//! before and after a domain has been supplied. `build()` exists only in
//! the second state. Parts are stored raw and normalized in `build()`.

use std::marker::PhantomData;

use crate::address::Address;
use crate::error::BuilderError;

/// Marker: No domain set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDomain;

/// Marker: Domain has been set, ready to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasDomain;

/// A typestate builder for constructing [`Address`] instances.
///
/// Local and resource parts are optional and can be set in either state;
/// if set more than once, the last value wins. Setting a part to the empty
/// string is the same as not setting it.
///
/// # Examples
///
/// ```
/// use xmpp_address::AddressBuilder;
///
/// let addr = AddressBuilder::new()
///     .local("test")
///     .domain("gsvd.dev")
///     .resource("client")
///     .build()
///     .unwrap();
///
/// assert_eq!(addr.to_string(), "test@gsvd.dev/client");
/// assert_eq!(addr.bare().to_string(), "test@gsvd.dev");
/// assert_eq!(addr.local_only().to_string(), "test");
/// ```
///
/// # Compile-Time Safety
///
/// Building without a domain is a compile error:
///
/// ```compile_fail
/// use xmpp_address::AddressBuilder;
///
/// let addr = AddressBuilder::new()
///     .local("test")
///     .build();  // Compile error!
/// ```
#[derive(Debug, Clone)]
pub struct AddressBuilder<State = NoDomain> {
    local: Option<Vec<u8>>,
    domain: Vec<u8>,
    resource: Option<Vec<u8>>,
    _state: PhantomData<State>,
}

impl AddressBuilder<NoDomain> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            local: None,
            domain: Vec::new(),
            resource: None,
            _state: PhantomData,
        }
    }

    /// Sets the domain and advances to the [`HasDomain`] state.
    ///
    /// Accepts anything byte-like, so both `&str` and raw `&[u8]` work; the
    /// domain is validated in [`AddressBuilder::build`].
    #[must_use]
    pub fn domain(self, domain: impl AsRef<[u8]>) -> AddressBuilder<HasDomain> {
        AddressBuilder {
            local: self.local,
            domain: domain.as_ref().to_vec(),
            resource: self.resource,
            _state: PhantomData,
        }
    }
}

impl Default for AddressBuilder<NoDomain> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State> AddressBuilder<State> {
    /// Sets the local part.
    #[must_use]
    pub fn local(mut self, local: impl AsRef<[u8]>) -> Self {
        self.local = Some(local.as_ref().to_vec());
        self
    }

    /// Sets the resource part.
    #[must_use]
    pub fn resource(mut self, resource: impl AsRef<[u8]>) -> Self {
        self.resource = Some(resource.as_ref().to_vec());
        self
    }

    /// Sets or clears the local part.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_address::AddressBuilder;
    ///
    /// let addr = AddressBuilder::new()
    ///     .maybe_local(None::<&str>)
    ///     .domain("example.com")
    ///     .build()
    ///     .unwrap();
    /// assert!(addr.is_domain_only());
    /// ```
    #[must_use]
    pub fn maybe_local(mut self, local: Option<impl AsRef<[u8]>>) -> Self {
        self.local = local.map(|l| l.as_ref().to_vec());
        self
    }

    /// Sets or clears the resource part.
    #[must_use]
    pub fn maybe_resource(mut self, resource: Option<impl AsRef<[u8]>>) -> Self {
        self.resource = resource.map(|r| r.as_ref().to_vec());
        self
    }
}

impl AddressBuilder<HasDomain> {
    /// Normalizes every part and builds the final [`Address`].
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingDomainPart`] if the domain is empty,
    /// or the error of the first part that fails normalization.
    pub fn build(self) -> Result<Address, BuilderError> {
        Address::from_raw_parts(
            self.local.as_deref(),
            &self.domain,
            self.resource.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainPartError, LocalPartError, ResourcePartError};

    #[test]
    fn build_full_address() {
        let addr = AddressBuilder::new()
            .local("user")
            .domain("example.com")
            .resource("resource")
            .build()
            .unwrap();

        assert_eq!(addr, Address::parse("user@example.com/resource").unwrap());
    }

    #[test]
    fn build_domain_only() {
        let addr = AddressBuilder::new().domain("example.com").build().unwrap();
        assert!(addr.is_domain_only());
        assert_eq!(addr.to_string(), "example.com");
    }

    #[test]
    fn optional_parts_can_be_set_in_any_state() {
        let before = AddressBuilder::new()
            .local("user")
            .resource("r")
            .domain("example.com")
            .build()
            .unwrap();
        let after = AddressBuilder::new()
            .domain("example.com")
            .local("user")
            .resource("r")
            .build()
            .unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn last_value_wins() {
        let addr = AddressBuilder::new()
            .domain("example.com")
            .resource("first")
            .resource("second")
            .build()
            .unwrap();
        assert_eq!(addr.to_string(), "example.com/second");
    }

    #[test]
    fn maybe_setters_clear() {
        let addr = AddressBuilder::new()
            .local("user")
            .maybe_local(None::<&str>)
            .domain("example.com")
            .resource("r")
            .maybe_resource(None::<&str>)
            .build()
            .unwrap();
        assert!(addr.is_domain_only());
    }

    #[test]
    fn empty_domain_fails() {
        let result = AddressBuilder::new().local("user").domain("").build();
        assert_eq!(result, Err(BuilderError::MissingDomainPart));
    }

    #[test]
    fn empty_optionals_are_absent() {
        let addr = AddressBuilder::new()
            .local("")
            .domain("example.com")
            .resource("")
            .build()
            .unwrap();
        assert_eq!(addr.to_string(), "example.com");
    }

    #[test]
    fn parts_are_normalized() {
        let addr = AddressBuilder::new()
            .local("User")
            .domain("EXAMPLE.COM.")
            .build()
            .unwrap();
        assert_eq!(addr.to_string(), "User@example.com");
    }

    #[test]
    fn invalid_local_fails() {
        let result = AddressBuilder::new()
            .local("us:er")
            .domain("example.com")
            .build();
        assert!(matches!(
            result,
            Err(BuilderError::InvalidLocal(LocalPartError::NotAllowedChar { char: ':', position: 2 }))
        ));
    }

    #[test]
    fn invalid_utf8_domain_fails() {
        let result = AddressBuilder::new().domain(b"exa\xffmple".as_slice()).build();
        assert!(matches!(
            result,
            Err(BuilderError::InvalidDomain(DomainPartError::InvalidUtf8 { valid_up_to: 3 }))
        ));
    }

    #[test]
    fn too_long_resource_fails() {
        let result = AddressBuilder::new()
            .domain("example.com")
            .resource("r".repeat(1024))
            .build();
        assert!(matches!(
            result,
            Err(BuilderError::InvalidResource(ResourcePartError::TooLong { .. }))
        ));
    }

    #[test]
    fn builder_and_parse_agree() {
        let built = AddressBuilder::new()
            .local("user")
            .domain("[2001:db8::1]")
            .resource("r")
            .build()
            .unwrap();
        let parsed = Address::parse("user@[2001:db8::1]/r").unwrap();
        assert_eq!(built, parsed);
        assert_eq!(built.to_string(), parsed.to_string());
    }

    #[test]
    fn default_creates_empty_builder() {
        let builder = AddressBuilder::default();
        let addr = builder.domain("example.com").build().unwrap();
        assert!(addr.is_domain_only());
    }

    #[test]
    fn clone_preserves_parts() {
        let builder = AddressBuilder::new().local("user").domain("example.com");
        let a = builder.clone().build().unwrap();
        let b = builder.build().unwrap();
        assert_eq!(a, b);
    }
}
