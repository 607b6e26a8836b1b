//! Typed scopes over [`ScopedBuilder`].
//!
//! Each typed request owns the builder while its scope is the innermost one
//! open. Entering a child moves the builder into the child; `done()` closes
//! the child and hands the builder back to the parent type. Only scopes the
//! schema allows have entry methods, so invalid scopes cannot be expressed.

use std::marker::PhantomData;

use crate::domain::{DomainResult, ScopedBuilder};

/// A typed view of the builder with a particular scope innermost.
pub trait Scope: Sized {
    fn from_builder(builder: ScopedBuilder) -> Self;
}

/// Fluent string setters writing under fixed field names.
macro_rules! text_fields {
    ($($(#[$meta:meta])* $method:ident => $field:literal,)*) => {
        $(
            $(#[$meta])*
            pub fn $method(mut self, value: impl Into<String>) -> Self {
                self.builder
                    .write($field, $crate::domain::FieldValue::Text(value.into()));
                self
            }
        )*
    };
}
pub(crate) use text_fields;

/// Fluent boolean setters writing under fixed field names.
macro_rules! bool_fields {
    ($($(#[$meta:meta])* $method:ident => $field:literal,)*) => {
        $(
            $(#[$meta])*
            pub fn $method(mut self, value: bool) -> Self {
                self.builder.write($field, value);
                self
            }
        )*
    };
}
pub(crate) use bool_fields;

/// Enter `name` and view the builder as scope `C`.
pub(crate) fn enter<C: Scope>(mut builder: ScopedBuilder, name: &str) -> C {
    builder.open(name);
    C::from_builder(builder)
}

/// Close the innermost scope and view the builder as its parent `P`.
pub(crate) fn close<P: Scope>(mut builder: ScopedBuilder) -> DomainResult<P> {
    builder.done()?;
    Ok(P::from_builder(builder))
}

/// Postal address, nested in whichever scope `P` opened it.
#[derive(Debug, Clone)]
pub struct AddressRequest<P> {
    builder: ScopedBuilder,
    parent: PhantomData<P>,
}

impl<P: Scope> Scope for AddressRequest<P> {
    fn from_builder(builder: ScopedBuilder) -> Self {
        Self {
            builder,
            parent: PhantomData,
        }
    }
}

impl<P: Scope> AddressRequest<P> {
    text_fields! {
        street_address => "street-address",
        extended_address => "extended-address",
        locality => "locality",
        region => "region",
        postal_code => "postal-code",
        country_code_alpha2 => "country-code-alpha2",
    }

    /// Close the address and return to the enclosing scope.
    ///
    /// # Errors
    /// `DuplicateScope` if the parent already has an address.
    pub fn done(self) -> DomainResult<P> {
        close(self.builder)
    }
}
