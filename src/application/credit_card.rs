//! Typed credit-card request.

use crate::application::scope::{bool_fields, close, enter, text_fields, AddressRequest, Scope};
use crate::domain::{DomainResult, FieldTree, NodeKind, ScopedBuilder};

/// Root of a credit-card create request.
#[derive(Debug, Clone)]
pub struct CreditCardRequest {
    builder: ScopedBuilder,
}

impl Default for CreditCardRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope for CreditCardRequest {
    fn from_builder(builder: ScopedBuilder) -> Self {
        Self { builder }
    }
}

impl CreditCardRequest {
    pub fn new() -> Self {
        Self {
            builder: ScopedBuilder::new(NodeKind::CreditCard),
        }
    }

    text_fields! {
        customer_id => "customer-id",
        cardholder_name => "cardholder-name",
        number => "number",
        /// `MM/YY` or `MM/YYYY`
        expiration_date => "expiration-date",
        expiration_month => "expiration-month",
        expiration_year => "expiration-year",
        cvv => "cvv",
        token => "token",
        payment_method_nonce => "payment-method-nonce",
    }

    pub fn billing_address(self) -> AddressRequest<CreditCardRequest> {
        enter(self.builder, "billing-address")
    }

    pub fn options(self) -> CreditCardOptionsRequest {
        enter(self.builder, "options")
    }

    /// The request body as a plain nested mapping.
    pub fn to_map(&self) -> FieldTree {
        self.builder.root_map()
    }
}

#[derive(Debug, Clone)]
pub struct CreditCardOptionsRequest {
    builder: ScopedBuilder,
}

impl Scope for CreditCardOptionsRequest {
    fn from_builder(builder: ScopedBuilder) -> Self {
        Self { builder }
    }
}

impl CreditCardOptionsRequest {
    bool_fields! {
        verify_card => "verify-card",
        make_default => "make-default",
        fail_on_duplicate_payment_method => "fail-on-duplicate-payment-method",
    }

    text_fields! {
        verification_merchant_account_id => "verification-merchant-account-id",
    }

    /// # Errors
    /// `DuplicateScope` if the request already has options.
    pub fn done(self) -> DomainResult<CreditCardRequest> {
        close(self.builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_address_and_options_nest_under_card() {
        let request = CreditCardRequest::new()
            .number("4111111111111111")
            .expiration_date("05/2030")
            .billing_address()
            .postal_code("60606")
            .done()
            .unwrap()
            .options()
            .verify_card(true)
            .done()
            .unwrap();

        let map = request.to_map();
        assert_eq!(map.text("number"), Some("4111111111111111"));
        assert_eq!(
            map.node("billing-address").and_then(|a| a.text("postal-code")),
            Some("60606")
        );
        assert_eq!(
            map.node("options")
                .and_then(|o| o.value("verify-card"))
                .and_then(|v| v.as_bool()),
            Some(true)
        );
    }

    #[test]
    fn test_second_options_scope_is_duplicate() {
        let result = CreditCardRequest::new()
            .options()
            .make_default(true)
            .done()
            .unwrap()
            .options()
            .done();
        assert!(result.is_err());
    }
}
