//! Gateway facade over an injected transport.
//!
//! The transport owns the wire: it serializes the [`FieldTree`] body under
//! the call's root name, authenticates with the [`GatewayConfig`] it was built
//! with, and hands back either the entity's fields or the flat list of
//! validation errors. This module only routes calls and shapes results.

use tracing::{debug, instrument};

use crate::application::credit_card::CreditCardRequest;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::merchant_account::MerchantAccountRequest;
use crate::config::GatewayConfig;
use crate::domain::{
    CreditCard, DecodeError, FieldTree, MerchantAccount, RawValidationError, ValidationErrors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// One request handed to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportCall {
    pub method: Method,
    /// Path below the environment's base URL
    pub path: String,
    /// Object name the body is wrapped in, e.g. `merchant-account`
    pub root: &'static str,
    pub body: Option<FieldTree>,
}

/// What the transport decoded from the gateway's reply.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportResponse {
    Entity(FieldTree),
    Invalid(Vec<RawValidationError>),
    NotFound,
}

/// Network boundary. Implementations perform the actual call.
pub trait Transport {
    fn submit(&self, call: &TransportCall) -> ApplicationResult<TransportResponse>;
}

/// Outcome of a create or update: the entity, or the validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayResult<T> {
    Success(T),
    Failure(ValidationErrors),
}

impl<T> GatewayResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, GatewayResult::Success(_))
    }

    pub fn target(&self) -> Option<&T> {
        match self {
            GatewayResult::Success(t) => Some(t),
            GatewayResult::Failure(_) => None,
        }
    }

    pub fn into_target(self) -> Option<T> {
        match self {
            GatewayResult::Success(t) => Some(t),
            GatewayResult::Failure(_) => None,
        }
    }

    /// Validation errors; empty on success.
    pub fn errors(&self) -> &ValidationErrors {
        static NONE: ValidationErrors = ValidationErrors::empty();
        match self {
            GatewayResult::Success(_) => &NONE,
            GatewayResult::Failure(e) => e,
        }
    }
}

/// Entry point: configuration plus transport.
#[derive(Debug)]
pub struct Gateway<T> {
    config: GatewayConfig,
    transport: T,
}

impl<T: Transport> Gateway<T> {
    pub fn new(config: GatewayConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn merchant_account(&self) -> MerchantAccountGateway<'_, T> {
        MerchantAccountGateway {
            config: &self.config,
            transport: &self.transport,
        }
    }

    pub fn credit_card(&self) -> CreditCardGateway<'_, T> {
        CreditCardGateway {
            config: &self.config,
            transport: &self.transport,
        }
    }
}

pub struct MerchantAccountGateway<'a, T> {
    config: &'a GatewayConfig,
    transport: &'a T,
}

impl<T: Transport> MerchantAccountGateway<'_, T> {
    #[instrument(level = "debug", skip_all)]
    pub fn create(
        &self,
        request: &MerchantAccountRequest,
    ) -> ApplicationResult<GatewayResult<MerchantAccount>> {
        let call = TransportCall {
            method: Method::Post,
            path: format!("{}/merchant_accounts/create_via_api", self.config.merchant_path()),
            root: "merchant-account",
            body: Some(request.to_map()),
        };
        submit(self.transport, &call, MerchantAccount::from_fields)
    }

    #[instrument(level = "debug", skip(self, request))]
    pub fn update(
        &self,
        id: &str,
        request: &MerchantAccountRequest,
    ) -> ApplicationResult<GatewayResult<MerchantAccount>> {
        let id = require_id(Some(id), "merchant account")?;
        let call = TransportCall {
            method: Method::Put,
            path: format!(
                "{}/merchant_accounts/{}/update_via_api",
                self.config.merchant_path(),
                id
            ),
            root: "merchant-account",
            body: Some(request.to_map()),
        };
        submit(self.transport, &call, MerchantAccount::from_fields)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn find(&self, id: &str) -> ApplicationResult<MerchantAccount> {
        let id = require_id(Some(id), "merchant account")?;
        let call = TransportCall {
            method: Method::Get,
            path: format!("{}/merchant_accounts/{}", self.config.merchant_path(), id),
            root: "merchant-account",
            body: None,
        };
        fetch(self.transport, &call, "merchant account", MerchantAccount::from_fields)
    }
}

pub struct CreditCardGateway<'a, T> {
    config: &'a GatewayConfig,
    transport: &'a T,
}

impl<T: Transport> CreditCardGateway<'_, T> {
    #[instrument(level = "debug", skip_all)]
    pub fn create(&self, request: &CreditCardRequest) -> ApplicationResult<GatewayResult<CreditCard>> {
        let call = TransportCall {
            method: Method::Post,
            path: format!("{}/payment_methods", self.config.merchant_path()),
            root: "credit-card",
            body: Some(request.to_map()),
        };
        submit(self.transport, &call, CreditCard::from_fields)
    }

    /// Find a card by token. A missing or blank token is `NotFound`
    /// without contacting the gateway.
    #[instrument(level = "debug", skip(self))]
    pub fn find(&self, token: Option<&str>) -> ApplicationResult<CreditCard> {
        let token = require_id(token, "credit card")?;
        let call = TransportCall {
            method: Method::Get,
            path: format!(
                "{}/payment_methods/credit_card/{}",
                self.config.merchant_path(),
                token
            ),
            root: "credit-card",
            body: None,
        };
        fetch(self.transport, &call, "credit card", CreditCard::from_fields)
    }

    /// Resolve a payment method nonce. A missing or blank nonce is `NotFound`.
    #[instrument(level = "debug", skip(self))]
    pub fn from_nonce(&self, nonce: Option<&str>) -> ApplicationResult<CreditCard> {
        let nonce = require_id(nonce, "payment method nonce")?;
        let call = TransportCall {
            method: Method::Get,
            path: format!(
                "{}/payment_methods/from_nonce/{}",
                self.config.merchant_path(),
                nonce
            ),
            root: "credit-card",
            body: None,
        };
        fetch(self.transport, &call, "payment method nonce", CreditCard::from_fields)
    }
}

fn require_id<'a>(id: Option<&'a str>, resource: &str) -> ApplicationResult<&'a str> {
    match id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ApplicationError::not_found(resource)),
    }
}

fn submit<T, E>(
    transport: &T,
    call: &TransportCall,
    decode: fn(&FieldTree) -> Result<E, DecodeError>,
) -> ApplicationResult<GatewayResult<E>>
where
    T: Transport,
{
    match transport.submit(call)? {
        TransportResponse::Entity(fields) => Ok(GatewayResult::Success(decode(&fields)?)),
        TransportResponse::Invalid(raw) => {
            debug!(path = %call.path, count = raw.len(), "gateway rejected request");
            Ok(GatewayResult::Failure(ValidationErrors::from_raw(raw)))
        }
        TransportResponse::NotFound => Err(ApplicationError::not_found(call.root)),
    }
}

fn fetch<T, E>(
    transport: &T,
    call: &TransportCall,
    resource: &str,
    decode: fn(&FieldTree) -> Result<E, DecodeError>,
) -> ApplicationResult<E>
where
    T: Transport,
{
    match transport.submit(call)? {
        TransportResponse::Entity(fields) => Ok(decode(&fields)?),
        TransportResponse::Invalid(raw) => {
            debug!(path = %call.path, count = raw.len(), "gateway rejected lookup");
            Err(ApplicationError::Rejected {
                resource: resource.to_string(),
                errors: ValidationErrors::from_raw(raw),
            })
        }
        TransportResponse::NotFound => Err(ApplicationError::not_found(resource)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_id_rejects_blank() {
        assert!(require_id(None, "credit card").is_err());
        assert!(require_id(Some("   "), "credit card").is_err());
        assert_eq!(require_id(Some(" abc "), "credit card").unwrap(), "abc");
    }

    struct RejectingTransport;

    impl Transport for RejectingTransport {
        fn submit(&self, _call: &TransportCall) -> ApplicationResult<TransportResponse> {
            Ok(TransportResponse::Invalid(vec![RawValidationError::new(
                ["credit-card"],
                "token",
                "IS_INVALID",
                "Token is invalid",
            )]))
        }
    }

    #[test]
    fn test_rejected_lookup_keeps_validation_errors() {
        let gateway = Gateway::new(GatewayConfig::default(), RejectingTransport);

        let result = gateway.credit_card().find(Some("tok_1"));

        match result {
            Err(ApplicationError::Rejected { resource, errors }) => {
                assert_eq!(resource, "credit card");
                assert_eq!(errors.for_object("credit-card").on_field("token").len(), 1);
            }
            other => panic!("expected rejected lookup, got {:?}", other),
        }
    }

    #[test]
    fn test_errors_on_success_is_empty() {
        let result = GatewayResult::Success(1);
        assert!(result.errors().is_empty());
        assert_eq!(result.target(), Some(&1));
    }
}
