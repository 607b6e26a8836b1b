//! Application layer: typed requests and the gateway facade
//!
//! This layer shapes domain trees into resource requests and depends on the
//! transport only through the [`gateway::Transport`] trait.

pub mod credit_card;
pub mod error;
pub mod gateway;
pub mod merchant_account;
pub mod scope;

pub use credit_card::{CreditCardOptionsRequest, CreditCardRequest};
pub use error::{ApplicationError, ApplicationResult};
pub use gateway::{
    CreditCardGateway, Gateway, GatewayResult, MerchantAccountGateway, Method, Transport,
    TransportCall, TransportResponse,
};
pub use merchant_account::{
    ApplicantDetailsRequest, BusinessRequest, FundingRequest, IndividualRequest,
    MerchantAccountRequest,
};
pub use scope::{AddressRequest, Scope};
