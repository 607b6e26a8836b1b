//! Typed merchant-account request.
//!
//! ```ignore
//! let request = MerchantAccountRequest::new()
//!     .individual()
//!         .first_name("Job")
//!         .address()
//!             .postal_code("60611")
//!             .done()?
//!         .done()?
//!     .tos_accepted(true);
//! ```

use crate::application::scope::{bool_fields, close, enter, text_fields, AddressRequest, Scope};
use crate::domain::{
    DomainResult, FieldTree, FieldValue, FundingDestination, NodeKind, ScopedBuilder,
};

/// Root of a merchant-account create or update request.
#[derive(Debug, Clone)]
pub struct MerchantAccountRequest {
    builder: ScopedBuilder,
}

impl Default for MerchantAccountRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope for MerchantAccountRequest {
    fn from_builder(builder: ScopedBuilder) -> Self {
        Self { builder }
    }
}

impl MerchantAccountRequest {
    pub fn new() -> Self {
        Self {
            builder: ScopedBuilder::new(NodeKind::MerchantAccount),
        }
    }

    text_fields! {
        /// Sub-merchant id; the gateway assigns one when omitted.
        id => "id",
    }

    bool_fields! {
        tos_accepted => "tos-accepted",
    }

    /// Master account id. Pass `None::<&str>` to clear it on update.
    pub fn master_merchant_account_id(mut self, id: impl Into<FieldValue>) -> Self {
        self.builder.write("master-merchant-account-id", id);
        self
    }

    pub fn individual(self) -> IndividualRequest {
        enter(self.builder, "individual")
    }

    pub fn business(self) -> BusinessRequest {
        enter(self.builder, "business")
    }

    pub fn funding(self) -> FundingRequest {
        enter(self.builder, "funding")
    }

    /// Flat applicant scope, aliased onto individual, business and funding.
    #[deprecated(note = "use individual(), business() and funding()")]
    pub fn applicant_details(self) -> ApplicantDetailsRequest {
        enter(self.builder, "applicant-details")
    }

    /// The request body as a plain nested mapping.
    pub fn to_map(&self) -> FieldTree {
        self.builder.root_map()
    }
}

#[derive(Debug, Clone)]
pub struct IndividualRequest {
    builder: ScopedBuilder,
}

impl Scope for IndividualRequest {
    fn from_builder(builder: ScopedBuilder) -> Self {
        Self { builder }
    }
}

impl IndividualRequest {
    text_fields! {
        first_name => "first-name",
        last_name => "last-name",
        email => "email",
        phone => "phone",
        date_of_birth => "date-of-birth",
        ssn => "ssn",
    }

    pub fn address(self) -> AddressRequest<IndividualRequest> {
        enter(self.builder, "address")
    }

    /// # Errors
    /// `DuplicateScope` if the request already has individual details.
    pub fn done(self) -> DomainResult<MerchantAccountRequest> {
        close(self.builder)
    }
}

#[derive(Debug, Clone)]
pub struct BusinessRequest {
    builder: ScopedBuilder,
}

impl Scope for BusinessRequest {
    fn from_builder(builder: ScopedBuilder) -> Self {
        Self { builder }
    }
}

impl BusinessRequest {
    text_fields! {
        legal_name => "legal-name",
        dba_name => "dba-name",
        tax_id => "tax-id",
    }

    pub fn address(self) -> AddressRequest<BusinessRequest> {
        enter(self.builder, "address")
    }

    /// # Errors
    /// `DuplicateScope` if the request already has business details.
    pub fn done(self) -> DomainResult<MerchantAccountRequest> {
        close(self.builder)
    }
}

#[derive(Debug, Clone)]
pub struct FundingRequest {
    builder: ScopedBuilder,
}

impl Scope for FundingRequest {
    fn from_builder(builder: ScopedBuilder) -> Self {
        Self { builder }
    }
}

impl FundingRequest {
    text_fields! {
        email => "email",
        mobile_phone => "mobile-phone",
        routing_number => "routing-number",
        account_number => "account-number",
    }

    pub fn destination(mut self, destination: FundingDestination) -> Self {
        self.builder.write("destination", destination);
        self
    }

    /// # Errors
    /// `DuplicateScope` if the request already has funding details.
    pub fn done(self) -> DomainResult<MerchantAccountRequest> {
        close(self.builder)
    }
}

/// Deprecated flat applicant scope.
///
/// Every setter lands where the equivalent individual, business or funding
/// setter would, via the applicant alias table.
#[derive(Debug, Clone)]
pub struct ApplicantDetailsRequest {
    builder: ScopedBuilder,
}

impl Scope for ApplicantDetailsRequest {
    fn from_builder(builder: ScopedBuilder) -> Self {
        Self { builder }
    }
}

impl ApplicantDetailsRequest {
    text_fields! {
        first_name => "first-name",
        last_name => "last-name",
        email => "email",
        phone => "phone",
        date_of_birth => "date-of-birth",
        ssn => "ssn",
        routing_number => "routing-number",
        account_number => "account-number",
        tax_id => "tax-id",
        company_name => "company-name",
    }

    /// Address of the applicant, stored as the individual's address.
    pub fn address(self) -> AddressRequest<ApplicantDetailsRequest> {
        enter(self.builder, "address")
    }

    /// # Errors
    /// `DuplicateScope` if any aliased section already exists on the request.
    pub fn done(self) -> DomainResult<MerchantAccountRequest> {
        close(self.builder)
    }
}
