//! Domain entities: gateway resources decoded from response field trees

use crate::domain::error::DecodeError;
use crate::domain::value::{FieldTree, FieldValue};

/// Where a sub-merchant's funds are disbursed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundingDestination {
    Bank,
    Email,
    MobilePhone,
    Unrecognized,
}

impl FundingDestination {
    pub fn as_symbol(self) -> &'static str {
        match self {
            FundingDestination::Bank => "BANK",
            FundingDestination::Email => "EMAIL",
            FundingDestination::MobilePhone => "MOBILE_PHONE",
            FundingDestination::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Parse a symbol case-insensitively; unknown values are `Unrecognized`.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol.to_ascii_uppercase().as_str() {
            "BANK" => FundingDestination::Bank,
            "EMAIL" => FundingDestination::Email,
            "MOBILE_PHONE" => FundingDestination::MobilePhone,
            _ => FundingDestination::Unrecognized,
        }
    }
}

impl From<FundingDestination> for FieldValue {
    fn from(value: FundingDestination) -> Self {
        FieldValue::Symbol(value.as_symbol().to_string())
    }
}

/// Lifecycle state of a merchant account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Pending,
    Active,
    Suspended,
    Unrecognized,
}

impl Status {
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol.to_ascii_lowercase().as_str() {
            "pending" => Status::Pending,
            "active" => Status::Active,
            "suspended" => Status::Suspended,
            _ => Status::Unrecognized,
        }
    }
}

/// Postal address attached to individual or business details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDetails {
    pub street_address: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndividualDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub ssn_last_4: Option<String>,
    pub address: Option<AddressDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessDetails {
    pub legal_name: Option<String>,
    pub dba_name: Option<String>,
    pub tax_id: Option<String>,
    pub address: Option<AddressDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingDetails {
    pub destination: FundingDestination,
    pub email: Option<String>,
    pub mobile_phone: Option<String>,
    pub routing_number: Option<String>,
    pub account_number_last_4: Option<String>,
}

/// A merchant account, possibly a sub-merchant of a master account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantAccount {
    pub id: String,
    pub status: Status,
    pub master_merchant_account: Option<Box<MerchantAccount>>,
    pub individual_details: Option<IndividualDetails>,
    pub business_details: Option<BusinessDetails>,
    pub funding_details: Option<FundingDetails>,
}

impl MerchantAccount {
    pub fn is_sub_merchant(&self) -> bool {
        self.master_merchant_account.is_some()
    }

    /// Decode a merchant account from response fields.
    ///
    /// `id` and `status` are required; every detail section is optional.
    pub fn from_fields(fields: &FieldTree) -> Result<Self, DecodeError> {
        let master_merchant_account = fields
            .node("master-merchant-account")
            .map(|m| MerchantAccount::from_fields(m).map(Box::new))
            .transpose()?;

        Ok(Self {
            id: required(fields, "id")?,
            status: Status::from_symbol(&required(fields, "status")?),
            master_merchant_account,
            individual_details: fields.node("individual").map(|n| IndividualDetails {
                first_name: optional(n, "first-name"),
                last_name: optional(n, "last-name"),
                email: optional(n, "email"),
                phone: optional(n, "phone"),
                date_of_birth: optional(n, "date-of-birth"),
                ssn_last_4: optional(n, "ssn-last-4"),
                address: n.node("address").map(address),
            }),
            business_details: fields.node("business").map(|n| BusinessDetails {
                legal_name: optional(n, "legal-name"),
                dba_name: optional(n, "dba-name"),
                tax_id: optional(n, "tax-id"),
                address: n.node("address").map(address),
            }),
            funding_details: fields.node("funding").map(|n| FundingDetails {
                destination: n
                    .text("destination")
                    .map(FundingDestination::from_symbol)
                    .unwrap_or(FundingDestination::Unrecognized),
                email: optional(n, "email"),
                mobile_phone: optional(n, "mobile-phone"),
                routing_number: optional(n, "routing-number"),
                account_number_last_4: optional(n, "account-number-last-4"),
            }),
        })
    }
}

/// A stored credit card, as returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCard {
    pub token: String,
    pub customer_id: Option<String>,
    pub cardholder_name: Option<String>,
    pub bin: Option<String>,
    pub last_4: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
}

impl CreditCard {
    pub fn from_fields(fields: &FieldTree) -> Result<Self, DecodeError> {
        Ok(Self {
            token: required(fields, "token")?,
            customer_id: optional(fields, "customer-id"),
            cardholder_name: optional(fields, "cardholder-name"),
            bin: optional(fields, "bin"),
            last_4: optional(fields, "last-4"),
            expiration_month: optional(fields, "expiration-month"),
            expiration_year: optional(fields, "expiration-year"),
        })
    }

    /// `MM/YYYY`, if both parts are known.
    pub fn expiration_date(&self) -> Option<String> {
        match (&self.expiration_month, &self.expiration_year) {
            (Some(m), Some(y)) => Some(format!("{}/{}", m, y)),
            _ => None,
        }
    }
}

fn address(n: &FieldTree) -> AddressDetails {
    AddressDetails {
        street_address: optional(n, "street-address"),
        locality: optional(n, "locality"),
        region: optional(n, "region"),
        postal_code: optional(n, "postal-code"),
    }
}

fn optional(fields: &FieldTree, name: &str) -> Option<String> {
    fields.text(name).map(str::to_string)
}

fn required(fields: &FieldTree, name: &str) -> Result<String, DecodeError> {
    optional(fields, name).ok_or_else(|| DecodeError {
        message: format!("missing field '{}'", name),
    })
}
