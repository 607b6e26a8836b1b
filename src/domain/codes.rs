//! Gateway validation error codes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! validation_error_codes {
    ($($variant:ident => $symbol:literal,)*) => {
        /// Symbolic code of a gateway validation error.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum ValidationErrorCode {
            $($variant,)*
            /// Code not known to this crate, kept verbatim
            Unrecognized(String),
        }

        impl ValidationErrorCode {
            pub fn as_str(&self) -> &str {
                match self {
                    $(ValidationErrorCode::$variant => $symbol,)*
                    ValidationErrorCode::Unrecognized(s) => s,
                }
            }

            /// Parse a code symbol. Unknown symbols become `Unrecognized`.
            pub fn parse(symbol: &str) -> Self {
                match symbol {
                    $($symbol => ValidationErrorCode::$variant,)*
                    other => ValidationErrorCode::Unrecognized(other.to_string()),
                }
            }
        }
    };
}

validation_error_codes! {
    IsRequired => "IS_REQUIRED",
    IsInvalid => "IS_INVALID",

    MerchantAccountMasterMerchantAccountIdIsRequired => "MERCHANT_ACCOUNT_MASTER_MERCHANT_ACCOUNT_ID_IS_REQUIRED",
    MerchantAccountTosAcceptedIsRequired => "MERCHANT_ACCOUNT_TOS_ACCEPTED_IS_REQUIRED",

    MerchantAccountIndividualFirstNameIsRequired => "MERCHANT_ACCOUNT_INDIVIDUAL_FIRST_NAME_IS_REQUIRED",
    MerchantAccountIndividualFirstNameIsInvalid => "MERCHANT_ACCOUNT_INDIVIDUAL_FIRST_NAME_IS_INVALID",
    MerchantAccountIndividualLastNameIsRequired => "MERCHANT_ACCOUNT_INDIVIDUAL_LAST_NAME_IS_REQUIRED",
    MerchantAccountIndividualLastNameIsInvalid => "MERCHANT_ACCOUNT_INDIVIDUAL_LAST_NAME_IS_INVALID",
    MerchantAccountIndividualDateOfBirthIsRequired => "MERCHANT_ACCOUNT_INDIVIDUAL_DATE_OF_BIRTH_IS_REQUIRED",
    MerchantAccountIndividualDateOfBirthIsInvalid => "MERCHANT_ACCOUNT_INDIVIDUAL_DATE_OF_BIRTH_IS_INVALID",
    MerchantAccountIndividualEmailIsRequired => "MERCHANT_ACCOUNT_INDIVIDUAL_EMAIL_IS_REQUIRED",
    MerchantAccountIndividualEmailIsInvalid => "MERCHANT_ACCOUNT_INDIVIDUAL_EMAIL_IS_INVALID",
    MerchantAccountIndividualPhoneIsInvalid => "MERCHANT_ACCOUNT_INDIVIDUAL_PHONE_IS_INVALID",
    MerchantAccountIndividualSsnIsInvalid => "MERCHANT_ACCOUNT_INDIVIDUAL_SSN_IS_INVALID",
    MerchantAccountIndividualAddressStreetAddressIsRequired => "MERCHANT_ACCOUNT_INDIVIDUAL_ADDRESS_STREET_ADDRESS_IS_REQUIRED",
    MerchantAccountIndividualAddressStreetAddressIsInvalid => "MERCHANT_ACCOUNT_INDIVIDUAL_ADDRESS_STREET_ADDRESS_IS_INVALID",
    MerchantAccountIndividualAddressLocalityIsRequired => "MERCHANT_ACCOUNT_INDIVIDUAL_ADDRESS_LOCALITY_IS_REQUIRED",
    MerchantAccountIndividualAddressPostalCodeIsRequired => "MERCHANT_ACCOUNT_INDIVIDUAL_ADDRESS_POSTAL_CODE_IS_REQUIRED",
    MerchantAccountIndividualAddressPostalCodeIsInvalid => "MERCHANT_ACCOUNT_INDIVIDUAL_ADDRESS_POSTAL_CODE_IS_INVALID",
    MerchantAccountIndividualAddressRegionIsRequired => "MERCHANT_ACCOUNT_INDIVIDUAL_ADDRESS_REGION_IS_REQUIRED",
    MerchantAccountIndividualAddressRegionIsInvalid => "MERCHANT_ACCOUNT_INDIVIDUAL_ADDRESS_REGION_IS_INVALID",

    MerchantAccountBusinessDbaNameIsInvalid => "MERCHANT_ACCOUNT_BUSINESS_DBA_NAME_IS_INVALID",
    MerchantAccountBusinessLegalNameIsInvalid => "MERCHANT_ACCOUNT_BUSINESS_LEGAL_NAME_IS_INVALID",
    MerchantAccountBusinessTaxIdIsInvalid => "MERCHANT_ACCOUNT_BUSINESS_TAX_ID_IS_INVALID",
    MerchantAccountBusinessAddressStreetAddressIsInvalid => "MERCHANT_ACCOUNT_BUSINESS_ADDRESS_STREET_ADDRESS_IS_INVALID",
    MerchantAccountBusinessAddressPostalCodeIsInvalid => "MERCHANT_ACCOUNT_BUSINESS_ADDRESS_POSTAL_CODE_IS_INVALID",
    MerchantAccountBusinessAddressRegionIsInvalid => "MERCHANT_ACCOUNT_BUSINESS_ADDRESS_REGION_IS_INVALID",

    MerchantAccountFundingDestinationIsRequired => "MERCHANT_ACCOUNT_FUNDING_DESTINATION_IS_REQUIRED",
    MerchantAccountFundingDestinationIsInvalid => "MERCHANT_ACCOUNT_FUNDING_DESTINATION_IS_INVALID",
    MerchantAccountFundingAccountNumberIsInvalid => "MERCHANT_ACCOUNT_FUNDING_ACCOUNT_NUMBER_IS_INVALID",
    MerchantAccountFundingRoutingNumberIsInvalid => "MERCHANT_ACCOUNT_FUNDING_ROUTING_NUMBER_IS_INVALID",
    MerchantAccountFundingEmailIsInvalid => "MERCHANT_ACCOUNT_FUNDING_EMAIL_IS_INVALID",
    MerchantAccountFundingMobilePhoneIsInvalid => "MERCHANT_ACCOUNT_FUNDING_MOBILE_PHONE_IS_INVALID",
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ValidationErrorCode {
    fn from(symbol: &str) -> Self {
        ValidationErrorCode::parse(symbol)
    }
}

impl Serialize for ValidationErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ValidationErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        Ok(ValidationErrorCode::parse(&symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_symbol_parses_to_variant() {
        assert_eq!(
            ValidationErrorCode::parse("MERCHANT_ACCOUNT_FUNDING_EMAIL_IS_INVALID"),
            ValidationErrorCode::MerchantAccountFundingEmailIsInvalid
        );
        assert_eq!(ValidationErrorCode::IsRequired.as_str(), "IS_REQUIRED");
    }

    #[test]
    fn test_unknown_symbol_is_kept() {
        let code = ValidationErrorCode::parse("81813");
        assert_eq!(code, ValidationErrorCode::Unrecognized("81813".into()));
        assert_eq!(code.to_string(), "81813");
    }
}
