//! Static scope schema: which child scopes each node kind accepts, and the
//! translation table for the deprecated applicant-details scope.

use std::fmt;

/// Kind of a node in a request tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    MerchantAccount,
    Individual,
    Business,
    Funding,
    Address,
    /// Deprecated flat scope; writes are translated via [`APPLICANT_ALIASES`]
    ApplicantDetails,
    CreditCard,
    BillingAddress,
    CreditCardOptions,
}

impl NodeKind {
    /// Name of the object this kind represents at the top of a request.
    pub fn root_name(self) -> &'static str {
        match self {
            NodeKind::MerchantAccount => "merchant-account",
            NodeKind::Individual => "individual",
            NodeKind::Business => "business",
            NodeKind::Funding => "funding",
            NodeKind::Address => "address",
            NodeKind::ApplicantDetails => "applicant-details",
            NodeKind::CreditCard => "credit-card",
            NodeKind::BillingAddress => "billing-address",
            NodeKind::CreditCardOptions => "options",
        }
    }

    /// Kind of the child scope entered under `name`, if the schema allows it.
    pub fn child(self, name: &str) -> Option<NodeKind> {
        match (self, name) {
            (NodeKind::MerchantAccount, "individual") => Some(NodeKind::Individual),
            (NodeKind::MerchantAccount, "business") => Some(NodeKind::Business),
            (NodeKind::MerchantAccount, "funding") => Some(NodeKind::Funding),
            (NodeKind::MerchantAccount, "applicant-details") => Some(NodeKind::ApplicantDetails),
            (NodeKind::Individual, "address")
            | (NodeKind::Business, "address")
            | (NodeKind::ApplicantDetails, "address") => Some(NodeKind::Address),
            (NodeKind::CreditCard, "billing-address") => Some(NodeKind::BillingAddress),
            (NodeKind::CreditCard, "options") => Some(NodeKind::CreditCardOptions),
            _ => None,
        }
    }

    /// Whether writes in this scope are redirected through the alias table.
    pub fn is_alias(self) -> bool {
        matches!(self, NodeKind::ApplicantDetails)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root_name())
    }
}

/// Canonical location of a deprecated field or scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    /// Name used by the deprecated scope
    pub deprecated: &'static str,
    /// Path of nested objects, relative to the deprecated scope's parent
    pub target: &'static [&'static str],
    /// Field (or scope) name at the target
    pub canonical: &'static str,
}

const fn alias(
    deprecated: &'static str,
    target: &'static [&'static str],
    canonical: &'static str,
) -> Alias {
    Alias {
        deprecated,
        target,
        canonical,
    }
}

/// Applicant-details field → (nested path, canonical field).
///
/// The `address` entry maps the nested scope itself. Fields missing here
/// cannot be written through the deprecated scope.
pub const APPLICANT_ALIASES: &[Alias] = &[
    alias("first-name", &["individual"], "first-name"),
    alias("last-name", &["individual"], "last-name"),
    alias("email", &["individual"], "email"),
    alias("phone", &["individual"], "phone"),
    alias("date-of-birth", &["individual"], "date-of-birth"),
    alias("ssn", &["individual"], "ssn"),
    alias("address", &["individual"], "address"),
    alias("routing-number", &["funding"], "routing-number"),
    alias("account-number", &["funding"], "account-number"),
    alias("tax-id", &["business"], "tax-id"),
    alias("company-name", &["business"], "legal-name"),
];

/// Look up the canonical location of a deprecated name.
pub fn applicant_alias(deprecated: &str) -> Option<&'static Alias> {
    APPLICANT_ALIASES.iter().find(|a| a.deprecated == deprecated)
}
