//! Tests for the validation-error tree

use rstest::{fixture, rstest};

use paytree::domain::{RawValidationError, ValidationErrorCode, ValidationErrors};

fn raw(path: &[&str], field: &str, code: &str) -> RawValidationError {
    RawValidationError::new(path.iter().copied(), field, code, &format!("{} {}", field, code))
}

#[fixture]
fn merchant_errors() -> ValidationErrors {
    ValidationErrors::from_raw(vec![
        raw(&["merchant-account", "individual"], "first-name", "MERCHANT_ACCOUNT_INDIVIDUAL_FIRST_NAME_IS_REQUIRED"),
        raw(&["merchant-account", "individual", "address"], "region", "MERCHANT_ACCOUNT_INDIVIDUAL_ADDRESS_REGION_IS_INVALID"),
        raw(&["merchant-account", "funding"], "destination", "MERCHANT_ACCOUNT_FUNDING_DESTINATION_IS_REQUIRED"),
        raw(&["merchant-account", "individual"], "first-name", "MERCHANT_ACCOUNT_INDIVIDUAL_FIRST_NAME_IS_INVALID"),
        raw(&["merchant-account"], "master_merchant_account_id", "MERCHANT_ACCOUNT_MASTER_MERCHANT_ACCOUNT_ID_IS_REQUIRED"),
        raw(&["merchant-account", "individual", "address"], "postal-code", "MERCHANT_ACCOUNT_INDIVIDUAL_ADDRESS_POSTAL_CODE_IS_INVALID"),
    ])
}

#[test]
fn given_error_tuples_when_querying_by_path_then_finds_codes() {
    // Arrange
    let errors = ValidationErrors::from_raw(vec![
        raw(&["individual"], "first-name", "IS_REQUIRED"),
        raw(&["individual", "address"], "postal-code", "IS_INVALID"),
    ]);

    // Act
    let first_name = errors.for_object("individual").on_field("first-name");
    let postal_code = errors
        .for_object("individual")
        .for_object("address")
        .on_field("postal-code");
    let tax_id = errors.for_object("business").on_field("tax-id");

    // Assert
    assert_eq!(first_name.len(), 1);
    assert_eq!(first_name[0].code(), &ValidationErrorCode::IsRequired);
    assert_eq!(postal_code.len(), 1);
    assert_eq!(postal_code[0].code(), &ValidationErrorCode::IsInvalid);
    assert!(tax_id.is_empty());
}

#[rstest]
#[case(&["merchant-account", "individual"], "first-name", 2)]
#[case(&["merchant-account", "individual", "address"], "region", 1)]
#[case(&["merchant-account", "individual", "address"], "postal-code", 1)]
#[case(&["merchant-account", "individual"], "region", 0)]
#[case(&["merchant-account", "funding"], "destination", 1)]
#[case(&["merchant-account"], "master_merchant_account_id", 1)]
#[case(&["merchant-account", "business", "address"], "region", 0)]
fn given_tree_when_descending_path_then_only_matching_entries(
    merchant_errors: ValidationErrors,
    #[case] path: &[&str],
    #[case] field: &str,
    #[case] expected: usize,
) {
    let node = path
        .iter()
        .fold(&merchant_errors, |node, name| node.for_object(name));

    let found = node.on_field(field);

    assert_eq!(found.len(), expected);
    assert!(found.iter().all(|e| e.field() == field));
}

#[rstest]
fn given_same_path_errors_when_built_then_input_order_kept(merchant_errors: ValidationErrors) {
    let first_name = merchant_errors
        .for_object("merchant-account")
        .for_object("individual")
        .on_field("first-name");

    let codes: Vec<_> = first_name.iter().map(|e| e.code().clone()).collect();
    assert_eq!(
        codes,
        vec![
            ValidationErrorCode::MerchantAccountIndividualFirstNameIsRequired,
            ValidationErrorCode::MerchantAccountIndividualFirstNameIsInvalid,
        ]
    );

    let address = merchant_errors
        .for_object("merchant-account")
        .for_object("individual")
        .for_object("address");
    let fields: Vec<_> = address.all().iter().map(|e| e.field()).collect();
    assert_eq!(fields, vec!["region", "postal-code"]);
}

#[rstest]
fn given_tree_when_counting_then_size_is_local_and_deep_size_recursive(
    merchant_errors: ValidationErrors,
) {
    let merchant = merchant_errors.for_object("merchant-account");

    assert_eq!(merchant_errors.size(), 0);
    assert_eq!(merchant_errors.deep_size(), 6);
    assert_eq!(merchant.size(), 1);
    assert_eq!(merchant.for_object("individual").size(), 2);
    assert_eq!(merchant.for_object("individual").deep_size(), 4);
    assert_eq!(merchant.all_deep().len(), 6);
}

#[rstest]
fn given_missing_object_when_chaining_then_every_query_is_empty(merchant_errors: ValidationErrors) {
    let missing = merchant_errors
        .for_object("merchant-account")
        .for_object("business")
        .for_object("address")
        .for_index(3);

    assert!(missing.is_empty());
    assert_eq!(missing.size(), 0);
    assert!(missing.all().is_empty());
    assert!(missing.all_deep().is_empty());
    assert!(missing.on_field("street-address").is_empty());
    assert_eq!(missing.object_names().count(), 0);
}

#[test]
fn given_empty_input_when_built_then_tree_is_empty() {
    let errors = ValidationErrors::from_raw(Vec::new());

    assert!(errors.is_empty());
    assert!(errors.for_object("merchant-account").on_field("id").is_empty());
}

#[test]
fn given_root_level_error_when_built_then_stored_at_root() {
    let errors = ValidationErrors::from_raw(vec![raw(&[], "id", "IS_INVALID")]);

    assert_eq!(errors.size(), 1);
    assert_eq!(errors.on_field("id")[0].message(), "id IS_INVALID");
}

#[test]
fn given_json_payload_when_decoded_then_tree_matches() {
    let payload = r#"[
        {"object_path": ["merchant-account", "funding"], "field": "email", "code": "MERCHANT_ACCOUNT_FUNDING_EMAIL_IS_INVALID", "message": "Funding email is invalid."},
        {"field": "base", "code": "91000", "message": "Something else."}
    ]"#;

    let raw: Vec<RawValidationError> = serde_json::from_str(payload).unwrap();
    let errors = ValidationErrors::from_raw(raw);

    assert_eq!(
        errors.for_object("merchant-account").for_object("funding").on_field("email")[0].code(),
        &ValidationErrorCode::MerchantAccountFundingEmailIsInvalid
    );
    assert_eq!(
        errors.on_field("base")[0].code(),
        &ValidationErrorCode::Unrecognized("91000".into())
    );
}
