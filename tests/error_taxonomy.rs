//! Integration tests for the error taxonomy
//!
//! Tests the flow a handler follows on failure: operation context → API
//! response check → standard error → sanitized diagnostic

use pretty_assertions::assert_eq;
use saviynt_provider_core::canonical::{json_strings_equivalent, normalize_json_string};
use saviynt_provider_core::taxonomy::{
    check_api_response, create_standard_error, ErrorCategory, ErrorCodeGenerator,
    OperationContext, REDACTED_MESSAGE,
};
use std::collections::BTreeMap;
use std::error::Error as _;

#[test]
fn test_failed_read_becomes_diagnostic() {
    let ctx = OperationContext::new("saviynt_ad_connection_resource", "read", "AD")
        .with_connection_name("corp-ad");
    ctx.log_operation_start(&BTreeMap::new());

    let failure = check_api_response(
        200,
        "OK",
        r#"{"errorCode":"1","msg":"Connection corp-ad does not exist"}"#,
    )
    .unwrap_err();

    let code = ErrorCodeGenerator::for_connector("AD").generate(ErrorCategory::ApiOperation, 3);
    let err = create_standard_error("AD", &code, "read", "corp-ad", Some(Box::new(failure)));
    ctx.log_operation_error(&err, &BTreeMap::new());

    assert_eq!(err.category, ErrorCategory::ApiOperation);
    assert!(err.source().is_some());

    let diag = err.to_diagnostic();
    assert_eq!(diag.summary, "[AD_CONN_203] Read connection API call failed");
    assert_eq!(
        diag.detail,
        "[AD_CONN_203] Read connection API call failed during read operation for AD connection 'corp-ad': HTTP 200 OK (errorCode 1): Connection corp-ad does not exist"
    );
}

#[test]
fn test_credentials_never_reach_diagnostics() {
    let failure = check_api_response(
        401,
        "Unauthorized",
        r#"{"message":"invalid client secret for tenant"}"#,
    )
    .unwrap_err();
    assert_eq!(failure.message, REDACTED_MESSAGE);

    let err = create_standard_error(
        "REST",
        "REST_CONN_201",
        "create",
        "hr-feed",
        Some(Box::new(std::io::Error::other("Bearer eyJhbGciOi rejected"))),
    );
    let detail = err.to_diagnostic().detail;
    assert!(detail.ends_with(REDACTED_MESSAGE));
    assert!(!detail.contains("eyJhbGciOi"));
}

#[test]
fn test_json_attributes_compare_canonically() {
    let plan = r#"{"b":{"y":2,"x":1},"a":[{"d":1,"c":2}]}"#;
    let state = r#"{ "a": [ { "c": 2, "d": 1 } ], "b": { "x": 1, "y": 2 } }"#;

    assert!(json_strings_equivalent(plan, state));
    assert_eq!(
        normalize_json_string(plan).unwrap(),
        r#"{"a":[{"c":2,"d":1}],"b":{"x":1,"y":2}}"#
    );
}
