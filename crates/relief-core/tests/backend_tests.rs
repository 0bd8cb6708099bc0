use relief_core::backend::*;
use relief_core::BackendError;

#[test]
fn endpoint_urls_join_cleanly() {
    assert_eq!(
        Endpoint::GenerateImage.url("http://localhost:8000"),
        "http://localhost:8000/generate-image"
    );
    assert_eq!(
        Endpoint::GenerateDepth.url("http://localhost:8000/"),
        "http://localhost:8000/generate-depth"
    );
}

#[test]
fn blank_prompt_is_rejected_before_any_request() {
    let err = validate_prompt("   \n").unwrap_err();
    assert_eq!(err, BackendError::EmptyPrompt);
    assert_eq!(err.to_string(), "please enter a prompt for AI generation");
    assert_eq!(validate_prompt("  a cat  ").unwrap(), "a cat");
}

#[test]
fn request_bodies_use_the_service_field_names() {
    assert_eq!(
        image_request_body("a cat").unwrap(),
        r#"{"prompt":"a cat"}"#
    );
    assert_eq!(
        depth_request_body("http://x/a.png").unwrap(),
        r#"{"image_url":"http://x/a.png"}"#
    );
}

#[test]
fn successful_responses_yield_urls() {
    let url = parse_image_response(200, r#"{"image_url":"http://x/a.png"}"#).unwrap();
    assert_eq!(url, "http://x/a.png");
    let url = parse_depth_response(200, r#"{"depth_map_url":"http://x/d.png"}"#).unwrap();
    assert_eq!(url, "http://x/d.png");
}

#[test]
fn missing_or_empty_field_is_an_error() {
    assert_eq!(
        parse_image_response(200, "{}").unwrap_err(),
        BackendError::MissingField("image_url")
    );
    assert_eq!(
        parse_depth_response(200, r#"{"depth_map_url":""}"#).unwrap_err(),
        BackendError::MissingField("depth_map_url")
    );
}

#[test]
fn error_status_carries_server_detail() {
    let err = parse_image_response(500, r#"{"detail":"model offline"}"#).unwrap_err();
    assert_eq!(
        err,
        BackendError::Status {
            status: 500,
            detail: Some("model offline".into())
        }
    );
    assert_eq!(err.to_string(), "server error (500): model offline");

    let err = parse_depth_response(502, "").unwrap_err();
    assert_eq!(err.to_string(), "server error (502)");
}

#[test]
fn error_detail_falls_back_to_raw_body() {
    assert_eq!(error_detail("Bad Gateway").as_deref(), Some("Bad Gateway"));
    assert_eq!(
        error_detail(r#"{"detail":[{"msg":"field required"}]}"#).as_deref(),
        Some(r#"[{"msg":"field required"}]"#)
    );
    assert_eq!(error_detail("  "), None);
}

#[test]
fn malformed_json_is_reported() {
    let err = parse_image_response(200, "<html>").unwrap_err();
    assert!(matches!(err, BackendError::MalformedJson(_)));
}
