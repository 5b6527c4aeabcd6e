use super::*;

// =============================================================
// Status classification
// =============================================================

#[test]
fn classify_401_is_unauthorized() {
    let err = classify(401, r#"{"detail": "Not authenticated"}"#);
    assert_eq!(err, ApiError::Unauthorized);
}

#[test]
fn classify_500_is_server() {
    let err = classify(500, "Internal Server Error");
    assert_eq!(err, ApiError::Server(500));
}

#[test]
fn classify_502_is_server() {
    assert_eq!(classify(502, ""), ApiError::Server(502));
}

#[test]
fn classify_400_with_string_detail_keeps_message() {
    let err = classify(400, r#"{"detail": "Incorrect email or password"}"#);
    match err {
        ApiError::Validation { message, fields } => {
            assert_eq!(message, "Incorrect email or password");
            assert!(fields.is_empty());
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn classify_422_with_field_list_extracts_fields() {
    let body = r#"{"detail": [
        {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error.email"},
        {"loc": ["body", "password"], "msg": "ensure this value has at least 8 characters", "type": "value_error"}
    ]}"#;
    let err = classify(422, body);
    match err {
        ApiError::Validation { fields, .. } => {
            assert_eq!(fields.len(), 2);
            assert_eq!(fields[0].field, "email");
            assert_eq!(fields[0].message, "value is not a valid email address");
            assert_eq!(fields[1].field, "password");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn classify_4xx_with_garbage_body_falls_back() {
    let err = classify(422, "<html>nope</html>");
    match err {
        ApiError::Validation { fields, .. } => assert!(fields.is_empty()),
        other => panic!("expected Validation, got {other:?}"),
    }
}

// =============================================================
// User-readable messages
// =============================================================

#[test]
fn unauthorized_message_mentions_logging_in() {
    assert!(ApiError::Unauthorized.to_string().contains("log in"));
}

#[test]
fn network_message_is_generic() {
    let err = ApiError::Network("fetch failed".to_owned());
    assert!(err.to_string().contains("Could not reach the server"));
}

#[test]
fn server_message_includes_status() {
    assert!(ApiError::Server(503).to_string().contains("503"));
}
