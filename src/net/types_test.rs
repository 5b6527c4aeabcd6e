use super::*;

// =============================================================
// Deserialization of realistic API payloads
// =============================================================

#[test]
fn user_deserializes_with_missing_optionals() {
    let body = r#"{
        "id": "4be0643f-1d98-573b-97cd-ca98a65347dd",
        "email": "user@remity.io",
        "is_active": true,
        "is_superuser": false
    }"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.email, "user@remity.io");
    assert!(user.full_name.is_none());
    assert!(!user.is_superuser);
    assert_eq!(user.display_name(), "user@remity.io");
}

#[test]
fn user_display_name_prefers_full_name() {
    let body = r#"{
        "id": "4be0643f-1d98-573b-97cd-ca98a65347dd",
        "email": "user@remity.io",
        "full_name": "Test User",
        "is_active": true,
        "is_superuser": true
    }"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.display_name(), "Test User");
    assert!(user.is_superuser);
}

#[test]
fn transaction_deserializes_user_listing_shape() {
    // User-scoped listings carry the recipient but no `user` field.
    let body = r#"{
        "id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
        "amount": 1000.0,
        "currency_from": "USD",
        "currency_to": "EUR",
        "exchange_rate": 0.92,
        "fee_amount": 10.0,
        "total_amount": 1010.0,
        "status": "pending",
        "recipient": {"full_name": "Maria Lopez", "email": "maria@example.com"},
        "created_at": "2026-08-01T12:30:00Z"
    }"#;
    let tx: Transaction = serde_json::from_str(body).unwrap();
    assert_eq!(tx.status, "pending");
    assert_eq!(tx.recipient.full_name, "Maria Lopez");
    assert!(tx.user.is_none());
    assert!(tx.notes.is_none());
}

#[test]
fn token_response_tolerates_missing_refresh_token() {
    let tok: TokenResponse = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
    assert_eq!(tok.access_token, "abc");
    assert!(tok.refresh_token.is_none());
}

// =============================================================
// Review payload helpers
// =============================================================

#[test]
fn approve_sets_completed_and_nothing_else() {
    let update = TransactionUpdate::approve();
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json["status"], "completed");
    assert!(json.get("notes").is_none());
    assert!(json.get("proof_of_payment_url").is_none());
}

#[test]
fn reject_records_reason_in_notes() {
    let update = TransactionUpdate::reject("sanctions screening failed");
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json["status"], "failed");
    assert_eq!(json["notes"], "sanctions screening failed");
}

#[test]
fn default_update_serializes_empty() {
    let json = serde_json::to_string(&TransactionUpdate::default()).unwrap();
    assert_eq!(json, "{}");
}
