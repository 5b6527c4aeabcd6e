use super::*;
use crate::util::format;

// =============================================================
// Fee schedule: max(1, 1% of amount)
// =============================================================

#[test]
fn fee_is_one_percent_above_the_floor() {
    assert!((Quote::placeholder(1000.0, "USD", "EUR").fee() - 10.0).abs() < 1e-9);
    assert!((Quote::placeholder(250.0, "USD", "EUR").fee() - 2.5).abs() < 1e-9);
}

#[test]
fn fee_floors_at_one_unit_for_small_amounts() {
    assert!((Quote::placeholder(50.0, "USD", "EUR").fee() - 1.0).abs() < 1e-9);
    assert!((Quote::placeholder(0.0, "USD", "EUR").fee() - 1.0).abs() < 1e-9);
}

#[test]
fn fee_crossover_at_one_hundred() {
    // 1% of 100 equals the floor exactly.
    assert!((Quote::placeholder(100.0, "USD", "EUR").fee() - 1.0).abs() < 1e-9);
    assert!(Quote::placeholder(100.01, "USD", "EUR").fee() > 1.0);
}

// =============================================================
// Receive amount: (amount - fee) * rate
// =============================================================

#[test]
fn thousand_dollar_scenario_exactly() {
    let quote = Quote::placeholder(1000.0, "USD", "EUR");
    assert_eq!(format::amount_2dp(quote.fee()), "10.00");
    assert_eq!(format::amount_2dp(quote.receive_amount()), "910.80");
    assert_eq!(format::amount_2dp(quote.total_cost()), "1,010.00");
}

#[test]
fn receive_amount_uses_the_configured_rate() {
    let quote = Quote::placeholder(500.0, "USD", "EUR");
    let expected = (500.0 - 5.0) * PLACEHOLDER_RATE;
    assert!((quote.receive_amount() - expected).abs() < 1e-9);
}

#[test]
fn zero_amount_goes_negative_by_the_fee_floor() {
    // Nothing stops a zero quote in the widget; the receive amount simply
    // reflects the fee floor. The form blocks submission separately.
    let quote = Quote::placeholder(0.0, "USD", "EUR");
    assert!(quote.receive_amount() < 0.0);
}

// =============================================================
// Draft persistence round-trip
// =============================================================

#[test]
fn draft_transfer_serializes_stably() {
    let draft = DraftTransfer {
        amount: 1000.0,
        currency_from: "USD".to_owned(),
        currency_to: "EUR".to_owned(),
    };
    let raw = serde_json::to_string(&draft).unwrap();
    let back: DraftTransfer = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, draft);
}
