use super::*;

// =============================================================
// Money formatting
// =============================================================

#[test]
fn money_groups_thousands_and_pads_cents() {
    assert_eq!(money(1234.5, "USD"), "1,234.50 USD");
    assert_eq!(money(1_000_000.0, "EUR"), "1,000,000.00 EUR");
}

#[test]
fn money_small_amounts() {
    assert_eq!(money(0.0, "USD"), "0.00 USD");
    assert_eq!(money(999.99, "USD"), "999.99 USD");
}

#[test]
fn money_rounds_to_cents() {
    assert_eq!(amount_2dp(910.800_000_000_1), "910.80");
    assert_eq!(amount_2dp(0.005), "0.01");
}

#[test]
fn money_negative_amounts() {
    assert_eq!(money(-42.5, "USD"), "-42.50 USD");
}

// =============================================================
// Dates and identifiers
// =============================================================

#[test]
fn short_date_truncates_iso_timestamp() {
    assert_eq!(short_date("2026-08-01T12:30:45Z"), "2026-08-01 12:30");
    assert_eq!(short_date("2026-08-01T12:30:45.123456"), "2026-08-01 12:30");
}

#[test]
fn short_date_passes_through_non_timestamps() {
    assert_eq!(short_date("yesterday"), "yesterday");
    assert_eq!(short_date(""), "");
}

#[test]
fn short_id_truncates_uuids() {
    assert_eq!(
        short_id("6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
        "6ba7b810\u{2026}"
    );
    assert_eq!(short_id("short"), "short");
}
