use super::*;

fn filled_flow() -> SendFlow {
    let mut flow = SendFlow::with_amount(1000.0, "USD", "EUR");
    flow.recipient.full_name = "Maria Lopez".to_owned();
    flow
}

// =============================================================
// Forward transitions
// =============================================================

#[test]
fn flow_starts_at_amount_entry() {
    assert_eq!(SendFlow::default().phase, SendPhase::Amount);
}

#[test]
fn advances_through_phases_in_order() {
    let mut flow = filled_flow();
    assert!(flow.advance());
    assert_eq!(flow.phase, SendPhase::Recipient);
    assert!(flow.advance());
    assert_eq!(flow.phase, SendPhase::PaymentMethod);
}

#[test]
fn advance_requires_positive_amount() {
    let mut flow = SendFlow::default();
    assert!(!flow.advance());
    assert_eq!(flow.phase, SendPhase::Amount);

    flow.amount = 250.0;
    assert!(flow.advance());
}

#[test]
fn advance_requires_recipient_name() {
    let mut flow = SendFlow::with_amount(1000.0, "USD", "EUR");
    flow.advance();
    assert_eq!(flow.phase, SendPhase::Recipient);

    flow.recipient.full_name = "   ".to_owned();
    assert!(!flow.advance());

    flow.recipient.full_name = "Maria Lopez".to_owned();
    assert!(flow.advance());
}

#[test]
fn submission_edge_is_explicit() {
    let mut flow = filled_flow();
    flow.advance();
    flow.advance();
    // advance() never leaves PaymentMethod; the dialog submits first.
    assert!(!flow.advance());
    assert_eq!(flow.phase, SendPhase::PaymentMethod);

    flow.mark_submitted();
    assert_eq!(flow.phase, SendPhase::Submitted);
    assert!(!flow.advance());
}

// =============================================================
// Back transitions
// =============================================================

#[test]
fn back_walks_the_phases_in_reverse() {
    let mut flow = filled_flow();
    flow.advance();
    flow.advance();

    assert!(flow.back());
    assert_eq!(flow.phase, SendPhase::Recipient);
    assert!(flow.back());
    assert_eq!(flow.phase, SendPhase::Amount);
}

#[test]
fn no_back_from_amount_or_submitted() {
    let mut flow = SendFlow::default();
    assert!(!flow.back());

    flow.mark_submitted();
    assert!(!flow.back());
    assert_eq!(flow.phase, SendPhase::Submitted);
}

// =============================================================
// Seeding
// =============================================================

#[test]
fn from_draft_restores_calculator_inputs() {
    let draft = crate::state::quote::DraftTransfer {
        amount: 750.0,
        currency_from: "GBP".to_owned(),
        currency_to: "EUR".to_owned(),
    };
    let flow = SendFlow::from_draft(&draft);
    assert_eq!(flow.phase, SendPhase::Amount);
    assert!((flow.amount - 750.0).abs() < 1e-9);
    assert_eq!(flow.currency_from, "GBP");
    assert_eq!(flow.quote().currency_to, "EUR");
}
