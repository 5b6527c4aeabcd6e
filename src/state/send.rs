//! Multi-step send flow: amount → recipient → payment method → submitted.
//!
//! A linear phase machine with back transitions only; submission itself is
//! an API call, so the final forward edge is taken by the dialog after the
//! transaction is created.

#[cfg(test)]
#[path = "send_test.rs"]
mod send_test;

use super::quote::{DraftTransfer, Quote};

/// Phases of the send flow, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendPhase {
    #[default]
    Amount,
    Recipient,
    PaymentMethod,
    Submitted,
}

/// Recipient form fields, forwarded verbatim to `POST /recipients/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipientForm {
    pub full_name: String,
    pub email: String,
    pub bank_name: String,
    pub account_number: String,
    pub country: String,
}

impl Default for RecipientForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            bank_name: String::new(),
            account_number: String::new(),
            country: "US".to_owned(),
        }
    }
}

/// State of one transfer being composed.
#[derive(Clone, Debug, PartialEq)]
pub struct SendFlow {
    pub phase: SendPhase,
    pub amount: f64,
    pub currency_from: String,
    pub currency_to: String,
    pub recipient: RecipientForm,
    pub payment_method: String,
}

impl Default for SendFlow {
    fn default() -> Self {
        Self {
            phase: SendPhase::Amount,
            amount: 0.0,
            currency_from: "USD".to_owned(),
            currency_to: "EUR".to_owned(),
            recipient: RecipientForm::default(),
            payment_method: "bank_transfer".to_owned(),
        }
    }
}

impl SendFlow {
    /// Seed the flow from calculator inputs.
    pub fn with_amount(amount: f64, currency_from: &str, currency_to: &str) -> Self {
        Self {
            amount,
            currency_from: currency_from.to_owned(),
            currency_to: currency_to.to_owned(),
            ..Self::default()
        }
    }

    /// Resume a draft saved before login.
    pub fn from_draft(draft: &DraftTransfer) -> Self {
        Self::with_amount(draft.amount, &draft.currency_from, &draft.currency_to)
    }

    /// Quote for the current inputs.
    pub fn quote(&self) -> Quote {
        Quote::placeholder(self.amount, &self.currency_from, &self.currency_to)
    }

    /// Whether the current phase's inputs pass the minimal client checks.
    pub fn phase_complete(&self) -> bool {
        match self.phase {
            SendPhase::Amount => self.amount > 0.0,
            SendPhase::Recipient => !self.recipient.full_name.trim().is_empty(),
            SendPhase::PaymentMethod => !self.payment_method.is_empty(),
            SendPhase::Submitted => false,
        }
    }

    /// Move to the next phase if the current one is complete. The
    /// `PaymentMethod → Submitted` edge is reserved for [`Self::mark_submitted`],
    /// taken only after the API accepts the transaction.
    pub fn advance(&mut self) -> bool {
        if !self.phase_complete() {
            return false;
        }
        self.phase = match self.phase {
            SendPhase::Amount => SendPhase::Recipient,
            SendPhase::Recipient => SendPhase::PaymentMethod,
            SendPhase::PaymentMethod | SendPhase::Submitted => return false,
        };
        true
    }

    /// Step back to the previous phase. No-op at the start, and once
    /// submitted the flow cannot be reopened.
    pub fn back(&mut self) -> bool {
        self.phase = match self.phase {
            SendPhase::Recipient => SendPhase::Amount,
            SendPhase::PaymentMethod => SendPhase::Recipient,
            SendPhase::Amount | SendPhase::Submitted => return false,
        };
        true
    }

    /// The transaction was accepted by the API.
    pub fn mark_submitted(&mut self) {
        self.phase = SendPhase::Submitted;
    }
}
