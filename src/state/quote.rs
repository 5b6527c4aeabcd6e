//! Client-side conversion quote.
//!
//! PLACEHOLDER
//! ===========
//! The fee schedule and exchange rate below are marketing-page placeholders,
//! not a pricing contract. A production build must replace
//! [`Quote::placeholder`] with a call to the backend quoting endpoint and
//! forward whatever it returns. The server re-validates every figure on
//! transaction creation either way.

#[cfg(test)]
#[path = "quote_test.rs"]
mod quote_test;

use serde::{Deserialize, Serialize};

/// Placeholder USD→EUR rate shown on the landing page.
pub const PLACEHOLDER_RATE: f64 = 0.92;

/// Fee: 1% of the send amount, with a one-unit floor.
pub const FEE_RATE: f64 = 0.01;
pub const MIN_FEE: f64 = 1.0;

/// A conversion quote: send amount, currency pair, and rate.
#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    pub amount: f64,
    pub currency_from: String,
    pub currency_to: String,
    pub exchange_rate: f64,
}

impl Quote {
    /// Build a quote from the placeholder constants.
    pub fn placeholder(amount: f64, currency_from: &str, currency_to: &str) -> Self {
        Self {
            amount,
            currency_from: currency_from.to_owned(),
            currency_to: currency_to.to_owned(),
            exchange_rate: PLACEHOLDER_RATE,
        }
    }

    /// `max(1, 1% of amount)`.
    pub fn fee(&self) -> f64 {
        (self.amount * FEE_RATE).max(MIN_FEE)
    }

    /// Amount the recipient receives: `(amount - fee) * rate`.
    pub fn receive_amount(&self) -> f64 {
        (self.amount - self.fee()) * self.exchange_rate
    }

    /// Total the sender pays: `amount + fee`.
    pub fn total_cost(&self) -> f64 {
        self.amount + self.fee()
    }
}

/// Calculator inputs persisted to `localStorage` when an anonymous visitor
/// starts a transfer, so the send flow can resume after login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftTransfer {
    pub amount: f64,
    pub currency_from: String,
    pub currency_to: String,
}
