//! Wire types for the remittance API.
//!
//! The client renders what the API sends and forwards edits verbatim; it
//! never computes or validates these fields locally. Timestamps stay as the
//! ISO strings the API produces and are only reformatted for display.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user profile from `GET /users/me`.
///
/// Replaced wholesale on every re-fetch, never patched field-by-field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Display name for headers, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}

/// Registration payload for `POST /users/`.
#[derive(Clone, Debug, Serialize)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Response from `POST /auth/login`.
///
/// The refresh token is deserialized but unused; no rotation is implemented.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Name/email pair embedded in transaction listings for the recipient and,
/// on admin listings, the sending user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySummary {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A transaction record as listed by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub currency_from: String,
    pub currency_to: String,
    pub exchange_rate: f64,
    pub fee_amount: f64,
    pub total_amount: f64,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub proof_of_payment_url: Option<String>,
    #[serde(default)]
    pub recipient: PartySummary,
    /// Sending user; present on admin listings only.
    #[serde(default)]
    pub user: Option<PartySummary>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for `POST /transactions/`. Quote fields are forwarded verbatim
/// from the calculator; the server re-validates everything.
#[derive(Clone, Debug, Serialize)]
pub struct TransactionCreate {
    pub recipient_id: Uuid,
    pub amount: f64,
    pub currency_from: String,
    pub currency_to: String,
    pub exchange_rate: f64,
    pub fee_amount: f64,
    pub total_amount: f64,
    pub payment_method: String,
}

/// Partial update for `PATCH /transactions/{id}/admin`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TransactionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_of_payment_url: Option<String>,
}

impl TransactionUpdate {
    /// Approve: the backend treats `completed` as the approved state.
    pub fn approve() -> Self {
        Self {
            status: Some("completed".to_owned()),
            ..Self::default()
        }
    }

    /// Reject with a mandatory reason, recorded in the notes field.
    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            status: Some("failed".to_owned()),
            notes: Some(reason.into()),
            ..Self::default()
        }
    }
}

/// A saved payee record from `GET /recipients/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub id: Uuid,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Payload for `POST /recipients/`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RecipientCreate {
    pub full_name: String,
    pub email: String,
    pub bank_name: String,
    pub account_number: String,
    pub country: String,
}
