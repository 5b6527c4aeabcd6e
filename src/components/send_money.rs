//! Multi-step send-money dialog: amount → recipient → payment method →
//! confirmation.
//!
//! Submission creates the recipient, then the transaction with the quote
//! fields forwarded verbatim, then hands control back to the caller (which
//! refetches its transaction list wholesale).

use leptos::prelude::*;

use crate::components::notices::{push_notice, report_api_error};
use crate::net::api;
use crate::net::types::{RecipientCreate, TransactionCreate};
use crate::state::notices::{NoticeLevel, NoticeState};
use crate::state::send::{SendFlow, SendPhase};
use crate::state::session::SessionState;
use crate::util::{format, storage};

const PAYMENT_METHODS: [(&str, &str); 2] =
    [("bank_transfer", "Bank transfer"), ("card", "Debit card")];

/// Modal dialog driving one transfer through the send flow.
#[component]
pub fn SendMoneyDialog(
    flow: RwSignal<SendFlow>,
    on_close: Callback<()>,
    on_submitted: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let submitting = RwSignal::new(false);

    let advance = move |_| {
        flow.update(|f| {
            f.advance();
        });
    };
    let back = move |_| {
        flow.update(|f| {
            f.back();
        });
    };

    let on_submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
            return;
        };
        let f = flow.get_untracked();
        submitting.set(true);

        leptos::task::spawn_local(async move {
            let recipient = RecipientCreate {
                full_name: f.recipient.full_name.clone(),
                email: f.recipient.email.clone(),
                bank_name: f.recipient.bank_name.clone(),
                account_number: f.recipient.account_number.clone(),
                country: f.recipient.country.clone(),
            };
            match api::create_recipient(&token, &recipient).await {
                Err(err) => report_api_error(session, notices, "creating recipient", &err),
                Ok(saved) => {
                    let quote = f.quote();
                    let payload = TransactionCreate {
                        recipient_id: saved.id,
                        amount: quote.amount,
                        currency_from: quote.currency_from.clone(),
                        currency_to: quote.currency_to.clone(),
                        exchange_rate: quote.exchange_rate,
                        fee_amount: quote.fee(),
                        total_amount: quote.total_cost(),
                        payment_method: f.payment_method.clone(),
                    };
                    match api::create_transaction(&token, &payload).await {
                        Err(err) => report_api_error(session, notices, "creating transfer", &err),
                        Ok(_) => {
                            storage::clear_draft();
                            flow.update(SendFlow::mark_submitted);
                            push_notice(
                                notices,
                                NoticeLevel::Success,
                                "Transfer created. Track it in your dashboard.".to_owned(),
                            );
                            on_submitted.run(());
                        }
                    }
                }
            }
            submitting.set(false);
        });
    };

    let phase_view = move || match flow.get().phase {
        SendPhase::Amount => view! {
            <div class="send-dialog__phase">
                <label class="dialog__label">
                    "Amount to send"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        prop:value=move || flow.with(|f| format!("{}", f.amount))
                        on:input=move |ev| {
                            flow.update(|f| f.amount = event_target_value(&ev).parse().unwrap_or(0.0));
                        }
                    />
                </label>
                <p class="send-dialog__quote">
                    {move || {
                        let q = flow.with(SendFlow::quote);
                        format!(
                            "Fee {} \u{00b7} recipient gets {}",
                            format::money(q.fee(), &q.currency_from),
                            format::money(q.receive_amount(), &q.currency_to),
                        )
                    }}
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !flow.with(SendFlow::phase_complete)
                        on:click=advance
                    >
                        "Continue"
                    </button>
                </div>
            </div>
        }
        .into_any(),

        SendPhase::Recipient => view! {
            <div class="send-dialog__phase">
                <label class="dialog__label">
                    "Full name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || flow.with(|f| f.recipient.full_name.clone())
                        on:input=move |ev| {
                            flow.update(|f| f.recipient.full_name = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || flow.with(|f| f.recipient.email.clone())
                        on:input=move |ev| {
                            flow.update(|f| f.recipient.email = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Bank name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || flow.with(|f| f.recipient.bank_name.clone())
                        on:input=move |ev| {
                            flow.update(|f| f.recipient.bank_name = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Account number"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || flow.with(|f| f.recipient.account_number.clone())
                        on:input=move |ev| {
                            flow.update(|f| f.recipient.account_number = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Country"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || flow.with(|f| f.recipient.country.clone())
                        on:input=move |ev| {
                            flow.update(|f| f.recipient.country = event_target_value(&ev));
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=back>
                        "Back"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !flow.with(SendFlow::phase_complete)
                        on:click=advance
                    >
                        "Continue"
                    </button>
                </div>
            </div>
        }
        .into_any(),

        SendPhase::PaymentMethod => view! {
            <div class="send-dialog__phase">
                <label class="dialog__label">
                    "Pay with"
                    <select
                        class="dialog__input"
                        prop:value=move || flow.with(|f| f.payment_method.clone())
                        on:change=move |ev| {
                            flow.update(|f| f.payment_method = event_target_value(&ev));
                        }
                    >
                        {PAYMENT_METHODS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <p class="send-dialog__quote">
                    {move || {
                        let q = flow.with(SendFlow::quote);
                        format!("Total to pay: {}", format::money(q.total_cost(), &q.currency_from))
                    }}
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=back>
                        "Back"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || submitting.get()
                        on:click=on_submit
                    >
                        {move || if submitting.get() { "Creating..." } else { "Create transfer" }}
                    </button>
                </div>
            </div>
        }
        .into_any(),

        SendPhase::Submitted => view! {
            <div class="send-dialog__phase">
                <p class="send-dialog__done">"Your transfer was created."</p>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Done"
                    </button>
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog send-dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Send money"</h2>
                {phase_view}
            </div>
        </div>
    }
}
