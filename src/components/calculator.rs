//! Currency-conversion calculator widget for the landing page.
//!
//! Presentational only: the fee/rate figures come from the placeholder
//! quote in [`crate::state::quote`] rather than a server round-trip.
//! "Send now" opens the multi-step send flow for authenticated users;
//! anonymous visitors get their inputs saved as a draft and are routed to
//! the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::send_money::SendMoneyDialog;
use crate::state::quote::{DraftTransfer, Quote};
use crate::state::send::SendFlow;
use crate::state::session::SessionState;
use crate::util::{format, storage};

const SEND_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];
const RECEIVE_CURRENCIES: [&str; 3] = ["EUR", "USD", "NGN"];

/// Calculator card: send amount, currency pair, fee/rate breakdown, and the
/// resulting receive amount.
#[component]
pub fn CalculatorSection() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let amount_input = RwSignal::new("1000".to_owned());
    let currency_from = RwSignal::new("USD".to_owned());
    let currency_to = RwSignal::new("EUR".to_owned());

    let flow = RwSignal::new(SendFlow::default());
    let show_send = RwSignal::new(false);

    let amount = move || amount_input.get().parse::<f64>().unwrap_or(0.0);
    let quote = move || Quote::placeholder(amount(), &currency_from.get(), &currency_to.get());

    let on_send_now = {
        let navigate = navigate.clone();
        move |_| {
            if session.with_untracked(SessionState::is_authenticated) {
                flow.set(SendFlow::with_amount(
                    amount(),
                    &currency_from.get_untracked(),
                    &currency_to.get_untracked(),
                ));
                show_send.set(true);
            } else {
                storage::write_draft(&DraftTransfer {
                    amount: amount(),
                    currency_from: currency_from.get_untracked(),
                    currency_to: currency_to.get_untracked(),
                });
                navigate("/login", NavigateOptions::default());
            }
        }
    };

    let on_close = Callback::new(move |()| show_send.set(false));
    let on_submitted = Callback::new(move |()| {
        navigate("/dashboard", NavigateOptions::default());
    });

    view! {
        <section class="calculator">
            <div class="calculator__card">
                <label class="calculator__row">
                    "You send"
                    <input
                        class="calculator__amount"
                        type="number"
                        min="0"
                        prop:value=move || amount_input.get()
                        on:input=move |ev| amount_input.set(event_target_value(&ev))
                    />
                    <select
                        class="calculator__currency"
                        prop:value=move || currency_from.get()
                        on:change=move |ev| currency_from.set(event_target_value(&ev))
                    >
                        {SEND_CURRENCIES
                            .iter()
                            .map(|code| view! { <option value=*code>{*code}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <div class="calculator__breakdown">
                    <span>
                        {move || {
                            let q = quote();
                            format!("- {} (fee)", format::money(q.fee(), &q.currency_from))
                        }}
                    </span>
                    <span>{move || format!("x {} (rate)", quote().exchange_rate)}</span>
                </div>

                <label class="calculator__row">
                    "They receive"
                    <input
                        class="calculator__amount"
                        type="text"
                        readonly
                        prop:value=move || format::amount_2dp(quote().receive_amount())
                    />
                    <select
                        class="calculator__currency"
                        prop:value=move || currency_to.get()
                        on:change=move |ev| currency_to.set(event_target_value(&ev))
                    >
                        {RECEIVE_CURRENCIES
                            .iter()
                            .map(|code| view! { <option value=*code>{*code}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <div class="calculator__actions">
                    <button class="btn btn--primary" on:click=on_send_now>
                        "Send now"
                    </button>
                </div>
            </div>

            <Show when=move || show_send.get()>
                <SendMoneyDialog flow=flow on_close=on_close on_submitted=on_submitted/>
            </Show>
        </section>
    }
}
