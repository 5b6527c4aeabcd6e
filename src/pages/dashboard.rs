//! User dashboard: overview, transaction history, and saved recipients.
//!
//! Every tab fetches its data on mount via a `LocalResource` and refetches
//! wholesale after any mutation; there is no local cache to keep consistent.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notices::{push_notice, report_api_error};
use crate::components::send_money::SendMoneyDialog;
use crate::components::transactions::{StatusBadge, TransactionTable};
use crate::net::api;
use crate::net::types::{Recipient, RecipientCreate, Transaction};
use crate::state::notices::{NoticeLevel, NoticeState};
use crate::state::send::SendFlow;
use crate::state::session::SessionState;
use crate::util::{format, storage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DashTab {
    Overview,
    Transactions,
    Recipients,
}

/// Authenticated user dashboard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let tab = RwSignal::new(DashTab::Overview);
    let flow = RwSignal::new(SendFlow::default());
    let show_send = RwSignal::new(false);

    // Resume a transfer drafted on the calculator before login.
    if let Some(draft) = storage::read_draft() {
        flow.set(SendFlow::from_draft(&draft));
        show_send.set(true);
    }

    let transactions = LocalResource::new(move || {
        let token = session.get().token;
        async move {
            let Some(token) = token else {
                return Vec::<Transaction>::new();
            };
            match api::fetch_transactions(&token).await {
                Ok(list) => list,
                Err(err) => {
                    report_api_error(session, notices, "loading transactions", &err);
                    Vec::new()
                }
            }
        }
    });

    let recipients = LocalResource::new(move || {
        let token = session.get().token;
        async move {
            let Some(token) = token else {
                return Vec::<Recipient>::new();
            };
            match api::fetch_recipients(&token).await {
                Ok(list) => list,
                Err(err) => {
                    report_api_error(session, notices, "loading recipients", &err);
                    Vec::new()
                }
            }
        }
    });

    let welcome = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .map(|u| format!("Welcome back, {}!", u.display_name()))
                .unwrap_or_default()
        })
    };

    let on_logout = move |_| {
        crate::app::sign_out(session);
        navigate("/", NavigateOptions::default());
    };

    let open_send = move |_| {
        flow.set(SendFlow::default());
        show_send.set(true);
    };

    let on_close = Callback::new(move |()| {
        // A dismissed draft should not reopen on the next visit.
        storage::clear_draft();
        show_send.set(false);
    });
    let on_submitted = {
        let transactions = transactions.clone();
        Callback::new(move |()| transactions.refetch())
    };

    let tab_button = move |target: DashTab, label: &'static str| {
        view! {
            <button
                class=move || {
                    if tab.get() == target { "nav-tab nav-tab--active" } else { "nav-tab" }
                }
                on:click=move |_| tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{welcome}</h1>
                <div class="dashboard-page__header-actions">
                    <button class="btn btn--primary" on:click=open_send>
                        "Send money"
                    </button>
                    <button class="btn" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            <nav class="dashboard-page__nav">
                {tab_button(DashTab::Overview, "Overview")}
                {tab_button(DashTab::Transactions, "Transactions")}
                {tab_button(DashTab::Recipients, "Recipients")}
            </nav>

            <main class="dashboard-page__content">
                <Suspense fallback=move || view! { <p>"Loading your dashboard..."</p> }>
                    {move || match tab.get() {
                        DashTab::Overview => {
                            let recipient_count =
                                recipients.get().map(|list| list.len()).unwrap_or_default();
                            transactions
                                .get()
                                .map(|list| {
                                    view! { <OverviewTab transactions=list recipient_count=recipient_count/> }
                                        .into_any()
                                })
                        }
                        DashTab::Transactions => transactions
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! { <p>"No transfers yet."</p> }.into_any()
                                } else {
                                    view! { <TransactionTable transactions=list/> }.into_any()
                                }
                            }),
                        DashTab::Recipients => recipients
                            .get()
                            .map(|list| {
                                let recipients = recipients.clone();
                                view! {
                                    <RecipientsTab
                                        saved=list
                                        on_created=Callback::new(move |()| recipients.refetch())
                                    />
                                }
                                .into_any()
                            }),
                    }}
                </Suspense>
            </main>

            <Show when=move || show_send.get()>
                <SendMoneyDialog flow=flow on_close=on_close on_submitted=on_submitted/>
            </Show>
        </div>
    }
}

/// Overview tab: headline stats and the five most recent transfers.
#[component]
fn OverviewTab(transactions: Vec<Transaction>, recipient_count: usize) -> impl IntoView {
    let pending = transactions
        .iter()
        .filter(|tx| tx.status == "pending")
        .count();
    let total_sent: f64 = transactions
        .iter()
        .filter(|tx| tx.status == "completed")
        .map(|tx| tx.total_amount)
        .sum();
    let currency = transactions
        .first()
        .map_or_else(|| "USD".to_owned(), |tx| tx.currency_from.clone());
    let recent: Vec<Transaction> = transactions.into_iter().take(5).collect();

    view! {
        <div class="overview">
            <div class="overview__stats">
                <div class="stat-card">
                    <h3>"Total sent"</h3>
                    <p class="stat-card__value">{format::money(total_sent, &currency)}</p>
                </div>
                <div class="stat-card">
                    <h3>"Active transfers"</h3>
                    <p class="stat-card__value">{pending}</p>
                </div>
                <div class="stat-card">
                    <h3>"Saved recipients"</h3>
                    <p class="stat-card__value">{recipient_count}</p>
                </div>
            </div>

            <h2>"Recent transfers"</h2>
            <div class="overview__recent">
                {if recent.is_empty() {
                    view! { <p>"Nothing here yet. Start your first transfer."</p> }.into_any()
                } else {
                    recent
                        .into_iter()
                        .map(|tx| {
                            view! {
                                <div class="overview__tx">
                                    <div>
                                        <strong>{tx.recipient.full_name.clone()}</strong>
                                        <small>{format::short_date(&tx.created_at)}</small>
                                    </div>
                                    <div>
                                        <span>{format::money(tx.total_amount, &tx.currency_from)}</span>
                                        <StatusBadge status=tx.status.clone()/>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </div>
    }
}

/// Recipients tab: saved payees plus an inline add form.
#[component]
fn RecipientsTab(saved: Vec<Recipient>, on_created: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let bank_name = RwSignal::new(String::new());
    let account_number = RwSignal::new(String::new());
    let country = RwSignal::new("US".to_owned());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || full_name.get_untracked().trim().is_empty() {
            return;
        }
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
            return;
        };
        let payload = RecipientCreate {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            bank_name: bank_name.get_untracked(),
            account_number: account_number.get_untracked(),
            country: country.get_untracked(),
        };

        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::create_recipient(&token, &payload).await {
                Ok(saved) => {
                    push_notice(
                        notices,
                        NoticeLevel::Success,
                        format!("Saved recipient {}.", saved.full_name),
                    );
                    full_name.set(String::new());
                    email.set(String::new());
                    bank_name.set(String::new());
                    account_number.set(String::new());
                    on_created.run(());
                }
                Err(err) => report_api_error(session, notices, "saving recipient", &err),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="recipients">
            {if saved.is_empty() {
                view! { <p>"No saved recipients."</p> }.into_any()
            } else {
                view! {
                    <table class="tx-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Bank"</th>
                                <th>"Account"</th>
                                <th>"Country"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {saved
                                .into_iter()
                                .map(|r| {
                                    view! {
                                        <tr>
                                            <td>{r.full_name.clone()}</td>
                                            <td>{r.email.clone().unwrap_or_default()}</td>
                                            <td>{r.bank_name.clone().unwrap_or_default()}</td>
                                            <td>{r.account_number.clone().unwrap_or_default()}</td>
                                            <td>{r.country.clone().unwrap_or_default()}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}

            <h3>"Add recipient"</h3>
            <form class="recipients__form" on:submit=on_submit>
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Full name"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Bank name"
                    prop:value=move || bank_name.get()
                    on:input=move |ev| bank_name.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Account number"
                    prop:value=move || account_number.get()
                    on:input=move |ev| account_number.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Country"
                    prop:value=move || country.get()
                    on:input=move |ev| country.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save recipient" }}
                </button>
            </form>
        </div>
    }
}
