//! Admin dashboard: pending review queue, full transaction listing with a
//! review dialog, and the user listing.
//!
//! Review actions PATCH `/transactions/{id}/admin` and refetch the listing
//! wholesale; rejection requires a reason, recorded in the notes field.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use uuid::Uuid;

use crate::components::notices::{push_notice, report_api_error};
use crate::components::transactions::TransactionTable;
use crate::net::api;
use crate::net::types::{Transaction, TransactionUpdate, User};
use crate::state::notices::{NoticeLevel, NoticeState};
use crate::state::session::SessionState;
use crate::util::format;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AdminTab {
    Pending,
    Transactions,
    Users,
}

/// Admin review dashboard. Reachable only through the privileged route
/// guard.
#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let tab = RwSignal::new(AdminTab::Pending);
    let reviewing = RwSignal::new(None::<Transaction>);

    let transactions = LocalResource::new(move || {
        let token = session.get().token;
        async move {
            let Some(token) = token else {
                return Vec::<Transaction>::new();
            };
            match api::fetch_admin_transactions(&token).await {
                Ok(list) => list,
                Err(err) => {
                    report_api_error(session, notices, "loading admin transactions", &err);
                    Vec::new()
                }
            }
        }
    });

    let users = LocalResource::new(move || {
        let token = session.get().token;
        async move {
            let Some(token) = token else {
                return Vec::<User>::new();
            };
            match api::fetch_users(&token).await {
                Ok(list) => list,
                Err(err) => {
                    report_api_error(session, notices, "loading users", &err);
                    Vec::new()
                }
            }
        }
    });

    // Shared by approve/reject rows and the review dialog.
    let apply_review = {
        let transactions = transactions.clone();
        Callback::new(move |(id, update): (Uuid, TransactionUpdate)| {
            let Some(token) = session.with_untracked(|s| s.token.clone()) else {
                return;
            };
            let transactions = transactions.clone();
            leptos::task::spawn_local(async move {
                match api::admin_update_transaction(&token, id, &update).await {
                    Ok(updated) => {
                        push_notice(
                            notices,
                            NoticeLevel::Success,
                            format!(
                                "Transaction {} is now {}.",
                                format::short_id(&updated.id.to_string()),
                                updated.status
                            ),
                        );
                        reviewing.set(None);
                        transactions.refetch();
                    }
                    Err(err) => report_api_error(session, notices, "updating transaction", &err),
                }
            });
        })
    };

    let on_logout = move |_| {
        crate::app::sign_out(session);
        navigate("/", NavigateOptions::default());
    };

    let tab_button = move |target: AdminTab, label: &'static str| {
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
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Admin dashboard"</h1>
                <button class="btn" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <nav class="admin-page__nav">
                {tab_button(AdminTab::Pending, "Pending review")}
                {tab_button(AdminTab::Transactions, "All transactions")}
                {tab_button(AdminTab::Users, "Users")}
            </nav>

            <main class="admin-page__content">
                <Suspense fallback=move || view! { <p>"Loading admin data..."</p> }>
                    {move || match tab.get() {
                        AdminTab::Pending => transactions
                            .get()
                            .map(|list| {
                                let pending: Vec<Transaction> = list
                                    .into_iter()
                                    .filter(|tx| tx.status == "pending")
                                    .collect();
                                if pending.is_empty() {
                                    view! { <p>"No transactions are waiting for review."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="admin-page__queue">
                                            {pending
                                                .into_iter()
                                                .map(|tx| {
                                                    view! { <PendingRow tx=tx on_review=apply_review/> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                    .into_any()
                                }
                            }),
                        AdminTab::Transactions => transactions
                            .get()
                            .map(|list| {
                                view! {
                                    <TransactionTable
                                        transactions=list
                                        show_user=true
                                        on_annotate=Callback::new(move |tx| reviewing.set(Some(tx)))
                                    />
                                }
                                .into_any()
                            }),
                        AdminTab::Users => users
                            .get()
                            .map(|list| view! { <UserTable users=list/> }.into_any()),
                    }}
                </Suspense>
            </main>

            <Show when=move || reviewing.get().is_some()>
                {move || {
                    reviewing
                        .get()
                        .map(|tx| {
                            view! {
                                <ReviewDialog
                                    tx=tx
                                    on_cancel=Callback::new(move |()| reviewing.set(None))
                                    on_save=apply_review
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}

/// One pending transaction with inline approve/reject controls. Rejection
/// requires a reason.
#[component]
fn PendingRow(tx: Transaction, on_review: Callback<(Uuid, TransactionUpdate)>) -> impl IntoView {
    let reason = RwSignal::new(String::new());
    let id = tx.id;

    let sender = tx
        .user
        .as_ref()
        .map(|u| u.full_name.clone())
        .unwrap_or_default();

    let approve = move |_| on_review.run((id, TransactionUpdate::approve()));
    let reject = move |_| {
        let text = reason.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        on_review.run((id, TransactionUpdate::reject(text.trim())));
    };

    view! {
        <div class="pending-row">
            <div class="pending-row__summary">
                <span class="pending-row__id">{format::short_id(&tx.id.to_string())}</span>
                <span>{sender}</span>
                <span>{format!("\u{2192} {}", tx.recipient.full_name)}</span>
                <span>{format::money(tx.amount, &tx.currency_from)}</span>
                <span>{format!("@ {}", tx.exchange_rate)}</span>
                <span>{format::short_date(&tx.created_at)}</span>
            </div>
            <div class="pending-row__actions">
                <button class="btn btn--primary btn--small" on:click=approve>
                    "Approve"
                </button>
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Rejection reason"
                    prop:value=move || reason.get()
                    on:input=move |ev| reason.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--danger btn--small"
                    disabled=move || reason.get().trim().is_empty()
                    on:click=reject
                >
                    "Reject"
                </button>
            </div>
        </div>
    }
}

/// Review dialog for any transaction: status, notes, and proof-of-payment
/// URL are forwarded verbatim to the API.
#[component]
fn ReviewDialog(
    tx: Transaction,
    on_cancel: Callback<()>,
    on_save: Callback<(Uuid, TransactionUpdate)>,
) -> impl IntoView {
    let id = tx.id;
    let status = RwSignal::new(tx.status.clone());
    let notes = RwSignal::new(tx.notes.clone().unwrap_or_default());
    let proof = RwSignal::new(tx.proof_of_payment_url.clone().unwrap_or_default());

    let save = move |_| {
        let notes = notes.get_untracked();
        let proof = proof.get_untracked();
        let update = TransactionUpdate {
            status: Some(status.get_untracked()),
            notes: (!notes.trim().is_empty()).then(|| notes.trim().to_owned()),
            proof_of_payment_url: (!proof.trim().is_empty()).then(|| proof.trim().to_owned()),
        };
        on_save.run((id, update));
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Review {}", format::short_id(&tx.id.to_string()))}</h2>
                <p class="dialog__summary">
                    {format!(
                        "{} \u{2192} {} \u{00b7} {}",
                        format::money(tx.amount, &tx.currency_from),
                        tx.currency_to,
                        tx.recipient.full_name,
                    )}
                </p>
                <label class="dialog__label">
                    "Status"
                    <select
                        class="dialog__input"
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        <option value="pending">"pending"</option>
                        <option value="completed">"completed"</option>
                        <option value="failed">"failed"</option>
                    </select>
                </label>
                <label class="dialog__label">
                    "Notes"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Proof of payment URL"
                    <input
                        class="dialog__input"
                        type="url"
                        prop:value=move || proof.get()
                        on:input=move |ev| proof.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=save>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Registered users listing.
#[component]
fn UserTable(users: Vec<User>) -> impl IntoView {
    view! {
        <table class="tx-table">
            <thead>
                <tr>
                    <th>"Email"</th>
                    <th>"Name"</th>
                    <th>"Active"</th>
                    <th>"Admin"</th>
                    <th>"Joined"</th>
                </tr>
            </thead>
            <tbody>
                {users
                    .into_iter()
                    .map(|user| {
                        view! {
                            <tr>
                                <td>{user.email.clone()}</td>
                                <td>{user.full_name.clone().unwrap_or_default()}</td>
                                <td>{if user.is_active { "yes" } else { "no" }}</td>
                                <td>{if user.is_superuser { "yes" } else { "no" }}</td>
                                <td>
                                    {user
                                        .created_at
                                        .as_deref()
                                        .map(format::short_date)
                                        .unwrap_or_default()}
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
