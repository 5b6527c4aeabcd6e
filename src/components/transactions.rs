//! Transaction table shared by the user and admin dashboards.

use leptos::prelude::*;

use crate::net::types::Transaction;
use crate::util::format;

/// CSS modifier for a transaction status. Unknown statuses render neutrally;
/// the client never validates the set of statuses the API may grow.
fn status_class(status: &str) -> &'static str {
    match status {
        "completed" => "status-badge status-badge--completed",
        "pending" => "status-badge status-badge--pending",
        "failed" => "status-badge status-badge--failed",
        _ => "status-badge",
    }
}

/// Colored status pill.
#[component]
pub fn StatusBadge(status: String) -> impl IntoView {
    view! { <span class=status_class(&status)>{status.clone()}</span> }
}

/// Transaction table. `show_user` adds the sending-user column present on
/// admin listings; `on_annotate` adds an actions column opening the review
/// dialog for a row.
#[component]
pub fn TransactionTable(
    transactions: Vec<Transaction>,
    #[prop(optional)] show_user: bool,
    #[prop(optional)] on_annotate: Option<Callback<Transaction>>,
) -> impl IntoView {
    view! {
        <table class="tx-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    {show_user.then(|| view! { <th>"Sender"</th> })}
                    <th>"Recipient"</th>
                    <th>"Sent"</th>
                    <th>"Rate"</th>
                    <th>"Fee"</th>
                    <th>"Total"</th>
                    <th>"Status"</th>
                    <th>"Created"</th>
                    {on_annotate.map(|_| view! { <th>"Actions"</th> })}
                </tr>
            </thead>
            <tbody>
                {transactions
                    .into_iter()
                    .map(|tx| {
                        view! {
                            <tr>
                                <td>{format::short_id(&tx.id.to_string())}</td>
                                {show_user
                                    .then(|| {
                                        let sender = tx
                                            .user
                                            .as_ref()
                                            .map(|u| u.full_name.clone())
                                            .unwrap_or_default();
                                        view! { <td>{sender}</td> }
                                    })}
                                <td>{tx.recipient.full_name.clone()}</td>
                                <td>{format::money(tx.amount, &tx.currency_from)}</td>
                                <td>{format!("{}", tx.exchange_rate)}</td>
                                <td>{format::money(tx.fee_amount, &tx.currency_from)}</td>
                                <td>{format::money(tx.total_amount, &tx.currency_from)}</td>
                                <td>
                                    <StatusBadge status=tx.status.clone()/>
                                </td>
                                <td>{format::short_date(&tx.created_at)}</td>
                                {on_annotate
                                    .map(|annotate| {
                                        let row = tx.clone();
                                        view! {
                                            <td>
                                                <button
                                                    class="btn btn--small"
                                                    on:click=move |_| annotate.run(row.clone())
                                                >
                                                    "Review"
                                                </button>
                                            </td>
                                        }
                                    })}
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
