//! Display formatting for money amounts, timestamps, and identifiers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a money amount with thousands separators and two decimals,
/// followed by the currency code: `1234.5` → `"1,234.50 USD"`.
pub fn money(amount: f64, currency: &str) -> String {
    format!("{} {currency}", amount_2dp(amount))
}

/// Two-decimal amount with thousands separators, no currency code.
pub fn amount_2dp(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac:02}")
}

/// Shorten an ISO-8601 timestamp to `YYYY-MM-DD HH:MM` for table cells.
/// Anything that does not look like a timestamp passes through unchanged.
pub fn short_date(iso: &str) -> String {
    match iso.split_once('T') {
        Some((date, time)) if time.len() >= 5 => format!("{date} {}", &time[..5]),
        _ => iso.to_owned(),
    }
}

/// Truncate a long identifier for display: first 8 characters plus an
/// ellipsis.
pub fn short_id(id: &str) -> String {
    if id.len() > 8 {
        format!("{}\u{2026}", &id[..8])
    } else {
        id.to_owned()
    }
}
