//! Display formatting for amounts and labels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `1234.5` -> `"1,234.5"`. At most two decimals; trailing zeros dropped.
pub fn grouped(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_owned();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let cents = cents.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
    if amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !cents.is_empty() {
        out.push('.');
        out.push_str(cents);
    }
    out
}

/// Dollar amount: `"$1,234.5"`.
pub fn money(amount: f64) -> String {
    format!("${}", grouped(amount))
}

/// Dollar amount in millions with one decimal: `"$1.5M"`.
pub fn millions(amount: f64) -> String {
    format!("${:.1}M", amount / 1_000_000.0)
}

/// Upper-case the first character: `"tech"` -> `"Tech"`.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First `max` characters, with an ellipsis when anything was cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}
