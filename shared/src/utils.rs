//! # Shared Utility Functions
//!
//! Display helpers used by the client and its front ends.
//!
//! - [`format_currency`] - dollar amounts with grouping, at most two decimals
//! - [`format_identifier`] - shorten long ids with an ellipsis
//!
//! ```rust
//! use shared::utils::{format_currency, format_identifier};
//!
//! assert_eq!(format_currency(Some(1234.5)), "$1,234.5");
//! assert_eq!(format_currency(None), "—");
//! assert_eq!(format_identifier("wallet-7d2f9c1e4b", 4, 4), "wall...1e4b");
//! ```

/// Placeholder shown when an amount is unknown.
pub const MISSING_AMOUNT: &str = "—";

/// Format an amount as dollars.
///
/// Fraction digits are dropped when zero and capped at two, matching how
/// balances render on the dashboard (`$10`, `$5.5`, `$1,234.57`).
pub fn format_currency(amount: Option<f64>) -> String {
    let Some(amount) = amount else {
        return MISSING_AMOUNT.to_string();
    };
    if !amount.is_finite() {
        return MISSING_AMOUNT.to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let fraction = match fraction {
        0 => String::new(),
        f if f % 10 == 0 => format!(".{}", f / 10),
        f => format!(".{:02}", f),
    };

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}{}", sign, grouped, fraction)
}

/// Show the first `prefix_len` and last `suffix_len` characters of an id.
///
/// Ids too short to shorten are returned as-is.
pub fn format_identifier(id: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= prefix_len + suffix_len + 3 {
        return id.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();
    format!("{}...{}", prefix, suffix)
}
