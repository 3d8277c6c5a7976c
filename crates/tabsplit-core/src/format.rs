//! # Currency Formatting
//!
//! Converts between `Money` and what a currency field shows.
//!
//! ## Field Behavior
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types          Field keeps         Money                          │
//! │  ──────────          ───────────         ─────                          │
//! │  1234.5              $1,234.50           123450 cents                   │
//! │  $1,234.567          $1,234.56           123456 cents (extra truncated) │
//! │  -12                 $12.00              1200 cents (no negatives)      │
//! │  (empty)             $0.00               0 cents                        │
//! │  abc                 $0.00               0 cents (coerced)              │
//! │  (over $1 trillion)  $0.00               0 cents (coerced)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::ValidationResult;
use crate::MAX_AMOUNT_CENTS;

/// Currency symbol shown before every amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Formats an amount for display: `$` prefix, thousands separators and
/// exactly two decimals.
///
/// ## Example
/// ```rust
/// use tabsplit_core::format::format_currency;
/// use tabsplit_core::money::Money;
///
/// assert_eq!(format_currency(Money::from_cents(123456789)), "$1,234,567.89");
/// assert_eq!(format_currency(Money::from_cents(-500)), "-$5.00");
/// ```
pub fn format_currency(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(amount.dollars().unsigned_abs()),
        amount.cents_part()
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Reads a currency field, coercing anything unreadable to zero.
///
/// ## Example
/// ```rust
/// use tabsplit_core::format::parse_currency_input;
///
/// assert_eq!(parse_currency_input("$1,234.5").cents(), 123450);
/// assert_eq!(parse_currency_input("twelve").cents(), 0);
/// ```
pub fn parse_currency_input(input: &str) -> Money {
    try_parse_currency_input(input).unwrap_or_default()
}

/// Reads a currency field, reporting text that is not an amount.
///
/// ## Rules
/// - `$`, `,`, whitespace and `-` are ignored (amounts cannot be negative)
/// - Digits past the second decimal place are dropped, not rounded
/// - Empty input is zero
/// - Amounts above [`MAX_AMOUNT_CENTS`] are rejected
pub fn try_parse_currency_input(input: &str) -> ValidationResult<Money> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '$' | ',' | '-'))
        .collect();

    if cleaned.is_empty() {
        return Ok(Money::zero());
    }

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) || (whole.is_empty() && fraction.is_empty()) {
        return Err(invalid(input, "not an amount"));
    }

    let dollars: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid(input, "amount is too large"))?
    };

    let cents: i64 = fraction
        .chars()
        .chain(std::iter::repeat('0'))
        .take(2)
        .fold(0, |acc, c| acc * 10 + c.to_digit(10).map_or(0, i64::from));

    dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .filter(|total| *total <= MAX_AMOUNT_CENTS)
        .map(Money::from_cents)
        .ok_or_else(|| invalid(input, "amount is too large"))
}

fn invalid(input: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: format!("amount '{}'", input.trim()),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
