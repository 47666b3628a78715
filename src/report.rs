//! Console rendering of quote outcomes

use crate::quote::QuoteOutcome;
use rust_decimal::Decimal;

pub const NO_QUOTE_MESSAGE: &str = "Sorry, the system is unable to provide a quote at this time.";

/// Format a sterling amount with thousands separators, e.g. `£1,232.93`
pub fn format_pounds(amount: Decimal) -> String {
    let text = amount.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}£{grouped}.{fraction}"),
        None => format!("{sign}£{grouped}"),
    }
}

/// Render the outcome for `requested_amount` as console lines
pub fn render_outcome(requested_amount: u32, outcome: &QuoteOutcome) -> String {
    match outcome {
        QuoteOutcome::Quoted(quote) => format!(
            "Requested amount: {}\nRate: {}%\nMonthly repayment: {}\nTotal repayment: {}",
            format_pounds(Decimal::from(requested_amount)),
            quote.annual_rate_percent,
            format_pounds(quote.monthly_repayment),
            format_pounds(quote.total_repayment),
        ),
        QuoteOutcome::NoOfferAvailable => NO_QUOTE_MESSAGE.to_string(),
    }
}
