//! Monthly compounding formula
//!
//! A = P * (1 + r/12)^(12 * t), repaid in 12 * t equal installments.

use super::{Quote, CURRENCY_DP, RATE_PERCENT_DP};
use crate::error::{QuoteError, Result};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

const MONTHS_PER_YEAR: u32 = 12;

/// Round to `dp` places with ties going away from zero, padded to exactly
/// `dp` places so `1000` displays as `1000.00`
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

/// Price `principal` at annual `rate` (a fraction) over `term_months`.
///
/// The monthly installment is taken from the unrounded future value.
pub fn compute_quote(principal: Decimal, rate: Decimal, term_months: u32) -> Result<Quote> {
    if term_months == 0 {
        return Err(QuoteError::Config("term must be at least one month".into()));
    }

    let monthly_rate = rate
        .checked_div(Decimal::from(MONTHS_PER_YEAR))
        .ok_or(QuoteError::Overflow)?;
    let growth = (Decimal::ONE + monthly_rate)
        .checked_powu(u64::from(term_months))
        .ok_or(QuoteError::Overflow)?;
    let future_value = principal.checked_mul(growth).ok_or(QuoteError::Overflow)?;
    let monthly = future_value
        .checked_div(Decimal::from(term_months))
        .ok_or(QuoteError::Overflow)?;
    let percent = rate
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(QuoteError::Overflow)?;

    Ok(Quote {
        principal,
        total_repayment: round_half_up(future_value, CURRENCY_DP),
        annual_rate_percent: round_half_up(percent, RATE_PERCENT_DP),
        monthly_repayment: round_half_up(monthly, CURRENCY_DP),
    })
}
