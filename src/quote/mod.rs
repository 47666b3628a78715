//! Best-rate lender selection and loan pricing

mod calculator;
mod engine;

pub use calculator::{compute_quote, round_half_up};
pub use engine::{get_quote, QuoteEngine};

use rust_decimal::Decimal;
use serde::Serialize;

// ============================================================================
// Output Precision
// ============================================================================
// Currency figures are quoted to the penny, the rate to one decimal place
// as a percentage. All rounding is half-up.

/// Fractional digits for total and monthly repayment
pub const CURRENCY_DP: u32 = 2;

/// Fractional digits for the annual rate percentage
pub const RATE_PERCENT_DP: u32 = 1;

/// Priced loan for one principal and rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub principal: Decimal,
    /// Principal plus compounded interest over the full term
    pub total_repayment: Decimal,
    /// Annual rate as a percentage (6.9 for 0.069)
    pub annual_rate_percent: Decimal,
    pub monthly_repayment: Decimal,
}

/// Result of a quote request that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuoteOutcome {
    Quoted(Quote),
    /// No single lender can fund the requested amount
    #[serde(rename = "no_offer")]
    NoOfferAvailable,
}

impl QuoteOutcome {
    pub fn quote(&self) -> Option<&Quote> {
        match self {
            QuoteOutcome::Quoted(quote) => Some(quote),
            QuoteOutcome::NoOfferAvailable => None,
        }
    }
}
