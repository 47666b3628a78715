//! Business limits and loan term
//!
//! Defaults are the house limits; a JSON file can override any subset of
//! them.

use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest loan the system will quote
pub const MIN_LOAN: u32 = 1000;

/// Largest loan the system will quote
pub const MAX_LOAN: u32 = 15000;

/// Requested amounts must be a multiple of this
pub const LOAN_INCREMENT: u32 = 100;

/// Loan term in years
pub const TERM_YEARS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteConfig {
    #[serde(default = "default_min_loan")]
    pub min_loan: u32,

    #[serde(default = "default_max_loan")]
    pub max_loan: u32,

    #[serde(default = "default_loan_increment")]
    pub loan_increment: u32,

    /// Compounding runs monthly over `term_years * 12` periods
    #[serde(default = "default_term_years")]
    pub term_years: u32,
}

fn default_min_loan() -> u32 { MIN_LOAN }
fn default_max_loan() -> u32 { MAX_LOAN }
fn default_loan_increment() -> u32 { LOAN_INCREMENT }
fn default_term_years() -> u32 { TERM_YEARS }

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            min_loan: MIN_LOAN,
            max_loan: MAX_LOAN,
            loan_increment: LOAN_INCREMENT,
            term_years: TERM_YEARS,
        }
    }
}

impl QuoteConfig {
    /// Load from a JSON file; absent fields keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| QuoteError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: QuoteConfig =
            serde_json::from_str(text).map_err(|e| QuoteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.loan_increment == 0 {
            return Err(QuoteError::Config("loan_increment must be positive".into()));
        }
        if self.min_loan > self.max_loan {
            return Err(QuoteError::Config(format!(
                "min_loan {} exceeds max_loan {}",
                self.min_loan, self.max_loan
            )));
        }
        if self.term_years == 0 {
            return Err(QuoteError::Config("term_years must be positive".into()));
        }
        Ok(())
    }

    /// Number of monthly compounding periods (and repayments)
    pub fn term_months(&self) -> u32 {
        self.term_years * 12
    }
}
