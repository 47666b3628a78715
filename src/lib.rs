//! Loan quote engine
//!
//! Picks the lowest interest rate among market lenders able to fund a
//! requested amount, then prices the loan with monthly compounding over a
//! fixed term.
//!
//! ```no_run
//! use loan_quote::{QuoteEngine, QuoteConfig, QuoteOutcome};
//!
//! let engine = QuoteEngine::new(QuoteConfig::default());
//! match engine.get_quote("market.csv", 1000)? {
//!     QuoteOutcome::Quoted(quote) => println!("{}", quote.monthly_repayment),
//!     QuoteOutcome::NoOfferAvailable => println!("no lender can cover it"),
//! }
//! # Ok::<(), loan_quote::QuoteError>(())
//! ```

pub mod catalogue;
pub mod config;
pub mod error;
pub mod quote;
pub mod report;

pub use catalogue::{load_catalogue, load_catalogue_from_reader, Catalogue, LenderOffer};
pub use config::QuoteConfig;
pub use error::{QuoteError, Result, SchemaViolation};
pub use quote::{get_quote, Quote, QuoteEngine, QuoteOutcome};
