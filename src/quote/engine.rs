//! Quote engine: validate the amount, load lenders, pick the best rate, price

use super::{compute_quote, Quote, QuoteOutcome};
use crate::catalogue::{load_catalogue, Catalogue, LenderOffer};
use crate::config::QuoteConfig;
use crate::error::{QuoteError, Result};
use log::{debug, info};
use rust_decimal::Decimal;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct QuoteEngine {
    config: QuoteConfig,
}

impl QuoteEngine {
    pub fn new(config: QuoteConfig) -> Self {
        Self { config }
    }

    /// Check the amount lies within the loan limits and is a whole increment
    pub fn validate_amount(&self, amount: u32) -> Result<()> {
        let QuoteConfig {
            min_loan,
            max_loan,
            loan_increment,
            ..
        } = self.config;

        if amount < min_loan || amount > max_loan || amount.checked_rem(loan_increment) != Some(0) {
            return Err(QuoteError::InvalidAmount {
                amount,
                min: min_loan,
                max: max_loan,
                increment: loan_increment,
            });
        }
        Ok(())
    }

    /// Cheapest offer able to fund `amount` on its own.
    ///
    /// Ties on rate go to the offer listed first in the catalogue.
    pub fn select_best_offer<'a>(
        &self,
        catalogue: &'a Catalogue,
        amount: u32,
    ) -> Result<Option<&'a LenderOffer>> {
        self.validate_amount(amount)?;
        let amount = Decimal::from(amount);
        Ok(catalogue
            .by_ascending_rate()
            .into_iter()
            .find(|offer| offer.covers(amount)))
    }

    pub fn select_lowest_qualifying_rate(
        &self,
        catalogue: &Catalogue,
        amount: u32,
    ) -> Result<Option<Decimal>> {
        Ok(self
            .select_best_offer(catalogue, amount)?
            .map(|offer| offer.rate))
    }

    pub fn compute_quote(&self, principal: u32, rate: Decimal) -> Result<Quote> {
        compute_quote(Decimal::from(principal), rate, self.config.term_months())
    }

    /// Quote `amount` against the lenders listed in `source`.
    ///
    /// The amount is checked before the source is touched. Every call
    /// re-reads the source.
    pub fn get_quote<P: AsRef<Path>>(&self, source: P, amount: u32) -> Result<QuoteOutcome> {
        self.validate_amount(amount)?;
        let catalogue = load_catalogue(source)?;

        let Some(offer) = self.select_best_offer(&catalogue, amount)? else {
            info!("No lender can cover {}", amount);
            return Ok(QuoteOutcome::NoOfferAvailable);
        };
        debug!(
            "Selected {} at rate {} (available {})",
            offer.lender, offer.rate, offer.available_amount
        );

        let quote = self.compute_quote(amount, offer.rate)?;
        Ok(QuoteOutcome::Quoted(quote))
    }
}

/// Quote with the default loan limits and term
pub fn get_quote<P: AsRef<Path>>(source: P, amount: u32) -> Result<QuoteOutcome> {
    QuoteEngine::default().get_quote(source, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn catalogue(offers: &[(&str, Decimal, Decimal)]) -> Catalogue {
        Catalogue::new(
            offers
                .iter()
                .map(|(name, rate, available)| LenderOffer::new(*name, *rate, *available))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_amounts_rejected() {
        let engine = QuoteEngine::default();
        for amount in (0..=16_000).filter(|a| *a < 1000 || *a > 15000 || a % 100 != 0) {
            assert!(
                matches!(
                    engine.validate_amount(amount),
                    Err(QuoteError::InvalidAmount { .. })
                ),
                "{amount} should be rejected"
            );
        }
        assert!(engine.validate_amount(u32::MAX).is_err());
    }

    #[test]
    fn test_valid_amounts_accepted() {
        let engine = QuoteEngine::default();
        for amount in (1000..=15000).step_by(100) {
            assert!(engine.validate_amount(amount).is_ok(), "{amount} should be accepted");
        }
    }

    #[test]
    fn test_configured_limits() {
        let engine = QuoteEngine::new(QuoteConfig {
            min_loan: 500,
            max_loan: 2000,
            loan_increment: 50,
            term_years: 1,
        });
        assert!(engine.validate_amount(550).is_ok());
        assert!(engine.validate_amount(2050).is_err());
        assert!(engine.validate_amount(575).is_err());
    }

    #[test]
    fn test_lowest_rate_selected() {
        let engine = QuoteEngine::default();
        let market = catalogue(&[
            ("A", dec!(0.069), dec!(5000)),
            ("B", dec!(0.05), dec!(5000)),
            ("C", dec!(0.08), dec!(5000)),
        ]);
        assert_eq!(
            engine.select_lowest_qualifying_rate(&market, 1000).unwrap(),
            Some(dec!(0.05))
        );
    }

    #[test]
    fn test_cheaper_lender_without_funds_skipped() {
        let engine = QuoteEngine::default();
        let market = catalogue(&[
            ("Jane", dec!(0.069), dec!(480)),
            ("Fred", dec!(0.071), dec!(1200)),
            ("Bob", dec!(0.075), dec!(2000)),
        ]);
        let offer = engine.select_best_offer(&market, 1000).unwrap().unwrap();
        assert_eq!(offer.lender, "Fred");
        assert_eq!(offer.rate, dec!(0.071));
    }

    #[test]
    fn test_tie_goes_to_first_listed() {
        let engine = QuoteEngine::default();
        let market = catalogue(&[
            ("Late", dec!(0.09), dec!(3000)),
            ("First", dec!(0.06), dec!(3000)),
            ("Second", dec!(0.06), dec!(3000)),
        ]);
        let offer = engine.select_best_offer(&market, 2000).unwrap().unwrap();
        assert_eq!(offer.lender, "First");
    }

    #[test]
    fn test_selection_idempotent() {
        let engine = QuoteEngine::default();
        let market = catalogue(&[
            ("A", dec!(0.075), dec!(640)),
            ("B", dec!(0.069), dec!(1480)),
            ("C", dec!(0.071), dec!(1520)),
        ]);
        let first = engine.select_lowest_qualifying_rate(&market, 1500).unwrap();
        let second = engine.select_lowest_qualifying_rate(&market, 1500).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, Some(dec!(0.071)));
    }

    #[test]
    fn test_no_offer_when_nobody_covers() {
        let engine = QuoteEngine::default();
        let market = catalogue(&[
            ("A", dec!(0.05), dec!(900)),
            ("B", dec!(0.06), dec!(999.99)),
        ]);
        assert_eq!(engine.select_lowest_qualifying_rate(&market, 1000).unwrap(), None);
    }

    #[test]
    fn test_selection_validates_amount_first() {
        let engine = QuoteEngine::default();
        let market = catalogue(&[("A", dec!(0.05), dec!(100000))]);
        assert!(matches!(
            engine.select_lowest_qualifying_rate(&market, 1050),
            Err(QuoteError::InvalidAmount { amount: 1050, .. })
        ));
    }

    #[test]
    fn test_invalid_amount_wins_over_missing_source() {
        let err = get_quote("./no/such/market.csv", 999).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidAmount { .. }));

        let err = get_quote("./no/such/market.csv", 1000).unwrap_err();
        assert!(matches!(err, QuoteError::SourceNotFound { .. }));
    }

    #[test]
    fn test_term_follows_config() {
        let engine = QuoteEngine::new(QuoteConfig {
            term_years: 1,
            ..Default::default()
        });
        let quote = engine.compute_quote(1200, Decimal::ZERO).unwrap();
        assert_eq!(quote.monthly_repayment, dec!(100));
    }
}
