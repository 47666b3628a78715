use crate::error::{QuoteError, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// One lender's offer: the annual rate it charges and the most it will fund
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LenderOffer {
    /// Not used in pricing
    pub lender: String,
    /// Annual rate as a fraction (0.069 = 6.9%)
    pub rate: Decimal,
    pub available_amount: Decimal,
}

impl LenderOffer {
    pub fn new(lender: impl Into<String>, rate: Decimal, available_amount: Decimal) -> Self {
        Self {
            lender: lender.into(),
            rate,
            available_amount,
        }
    }

    /// Whether this lender alone can fund `amount`
    pub fn covers(&self, amount: Decimal) -> bool {
        self.available_amount >= amount
    }
}

/// Offers in source order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    offers: Vec<LenderOffer>,
}

impl Catalogue {
    pub fn new(offers: Vec<LenderOffer>) -> Result<Self> {
        if offers.is_empty() {
            return Err(QuoteError::EmptyCatalogue);
        }
        Ok(Self { offers })
    }

    pub fn offers(&self) -> &[LenderOffer] {
        &self.offers
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Offers ordered by ascending rate; equal rates keep source order
    pub fn by_ascending_rate(&self) -> Vec<&LenderOffer> {
        let mut sorted: Vec<&LenderOffer> = self.offers.iter().collect();
        sorted.sort_by(|a, b| a.rate.cmp(&b.rate));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_catalogue_rejected() {
        assert!(matches!(Catalogue::new(Vec::new()), Err(QuoteError::EmptyCatalogue)));
    }

    #[test]
    fn test_ascending_rate_is_stable() {
        let catalogue = Catalogue::new(vec![
            LenderOffer::new("Bob", dec!(0.075), dec!(640)),
            LenderOffer::new("Jane", dec!(0.069), dec!(480)),
            LenderOffer::new("Fred", dec!(0.071), dec!(520)),
            LenderOffer::new("Mary", dec!(0.069), dec!(170)),
        ])
        .unwrap();

        let names: Vec<&str> = catalogue
            .by_ascending_rate()
            .iter()
            .map(|o| o.lender.as_str())
            .collect();
        assert_eq!(names, vec!["Jane", "Mary", "Fred", "Bob"]);
        // source order untouched
        assert_eq!(catalogue.offers()[0].lender, "Bob");
    }

    #[test]
    fn test_covers_is_inclusive() {
        let offer = LenderOffer::new("Angela", dec!(0.071), dec!(1000));
        assert!(offer.covers(dec!(1000)));
        assert!(!offer.covers(dec!(1100)));
    }
}
