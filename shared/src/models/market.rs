//! Mandi price models

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A crop price quoted at one mandi, in rupees per unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketPrice {
    pub state: String,
    pub crop: String,
    pub mandi: String,
    pub current: i64,
    pub previous: i64,
    pub unit: String,
}

/// Direction of a price movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    Flat,
}

impl MarketPrice {
    pub fn change(&self) -> i64 {
        self.current - self.previous
    }

    /// Change relative to the previous price, in percent to one decimal place
    ///
    /// `None` when there is no previous price to compare against.
    pub fn percent_change(&self) -> Option<Decimal> {
        calculate_percent_change(self.current, self.previous)
    }

    pub fn trend(&self) -> PriceTrend {
        match self.change() {
            c if c > 0 => PriceTrend::Up,
            c if c < 0 => PriceTrend::Down,
            _ => PriceTrend::Flat,
        }
    }
}

/// Percent change from `previous` to `current`, rounded half away from zero
pub fn calculate_percent_change(current: i64, previous: i64) -> Option<Decimal> {
    if previous == 0 {
        return None;
    }
    let change = Decimal::from(current - previous) * Decimal::from(100);
    Some(
        (change / Decimal::from(previous))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn price(current: i64, previous: i64) -> MarketPrice {
        MarketPrice {
            state: "punjab".to_string(),
            crop: "wheat".to_string(),
            mandi: "ludhiana-mandi".to_string(),
            current,
            previous,
            unit: "quintal".to_string(),
        }
    }

    #[test]
    fn test_price_increase() {
        let p = price(2250, 2190);
        assert_eq!(p.change(), 60);
        assert_eq!(p.percent_change(), Some(Decimal::from_str("2.7").unwrap()));
        assert_eq!(p.trend(), PriceTrend::Up);
    }

    #[test]
    fn test_price_decrease() {
        let p = price(2100, 2150);
        assert_eq!(p.change(), -50);
        assert_eq!(p.percent_change(), Some(Decimal::from_str("-2.3").unwrap()));
        assert_eq!(p.trend(), PriceTrend::Down);
    }

    #[test]
    fn test_unchanged_and_zero_previous() {
        assert_eq!(price(1000, 1000).trend(), PriceTrend::Flat);
        assert_eq!(price(1000, 1000).percent_change(), Some(Decimal::ZERO));
        assert_eq!(price(1000, 0).percent_change(), None);
    }
}
