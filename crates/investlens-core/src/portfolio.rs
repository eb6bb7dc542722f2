//! Local portfolio holdings and their aggregation.
//!
//! The only client-side arithmetic outside the wizard: per-holding value and
//! gain, plus summary sums over the position list. Optimization, scenario
//! analysis and rebalancing are backend concerns (see [`crate::api::portfolio`]).

use serde::{Deserialize, Serialize};

/// A single position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub shares: f64,
    pub avg_price: f64,
    pub current_price: f64,
}

impl Holding {
    /// Market value of the position.
    pub fn value(&self) -> f64 {
        self.shares * self.current_price
    }

    /// Unrealized gain against the average entry price.
    pub fn gain(&self) -> f64 {
        self.shares * (self.current_price - self.avg_price)
    }

    /// Gain as a percentage of cost basis; 0 when the basis is 0.
    pub fn gain_pct(&self) -> f64 {
        let basis = self.shares * self.avg_price;
        if basis == 0.0 {
            return 0.0;
        }
        self.gain() / basis * 100.0
    }
}

/// Sums over a holdings list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_gain: f64,
    pub gain_pct: f64,
    /// 0-100 measure of how evenly value is spread across positions.
    pub diversification_score: u8,
}

/// Aggregate holdings into portfolio totals.
pub fn summarize(holdings: &[Holding]) -> PortfolioSummary {
    let total_value: f64 = holdings.iter().map(Holding::value).sum();
    let total_gain: f64 = holdings.iter().map(Holding::gain).sum();
    let total_basis: f64 = holdings.iter().map(|h| h.shares * h.avg_price).sum();
    let gain_pct = if total_basis == 0.0 {
        0.0
    } else {
        total_gain / total_basis * 100.0
    };
    PortfolioSummary {
        total_value,
        total_gain,
        gain_pct,
        diversification_score: diversification_score(holdings),
    }
}

/// Complement of the Herfindahl concentration index over value weights,
/// rescaled so a single position scores 0 and equal weights score 100.
pub fn diversification_score(holdings: &[Holding]) -> u8 {
    let total_value: f64 = holdings.iter().map(Holding::value).sum();
    if holdings.len() < 2 || total_value <= 0.0 {
        return 0;
    }
    let hhi: f64 = holdings
        .iter()
        .map(|h| {
            let weight = h.value() / total_value;
            weight * weight
        })
        .sum();
    let evenness = (1.0 - hhi) / (1.0 - 1.0 / holdings.len() as f64);
    (evenness * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_holdings() -> Vec<Holding> {
        vec![
            Holding {
                symbol: "AAPL".to_string(),
                shares: 10.0,
                avg_price: 150.0,
                current_price: 175.5,
            },
            Holding {
                symbol: "GOOGL".to_string(),
                shares: 5.0,
                avg_price: 2800.0,
                current_price: 2750.0,
            },
            Holding {
                symbol: "MSFT".to_string(),
                shares: 15.0,
                avg_price: 280.0,
                current_price: 310.0,
            },
        ]
    }

    #[test]
    fn test_holding_derivations() {
        let holdings = sample_holdings();
        assert!((holdings[0].value() - 1755.0).abs() < 1e-9);
        assert!((holdings[0].gain() - 255.0).abs() < 1e-9);
        assert!((holdings[0].gain_pct() - 17.0).abs() < 1e-9);

        assert!((holdings[1].gain() + 250.0).abs() < 1e-9);
        assert!(holdings[1].gain_pct() < 0.0);
    }

    #[test]
    fn test_summary_totals() {
        let summary = summarize(&sample_holdings());
        assert!((summary.total_value - 20155.0).abs() < 1e-9);
        assert!((summary.total_gain - 455.0).abs() < 1e-9);
        // 455 / 19700 * 100 = 2.3096...
        assert!((summary.gain_pct - 2.3096).abs() < 1e-3);
        // Weights 0.087/0.682/0.231: HHI 0.5262, evenness 0.7106
        assert_eq!(summary.diversification_score, 71);
    }

    #[test]
    fn test_diversification_extremes() {
        let one = vec![sample_holdings().remove(0)];
        assert_eq!(diversification_score(&one), 0);

        let equal: Vec<Holding> = ["A", "B", "C", "D"]
            .iter()
            .map(|s| Holding {
                symbol: s.to_string(),
                shares: 1.0,
                avg_price: 100.0,
                current_price: 100.0,
            })
            .collect();
        assert_eq!(diversification_score(&equal), 100);
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.total_gain, 0.0);
        assert_eq!(summary.gain_pct, 0.0);
    }

    #[test]
    fn test_zero_basis_guard() {
        let h = Holding {
            symbol: "FREE".to_string(),
            shares: 10.0,
            avg_price: 0.0,
            current_price: 5.0,
        };
        assert_eq!(h.gain_pct(), 0.0);
        assert!((h.gain() - 50.0).abs() < 1e-9);
    }
}
