//! Portfolio profit/loss.

use crate::model::investment::InvestmentAsset;
use crate::model::record::Record;

/// Derived figures for one holding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetPosition {
    /// `quantity * current_value`.
    pub value: f64,
    /// `quantity * purchase_price`.
    pub cost: f64,
    pub profit: f64,
}

impl AssetPosition {
    pub fn of(asset: &InvestmentAsset) -> Self {
        let value = asset.quantity * asset.current_value;
        let cost = asset.quantity * asset.purchase_price;
        Self {
            value,
            cost,
            profit: value - cost,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_cost: f64,
    pub total_profit: f64,
    /// `total_profit / total_cost * 100`; zero unless the total cost is positive.
    pub profit_percent: f64,
}

pub fn portfolio_summary(assets: &[Record<InvestmentAsset>]) -> PortfolioSummary {
    let (total_value, total_cost) = assets
        .iter()
        .map(|record| AssetPosition::of(&record.fields))
        .fold((0.0, 0.0), |(value, cost), position| {
            (value + position.value, cost + position.cost)
        });
    let total_profit = total_value - total_cost;
    let profit_percent = if total_cost > 0.0 {
        total_profit / total_cost * 100.0
    } else {
        0.0
    };

    PortfolioSummary {
        total_value,
        total_cost,
        total_profit,
        profit_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::{portfolio_summary, AssetPosition, PortfolioSummary};
    use crate::model::investment::InvestmentAsset;
    use crate::model::record::Record;

    #[test]
    fn single_asset_profit_and_percentage() {
        let asset = InvestmentAsset::new("ACME", 10.0, 5.0, 8.0);
        assert_eq!(
            AssetPosition::of(&asset),
            AssetPosition {
                value: 80.0,
                cost: 50.0,
                profit: 30.0,
            }
        );

        let summary = portfolio_summary(&[Record::new(None, asset)]);
        assert_eq!(summary.total_value, 80.0);
        assert_eq!(summary.total_cost, 50.0);
        assert_eq!(summary.total_profit, 30.0);
        assert!((summary.profit_percent - 60.0).abs() < 1e-9);
    }

    #[test]
    fn losses_are_negative_and_non_positive_cost_gives_zero_percent() {
        let assets = vec![
            Record::new(None, InvestmentAsset::new("DOWN", 2.0, 10.0, 7.0)),
            Record::new(None, InvestmentAsset::new("GIFTED", 3.0, 0.0, 4.0)),
        ];
        let summary = portfolio_summary(&assets);
        assert_eq!(summary.total_value, 26.0);
        assert_eq!(summary.total_cost, 20.0);
        assert!((summary.profit_percent - 30.0).abs() < 1e-9);

        let free = vec![Record::new(None, InvestmentAsset::new("AIRDROP", 5.0, 0.0, 2.0))];
        assert_eq!(portfolio_summary(&free).profit_percent, 0.0);
        assert_eq!(portfolio_summary(&[]), PortfolioSummary::default());

        let refund = vec![Record::new(None, InvestmentAsset::new("REFUND", 10.0, -5.0, 8.0))];
        let summary = portfolio_summary(&refund);
        assert_eq!(summary.total_cost, -50.0);
        assert_eq!(summary.total_profit, 130.0);
        assert_eq!(summary.profit_percent, 0.0);
    }
}
