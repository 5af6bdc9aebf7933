use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{percent_of, round2, Money};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Category of a portfolio holding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Stock,
    Bond,
    MutualFund,
    Etf,
    RealEstate,
    Crypto,
    FixedDeposit,
    Other,
}

/// A single position within a portfolio. Valuation fields are derived on
/// demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub asset_type: AssetType,
    #[serde(default)]
    pub symbol: String,
    pub name: String,
    pub quantity: Decimal,
    pub purchase_price: Money,
    pub current_price: Money,
    pub purchase_date: NaiveDate,
}

impl Holding {
    pub fn total_value(&self) -> Money {
        self.quantity * self.current_price
    }

    pub fn total_cost(&self) -> Money {
        self.quantity * self.purchase_price
    }

    pub fn profit_loss(&self) -> Money {
        (self.current_price - self.purchase_price) * self.quantity
    }

    /// Return since purchase as a percentage, zero for a free acquisition.
    pub fn return_percentage(&self) -> Decimal {
        round2(percent_of(
            self.current_price - self.purchase_price,
            self.purchase_price,
        ))
    }
}

/// Value held in one asset category and its share of the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub asset_type: AssetType,
    pub value: Money,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformerEntry {
    pub name: String,
    pub symbol: String,
    pub return_percentage: Decimal,
    pub profit_loss: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAnalytics {
    pub total_value: Money,
    pub total_cost: Money,
    pub total_return: Money,
    pub return_percentage: Decimal,
    pub holdings_count: usize,
    /// Sorted descending by value.
    pub asset_allocation: Vec<AllocationSlice>,
    pub top_performers: Vec<PerformerEntry>,
    pub worst_performers: Vec<PerformerEntry>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

const PERFORMER_COUNT: usize = 5;

/// Derive a snapshot analytics report for one portfolio's holdings.
///
/// An empty collection yields a zeroed report. With fewer than ten holdings
/// the top and bottom performer lists overlap; both views of the same ranking
/// are reported as-is.
pub fn portfolio_analytics(holdings: &[Holding]) -> PortfolioAnalytics {
    if holdings.is_empty() {
        return PortfolioAnalytics {
            total_value: Decimal::ZERO,
            total_cost: Decimal::ZERO,
            total_return: Decimal::ZERO,
            return_percentage: Decimal::ZERO,
            holdings_count: 0,
            asset_allocation: Vec::new(),
            top_performers: Vec::new(),
            worst_performers: Vec::new(),
        };
    }

    let total_value: Money = holdings.iter().map(Holding::total_value).sum();
    let total_cost: Money = holdings.iter().map(Holding::total_cost).sum();
    let total_return = total_value - total_cost;

    // Allocation by category, largest first
    let mut by_type: BTreeMap<AssetType, Money> = BTreeMap::new();
    for h in holdings {
        *by_type.entry(h.asset_type).or_default() += h.total_value();
    }
    let mut asset_allocation: Vec<AllocationSlice> = by_type
        .into_iter()
        .map(|(asset_type, value)| AllocationSlice {
            asset_type,
            value: round2(value),
            percentage: round2(percent_of(value, total_value)),
        })
        .collect();
    asset_allocation.sort_by(|a, b| b.value.cmp(&a.value));

    // Rank by return percentage; both performer lists come from one ordering
    let mut ranked: Vec<&Holding> = holdings.iter().collect();
    ranked.sort_by(|a, b| b.return_percentage().cmp(&a.return_percentage()));

    let performer = |h: &Holding| PerformerEntry {
        name: h.name.clone(),
        symbol: h.symbol.clone(),
        return_percentage: h.return_percentage(),
        profit_loss: round2(h.profit_loss()),
    };

    let top_performers: Vec<PerformerEntry> = ranked
        .iter()
        .take(PERFORMER_COUNT)
        .map(|&h| performer(h))
        .collect();
    let worst_performers: Vec<PerformerEntry> = ranked
        [ranked.len().saturating_sub(PERFORMER_COUNT)..]
        .iter()
        .map(|&h| performer(h))
        .collect();

    PortfolioAnalytics {
        total_value: round2(total_value),
        total_cost: round2(total_cost),
        total_return: round2(total_return),
        return_percentage: round2(percent_of(total_return, total_cost)),
        holdings_count: holdings.len(),
        asset_allocation,
        top_performers,
        worst_performers,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
