use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{round2, Money, Rate};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How often an income or expense recurs. One-time amounts count at face
/// value in the monthly totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashflowFrequency {
    Monthly,
    Annual,
    OneTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub source: String,
    pub amount: Money,
    pub frequency: CashflowFrequency,
}

impl Income {
    pub fn monthly_amount(&self) -> Money {
        monthly_amount(self.amount, self.frequency)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub amount: Money,
    pub frequency: CashflowFrequency,
}

impl Expense {
    pub fn monthly_amount(&self) -> Money {
        monthly_amount(self.amount, self.frequency)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanAsset {
    pub asset_type: String,
    pub description: String,
    pub value: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquisition_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanLiability {
    pub liability_type: String,
    pub description: String,
    pub amount: Money,
    /// Annual rate as a percentage.
    pub interest_rate: Rate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payoff_date: Option<NaiveDate>,
}

/// Monthly cashflow and net-worth snapshot for one financial plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub total_monthly_income: Money,
    pub total_monthly_expenses: Money,
    pub monthly_surplus: Money,
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub net_worth: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

fn monthly_amount(amount: Money, frequency: CashflowFrequency) -> Money {
    match frequency {
        CashflowFrequency::Annual => amount / dec!(12),
        CashflowFrequency::Monthly | CashflowFrequency::OneTime => amount,
    }
}

/// Aggregate a plan's records into monthly cashflow totals and net worth.
pub fn plan_summary(
    incomes: &[Income],
    expenses: &[Expense],
    assets: &[PlanAsset],
    liabilities: &[PlanLiability],
) -> PlanSummary {
    let total_monthly_income: Money = incomes.iter().map(Income::monthly_amount).sum();
    let total_monthly_expenses: Money = expenses.iter().map(Expense::monthly_amount).sum();
    let total_assets: Money = assets.iter().map(|a| a.value).sum();
    let total_liabilities: Money = liabilities.iter().map(|l| l.amount).sum();

    PlanSummary {
        total_monthly_income: round2(total_monthly_income),
        total_monthly_expenses: round2(total_monthly_expenses),
        monthly_surplus: round2(total_monthly_income - total_monthly_expenses),
        total_assets: round2(total_assets),
        total_liabilities: round2(total_liabilities),
        net_worth: round2(total_assets - total_liabilities),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
