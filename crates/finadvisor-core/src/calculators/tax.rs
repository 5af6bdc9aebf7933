use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FinAdvisorError;
use crate::types::{percent_of, round2, Money, Rate};
use crate::FinAdvisorResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Filing status selecting the progressive bracket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilingStatus {
    Single,
    Married,
    Business,
}

impl FromStr for FilingStatus {
    type Err = FinAdvisorError;

    /// Unknown statuses are rejected rather than silently treated as Single.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SINGLE" => Ok(FilingStatus::Single),
            "MARRIED" => Ok(FilingStatus::Married),
            "BUSINESS" => Ok(FilingStatus::Business),
            other => Err(FinAdvisorError::InvalidInput {
                field: "filing_status".into(),
                reason: format!("unknown filing status '{other}', expected SINGLE, MARRIED or BUSINESS"),
            }),
        }
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FilingStatus::Single => "SINGLE",
            FilingStatus::Married => "MARRIED",
            FilingStatus::Business => "BUSINESS",
        };
        f.write_str(s)
    }
}

/// Tax charged within one bracket of the walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketTax {
    /// Width of the bracket; `None` for the unbounded top bracket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slab_limit: Option<Money>,
    /// Bracket rate as a percentage.
    pub rate: Rate,
    pub taxable_amount: Money,
    pub tax: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxEstimate {
    pub annual_income: Money,
    pub deductions: Money,
    pub taxable_income: Money,
    pub total_tax: Money,
    pub effective_rate: Decimal,
    pub monthly_tax: Money,
    pub take_home_annual: Money,
    pub take_home_monthly: Money,
    pub breakdown: Vec<BracketTax>,
}

// ---------------------------------------------------------------------------
// Bracket tables (Nepal income tax slabs)
// ---------------------------------------------------------------------------

type Slab = (Option<Decimal>, Decimal);

// Business filers currently share the individual schedule.
const INDIVIDUAL_SLABS: [Slab; 5] = [
    (Some(dec!(500_000)), dec!(0.01)),
    (Some(dec!(200_000)), dec!(0.10)),
    (Some(dec!(300_000)), dec!(0.20)),
    (Some(dec!(1_000_000)), dec!(0.30)),
    (None, dec!(0.36)),
];

const MARRIED_SLABS: [Slab; 5] = [
    (Some(dec!(600_000)), dec!(0.01)),
    (Some(dec!(200_000)), dec!(0.10)),
    (Some(dec!(300_000)), dec!(0.20)),
    (Some(dec!(900_000)), dec!(0.30)),
    (None, dec!(0.36)),
];

fn slabs(status: FilingStatus) -> &'static [Slab] {
    match status {
        FilingStatus::Single | FilingStatus::Business => &INDIVIDUAL_SLABS,
        FilingStatus::Married => &MARRIED_SLABS,
    }
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Estimate annual tax liability by walking the progressive slabs in order,
/// consuming `min(remaining, width)` from each until nothing remains.
pub fn estimate_tax(
    annual_income: Money,
    deductions: Money,
    filing_status: FilingStatus,
) -> FinAdvisorResult<TaxEstimate> {
    let taxable_income = (annual_income - deductions).max(Decimal::ZERO);

    let mut tax = Decimal::ZERO;
    let mut remaining = taxable_income;
    let mut breakdown = Vec::new();

    for &(slab_limit, rate) in slabs(filing_status) {
        if remaining <= Decimal::ZERO {
            break;
        }
        let taxable_in_slab = match slab_limit {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        let tax_in_slab = taxable_in_slab * rate;
        tax += tax_in_slab;
        breakdown.push(BracketTax {
            slab_limit,
            rate: rate * dec!(100),
            taxable_amount: round2(taxable_in_slab),
            tax: round2(tax_in_slab),
        });
        remaining -= taxable_in_slab;
    }

    let take_home = annual_income - tax;

    Ok(TaxEstimate {
        annual_income: round2(annual_income),
        deductions: round2(deductions),
        taxable_income: round2(taxable_income),
        total_tax: round2(tax),
        effective_rate: round2(percent_of(tax, annual_income)),
        monthly_tax: round2(tax / dec!(12)),
        take_home_annual: round2(take_home),
        take_home_monthly: round2(take_home / dec!(12)),
        breakdown,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
