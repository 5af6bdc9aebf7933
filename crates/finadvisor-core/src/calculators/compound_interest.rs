use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FinAdvisorError;
use crate::time_value::compound;
use crate::types::{round2, Money, Rate};
use crate::FinAdvisorResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One year of compound growth: cumulative amount and interest so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyAmount {
    pub year: u32,
    pub amount: Money,
    pub interest_earned: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub final_amount: Money,
    pub total_interest: Money,
    pub principal: Money,
    /// Annual rate as a percentage, echoed from the input.
    pub annual_rate: Rate,
    pub years: u32,
    /// One entry per year, ascending; empty when `years` is zero.
    pub yearly_breakdown: Vec<YearlyAmount>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Compound interest on a principal: `amount = principal * (1 + rate/n)^(n*years)`.
///
/// `annual_rate` is a percentage (8.0 = 8%). The yearly breakdown evaluates the
/// same growth at each intermediate year, so the last entry equals the final
/// amount exactly.
pub fn compound_interest(
    principal: Money,
    annual_rate: Rate,
    years: u32,
    compounds_per_year: u32,
) -> FinAdvisorResult<CompoundInterestResult> {
    if compounds_per_year == 0 {
        return Err(FinAdvisorError::InvalidInput {
            field: "compounds_per_year".into(),
            reason: "must be at least 1".into(),
        });
    }

    let periodic_rate = annual_rate / dec!(100) / Decimal::from(compounds_per_year);
    let annual_factor = compound(periodic_rate, compounds_per_year);

    let mut yearly_breakdown = Vec::with_capacity(years as usize);
    let mut factor = Decimal::ONE;
    for year in 1..=years {
        factor *= annual_factor;
        let amount = principal * factor;
        yearly_breakdown.push(YearlyAmount {
            year,
            amount: round2(amount),
            interest_earned: round2(amount - principal),
        });
    }

    let amount = principal * factor;

    Ok(CompoundInterestResult {
        final_amount: round2(amount),
        total_interest: round2(amount - principal),
        principal: round2(principal),
        annual_rate,
        years,
        yearly_breakdown,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
