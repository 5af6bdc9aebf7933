use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::time_value::{compound, fv_annuity};
use crate::types::{percent_of, round2, Money, Rate};
use crate::FinAdvisorResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One year of projected growth: balance and cumulative invested/returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionYear {
    pub year: u32,
    pub balance: Money,
    pub total_invested: Money,
    pub returns: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    pub final_value: Money,
    pub total_invested: Money,
    pub total_returns: Money,
    pub return_percentage: Decimal,
    /// One entry per year of the horizon.
    pub yearly_breakdown: Vec<ProjectionYear>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Project growth of a lump sum plus monthly contributions.
///
/// The summary figures come from the closed-form future value; the yearly
/// breakdown is an independent month-by-month simulation, since it needs
/// per-period state the closed form does not retain. The two paths must agree
/// at the final year to within rounding.
pub fn investment_growth(
    initial: Money,
    monthly_contribution: Money,
    annual_return: Rate,
    years: u32,
) -> FinAdvisorResult<InvestmentProjection> {
    let monthly_rate = annual_return / dec!(100) / dec!(12);
    let months = years * 12;

    // Closed form: lump-sum growth plus an ordinary annuity of contributions
    let fv_initial = initial * compound(monthly_rate, months);
    let fv_contributions = fv_annuity(monthly_contribution, monthly_rate, months);

    let total_value = fv_initial + fv_contributions;
    let total_invested = initial + monthly_contribution * Decimal::from(months);
    let total_returns = total_value - total_invested;

    // Simulation: contribution lands at the end of each month
    let mut yearly_breakdown = Vec::with_capacity(years as usize);
    let mut balance = initial;
    let mut invested = initial;
    for year in 1..=years {
        for _ in 0..12 {
            balance = balance * (Decimal::ONE + monthly_rate) + monthly_contribution;
            invested += monthly_contribution;
        }
        yearly_breakdown.push(ProjectionYear {
            year,
            balance: round2(balance),
            total_invested: round2(invested),
            returns: round2(balance - invested),
        });
    }

    debug_assert!(
        (balance - total_value).abs() < dec!(0.01),
        "simulated balance diverged from closed form: {balance} vs {total_value}"
    );

    Ok(InvestmentProjection {
        final_value: round2(total_value),
        total_invested: round2(total_invested),
        total_returns: round2(total_returns),
        return_percentage: round2(percent_of(total_returns, total_invested)),
        yearly_breakdown,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
