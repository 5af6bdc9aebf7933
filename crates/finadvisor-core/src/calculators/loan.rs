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

/// One month of the amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    /// Remaining balance, floored at zero to hide rounding residue.
    pub balance: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanAmortization {
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub principal: Money,
    /// Annual rate as a percentage, echoed from the input.
    pub annual_rate: Rate,
    pub years: u32,
    /// Months 1-12 and the final 12 months only. Full schedules are large and
    /// consumers only need start/end detail.
    pub schedule_preview: Vec<AmortizationRow>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Monthly loan payment via the standard amortization formula, with a
/// first-and-last-year schedule preview.
pub fn loan_payment(principal: Money, annual_rate: Rate, years: u32) -> FinAdvisorResult<LoanAmortization> {
    if years == 0 {
        return Err(FinAdvisorError::InvalidInput {
            field: "years".into(),
            reason: "loan term must be at least 1 year".into(),
        });
    }

    let months = years * 12;
    let monthly_rate = annual_rate / dec!(100) / dec!(12);

    let monthly_payment = if monthly_rate.is_zero() {
        principal / Decimal::from(months)
    } else {
        let factor = compound(monthly_rate, months);
        principal * monthly_rate * factor / (factor - Decimal::ONE)
    };

    let total_payment = monthly_payment * Decimal::from(months);
    let total_interest = total_payment - principal;

    // Walk the declining balance; retain only the first and last 12 months.
    let mut schedule_preview = Vec::with_capacity(24.min(months as usize));
    let mut balance = principal;
    for month in 1..=months {
        let interest_payment = balance * monthly_rate;
        let principal_payment = monthly_payment - interest_payment;
        balance -= principal_payment;
        if month <= 12 || month > months - 12 {
            schedule_preview.push(AmortizationRow {
                month,
                payment: round2(monthly_payment),
                principal: round2(principal_payment),
                interest: round2(interest_payment),
                balance: round2(balance.max(Decimal::ZERO)),
            });
        }
    }

    Ok(LoanAmortization {
        monthly_payment: round2(monthly_payment),
        total_payment: round2(total_payment),
        total_interest: round2(total_interest),
        principal: round2(principal),
        annual_rate,
        years,
        schedule_preview,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
