use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FinAdvisorError;
use crate::time_value::{compound, fv_annuity_payment, pv_annuity};
use crate::types::{round2, Money, Rate};
use crate::FinAdvisorResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for retirement needs analysis.
///
/// Rates are percentages (3.0 = 3%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub life_expectancy: u32,
    /// Current annual living expenses.
    pub annual_expenses: Money,
    #[serde(default)]
    pub current_savings: Money,
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: Rate,
    #[serde(default = "default_expected_return")]
    pub expected_return: Rate,
}

fn default_inflation_rate() -> Rate {
    dec!(3.0)
}

fn default_expected_return() -> Rate {
    dec!(8.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementPlan {
    /// Capital required at retirement to fund future expenses.
    pub corpus_needed: Money,
    pub current_savings: Money,
    pub future_value_current_savings: Money,
    pub savings_gap: Money,
    pub monthly_savings_needed: Money,
    pub years_to_retirement: u32,
    pub retirement_years: u32,
    pub future_annual_expenses: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// How much to save for retirement: corpus needed, the gap after current
/// savings grow, and the monthly sinking-fund contribution that closes it.
pub fn retirement_needs(input: &RetirementInput) -> FinAdvisorResult<RetirementPlan> {
    if input.retirement_age <= input.current_age {
        return Err(FinAdvisorError::InvalidInput {
            field: "retirement_age".into(),
            reason: "retirement_age must be greater than current_age".into(),
        });
    }
    if input.life_expectancy <= input.retirement_age {
        return Err(FinAdvisorError::InvalidInput {
            field: "life_expectancy".into(),
            reason: "life_expectancy must be greater than retirement_age".into(),
        });
    }

    let years_to_retirement = input.retirement_age - input.current_age;
    let retirement_years = input.life_expectancy - input.retirement_age;
    let inflation = input.inflation_rate / dec!(100);
    let returns = input.expected_return / dec!(100);

    // Expenses inflate until retirement day
    let future_expenses = input.annual_expenses * compound(inflation, years_to_retirement);

    // Corpus needed at retirement: a real-return annuity funding the inflated
    // expenses over the retirement span. When the real return is not positive
    // the annuity formula degenerates, so fall back to the flat sum.
    let real_return = (Decimal::ONE + returns) / (Decimal::ONE + inflation) - Decimal::ONE;
    let corpus_needed = if real_return > Decimal::ZERO {
        pv_annuity(future_expenses, real_return, retirement_years)
    } else {
        future_expenses * Decimal::from(retirement_years)
    };

    let future_savings = input.current_savings * compound(returns, years_to_retirement);
    let savings_gap = (corpus_needed - future_savings).max(Decimal::ZERO);

    // Monthly contribution that accumulates to the gap by retirement
    let monthly_rate = returns / dec!(12);
    let months = years_to_retirement * 12;
    let monthly_savings = fv_annuity_payment(savings_gap, monthly_rate, months);

    Ok(RetirementPlan {
        corpus_needed: round2(corpus_needed),
        current_savings: round2(input.current_savings),
        future_value_current_savings: round2(future_savings),
        savings_gap: round2(savings_gap),
        monthly_savings_needed: round2(monthly_savings),
        years_to_retirement,
        retirement_years,
        future_annual_expenses: round2(future_expenses),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn default_input() -> RetirementInput {
        RetirementInput {
            current_age: 30,
            retirement_age: 60,
            life_expectancy: 85,
            annual_expenses: dec!(40_000),
            current_savings: dec!(50_000),
            inflation_rate: dec!(3.0),
            expected_return: dec!(8.0),
        }
    }

    #[test]
    fn test_basic_plan_shape() {
        let plan = retirement_needs(&default_input()).unwrap();
        assert_eq!(plan.years_to_retirement, 30);
        assert_eq!(plan.retirement_years, 25);
        assert!(plan.corpus_needed > Decimal::ZERO);
        assert!(plan.monthly_savings_needed > Decimal::ZERO);
    }

    #[test]
    fn test_expenses_inflate() {
        let plan = retirement_needs(&default_input()).unwrap();
        // 40k at 3% over 30 years ~ 97k
        assert!(plan.future_annual_expenses > dec!(95_000));
        assert!(plan.future_annual_expenses < dec!(100_000));
    }

    #[test]
    fn test_corpus_less_than_flat_sum_with_positive_real_return() {
        let plan = retirement_needs(&default_input()).unwrap();
        let flat_sum = plan.future_annual_expenses * dec!(25);
        assert!(plan.corpus_needed < flat_sum);
    }

    #[test]
    fn test_flat_sum_fallback_when_return_equals_inflation() {
        let mut input = default_input();
        input.expected_return = dec!(3.0); // real return exactly zero
        let plan = retirement_needs(&input).unwrap();
        let expected = plan.future_annual_expenses * dec!(25);
        let diff = (plan.corpus_needed - expected).abs();
        assert!(diff < dec!(0.05), "diff={diff}");
    }

    #[test]
    fn test_large_savings_close_the_gap() {
        let mut input = default_input();
        input.current_savings = dec!(5_000_000);
        let plan = retirement_needs(&input).unwrap();
        assert_eq!(plan.savings_gap, Decimal::ZERO);
        assert_eq!(plan.monthly_savings_needed, Decimal::ZERO);
    }

    #[test]
    fn test_zero_return_linear_monthly_savings() {
        let mut input = default_input();
        input.expected_return = Decimal::ZERO;
        input.current_savings = Decimal::ZERO;
        let plan = retirement_needs(&input).unwrap();
        // With a zero rate the sinking fund degenerates to gap / months
        let expected = round2(plan.savings_gap / dec!(360));
        let diff = (plan.monthly_savings_needed - expected).abs();
        assert!(diff <= dec!(0.01), "diff={diff}");
    }

    #[test]
    fn test_retirement_age_not_after_current_rejected() {
        let mut input = default_input();
        input.current_age = 60;
        input.retirement_age = 60;
        assert!(retirement_needs(&input).is_err());

        input.retirement_age = 55;
        assert!(retirement_needs(&input).is_err());
    }

    #[test]
    fn test_life_expectancy_not_after_retirement_rejected() {
        let mut input = default_input();
        input.life_expectancy = 60;
        assert!(retirement_needs(&input).is_err());
    }

    #[test]
    fn test_higher_return_lowers_monthly_savings() {
        let mut low = default_input();
        low.expected_return = dec!(5.0);
        let mut high = default_input();
        high.expected_return = dec!(10.0);

        let plan_low = retirement_needs(&low).unwrap();
        let plan_high = retirement_needs(&high).unwrap();
        assert!(plan_high.monthly_savings_needed < plan_low.monthly_savings_needed);
    }

    #[test]
    fn test_idempotent() {
        let a = retirement_needs(&default_input()).unwrap();
        let b = retirement_needs(&default_input()).unwrap();
        assert_eq!(a, b);
    }
}
