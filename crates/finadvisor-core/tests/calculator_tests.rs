use finadvisor_core::calculators::{
    compound_interest, estimate_tax, investment_growth, loan_payment, retirement_needs,
    FilingStatus, RetirementInput,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Calculator engine tests: the five planning calculators exercised together,
// including the published anchor values and cross-calculator consistency.
// ===========================================================================

// ---------------------------------------------------------------------------
// Compound interest
// ---------------------------------------------------------------------------

#[test]
fn test_compound_interest_monthly_anchor() {
    // 10,000 at 10% over 5 years with monthly compounding -> 16,453.09
    let result = compound_interest(dec!(10_000), dec!(10), 5, 12).unwrap();
    let diff = (result.final_amount - dec!(16453.09)).abs();
    assert!(diff <= dec!(0.01), "final_amount={}", result.final_amount);
}

#[test]
fn test_compound_interest_never_below_principal() {
    for rate in [dec!(0), dec!(2.5), dec!(8), dec!(15)] {
        let result = compound_interest(dec!(1_000), rate, 10, 12).unwrap();
        assert!(result.final_amount >= dec!(1_000), "rate={rate}");
        if rate > Decimal::ZERO {
            assert!(result.final_amount > dec!(1_000), "rate={rate}");
        }
    }
}

#[test]
fn test_compound_interest_breakdown_strictly_increasing() {
    let result = compound_interest(dec!(10_000), dec!(7), 25, 12).unwrap();
    assert_eq!(result.yearly_breakdown.len(), 25);
    for pair in result.yearly_breakdown.windows(2) {
        assert!(pair[1].amount > pair[0].amount);
    }
}

// ---------------------------------------------------------------------------
// Retirement needs
// ---------------------------------------------------------------------------

#[test]
fn test_retirement_needs_produces_positive_corpus() {
    let input = RetirementInput {
        current_age: 35,
        retirement_age: 65,
        life_expectancy: 90,
        annual_expenses: dec!(50_000),
        current_savings: dec!(100_000),
        inflation_rate: dec!(3.0),
        expected_return: dec!(8.0),
    };
    let plan = retirement_needs(&input).unwrap();
    assert!(plan.corpus_needed > Decimal::ZERO);
    assert!(plan.future_annual_expenses > dec!(50_000));
    assert_eq!(plan.years_to_retirement, 30);
    assert_eq!(plan.retirement_years, 25);
}

#[test]
fn test_retirement_degenerate_ages_are_defined_errors() {
    let mut input = RetirementInput {
        current_age: 65,
        retirement_age: 65,
        life_expectancy: 90,
        annual_expenses: dec!(40_000),
        current_savings: Decimal::ZERO,
        inflation_rate: dec!(3.0),
        expected_return: dec!(8.0),
    };
    // retirement_age <= current_age: rejected, never a crash or nonsense output
    assert!(retirement_needs(&input).is_err());

    input.retirement_age = 70;
    input.life_expectancy = 70;
    assert!(retirement_needs(&input).is_err());
}

#[test]
fn test_retirement_gap_shrinks_with_savings() {
    let base = RetirementInput {
        current_age: 30,
        retirement_age: 60,
        life_expectancy: 85,
        annual_expenses: dec!(40_000),
        current_savings: Decimal::ZERO,
        inflation_rate: dec!(3.0),
        expected_return: dec!(8.0),
    };
    let without = retirement_needs(&base).unwrap();

    let mut with = base.clone();
    with.current_savings = dec!(200_000);
    let funded = retirement_needs(&with).unwrap();

    assert!(funded.savings_gap < without.savings_gap);
    assert!(funded.monthly_savings_needed < without.monthly_savings_needed);
}

// ---------------------------------------------------------------------------
// Loan payment
// ---------------------------------------------------------------------------

#[test]
fn test_loan_zero_rate_is_exact_division() {
    let loan = loan_payment(dec!(24_000), Decimal::ZERO, 2).unwrap();
    assert_eq!(loan.monthly_payment, dec!(24_000) / dec!(24));
    assert_eq!(loan.total_interest, Decimal::ZERO);
}

#[test]
fn test_loan_preview_is_first_and_last_year() {
    let loan = loan_payment(dec!(200_000), dec!(5), 20).unwrap();
    assert!(loan.schedule_preview.len() <= 24);
    let months: Vec<u32> = loan.schedule_preview.iter().map(|r| r.month).collect();
    let expected: Vec<u32> = (1..=12).chain(229..=240).collect();
    assert_eq!(months, expected);
}

#[test]
fn test_loan_balances_never_negative() {
    for (principal, rate, years) in [
        (dec!(100_000), dec!(7), 30u32),
        (dec!(5_000), dec!(12.5), 3),
        (dec!(750_000), dec!(4.25), 25),
    ] {
        let loan = loan_payment(principal, rate, years).unwrap();
        for row in &loan.schedule_preview {
            assert!(row.balance >= Decimal::ZERO, "month={}", row.month);
        }
    }
}

#[test]
fn test_loan_payment_splits_sum_to_payment() {
    let loan = loan_payment(dec!(150_000), dec!(6), 15).unwrap();
    for row in &loan.schedule_preview {
        let split = row.principal + row.interest;
        let diff = (split - row.payment).abs();
        assert!(diff <= dec!(0.01), "month={} diff={diff}", row.month);
    }
}

// ---------------------------------------------------------------------------
// Investment growth
// ---------------------------------------------------------------------------

#[test]
fn test_investment_growth_simulation_matches_closed_form() {
    for (initial, monthly, rate, years) in [
        (dec!(10_000), dec!(500), dec!(7), 10u32),
        (dec!(0), dec!(1_000), dec!(9.5), 30),
        (dec!(250_000), dec!(0), dec!(4), 20),
    ] {
        let proj = investment_growth(initial, monthly, rate, years).unwrap();
        let last = proj.yearly_breakdown.last().unwrap();
        let diff = (last.balance - proj.final_value).abs();
        assert!(diff <= dec!(0.01), "initial={initial} diff={diff}");
    }
}

#[test]
fn test_investment_growth_invested_totals() {
    let proj = investment_growth(dec!(10_000), dec!(500), dec!(7), 10).unwrap();
    // 10k + 500 * 120 months
    assert_eq!(proj.total_invested, dec!(70_000));
    assert_eq!(proj.total_returns, proj.final_value - proj.total_invested);
}

// ---------------------------------------------------------------------------
// Tax estimation
// ---------------------------------------------------------------------------

#[test]
fn test_tax_zero_income() {
    let est = estimate_tax(Decimal::ZERO, Decimal::ZERO, FilingStatus::Single).unwrap();
    assert_eq!(est.total_tax, Decimal::ZERO);
    assert_eq!(est.effective_rate, Decimal::ZERO);
}

#[test]
fn test_tax_breakdown_sums_to_taxable_income() {
    for (income, deductions) in [
        (dec!(350_000), dec!(0)),
        (dec!(950_000), dec!(100_000)),
        (dec!(2_400_000), dec!(0)),
        (dec!(5_000_000), dec!(500_000)),
    ] {
        for status in [FilingStatus::Single, FilingStatus::Married, FilingStatus::Business] {
            let est = estimate_tax(income, deductions, status).unwrap();
            let sum: Decimal = est.breakdown.iter().map(|b| b.taxable_amount).sum();
            assert_eq!(sum, est.taxable_income, "income={income} status={status}");
        }
    }
}

#[test]
fn test_tax_effective_rate_below_top_marginal() {
    let est = estimate_tax(dec!(10_000_000), Decimal::ZERO, FilingStatus::Single).unwrap();
    assert!(est.effective_rate < dec!(36));
    assert!(est.effective_rate > Decimal::ZERO);
}

// ---------------------------------------------------------------------------
// Idempotence across the engine
// ---------------------------------------------------------------------------

#[test]
fn test_identical_inputs_identical_outputs() {
    assert_eq!(
        compound_interest(dec!(9_999.99), dec!(6.66), 42, 12).unwrap(),
        compound_interest(dec!(9_999.99), dec!(6.66), 42, 12).unwrap()
    );
    assert_eq!(
        loan_payment(dec!(123_456), dec!(5.43), 21).unwrap(),
        loan_payment(dec!(123_456), dec!(5.43), 21).unwrap()
    );
    assert_eq!(
        investment_growth(dec!(1), dec!(2), dec!(3), 40).unwrap(),
        investment_growth(dec!(1), dec!(2), dec!(3), 40).unwrap()
    );
    assert_eq!(
        estimate_tax(dec!(777_777), dec!(7), FilingStatus::Business).unwrap(),
        estimate_tax(dec!(777_777), dec!(7), FilingStatus::Business).unwrap()
    );
}
