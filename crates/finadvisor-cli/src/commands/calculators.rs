use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finadvisor_core::calculators::{
    compound_interest, estimate_tax, investment_growth, loan_payment, retirement_needs,
    FilingStatus, RetirementInput,
};

// The bounds below are the request-layer contract: the core only rejects
// arguments that would make a formula undefined, everything else is range-
// checked here before the call.

/// Arguments for compound interest calculation
#[derive(Args)]
pub struct CompoundInterestArgs {
    /// Initial investment amount
    #[arg(long)]
    pub principal: Decimal,

    /// Annual interest rate as a percentage (e.g. 8.5)
    #[arg(long)]
    pub annual_rate: Decimal,

    /// Time period in years (1-100)
    #[arg(long)]
    pub years: u32,

    /// Number of times interest compounds per year (1-365)
    #[arg(long, default_value = "12")]
    pub compounds_per_year: u32,
}

/// Arguments for retirement needs analysis
#[derive(Args)]
pub struct RetirementArgs {
    /// Current age (18-100)
    #[arg(long)]
    pub current_age: u32,

    /// Planned retirement age (30-100)
    #[arg(long)]
    pub retirement_age: u32,

    /// Expected life span (50-120)
    #[arg(long)]
    pub life_expectancy: u32,

    /// Current annual living expenses
    #[arg(long)]
    pub annual_expenses: Decimal,

    /// Current retirement savings
    #[arg(long, default_value = "0")]
    pub current_savings: Decimal,

    /// Expected annual inflation rate as a percentage
    #[arg(long, default_value = "3.0")]
    pub inflation_rate: Decimal,

    /// Expected annual return on investments as a percentage
    #[arg(long, default_value = "8.0")]
    pub expected_return: Decimal,
}

/// Arguments for loan payment calculation
#[derive(Args)]
pub struct LoanArgs {
    /// Loan amount
    #[arg(long)]
    pub principal: Decimal,

    /// Annual interest rate as a percentage
    #[arg(long)]
    pub annual_rate: Decimal,

    /// Loan term in years (1-50)
    #[arg(long)]
    pub years: u32,
}

/// Arguments for investment growth projection
#[derive(Args)]
pub struct InvestmentGrowthArgs {
    /// Initial investment amount
    #[arg(long)]
    pub initial: Decimal,

    /// Monthly contribution
    #[arg(long, default_value = "0")]
    pub monthly_contribution: Decimal,

    /// Expected annual return as a percentage
    #[arg(long)]
    pub annual_return: Decimal,

    /// Investment horizon in years (1-100)
    #[arg(long)]
    pub years: u32,
}

/// Arguments for tax estimation
#[derive(Args)]
pub struct TaxArgs {
    /// Annual gross income
    #[arg(long)]
    pub annual_income: Decimal,

    /// Total deductions
    #[arg(long, default_value = "0")]
    pub deductions: Decimal,

    /// Filing status: single, married or business
    #[arg(long, default_value = "single")]
    pub filing_status: String,
}

fn require_non_negative(value: Decimal, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    if value < Decimal::ZERO {
        return Err(format!("--{name} must not be negative").into());
    }
    Ok(())
}

fn require_rate(value: Decimal, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(format!("--{name} must be a percentage between 0 and 100").into());
    }
    Ok(())
}

fn require_range(value: u32, min: u32, max: u32, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    if value < min || value > max {
        return Err(format!("--{name} must be between {min} and {max}").into());
    }
    Ok(())
}

pub fn run_compound_interest(
    args: CompoundInterestArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    require_non_negative(args.principal, "principal")?;
    require_rate(args.annual_rate, "annual-rate")?;
    require_range(args.years, 1, 100, "years")?;
    require_range(args.compounds_per_year, 1, 365, "compounds-per-year")?;

    let result = compound_interest(
        args.principal,
        args.annual_rate,
        args.years,
        args.compounds_per_year,
    )?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_retirement(args: RetirementArgs) -> Result<Value, Box<dyn std::error::Error>> {
    require_range(args.current_age, 18, 100, "current-age")?;
    require_range(args.retirement_age, 30, 100, "retirement-age")?;
    require_range(args.life_expectancy, 50, 120, "life-expectancy")?;
    require_non_negative(args.annual_expenses, "annual-expenses")?;
    require_non_negative(args.current_savings, "current-savings")?;
    require_rate(args.inflation_rate, "inflation-rate")?;
    require_rate(args.expected_return, "expected-return")?;

    let input = RetirementInput {
        current_age: args.current_age,
        retirement_age: args.retirement_age,
        life_expectancy: args.life_expectancy,
        annual_expenses: args.annual_expenses,
        current_savings: args.current_savings,
        inflation_rate: args.inflation_rate,
        expected_return: args.expected_return,
    };
    let plan = retirement_needs(&input)?;
    Ok(serde_json::to_value(plan)?)
}

pub fn run_loan(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    require_non_negative(args.principal, "principal")?;
    require_rate(args.annual_rate, "annual-rate")?;
    require_range(args.years, 1, 50, "years")?;

    let loan = loan_payment(args.principal, args.annual_rate, args.years)?;
    Ok(serde_json::to_value(loan)?)
}

pub fn run_investment_growth(
    args: InvestmentGrowthArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    require_non_negative(args.initial, "initial")?;
    require_non_negative(args.monthly_contribution, "monthly-contribution")?;
    require_rate(args.annual_return, "annual-return")?;
    require_range(args.years, 1, 100, "years")?;

    let projection = investment_growth(
        args.initial,
        args.monthly_contribution,
        args.annual_return,
        args.years,
    )?;
    Ok(serde_json::to_value(projection)?)
}

pub fn run_tax(args: TaxArgs) -> Result<Value, Box<dyn std::error::Error>> {
    require_non_negative(args.annual_income, "annual-income")?;
    require_non_negative(args.deductions, "deductions")?;

    let status: FilingStatus = args.filing_status.parse()?;
    let estimate = estimate_tax(args.annual_income, args.deductions, status)?;
    Ok(serde_json::to_value(estimate)?)
}
