pub mod compound_interest;
pub mod investment;
pub mod loan;
pub mod retirement;
pub mod tax;

pub use compound_interest::{compound_interest, CompoundInterestResult, YearlyAmount};
pub use investment::{investment_growth, InvestmentProjection, ProjectionYear};
pub use loan::{loan_payment, AmortizationRow, LoanAmortization};
pub use retirement::{retirement_needs, RetirementInput, RetirementPlan};
pub use tax::{estimate_tax, BracketTax, FilingStatus, TaxEstimate};
