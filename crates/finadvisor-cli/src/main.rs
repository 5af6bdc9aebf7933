mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::analytics::PortfolioArgs;
use commands::calculators::{
    CompoundInterestArgs, InvestmentGrowthArgs, LoanArgs, RetirementArgs, TaxArgs,
};
use commands::planning::PlanSummaryArgs;

/// Financial planning calculators with decimal precision
#[derive(Parser)]
#[command(
    name = "fpa",
    version,
    about = "Financial planning calculators with decimal precision",
    long_about = "A CLI for financial planning calculations with decimal precision. \
                  Supports compound interest, retirement needs, loan amortization, \
                  investment growth projection, tax estimation, portfolio analytics, \
                  and plan summaries."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compound interest on a principal with a yearly breakdown
    CompoundInterest(CompoundInterestArgs),
    /// Retirement corpus, savings gap and required monthly savings
    Retirement(RetirementArgs),
    /// Monthly loan payment with an amortization schedule preview
    Loan(LoanArgs),
    /// Investment growth projection for a lump sum plus contributions
    InvestmentGrowth(InvestmentGrowthArgs),
    /// Progressive tax estimate by filing status
    Tax(TaxArgs),
    /// Portfolio analytics from a holdings file
    Portfolio(PortfolioArgs),
    /// Cashflow and net-worth summary of a financial plan
    PlanSummary(PlanSummaryArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::CompoundInterest(args) => commands::calculators::run_compound_interest(args),
        Commands::Retirement(args) => commands::calculators::run_retirement(args),
        Commands::Loan(args) => commands::calculators::run_loan(args),
        Commands::InvestmentGrowth(args) => commands::calculators::run_investment_growth(args),
        Commands::Tax(args) => commands::calculators::run_tax(args),
        Commands::Portfolio(args) => commands::analytics::run_portfolio(args),
        Commands::PlanSummary(args) => commands::planning::run_plan_summary(args),
        Commands::Version => {
            println!("fpa {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
