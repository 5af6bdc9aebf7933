use clap::Args;
use serde_json::Value;

use finadvisor_core::analytics::{portfolio_analytics, Holding};

use crate::input;

/// Arguments for portfolio analytics
#[derive(Args)]
pub struct PortfolioArgs {
    /// Path to a JSON file with an array of holdings
    #[arg(long)]
    pub input: Option<String>,
}

fn get_holdings(input_path: &Option<String>) -> Result<Vec<Holding>, Box<dyn std::error::Error>> {
    if let Some(ref path) = input_path {
        input::file::read_json(path)
    } else if let Some(data) = input::stdin::read_stdin()? {
        let holdings: Vec<Holding> = serde_json::from_value(data)?;
        Ok(holdings)
    } else {
        Err("Provide --input file or pipe a JSON array of holdings via stdin".into())
    }
}

pub fn run_portfolio(args: PortfolioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let holdings = get_holdings(&args.input)?;
    let report = portfolio_analytics(&holdings);
    Ok(serde_json::to_value(report)?)
}
