use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use finadvisor_core::planning::{
    goal_progress, plan_summary, Expense, FinancialGoal, GoalProgress, Income, PlanAsset,
    PlanLiability,
};

use crate::input;

/// Arguments for the plan summary
#[derive(Args)]
pub struct PlanSummaryArgs {
    /// Path to a JSON file with the plan's incomes, expenses, assets,
    /// liabilities and (optionally) goals
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Deserialize)]
struct PlanRecords {
    #[serde(default)]
    incomes: Vec<Income>,
    #[serde(default)]
    expenses: Vec<Expense>,
    #[serde(default)]
    assets: Vec<PlanAsset>,
    #[serde(default)]
    liabilities: Vec<PlanLiability>,
    #[serde(default)]
    goals: Vec<FinancialGoal>,
}

fn get_records(input_path: &Option<String>) -> Result<PlanRecords, Box<dyn std::error::Error>> {
    if let Some(ref path) = input_path {
        input::file::read_json(path)
    } else if let Some(data) = input::stdin::read_stdin()? {
        let records: PlanRecords = serde_json::from_value(data)?;
        Ok(records)
    } else {
        Err("Provide --input file or pipe plan records via stdin".into())
    }
}

pub fn run_plan_summary(args: PlanSummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let records = get_records(&args.input)?;
    let summary = plan_summary(
        &records.incomes,
        &records.expenses,
        &records.assets,
        &records.liabilities,
    );

    let mut value = serde_json::to_value(summary)?;
    if !records.goals.is_empty() {
        let progress: Vec<GoalProgress> = records.goals.iter().map(goal_progress).collect();
        if let Some(map) = value.as_object_mut() {
            map.insert("goals".into(), serde_json::to_value(progress)?);
        }
    }
    Ok(value)
}
