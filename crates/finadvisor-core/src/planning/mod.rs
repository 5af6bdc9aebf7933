pub mod goals;
pub mod plan;

pub use goals::{goal_progress, FinancialGoal, GoalCategory, GoalPriority, GoalProgress};
pub use plan::{
    plan_summary, CashflowFrequency, Expense, Income, PlanAsset, PlanLiability, PlanSummary,
};
