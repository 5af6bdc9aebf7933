use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{percent_of, round2, Money};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalCategory {
    Retirement,
    Education,
    Home,
    Emergency,
    Travel,
    Business,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

/// A savings goal within a financial plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub name: String,
    pub category: GoalCategory,
    pub target_amount: Money,
    #[serde(default)]
    pub current_amount: Money,
    pub target_date: NaiveDate,
    pub priority: GoalPriority,
}

impl FinancialGoal {
    /// Funding progress as a percentage, zero for an unset target.
    pub fn progress_percentage(&self) -> Decimal {
        round2(percent_of(self.current_amount, self.target_amount))
    }

    pub fn remaining_amount(&self) -> Money {
        (self.target_amount - self.current_amount).max(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub name: String,
    pub progress_percentage: Decimal,
    pub remaining_amount: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

pub fn goal_progress(goal: &FinancialGoal) -> GoalProgress {
    GoalProgress {
        name: goal.name.clone(),
        progress_percentage: goal.progress_percentage(),
        remaining_amount: round2(goal.remaining_amount()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn goal(target: Decimal, current: Decimal) -> FinancialGoal {
        FinancialGoal {
            name: "House deposit".into(),
            category: GoalCategory::Home,
            target_amount: target,
            current_amount: current,
            target_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            priority: GoalPriority::High,
        }
    }

    #[test]
    fn test_progress_basic() {
        let g = goal(dec!(50_000), dec!(12_500));
        assert_eq!(g.progress_percentage(), dec!(25));
        assert_eq!(g.remaining_amount(), dec!(37_500));
    }

    #[test]
    fn test_zero_target_guard() {
        let g = goal(Decimal::ZERO, dec!(1_000));
        assert_eq!(g.progress_percentage(), Decimal::ZERO);
        assert_eq!(g.remaining_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_overfunded_goal_clamps_remaining() {
        let g = goal(dec!(10_000), dec!(12_000));
        assert_eq!(g.progress_percentage(), dec!(120));
        assert_eq!(g.remaining_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_goal_progress_snapshot() {
        let p = goal_progress(&goal(dec!(30_000), dec!(10_000)));
        assert_eq!(p.name, "House deposit");
        assert_eq!(p.progress_percentage, dec!(33.33));
        assert_eq!(p.remaining_amount, dec!(20_000));
    }
}
