mod budget;
mod expense;
mod stats;

pub use budget::{Budget, BudgetStatus, BudgetView, SetBudget};
pub use expense::{Category, Expense, UnknownCategory};
pub use stats::{CategoryStat, ExpenseStats, MonthlyStat, TotalStats};
