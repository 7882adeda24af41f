use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Stored monthly budget for one user. A missing row means "no budget set"
/// and is treated the same as a zero amount.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Budget {
    pub user_id: Uuid,
    pub monthly_amount: BigDecimal,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetBudget {
    pub monthly_amount: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetView {
    pub monthly_amount: BigDecimal,
}

/// Dashboard view: current-month spend against the configured budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub monthly_budget: BigDecimal,
    pub current_month_total: BigDecimal,
    pub alert: bool,
}
