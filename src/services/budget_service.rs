use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{Budget, BudgetStatus, BudgetView, SetBudget};
use crate::services::stats_service;

/// Alert fires once current-month spend passes this share of the budget.
pub const BUDGET_ALERT_THRESHOLD_PERCENT: u32 = 80;

pub async fn get_budget(pool: &PgPool, user_id: Uuid) -> Result<BudgetView, AppError> {
    let budget = db::budget_queries::fetch_for_user(pool, user_id).await?;

    Ok(BudgetView {
        monthly_amount: budget
            .map(|b| b.monthly_amount)
            .unwrap_or_else(|| BigDecimal::from(0)),
    })
}

pub async fn set_budget(
    pool: &PgPool,
    user_id: Uuid,
    data: SetBudget,
) -> Result<Budget, AppError> {
    if data.monthly_amount < BigDecimal::from(0) {
        return Err(AppError::Validation(
            "monthly_amount must not be negative".to_string(),
        ));
    }

    let budget = db::budget_queries::upsert(pool, user_id, &data.monthly_amount).await?;
    Ok(budget)
}

/// Current-month spend against the configured budget, recomputed fresh on
/// every call; no alert state is stored anywhere.
pub async fn get_status(pool: &PgPool, user_id: Uuid) -> Result<BudgetStatus, AppError> {
    let today = Utc::now().date_naive();
    let (month_start, month_end) = current_month_range(today);

    let expenses =
        db::expense_queries::fetch_for_user(pool, user_id, Some(month_start), Some(month_end))
            .await?;
    let current_month_total = stats_service::grand_total(&expenses).total_amount;

    let monthly_budget = get_budget(pool, user_id).await?.monthly_amount;
    let alert = over_budget_alert(&monthly_budget, &current_month_total);

    Ok(BudgetStatus {
        monthly_budget,
        current_month_total,
        alert,
    })
}

/// True when spend exceeds 80% of a positive budget. A budget of zero or
/// less means "no budget set" and never alerts.
pub fn over_budget_alert(monthly_budget: &BigDecimal, current_month_total: &BigDecimal) -> bool {
    if *monthly_budget <= BigDecimal::from(0) {
        return false;
    }

    // Integer scaling keeps the comparison exact in decimal arithmetic.
    current_month_total.clone() * BigDecimal::from(100)
        > monthly_budget.clone() * BigDecimal::from(BUDGET_ALERT_THRESHOLD_PERCENT)
}

/// Inclusive first/last day of the month containing `today`.
pub fn current_month_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);

    let first_of_next = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    };
    let end = first_of_next
        .and_then(|d| d.pred_opt())
        .unwrap_or(today);

    (start, end)
}
