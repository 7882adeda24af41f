use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Budget;

pub async fn fetch_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<Budget>, sqlx::Error> {
    sqlx::query_as::<_, Budget>(
        "SELECT user_id, monthly_amount, updated_at
         FROM budgets
         WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn upsert(
    pool: &PgPool,
    user_id: Uuid,
    monthly_amount: &BigDecimal,
) -> Result<Budget, sqlx::Error> {
    sqlx::query_as::<_, Budget>(
        "INSERT INTO budgets (user_id, monthly_amount, updated_at)
         VALUES ($1, $2, NOW())
         ON CONFLICT (user_id)
         DO UPDATE SET monthly_amount = EXCLUDED.monthly_amount, updated_at = NOW()
         RETURNING user_id, monthly_amount, updated_at",
    )
    .bind(user_id)
    .bind(monthly_amount)
    .fetch_one(pool)
    .await
}
