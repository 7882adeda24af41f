use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Expense;

/// Fetch every expense belonging to `user_id` whose date falls within the
/// optional inclusive bounds. Owner equality is part of the WHERE clause so
/// another user's rows can never reach the aggregation layer.
///
/// The ORDER BY is fixed so repeated queries over identical data return
/// identical row order.
pub async fn fetch_for_user(
    pool: &PgPool,
    user_id: Uuid,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<Vec<Expense>, sqlx::Error> {
    sqlx::query_as::<_, Expense>(
        "SELECT id, user_id, amount, category, description, date, tags, created_at
         FROM expenses
         WHERE user_id = $1
           AND ($2::date IS NULL OR date >= $2)
           AND ($3::date IS NULL OR date <= $3)
         ORDER BY date DESC, created_at DESC, id",
    )
    .bind(user_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_all(pool)
    .await
}
