use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::ExpenseStats;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

#[derive(Debug, Deserialize)]
struct StatsQuery {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

async fn get_stats(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<StatsQuery>,
) -> Result<Json<ExpenseStats>, AppError> {
    info!(
        "GET /expenses/stats - Aggregating for user {} ({:?}..{:?})",
        user.user_id, params.start_date, params.end_date
    );

    let stats = services::stats_service::get_stats(
        &state.pool,
        user.user_id,
        params.start_date,
        params.end_date,
    )
    .await
    .map_err(|e| {
        error!("Failed to aggregate expenses for {}: {}", user.user_id, e);
        e
    })?;

    Ok(Json(stats))
}
