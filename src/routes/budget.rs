use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{Budget, BudgetStatus, BudgetView, SetBudget};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_budget).put(set_budget))
        .route("/status", get(get_status))
}

async fn get_budget(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<BudgetView>, AppError> {
    info!("GET /budget - Fetching budget for user {}", user.user_id);

    let budget = services::budget_service::get_budget(&state.pool, user.user_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch budget for {}: {}", user.user_id, e);
            e
        })?;

    Ok(Json(budget))
}

async fn set_budget(
    State(state): State<AppState>,
    user: AuthUser,
    Json(data): Json<SetBudget>,
) -> Result<Json<Budget>, AppError> {
    info!("PUT /budget - Setting budget for user {}", user.user_id);

    let budget = services::budget_service::set_budget(&state.pool, user.user_id, data)
        .await
        .map_err(|e| {
            error!("Failed to set budget for {}: {}", user.user_id, e);
            e
        })?;

    Ok(Json(budget))
}

async fn get_status(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<BudgetStatus>, AppError> {
    info!(
        "GET /budget/status - Evaluating budget status for user {}",
        user.user_id
    );

    let status = services::budget_service::get_status(&state.pool, user.user_id)
        .await
        .map_err(|e| {
            error!("Failed to evaluate budget status for {}: {}", user.user_id, e);
            e
        })?;

    Ok(Json(status))
}
