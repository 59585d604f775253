//! Option record endpoints
//!
//! List, fetch, create and delete stored option contracts.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use pricer_models::instruments::commodity::{NewOptionContract, OptionContract, OptionId};
use serde::Deserialize;

use super::AppState;
use crate::error::{ApiError, ApiJson};

/// Pagination parameters for `GET /market_options`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListQuery {
    /// Records to skip
    pub skip: Option<usize>,
    /// Page size, capped by the configured page limit
    pub limit: Option<usize>,
}

/// Build the option record routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/market_options", get(list_options).post(create_option))
        .route(
            "/market_options/{id}",
            get(get_option).delete(delete_option),
        )
}

/// GET /market_options
async fn list_options(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<OptionContract>> {
    let page_limit = state.config.page_limit;
    let limit = query.limit.unwrap_or(page_limit).min(page_limit);
    Json(state.store.list(query.skip.unwrap_or(0), limit))
}

/// GET /market_options/{id}
async fn get_option(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<OptionContract>, ApiError> {
    state
        .store
        .get(OptionId::new(id))
        .map(Json)
        .ok_or(ApiError::OptionNotFound)
}

/// POST /market_options
async fn create_option(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NewOptionContract>,
) -> Result<impl IntoResponse, ApiError> {
    let contract = state
        .store
        .insert(request, state.clock.now())
        .inspect_err(|err| tracing::info!(error = %err, "Rejected option contract"))?;

    tracing::info!(
        id = %contract.id(),
        commodity = %contract.commodity(),
        contract_month = %contract.contract_month(),
        expiration_date = %contract.expiration_date(),
        "Created option contract"
    );
    Ok((StatusCode::CREATED, Json(contract)))
}

/// DELETE /market_options/{id}
async fn delete_option(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    if state.store.remove(OptionId::new(id)) {
        tracing::info!(id, "Deleted option contract");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::OptionNotFound)
    }
}
