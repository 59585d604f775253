//! Valuation endpoint
//!
//! Prices every stored record of one commodity under a single set of
//! market parameters.

use axum::{
    extract::State,
    response::Json,
    routing::post,
    Router,
};
use pricer_models::instruments::commodity::Commodity;
use pricer_models::valuation::{value_batch, MarketParameters, ValuationResult};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::{ApiError, ApiJson};

/// Body of `POST /market_options/pv`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationRequest {
    /// Commodity symbol selecting the records to value
    pub commodity: String,
    /// Continuously compounded risk-free rate
    pub interest_rate: f64,
    /// Black volatility
    pub volatility: f64,
    /// Futures price of the underlying
    pub spot_price: f64,
}

/// Build the valuation routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/market_options/pv", post(value_options))
}

/// POST /market_options/pv
///
/// An unknown commodity symbol matches no records and yields 404.
async fn value_options(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ValuationRequest>,
) -> Result<Json<Vec<ValuationResult>>, ApiError> {
    let records = request
        .commodity
        .parse::<Commodity>()
        .map(|commodity| state.store.find_by_commodity(commodity))
        .unwrap_or_default();

    if records.is_empty() {
        tracing::warn!(commodity = %request.commodity, "No options exist for commodity");
        return Err(ApiError::NoOptions);
    }

    let market = MarketParameters::new(
        request.interest_rate,
        request.volatility,
        request.spot_price,
    );
    let today = state.clock.today();
    let results = value_batch(&records, &market, today)
        .inspect_err(|err| tracing::warn!(error = %err, "Valuation failed"))?;

    tracing::info!(
        commodity = %request.commodity,
        count = results.len(),
        valuation_date = %today,
        "Valued options"
    );
    Ok(Json(results))
}
