//! HTTP error mapping
//!
//! Every handler failure becomes an [`ApiError`], rendered as
//! `{"detail": "<message>"}` with the matching status code. Request bodies
//! are read through [`ApiJson`] so malformed JSON takes the same shape.

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use pricer_models::instruments::commodity::ContractError;
use pricer_models::valuation::ValuationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message
    pub detail: String,
}

/// Errors returned by the REST handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record with the requested id
    #[error("Option not found")]
    OptionNotFound,

    /// Valuation request matched no stored record
    #[error("No options exist.")]
    NoOptions,

    /// Contract rejected at creation
    #[error(transparent)]
    InvalidContract(#[from] ContractError),

    /// Record could not be priced
    #[error(transparent)]
    Valuation(#[from] ValuationError),

    /// Request body is not valid JSON or does not fit the expected shape
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::OptionNotFound | ApiError::NoOptions => StatusCode::NOT_FOUND,
            ApiError::InvalidContract(_) | ApiError::Valuation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::InvalidBody(JsonRejection::JsonSyntaxError(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::InvalidBody(rejection) => rejection.status(),
        }
    }
}

/// JSON body extractor whose rejection is an [`ApiError`]
#[derive(Debug, Clone, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::analytical::AnalyticalError;
    use pricer_models::instruments::commodity::{ExpiryError, OptionId};

    async fn body_of(err: ApiError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_messages() {
        let (status, body) = body_of(ApiError::OptionNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.detail, "Option not found");

        let (status, body) = body_of(ApiError::NoOptions).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.detail, "No options exist.");
    }

    #[tokio::test]
    async fn test_contract_error_is_unprocessable() {
        let err = ContractError::Expiry(ExpiryError::InvalidCommodity {
            symbol: "WTI".to_string(),
        });
        let (status, body) = body_of(err.into()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body.detail,
            "Unknown Commodity. Accepted commodities are: BRN or HH"
        );
    }

    #[tokio::test]
    async fn test_valuation_error_names_record() {
        let err = ValuationError {
            id: OptionId::new(7),
            source: AnalyticalError::InvalidVolatility { volatility: 0.0 },
        };
        let (status, body) = body_of(err.into()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.detail.contains("7"));
    }

    #[tokio::test]
    async fn test_body_rejections_render_detail() {
        use axum::body::Body;
        use axum::http::Request;
        use pricer_models::instruments::commodity::NewOptionContract;

        let extract = |body: &'static str| async move {
            let request = Request::builder()
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap();
            ApiJson::<NewOptionContract>::from_request(request, &())
                .await
                .map(|ApiJson(contract)| contract)
        };

        let err = extract(r#"{"commodity":"BRN","contract_month":"Jan24","option_type":"Call"}"#)
            .await
            .unwrap_err();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.detail.contains("strike_price"));

        let err = extract("{not json").await.unwrap_err();
        let (status, _) = body_of(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported_media() {
        use axum::body::Body;
        use axum::http::Request;

        let request = Request::builder()
            .method("POST")
            .body(Body::from("{}"))
            .unwrap();
        let err = ApiJson::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap_err();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(!body.detail.is_empty());
    }
}
