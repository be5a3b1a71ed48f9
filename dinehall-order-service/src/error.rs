use axum::{http::StatusCode, response::Json};
use serde_json::json;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            ApiError::Store(err) => {
                let status = match err {
                    StoreError::TableNotFound
                    | StoreError::TableUnavailable
                    | StoreError::OrderNotFound
                    | StoreError::FoodNotFound => StatusCode::NOT_FOUND,
                    StoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::response::IntoResponse;

    use super::*;

    #[test]
    fn missing_field_maps_to_bad_request() {
        let resp = ApiError::Validation("table_id is required").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn absent_entities_map_to_not_found() {
        for err in [
            StoreError::TableNotFound,
            StoreError::OrderNotFound,
            StoreError::FoodNotFound,
        ] {
            let resp = ApiError::Store(err).into_response();
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn reserved_table_maps_to_not_found() {
        let resp = ApiError::Store(StoreError::TableUnavailable).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn errors_surface_as_error_json() {
        let resp = ApiError::Store(StoreError::OrderNotFound).into_response();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, json!({"error": "Order not found"}));
    }
}
