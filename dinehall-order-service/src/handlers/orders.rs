use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::models::*;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-order", post(create_order))
        .route("/add-food", post(add_food))
        .route("/remove-food", post(remove_food))
        .route("/view-order", get(view_order))
        .route("/close-order", post(close_order))
}

#[utoipa::path(
    post,
    path = "/add-order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order opened against the table", body = OrderDetail),
        (status = 400, description = "Missing table_id", body = ApiErrorResponse),
        (status = 404, description = "Table not found or not available", body = ApiErrorResponse),
    ),
    tag = "orders"
)]
#[instrument(skip(state))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderDetail>), ApiError> {
    let table_id = payload
        .table_id
        .ok_or(ApiError::Validation("table_id is required"))?;

    let order = state.store.reserve_table(table_id).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    post,
    path = "/add-food",
    request_body = OrderFoodRequest,
    responses(
        (status = 200, description = "Food attached to the order", body = OrderDetail),
        (status = 400, description = "Missing food_id or order_id", body = ApiErrorResponse),
        (status = 404, description = "Order or food not found", body = ApiErrorResponse),
    ),
    tag = "orders"
)]
#[instrument(skip(state))]
pub async fn add_food(
    State(state): State<AppState>,
    Json(payload): Json<OrderFoodRequest>,
) -> Result<Json<OrderDetail>, ApiError> {
    let food_id = payload
        .food_id
        .ok_or(ApiError::Validation("food_id is required"))?;
    let order_id = payload
        .order_id
        .ok_or(ApiError::Validation("order_id is required"))?;

    let order = state.store.add_food_to_order(order_id, food_id).await?;
    Ok(Json(order))
}

#[utoipa::path(
    post,
    path = "/remove-food",
    request_body = OrderFoodRequest,
    responses(
        (status = 200, description = "Food detached from the order", body = OrderDetail),
        (status = 400, description = "Missing food_id or order_id", body = ApiErrorResponse),
        (status = 404, description = "Order not found", body = ApiErrorResponse),
    ),
    tag = "orders"
)]
#[instrument(skip(state))]
pub async fn remove_food(
    State(state): State<AppState>,
    Json(payload): Json<OrderFoodRequest>,
) -> Result<Json<OrderDetail>, ApiError> {
    let food_id = payload
        .food_id
        .ok_or(ApiError::Validation("food_id is required"))?;
    let order_id = payload
        .order_id
        .ok_or(ApiError::Validation("order_id is required"))?;

    let order = state.store.remove_food_from_order(order_id, food_id).await?;
    Ok(Json(order))
}

#[utoipa::path(
    get,
    path = "/view-order",
    request_body = ViewOrderRequest,
    responses(
        (status = 200, description = "The requested order, or every order when no id is supplied", body = OrderDetail),
        (status = 404, description = "Order not found", body = ApiErrorResponse),
    ),
    tag = "orders"
)]
#[instrument(skip(state))]
pub async fn view_order(
    State(state): State<AppState>,
    payload: Option<Json<ViewOrderRequest>>,
) -> Result<Response, ApiError> {
    match payload.and_then(|Json(p)| p.order_id) {
        Some(order_id) => {
            let order = state.store.get_order(order_id).await?;
            Ok(Json(order).into_response())
        }
        None => {
            let orders = state.store.list_orders().await?;
            Ok(Json(orders).into_response())
        }
    }
}

#[utoipa::path(
    post,
    path = "/close-order",
    request_body = CloseOrderRequest,
    responses(
        (status = 200, description = "Order closed", body = OrderDetail),
        (status = 400, description = "Missing order_id", body = ApiErrorResponse),
        (status = 404, description = "Order not found", body = ApiErrorResponse),
    ),
    tag = "orders"
)]
#[instrument(skip(state))]
pub async fn close_order(
    State(state): State<AppState>,
    Json(payload): Json<CloseOrderRequest>,
) -> Result<Json<OrderDetail>, ApiError> {
    let order_id = payload
        .order_id
        .ok_or(ApiError::Validation("order_id is required"))?;

    let order = state.store.close_order(order_id).await?;
    Ok(Json(order))
}
