use axum::{extract::State, response::Json, routing::get, Router};
use tracing::instrument;

use crate::error::ApiError;
use crate::models::Food;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/foods", get(list_foods))
}

#[utoipa::path(
    get,
    path = "/foods",
    responses(
        (status = 200, description = "The full menu", body = [Food]),
    ),
    tag = "foods"
)]
#[instrument(skip(state))]
pub async fn list_foods(State(state): State<AppState>) -> Result<Json<Vec<Food>>, ApiError> {
    let menu = state.store.list_foods().await?;
    Ok(Json(menu))
}
