use axum::{extract::State, response::Json, routing::get, Router};
use tracing::instrument;

use crate::error::ApiError;
use crate::models::EatingTable;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/tables", get(list_tables))
}

#[utoipa::path(
    get,
    path = "/tables",
    responses(
        (status = 200, description = "Tables currently open for seating", body = [EatingTable]),
    ),
    tag = "tables"
)]
#[instrument(skip(state))]
pub async fn list_tables(
    State(state): State<AppState>,
) -> Result<Json<Vec<EatingTable>>, ApiError> {
    let tables = state.store.list_available_tables().await?;
    Ok(Json(tables))
}
