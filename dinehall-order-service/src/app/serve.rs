use anyhow::Context;
use axum::{routing::get, Router};
use diesel_migrations::MigrationHarness;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use dinehall_order_service::establish_connection;
use dinehall_order_service::handlers::{
    foods_router, index, orders_router, tables_router, ApiDoc, AppState,
};
use dinehall_order_service::store::OrderStore;

use super::MIGRATIONS;

pub async fn main() -> anyhow::Result<()> {
    let mut conn = establish_connection();
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("failed to run migrations: {e}"))?;

    let state = AppState {
        store: OrderStore::new(conn),
    };

    let app = Router::new()
        .route("/", get(index))
        .merge(tables_router())
        .merge(foods_router())
        .merge(orders_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(CorsLayer::permissive());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Order service listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
