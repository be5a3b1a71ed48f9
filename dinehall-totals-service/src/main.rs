use axum::{Router, extract::State, response::Json, routing::get};
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{info, instrument};

use dinehall_totals_service::aggregate::compute_total;
use dinehall_totals_service::error::ApiError;
use dinehall_totals_service::models::TotalResponse;

#[derive(Clone)]
struct AppState {
    client: reqwest::Client,
    order_service_endpoint: String,
}

#[instrument(skip(state))]
async fn index(State(state): State<AppState>) -> Result<Json<TotalResponse>, ApiError> {
    let total = compute_total(&state.client, &state.order_service_endpoint).await?;
    Ok(Json(total))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let order_service_endpoint =
        std::env::var("ORDER_SERVICE_ENDPOINT").expect("ORDER_SERVICE_ENDPOINT required");

    let state = AppState {
        client: reqwest::Client::new(),
        order_service_endpoint,
    };

    let app = Router::new()
        .route("/", get(index))
        .with_state(state)
        .layer(CorsLayer::permissive());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8090".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Totals service listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
