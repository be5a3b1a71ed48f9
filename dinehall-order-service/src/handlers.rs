pub mod foods;
pub mod orders;
pub mod tables;

// Re-export routers for easier importing
pub use foods::router as foods_router;
pub use orders::router as orders_router;
pub use tables::router as tables_router;

use utoipa::OpenApi;

use crate::store::OrderStore;

#[derive(Clone)]
pub struct AppState {
    pub store: OrderStore,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Liveness greeting", body = String),
    ),
    tag = "meta"
)]
pub async fn index() -> &'static str {
    "hello"
}

#[derive(OpenApi)]
#[openapi(
    paths(
        index,
        tables::list_tables,
        foods::list_foods,
        orders::create_order,
        orders::add_food,
        orders::remove_food,
        orders::view_order,
        orders::close_order,
    ),
    components(
        schemas(
            crate::models::EatingTable,
            crate::models::Food,
            crate::models::OrderDetail,
            crate::models::CreateOrderRequest,
            crate::models::OrderFoodRequest,
            crate::models::ViewOrderRequest,
            crate::models::CloseOrderRequest,
            crate::models::ApiErrorResponse
        )
    ),
    tags(
        (name = "meta", description = "Service liveness"),
        (name = "tables", description = "Table availability endpoints"),
        (name = "foods", description = "Menu endpoints"),
        (name = "orders", description = "Order lifecycle endpoints")
    ),
    info(
        title = "Dinehall Order Service",
        description = "Table, menu, and order management API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
