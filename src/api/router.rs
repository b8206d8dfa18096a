use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::inventory::InventoryService;

/// Builds the inventory router.
///
/// # Routes
///
/// - `GET /products/` - List products, `?available=true` keeps in-stock ones
/// - `POST /products/` - Create a product
/// - `GET /products/:id` - Fetch a product
/// - `PATCH /products/:id` - Replace name, price and stock count
/// - `DELETE /products/:id` - Delete a product
/// - `PATCH /products/purchase/:id` - Sell one unit
/// - `GET /health` - Liveness probe
///
/// The collection routes answer with and without the trailing slash.
pub fn inventory_router(service: InventoryService) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/:id",
            get(handlers::get_product)
                .patch(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route("/products/purchase/:id", patch(handlers::purchase_product))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
