use axum::Router;

use crate::state::AppState;

pub mod customers;
pub mod doc;
pub mod health;
pub mod home;
pub mod orders;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(home::home))
        .route("/health", axum::routing::get(health::health_check))
        .nest("/customers", customers::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
        .route("/order_items/{id}", axum::routing::get(orders::get_order_items))
}
