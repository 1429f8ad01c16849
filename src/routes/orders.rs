use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    dto::{
        orders::{OrderPayload, OrderWithProducts},
        products::ProductList,
    },
    error::AppResult,
    response::ApiResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", axum::routing::post(create_order))
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderPayload,
    responses(
        (status = 201, description = "Order placed", body = ApiResponse<OrderWithProducts>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Customer or product not found"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<OrderWithProducts>>)> {
    let Json(payload) = payload?;
    let new = payload.validate_create()?;
    let body = order_service::create_order(&state, new).await?;
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    get,
    path = "/order_items/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Products attached to the order", body = ApiResponse<ProductList>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order_items(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let body = order_service::get_order_items(&state, id).await?;
    Ok(Json(body))
}
