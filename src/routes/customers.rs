use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    dto::customers::{CustomerList, CustomerPayload},
    error::AppResult,
    models::Customer,
    response::ApiResponse,
    services::customer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(list_customers))
        .route("/", axum::routing::post(create_customer))
        .route("/{id}", axum::routing::get(get_customer))
        .route("/{id}", axum::routing::put(update_customer))
        .route("/{id}", axum::routing::delete(delete_customer))
}

#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "List customers", body = ApiResponse<CustomerList>),
    ),
    tag = "Customers"
)]
pub async fn list_customers(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CustomerList>>> {
    let body = customer_service::list_customers(&state).await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Get customer", body = ApiResponse<Customer>),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Customer>>> {
    let body = customer_service::get_customer(&state, id).await?;
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/customers",
    request_body = CustomerPayload,
    responses(
        (status = 201, description = "Customer created", body = ApiResponse<Customer>),
        (status = 400, description = "Validation failed"),
    ),
    tag = "Customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CustomerPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<Customer>>)> {
    let Json(payload) = payload?;
    let new = payload.validate_create()?;
    let body = customer_service::create_customer(&state, new).await?;
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    put,
    path = "/customers/{id}",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    request_body = CustomerPayload,
    responses(
        (status = 200, description = "Updated customer", body = ApiResponse<Customer>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<CustomerPayload>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Customer>>> {
    let Json(payload) = payload?;
    let patch = payload.validate_update()?;
    let body = customer_service::update_customer(&state, id, patch).await?;
    Ok(Json(body))
}

#[utoipa::path(
    delete,
    path = "/customers/{id}",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Deleted customer"),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Customer still owns orders"),
    ),
    tag = "Customers"
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let body = customer_service::delete_customer(&state, id).await?;
    Ok(Json(body))
}
