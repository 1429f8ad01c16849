use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    dto::products::{NewProduct, ProductList, ProductPatch},
    entity::{
        order_products::{Column as OrderProductCol, Entity as OrderProducts},
        products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    },
    error::{AppError, AppResult},
    models::Product,
    response::ApiResponse,
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let items = Products::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    Ok(ApiResponse::success("Products", ProductList { items }))
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<ApiResponse<Product>> {
    let product = Products::find_by_id(id).one(&state.orm).await?;
    let product = match product {
        Some(p) => p,
        None => return Err(AppError::NotFound("Product")),
    };

    Ok(ApiResponse::success("Product", product_from_entity(product)))
}

pub async fn create_product(state: &AppState, new: NewProduct) -> AppResult<ApiResponse<Product>> {
    let active = ActiveModel {
        id: NotSet,
        product_name: Set(new.product_name),
        price: Set(new.price),
    };
    let product = active.insert(&state.orm).await?;

    Ok(ApiResponse::success(
        "New Product created",
        product_from_entity(product),
    ))
}

pub async fn update_product(
    state: &AppState,
    id: i32,
    patch: ProductPatch,
) -> AppResult<ApiResponse<Product>> {
    let existing = Products::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound("Product")),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(product_name) = patch.product_name {
        active.product_name = Set(product_name);
    }
    if let Some(price) = patch.price {
        active.price = Set(price);
    }

    let product = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Product details updated",
        product_from_entity(product),
    ))
}

pub async fn delete_product(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    // A product referenced by any order cannot be removed; the association
    // rows would be left dangling otherwise.
    let referenced = OrderProducts::find()
        .filter(OrderProductCol::ProductId.eq(id))
        .count(&state.orm)
        .await?;
    if referenced > 0 {
        return Err(AppError::Conflict(format!(
            "Product {id} is referenced by {referenced} order(s)"
        )));
    }

    let result = Products::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Product"));
    }

    Ok(ApiResponse::success(
        "Product successfully deleted",
        serde_json::json!({}),
    ))
}

pub fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        product_name: model.product_name,
        price: model.price,
    }
}
