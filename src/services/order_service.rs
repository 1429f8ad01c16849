use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::{
    dto::{
        orders::{NewOrder, OrderWithProducts},
        products::ProductList,
    },
    entity::{
        customers::Entity as Customers,
        order_products::{
            ActiveModel as OrderProductActive, Column as OrderProductCol, Entity as OrderProducts,
        },
        orders::{ActiveModel as OrderActive, Entity as Orders, Model as OrderModel},
        products::Entity as Products,
    },
    error::{AppError, AppResult},
    models::Order,
    response::ApiResponse,
    services::product_service::product_from_entity,
    state::AppState,
};

/// Insert the order row and one association row per item inside a single
/// transaction. A missing customer or item id fails the whole request and
/// rolls everything back, so a bad id can never leave a half-built order.
pub async fn create_order(
    state: &AppState,
    new: NewOrder,
) -> AppResult<ApiResponse<OrderWithProducts>> {
    let txn = state.orm.begin().await?;

    if Customers::find_by_id(new.customer_id).one(&txn).await?.is_none() {
        return Err(AppError::NotFound("Customer"));
    }

    let mut products = Vec::with_capacity(new.items.len());
    for item_id in &new.items {
        match Products::find_by_id(*item_id).one(&txn).await? {
            Some(product) => products.push(product),
            None => return Err(AppError::NotFound("Product")),
        }
    }

    let order = OrderActive {
        id: NotSet,
        order_date: Set(Utc::now().date_naive()),
        customer_id: Set(new.customer_id),
    }
    .insert(&txn)
    .await?;

    for (position, product) in products.iter().enumerate() {
        OrderProductActive {
            order_id: Set(order.id),
            product_id: Set(product.id),
            position: Set(position as i32),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    Ok(ApiResponse::success(
        "New Order Placed!",
        OrderWithProducts {
            order: order_from_entity(order),
            products: products.into_iter().map(product_from_entity).collect(),
        },
    ))
}

pub async fn get_order_items(state: &AppState, id: i32) -> AppResult<ApiResponse<ProductList>> {
    let order = Orders::find_by_id(id).one(&state.orm).await?;
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound("Order")),
    };

    // Walk the association rows in insertion order so the list reads back
    // exactly as the order was placed.
    let items = OrderProducts::find()
        .filter(OrderProductCol::OrderId.eq(order.id))
        .order_by_asc(OrderProductCol::Position)
        .find_also_related(Products)
        .all(&state.orm)
        .await?
        .into_iter()
        .filter_map(|(_, product)| product)
        .map(product_from_entity)
        .collect();

    Ok(ApiResponse::success("Order items", ProductList { items }))
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        order_date: model.order_date,
        customer_id: model.customer_id,
    }
}
