use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    dto::customers::{CustomerList, CustomerPatch, NewCustomer},
    entity::{
        customers::{ActiveModel, Column, Entity as Customers, Model as CustomerModel},
        orders::{Column as OrderCol, Entity as Orders},
    },
    error::{AppError, AppResult},
    models::Customer,
    response::ApiResponse,
    state::AppState,
};

pub async fn list_customers(state: &AppState) -> AppResult<ApiResponse<CustomerList>> {
    let items = Customers::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(customer_from_entity)
        .collect();

    Ok(ApiResponse::success("Customers", CustomerList { items }))
}

pub async fn get_customer(state: &AppState, id: i32) -> AppResult<ApiResponse<Customer>> {
    let customer = Customers::find_by_id(id).one(&state.orm).await?;
    let customer = match customer {
        Some(c) => c,
        None => return Err(AppError::NotFound("Customer")),
    };

    Ok(ApiResponse::success(
        "Customer",
        customer_from_entity(customer),
    ))
}

pub async fn create_customer(
    state: &AppState,
    new: NewCustomer,
) -> AppResult<ApiResponse<Customer>> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(new.name),
        user_name: Set(new.user_name),
        password: Set(new.password),
        email: Set(new.email),
        phone: Set(new.phone),
    };
    let customer = active.insert(&state.orm).await?;

    Ok(ApiResponse::success(
        "New customer added successfully",
        customer_from_entity(customer),
    ))
}

pub async fn update_customer(
    state: &AppState,
    id: i32,
    patch: CustomerPatch,
) -> AppResult<ApiResponse<Customer>> {
    let existing = Customers::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(AppError::NotFound("Customer")),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = patch.name {
        active.name = Set(name);
    }
    if let Some(user_name) = patch.user_name {
        active.user_name = Set(user_name);
    }
    if let Some(password) = patch.password {
        active.password = Set(password);
    }
    if let Some(email) = patch.email {
        active.email = Set(Some(email));
    }
    if let Some(phone) = patch.phone {
        active.phone = Set(Some(phone));
    }

    let customer = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Customer details updated",
        customer_from_entity(customer),
    ))
}

pub async fn delete_customer(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    // Refuse rather than cascade or orphan the customer's orders.
    let owned = Orders::find()
        .filter(OrderCol::CustomerId.eq(id))
        .count(&state.orm)
        .await?;
    if owned > 0 {
        return Err(AppError::Conflict(format!(
            "Customer {id} still has {owned} order(s)"
        )));
    }

    let result = Customers::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Customer"));
    }

    Ok(ApiResponse::success(
        "Customer successfully deleted",
        serde_json::json!({}),
    ))
}

pub fn customer_from_entity(model: CustomerModel) -> Customer {
    Customer {
        id: model.id,
        name: model.name,
        user_name: model.user_name,
        password: model.password,
        email: model.email,
        phone: model.phone,
    }
}
