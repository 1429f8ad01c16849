use sea_orm::{ConnectOptions, Database, EntityTrait, PaginatorTrait};

use storefront_api::{
    db::create_schema,
    dto::{
        customers::CustomerPayload, orders::OrderPayload, products::ProductPayload,
    },
    entity::{OrderProducts, Orders},
    error::AppError,
    services::{customer_service, order_service, product_service},
    state::AppState,
};

// In-memory SQLite keyed to a single pooled connection, so every statement
// sees the same database.
async fn setup_state() -> anyhow::Result<AppState> {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);
    let orm = Database::connect(options).await?;
    create_schema(&orm).await?;
    Ok(AppState { orm })
}

fn customer_payload(name: &str, user_name: &str) -> CustomerPayload {
    CustomerPayload {
        name: Some(name.to_string()),
        user_name: Some(user_name.to_string()),
        password: Some("s3cret".to_string()),
        email: Some(format!("{user_name}@example.com")),
        phone: Some("555-0100".to_string()),
    }
}

async fn seed_customer(state: &AppState, name: &str, user_name: &str) -> anyhow::Result<i32> {
    let new = customer_payload(name, user_name)
        .validate_create()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let resp = customer_service::create_customer(state, new).await?;
    Ok(resp.data.expect("customer data").id)
}

async fn seed_product(state: &AppState, name: &str, price: f64) -> anyhow::Result<i32> {
    let new = ProductPayload {
        product_name: Some(name.to_string()),
        price: Some(price),
    }
    .validate_create()
    .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let resp = product_service::create_product(state, new).await?;
    Ok(resp.data.expect("product data").id)
}

#[tokio::test]
async fn customer_roundtrip_preserves_fields() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let id = seed_customer(&state, "Ada Lovelace", "ada").await?;
    let fetched = customer_service::get_customer(&state, id)
        .await?
        .data
        .expect("customer data");

    assert_eq!(fetched.id, id);
    assert_eq!(fetched.name, "Ada Lovelace");
    assert_eq!(fetched.user_name, "ada");
    assert_eq!(fetched.password, "s3cret");
    assert_eq!(fetched.email.as_deref(), Some("ada@example.com"));
    assert_eq!(fetched.phone.as_deref(), Some("555-0100"));

    Ok(())
}

#[tokio::test]
async fn partial_update_only_overwrites_supplied_fields() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let id = seed_customer(&state, "Ada Lovelace", "ada").await?;

    let patch = CustomerPayload {
        phone: Some("555-0199".to_string()),
        ..Default::default()
    }
    .validate_update()
    .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let updated = customer_service::update_customer(&state, id, patch)
        .await?
        .data
        .expect("customer data");

    assert_eq!(updated.phone.as_deref(), Some("555-0199"));
    assert_eq!(updated.name, "Ada Lovelace");
    assert_eq!(updated.user_name, "ada");
    assert_eq!(updated.email.as_deref(), Some("ada@example.com"));

    Ok(())
}

#[tokio::test]
async fn update_missing_customer_is_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let patch = CustomerPayload {
        phone: Some("555-0199".to_string()),
        ..Default::default()
    }
    .validate_update()
    .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let err = customer_service::update_customer(&state, 404, patch)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound("Customer")));

    Ok(())
}

#[tokio::test]
async fn delete_customer_semantics() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let id = seed_customer(&state, "Ada Lovelace", "ada").await?;

    // Deleting a nonexistent id must not touch the row count.
    let err = customer_service::delete_customer(&state, id + 1)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound("Customer")));
    let listed = customer_service::list_customers(&state)
        .await?
        .data
        .expect("customer list");
    assert_eq!(listed.items.len(), 1);

    customer_service::delete_customer(&state, id).await?;
    let listed = customer_service::list_customers(&state)
        .await?
        .data
        .expect("customer list");
    assert!(listed.items.is_empty());

    let err = customer_service::get_customer(&state, id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("Customer")));

    Ok(())
}

#[tokio::test]
async fn widget_product_lifecycle() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let id = seed_product(&state, "Widget", 9.99).await?;
    let fetched = product_service::get_product(&state, id)
        .await?
        .data
        .expect("product data");
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.product_name, "Widget");
    assert_eq!(fetched.price, 9.99);

    product_service::delete_product(&state, id).await?;
    let err = product_service::get_product(&state, id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("Product")));

    Ok(())
}

#[tokio::test]
async fn product_list_matches_row_count_in_stable_order() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let first = seed_product(&state, "Widget", 9.99).await?;
    let second = seed_product(&state, "Gadget", 19.99).await?;
    let third = seed_product(&state, "Gizmo", 4.50).await?;

    let listed = product_service::list_products(&state)
        .await?
        .data
        .expect("product list");
    let ids: Vec<_> = listed.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first, second, third]);

    Ok(())
}

#[tokio::test]
async fn order_attaches_products_in_the_order_given() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let customer_id = seed_customer(&state, "Ada Lovelace", "ada").await?;
    let p1 = seed_product(&state, "Widget", 9.99).await?;
    let p2 = seed_product(&state, "Gadget", 19.99).await?;

    let new = OrderPayload {
        customer_id: Some(customer_id),
        items: Some(vec![p1, p2]),
    }
    .validate_create()
    .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let placed = order_service::create_order(&state, new)
        .await?
        .data
        .expect("order data");

    assert_eq!(placed.order.customer_id, customer_id);
    assert_eq!(placed.order.order_date, chrono::Utc::now().date_naive());
    let placed_ids: Vec<_> = placed.products.iter().map(|p| p.id).collect();
    assert_eq!(placed_ids, vec![p1, p2]);

    let items = order_service::get_order_items(&state, placed.order.id)
        .await?
        .data
        .expect("order items");
    let item_ids: Vec<_> = items.items.iter().map(|p| p.id).collect();
    assert_eq!(item_ids, vec![p1, p2]);

    Ok(())
}

#[tokio::test]
async fn order_round_trips_products_in_given_order() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let customer_id = seed_customer(&state, "Ada Lovelace", "ada").await?;
    let p1 = seed_product(&state, "Widget", 9.99).await?;
    let p2 = seed_product(&state, "Gadget", 19.99).await?;

    // Items given in descending-id order must read back the same way.
    let new = OrderPayload {
        customer_id: Some(customer_id),
        items: Some(vec![p2, p1]),
    }
    .validate_create()
    .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let placed = order_service::create_order(&state, new)
        .await?
        .data
        .expect("order data");
    let placed_ids: Vec<_> = placed.products.iter().map(|p| p.id).collect();
    assert_eq!(placed_ids, vec![p2, p1]);

    let items = order_service::get_order_items(&state, placed.order.id)
        .await?
        .data
        .expect("order items");
    let item_ids: Vec<_> = items.items.iter().map(|p| p.id).collect();
    assert_eq!(item_ids, vec![p2, p1]);

    Ok(())
}

#[tokio::test]
async fn order_with_missing_product_creates_nothing() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let customer_id = seed_customer(&state, "Ada Lovelace", "ada").await?;
    let p1 = seed_product(&state, "Widget", 9.99).await?;

    let new = OrderPayload {
        customer_id: Some(customer_id),
        items: Some(vec![p1, 9999]),
    }
    .validate_create()
    .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let err = order_service::create_order(&state, new).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("Product")));

    // The transaction rolled back, so no order and no association rows exist.
    assert_eq!(Orders::find().count(&state.orm).await?, 0);
    assert_eq!(OrderProducts::find().count(&state.orm).await?, 0);

    Ok(())
}

#[tokio::test]
async fn order_for_missing_customer_is_rejected() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let p1 = seed_product(&state, "Widget", 9.99).await?;

    let new = OrderPayload {
        customer_id: Some(42),
        items: Some(vec![p1]),
    }
    .validate_create()
    .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let err = order_service::create_order(&state, new).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("Customer")));
    assert_eq!(Orders::find().count(&state.orm).await?, 0);

    Ok(())
}

#[tokio::test]
async fn order_items_for_missing_order_is_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let err = order_service::get_order_items(&state, 7).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("Order")));

    Ok(())
}

#[tokio::test]
async fn referenced_rows_cannot_be_deleted() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let customer_id = seed_customer(&state, "Ada Lovelace", "ada").await?;
    let p1 = seed_product(&state, "Widget", 9.99).await?;

    let new = OrderPayload {
        customer_id: Some(customer_id),
        items: Some(vec![p1]),
    }
    .validate_create()
    .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    order_service::create_order(&state, new).await?;

    let err = customer_service::delete_customer(&state, customer_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let err = product_service::delete_product(&state, p1).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // Both rows survived the refused deletes.
    assert!(customer_service::get_customer(&state, customer_id).await.is_ok());
    assert!(product_service::get_product(&state, p1).await.is_ok());

    Ok(())
}
