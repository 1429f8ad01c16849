use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub user_name: String,
    pub password: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub price: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Order {
    pub id: i32,
    pub order_date: NaiveDate,
    pub customer_id: i32,
}
