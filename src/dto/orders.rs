use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Order, Product};
use crate::validation::ValidationErrors;

/// Order placement payload. `order_date` is server-assigned and deliberately
/// not accepted from the client.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OrderPayload {
    pub customer_id: Option<i32>,
    pub items: Option<Vec<i32>>,
}

#[derive(Debug)]
pub struct NewOrder {
    pub customer_id: i32,
    pub items: Vec<i32>,
}

impl OrderPayload {
    pub fn validate_create(self) -> Result<NewOrder, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.customer_id.is_none() {
            errors.push("customer_id", "Missing data for required field.");
        }
        if self.items.is_none() {
            errors.push("items", "Missing data for required field.");
        }

        match (self.customer_id, self.items) {
            (Some(customer_id), Some(items)) => Ok(NewOrder { customer_id, items }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithProducts {
    pub order: Order,
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_customer_and_items() {
        let errors = OrderPayload::default().validate_create().unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["customer_id", "items"]
        );
    }

    #[test]
    fn empty_item_list_is_a_valid_order() {
        let payload = OrderPayload {
            customer_id: Some(1),
            items: Some(vec![]),
        };
        let new = payload.validate_create().unwrap();
        assert!(new.items.is_empty());
    }
}
