use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;
use crate::validation::{ValidationErrors, non_negative, optional_string, required_number, required_string};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductPayload {
    pub product_name: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug)]
pub struct NewProduct {
    pub product_name: String,
    pub price: f64,
}

#[derive(Debug, Default)]
pub struct ProductPatch {
    pub product_name: Option<String>,
    pub price: Option<f64>,
}

impl ProductPayload {
    pub fn validate_create(self) -> Result<NewProduct, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let product_name = required_string(&mut errors, "product_name", self.product_name, 30);
        let price = required_number(&mut errors, "price", self.price);
        let price = non_negative(&mut errors, "price", price);

        match (product_name, price) {
            (Some(product_name), Some(price)) if errors.is_empty() => Ok(NewProduct {
                product_name,
                price,
            }),
            _ => Err(errors),
        }
    }

    pub fn validate_update(self) -> Result<ProductPatch, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let patch = ProductPatch {
            product_name: optional_string(&mut errors, "product_name", self.product_name, 30),
            price: non_negative(&mut errors, "price", self.price),
        };

        if errors.is_empty() { Ok(patch) } else { Err(errors) }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_name_and_price() {
        let errors = ProductPayload::default().validate_create().unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["price", "product_name"]
        );
    }

    #[test]
    fn create_rejects_negative_price() {
        let payload = ProductPayload {
            product_name: Some("Widget".into()),
            price: Some(-1.0),
        };
        let errors = payload.validate_create().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["price"]);
    }

    #[test]
    fn zero_price_is_allowed() {
        let payload = ProductPayload {
            product_name: Some("Freebie".into()),
            price: Some(0.0),
        };
        let new = payload.validate_create().unwrap();
        assert_eq!(new.price, 0.0);
    }
}
