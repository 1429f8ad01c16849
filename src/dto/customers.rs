use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Customer;
use crate::validation::{ValidationErrors, optional_string, required_string};

/// Raw customer payload. Every field is optional so presence is checked by
/// the validation pass, which reports all missing fields together.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CustomerPayload {
    pub name: Option<String>,
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug)]
pub struct NewCustomer {
    pub name: String,
    pub user_name: String,
    pub password: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Partial update: only fields carried here are overwritten.
#[derive(Debug, Default)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CustomerPayload {
    pub fn validate_create(self) -> Result<NewCustomer, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = required_string(&mut errors, "name", self.name, 75);
        let user_name = required_string(&mut errors, "user_name", self.user_name, 75);
        let password = required_string(&mut errors, "password", self.password, 50);
        let email = optional_string(&mut errors, "email", self.email, 150);
        let phone = optional_string(&mut errors, "phone", self.phone, 16);

        match (name, user_name, password) {
            (Some(name), Some(user_name), Some(password)) if errors.is_empty() => Ok(NewCustomer {
                name,
                user_name,
                password,
                email,
                phone,
            }),
            _ => Err(errors),
        }
    }

    pub fn validate_update(self) -> Result<CustomerPatch, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let patch = CustomerPatch {
            name: optional_string(&mut errors, "name", self.name, 75),
            user_name: optional_string(&mut errors, "user_name", self.user_name, 75),
            password: optional_string(&mut errors, "password", self.password, 50),
            email: optional_string(&mut errors, "email", self.email, 150),
            phone: optional_string(&mut errors, "phone", self.phone, 16),
        };

        if errors.is_empty() { Ok(patch) } else { Err(errors) }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CustomerList {
    #[schema(value_type = Vec<Customer>)]
    pub items: Vec<Customer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_reports_all_missing_required_fields() {
        let errors = CustomerPayload::default().validate_create().unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["name", "password", "user_name"]);
    }

    #[test]
    fn create_accepts_payload_without_optional_fields() {
        let payload = CustomerPayload {
            name: Some("Ada Lovelace".into()),
            user_name: Some("ada".into()),
            password: Some("s3cret".into()),
            ..Default::default()
        };
        let new = payload.validate_create().unwrap();
        assert_eq!(new.name, "Ada Lovelace");
        assert_eq!(new.email, None);
    }

    #[test]
    fn update_keeps_only_supplied_fields() {
        let payload = CustomerPayload {
            phone: Some("555-0100".into()),
            ..Default::default()
        };
        let patch = payload.validate_update().unwrap();
        assert_eq!(patch.phone.as_deref(), Some("555-0100"));
        assert!(patch.name.is_none());
        assert!(patch.password.is_none());
    }

    #[test]
    fn update_still_checks_bounds() {
        let payload = CustomerPayload {
            phone: Some("5".repeat(17)),
            ..Default::default()
        };
        let errors = payload.validate_update().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["phone"]);
    }
}
