use std::collections::BTreeMap;

use serde::Serialize;

/// Field-to-messages map collected across an entire payload, so a response
/// can report every failing field at once instead of only the first.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// Required string field: missing or over-length values record an error and
/// yield `None`.
pub fn required_string(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    match value {
        None => {
            errors.push(field, "Missing data for required field.");
            None
        }
        Some(value) => bounded_string(errors, field, value, max_len),
    }
}

/// Optional string field: absent is fine, present values are length-checked.
pub fn optional_string(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    value.and_then(|value| bounded_string(errors, field, value, max_len))
}

pub fn required_number(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<f64>,
) -> Option<f64> {
    if value.is_none() {
        errors.push(field, "Missing data for required field.");
    }
    value
}

pub fn non_negative(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<f64>,
) -> Option<f64> {
    match value {
        Some(value) if value < 0.0 => {
            errors.push(field, "Must be greater than or equal to 0.");
            None
        }
        other => other,
    }
}

fn bounded_string(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: String,
    max_len: usize,
) -> Option<String> {
    if value.chars().count() > max_len {
        errors.push(field, format!("Longer than maximum length {max_len}."));
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_failing_field() {
        let mut errors = ValidationErrors::new();
        required_string(&mut errors, "name", None, 75);
        required_string(&mut errors, "user_name", None, 75);
        optional_string(&mut errors, "phone", Some("x".repeat(17)), 16);

        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["name", "phone", "user_name"]);
    }

    #[test]
    fn bounded_string_accepts_values_at_the_limit() {
        let mut errors = ValidationErrors::new();
        let value = required_string(&mut errors, "password", Some("p".repeat(50)), 50);
        assert!(errors.is_empty());
        assert_eq!(value, Some("p".repeat(50)));
    }

    #[test]
    fn negative_number_is_rejected() {
        let mut errors = ValidationErrors::new();
        let price = non_negative(&mut errors, "price", Some(-0.01));
        assert!(price.is_none());
        assert!(!errors.is_empty());
    }

    #[test]
    fn serializes_as_plain_field_map() {
        let mut errors = ValidationErrors::new();
        errors.push("price", "Missing data for required field.");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "price": ["Missing data for required field."] })
        );
    }
}
