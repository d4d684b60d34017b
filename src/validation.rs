//! Request payload validation.
//!
//! Payload types derive [`validator::Validate`] and keep their fields as
//! `Option` so that a missing field is reported per field instead of failing
//! deserialization as a whole.

use validator::{Validate, ValidationErrors};

use crate::domain::errors::{DomainError, FieldErrors};

/// Run the payload's validation rules, collecting every failing field.
pub fn validate<T: Validate>(payload: &T) -> Result<(), DomainError> {
    payload
        .validate()
        .map_err(|errors| DomainError::InvalidInput(field_errors(&errors)))
}

/// Unwrap a field that [`validate`] has already checked with `required`.
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::invalid_field(field, "This field is required"))
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("Failed the '{}' check", e.code),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use validator::Validate;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(required(message = "This field is required"), length(min = 1))]
        name: Option<String>,
        #[validate(range(min = 0.0, message = "Must not be negative"))]
        price: Option<f64>,
    }

    #[test]
    fn missing_and_invalid_fields_are_listed_separately() {
        let payload: Payload = serde_json::from_str(r#"{"price": -1.0}"#).unwrap();

        let DomainError::InvalidInput(fields) = validate(&payload).unwrap_err() else {
            panic!("expected InvalidInput");
        };

        assert_eq!(fields["name"], vec!["This field is required".to_string()]);
        assert_eq!(fields["price"], vec!["Must not be negative".to_string()]);
    }

    #[test]
    fn message_falls_back_to_rule_code() {
        let payload: Payload = serde_json::from_str(r#"{"name": ""}"#).unwrap();

        let DomainError::InvalidInput(fields) = validate(&payload).unwrap_err() else {
            panic!("expected InvalidInput");
        };

        assert_eq!(fields["name"], vec!["Failed the 'length' check".to_string()]);
    }

    #[test]
    fn valid_payload_passes() {
        let payload: Payload = serde_json::from_str(r#"{"name": "Mug"}"#).unwrap();
        assert!(validate(&payload).is_ok());
        assert_eq!(required(payload.name, "name").unwrap(), "Mug");
    }

    #[test]
    fn required_reports_the_field() {
        let DomainError::InvalidInput(fields) = required::<i32>(None, "customer_id").unwrap_err()
        else {
            panic!("expected InvalidInput");
        };
        assert!(fields.contains_key("customer_id"));
    }
}
