//! Validated form inputs.
//!
//! Validation always runs before any persistence operation; a failing form
//! is re-rendered with per-field messages and never reaches the database.
//! The structs deserialize straight from `application/x-www-form-urlencoded`
//! bodies, so every field is a plain `String` and requiredness is expressed
//! as a minimum length of one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct LoginForm {
    #[validate(
        length(min = 1, message = "This field is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "This field is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct SignUpForm {
    #[validate(length(min = 1, message = "This field is required"))]
    pub full_name: String,
    #[validate(
        length(min = 1, message = "This field is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "This field is required"))]
    pub password: String,
    #[validate(
        length(min = 1, message = "This field is required"),
        must_match(other = "password", message = "Passwords must match")
    )]
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct EditPetForm {
    #[validate(length(min = 1, message = "This field is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "This field is required"))]
    pub age: String,
    #[validate(length(min = 1, message = "This field is required"))]
    pub bio: String,
}

/// Flatten [`ValidationErrors`] into one message per field for template
/// rendering.
pub fn error_messages(errors: &ValidationErrors) -> HashMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "Invalid value".to_string());
            (field.to_string(), message)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_rejects_password_mismatch() {
        let form = SignUpForm {
            full_name: "A".into(),
            email: "a@a.com".into(),
            password: "x".into(),
            confirm_password: "y".into(),
        };
        let errors = form.validate().unwrap_err();
        let messages = error_messages(&errors);
        assert_eq!(
            messages.get("confirm_password").map(String::as_str),
            Some("Passwords must match")
        );
    }

    #[test]
    fn signup_accepts_matching_passwords() {
        let form = SignUpForm {
            full_name: "A".into(),
            email: "a@a.com".into(),
            password: "x".into(),
            confirm_password: "x".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn login_requires_well_formed_email() {
        let form = LoginForm {
            email: "not-an-email".into(),
            password: "x".into(),
        };
        let errors = form.validate().unwrap_err();
        assert!(error_messages(&errors).contains_key("email"));
    }

    #[test]
    fn empty_fields_are_required() {
        let form = EditPetForm::default();
        let messages = error_messages(&form.validate().unwrap_err());
        assert_eq!(messages.len(), 3);
        assert!(messages.values().all(|m| m == "This field is required"));
    }
}
