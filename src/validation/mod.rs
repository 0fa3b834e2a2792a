use std::fmt;

use crate::domain::NewOrder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

pub fn validate_required(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }

    Ok(())
}

/// Presence checks for the required order fields: email, project type and
/// description. Format is not checked.
pub fn validate_new_order(order: &NewOrder) -> ValidationResult {
    validate_required("email", &order.client_email)?;
    validate_required("project_type", &order.project_type)?;
    validate_required("description", &order.description)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_order() -> NewOrder {
        NewOrder {
            project_type: "website".to_string(),
            client_email: "client@example.com".to_string(),
            description: "Landing page".to_string(),
            budget: None,
            timeline: None,
        }
    }

    #[test]
    fn validates_required_field() {
        assert!(validate_required("field", "value").is_ok());
        assert!(validate_required("field", "   ").is_err());
        assert!(validate_required("field", "").is_err());
    }

    #[test]
    fn accepts_complete_order_without_optionals() {
        assert!(validate_new_order(&complete_order()).is_ok());
    }

    #[test]
    fn rejects_missing_email() {
        let order = NewOrder {
            client_email: String::new(),
            ..complete_order()
        };
        let err = validate_new_order(&order).unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn rejects_missing_project_type() {
        let order = NewOrder {
            project_type: " ".to_string(),
            ..complete_order()
        };
        assert_eq!(validate_new_order(&order).unwrap_err().field, "project_type");
    }

    #[test]
    fn rejects_missing_description() {
        let order = NewOrder {
            description: String::new(),
            ..complete_order()
        };
        assert_eq!(validate_new_order(&order).unwrap_err().field, "description");
    }

    #[test]
    fn email_format_is_not_checked() {
        let order = NewOrder {
            client_email: "not-an-email".to_string(),
            ..complete_order()
        };
        assert!(validate_new_order(&order).is_ok());
    }

    #[test]
    fn display_includes_field_name() {
        let err = ValidationError::new("email", "must not be empty");
        assert_eq!(err.to_string(), "email: must not be empty");
    }
}
