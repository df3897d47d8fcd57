use serde::{Deserialize, Serialize};
use validator::Validate;

use bh_core::domain::entities::author::Role;
use bh_core::services::author::{AuthorUpdate, NewAuthor};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    /// Login name, letters, digits, `_`, `.` and `-`
    #[validate(length(min = 3, max = 32))]
    pub user_name: String,

    #[validate(length(min = 1, max = 72))]
    pub password: String,
}

impl From<RegisterRequest> for NewAuthor {
    fn from(request: RegisterRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            user_name: request.user_name,
            password: request.password,
        }
    }
}

/// Partial author update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAuthorRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[validate(length(min = 3, max = 32))]
    pub user_name: Option<String>,

    #[validate(length(min = 1, max = 72))]
    pub password: Option<String>,

    /// Only honoured for administrators
    pub role: Option<Role>,
}

impl From<UpdateAuthorRequest> for AuthorUpdate {
    fn from(request: UpdateAuthorRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            user_name: request.user_name,
            password: request.password,
            role: request.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let request = RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            user_name: "ada".to_string(),
            password: "engine".to_string(),
        };
        assert!(request.validate().is_ok());

        let invalid = RegisterRequest {
            user_name: "a".to_string(),
            password: String::new(),
            ..request
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("user_name"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_update_request_skips_absent_fields() {
        assert!(UpdateAuthorRequest::default().validate().is_ok());

        let request: UpdateAuthorRequest =
            serde_json::from_str(r#"{"role":"Admin","first_name":""}"#).unwrap();
        assert_eq!(request.role, Some(Role::Admin));
        assert!(request.validate().is_err());
    }
}
