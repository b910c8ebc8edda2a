//! User record model for storage and API.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::validation::{
    validate_avatar, validate_email, validate_first_name, validate_last_name,
};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A user as shown in the console.
///
/// The same shape is used for remote records and for local overrides.
/// Timestamps are only present on records created or edited locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserRecord {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Profile image URL
    pub avatar: String,
    #[serde(
        rename = "createdAt",
        alias = "created_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(
        rename = "updatedAt",
        alias = "updated_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

impl UserRecord {
    /// Build a record from submitted form fields.
    pub fn from_fields(id: i64, fields: UserFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            avatar: fields.avatar,
            created_at: None,
            updated_at: None,
        }
    }

    /// Overwrite the editable fields, keeping id and timestamps.
    pub fn apply(&mut self, fields: UserFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.email = fields.email;
        self.avatar = fields.avatar;
    }

    /// Case-insensitive substring match on first name, last name or email.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.first_name.to_lowercase().contains(needle)
            || self.last_name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }
}

/// Editable fields submitted by the create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserFields {
    #[validate(custom(function = "validate_first_name"))]
    pub first_name: String,
    #[validate(custom(function = "validate_last_name"))]
    pub last_name: String,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[validate(custom(function = "validate_avatar"))]
    pub avatar: String,
}

impl From<&UserRecord> for UserFields {
    fn from(record: &UserRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            avatar: record.avatar.clone(),
        }
    }
}

/// One page of the effective user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PageResult {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<UserRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_record_uses_camel_case_timestamps() {
        let record = UserRecord {
            id: 7,
            first_name: "Ada".to_string(),
            last_name: "Byron".to_string(),
            email: "ada@example.com".to_string(),
            avatar: "https://example.com/ada.png".to_string(),
            created_at: Some("2026-01-01T00:00:00.000Z".to_string()),
            updated_at: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["createdAt"], "2026-01-01T00:00:00.000Z");
        assert!(json.get("updatedAt").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_remote_record_without_timestamps_parses() {
        let json = r#"{"id":2,"email":"janet.weaver@reqres.in","first_name":"Janet",
            "last_name":"Weaver","avatar":"https://reqres.in/img/faces/2-image.jpg"}"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 2);
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn test_fields_validation_collects_every_field() {
        let fields = UserFields {
            first_name: "A".to_string(),
            last_name: String::new(),
            email: "bad".to_string(),
            avatar: "http://x/y.png".to_string(),
        };
        let errors = fields.validate().unwrap_err();
        let failed = errors.field_errors();
        assert_eq!(failed.len(), 3);
        assert!(failed.keys().any(|k| k.to_string() == "first_name"));
        assert!(failed.keys().any(|k| k.to_string() == "last_name"));
        assert!(failed.keys().any(|k| k.to_string() == "email"));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let record = UserRecord::from_fields(
            1,
            UserFields {
                first_name: "George".to_string(),
                last_name: "Bluth".to_string(),
                email: "george.bluth@reqres.in".to_string(),
                avatar: "https://reqres.in/img/faces/1-image.jpg".to_string(),
            },
        );
        assert!(record.matches("blu"));
        assert!(record.matches("reqres"));
        assert!(!record.matches("janet"));
    }
}
