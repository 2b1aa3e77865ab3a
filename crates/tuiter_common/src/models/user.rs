use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    #[default]
    Personal,
    Academic,
    Professional,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaritalStatus {
    Married,
    #[default]
    Single,
    Widowed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

// Passwords are stored as submitted
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub profile_photo: Option<String>,
    pub header_image: Option<String>,
    #[serde(default)]
    pub account_type: AccountType,
    #[serde(default)]
    pub marital_status: MaritalStatus,
    pub biography: Option<String>,
    pub date_of_birth: Option<DateTime>,
    #[serde(default = "DateTime::now")]
    pub joined: DateTime,
    pub location: Option<Location>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn enums_use_uppercase_names() {
        assert_eq!(
            serde_json::to_value(AccountType::Professional).unwrap(),
            serde_json::json!("PROFESSIONAL")
        );
        let status: MaritalStatus = serde_json::from_value(serde_json::json!("WIDOWED")).unwrap();
        assert_eq!(status, MaritalStatus::Widowed);
    }

    #[test]
    fn sparse_document_fills_defaults() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "username": "alice",
            "password": "alice123",
            "email": "alice@wonderland.com",
        };
        let user: User = bson::from_document(stored).unwrap();
        assert_eq!(user.account_type, AccountType::Personal);
        assert_eq!(user.marital_status, MaritalStatus::Single);
        assert!(user.first_name.is_none());
        assert!(user.location.is_none());
    }

    #[test]
    fn stored_keys_are_camel_case() {
        let user = User {
            id: None,
            username: "bob".to_string(),
            password: "bob123".to_string(),
            first_name: Some("Bob".to_string()),
            last_name: None,
            email: "bob@example.com".to_string(),
            profile_photo: None,
            header_image: None,
            account_type: AccountType::Academic,
            marital_status: MaritalStatus::Married,
            biography: None,
            date_of_birth: None,
            joined: DateTime::now(),
            location: Some(Location {
                latitude: 42.34,
                longitude: -71.09,
            }),
        };
        let document = bson::to_document(&user).unwrap();
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("firstName").unwrap(), "Bob");
        assert_eq!(document.get_str("accountType").unwrap(), "ACADEMIC");
        assert_eq!(document.get_str("maritalStatus").unwrap(), "MARRIED");
        assert_eq!(
            document.get_document("location").unwrap().get_f64("latitude").unwrap(),
            42.34
        );
    }
}
