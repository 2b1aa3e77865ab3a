use crate::errors::TuiterServerError;
use crate::models::{AccountType, Location, MaritalStatus, Message, Tuit, User};
use crate::utils::{parse_optional_date, parse_optional_object_id};
use bson::{oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

/// Adds `key` to a `$set` document only when the body supplied a value for it
fn set_if_present<T: Serialize>(
    fields: &mut Document,
    key: &str,
    value: &Option<T>,
) -> Result<(), TuiterServerError> {
    if let Some(value) = value {
        fields.insert(key, bson::to_bson(value)?);
    }
    Ok(())
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_photo: Option<String>,
    pub header_image: Option<String>,
    pub account_type: Option<AccountType>,
    pub marital_status: Option<MaritalStatus>,
    pub biography: Option<String>,
    pub date_of_birth: Option<String>,
    pub location: Option<Location>,
}

impl CreateUserRequest {
    pub fn into_user(self) -> Result<User, TuiterServerError> {
        let date_of_birth = parse_optional_date("dateOfBirth", &self.date_of_birth)?;
        Ok(User {
            id: None,
            username: self.username,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            profile_photo: self.profile_photo,
            header_image: self.header_image,
            account_type: self.account_type.unwrap_or_default(),
            marital_status: self.marital_status.unwrap_or_default(),
            biography: self.biography,
            date_of_birth,
            joined: DateTime::now(),
            location: self.location,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_photo: Option<String>,
    pub header_image: Option<String>,
    pub account_type: Option<AccountType>,
    pub marital_status: Option<MaritalStatus>,
    pub biography: Option<String>,
    pub date_of_birth: Option<String>,
    pub joined: Option<String>,
    pub location: Option<Location>,
}

impl UpdateUserRequest {
    /// Fields for a `$set`, containing exactly what the body supplied
    pub fn to_update(&self) -> Result<Document, TuiterServerError> {
        let mut fields = Document::new();
        set_if_present(&mut fields, "username", &self.username)?;
        set_if_present(&mut fields, "password", &self.password)?;
        set_if_present(&mut fields, "email", &self.email)?;
        set_if_present(&mut fields, "firstName", &self.first_name)?;
        set_if_present(&mut fields, "lastName", &self.last_name)?;
        set_if_present(&mut fields, "profilePhoto", &self.profile_photo)?;
        set_if_present(&mut fields, "headerImage", &self.header_image)?;
        set_if_present(&mut fields, "accountType", &self.account_type)?;
        set_if_present(&mut fields, "maritalStatus", &self.marital_status)?;
        set_if_present(&mut fields, "biography", &self.biography)?;
        let date_of_birth = parse_optional_date("dateOfBirth", &self.date_of_birth)?;
        set_if_present(&mut fields, "dateOfBirth", &date_of_birth)?;
        let joined = parse_optional_date("joined", &self.joined)?;
        set_if_present(&mut fields, "joined", &joined)?;
        set_if_present(&mut fields, "location", &self.location)?;
        Ok(fields)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateTuitRequest {
    pub tuit: String,
    pub posted_on: Option<String>,
}

impl CreateTuitRequest {
    pub fn into_tuit(self, posted_by: ObjectId) -> Result<Tuit, TuiterServerError> {
        let posted_on = parse_optional_date("postedOn", &self.posted_on)?;
        Ok(Tuit {
            id: None,
            tuit: self.tuit,
            posted_on: posted_on.unwrap_or_else(DateTime::now),
            posted_by: Some(posted_by),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTuitRequest {
    pub tuit: Option<String>,
    pub posted_on: Option<String>,
    pub posted_by: Option<String>,
}

impl UpdateTuitRequest {
    pub fn to_update(&self) -> Result<Document, TuiterServerError> {
        let mut fields = Document::new();
        set_if_present(&mut fields, "tuit", &self.tuit)?;
        let posted_on = parse_optional_date("postedOn", &self.posted_on)?;
        set_if_present(&mut fields, "postedOn", &posted_on)?;
        let posted_by = parse_optional_object_id(&self.posted_by)?;
        set_if_present(&mut fields, "postedBy", &posted_by)?;
        Ok(fields)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub message: String,
    pub sent_on: Option<String>,
}

impl SendMessageRequest {
    pub fn into_message(
        self,
        sender: ObjectId,
        receiver: ObjectId,
    ) -> Result<Message, TuiterServerError> {
        let sent_on = parse_optional_date("sentOn", &self.sent_on)?;
        Ok(Message {
            id: None,
            message: self.message,
            sender: Some(sender),
            receiver: Some(receiver),
            sent_on: sent_on.unwrap_or_else(DateTime::now),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct EditMessageRequest {
    pub message: Option<String>,
    pub sent_on: Option<String>,
    pub sender: Option<String>,
    pub receiver: Option<String>,
}

impl EditMessageRequest {
    pub fn to_update(&self) -> Result<Document, TuiterServerError> {
        let mut fields = Document::new();
        set_if_present(&mut fields, "message", &self.message)?;
        let sent_on = parse_optional_date("sentOn", &self.sent_on)?;
        set_if_present(&mut fields, "sentOn", &sent_on)?;
        let sender = parse_optional_object_id(&self.sender)?;
        set_if_present(&mut fields, "sender", &sender)?;
        let receiver = parse_optional_object_id(&self.receiver)?;
        set_if_present(&mut fields, "receiver", &receiver)?;
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use serde_json::json;

    #[test]
    fn create_user_applies_defaults() {
        let request: CreateUserRequest = serde_json::from_value(json!({
            "username": "alice",
            "password": "alice123",
            "email": "alice@wonderland.com",
            "firstName": "Alice",
            "dateOfBirth": "1990-05-01T00:00:00Z",
        }))
        .unwrap();
        let user = request.into_user().unwrap();
        assert!(user.id.is_none());
        assert_eq!(user.first_name.as_deref(), Some("Alice"));
        assert_eq!(user.account_type, AccountType::Personal);
        assert_eq!(user.marital_status, MaritalStatus::Single);
        assert!(user.date_of_birth.is_some());
    }

    #[test]
    fn create_user_rejects_bad_birthday() {
        let request: CreateUserRequest = serde_json::from_value(json!({
            "username": "alice",
            "password": "alice123",
            "email": "alice@wonderland.com",
            "dateOfBirth": "first of may",
        }))
        .unwrap();
        assert!(matches!(
            request.into_user(),
            Err(TuiterServerError::InvalidDate(_, _))
        ));
    }

    #[test]
    fn user_update_only_sets_supplied_fields() {
        let request: UpdateUserRequest = serde_json::from_value(json!({
            "biography": "rustacean",
            "accountType": "ACADEMIC",
        }))
        .unwrap();
        assert_eq!(
            request.to_update().unwrap(),
            doc! { "biography": "rustacean", "accountType": "ACADEMIC" }
        );
        assert!(UpdateUserRequest::default().to_update().unwrap().is_empty());
    }

    #[test]
    fn tuit_takes_author_from_path() {
        let uid = ObjectId::new();
        let request = CreateTuitRequest {
            tuit: "In 2021, our @NASAPersevere rover landed on Mars".to_string(),
            posted_on: Some("2021-02-18T20:55:00Z".to_string()),
        };
        let tuit = request.into_tuit(uid).unwrap();
        assert_eq!(tuit.posted_by, Some(uid));
        assert_eq!(tuit.posted_on, DateTime::parse_rfc3339_str("2021-02-18T20:55:00Z").unwrap());
    }

    #[test]
    fn tuit_update_converts_dates() {
        let request = UpdateTuitRequest {
            posted_on: Some("2022-01-01T00:00:00Z".to_string()),
            ..Default::default()
        };
        let fields = request.to_update().unwrap();
        assert_eq!(fields.len(), 1);
        assert!(fields.get_datetime("postedOn").is_ok());
    }

    #[test]
    fn message_takes_sender_and_receiver_from_path() {
        let (uid, uuid) = (ObjectId::new(), ObjectId::new());
        let request: SendMessageRequest =
            serde_json::from_value(json!({ "message": "hi there" })).unwrap();
        let message = request.into_message(uid, uuid).unwrap();
        assert_eq!(message.sender, Some(uid));
        assert_eq!(message.receiver, Some(uuid));
        assert_eq!(message.message, "hi there");
    }

    #[test]
    fn message_edit_with_empty_body_sets_nothing() {
        let request: EditMessageRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.to_update().unwrap().is_empty());
    }

    #[test]
    fn updates_carry_reference_and_join_fields() {
        let (uid, uuid) = (ObjectId::new(), ObjectId::new());

        let request: UpdateTuitRequest =
            serde_json::from_value(json!({ "postedBy": uid.to_hex() })).unwrap();
        assert_eq!(request.to_update().unwrap(), doc! { "postedBy": uid });

        let request: EditMessageRequest = serde_json::from_value(json!({
            "sender": uid.to_hex(),
            "receiver": uuid.to_hex(),
        }))
        .unwrap();
        assert_eq!(
            request.to_update().unwrap(),
            doc! { "sender": uid, "receiver": uuid }
        );

        let request: UpdateUserRequest =
            serde_json::from_value(json!({ "joined": "2020-03-01T12:00:00Z" })).unwrap();
        let fields = request.to_update().unwrap();
        assert_eq!(
            fields.get_datetime("joined").unwrap(),
            &DateTime::parse_rfc3339_str("2020-03-01T12:00:00Z").unwrap()
        );
    }

    #[test]
    fn update_rejects_malformed_reference() {
        let request: UpdateTuitRequest =
            serde_json::from_value(json!({ "postedBy": "alice" })).unwrap();
        assert_eq!(
            request.to_update().unwrap_err(),
            TuiterServerError::InvalidObjectId("alice".to_string())
        );
    }
}
