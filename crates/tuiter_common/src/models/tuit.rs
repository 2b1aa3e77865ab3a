use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// A post. `postedBy` holds the author's id, or the author when populated as `Tuit<User>`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tuit<U = ObjectId> {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub tuit: String,
    #[serde(default = "DateTime::now")]
    pub posted_on: DateTime,
    pub posted_by: Option<U>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use bson::doc;

    #[test]
    fn reads_populated_author() {
        let author = ObjectId::new();
        let stored = doc! {
            "_id": ObjectId::new(),
            "tuit": "hello world",
            "postedOn": DateTime::from_millis(1_000),
            "postedBy": {
                "_id": author,
                "username": "alice",
                "password": "alice123",
                "email": "alice@wonderland.com",
            },
        };
        let tuit: Tuit<User> = bson::from_document(stored).unwrap();
        let posted_by = tuit.posted_by.unwrap();
        assert_eq!(posted_by.id, Some(author));
        assert_eq!(posted_by.username, "alice");
        assert_eq!(tuit.posted_on, DateTime::from_millis(1_000));
    }

    #[test]
    fn missing_author_reads_as_none() {
        let stored = doc! { "_id": ObjectId::new(), "tuit": "orphan" };
        let tuit: Tuit<User> = bson::from_document(stored).unwrap();
        assert!(tuit.posted_by.is_none());
    }
}
