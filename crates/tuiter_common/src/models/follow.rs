use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// `follower` follows `following`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Follow {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub follower: Option<ObjectId>,
    pub following: Option<ObjectId>,
}

impl Follow {
    pub fn new(follower: ObjectId, following: ObjectId) -> Self {
        Follow {
            id: None,
            follower: Some(follower),
            following: Some(following),
        }
    }
}
