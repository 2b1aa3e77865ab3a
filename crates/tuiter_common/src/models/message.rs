use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub message: String,
    pub sender: Option<ObjectId>,
    pub receiver: Option<ObjectId>,
    #[serde(default = "DateTime::now")]
    pub sent_on: DateTime,
}
