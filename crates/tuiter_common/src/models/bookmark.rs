use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Bookmark<T = ObjectId> {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user: Option<ObjectId>,
    pub tuit: Option<T>,
}

impl Bookmark {
    pub fn new(uid: ObjectId, tid: ObjectId) -> Self {
        Bookmark {
            id: None,
            user: Some(uid),
            tuit: Some(tid),
        }
    }
}
