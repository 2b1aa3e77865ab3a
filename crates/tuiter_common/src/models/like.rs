use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

// Reactions are join documents; (tuit, user) pairs may repeat.

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Like<T = ObjectId, U = ObjectId> {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub tuit: Option<T>,
    pub liked_by: Option<U>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dislike<T = ObjectId, U = ObjectId> {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub tuit: Option<T>,
    pub disliked_by: Option<U>,
}

impl Like {
    pub fn new(uid: ObjectId, tid: ObjectId) -> Self {
        Like {
            id: None,
            tuit: Some(tid),
            liked_by: Some(uid),
        }
    }
}

impl Dislike {
    pub fn new(uid: ObjectId, tid: ObjectId) -> Self {
        Dislike {
            id: None,
            tuit: Some(tid),
            disliked_by: Some(uid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Tuit, User};
    use bson::doc;

    #[test]
    fn like_document_shape() {
        let (uid, tid) = (ObjectId::new(), ObjectId::new());
        let document = bson::to_document(&Like::new(uid, tid)).unwrap();
        assert_eq!(document, doc! { "tuit": tid, "likedBy": uid });
    }

    #[test]
    fn dislike_with_nested_tuit_author() {
        let uid = ObjectId::new();
        let stored = doc! {
            "_id": ObjectId::new(),
            "dislikedBy": uid,
            "tuit": {
                "_id": ObjectId::new(),
                "tuit": "unpopular opinion",
                "postedBy": {
                    "username": "carol",
                    "password": "carol123",
                    "email": "carol@example.com",
                },
            },
        };
        let dislike: Dislike<Tuit<User>> = bson::from_document(stored).unwrap();
        assert_eq!(dislike.disliked_by, Some(uid));
        let tuit = dislike.tuit.unwrap();
        assert_eq!(tuit.tuit, "unpopular opinion");
        assert_eq!(tuit.posted_by.unwrap().username, "carol");
    }
}
