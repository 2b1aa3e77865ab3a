use super::{aggregate, delete_status, insert, match_and_populate, populate, populate_with};
use crate::mongo::{mongo_error, TuiterDB};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::responses::DeleteStatus;
use tuiter_common::models::{Dislike, Tuit, User, DISLIKES, TUITS, USERS};

pub struct DislikeDao {
    dislikes: Collection<Dislike>,
}

/// Dislikes of a user with each tuit and the tuit's author populated
fn disliked_tuits_pipeline(uid: ObjectId) -> Vec<Document> {
    match_and_populate(
        doc! { "dislikedBy": uid },
        populate_with("tuit", TUITS, populate("postedBy", USERS)),
    )
}

impl DislikeDao {
    pub fn new(db: &TuiterDB) -> Self {
        Self {
            dislikes: db.collection(DISLIKES),
        }
    }

    pub async fn find_all_users_that_disliked_tuit(
        &self,
        tid: ObjectId,
    ) -> Result<Vec<Dislike<ObjectId, User>>, TuiterServerError> {
        let pipeline = match_and_populate(doc! { "tuit": tid }, populate("dislikedBy", USERS));
        aggregate(&self.dislikes, pipeline).await
    }

    pub async fn find_all_tuits_disliked_by_user(
        &self,
        uid: ObjectId,
    ) -> Result<Vec<Dislike<Tuit<User>>>, TuiterServerError> {
        aggregate(&self.dislikes, disliked_tuits_pipeline(uid)).await
    }

    pub async fn find_user_dislikes_tuit(
        &self,
        uid: ObjectId,
        tid: ObjectId,
    ) -> Result<Option<Dislike>, TuiterServerError> {
        self.dislikes
            .find_one(doc! { "tuit": tid, "dislikedBy": uid }, None)
            .await
            .map_err(mongo_error)
    }

    pub async fn count_how_many_disliked_tuit(&self, tid: ObjectId) -> Result<u64, TuiterServerError> {
        self.dislikes
            .count_documents(doc! { "tuit": tid }, None)
            .await
            .map_err(mongo_error)
    }

    pub async fn user_dislikes_tuit(
        &self,
        uid: ObjectId,
        tid: ObjectId,
    ) -> Result<Dislike, TuiterServerError> {
        let mut dislike = Dislike::new(uid, tid);
        dislike.id = Some(insert(&self.dislikes, &dislike).await?);
        tracing::debug!("User {} disliked tuit {}", uid, tid);
        Ok(dislike)
    }

    pub async fn user_undislikes_tuit(
        &self,
        uid: ObjectId,
        tid: ObjectId,
    ) -> Result<DeleteStatus, TuiterServerError> {
        let result = self
            .dislikes
            .delete_one(doc! { "tuit": tid, "dislikedBy": uid }, None)
            .await
            .map_err(mongo_error)?;
        tracing::debug!(
            "User {} undisliked tuit {} ({} removed)",
            uid,
            tid,
            result.deleted_count
        );
        Ok(delete_status(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disliked_tuits_populate_author_inside_tuit_lookup() {
        let uid = ObjectId::new();
        let pipeline = disliked_tuits_pipeline(uid);
        // $match, $lookup tuit, $unwind tuit
        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline[0], doc! { "$match": { "dislikedBy": uid } });
        let lookup = pipeline[1].get_document("$lookup").unwrap();
        assert_eq!(lookup.get_str("from").unwrap(), TUITS);
        let inner = lookup.get_array("pipeline").unwrap();
        let author_lookup = inner[1].as_document().unwrap().get_document("$lookup").unwrap();
        assert_eq!(author_lookup.get_str("from").unwrap(), USERS);
        assert_eq!(author_lookup.get_str("as").unwrap(), "postedBy");
    }
}
