use super::{aggregate, delete_status, insert, match_and_populate, populate};
use crate::mongo::{mongo_error, TuiterDB};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::responses::DeleteStatus;
use tuiter_common::models::{Like, Tuit, User, LIKES, TUITS, USERS};

pub struct LikeDao {
    likes: Collection<Like>,
}

impl LikeDao {
    pub fn new(db: &TuiterDB) -> Self {
        Self {
            likes: db.collection(LIKES),
        }
    }

    pub async fn find_all_users_that_liked_tuit(
        &self,
        tid: ObjectId,
    ) -> Result<Vec<Like<ObjectId, User>>, TuiterServerError> {
        let pipeline = match_and_populate(doc! { "tuit": tid }, populate("likedBy", USERS));
        aggregate(&self.likes, pipeline).await
    }

    pub async fn find_all_tuits_liked_by_user(
        &self,
        uid: ObjectId,
    ) -> Result<Vec<Like<Tuit>>, TuiterServerError> {
        let pipeline = match_and_populate(doc! { "likedBy": uid }, populate("tuit", TUITS));
        aggregate(&self.likes, pipeline).await
    }

    pub async fn user_likes_tuit(
        &self,
        uid: ObjectId,
        tid: ObjectId,
    ) -> Result<Like, TuiterServerError> {
        let mut like = Like::new(uid, tid);
        like.id = Some(insert(&self.likes, &like).await?);
        tracing::debug!("User {} liked tuit {}", uid, tid);
        Ok(like)
    }

    pub async fn user_unlikes_tuit(
        &self,
        uid: ObjectId,
        tid: ObjectId,
    ) -> Result<DeleteStatus, TuiterServerError> {
        let result = self
            .likes
            .delete_one(doc! { "tuit": tid, "likedBy": uid }, None)
            .await
            .map_err(mongo_error)?;
        tracing::debug!("User {} unliked tuit {} ({} removed)", uid, tid, result.deleted_count);
        Ok(delete_status(result))
    }
}
