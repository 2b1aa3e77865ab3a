use super::{delete_status, find_all, insert};
use crate::mongo::{mongo_error, TuiterDB};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::responses::DeleteStatus;
use tuiter_common::models::{Follow, FOLLOWS};

pub struct FollowDao {
    follows: Collection<Follow>,
}

impl FollowDao {
    pub fn new(db: &TuiterDB) -> Self {
        Self {
            follows: db.collection(FOLLOWS),
        }
    }

    pub async fn find_all_follow_pairs(&self) -> Result<Vec<Follow>, TuiterServerError> {
        find_all(&self.follows, doc! {}).await
    }

    pub async fn find_all_followers_for_user(
        &self,
        uid: ObjectId,
    ) -> Result<Vec<Follow>, TuiterServerError> {
        find_all(&self.follows, doc! { "following": uid }).await
    }

    pub async fn find_all_users_followed_for_user(
        &self,
        uid: ObjectId,
    ) -> Result<Vec<Follow>, TuiterServerError> {
        find_all(&self.follows, doc! { "follower": uid }).await
    }

    /// `uid` starts following `uuid`
    pub async fn user_follows_another_user(
        &self,
        uid: ObjectId,
        uuid: ObjectId,
    ) -> Result<Follow, TuiterServerError> {
        let mut follow = Follow::new(uid, uuid);
        follow.id = Some(insert(&self.follows, &follow).await?);
        tracing::debug!("User {} followed {}", uid, uuid);
        Ok(follow)
    }

    pub async fn user_unfollows_another_user(
        &self,
        uid: ObjectId,
        uuid: ObjectId,
    ) -> Result<DeleteStatus, TuiterServerError> {
        self.delete_pair(doc! { "follower": uid, "following": uuid })
            .await
    }

    /// `uid` drops `uuid` from its followers
    pub async fn user_removes_follower(
        &self,
        uid: ObjectId,
        uuid: ObjectId,
    ) -> Result<DeleteStatus, TuiterServerError> {
        self.delete_pair(doc! { "follower": uuid, "following": uid })
            .await
    }

    async fn delete_pair(&self, filter: Document) -> Result<DeleteStatus, TuiterServerError> {
        let result = self
            .follows
            .delete_one(filter.clone(), None)
            .await
            .map_err(mongo_error)?;
        tracing::debug!("Deleted {} follow(s) matching {}", result.deleted_count, filter);
        Ok(delete_status(result))
    }
}
