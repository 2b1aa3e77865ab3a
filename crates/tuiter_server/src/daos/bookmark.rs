use super::{aggregate, delete_status, find_all, insert, match_and_populate, populate};
use crate::mongo::{mongo_error, TuiterDB};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::responses::DeleteStatus;
use tuiter_common::models::{Bookmark, Tuit, BOOKMARKS, TUITS};

pub struct BookmarkDao {
    bookmarks: Collection<Bookmark>,
}

impl BookmarkDao {
    pub fn new(db: &TuiterDB) -> Self {
        Self {
            bookmarks: db.collection(BOOKMARKS),
        }
    }

    pub async fn find_all_bookmarked_tuits(&self) -> Result<Vec<Bookmark>, TuiterServerError> {
        find_all(&self.bookmarks, doc! {}).await
    }

    pub async fn find_all_tuits_bookmarked_by_user(
        &self,
        uid: ObjectId,
    ) -> Result<Vec<Bookmark<Tuit>>, TuiterServerError> {
        let pipeline = match_and_populate(doc! { "user": uid }, populate("tuit", TUITS));
        aggregate(&self.bookmarks, pipeline).await
    }

    pub async fn user_bookmarks_tuit(
        &self,
        uid: ObjectId,
        tid: ObjectId,
    ) -> Result<Bookmark, TuiterServerError> {
        let mut bookmark = Bookmark::new(uid, tid);
        bookmark.id = Some(insert(&self.bookmarks, &bookmark).await?);
        tracing::debug!("User {} bookmarked tuit {}", uid, tid);
        Ok(bookmark)
    }

    pub async fn user_unbookmarks_tuit(
        &self,
        uid: ObjectId,
        tid: ObjectId,
    ) -> Result<DeleteStatus, TuiterServerError> {
        let result = self
            .bookmarks
            .delete_one(doc! { "user": uid, "tuit": tid }, None)
            .await
            .map_err(mongo_error)?;
        tracing::debug!(
            "User {} unbookmarked tuit {} ({} removed)",
            uid,
            tid,
            result.deleted_count
        );
        Ok(delete_status(result))
    }

    pub async fn user_unbookmarks_all_tuits(
        &self,
        uid: ObjectId,
    ) -> Result<DeleteStatus, TuiterServerError> {
        let result = self
            .bookmarks
            .delete_many(doc! { "user": uid }, None)
            .await
            .map_err(mongo_error)?;
        tracing::debug!("Removed all {} bookmarks of user {}", result.deleted_count, uid);
        Ok(delete_status(result))
    }
}
