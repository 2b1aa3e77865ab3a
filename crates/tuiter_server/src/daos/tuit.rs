use super::{aggregate, delete_status, find_all, insert, match_and_populate, populate, set_fields};
use crate::mongo::{mongo_error, TuiterDB};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::responses::{DeleteStatus, UpdateStatus};
use tuiter_common::models::{Tuit, User, TUITS, USERS};

pub struct TuitDao {
    tuits: Collection<Tuit>,
}

impl TuitDao {
    pub fn new(db: &TuiterDB) -> Self {
        Self {
            tuits: db.collection(TUITS),
        }
    }

    pub async fn find_all_tuits(&self) -> Result<Vec<Tuit>, TuiterServerError> {
        find_all(&self.tuits, doc! {}).await
    }

    pub async fn find_tuits_by_user(&self, uid: ObjectId) -> Result<Vec<Tuit>, TuiterServerError> {
        find_all(&self.tuits, doc! { "postedBy": uid }).await
    }

    /// Looks up one tuit with its author populated
    pub async fn find_tuit_by_id(
        &self,
        tid: ObjectId,
    ) -> Result<Option<Tuit<User>>, TuiterServerError> {
        let pipeline = match_and_populate(doc! { "_id": tid }, populate("postedBy", USERS));
        let tuits: Vec<Tuit<User>> = aggregate(&self.tuits, pipeline).await?;
        Ok(tuits.into_iter().next())
    }

    pub async fn create_tuit(&self, mut tuit: Tuit) -> Result<Tuit, TuiterServerError> {
        let oid = insert(&self.tuits, &tuit).await?;
        tracing::debug!("Created tuit {} by {:?}", oid, tuit.posted_by);
        tuit.id = Some(oid);
        Ok(tuit)
    }

    pub async fn update_tuit(
        &self,
        tid: ObjectId,
        fields: Document,
    ) -> Result<UpdateStatus, TuiterServerError> {
        let status = set_fields(&self.tuits, doc! { "_id": tid }, fields).await?;
        tracing::debug!("Updated tuit {}: {:?}", tid, status);
        Ok(status)
    }

    pub async fn delete_tuit(&self, tid: ObjectId) -> Result<DeleteStatus, TuiterServerError> {
        let result = self
            .tuits
            .delete_one(doc! { "_id": tid }, None)
            .await
            .map_err(mongo_error)?;
        tracing::debug!("Deleted {} tuit(s) with id {}", result.deleted_count, tid);
        Ok(delete_status(result))
    }
}
