use crate::mongo::mongo_error;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Document};
use mongodb::results::{DeleteResult, UpdateResult};
use mongodb::Collection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::responses::{DeleteStatus, UpdateStatus};

mod bookmark;
mod dislike;
mod follow;
mod like;
mod message;
mod tuit;
mod user;

pub use bookmark::BookmarkDao;
pub use dislike::DislikeDao;
pub use follow::FollowDao;
pub use like::LikeDao;
pub use message::MessageDao;
pub use tuit::TuitDao;
pub use user::UserDao;

/**
 * Builds the pipeline stages that replace a reference field with the document it points to
 *
 * @param local_field - the field holding the referenced ObjectId, overwritten with the document
 * @param from - the collection the reference points into
 * @param inner - extra stages run on the referenced document (used to populate nested references)
 * @returns - a $lookup stage and an $unwind stage that keeps documents with dangling references
 */
pub fn populate_with(local_field: &str, from: &str, inner: Vec<Document>) -> Vec<Document> {
    let mut pipeline = vec![doc! { "$match": { "$expr": { "$eq": ["$_id", "$$refId"] } } }];
    pipeline.extend(inner);
    vec![
        doc! {
            "$lookup": {
                "from": from,
                "let": { "refId": format!("${}", local_field) },
                "pipeline": pipeline,
                "as": local_field,
            }
        },
        doc! {
            "$unwind": {
                "path": format!("${}", local_field),
                "preserveNullAndEmptyArrays": true,
            }
        },
    ]
}

pub fn populate(local_field: &str, from: &str) -> Vec<Document> {
    populate_with(local_field, from, vec![])
}

/// A $match stage followed by the given populate stages
pub fn match_and_populate(filter: Document, stages: Vec<Document>) -> Vec<Document> {
    let mut pipeline = vec![doc! { "$match": filter }];
    pipeline.extend(stages);
    pipeline
}

pub async fn find_all<T>(
    collection: &Collection<T>,
    filter: Document,
) -> Result<Vec<T>, TuiterServerError>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    collection
        .find(filter, None)
        .await
        .map_err(mongo_error)?
        .try_collect()
        .await
        .map_err(mongo_error)
}

/// Runs an aggregation and deserializes each resulting document as `R`
pub async fn aggregate<T, R>(
    collection: &Collection<T>,
    pipeline: Vec<Document>,
) -> Result<Vec<R>, TuiterServerError>
where
    T: Send + Sync,
    R: DeserializeOwned,
{
    let documents: Vec<Document> = collection
        .aggregate(pipeline, None)
        .await
        .map_err(mongo_error)?
        .try_collect()
        .await
        .map_err(mongo_error)?;
    documents
        .into_iter()
        .map(|document| bson::from_document(document).map_err(TuiterServerError::from))
        .collect()
}

pub async fn insert<T>(collection: &Collection<T>, record: &T) -> Result<ObjectId, TuiterServerError>
where
    T: Serialize + Send + Sync,
{
    let result = collection.insert_one(record, None).await.map_err(mongo_error)?;
    result.inserted_id.as_object_id().ok_or_else(|| {
        TuiterServerError::MongoError(format!(
            "Inserted id {} is not an ObjectId",
            result.inserted_id
        ))
    })
}

/**
 * Applies `$set` with the supplied fields to the first document matching `filter`
 * @notice - an empty field set is not sent to the server (mongo rejects an empty $set)
 */
pub async fn set_fields<T>(
    collection: &Collection<T>,
    filter: Document,
    fields: Document,
) -> Result<UpdateStatus, TuiterServerError>
where
    T: Send + Sync,
{
    if fields.is_empty() {
        return Ok(UpdateStatus {
            acknowledged: false,
            matched_count: 0,
            modified_count: 0,
        });
    }
    let result = collection
        .update_one(filter, doc! { "$set": fields }, None)
        .await
        .map_err(mongo_error)?;
    Ok(update_status(result))
}

pub fn delete_status(result: DeleteResult) -> DeleteStatus {
    DeleteStatus {
        acknowledged: true,
        deleted_count: result.deleted_count,
    }
}

pub fn update_status(result: UpdateResult) -> UpdateStatus {
    UpdateStatus {
        acknowledged: true,
        matched_count: result.matched_count,
        modified_count: result.modified_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_looks_up_by_id_and_keeps_dangling_references() {
        let stages = populate("likedBy", "users");
        assert_eq!(stages.len(), 2);
        let lookup = stages[0].get_document("$lookup").unwrap();
        assert_eq!(lookup.get_str("from").unwrap(), "users");
        assert_eq!(lookup.get_str("as").unwrap(), "likedBy");
        assert_eq!(
            lookup.get_document("let").unwrap(),
            &doc! { "refId": "$likedBy" }
        );
        assert_eq!(lookup.get_array("pipeline").unwrap().len(), 1);
        let unwind = stages[1].get_document("$unwind").unwrap();
        assert_eq!(unwind.get_str("path").unwrap(), "$likedBy");
        assert!(unwind.get_bool("preserveNullAndEmptyArrays").unwrap());
    }

    #[test]
    fn nested_populate_runs_inside_lookup() {
        let stages = populate_with("tuit", "tuits", populate("postedBy", "users"));
        let lookup = stages[0].get_document("$lookup").unwrap();
        let inner = lookup.get_array("pipeline").unwrap();
        assert_eq!(inner.len(), 3);
        let nested = inner[1].as_document().unwrap().get_document("$lookup").unwrap();
        assert_eq!(nested.get_str("from").unwrap(), "users");
        assert_eq!(nested.get_str("as").unwrap(), "postedBy");
    }

    #[test]
    fn match_comes_first() {
        let uid = ObjectId::new();
        let pipeline = match_and_populate(doc! { "user": uid }, populate("tuit", "tuits"));
        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline[0], doc! { "$match": { "user": uid } });
    }
}
