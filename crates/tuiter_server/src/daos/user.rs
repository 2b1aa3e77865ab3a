use super::{delete_status, find_all, insert, set_fields};
use crate::mongo::{mongo_error, TuiterDB};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::responses::{DeleteStatus, UpdateStatus};
use tuiter_common::models::{User, USERS};

pub struct UserDao {
    users: Collection<User>,
}

impl UserDao {
    pub fn new(db: &TuiterDB) -> Self {
        Self {
            users: db.collection(USERS),
        }
    }

    pub async fn find_all_users(&self) -> Result<Vec<User>, TuiterServerError> {
        find_all(&self.users, doc! {}).await
    }

    pub async fn find_user_by_id(&self, uid: ObjectId) -> Result<Option<User>, TuiterServerError> {
        self.users
            .find_one(doc! { "_id": uid }, None)
            .await
            .map_err(mongo_error)
    }

    /**
     * Insert a new user
     * @notice - no uniqueness check is made on username or email
     *
     * @param user - the user to insert, without an id
     * @returns - the stored user including its new id
     */
    pub async fn create_user(&self, mut user: User) -> Result<User, TuiterServerError> {
        let oid = insert(&self.users, &user).await?;
        tracing::debug!("Created user {} ({})", user.username, oid);
        user.id = Some(oid);
        Ok(user)
    }

    pub async fn update_user(
        &self,
        uid: ObjectId,
        fields: Document,
    ) -> Result<UpdateStatus, TuiterServerError> {
        let status = set_fields(&self.users, doc! { "_id": uid }, fields).await?;
        tracing::debug!("Updated user {}: {:?}", uid, status);
        Ok(status)
    }

    // tuits, likes and messages of the user are left in place
    pub async fn delete_user(&self, uid: ObjectId) -> Result<DeleteStatus, TuiterServerError> {
        let result = self
            .users
            .delete_one(doc! { "_id": uid }, None)
            .await
            .map_err(mongo_error)?;
        tracing::debug!("Deleted {} user(s) with id {}", result.deleted_count, uid);
        Ok(delete_status(result))
    }
}
