use super::{delete_status, find_all, insert, set_fields};
use crate::mongo::{mongo_error, TuiterDB};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;
use tuiter_common::errors::TuiterServerError;
use tuiter_common::http::responses::{DeleteStatus, UpdateStatus};
use tuiter_common::models::{Message, MESSAGES};

pub struct MessageDao {
    messages: Collection<Message>,
}

impl MessageDao {
    pub fn new(db: &TuiterDB) -> Self {
        Self {
            messages: db.collection(MESSAGES),
        }
    }

    pub async fn find_all_messages(&self) -> Result<Vec<Message>, TuiterServerError> {
        find_all(&self.messages, doc! {}).await
    }

    pub async fn find_received_messages_for_user(
        &self,
        uid: ObjectId,
    ) -> Result<Vec<Message>, TuiterServerError> {
        find_all(&self.messages, doc! { "receiver": uid }).await
    }

    pub async fn find_sent_messages_for_user(
        &self,
        uid: ObjectId,
    ) -> Result<Vec<Message>, TuiterServerError> {
        find_all(&self.messages, doc! { "sender": uid }).await
    }

    pub async fn user_sends_message_to_another_user(
        &self,
        mut message: Message,
    ) -> Result<Message, TuiterServerError> {
        let oid = insert(&self.messages, &message).await?;
        tracing::debug!(
            "Message {} sent from {:?} to {:?}",
            oid,
            message.sender,
            message.receiver
        );
        message.id = Some(oid);
        Ok(message)
    }

    /**
     * Edit a message, matching only when `uid` sent it
     *
     * @param uid - the user claiming to be the sender
     * @param mid - the message to edit
     * @param fields - the fields to $set
     * @returns - matched count is 0 if the message does not exist or was sent by someone else
     */
    pub async fn user_edits_message_they_sent(
        &self,
        uid: ObjectId,
        mid: ObjectId,
        fields: Document,
    ) -> Result<UpdateStatus, TuiterServerError> {
        let status = set_fields(&self.messages, doc! { "_id": mid, "sender": uid }, fields).await?;
        tracing::debug!("User {} edited message {}: {:?}", uid, mid, status);
        Ok(status)
    }

    pub async fn user_deletes_message(&self, mid: ObjectId) -> Result<DeleteStatus, TuiterServerError> {
        let result = self
            .messages
            .delete_one(doc! { "_id": mid }, None)
            .await
            .map_err(mongo_error)?;
        tracing::debug!("Deleted {} message(s) with id {}", result.deleted_count, mid);
        Ok(delete_status(result))
    }
}
