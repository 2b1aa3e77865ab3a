use crate::catchers::TuiterResponse;
use crate::daos::MessageDao;
use rocket::serde::json::Json;
use rocket::State;
use tuiter_common::http::requests::{EditMessageRequest, SendMessageRequest};
use tuiter_common::http::responses::{DeleteStatus, UpdateStatus};
use tuiter_common::models::Message;
use tuiter_common::utils::parse_object_id;

/// GET REQUESTS ///

#[get("/messages")]
pub async fn find_all_messages(
    dao: &State<MessageDao>,
) -> Result<Json<Vec<Message>>, TuiterResponse> {
    Ok(Json(dao.find_all_messages().await?))
}

#[get("/users/<uid>/sentmessages")]
pub async fn find_sent_messages_for_user(
    uid: &str,
    dao: &State<MessageDao>,
) -> Result<Json<Vec<Message>>, TuiterResponse> {
    let uid = parse_object_id(uid)?;
    Ok(Json(dao.find_sent_messages_for_user(uid).await?))
}

#[get("/users/<uid>/receivedmessages")]
pub async fn find_received_messages_for_user(
    uid: &str,
    dao: &State<MessageDao>,
) -> Result<Json<Vec<Message>>, TuiterResponse> {
    let uid = parse_object_id(uid)?;
    Ok(Json(dao.find_received_messages_for_user(uid).await?))
}

/// POST REQUESTS ///

/**
 * Send a message from one user to another
 *
 * @param uid - the sender
 * @param uuid - the receiver
 * @param request - the SendMessageRequest containing:
 *             * message: the message text
 *             * sentOn: optional RFC 3339 timestamp, defaults to now
 * @return - the stored message with its id
 */
#[post("/users/<uid>/messages/<uuid>", data = "<request>")]
pub async fn user_sends_message_to_another_user(
    uid: &str,
    uuid: &str,
    request: Json<SendMessageRequest>,
    dao: &State<MessageDao>,
) -> Result<Json<Message>, TuiterResponse> {
    let (uid, uuid) = (parse_object_id(uid)?, parse_object_id(uuid)?);
    let message = request.into_inner().into_message(uid, uuid)?;
    Ok(Json(dao.user_sends_message_to_another_user(message).await?))
}

/// PUT REQUESTS ///

#[put("/users/<uid>/messages/<mid>", data = "<request>")]
pub async fn user_edits_message_they_sent(
    uid: &str,
    mid: &str,
    request: Json<EditMessageRequest>,
    dao: &State<MessageDao>,
) -> Result<Json<UpdateStatus>, TuiterResponse> {
    let (uid, mid) = (parse_object_id(uid)?, parse_object_id(mid)?);
    let fields = request.to_update()?;
    Ok(Json(dao.user_edits_message_they_sent(uid, mid, fields).await?))
}

/// DELETE REQUESTS ///

#[delete("/messages/<mid>")]
pub async fn user_deletes_message(
    mid: &str,
    dao: &State<MessageDao>,
) -> Result<Json<DeleteStatus>, TuiterResponse> {
    let mid = parse_object_id(mid)?;
    Ok(Json(dao.user_deletes_message(mid).await?))
}
