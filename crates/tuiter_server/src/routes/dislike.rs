use crate::catchers::TuiterResponse;
use crate::daos::DislikeDao;
use mongodb::bson::oid::ObjectId;
use rocket::serde::json::Json;
use rocket::State;
use tuiter_common::http::responses::DeleteStatus;
use tuiter_common::models::{Dislike, Tuit, User};
use tuiter_common::utils::parse_object_id;

#[get("/tuits/<tid>/dislikes")]
pub async fn find_all_users_that_disliked_tuit(
    tid: &str,
    dao: &State<DislikeDao>,
) -> Result<Json<Vec<Dislike<ObjectId, User>>>, TuiterResponse> {
    let tid = parse_object_id(tid)?;
    Ok(Json(dao.find_all_users_that_disliked_tuit(tid).await?))
}

/// Disliked tuits come back with their authors populated as well
#[get("/users/<uid>/dislikes")]
pub async fn find_all_tuits_disliked_by_user(
    uid: &str,
    dao: &State<DislikeDao>,
) -> Result<Json<Vec<Dislike<Tuit<User>>>>, TuiterResponse> {
    let uid = parse_object_id(uid)?;
    Ok(Json(dao.find_all_tuits_disliked_by_user(uid).await?))
}

#[get("/users/<uid>/dislikes/<tid>")]
pub async fn find_user_dislikes_tuit(
    uid: &str,
    tid: &str,
    dao: &State<DislikeDao>,
) -> Result<Json<Option<Dislike>>, TuiterResponse> {
    let (uid, tid) = (parse_object_id(uid)?, parse_object_id(tid)?);
    Ok(Json(dao.find_user_dislikes_tuit(uid, tid).await?))
}

#[get("/tuits/<tid>/dislikes/count")]
pub async fn count_how_many_disliked_tuit(
    tid: &str,
    dao: &State<DislikeDao>,
) -> Result<Json<u64>, TuiterResponse> {
    let tid = parse_object_id(tid)?;
    Ok(Json(dao.count_how_many_disliked_tuit(tid).await?))
}

#[post("/users/<uid>/dislikes/<tid>")]
pub async fn user_dislikes_tuit(
    uid: &str,
    tid: &str,
    dao: &State<DislikeDao>,
) -> Result<Json<Dislike>, TuiterResponse> {
    let (uid, tid) = (parse_object_id(uid)?, parse_object_id(tid)?);
    Ok(Json(dao.user_dislikes_tuit(uid, tid).await?))
}

#[delete("/users/<uid>/undislikes/<tid>")]
pub async fn user_undislikes_tuit(
    uid: &str,
    tid: &str,
    dao: &State<DislikeDao>,
) -> Result<Json<DeleteStatus>, TuiterResponse> {
    let (uid, tid) = (parse_object_id(uid)?, parse_object_id(tid)?);
    Ok(Json(dao.user_undislikes_tuit(uid, tid).await?))
}
