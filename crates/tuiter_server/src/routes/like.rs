use crate::catchers::TuiterResponse;
use crate::daos::LikeDao;
use mongodb::bson::oid::ObjectId;
use rocket::serde::json::Json;
use rocket::State;
use tuiter_common::http::responses::DeleteStatus;
use tuiter_common::models::{Like, Tuit, User};
use tuiter_common::utils::parse_object_id;

#[get("/tuits/<tid>/likes")]
pub async fn find_all_users_that_liked_tuit(
    tid: &str,
    dao: &State<LikeDao>,
) -> Result<Json<Vec<Like<ObjectId, User>>>, TuiterResponse> {
    let tid = parse_object_id(tid)?;
    Ok(Json(dao.find_all_users_that_liked_tuit(tid).await?))
}

#[get("/users/<uid>/likes")]
pub async fn find_all_tuits_liked_by_user(
    uid: &str,
    dao: &State<LikeDao>,
) -> Result<Json<Vec<Like<Tuit>>>, TuiterResponse> {
    let uid = parse_object_id(uid)?;
    Ok(Json(dao.find_all_tuits_liked_by_user(uid).await?))
}

#[post("/users/<uid>/likes/<tid>")]
pub async fn user_likes_tuit(
    uid: &str,
    tid: &str,
    dao: &State<LikeDao>,
) -> Result<Json<Like>, TuiterResponse> {
    let (uid, tid) = (parse_object_id(uid)?, parse_object_id(tid)?);
    Ok(Json(dao.user_likes_tuit(uid, tid).await?))
}

#[delete("/users/<uid>/unlikes/<tid>")]
pub async fn user_unlikes_tuit(
    uid: &str,
    tid: &str,
    dao: &State<LikeDao>,
) -> Result<Json<DeleteStatus>, TuiterResponse> {
    let (uid, tid) = (parse_object_id(uid)?, parse_object_id(tid)?);
    Ok(Json(dao.user_unlikes_tuit(uid, tid).await?))
}
