use crate::catchers::TuiterResponse;
use crate::daos::TuitDao;
use rocket::serde::json::Json;
use rocket::State;
use tuiter_common::http::requests::{CreateTuitRequest, UpdateTuitRequest};
use tuiter_common::http::responses::{DeleteStatus, UpdateStatus};
use tuiter_common::models::{Tuit, User};
use tuiter_common::utils::parse_object_id;

#[get("/tuits")]
pub async fn find_all_tuits(dao: &State<TuitDao>) -> Result<Json<Vec<Tuit>>, TuiterResponse> {
    Ok(Json(dao.find_all_tuits().await?))
}

#[get("/users/<uid>/tuits")]
pub async fn find_tuits_by_user(
    uid: &str,
    dao: &State<TuitDao>,
) -> Result<Json<Vec<Tuit>>, TuiterResponse> {
    let uid = parse_object_id(uid)?;
    Ok(Json(dao.find_tuits_by_user(uid).await?))
}

/**
 * Look up a tuit with its author expanded into a full user document
 *
 * @param tid - the id of the tuit
 * @return - the tuit, or null if no tuit has that id
 */
#[get("/tuits/<tid>")]
pub async fn find_tuit_by_id(
    tid: &str,
    dao: &State<TuitDao>,
) -> Result<Json<Option<Tuit<User>>>, TuiterResponse> {
    let tid = parse_object_id(tid)?;
    Ok(Json(dao.find_tuit_by_id(tid).await?))
}

/**
 * Post a new tuit on behalf of a user
 * @notice - the author is not checked for existence
 *
 * @param uid - the id of the author, stored as postedBy
 * @param request - the CreateTuitRequest containing:
 *             * tuit: the text of the tuit
 *             * postedOn: optional RFC 3339 timestamp, defaults to now
 * @return - the stored tuit with its id
 */
#[post("/users/<uid>/tuits", data = "<request>")]
pub async fn create_tuit(
    uid: &str,
    request: Json<CreateTuitRequest>,
    dao: &State<TuitDao>,
) -> Result<Json<Tuit>, TuiterResponse> {
    let uid = parse_object_id(uid)?;
    let tuit = request.into_inner().into_tuit(uid)?;
    Ok(Json(dao.create_tuit(tuit).await?))
}

#[put("/tuits/<tid>", data = "<request>")]
pub async fn update_tuit(
    tid: &str,
    request: Json<UpdateTuitRequest>,
    dao: &State<TuitDao>,
) -> Result<Json<UpdateStatus>, TuiterResponse> {
    let tid = parse_object_id(tid)?;
    let fields = request.to_update()?;
    Ok(Json(dao.update_tuit(tid, fields).await?))
}

#[delete("/tuits/<tid>")]
pub async fn delete_tuit(
    tid: &str,
    dao: &State<TuitDao>,
) -> Result<Json<DeleteStatus>, TuiterResponse> {
    let tid = parse_object_id(tid)?;
    Ok(Json(dao.delete_tuit(tid).await?))
}
