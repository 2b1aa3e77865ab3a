use crate::catchers::TuiterResponse;
use crate::daos::BookmarkDao;
use rocket::serde::json::Json;
use rocket::State;
use tuiter_common::http::responses::DeleteStatus;
use tuiter_common::models::{Bookmark, Tuit};
use tuiter_common::utils::parse_object_id;

#[get("/bookmarks")]
pub async fn find_all_bookmarked_tuits(
    dao: &State<BookmarkDao>,
) -> Result<Json<Vec<Bookmark>>, TuiterResponse> {
    Ok(Json(dao.find_all_bookmarked_tuits().await?))
}

#[get("/users/<uid>/bookmarks")]
pub async fn find_all_tuits_bookmarked_by_user(
    uid: &str,
    dao: &State<BookmarkDao>,
) -> Result<Json<Vec<Bookmark<Tuit>>>, TuiterResponse> {
    let uid = parse_object_id(uid)?;
    Ok(Json(dao.find_all_tuits_bookmarked_by_user(uid).await?))
}

#[post("/users/<uid>/bookmarks/<tid>")]
pub async fn user_bookmarks_tuit(
    uid: &str,
    tid: &str,
    dao: &State<BookmarkDao>,
) -> Result<Json<Bookmark>, TuiterResponse> {
    let (uid, tid) = (parse_object_id(uid)?, parse_object_id(tid)?);
    Ok(Json(dao.user_bookmarks_tuit(uid, tid).await?))
}

#[delete("/users/<uid>/unbookmarks/<tid>")]
pub async fn user_unbookmarks_tuit(
    uid: &str,
    tid: &str,
    dao: &State<BookmarkDao>,
) -> Result<Json<DeleteStatus>, TuiterResponse> {
    let (uid, tid) = (parse_object_id(uid)?, parse_object_id(tid)?);
    Ok(Json(dao.user_unbookmarks_tuit(uid, tid).await?))
}

#[delete("/users/<uid>/unbookmarks")]
pub async fn user_unbookmarks_all_tuits(
    uid: &str,
    dao: &State<BookmarkDao>,
) -> Result<Json<DeleteStatus>, TuiterResponse> {
    let uid = parse_object_id(uid)?;
    Ok(Json(dao.user_unbookmarks_all_tuits(uid).await?))
}
