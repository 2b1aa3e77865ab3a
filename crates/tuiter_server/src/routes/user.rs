use crate::catchers::TuiterResponse;
use crate::daos::UserDao;
use rocket::serde::json::Json;
use rocket::State;
use tuiter_common::http::requests::{CreateUserRequest, UpdateUserRequest};
use tuiter_common::http::responses::{DeleteStatus, UpdateStatus};
use tuiter_common::models::User;
use tuiter_common::utils::parse_object_id;

/// GET REQUESTS ///

#[get("/users")]
pub async fn find_all_users(dao: &State<UserDao>) -> Result<Json<Vec<User>>, TuiterResponse> {
    Ok(Json(dao.find_all_users().await?))
}

/**
 * Look up a single user
 *
 * @param uid - the id of the user
 * @return - the user, or null if no user has that id
 * @return status:
 *            * 200 if success
 *            * 400 if uid is not an object id
 *            * 500 if db fails
 */
#[get("/users/<uid>")]
pub async fn find_user_by_id(
    uid: &str,
    dao: &State<UserDao>,
) -> Result<Json<Option<User>>, TuiterResponse> {
    let uid = parse_object_id(uid)?;
    Ok(Json(dao.find_user_by_id(uid).await?))
}

/// POST REQUESTS ///

/**
 * Register a new user
 *
 * @param request - the CreateUserRequest; username, password and email are required
 * @return - the stored user with its id
 * @return status:
 *            * 200 if success
 *            * 400 if dateOfBirth is not an RFC 3339 date or body is not json
 *            * 422 if required fields are missing
 *            * 500 if db fails
 */
#[post("/users", data = "<request>")]
pub async fn create_user(
    request: Json<CreateUserRequest>,
    dao: &State<UserDao>,
) -> Result<Json<User>, TuiterResponse> {
    let user = request.into_inner().into_user()?;
    Ok(Json(dao.create_user(user).await?))
}

/// PUT REQUESTS ///

#[put("/users/<uid>", data = "<request>")]
pub async fn update_user(
    uid: &str,
    request: Json<UpdateUserRequest>,
    dao: &State<UserDao>,
) -> Result<Json<UpdateStatus>, TuiterResponse> {
    let uid = parse_object_id(uid)?;
    let fields = request.to_update()?;
    Ok(Json(dao.update_user(uid, fields).await?))
}

/// DELETE REQUESTS ///

#[delete("/users/<uid>")]
pub async fn delete_user(
    uid: &str,
    dao: &State<UserDao>,
) -> Result<Json<DeleteStatus>, TuiterResponse> {
    let uid = parse_object_id(uid)?;
    Ok(Json(dao.delete_user(uid).await?))
}
