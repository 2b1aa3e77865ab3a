use crate::catchers::TuiterResponse;
use crate::daos::FollowDao;
use rocket::serde::json::Json;
use rocket::State;
use tuiter_common::http::responses::DeleteStatus;
use tuiter_common::models::Follow;
use tuiter_common::utils::parse_object_id;

#[get("/follows")]
pub async fn find_all_follow_pairs(
    dao: &State<FollowDao>,
) -> Result<Json<Vec<Follow>>, TuiterResponse> {
    Ok(Json(dao.find_all_follow_pairs().await?))
}

#[get("/users/<uid>/followers")]
pub async fn find_all_followers_for_user(
    uid: &str,
    dao: &State<FollowDao>,
) -> Result<Json<Vec<Follow>>, TuiterResponse> {
    let uid = parse_object_id(uid)?;
    Ok(Json(dao.find_all_followers_for_user(uid).await?))
}

#[get("/users/<uid>/followings")]
pub async fn find_all_users_followed_for_user(
    uid: &str,
    dao: &State<FollowDao>,
) -> Result<Json<Vec<Follow>>, TuiterResponse> {
    let uid = parse_object_id(uid)?;
    Ok(Json(dao.find_all_users_followed_for_user(uid).await?))
}

/**
 * Make user uid follow user uuid
 * @notice - following oneself or following twice is not rejected
 */
#[post("/users/<uid>/follows/<uuid>")]
pub async fn user_follows_another_user(
    uid: &str,
    uuid: &str,
    dao: &State<FollowDao>,
) -> Result<Json<Follow>, TuiterResponse> {
    let (uid, uuid) = (parse_object_id(uid)?, parse_object_id(uuid)?);
    Ok(Json(dao.user_follows_another_user(uid, uuid).await?))
}

#[delete("/users/<uid>/unfollows/<uuid>")]
pub async fn user_unfollows_another_user(
    uid: &str,
    uuid: &str,
    dao: &State<FollowDao>,
) -> Result<Json<DeleteStatus>, TuiterResponse> {
    let (uid, uuid) = (parse_object_id(uid)?, parse_object_id(uuid)?);
    Ok(Json(dao.user_unfollows_another_user(uid, uuid).await?))
}

/// uid removes uuid from its followers
#[delete("/users/<uid>/followers/<uuid>")]
pub async fn user_removes_follower(
    uid: &str,
    uuid: &str,
    dao: &State<FollowDao>,
) -> Result<Json<DeleteStatus>, TuiterResponse> {
    let (uid, uuid) = (parse_object_id(uid)?, parse_object_id(uuid)?);
    Ok(Json(dao.user_removes_follower(uid, uuid).await?))
}
