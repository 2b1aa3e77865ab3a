use lazy_static::lazy_static;
use rocket::route::Route;
mod bookmark;
mod dislike;
mod follow;
mod like;
mod message;
mod tuit;
mod user;

lazy_static! {
    pub(crate) static ref USER_ROUTES: Vec<Route> = routes![
        user::find_all_users,
        user::find_user_by_id,
        user::create_user,
        user::update_user,
        user::delete_user
    ];
    pub(crate) static ref TUIT_ROUTES: Vec<Route> = routes![
        tuit::find_all_tuits,
        tuit::find_tuits_by_user,
        tuit::find_tuit_by_id,
        tuit::create_tuit,
        tuit::update_tuit,
        tuit::delete_tuit
    ];
    pub(crate) static ref LIKE_ROUTES: Vec<Route> = routes![
        like::find_all_users_that_liked_tuit,
        like::find_all_tuits_liked_by_user,
        like::user_likes_tuit,
        like::user_unlikes_tuit
    ];
    pub(crate) static ref DISLIKE_ROUTES: Vec<Route> = routes![
        dislike::find_all_users_that_disliked_tuit,
        dislike::find_all_tuits_disliked_by_user,
        dislike::find_user_dislikes_tuit,
        dislike::count_how_many_disliked_tuit,
        dislike::user_dislikes_tuit,
        dislike::user_undislikes_tuit
    ];
    pub(crate) static ref FOLLOW_ROUTES: Vec<Route> = routes![
        follow::find_all_follow_pairs,
        follow::find_all_followers_for_user,
        follow::find_all_users_followed_for_user,
        follow::user_follows_another_user,
        follow::user_unfollows_another_user,
        follow::user_removes_follower
    ];
    pub(crate) static ref BOOKMARK_ROUTES: Vec<Route> = routes![
        bookmark::find_all_bookmarked_tuits,
        bookmark::find_all_tuits_bookmarked_by_user,
        bookmark::user_bookmarks_tuit,
        bookmark::user_unbookmarks_tuit,
        bookmark::user_unbookmarks_all_tuits
    ];
    pub(crate) static ref MESSAGE_ROUTES: Vec<Route> = routes![
        message::find_all_messages,
        message::find_sent_messages_for_user,
        message::find_received_messages_for_user,
        message::user_sends_message_to_another_user,
        message::user_edits_message_they_sent,
        message::user_deletes_message
    ];
}
