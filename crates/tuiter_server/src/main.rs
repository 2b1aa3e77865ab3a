#[macro_use]
extern crate rocket;
use catchers::{bad_request, internal_error, not_found, unprocessable_entity};
use daos::{BookmarkDao, DislikeDao, FollowDao, LikeDao, MessageDao, TuitDao, UserDao};
use mongo::TuiterDB;
use rocket::{Build, Rocket};
use tracing_subscriber::EnvFilter;
use routes::{
    BOOKMARK_ROUTES, DISLIKE_ROUTES, FOLLOW_ROUTES, LIKE_ROUTES, MESSAGE_ROUTES, TUIT_ROUTES,
    USER_ROUTES,
};

mod catchers;
mod config;
mod daos;
mod mongo;
mod routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .init();
    // connect to mongodb
    let mongo = TuiterDB::init().await?;
    tracing::info!("Serving tuiter from database `{}`", mongo.name());
    build_rocket(&mongo).launch().await?;
    Ok(())
}

/// Directives from RUST_LOG when set, INFO otherwise
pub fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Assembles the server: one DAO per resource in managed state, every resource mounted under /api
pub fn build_rocket(mongo: &TuiterDB) -> Rocket<Build> {
    let figment = rocket::Config::figment().merge(("port", *config::PORT));
    rocket::custom(figment)
        .manage(UserDao::new(mongo))
        .manage(TuitDao::new(mongo))
        .manage(LikeDao::new(mongo))
        .manage(DislikeDao::new(mongo))
        .manage(FollowDao::new(mongo))
        .manage(BookmarkDao::new(mongo))
        .manage(MessageDao::new(mongo))
        .mount("/", routes![hello])
        .mount("/api", USER_ROUTES.clone())
        .mount("/api", TUIT_ROUTES.clone())
        .mount("/api", LIKE_ROUTES.clone())
        .mount("/api", DISLIKE_ROUTES.clone())
        .mount("/api", FOLLOW_ROUTES.clone())
        .mount("/api", BOOKMARK_ROUTES.clone())
        .mount("/api", MESSAGE_ROUTES.clone())
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable_entity, internal_error],
        )
}

#[get("/hello")]
async fn hello() -> &'static str {
    "Hello World!"
}
