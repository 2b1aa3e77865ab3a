use lazy_static::lazy_static;
use std::env;

pub const DEFAULT_PORT: u16 = 4000;

// compile-time values from build.rs are the fallback for the process environment
lazy_static! {
    pub static ref MONGODB_URI: String =
        env::var("MONGODB_URI").unwrap_or(String::from(env!("MONGODB_URI")));
    pub static ref DATABASE_NAME: String =
        env::var("DATABASE_NAME").unwrap_or(String::from(env!("DATABASE_NAME")));
    pub static ref PORT: u16 = match env::var("PORT") {
        Ok(port) => port.parse().unwrap_or_else(|_| {
            tracing::warn!("PORT `{}` is not a valid port, using {}", port, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    };
}
