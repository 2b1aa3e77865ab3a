mod bookmark;
mod follow;
mod like;
mod message;
mod tuit;
mod user;

pub use bookmark::Bookmark;
pub use follow::Follow;
pub use like::{Dislike, Like};
pub use message::Message;
pub use tuit::Tuit;
pub use user::{AccountType, Location, MaritalStatus, User};

pub const USERS: &str = "users";
pub const TUITS: &str = "tuits";
pub const LIKES: &str = "likes";
pub const DISLIKES: &str = "dislikes";
pub const FOLLOWS: &str = "follows";
pub const BOOKMARKS: &str = "bookmarks";
pub const MESSAGES: &str = "messages";
