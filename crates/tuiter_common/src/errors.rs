use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TuiterServerError {
    InvalidObjectId(String),
    InvalidDate(String, String),
    MongoError(String),
    SerdeError(String),
    InternalError,
}

impl std::fmt::Display for TuiterServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TuiterServerError::InvalidObjectId(id) => {
                write!(f, "`{}` is not a valid object id", id)
            }
            TuiterServerError::InvalidDate(field, value) => {
                write!(f, "Field {} has invalid RFC 3339 date `{}`", field, value)
            }
            TuiterServerError::MongoError(msg) => write!(f, "Mongo error: {}", msg),
            TuiterServerError::SerdeError(msg) => write!(f, "Serialization error: {}", msg),
            TuiterServerError::InternalError => write!(f, "Unknown internal server error"),
        }
    }
}

impl std::error::Error for TuiterServerError {}

impl From<bson::de::Error> for TuiterServerError {
    fn from(e: bson::de::Error) -> Self {
        TuiterServerError::SerdeError(e.to_string())
    }
}

impl From<bson::ser::Error> for TuiterServerError {
    fn from(e: bson::ser::Error) -> Self {
        TuiterServerError::SerdeError(e.to_string())
    }
}
