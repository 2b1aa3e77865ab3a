use crate::config::{DATABASE_NAME, MONGODB_URI};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tuiter_common::errors::TuiterServerError;

pub fn mongo_error(e: mongodb::error::Error) -> TuiterServerError {
    TuiterServerError::MongoError(e.to_string())
}

/// Handle on the tuiter database. The driver connects lazily and pools connections itself.
#[derive(Clone, Debug)]
pub struct TuiterDB {
    db: Database,
}

impl TuiterDB {
    pub async fn init() -> Result<Self, TuiterServerError> {
        Self::connect(&**MONGODB_URI, &**DATABASE_NAME).await
    }

    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, TuiterServerError> {
        let mut client_options = ClientOptions::parse(uri).await.map_err(mongo_error)?;
        let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
        client_options.server_api = Some(server_api);
        let client = Client::with_options(client_options).map_err(mongo_error)?;
        Ok(Self {
            db: client.database(database_name),
        })
    }

    pub fn name(&self) -> &str {
        self.db.name()
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Serialize + DeserializeOwned + Unpin + Send + Sync,
    {
        self.db.collection(name)
    }

    /**
     * Drops the entire database to start off with clean state for testing
     */
    pub async fn drop(&self) -> Result<(), TuiterServerError> {
        self.db.drop(None).await.map_err(mongo_error)
    }
}
