use crate::{CREATED_AT_FIELD, Collection, DocumentStore, StoreError, StoreResult, UPDATED_AT_FIELD};

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info, warn};
use mongodb::bson::{Bson, DateTime, Document};
use mongodb::{Client, Database};

enum Connection {
    Connected(Database),
    Disconnected { reason: String },
}

/// MongoDB-backed [`DocumentStore`].
///
/// Construction never fails: a missing or unusable configuration yields a
/// disconnected store so the server can still start.
pub struct MongoStore {
    connection: Connection,
}

impl MongoStore {
    pub async fn connect(url: Option<&str>, name: Option<&str>) -> Self {
        let (url, name) = match (url, name) {
            (Some(url), Some(name)) => (url, name),
            (None, _) => return Self::disconnected("database url not configured"),
            (_, None) => return Self::disconnected("database name not configured"),
        };

        match Client::with_uri_str(url).await {
            Ok(client) => {
                info!("Document store ready (database: {})", name);
                Self {
                    connection: Connection::Connected(client.database(name)),
                }
            }
            Err(e) => Self::disconnected(format!("cannot create client: {}", e)),
        }
    }

    /// Store whose every operation fails with [`StoreError::Unavailable`]
    pub fn disconnected<S: Into<String>>(reason: S) -> Self {
        let reason = reason.into();
        warn!("Document store disabled: {}", reason);
        Self {
            connection: Connection::Disconnected { reason },
        }
    }

    #[track_caller]
    fn database(&self) -> StoreResult<&Database> {
        match &self.connection {
            Connection::Connected(database) => Ok(database),
            Connection::Disconnected { reason } => Err(StoreError::unavailable(reason.as_str())),
        }
    }
}

/// Set `created_at` and `updated_at` to the current UTC time
pub(crate) fn stamp_timestamps(document: &mut Document) {
    let now = DateTime::now();
    document.insert(CREATED_AT_FIELD, now);
    document.insert(UPDATED_AT_FIELD, now);
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(
        &self,
        collection: Collection,
        filter: Document,
        limit: Option<u64>,
    ) -> StoreResult<Vec<Document>> {
        if limit == Some(0) {
            return Ok(Vec::new());
        }

        let documents = self
            .database()?
            .collection::<Document>(collection.name());
        let mut query = documents.find(filter);
        if let Some(limit) = limit {
            query = query.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let cursor = query
            .await
            .map_err(|e| StoreError::query(e.to_string()))?;
        let found: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::query(e.to_string()))?;

        debug!("find {} -> {} documents", collection, found.len());
        Ok(found)
    }

    async fn insert(&self, collection: Collection, document: Document) -> StoreResult<String> {
        let database = self.database()?;

        let mut document = document;
        stamp_timestamps(&mut document);

        let result = database
            .collection::<Document>(collection.name())
            .insert_one(document)
            .await
            .map_err(|e| StoreError::write(e.to_string()))?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };
        debug!("insert {} -> {}", collection, id);
        Ok(id)
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.database()?
            .list_collection_names()
            .await
            .map_err(|e| StoreError::query(e.to_string()))
    }

    fn database_name(&self) -> Option<String> {
        match &self.connection {
            Connection::Connected(database) => Some(database.name().to_string()),
            Connection::Disconnected { .. } => None,
        }
    }
}
