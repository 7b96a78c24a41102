use crate::{Collection, StoreResult};

use async_trait::async_trait;
use mongodb::bson::Document;

/// Minimal find/insert surface over a document database.
///
/// Implementations must be shareable across request handlers; the server
/// holds one as `Arc<dyn DocumentStore>`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Documents in `collection` matching `filter`, in store order.
    ///
    /// No match is an empty vector, not an error. `Some(0)` returns an
    /// empty vector without querying.
    async fn find(
        &self,
        collection: Collection,
        filter: Document,
        limit: Option<u64>,
    ) -> StoreResult<Vec<Document>>;

    /// Insert one document, returning its storage-assigned id
    async fn insert(&self, collection: Collection, document: Document) -> StoreResult<String>;

    async fn list_collections(&self) -> StoreResult<Vec<String>>;

    /// Name of the connected database, `None` when disconnected
    fn database_name(&self) -> Option<String>;

    fn is_connected(&self) -> bool {
        self.database_name().is_some()
    }
}
