//! Document store access for the agency API.
//!
//! The rest of the workspace talks to storage only through the
//! [`DocumentStore`] trait. [`MongoStore`] is the production implementation;
//! when the database is not configured it degrades to a disconnected store
//! whose operations fail with [`StoreError::Unavailable`].

mod collection;
mod document_store;
mod error;
mod mongo_store;


pub use collection::Collection;
pub use document_store::DocumentStore;
pub use error::{StoreError, StoreResult};
pub use mongo_store::MongoStore;

pub use mongodb::bson;
pub use mongodb::bson::{Document, doc};

/// Storage-assigned identifier field
pub const ID_FIELD: &str = "_id";
pub const CREATED_AT_FIELD: &str = "created_at";
pub const UPDATED_AT_FIELD: &str = "updated_at";
