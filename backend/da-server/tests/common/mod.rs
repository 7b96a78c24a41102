#![allow(dead_code)]

//! Test infrastructure for da-server tests

use da_config::Config;
use da_db::bson::oid::ObjectId;
use da_db::bson::{DateTime, Document};
use da_db::{
    CREATED_AT_FIELD, Collection, DocumentStore, ID_FIELD, StoreError, StoreResult,
    UPDATED_AT_FIELD,
};
use da_server::AppState;

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// In-memory document store with call counters and injectable failures
pub struct FakeStore {
    documents: Mutex<HashMap<Collection, Vec<Document>>>,
    collection_names: Vec<String>,
    find_calls: AtomicUsize,
    insert_calls: AtomicUsize,
    /// Finds succeed this many times, then fail with `find_failure`
    finds_before_failure: usize,
    find_failure: Option<String>,
    insert_failure: Option<String>,
    list_failure: Option<String>,
    connected: bool,
}

impl FakeStore {
    /// Connected and empty; inserts succeed
    pub fn empty() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            collection_names: Vec::new(),
            find_calls: AtomicUsize::new(0),
            insert_calls: AtomicUsize::new(0),
            finds_before_failure: 0,
            find_failure: None,
            insert_failure: None,
            list_failure: None,
            connected: true,
        }
    }

    /// Every operation fails as if the database were never configured
    pub fn unavailable() -> Self {
        Self {
            connected: false,
            find_failure: Some("database url not configured".to_string()),
            insert_failure: Some("database url not configured".to_string()),
            list_failure: Some("database url not configured".to_string()),
            ..Self::empty()
        }
    }

    pub fn with_projects(documents: Vec<Document>) -> Self {
        let store = Self::empty();
        store
            .documents
            .lock()
            .unwrap()
            .insert(Collection::Project, documents);
        store
    }

    pub fn failing_inserts(mut self, message: &str) -> Self {
        self.insert_failure = Some(message.to_string());
        self
    }

    /// Let `successes` finds through, then fail every later one
    pub fn failing_finds_after(mut self, successes: usize, message: &str) -> Self {
        self.finds_before_failure = successes;
        self.find_failure = Some(message.to_string());
        self
    }

    pub fn with_collection_names(mut self, names: &[&str]) -> Self {
        self.collection_names = names.iter().map(|name| name.to_string()).collect();
        self
    }

    pub fn failing_listing(mut self, message: &str) -> Self {
        self.list_failure = Some(message.to_string());
        self
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self, collection: Collection) -> Vec<Document> {
        self.documents
            .lock()
            .unwrap()
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    fn failure(&self, message: &str) -> StoreError {
        if self.connected {
            StoreError::query(message)
        } else {
            StoreError::unavailable(message)
        }
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn find(
        &self,
        collection: Collection,
        _filter: Document,
        limit: Option<u64>,
    ) -> StoreResult<Vec<Document>> {
        let call = self.find_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref message) = self.find_failure
            && call >= self.finds_before_failure
        {
            return Err(self.failure(message));
        }

        let limit = limit.map_or(usize::MAX, |l| l as usize);
        Ok(self
            .stored(collection)
            .into_iter()
            .take(limit)
            .collect())
    }

    async fn insert(&self, collection: Collection, document: Document) -> StoreResult<String> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref message) = self.insert_failure {
            return Err(if self.connected {
                StoreError::write(message.as_str())
            } else {
                StoreError::unavailable(message.as_str())
            });
        }

        let id = ObjectId::new();
        let mut document = document;
        document.insert(ID_FIELD, id);
        document.insert(CREATED_AT_FIELD, DateTime::now());
        document.insert(UPDATED_AT_FIELD, DateTime::now());

        self.documents
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .push(document);
        Ok(id.to_hex())
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        match self.list_failure {
            Some(ref message) => Err(self.failure(message)),
            None => Ok(self.collection_names.clone()),
        }
    }

    fn database_name(&self) -> Option<String> {
        self.connected.then(|| "agency_test".to_string())
    }
}

/// Create AppState for testing around a shared fake store
pub fn create_test_app_state(store: Arc<FakeStore>) -> AppState {
    AppState::new(store, &Config::default())
}

/// Create AppState with a specific configuration
pub fn create_test_app_state_with_config(store: Arc<FakeStore>, config: &Config) -> AppState {
    AppState::new(store, config)
}

pub fn titles(projects: &[da_core::Project]) -> Vec<String> {
    projects.iter().map(|p| p.title.clone()).collect()
}
