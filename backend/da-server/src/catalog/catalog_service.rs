//! Portfolio listing with first-run seeding and offline fallback.
//!
//! `list_projects` never fails. The outcomes, in order of preference:
//! 1. documents from the store, `_id` stripped, in store order
//! 2. an empty store is seeded with the demo portfolio and queried once more
//! 3. any store error serves the built-in portfolio instead
//!
//! Concurrent first listings may both seed; duplicates are accepted.

use da_core::{Project, seed_projects};
use da_db::bson::{self, Document};
use da_db::{Collection, DocumentStore, ID_FIELD, StoreResult, doc};

use std::sync::Arc;

use log::{debug, info, warn};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn DocumentStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Projects to show, at most `limit` of them
    pub async fn list_projects(&self, limit: Option<u64>) -> Vec<Project> {
        if limit == Some(0) {
            return Vec::new();
        }

        let documents = match self.store.find(Collection::Project, doc! {}, limit).await {
            Ok(documents) if documents.is_empty() => match self.seed_and_requery(limit).await {
                Ok(documents) => documents,
                Err(e) => {
                    warn!("Project re-query after seeding failed, serving built-in portfolio: {e}");
                    return Self::fallback(limit);
                }
            },
            Ok(documents) => documents,
            Err(e) => {
                warn!("Project query failed, serving built-in portfolio: {e}");
                return Self::fallback(limit);
            }
        };

        Self::decode(documents)
    }

    /// The first `limit` seed projects, in declaration order
    pub fn fallback(limit: Option<u64>) -> Vec<Project> {
        let mut projects = seed_projects();
        if let Some(limit) = limit {
            projects.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        projects
    }

    async fn seed_and_requery(&self, limit: Option<u64>) -> StoreResult<Vec<Document>> {
        self.seed().await;
        self.store.find(Collection::Project, doc! {}, limit).await
    }

    /// Best effort: every seed is attempted regardless of earlier failures
    async fn seed(&self) {
        let mut inserted = 0usize;
        let mut failed = 0usize;

        for project in seed_projects() {
            let document = match bson::to_document(&project) {
                Ok(document) => document,
                Err(e) => {
                    warn!("Cannot encode seed project '{}': {e}", project.title);
                    failed += 1;
                    continue;
                }
            };

            match self.store.insert(Collection::Project, document).await {
                Ok(id) => {
                    debug!("Seeded project '{}' as {id}", project.title);
                    inserted += 1;
                }
                Err(e) => {
                    warn!("Failed to seed project '{}': {e}", project.title);
                    failed += 1;
                }
            }
        }

        info!("Seeded empty project collection: {inserted} inserted, {failed} failed");
    }

    fn decode(documents: Vec<Document>) -> Vec<Project> {
        documents
            .into_iter()
            .filter_map(|mut document| {
                let id = document.remove(ID_FIELD);
                match bson::from_document::<Project>(document) {
                    Ok(project) => Some(project),
                    Err(e) => {
                        warn!("Skipping undecodable project document {id:?}: {e}");
                        None
                    }
                }
            })
            .collect()
    }
}
