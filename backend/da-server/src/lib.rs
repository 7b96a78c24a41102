pub mod api;
pub mod app_state;
pub mod catalog;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    contact::{contact::submit_contact, contact_response::ContactResponse},
    diagnostics::{diagnostics::diagnostics, diagnostics_response::DiagnosticsResponse},
    error::ApiError,
    error::Result as ApiResult,
    projects::{list_projects_query::ListProjectsQuery, projects::list_projects},
};
pub use app_state::AppState;
pub use catalog::catalog_service::CatalogService;
pub use health::MessageResponse;

pub use crate::routes::build_router;

/// Collection names shown by the diagnostics endpoint
pub const MAX_LISTED_COLLECTIONS: usize = 10;
/// Characters of a store error echoed by the diagnostics endpoint
pub const MAX_DIAGNOSTIC_ERROR_CHARS: usize = 80;
