//! Project REST API handlers

use crate::{ApiResult, AppState, ListProjectsQuery};

use da_core::Project;

use axum::{
    Json,
    extract::{Query, State},
};

/// GET /api/projects
///
/// Never fails because of the store; see `CatalogService::list_projects`
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> ApiResult<Json<Vec<Project>>> {
    let limit = query.limit()?;
    Ok(Json(state.catalog.list_projects(limit).await))
}
