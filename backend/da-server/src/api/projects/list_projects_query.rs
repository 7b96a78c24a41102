use crate::{ApiError, ApiResult};

use serde::Deserialize;

/// Query parameters for listing projects
///
/// `limit` is kept as text so a bad value becomes a JSON validation error
/// rather than the framework's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    pub limit: Option<String>,
}

impl ListProjectsQuery {
    /// Parsed limit; blank means unset
    #[track_caller]
    pub fn limit(&self) -> ApiResult<Option<u64>> {
        let Some(raw) = self.limit.as_deref().map(str::trim) else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }

        raw.parse::<u64>().map(Some).map_err(|_| {
            ApiError::validation(
                "limit",
                format!("limit must be a non-negative integer, got '{raw}'"),
            )
        })
    }
}
