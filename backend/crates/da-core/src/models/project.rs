//! Project entity - a portfolio entry shown in the grid/carousel.

use serde::{Deserialize, Serialize};

/// A portfolio project.
///
/// Carries no identity field: whatever the store assigns stays in the store.
/// Unknown fields on a stored document (timestamps, `_id`) are ignored when
/// decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// Short punchy subtitle
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Preview image URL
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Tech/discipline tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Link to full case study
    #[serde(default)]
    pub case_study_url: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    /// Show in featured row
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Create a project with only a title set
    #[cfg(test)]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            description: None,
            thumbnail: None,
            tags: Vec::new(),
            case_study_url: None,
            client: None,
            featured: false,
        }
    }
}
