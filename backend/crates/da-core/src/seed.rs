//! Built-in demo projects.
//!
//! Used twice: inserted into an empty store on first listing, and served
//! directly when the store cannot be reached. Order is significant.

use crate::Project;

pub const SEED_PROJECT_COUNT: usize = 3;

/// The demo portfolio, in declaration order
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Neon Nexus UI Kit".to_string(),
            subtitle: Some("Design System".to_string()),
            description: Some(
                "A modular UI system blending neon accents with brutalist structure.".to_string(),
            ),
            thumbnail: Some(
                "https://images.unsplash.com/photo-1515879218367-8466d910aaa4?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ),
            tags: vec![
                "UI".to_string(),
                "Design System".to_string(),
                "Figma".to_string(),
            ],
            case_study_url: Some("https://example.com/case/neon-nexus".to_string()),
            client: Some("Internal".to_string()),
            featured: true,
        },
        Project {
            title: "Orbit Commerce 3D".to_string(),
            subtitle: Some("Interactive Storefront".to_string()),
            description: Some("WebGL-powered product exploration with cinematic motion.".to_string()),
            thumbnail: Some(
                "https://images.unsplash.com/photo-1550745165-9bc0b252726f?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ),
            tags: vec![
                "Three.js".to_string(),
                "WebGL".to_string(),
                "Ecommerce".to_string(),
            ],
            case_study_url: Some("https://example.com/case/orbit".to_string()),
            client: Some("Orbit".to_string()),
            featured: false,
        },
        Project {
            title: "Astra Brand Portal".to_string(),
            subtitle: Some("Identity + Web".to_string()),
            description: Some(
                "A dark, luminous brand portal with motion micro-interactions.".to_string(),
            ),
            thumbnail: Some(
                "https://images.unsplash.com/photo-1542838686-73e3go9?ixid&auto=format&fit=crop&w=1200&q=80"
                    .to_string(),
            ),
            tags: vec!["Brand".to_string(), "Web".to_string(), "Motion".to_string()],
            case_study_url: Some("https://example.com/case/astra".to_string()),
            client: Some("Astra".to_string()),
            featured: false,
        },
    ]
}
