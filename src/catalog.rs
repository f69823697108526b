//! Demo content shown in the library.

use designkit_core::{ContentCardData, ProjectId};

/// Projects listed on the dashboard, with display names.
pub const PROJECTS: &[(&str, &str)] = &[
    ("getting-started", "Getting started"),
    ("design-tokens", "Design tokens"),
    ("component-audit", "Component audit"),
    ("brand-refresh", "Brand refresh"),
];

pub fn project_name(id: &ProjectId) -> &str {
    PROJECTS
        .iter()
        .find(|(pid, _)| *pid == id.as_str())
        .map(|(_, name)| *name)
        .unwrap_or(id.as_str())
}

pub fn library() -> Vec<ContentCardData> {
    vec![
        ContentCardData::new("tokens-101", "Design tokens 101")
            .with_description("Color, spacing and type scales as named values.")
            .with_category("guide"),
        ContentCardData::new("button-anatomy", "Button anatomy")
            .with_description("Variants, states and when to use a link button.")
            .with_category("component"),
        ContentCardData::new("gate-patterns", "Gating content by role")
            .with_description("Permissions, groups, levels and project assignment.")
            .with_category("guide"),
        ContentCardData::new("loading-states", "Loading states")
            .with_description("One overlay, one message, the latest caller wins.")
            .with_category("pattern"),
        ContentCardData::new("release-notes", "Release notes")
            .with_description("What changed in the latest kit release.")
            .with_category("news"),
    ]
}
