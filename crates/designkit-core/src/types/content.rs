//! Content cards, favorites and visit records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display data for a content card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCardData {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl ContentCardData {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            category: None,
            thumbnail_url: None,
            href: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// A content item the user starred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFavorite {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub favorited_at: DateTime<Utc>,
}

impl ContentFavorite {
    pub fn from_card(card: &ContentCardData, favorited_at: DateTime<Utc>) -> Self {
        Self {
            id: card.id.clone(),
            title: card.title.clone(),
            category: card.category.clone(),
            href: card.href.clone(),
            favorited_at,
        }
    }
}

/// A content card stamped with the time it was opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentlyVisitedContent {
    #[serde(flatten)]
    pub content: ContentCardData,
    pub visited_at: DateTime<Utc>,
}

impl RecentlyVisitedContent {
    pub fn new(content: ContentCardData, visited_at: DateTime<Utc>) -> Self {
        Self {
            content,
            visited_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.content.id
    }
}
