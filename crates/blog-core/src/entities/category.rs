//! Category entity

use chrono::{DateTime, Utc};

use crate::value_objects::CategoryId;

/// Category entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(id: CategoryId, name: String, slug: String, description: Option<String>) -> Self {
        Self {
            id,
            name,
            slug,
            description,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> CategorySummary {
        CategorySummary {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
        }
    }
}

/// Category reference embedded in public post views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}
