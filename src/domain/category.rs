use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl NewCategory {
    #[must_use]
    pub fn new(name: String, slug: String, description: Option<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            slug: normalize_slug(&slug),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl UpdateCategory {
    #[must_use]
    pub fn new(name: String, slug: String, description: Option<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            slug: normalize_slug(&slug),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Lower-cases a slug and keeps only URL-safe characters.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}
