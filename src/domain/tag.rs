use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::normalize_slug;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTag {
    pub name: String,
    pub slug: String,
}

impl NewTag {
    #[must_use]
    pub fn new(name: String, slug: String) -> Self {
        Self {
            name: name.trim().to_string(),
            slug: normalize_slug(&slug),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateTag {
    pub name: String,
    pub slug: String,
}

impl UpdateTag {
    #[must_use]
    pub fn new(name: String, slug: String) -> Self {
        Self {
            name: name.trim().to_string(),
            slug: normalize_slug(&slug),
        }
    }
}
