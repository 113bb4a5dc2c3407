use serde::Deserialize;
use validator::Validate;

use crate::domain::category::{NewCategory, UpdateCategory};

#[derive(Deserialize, Validate)]
/// Payload for creating or replacing a category.
pub struct CategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub slug: String,
    pub description: Option<String>,
}

impl From<&CategoryForm> for NewCategory {
    fn from(form: &CategoryForm) -> Self {
        NewCategory::new(
            form.name.clone(),
            form.slug.clone(),
            form.description.clone(),
        )
    }
}

impl From<&CategoryForm> for UpdateCategory {
    fn from(form: &CategoryForm) -> Self {
        UpdateCategory::new(
            form.name.clone(),
            form.slug.clone(),
            form.description.clone(),
        )
    }
}
