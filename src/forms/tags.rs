use serde::Deserialize;
use validator::Validate;

use crate::domain::tag::{NewTag, UpdateTag};

#[derive(Deserialize, Validate)]
/// Payload for creating or replacing a tag.
pub struct TagForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub slug: String,
}

impl From<&TagForm> for NewTag {
    fn from(form: &TagForm) -> Self {
        NewTag::new(form.name.clone(), form.slug.clone())
    }
}

impl From<&TagForm> for UpdateTag {
    fn from(form: &TagForm) -> Self {
        UpdateTag::new(form.name.clone(), form.slug.clone())
    }
}
