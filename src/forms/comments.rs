use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
/// Payload for posting a comment on an article.
pub struct CreateCommentForm {
    #[validate(length(min = 1, message = "Comment content cannot be empty"))]
    pub content: String,
}
