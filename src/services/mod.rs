pub mod articles;
pub mod categories;
pub mod comments;
pub mod errors;
pub mod likes;
pub mod sitemap;
pub mod tags;
pub mod users;

pub use errors::{ServiceError, ServiceResult};

use crate::domain::auth::AuthenticatedUser;

/// Guards operations reserved for administrators.
pub(crate) fn ensure_admin(user: &AuthenticatedUser) -> ServiceResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(ServiceError::Forbidden("Admin access required".into()))
    }
}
