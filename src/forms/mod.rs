//! Request payloads with their validation rules.

pub mod articles;
pub mod categories;
pub mod comments;
pub mod tags;
pub mod users;
