use serde::Serialize;

use crate::domain::like::LikeToggle;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LikeToggleDto {
    pub liked: bool,
    pub like_count: i32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LikedDto {
    pub liked: bool,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LikeCountDto {
    pub like_count: usize,
}

impl From<LikeToggle> for LikeToggleDto {
    fn from(toggle: LikeToggle) -> Self {
        Self {
            liked: toggle.liked,
            like_count: toggle.like_count,
        }
    }
}
