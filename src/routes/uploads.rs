//! Shared multipart image handling for avatar and admin uploads.

use std::path::Path;

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Serialize;
use uuid::Uuid;

#[derive(MultipartForm)]
pub struct ImageUploadForm {
    #[multipart(limit = "5MB")]
    pub image: TempFile,
}

#[derive(MultipartForm)]
pub struct AvatarUploadForm {
    #[multipart(limit = "5MB")]
    pub avatar: TempFile,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadedImage {
    pub url: String,
    pub filename: String,
    pub size: usize,
    pub mimetype: String,
}

/// True when the part announced an image content type.
pub fn is_image(file: &TempFile) -> bool {
    file.content_type
        .as_ref()
        .is_some_and(|mime| mime.to_string().starts_with("image/"))
}

/// Writes the uploaded file under `<uploads_dir>/images/` with a generated
/// name, keeping the original extension.
pub fn save_image(file: &TempFile, uploads_dir: &str) -> std::io::Result<UploadedImage> {
    let extension = file
        .file_name
        .as_deref()
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_else(|| "bin".to_string());

    let filename = format!("{}.{extension}", Uuid::new_v4());
    let dir = Path::new(uploads_dir).join("images");
    std::fs::create_dir_all(&dir)?;
    std::fs::copy(file.file.path(), dir.join(&filename))?;

    Ok(UploadedImage {
        url: format!("/uploads/images/{filename}"),
        filename,
        size: file.size,
        mimetype: file
            .content_type
            .as_ref()
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string()),
    })
}
