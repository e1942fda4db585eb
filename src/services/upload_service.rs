// Storage of uploaded post images on local disk

use chrono::Utc;
use rand::Rng;
use std::path::Path;

use crate::error::ApiResult;

/// Public path prefix uploaded files are served under
pub const UPLOADS_ROUTE: &str = "/uploads";

/// `<field>-<unix millis>-<random>.<ext>`; the extension is kept as given, only if alphanumeric
pub fn upload_filename(field_name: &str, original_name: Option<&str>) -> String {
    let suffix = rand::thread_rng().gen_range(0..1_000_000_000u32);
    let extension = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    format!(
        "{}-{}-{}{}",
        field_name,
        Utc::now().timestamp_millis(),
        suffix,
        extension
    )
}

/// Creates the uploads directory if it does not exist yet
pub async fn ensure_uploads_dir(dir: &Path) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await
}

/// Writes the image and returns the public path to it
pub async fn store_image(
    dir: &Path,
    original_name: Option<&str>,
    bytes: &[u8],
) -> ApiResult<String> {
    ensure_uploads_dir(dir).await?;

    let filename = upload_filename("image", original_name);
    tokio::fs::write(dir.join(&filename), bytes).await?;
    tracing::debug!("Stored upload {} ({} bytes)", filename, bytes.len());

    Ok(format!("{}/{}", UPLOADS_ROUTE, filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_filename_keeps_extension() {
        let name = upload_filename("image", Some("My Photo.PNG"));
        assert!(name.starts_with("image-"));
        assert!(name.ends_with(".PNG"));
        assert_eq!(name.split('-').count(), 3);
    }

    #[test]
    fn test_upload_filename_drops_odd_extensions() {
        assert!(!upload_filename("image", Some("x.p/ng")).contains('/'));
        assert!(!upload_filename("image", Some("noext")).contains('.'));
        assert!(!upload_filename("image", None).contains('.'));
    }

    #[tokio::test]
    async fn test_store_image_writes_file() {
        let dir = std::env::temp_dir().join(format!("coins-blog-{}", uuid::Uuid::new_v4()));

        let public = store_image(&dir, Some("cover.jpg"), b"jpeg-bytes").await.unwrap();
        assert!(public.starts_with("/uploads/image-"));

        let filename = public.trim_start_matches("/uploads/");
        let written = tokio::fs::read(dir.join(filename)).await.unwrap();
        assert_eq!(written, b"jpeg-bytes");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
