use crate::api_client;

/// Download the full backup document as an opaque payload.
pub async fn export_backup() -> Result<Vec<u8>, String> {
    log::debug!("Exporting backup");
    api_client::get_bytes("/export").await
}

/// Upload a backup file for restore as a multipart payload.
pub async fn import_backup(file: &web_sys::File) -> Result<(), String> {
    log::debug!("Importing backup from '{}'", file.name());
    let form = web_sys::FormData::new()
        .map_err(|_| "Failed to build upload form".to_string())?;
    form.append_with_blob("file", file)
        .map_err(|_| "Failed to attach file to upload form".to_string())?;
    api_client::post_multipart("/import", form).await
}
