use crate::error::FetchError;
use crate::utils::http::fetch_bytes;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Fixed data-URI prefix. The MIME type is not inferred from the response;
/// whatever the server sends is labeled `image/jpeg`.
pub const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Directory used when the caller does not name one.
pub const DEFAULT_DIRECTORY: &str = "./public";

/// Fetch an image and return it as a base64 data URI, directly embeddable
/// in an `<img src>` attribute.
///
/// Errors from the fetch step propagate unchanged; the fetched content is
/// not validated to actually be an image.
pub async fn encode_image(url: &str) -> Result<String, FetchError> {
    let bytes = fetch_bytes(url).await?;
    Ok(to_data_uri(&bytes))
}

/// Base64-encode bytes under the fixed data-URI prefix.
pub fn to_data_uri(bytes: &[u8]) -> String {
    format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(bytes))
}

/// Fetch an image and write its raw bytes to `directory/filename`,
/// returning the resolved path.
///
/// Missing directories are created recursively; an existing file at the
/// target path is overwritten with a single whole-buffer write. The fetch
/// happens first, so a network failure leaves the filesystem untouched.
pub async fn store_image(
    url: &str,
    filename: &str,
    directory: Option<&str>,
) -> Result<String, FetchError> {
    let bytes = fetch_bytes(url).await?;

    let directory = directory.unwrap_or(DEFAULT_DIRECTORY);
    fs::create_dir_all(directory).await?;

    let file_path = resolve_target_path(filename, directory);
    fs::write(&file_path, &bytes).await?;

    Ok(file_path.to_string_lossy().into_owned())
}

/// Join directory and filename with standard path semantics. No traversal
/// sanitization; input is trusted.
pub fn resolve_target_path(filename: &str, directory: &str) -> PathBuf {
    Path::new(directory).join(filename)
}
