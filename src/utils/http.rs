use crate::error::FetchError;

/// Fetch the raw bytes behind a URL with a single GET request.
///
/// The whole response body is read into memory before returning. One
/// attempt, no retry, no client-side timeout; redirects follow reqwest's
/// default policy. A non-success status is reported as an error instead of
/// handing back the error page body.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
    let client = reqwest::Client::new();

    let response = client
        .get(url)
        .header("User-Agent", get_user_agent())
        .send()
        .await
        .map_err(|e| FetchError::Transport {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::UnsuccessfulStatus {
            url: url.to_string(),
            status,
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Transport {
            url: url.to_string(),
            source: e,
        })?;

    Ok(bytes.to_vec())
}

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    "ImgFetch"
}
