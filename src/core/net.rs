use crate::core::PeopleError;

/// Read the response body as text.
/// In `test-mode`, if `PP_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _identifier: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if std::env::var("PP_RECORD").ok().as_deref() == Some("1")
            && let Err(e) =
                crate::core::fixtures::record_fixture(_endpoint, _identifier, _ext, &text)
        {
            eprintln!("PP_RECORD: failed to write fixture for {_identifier}: {e}");
        }
    }

    Ok(text)
}

/// Map a non-2xx status to the matching error variant.
pub(crate) fn status_error(status: u16, url: &str) -> PeopleError {
    let url = url.to_string();
    match status {
        429 => PeopleError::RateLimited { url },
        500..=599 => PeopleError::ServerError { status, url },
        _ => PeopleError::Status { status, url },
    }
}
