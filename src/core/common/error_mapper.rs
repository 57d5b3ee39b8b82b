use super::transport::ErrorKind;

/// Maps a response status to its `ErrorKind`.
///
/// Total over `u16`: codes outside the 4xx family, including the ones a
/// successful response would carry, fall back to `ServerError`.
pub fn map_error(status: u16) -> ErrorKind {
    match status {
        401 => ErrorKind::Unauthorized,
        403 => ErrorKind::Forbidden,
        404 => ErrorKind::NotFound,
        400 | 422 => ErrorKind::InvalidRequest,
        402..=499 => ErrorKind::ClientError,
        _ => ErrorKind::ServerError,
    }
}

/// Maps a failure raised by the HTTP client itself, before or while reading a response.
pub fn map_transport_error(error: &reqwest::Error) -> ErrorKind {
    if let Some(status) = error.status() {
        return map_error(status.as_u16());
    }

    if error.is_decode() {
        return ErrorKind::Deserialization;
    }

    // timeouts, refused connections, dns and body read failures
    ErrorKind::NetworkError
}
