use std::path::Path;

use fractic_server_error::ServerError;
use tracing::debug;

use crate::errors::ReadError;

pub(crate) async fn read_payload<P>(path: P) -> Result<String, ServerError>
where
    P: AsRef<Path> + Send,
{
    let path = path.as_ref();
    debug!(path = %path.display(), "reading payload file");
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ReadError::with_debug(&e))
}

/// Treats empty strings as absent, since the API sends `""` for unset text.
pub(crate) fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}
