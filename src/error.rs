/// Error type for session write operations.
///
/// Reads never fail: absent or malformed cookies are simply not session data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The value could not be serialized for cookie storage.
    #[error("failed to encode session value: {0}")]
    Encode(#[from] serde_json::Error),
}
