/// Failure of the batch call itself, as opposed to a per-statement error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The statements could not be turned into a store request.
    #[error("Invalid batch request: {0}")]
    InvalidRequest(String),

    /// The request did not complete (network, throttling, auth, service error).
    #[error("Batch request failed: {0}")]
    Request(String),
}
