use thiserror::Error;

/// Failures at the persistence boundary. None of these are fatal to the dashboard.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage for '{key}' is unavailable")]
    Unavailable {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stored data for '{key}' is malformed")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
