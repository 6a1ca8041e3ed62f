use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationApiError {
    /// Non-2xx response; `detail` is the server's `{detail}` field when present.
    #[error("registration api rejected request with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentApiError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(String),

    #[error("content api rejected request with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletConnectorError {
    #[error("wallet connection cancelled by user")]
    Cancelled,

    #[error("no wallet available")]
    Unavailable,

    #[error("wallet connector failed: {0}")]
    Failed(String),
}
