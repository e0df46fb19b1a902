use derive_more::Display;

/// Failures surfaced to the host: a rejected config or a commit callback that threw.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum SyncError {
    #[display(fmt = "Invalid Config: {}", _0)]
    InvalidConfig(String),
    #[display(fmt = "Config Parse Error: {}", _0)]
    ConfigParse(String),
    #[display(fmt = "Callback Error: {}", _0)]
    Callback(String),
}

impl std::error::Error for SyncError {}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::ConfigParse(err.to_string())
    }
}

pub type SyncResult<T> = Result<T, SyncError>;
