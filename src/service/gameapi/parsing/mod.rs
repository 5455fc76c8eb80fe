use thiserror::Error;

pub mod lookup;

#[derive(Debug, Error)]
pub enum ParsingError {
    #[error("Response (status {status}) is not valid JSON: {source}")]
    NotJson {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unexpected response shape: {0}")]
    InvalidShape(#[source] serde_json::Error),
}
