use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("generation API returned status {status}")]
    BadStatus { status: u16 },

    #[error("generation API returned an empty response")]
    EmptyResponse,

    #[error("generation retries exhausted after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}
