use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpshubError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fetch failed with status {0}")]
    FetchStatus(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Unknown time zone: {0}")]
    Timezone(String),

    #[error("No card at position {0}")]
    UnknownPosition(usize),
}

pub type Result<T> = std::result::Result<T, OpshubError>;
