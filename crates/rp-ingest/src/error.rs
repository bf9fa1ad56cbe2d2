use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("ingest parse error: {0}")]
    Parse(String),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type IngestResult<T> = Result<T, IngestError>;
