use thiserror::Error;

pub type LegendResult<T> = Result<T, LegendError>;

#[derive(Debug, Error)]
pub enum LegendError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
