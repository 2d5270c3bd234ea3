use rust_tokenizers::error::TokenizerError;
use tch::TchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HazeSentimentError {
    #[error("Endpoint not available error: {0}")]
    FileDownloadError(String),

    #[error("IO error: {0}")]
    IOError(String),

    #[error("Tch tensor error: {0}")]
    TchError(String),

    #[error("Tokenizer error: {0}")]
    TokenizerError(String),

    #[error("Invalid configuration error: {0}")]
    InvalidConfigurationError(String),

    #[error("Dataset error: {0}")]
    DatasetError(String),
}

impl From<std::io::Error> for HazeSentimentError {
    fn from(error: std::io::Error) -> Self {
        HazeSentimentError::IOError(error.to_string())
    }
}

impl From<TokenizerError> for HazeSentimentError {
    fn from(error: TokenizerError) -> Self {
        HazeSentimentError::TokenizerError(error.to_string())
    }
}

impl From<TchError> for HazeSentimentError {
    fn from(error: TchError) -> Self {
        HazeSentimentError::TchError(error.to_string())
    }
}

impl From<csv::Error> for HazeSentimentError {
    fn from(error: csv::Error) -> Self {
        HazeSentimentError::DatasetError(error.to_string())
    }
}

#[cfg(feature = "remote")]
impl From<cached_path::Error> for HazeSentimentError {
    fn from(error: cached_path::Error) -> Self {
        HazeSentimentError::FileDownloadError(error.to_string())
    }
}
