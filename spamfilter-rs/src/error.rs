use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamFilterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("Model has not been trained on both classes")]
    UntrainedModel,
}

pub type Result<T> = std::result::Result<T, SpamFilterError>;
