use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("no control with id `{0}`")]
    NoSuchControl(String),
    #[error("control `{0}` has a different type")]
    WrongControlType(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
