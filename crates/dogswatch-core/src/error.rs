use thiserror::Error;

#[derive(Debug, Error)]
pub enum DogswatchError {
    #[error("unrecognized action: '{0}'")]
    UnrecognizedAction(String),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, DogswatchError>;
