use thiserror::Error;

pub type Result<T> = std::result::Result<T, SubcheckError>;

#[derive(Debug, Error)]
pub enum SubcheckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid duration '{0}': {1}")]
    Duration(String, humantime::DurationError),

    #[error("component '{component}' failed to load: {reason}")]
    ComponentLoad { component: String, reason: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
