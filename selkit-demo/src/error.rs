use thiserror::Error;

use selkit::ConfigError;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid widget configuration: {0}")]
    Config(#[from] ConfigError),
}
