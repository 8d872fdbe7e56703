use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToastError {
    #[error("toast needs an interactive terminal on stdout")]
    NotATerminal,

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid config {}: {reason}", path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
