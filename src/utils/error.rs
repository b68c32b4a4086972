use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Setup cancelled by user")]
    Cancelled,

    #[error("Terminal I/O error: {0}")]
    TerminalError(#[from] std::io::Error),

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load {}: {message}", .path.display())]
    LoadError { path: PathBuf, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SetupError {
    /// 給操作員看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SetupError::Cancelled => "Setup cancelled by user.".to_string(),
            SetupError::TerminalError(e) => format!("Could not use the terminal: {}", e),
            SetupError::CreateDirError { source, .. } | SetupError::WriteError { source, .. } => {
                format!("Error saving configuration: {}", source)
            }
            SetupError::LoadError { message, .. } => {
                format!("Error loading configuration: {}", message)
            }
            SetupError::SerializationError(e) => format!("Error encoding configuration: {}", e),
            SetupError::InvalidValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SetupError::Cancelled => "Run the setup again when you are ready",
            SetupError::TerminalError(_) => "Run the setup from an interactive terminal",
            SetupError::CreateDirError { .. } => {
                "Check that no file is in the way of the config directory and that it is writable"
            }
            SetupError::WriteError { .. } => "Check file permissions and free disk space",
            SetupError::LoadError { .. } => "Delete the file and run the setup again",
            SetupError::SerializationError(_) => "Please try again",
            SetupError::InvalidValueError { .. } => "Correct the value and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;
