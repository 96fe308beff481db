use std::fmt;

/// Custom error types for AIS processing
#[derive(Debug)]
pub enum AisError {
    /// I/O errors
    Io(std::io::Error),
    /// CSV deserialization errors
    #[cfg(feature = "csv")]
    Csv(csv::Error),
    /// JSON parse errors
    Json(serde_json::Error),
    /// Row-level parse errors with context
    Parse(String),
    /// Export/artifact errors
    Export(String),
}

impl fmt::Display for AisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AisError::Io(err) => write!(f, "I/O error: {}", err),
            #[cfg(feature = "csv")]
            AisError::Csv(err) => write!(f, "CSV error: {}", err),
            AisError::Json(err) => write!(f, "JSON error: {}", err),
            AisError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AisError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for AisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AisError::Io(err) => Some(err),
            #[cfg(feature = "csv")]
            AisError::Csv(err) => Some(err),
            AisError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AisError {
    fn from(err: std::io::Error) -> Self {
        AisError::Io(err)
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for AisError {
    fn from(err: csv::Error) -> Self {
        AisError::Csv(err)
    }
}

impl From<serde_json::Error> for AisError {
    fn from(err: serde_json::Error) -> Self {
        AisError::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, AisError>;
