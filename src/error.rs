use std::fmt;

/// Custom error type for IBM Cloud operations
#[derive(Debug)]
pub enum CloudError {
    /// Missing or invalid configuration (environment, CLI input)
    Config(String),
    /// API key missing, malformed or rejected by IAM
    Authentication(String),
    /// Token expired or lacks permission during an operation
    Authorization { status: u16, message: String },
    /// Named resource does not exist
    NotFound(String),
    /// Server broke the pagination protocol (e.g. repeated marker)
    Pagination(String),
    /// Connectivity failure, not retried
    Network(reqwest::Error),
    /// API returned an unexpected error response
    Api { status: u16, message: String },
    /// JSON parsing error
    Json(String),
    /// Terminal or serialization I/O failure
    Io(String),
}

impl fmt::Display for CloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CloudError::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            CloudError::Authorization { status, message } => {
                write!(f, "Not authorized (status {}): {}", status, message)
            }
            CloudError::NotFound(msg) => write!(f, "{}", msg),
            CloudError::Pagination(msg) => write!(f, "Pagination error: {}", msg),
            CloudError::Network(e) => write!(f, "HTTP request failed: {}", e),
            CloudError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CloudError::Json(msg) => write!(f, "JSON error: {}", msg),
            CloudError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for CloudError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CloudError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CloudError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CloudError::Json(err.to_string())
        } else {
            CloudError::Network(err)
        }
    }
}

impl From<serde_json::Error> for CloudError {
    fn from(err: serde_json::Error) -> Self {
        CloudError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for CloudError {
    fn from(err: serde_yml::Error) -> Self {
        CloudError::Io(err.to_string())
    }
}

impl From<std::io::Error> for CloudError {
    fn from(err: std::io::Error) -> Self {
        CloudError::Io(err.to_string())
    }
}

impl From<dialoguer::Error> for CloudError {
    fn from(err: dialoguer::Error) -> Self {
        CloudError::Io(err.to_string())
    }
}

/// Result type alias for IBM Cloud operations
pub type Result<T> = std::result::Result<T, CloudError>;
