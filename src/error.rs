use std::fmt;

/// Central error types for the City Explorer client
#[derive(Debug)]
pub enum AppError {
    /// Transport error from the HTTP stack (connection, TLS, decoding)
    Http(reqwest::Error),
    /// Backend answered with a non-success status
    Backend { status: u16, message: String },
    /// Validation error (e.g. invalid inputs)
    Validation(String),
    /// Resource not found
    NotFound(String),
    /// General error
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Http(e) => write!(f, "HTTP error: {}", e),
            AppError::Backend { status, message } => {
                write!(f, "Backend error ({}): {}", status, message)
            }
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Http(e)
    }
}

/// User-friendly error messages for UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http(_) => {
                "Could not reach the server. Please check your connection.".to_string()
            }
            AppError::Backend { .. } => {
                "The server could not process the request. Please try again.".to_string()
            }
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(msg) => format!("{} was not found.", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }
}
