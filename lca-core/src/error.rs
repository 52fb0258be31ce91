/// Error types for the LCA dashboard libraries
use thiserror::Error;

/// Main error type for API and data operations
#[derive(Error, Debug)]
pub enum LcaError {
    /// HTTP request could not be sent or its body could not be read
    #[cfg(feature = "api")]
    #[error("HTTP request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a status outside [200, 300)
    #[error("{endpoint} returned status {status}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response body did not match the endpoint's record shape
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Date parsing failed
    #[error("Failed to parse date: {0}")]
    DateParse(String),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

impl LcaError {
    /// True for failures of the upstream call itself: the request could not
    /// complete or the status was not 2xx.
    pub fn is_upstream(&self) -> bool {
        match self {
            #[cfg(feature = "api")]
            LcaError::Request { .. } => true,
            LcaError::Status { .. } => true,
            _ => false,
        }
    }

    /// HTTP status code, if the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            LcaError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Type alias for Results using LcaError
pub type Result<T> = std::result::Result<T, LcaError>;

#[cfg(test)]
mod tests {
    use super::LcaError;

    #[test]
    fn status_errors_are_upstream() {
        let err = LcaError::Status {
            endpoint: "/generation".to_string(),
            status: 500,
            body: "boom".to_string(),
        };
        assert!(err.is_upstream());
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "/generation returned status 500");
    }

    #[test]
    fn date_errors_are_not_upstream() {
        let err = LcaError::DateParse("".to_string());
        assert!(!err.is_upstream());
        assert_eq!(err.status(), None);
    }
}
