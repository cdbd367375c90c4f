use thiserror::Error;

/// Errors surfaced by the gateway client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status, possibly carrying a
    /// human-readable `message` in the body.
    #[error("server returned status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    /// The request never completed, or the response body was malformed.
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// The HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(err) => err.status().map(|status| status.as_u16()),
        }
    }

    /// Server-supplied error message, if the body carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            ApiError::Network(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// True when the request failed before any server response arrived.
    pub fn is_network(&self) -> bool {
        self.status().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16) -> ApiError {
        ApiError::Status {
            status,
            message: None,
        }
    }

    #[test]
    fn test_status_classification() {
        assert!(status_error(401).is_unauthorized());
        assert!(!status_error(401).is_conflict());
        assert!(status_error(409).is_conflict());
        assert!(!status_error(500).is_unauthorized());
        assert!(!status_error(500).is_network());
        assert_eq!(status_error(404).status(), Some(404));
    }

    #[test]
    fn test_server_message_passthrough() {
        let err = ApiError::Status {
            status: 422,
            message: Some("name too long".to_string()),
        };
        assert_eq!(err.server_message(), Some("name too long"));
        assert!(status_error(422).server_message().is_none());
    }
}
