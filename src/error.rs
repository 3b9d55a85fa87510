//! Error type shared by the client, the records and the query set.
//!
//! Nothing in this crate recovers from or translates these errors; every
//! operation hands them back to the caller as they were raised.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwapiError {
    /// SWAPI answered with a non-2xx status.
    #[error("Request to SWAPI \"{path}\" failed with status \"{status}\". Reason: {body}")]
    Request {
        path: String,
        status: u16,
        body: String,
    },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("Request to SWAPI \"{path}\" could not be sent: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// A successful response whose body is not JSON.
    #[error("Response from SWAPI \"{path}\" is not valid JSON: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Resource ids start at 1, got {0}")]
    InvalidId(u32),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl SwapiError {
    /// HTTP status of an upstream failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SwapiError::Request { status, .. } => Some(*status),
            SwapiError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, SwapiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_message_carries_path_status_and_body() {
        let err = SwapiError::Request {
            path: "/api/people/100".to_string(),
            status: 404,
            body: r#"{"detail": "Not found"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Request to SWAPI "/api/people/100" failed with status "404". Reason: {"detail": "Not found"}"#
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn invalid_id_has_no_status() {
        let err = SwapiError::InvalidId(0);
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }
}
