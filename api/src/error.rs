//! Failure taxonomy for backend calls. The UI distinguishes exactly two
//! situations: a record that does not exist, and everything else. Neither is
//! retried; the message is surfaced as-is.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("the requested record was not found")]
    NotFound,

    #[error("the server responded with status {0}")]
    Status(u16),

    #[error("couldn't reach the analysis backend: {0}")]
    Network(#[source] reqwest::Error),

    #[error("the backend response didn't match the expected shape: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Map a non-success HTTP status onto the taxonomy.
    pub(crate) fn from_status(status: u16) -> Self {
        if status == 404 {
            ApiError::NotFound
        } else {
            ApiError::Status(status)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_maps_to_not_found() {
        assert!(ApiError::from_status(404).is_not_found());
    }

    #[test]
    fn other_statuses_keep_their_code() {
        match ApiError::from_status(503) {
            ApiError::Status(code) => assert_eq!(code, 503),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            ApiError::NotFound.to_string(),
            "the requested record was not found"
        );
        assert_eq!(
            ApiError::Status(500).to_string(),
            "the server responded with status 500"
        );
    }
}
