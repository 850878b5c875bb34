use thiserror::Error;

/// Errors surfaced by the cache repository
///
/// Each public operation raises exactly one kind. Backing store failure
/// detail goes to the error logger and never crosses this boundary, so the
/// operation variants carry no payload.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Unable to save data to the cache")]
    Write,

    #[error("Unable to fetch data from the cache")]
    Read,

    #[error("Unable to delete data from the cache by key")]
    Delete,

    #[error("Unable to delete data from the cache by tags")]
    TagDelete,

    #[error("Unable to flush the cache")]
    Flush,
}

impl CacheError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let error = CacheError::invalid_argument("tags cannot be empty");
        assert_eq!(error.to_string(), "Invalid argument: tags cannot be empty");
    }

    #[test]
    fn test_operation_errors_hide_detail() {
        assert_eq!(
            CacheError::Write.to_string(),
            "Unable to save data to the cache"
        );
        assert_eq!(
            CacheError::Read.to_string(),
            "Unable to fetch data from the cache"
        );
        assert_eq!(
            CacheError::Delete.to_string(),
            "Unable to delete data from the cache by key"
        );
        assert_eq!(
            CacheError::TagDelete.to_string(),
            "Unable to delete data from the cache by tags"
        );
        assert_eq!(CacheError::Flush.to_string(), "Unable to flush the cache");
    }
}
