//! Error types shared across the viewer.

use thiserror::Error;

/// Result alias for fallible viewer operations.
pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    /// Axis index outside {0, 1, 2}.
    #[error("invalid axis index {0}, expected 0, 1 or 2")]
    InvalidAxis(i64),

    /// Colour or depth parameter that cannot be used.
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    /// Model id not present in the loaded catalog.
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// Point cloud text that could not be parsed.
    #[error("point cloud line {line}: {reason}")]
    PointCloudParse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("LAS error: {0}")]
    Las(#[from] las::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_axis_message() {
        let err = ViewerError::InvalidAxis(7);
        assert_eq!(format!("{err}"), "invalid axis index 7, expected 0, 1 or 2");
    }

    #[test]
    fn parse_error_message_names_line() {
        let err = ViewerError::PointCloudParse {
            line: 12,
            reason: "invalid y coordinate: abc".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "point cloud line 12: invalid y coordinate: abc"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ViewerError = io_err.into();
        assert!(matches!(err, ViewerError::Io(_)));
    }
}
