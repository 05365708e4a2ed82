use thiserror::Error;

/// Main error type for rangebench
#[derive(Error, Debug)]
pub enum RangebenchError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed input line (wrong token count, non-numeric field, bad header)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A query index present in the truth set has no entry in the result set
    #[error("Result set is missing query index {0}")]
    MissingQuery(usize),

    /// The engine reported an ID that is not in the true answer set.
    /// This is a soundness violation, not a quality problem; scoring aborts.
    #[error("Query {query}: reported set contains a false positive (true positives {tp}, reported {reported})")]
    FalsePositive {
        query: usize,
        tp: usize,
        reported: usize,
    },
}

/// Convenient Result type using RangebenchError
pub type Result<T> = std::result::Result<T, RangebenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RangebenchError::Parse("line 3: expected 3 fields".to_string());
        assert!(err.to_string().contains("Parse error"));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RangebenchError = io_err.into();
        assert!(matches!(err, RangebenchError::Io(_)));
    }

    #[test]
    fn test_false_positive_display() {
        let err = RangebenchError::FalsePositive {
            query: 7,
            tp: 2,
            reported: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("Query 7"));
        assert!(msg.contains("false positive"));
    }
}
