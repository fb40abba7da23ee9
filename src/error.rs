use thiserror::Error;

/// Errors raised before any clustering work starts.
///
/// Degenerate inputs (tiny groups, oversized `min_samples`, zero distances)
/// are not errors; they are clamped or handled with fixed outputs.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClusterError {
    /// A configuration value is outside its accepted domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A point carries NaN or an infinite coordinate.
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },

    /// A coordinate is finite but too large for squared distances.
    #[error("point {index} has a coordinate beyond +/-{limit:e} ({x}, {y})")]
    CoordinateOutOfRange {
        index: usize,
        x: f64,
        y: f64,
        limit: f64,
    },

    /// The log2 transform rejected every input point.
    #[error("log2 transform excluded all {excluded} points (coordinates must be > 0)")]
    EmptyAfterTransform { excluded: usize },
}

impl ClusterError {
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = ClusterError::invalid_parameter("max_k must be >= 1, got 0");
        assert_eq!(err.to_string(), "invalid parameter: max_k must be >= 1, got 0");

        let err = ClusterError::NonFiniteCoordinate {
            index: 3,
            x: f64::NAN,
            y: 1.0,
        };
        assert!(err.to_string().starts_with("point 3 has a non-finite coordinate"));

        let err = ClusterError::CoordinateOutOfRange {
            index: 1,
            x: 0.0,
            y: 1e200,
            limit: 1e150,
        };
        assert!(err.to_string().starts_with("point 1 has a coordinate beyond +/-1e150"));
    }
}
