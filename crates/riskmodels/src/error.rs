//! Error types for schema construction and wire conversion.

use thiserror::Error;

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors raised while constructing schema records or converting them to and
/// from their JSON wire form.
///
/// Every failure is per-record and recoverable; whether to skip a malformed
/// record or abort an entire response parse is the caller's policy.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A parallel column does not line up with the column defining the
    /// record's length.
    #[error(
        "{record}: `{field}` has {actual} entries, expected {expected} to match `{reference}`"
    )]
    ParallelLengthMismatch {
        /// Record type being constructed
        record: &'static str,
        /// Offending column
        field: &'static str,
        /// Column that defines the expected length
        reference: &'static str,
        /// Expected number of entries
        expected: usize,
        /// Actual number of entries
        actual: usize,
    },

    /// A covariance matrix has a ragged row.
    #[error(
        "covariance matrix row {row} has {actual} entries, expected {expected} (matrix must be square)"
    )]
    CovarianceNotSquare {
        /// Index of the ragged row
        row: usize,
        /// Expected row length (the matrix dimension)
        expected: usize,
        /// Actual row length
        actual: usize,
    },

    /// A covariance matrix dimension disagrees with the factor count.
    #[error("covariance matrix dimension {dimension} does not match factor count {factors}")]
    CovarianceDimensionMismatch {
        /// Matrix dimension
        dimension: usize,
        /// Number of factors in the accompanying factor data
        factors: usize,
    },

    /// A string does not name a known enum literal.
    #[error("unrecognized {enum_name} literal: `{literal}`")]
    UnknownLiteral {
        /// Enum type being parsed
        enum_name: &'static str,
        /// The offending literal
        literal: String,
    },

    /// The reported result count disagrees with the result sequence.
    #[error("totalResults is {total} but the response carries {actual} results")]
    TotalResultsMismatch {
        /// Reported `totalResults`
        total: usize,
        /// Actual number of results
        actual: usize,
    },

    /// JSON deserialization failed for a record.
    #[error("failed to deserialize {record}: {source}")]
    Deserialize {
        /// Record type being deserialized
        record: &'static str,
        /// Underlying engine error
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization failed for a record.
    #[error("failed to serialize {record}: {source}")]
    Serialize {
        /// Record type being serialized
        record: &'static str,
        /// Underlying engine error
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err = SchemaError::ParallelLengthMismatch {
            record: "RiskModelAssetData",
            field: "specificRisk",
            reference: "universe",
            expected: 3,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("RiskModelAssetData"));
        assert!(msg.contains("specificRisk"));
        assert!(msg.contains("expected 3"));
    }

    #[test]
    fn test_unknown_literal_message() {
        let err = SchemaError::UnknownLiteral {
            enum_name: "RiskModelTerm",
            literal: "Quarterly".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unrecognized RiskModelTerm literal: `Quarterly`"
        );
    }
}
