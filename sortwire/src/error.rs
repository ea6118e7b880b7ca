//! Error types for the sort codec

use thiserror::Error;

/// Result type alias using the codec error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the codec
#[derive(Debug, Error)]
pub enum Error {
    /// A term could not be serialized while converting a sort specification
    /// to JSON
    ///
    /// Raised only by strict-mode encoding; best-effort encoding logs and
    /// skips the term instead. Retrying with the same input fails the same
    /// way.
    #[error("could not serialize ordering term `{term}` from sort specification to JSON")]
    EncodeTerm {
        /// Description of the offending term
        term: String,
        /// The underlying serialization fault
        #[source]
        source: serde_json::Error,
    },

    /// A `direction` string did not match a recognized label
    ///
    /// Labels are matched case-sensitively; only `ASC` and `DESC` are
    /// recognized.
    #[error("unrecognized sort direction `{value}`, expected `ASC` or `DESC`")]
    UnknownDirection {
        /// The rejected label
        value: String,
    },

    /// An array element carried no string `direction` field
    #[error("ordering term at index {index} is missing a string `direction` field")]
    MissingDirection {
        /// Position of the element in the wire array
        index: usize,
    },

    /// An array element carried no string `property` field
    #[error("ordering term at index {index} is missing a string `property` field")]
    MissingProperty {
        /// Position of the element in the wire array
        index: usize,
    },

    /// The input was not parseable as JSON at all
    #[error("malformed sort JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
