//! Sort specification encoder
//!
//! Converts a [`SortSpecification`] into its JSON array wire form, one
//! object per ordering term, preserving term order.
//!
//! Terms are serialized into a buffer and the array is committed only after
//! the last term has been visited, so a strict-mode failure yields no output
//! at all rather than a truncated array.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::diagnostics::{DiagnosticLogger, TracingLogger};
use crate::error::{Error, Result};
use crate::sort::SortSpecification;

/// Failure policy for encoding
///
/// The mode is an explicit caller choice made at encoder construction; it is
/// never inferred from logger configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodeMode {
    /// Abort the whole encode call on the first term that fails to serialize
    ///
    /// Callers that rely on the output being complete want this mode.
    #[default]
    Strict,
    /// Skip terms that fail to serialize, logging each skip
    ///
    /// The emitted array may contain fewer elements than the specification
    /// has terms.
    BestEffort,
}

/// Encoder from [`SortSpecification`] to the JSON array wire form
///
/// Encoders are cheap to construct and safe to share across threads; each
/// call is independent.
///
/// # Example
///
/// ```rust
/// use sortwire::codec::Encoder;
/// use sortwire::sort::{OrderingTerm, SortSpecification};
///
/// let spec = SortSpecification::ascending("name")
///     .and(OrderingTerm::descending("age"));
///
/// let wire = Encoder::strict().encode(&spec)?;
/// assert_eq!(wire[0]["property"], "name");
/// assert_eq!(wire[1]["direction"], "DESC");
/// # Ok::<(), sortwire::error::Error>(())
/// ```
#[derive(Clone)]
pub struct Encoder {
    mode: EncodeMode,
    logger: Arc<dyn DiagnosticLogger>,
}

impl Encoder {
    /// Create an encoder with the given failure policy and the default
    /// `tracing`-backed logger
    #[must_use]
    pub fn new(mode: EncodeMode) -> Self {
        Self {
            mode,
            logger: Arc::new(TracingLogger::new()),
        }
    }

    /// Create an encoder that aborts on the first failing term
    #[must_use]
    pub fn strict() -> Self {
        Self::new(EncodeMode::Strict)
    }

    /// Create an encoder that skips and logs failing terms
    #[must_use]
    pub fn best_effort() -> Self {
        Self::new(EncodeMode::BestEffort)
    }

    /// Replace the diagnostic logger
    ///
    /// Best-effort encoding reports skipped terms through this logger; tests
    /// substitute a capturing implementation to observe the skip path.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn DiagnosticLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// The failure policy this encoder applies
    #[must_use]
    pub fn mode(&self) -> EncodeMode {
        self.mode
    }

    /// Encode a specification as a JSON array, one object per term
    ///
    /// In [`EncodeMode::Strict`], the first term that fails to serialize
    /// aborts the call with [`Error::EncodeTerm`] and nothing is emitted. In
    /// [`EncodeMode::BestEffort`], failing terms are skipped; if the logger
    /// reports error level enabled, each skip is logged with the term's
    /// description and the underlying cause.
    pub fn encode(&self, spec: &SortSpecification) -> Result<Value> {
        self.encode_terms(spec.terms())
    }

    /// Encode a specification directly to a JSON string
    pub fn encode_to_string(&self, spec: &SortSpecification) -> Result<String> {
        let value = self.encode(spec)?;
        Ok(serde_json::to_string(&value)?)
    }

    fn encode_terms<T>(&self, terms: &[T]) -> Result<Value>
    where
        T: Serialize + fmt::Display,
    {
        let mut encoded = Vec::with_capacity(terms.len());
        for term in terms {
            match serde_json::to_value(term) {
                Ok(value) => encoded.push(value),
                Err(source) => match self.mode {
                    EncodeMode::BestEffort => {
                        if self.logger.error_enabled() {
                            self.logger.error(
                                &format!("could not serialize ordering term `{term}`"),
                                &source,
                            );
                        }
                    }
                    EncodeMode::Strict => {
                        return Err(Error::EncodeTerm {
                            term: term.to_string(),
                            source,
                        });
                    }
                },
            }
        }
        Ok(Value::Array(encoded))
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::strict()
    }
}

impl fmt::Debug for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde::Serializer;
    use serde_json::json;

    use super::*;
    use crate::sort::OrderingTerm;

    struct CapturingLogger {
        enabled: bool,
        entries: Mutex<Vec<String>>,
    }

    impl CapturingLogger {
        fn enabled() -> Arc<Self> {
            Arc::new(Self {
                enabled: true,
                entries: Mutex::new(Vec::new()),
            })
        }

        fn disabled() -> Arc<Self> {
            Arc::new(Self {
                enabled: false,
                entries: Mutex::new(Vec::new()),
            })
        }

        fn entries(&self) -> Vec<String> {
            self.entries.lock().unwrap().clone()
        }
    }

    impl DiagnosticLogger for CapturingLogger {
        fn error_enabled(&self) -> bool {
            self.enabled
        }

        fn error(&self, message: &str, cause: &(dyn std::error::Error + 'static)) {
            self.entries.lock().unwrap().push(format!("{message}: {cause}"));
        }
    }

    /// Term stand-in whose serialization can be forced to fail
    enum Probe {
        Good(OrderingTerm),
        Broken(&'static str),
    }

    impl Serialize for Probe {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                Self::Good(term) => term.serialize(serializer),
                Self::Broken(_) => Err(serde::ser::Error::custom("writer fault")),
            }
        }
    }

    impl fmt::Display for Probe {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Good(term) => write!(f, "{term}"),
                Self::Broken(property) => write!(f, "{property}: ASC"),
            }
        }
    }

    #[test]
    fn test_default_mode_is_strict() {
        assert_eq!(Encoder::default().mode(), EncodeMode::Strict);
        assert_eq!(EncodeMode::default(), EncodeMode::Strict);
    }

    #[test]
    fn test_encode_preserves_term_order() {
        let spec = SortSpecification::ascending("name").and(OrderingTerm::descending("age"));
        let wire = Encoder::strict().encode(&spec).unwrap();
        assert_eq!(
            wire,
            json!([
                {"property": "name", "direction": "ASC"},
                {"property": "age", "direction": "DESC"},
            ])
        );
    }

    #[test]
    fn test_encode_empty_specification() {
        let wire = Encoder::strict().encode(&SortSpecification::new()).unwrap();
        assert_eq!(wire, json!([]));
    }

    #[test]
    fn test_encode_to_string() {
        let spec = SortSpecification::descending("age");
        let wire = Encoder::strict().encode_to_string(&spec).unwrap();
        assert_eq!(wire, r#"[{"direction":"DESC","property":"age"}]"#);
    }

    #[test]
    fn test_best_effort_skips_failing_term_and_logs() {
        let logger = CapturingLogger::enabled();
        let encoder = Encoder::best_effort().with_logger(logger.clone());

        let terms = [
            Probe::Good(OrderingTerm::ascending("name")),
            Probe::Broken("age"),
            Probe::Good(OrderingTerm::ascending("id")),
        ];
        let wire = encoder.encode_terms(&terms).unwrap();

        // Only the terms that serialized appear, in their original order.
        assert_eq!(
            wire,
            json!([
                {"property": "name", "direction": "ASC"},
                {"property": "id", "direction": "ASC"},
            ])
        );

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("age: ASC"));
        assert!(entries[0].contains("writer fault"));
    }

    #[test]
    fn test_best_effort_with_disabled_logger_skips_silently() {
        let logger = CapturingLogger::disabled();
        let encoder = Encoder::best_effort().with_logger(logger.clone());

        let terms = [Probe::Broken("age"), Probe::Good(OrderingTerm::ascending("id"))];
        let wire = encoder.encode_terms(&terms).unwrap();

        assert_eq!(wire, json!([{"property": "id", "direction": "ASC"}]));
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_best_effort_logs_nothing_when_every_term_serializes() {
        let logger = CapturingLogger::enabled();
        let encoder = Encoder::best_effort().with_logger(logger.clone());

        let spec = SortSpecification::ascending("name");
        encoder.encode(&spec).unwrap();
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_strict_aborts_on_failing_term_with_no_output() {
        let logger = CapturingLogger::enabled();
        let encoder = Encoder::strict().with_logger(logger.clone());

        let terms = [
            Probe::Good(OrderingTerm::ascending("name")),
            Probe::Broken("age"),
        ];
        let err = encoder.encode_terms(&terms).unwrap_err();

        assert!(matches!(err, Error::EncodeTerm { ref term, .. } if term == "age: ASC"));
        // Strict failures raise; nothing is logged through the diagnostic path.
        assert!(logger.entries().is_empty());
    }
}
