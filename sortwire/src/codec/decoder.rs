//! Sort specification decoder
//!
//! Reads a JSON tree and produces an ordered [`SortSpecification`]. An array
//! root decodes term by term, preserving array order; any other root (object,
//! scalar, `null`) means "no sort specified" and decodes to `None` rather
//! than an error.
//!
//! Per element, only the `direction` and `property` fields are read; extra
//! fields are ignored and field order is insignificant. Decode failures
//! propagate immediately and no partial specification is ever returned.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::sort::{Direction, OrderingTerm, SortSpecification};

/// Decoder from a JSON tree to a [`SortSpecification`]
///
/// Stateless; each call is a pure, single-pass transformation over its input.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use sortwire::codec::Decoder;
///
/// let decoder = Decoder::new();
///
/// let spec = decoder
///     .decode(&json!([{"direction": "ASC", "property": "name"}]))?
///     .expect("array input yields a specification");
/// assert_eq!(spec.terms()[0].property(), "name");
///
/// // A non-array root means "no sort specified".
/// assert_eq!(decoder.decode(&json!({"foo": "bar"}))?, None);
/// # Ok::<(), sortwire::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder;

impl Decoder {
    /// Create a new decoder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Decode a JSON tree into an ordered specification
    ///
    /// Returns `Ok(None)` when the root is not an array. An empty array
    /// decodes to `Ok(Some(..))` with an empty specification; the two
    /// outcomes are distinct.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownDirection`] when an element's `direction` string is
    ///   not exactly `ASC` or `DESC`
    /// - [`Error::MissingDirection`] when an element has no string
    ///   `direction` field (elements that are not objects fall in here)
    /// - [`Error::MissingProperty`] when an element has no string `property`
    ///   field
    pub fn decode(&self, value: &Value) -> Result<Option<SortSpecification>> {
        let Value::Array(elements) = value else {
            return Ok(None);
        };

        let mut terms = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            terms.push(Self::decode_term(index, element)?);
        }
        Ok(Some(SortSpecification::by(terms)))
    }

    /// Parse a JSON string, then decode it
    ///
    /// Structurally invalid input fails with [`Error::Parse`] before any
    /// decode logic runs.
    pub fn decode_str(&self, input: &str) -> Result<Option<SortSpecification>> {
        let value: Value = serde_json::from_str(input)?;
        self.decode(&value)
    }

    fn decode_term(index: usize, element: &Value) -> Result<OrderingTerm> {
        let direction = match element.get("direction") {
            Some(Value::String(label)) => label.parse::<Direction>()?,
            _ => return Err(Error::MissingDirection { index }),
        };
        let property = match element.get("property") {
            Some(Value::String(property)) => property.clone(),
            _ => return Err(Error::MissingProperty { index }),
        };
        Ok(OrderingTerm::new(property, direction))
    }
}
