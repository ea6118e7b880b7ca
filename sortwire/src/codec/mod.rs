//! Bidirectional codec between a sort specification and its JSON wire form
//!
//! Two independent, stateless components share the wire format:
//!
//! - [`Encoder`] walks an ordered specification and emits a JSON array, one
//!   object per ordering term
//! - [`Decoder`] reads a JSON tree; an array root decodes to an ordered
//!   specification, any other root means "no sort specified" and decodes to
//!   `None`
//!
//! The wire form:
//!
//! ```json
//! [{"property":"name","direction":"ASC"},{"property":"age","direction":"DESC"}]
//! ```
//!
//! Field order inside each object is insignificant and extra fields are
//! ignored on decode. Concurrent calls on independent inputs need no
//! coordination; neither component retains the values it is given.
//!
//! # Example
//!
//! ```rust
//! use sortwire::codec::{Decoder, Encoder};
//! use sortwire::sort::{OrderingTerm, SortSpecification};
//!
//! let spec = SortSpecification::ascending("name")
//!     .and(OrderingTerm::descending("age"));
//!
//! let wire = Encoder::strict().encode(&spec)?;
//! let decoded = Decoder::new().decode(&wire)?;
//! assert_eq!(decoded, Some(spec));
//! # Ok::<(), sortwire::error::Error>(())
//! ```

mod decoder;
mod encoder;

pub use decoder::Decoder;
pub use encoder::{EncodeMode, Encoder};

/// Serde adapter for `Option<SortSpecification>` struct fields
///
/// Mirrors [`Decoder::decode`]: wire values that are not arrays (including
/// `null`) deserialize to `None` instead of failing. Annotate fields with
/// `#[serde(default, with = "sortwire::codec::lenient")]` so that an absent
/// field also lands on `None`. `None` serializes back as `null`.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use sortwire::sort::SortSpecification;
///
/// #[derive(Serialize, Deserialize)]
/// struct ListRequest {
///     #[serde(default, with = "sortwire::codec::lenient")]
///     sort: Option<SortSpecification>,
/// }
///
/// let request: ListRequest = serde_json::from_str(r#"{"sort":{"not":"an array"}}"#).unwrap();
/// assert!(request.sort.is_none());
/// ```
pub mod lenient {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    use crate::codec::Decoder;
    use crate::sort::SortSpecification;

    /// Deserialize a wire value, treating a non-array as "no sort specified"
    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> std::result::Result<Option<SortSpecification>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Decoder::new().decode(&value).map_err(serde::de::Error::custom)
    }

    /// Serialize the specification as its array wire form, or `null` for `None`
    pub fn serialize<S>(
        spec: &Option<SortSpecification>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match spec {
            Some(spec) => spec.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use crate::sort::{OrderingTerm, SortSpecification};

    #[derive(Debug, Serialize, Deserialize)]
    struct ListRequest {
        #[serde(default, with = "crate::codec::lenient")]
        sort: Option<SortSpecification>,
    }

    #[test]
    fn test_lenient_array_field_decodes_to_specification() {
        let request: ListRequest = serde_json::from_value(json!({
            "sort": [{"direction": "DESC", "property": "age"}],
        }))
        .unwrap();
        let spec = request.sort.unwrap();
        assert_eq!(spec.terms()[0], OrderingTerm::descending("age"));
    }

    #[test]
    fn test_lenient_non_array_field_decodes_to_none() {
        let request: ListRequest =
            serde_json::from_value(json!({"sort": {"foo": "bar"}})).unwrap();
        assert!(request.sort.is_none());

        let request: ListRequest = serde_json::from_value(json!({"sort": "hello"})).unwrap();
        assert!(request.sort.is_none());

        let request: ListRequest = serde_json::from_value(json!({"sort": null})).unwrap();
        assert!(request.sort.is_none());
    }

    #[test]
    fn test_lenient_absent_field_decodes_to_none() {
        let request: ListRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.sort.is_none());
    }

    #[test]
    fn test_lenient_bad_element_is_still_an_error() {
        let result: Result<ListRequest, _> = serde_json::from_value(json!({
            "sort": [{"direction": "SIDEWAYS", "property": "x"}],
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_lenient_serialize_round_trip() {
        let request = ListRequest {
            sort: Some(SortSpecification::ascending("name")),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({"sort": [{"property": "name", "direction": "ASC"}]})
        );

        let request = ListRequest { sort: None };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, json!({"sort": null}));

        let back: ListRequest = serde_json::from_value(json).unwrap();
        assert!(back.sort.is_none());
    }
}
