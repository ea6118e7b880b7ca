//! Sort specification model
//!
//! This module provides the types describing a multi-key result ordering:
//! [`Direction`], [`OrderingTerm`], and [`SortSpecification`].
//!
//! A specification is an ordered sequence of terms; the first term is the
//! primary sort key, the second the secondary key, and so on. A property may
//! legally appear in more than one term, though it typically does not.
//!
//! # Example
//!
//! ```rust
//! use sortwire::sort::{Direction, OrderingTerm, SortSpecification};
//!
//! let spec = SortSpecification::ascending("name")
//!     .and(OrderingTerm::descending("age"));
//!
//! assert_eq!(spec.len(), 2);
//! assert_eq!(spec.terms()[0].property(), "name");
//! assert_eq!(spec.terms()[1].direction(), Direction::Desc);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Sort direction for an ordering term
///
/// The wire labels are exactly `ASC` and `DESC`; anything else, including
/// lowercase spellings, is rejected when parsing.
///
/// # Example
///
/// ```rust
/// use sortwire::sort::Direction;
///
/// assert_eq!(Direction::Asc.as_str(), "ASC");
/// assert_eq!("DESC".parse::<Direction>().unwrap(), Direction::Desc);
/// assert!("sideways".parse::<Direction>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Sort in ascending order (A-Z, 0-9, oldest first)
    #[default]
    Asc,
    /// Sort in descending order (Z-A, 9-0, newest first)
    Desc,
}

impl Direction {
    /// The canonical wire label for this direction
    ///
    /// # Example
    ///
    /// ```rust
    /// use sortwire::sort::Direction;
    ///
    /// assert_eq!(Direction::Asc.as_str(), "ASC");
    /// assert_eq!(Direction::Desc.as_str(), "DESC");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Check whether this is the ascending direction
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }

    /// Check whether this is the descending direction
    #[must_use]
    pub const fn is_descending(&self) -> bool {
        matches!(self, Self::Desc)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    /// Parse a wire label, case-sensitively
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            other => Err(Error::UnknownDirection {
                value: other.to_string(),
            }),
        }
    }
}

/// One sort instruction: a property name and a direction
///
/// Terms are immutable once constructed. On the wire a term is a JSON object
/// carrying at least `property` and `direction` fields.
///
/// # Example
///
/// ```rust
/// use sortwire::sort::{Direction, OrderingTerm};
///
/// let term = OrderingTerm::descending("created_at");
/// assert_eq!(term.property(), "created_at");
/// assert_eq!(term.direction(), Direction::Desc);
/// assert_eq!(term.to_string(), "created_at: DESC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderingTerm {
    property: String,
    direction: Direction,
}

impl OrderingTerm {
    /// Create a term for `property` sorted in `direction`
    ///
    /// The property names the field to sort by and is expected to be
    /// non-empty.
    #[must_use]
    pub fn new(property: impl Into<String>, direction: Direction) -> Self {
        Self {
            property: property.into(),
            direction,
        }
    }

    /// Create an ascending term for `property`
    #[must_use]
    pub fn ascending(property: impl Into<String>) -> Self {
        Self::new(property, Direction::Asc)
    }

    /// Create a descending term for `property`
    #[must_use]
    pub fn descending(property: impl Into<String>) -> Self {
        Self::new(property, Direction::Desc)
    }

    /// The property this term sorts by
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The direction this term sorts in
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for OrderingTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.direction)
    }
}

/// An ordered sequence of ordering terms defining a multi-key sort
///
/// Term order is significant: the first term is the primary sort key. An
/// empty specification is a valid "sorted by nothing" value and is distinct
/// from the absence of a specification, which callers represent as
/// `Option::<SortSpecification>::None`.
///
/// Serializes as the JSON array wire form, one object per term, so a
/// specification embedded in a request or response struct round-trips
/// through any serde pipeline without further wiring.
///
/// # Example
///
/// ```rust
/// use sortwire::sort::{OrderingTerm, SortSpecification};
///
/// let spec = SortSpecification::ascending("name")
///     .and(OrderingTerm::descending("age"));
///
/// let json = serde_json::to_value(&spec).unwrap();
/// assert!(json.is_array());
///
/// let back: SortSpecification = serde_json::from_value(json).unwrap();
/// assert_eq!(back, spec);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortSpecification {
    terms: Vec<OrderingTerm>,
}

impl SortSpecification {
    /// Create an empty specification
    ///
    /// # Example
    ///
    /// ```rust
    /// use sortwire::sort::SortSpecification;
    ///
    /// let spec = SortSpecification::new();
    /// assert!(spec.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a specification from a list of terms, preserving their order
    ///
    /// # Example
    ///
    /// ```rust
    /// use sortwire::sort::{OrderingTerm, SortSpecification};
    ///
    /// let spec = SortSpecification::by(vec![
    ///     OrderingTerm::ascending("name"),
    ///     OrderingTerm::descending("age"),
    /// ]);
    /// assert_eq!(spec.len(), 2);
    /// ```
    #[must_use]
    pub fn by(terms: Vec<OrderingTerm>) -> Self {
        Self { terms }
    }

    /// Create a single-term specification sorting `property` ascending
    #[must_use]
    pub fn ascending(property: impl Into<String>) -> Self {
        Self::by(vec![OrderingTerm::ascending(property)])
    }

    /// Create a single-term specification sorting `property` descending
    #[must_use]
    pub fn descending(property: impl Into<String>) -> Self {
        Self::by(vec![OrderingTerm::descending(property)])
    }

    /// Append a lower-priority term
    ///
    /// # Example
    ///
    /// ```rust
    /// use sortwire::sort::{OrderingTerm, SortSpecification};
    ///
    /// let spec = SortSpecification::ascending("name")
    ///     .and(OrderingTerm::descending("age"))
    ///     .and(OrderingTerm::ascending("id"));
    /// assert_eq!(spec.len(), 3);
    /// ```
    #[must_use]
    pub fn and(mut self, term: OrderingTerm) -> Self {
        self.terms.push(term);
        self
    }

    /// The terms of this specification, in priority order
    #[must_use]
    pub fn terms(&self) -> &[OrderingTerm] {
        &self.terms
    }

    /// The number of terms
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check whether the specification has no terms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the terms in priority order
    pub fn iter(&self) -> std::slice::Iter<'_, OrderingTerm> {
        self.terms.iter()
    }
}

impl fmt::Display for SortSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for term in &self.terms {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{term}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<OrderingTerm> for SortSpecification {
    fn from_iter<I: IntoIterator<Item = OrderingTerm>>(iter: I) -> Self {
        Self::by(iter.into_iter().collect())
    }
}

impl IntoIterator for SortSpecification {
    type Item = OrderingTerm;
    type IntoIter = std::vec::IntoIter<OrderingTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a SortSpecification {
    type Item = &'a OrderingTerm;
    type IntoIter = std::slice::Iter<'a, OrderingTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
