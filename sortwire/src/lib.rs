//! # sortwire
//!
//! Sort specification types with a compact JSON wire codec for request and
//! response payloads.
//!
//! A [`SortSpecification`](sort::SortSpecification) is an ordered list of
//! `(property, direction)` pairs describing multi-key result ordering:
//! "sort by name ascending, then age descending". The codec converts between
//! that model and a JSON array wire form, one object per ordering term:
//!
//! ```json
//! [{"property":"name","direction":"ASC"},{"property":"age","direction":"DESC"}]
//! ```
//!
//! Clients attach the array to a request to ask a server for an ordering;
//! servers echo back the ordering they applied. The codec itself performs no
//! query execution and does not validate that the named properties exist on
//! any schema.
//!
//! ## Features
//!
//! - **Typed model**: immutable ordering terms, an ordered specification with
//!   builder-style construction, and full serde integration
//! - **Strict and best-effort encoding**: abort on the first term that fails
//!   to serialize, or skip it, log it, and keep going
//! - **Lenient decoding**: a non-array wire value means "no sort specified"
//!   and decodes to `None` rather than an error
//! - **Injected diagnostics**: the best-effort path reports skipped terms
//!   through a [`DiagnosticLogger`](diagnostics::DiagnosticLogger) you supply,
//!   backed by `tracing` in production
//!
//! ## Example
//!
//! ```rust
//! use sortwire::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let spec = SortSpecification::ascending("name")
//!         .and(OrderingTerm::descending("age"));
//!
//!     let wire = Encoder::strict().encode(&spec)?;
//!     assert_eq!(wire.as_array().map(Vec::len), Some(2));
//!
//!     let decoded = Decoder::new().decode(&wire)?;
//!     assert_eq!(decoded, Some(spec));
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod diagnostics;
pub mod error;
pub mod sort;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::codec::{Decoder, EncodeMode, Encoder};
    pub use crate::diagnostics::{DiagnosticLogger, TracingLogger};
    pub use crate::error::{Error, Result};
    pub use crate::sort::{Direction, OrderingTerm, SortSpecification};
}
