//! # Form Collector
//!
//! In-memory form data accumulator. Collects named, typed values the way an
//! HTML form accumulates state while a user interacts with its controls, and
//! exports the result in two shapes:
//!
//! - **Flat pairs**: an ordered name/value pair list, the shape a form
//!   submission produces (sequence values exploded one pair per element under
//!   `name[]`).
//! - **Nested object**: a JSON-friendly object with one key per field,
//!   container values preserved as containers.
//!
//! ## Field types
//!
//! SELECT, MULTI_SELECT, TEXT, NUMBER, RADIO, CHECKBOX, plus the non-standard
//! KEY_VALUE type (a string-keyed mapping collected under one field name).
//! Fields are created lazily by the first mutation that names them; a field's
//! type is immutable once created.
//!
//! ## Quick Start
//!
//! ```
//! use form_collector::FormCollector;
//!
//! let mut form = FormCollector::new();
//! form.set_select("size", "M", false)?;
//! form.set_multi_select("colors", "red", false)?;
//! form.set_multi_select("colors", "blue", false)?;
//!
//! // Submission-shaped export
//! let pairs = form.to_flat_pairs();
//! assert_eq!(pairs[0].name, "size");
//! assert_eq!(pairs[1].name, "colors[]");
//!
//! // JSON-shaped export
//! let object = form.to_nested_object();
//! assert_eq!(object["colors"], serde_json::json!(["red", "blue"]));
//! # Ok::<(), form_collector::Error>(())
//! ```
//!
//! ## Toggle semantics
//!
//! Every selection-style setter takes a `toggle` flag: when true, re-applying
//! a value the field already holds removes or clears it instead of
//! reaffirming it, mirroring how clicking an already-selected control behaves
//! in a browser.
//!
//! ## Concurrency
//!
//! A [`FormCollector`] is a single-owner, single-threaded structure. All
//! operations are synchronous and bounded-time; a multi-threaded host must
//! gate access externally.
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Field data model
pub mod field;

// Field registry and mutation semantics
pub mod collector;

// Flat-pair and nested-object projections
pub mod export;

// Diagnostic mutation observer
pub mod observer;

// Re-exports
pub use collector::FormCollector;
pub use error::{Error, Result};
pub use export::{FlatPair, FormExporter};
pub use field::{Field, FieldType, FieldValue, Scalar};
pub use observer::{FieldObserver, LogObserver};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // VERSION is populated from CARGO_PKG_VERSION at compile time
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "form_collector");
    }
}
