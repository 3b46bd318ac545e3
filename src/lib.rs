//! # rangekit - Ordered Ranges
//!
//! Immutable range values over characters, numbers and date-times.
//!
//! ## Features
//!
//! - **Order-independent construction**: bounds may be given in either order,
//!   the lesser always becomes `start`
//! - **Containment**: `contains` reports `-1` (before), `0` (within, bounds
//!   included) or `+1` (after)
//! - **Clamping**: `clamp` returns the value projected onto the range together
//!   with its containment code
//! - **Validated settings**: character and numeric ranges take a small set of
//!   options; unknown keys and invalid values fall back to defaults instead of
//!   failing
//!
//! ## Quick Start
//!
//! ```rust
//! use rangekit::{CharacterRange, Containment, OrderedRange};
//!
//! let range = CharacterRange::new("G", "U")?;
//!
//! assert_eq!(range.contains("A")?, Containment::Before);
//! assert_eq!(range.clamp("A")?, ('G', Containment::Before));
//! assert_eq!(range.contains("A")?.code(), -1);
//! # Ok::<(), rangekit::Error>(())
//! ```
//!
//! ## Numeric Ranges and Settings
//!
//! The numeric `type` setting restricts values to integers (`"int"`), floats
//! (`"float"`) or either (`"numeric"`, the default). Values of the wrong kind
//! are rejected with [`Error::InvalidArgument`].
//!
//! ```rust
//! use rangekit::{settings, Number, NumericRange, OrderedRange};
//! use serde_json::json;
//!
//! let range = NumericRange::with_settings(0, 100, &settings! {
//!     "type" => json!("int"),
//!     "unknown" => json!(true),   // ignored
//! })?;
//!
//! assert_eq!(range.settings().get_str("type"), Some("int"));
//! assert_eq!(range.clamp(&150.into())?.0, Number::Int(100));
//!
//! let err = range.contains(&Number::Float(0.5)).unwrap_err();
//! assert_eq!(err.to_string(), "contains expects a(n) int as an argument, got 0.5");
//! # Ok::<(), rangekit::Error>(())
//! ```
//!
//! ## Date-Time Ranges
//!
//! ```rust
//! use rangekit::{Containment, DateTimeRange, OrderedRange};
//! use time::macros::datetime;
//!
//! let range = DateTimeRange::parse("1774-07-04", "1969-07-20")?;
//! let (clamped, containment) = range.clamp(&datetime!(2055-01-13 0:00 UTC))?;
//!
//! assert_eq!(clamped, datetime!(1969-07-20 0:00 UTC));
//! assert_eq!(containment, Containment::After);
//! # Ok::<(), rangekit::Error>(())
//! ```

// Core modules
mod error;
mod range;

// Grouped modules
pub mod config;

// Re-exports from core
pub use error::{Error, Operation, Result};
pub use range::{
    CharacterRange, Charset, Containment, DateTimeRange, Number, NumericRange, NumericType,
    OrderedRange,
};

// Re-exports from config
pub use config::{SettingMetadata, SettingOption, Settings, SettingsSchema, opt, sanitize};
