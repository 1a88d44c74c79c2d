//! # cellfmt
//!
//! Display formatters for table cells.
//!
//! ## Overview
//!
//! Tabular data tends to arrive as raw strings and numbers. This library turns
//! a single cell value into something presentable: dollar figures, grouped
//! integers, percentages, ratios, title case, AP style state names, and
//! "Consumer Reports" style icon markup.
//!
//! It has two halves:
//!
//! - **Transforms**: independent functions in [`transforms`], each mapping a
//!   value (plus a typed option record from [`options`]) to a string
//! - **Registry**: a [`Formatter`] that holds transforms by name and applies
//!   them, either by name or directly
//!
//! Transforms never touch locale or shared state. Those with a natural
//! fallback return a sentinel (`N/A`, a placeholder, the input itself) on
//! unformattable input; the rest return a [`CellfmtError`].
//!
//! ## Example
//!
//! ```rust
//! use cellfmt::{default_formatter, Options};
//! use serde_json::json;
//!
//! let mut formatter = default_formatter();
//!
//! assert_eq!(formatter.apply(&json!(1200), "dollars").unwrap(), "$1,200");
//! assert_eq!(formatter.apply(&json!("0.1"), "percent_change").unwrap(), "+10.0%");
//! assert_eq!(formatter.apply(&json!("California"), "ap_state").unwrap(), "Calif.");
//!
//! // Extra positional arguments, e.g. another column from the same row
//! let link = formatter
//!     .format(&json!("Docs"), "link", &[json!("https://docs.rs")], &Options::new())
//!     .unwrap();
//! assert!(link.contains("href=\"https://docs.rs\""));
//!
//! // Custom transforms
//! formatter.register("shout", |value: &serde_json::Value, _: &[serde_json::Value], _: &Options| {
//!     Ok(cellfmt::value_to_text(value).to_uppercase())
//! });
//! assert_eq!(formatter.apply(&json!("hey"), "shout").unwrap(), "HEY");
//! ```

pub mod args;
pub mod error;
pub mod options;
pub mod registry;
pub mod transforms;
pub mod value;

pub use error::CellfmtError;
pub use options::{
    BubbleOptions, CheckboxOptions, DollarsOptions, LinkOptions, PercentOptions, RatioOptions,
    TribubbleOptions,
};
pub use registry::{default_formatter, FormatFn, FormatRef, Formatter, Transform};
pub use transforms::{BUILTIN_NAMES, NOT_AVAILABLE};
pub use value::{parse_number, saferound, value_to_text, Options};

/// Result type for cellfmt operations
pub type Result<T> = std::result::Result<T, CellfmtError>;
