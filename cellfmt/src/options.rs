//! Option records for the built-in transforms.
//!
//! Each transform that takes more than the cell value reads its extra
//! parameters into one of these records. Fields carry the documented
//! defaults, so an empty option map always produces a usable record.
//!
//! The records deserialize from named options (see [`crate::args`]), and
//! also serve as plain Rust configuration for the typed transform functions
//! in [`crate::transforms`].

use serde::{Deserialize, Serialize};

use crate::args::{check_precision, Parameters};

/// Placeholder returned by the bubble transforms for unrecognised codes.
pub const DEFAULT_EMPTY: &str = "&mdash;";

pub const DEFAULT_BUBBLE_YES_ICON: &str = "/media/img/bubble_yes.png";
pub const DEFAULT_BUBBLE_NO_ICON: &str = "/media/img/bubble_no.png";

pub const DEFAULT_TRIBUBBLE_YES_ICON: &str = "/media/img/tribubble_yes.png";
pub const DEFAULT_TRIBUBBLE_PARTLY_ICON: &str = "/media/img/tribubble_partly.png";
pub const DEFAULT_TRIBUBBLE_NO_ICON: &str = "/media/img/tribubble_no.png";

pub const DEFAULT_CHECKBOX_YES: &str = r#"<img class="vote" src="/media/img/checkbox_yes.png">"#;
pub const DEFAULT_CHECKBOX_NO: &str = r#"<img class="vote" src="/media/img/checkbox_no.png">"#;

/// Icons and placeholder for the two-state `bubble` transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BubbleOptions {
    /// Image path for `Y`
    pub yes_icon: String,
    /// Image path for `N`
    pub no_icon: String,
    /// Returned for any other code
    pub empty: String,
}

impl Default for BubbleOptions {
    fn default() -> Self {
        Self {
            yes_icon: DEFAULT_BUBBLE_YES_ICON.to_string(),
            no_icon: DEFAULT_BUBBLE_NO_ICON.to_string(),
            empty: DEFAULT_EMPTY.to_string(),
        }
    }
}

impl BubbleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the `Y` icon
    pub fn with_yes_icon(mut self, icon: impl Into<String>) -> Self {
        self.yes_icon = icon.into();
        self
    }

    /// Builder: set the `N` icon
    pub fn with_no_icon(mut self, icon: impl Into<String>) -> Self {
        self.no_icon = icon.into();
        self
    }

    /// Builder: set the placeholder
    pub fn with_empty(mut self, empty: impl Into<String>) -> Self {
        self.empty = empty.into();
        self
    }
}

impl Parameters for BubbleOptions {
    const NAMES: &'static [&'static str] = &["yes_icon", "no_icon", "empty"];
}

/// Icons and placeholder for the three-state `tribubble` transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TribubbleOptions {
    pub yes_icon: String,
    pub partly_icon: String,
    pub no_icon: String,
    pub empty: String,
}

impl Default for TribubbleOptions {
    fn default() -> Self {
        Self {
            yes_icon: DEFAULT_TRIBUBBLE_YES_ICON.to_string(),
            partly_icon: DEFAULT_TRIBUBBLE_PARTLY_ICON.to_string(),
            no_icon: DEFAULT_TRIBUBBLE_NO_ICON.to_string(),
            empty: DEFAULT_EMPTY.to_string(),
        }
    }
}

impl TribubbleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_yes_icon(mut self, icon: impl Into<String>) -> Self {
        self.yes_icon = icon.into();
        self
    }

    pub fn with_partly_icon(mut self, icon: impl Into<String>) -> Self {
        self.partly_icon = icon.into();
        self
    }

    pub fn with_no_icon(mut self, icon: impl Into<String>) -> Self {
        self.no_icon = icon.into();
        self
    }

    pub fn with_empty(mut self, empty: impl Into<String>) -> Self {
        self.empty = empty.into();
        self
    }
}

impl Parameters for TribubbleOptions {
    const NAMES: &'static [&'static str] = &["yes_icon", "partly_icon", "no_icon", "empty"];
}

/// Markup for the `checkbox` transform.
///
/// Unlike the bubbles, these are complete snippets rather than image paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckboxOptions {
    pub yes_icon: String,
    pub no_icon: String,
}

impl Default for CheckboxOptions {
    fn default() -> Self {
        Self {
            yes_icon: DEFAULT_CHECKBOX_YES.to_string(),
            no_icon: DEFAULT_CHECKBOX_NO.to_string(),
        }
    }
}

impl CheckboxOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_yes_icon(mut self, markup: impl Into<String>) -> Self {
        self.yes_icon = markup.into();
        self
    }

    pub fn with_no_icon(mut self, markup: impl Into<String>) -> Self {
        self.no_icon = markup.into();
        self
    }
}

impl Parameters for CheckboxOptions {
    const NAMES: &'static [&'static str] = &["yes_icon", "no_icon"];
}

/// Precision for the `dollars` transform.
///
/// When `decimal_places` is unset, whole amounts print without a fractional
/// part and everything else prints with two places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DollarsOptions {
    pub decimal_places: Option<usize>,
}

impl DollarsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: always print exactly `places` digits after the point
    pub fn with_decimal_places(mut self, places: usize) -> Self {
        self.decimal_places = Some(places);
        self
    }
}

impl Parameters for DollarsOptions {
    const NAMES: &'static [&'static str] = &["decimal_places"];

    fn validate(&self) -> Result<(), String> {
        match self.decimal_places {
            Some(places) => check_precision("decimal_places", places),
            None => Ok(()),
        }
    }
}

/// Settings shared by `percentage` and `percent_change`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PercentOptions {
    /// Digits after the point (default 1)
    pub decimal_places: usize,
    /// Multiply the value by 100 first (default true)
    pub multiply: bool,
}

impl Default for PercentOptions {
    fn default() -> Self {
        Self {
            decimal_places: 1,
            multiply: true,
        }
    }
}

impl PercentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decimal_places(mut self, places: usize) -> Self {
        self.decimal_places = places;
        self
    }

    /// Builder: treat the value as already expressed in percent
    pub fn without_multiply(mut self) -> Self {
        self.multiply = false;
        self
    }
}

impl Parameters for PercentOptions {
    const NAMES: &'static [&'static str] = &["decimal_places", "multiply"];

    fn validate(&self) -> Result<(), String> {
        check_precision("decimal_places", self.decimal_places)
    }
}

/// Precision for the `ratio` transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RatioOptions {
    /// Digits after the point (default 0)
    pub precision: usize,
}

impl RatioOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

impl Parameters for RatioOptions {
    const NAMES: &'static [&'static str] = &["precision"];

    fn validate(&self) -> Result<(), String> {
        check_precision("precision", self.precision)
    }
}

/// Target of the `link` transform. The URL has no default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkOptions {
    pub url: String,
}

impl LinkOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Parameters for LinkOptions {
    const NAMES: &'static [&'static str] = &["url"];
}
