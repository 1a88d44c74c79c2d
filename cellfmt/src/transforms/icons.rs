//! Icon transforms: "Consumer Reports" style bubbles and checkboxes.
//!
//! Icon paths are opaque strings; they are interpolated into the returned
//! markup without escaping.

use serde_json::Value;

use crate::options::{BubbleOptions, CheckboxOptions, TribubbleOptions};
use crate::value::value_to_text;

/// Two-state bubble: `Y` is filled, `N` is empty.
///
/// The code is case-sensitive. Anything else gives `options.empty`.
pub fn bubble(value: &Value, options: &BubbleOptions) -> String {
    match value.as_str() {
        Some("Y") => bubble_img("Yes", &options.yes_icon),
        Some("N") => bubble_img("No", &options.no_icon),
        _ => options.empty.clone(),
    }
}

fn bubble_img(name: &str, icon: &str) -> String {
    format!(
        "<img alt='{name}' title='{name}' class='bubble' src='{icon}'>",
        name = name,
        icon = icon
    )
}

/// Three-state bubble for `y`, `p` (partly) and `n`, case-insensitive.
pub fn tribubble(value: &Value, options: &TribubbleOptions) -> String {
    let icon = match value_to_text(value).to_lowercase().as_str() {
        "y" => &options.yes_icon,
        "p" => &options.partly_icon,
        "n" => &options.no_icon,
        _ => return options.empty.clone(),
    };
    format!("<img class='bubble' src='{}'>", icon)
}

/// Checked or unchecked box for `y` / `n`, case-insensitive.
///
/// Unknown codes give an empty string rather than a placeholder.
pub fn checkbox(value: &Value, options: &CheckboxOptions) -> String {
    match value_to_text(value).to_lowercase().as_str() {
        "y" => options.yes_icon.clone(),
        "n" => options.no_icon.clone(),
        _ => String::new(),
    }
}
