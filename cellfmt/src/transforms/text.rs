//! Text transforms: title casing and links.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

use crate::options::LinkOptions;
use crate::value::value_to_text;

static CAPITAL_AFTER_APOSTROPHE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])'([A-Z])").expect("apostrophe pattern is valid"));
static CAPITAL_AFTER_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d([A-Z])").expect("digit pattern is valid"));

/// Convert a string to title case.
///
/// Every word is capitalised, except that a letter after a contraction
/// (`mcdonald's`) or after a digit (`1st`) stays lowercase.
pub fn title(value: &Value) -> String {
    let cased = capitalize_words(&value_to_text(value).to_lowercase());
    let cased = CAPITAL_AFTER_APOSTROPHE.replace_all(&cased, lowercase_match);
    CAPITAL_AFTER_DIGIT
        .replace_all(&cased, lowercase_match)
        .into_owned()
}

fn lowercase_match(caps: &Captures<'_>) -> String {
    caps[0].to_lowercase()
}

/// Uppercase letters that follow a non-letter, lowercase the rest.
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && previous_cased {
            out.extend(c.to_lowercase());
        } else if cased {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        previous_cased = cased;
    }
    out
}

/// Wrap a title in an anchor that opens in a new window.
///
/// Neither the title nor the URL is escaped.
pub fn link(title: &Value, options: &LinkOptions) -> String {
    let title = value_to_text(title);
    format!(
        r#"<a target="_blank" href="{url}" title="{title}">{title}</a>"#,
        url = options.url,
        title = title
    )
}
