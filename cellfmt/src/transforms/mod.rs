//! The built-in transform library.
//!
//! Each transform is a plain function over a cell value and a typed option
//! record. [`builtin_transforms`] wraps them for the registry, binding the
//! registry's positional arguments and named options to those records.

pub mod icons;
pub mod numeric;
pub mod states;
pub mod text;

pub use icons::{bubble, checkbox, tribubble};
pub use numeric::{
    dollar_signs, dollars, group_digits, intcomma, percent_change, percentage, ratio,
    NOT_AVAILABLE,
};
pub use states::{ap_state, State, STATES};
pub use text::{link, title};

use serde_json::Value;

use crate::args::{bind, Parameters};
use crate::registry::Transform;
use crate::value::Options;
use crate::Result;

/// Names of the transforms every new [`crate::Formatter`] starts with.
pub const BUILTIN_NAMES: &[&str] = &[
    "ap_state",
    "bubble",
    "checkbox",
    "dollar_signs",
    "dollars",
    "intcomma",
    "link",
    "percent_change",
    "percentage",
    "ratio",
    "title",
    "tribubble",
];

/// Build the registry entries for the built-in transforms.
pub fn builtin_transforms() -> Vec<Transform> {
    vec![
        Transform::value_only("ap_state", ap_state),
        with_options("bubble", bubble),
        with_options("checkbox", checkbox),
        Transform::value_only("dollar_signs", dollar_signs),
        with_options("dollars", dollars),
        Transform::value_only("intcomma", intcomma),
        with_options("link", link),
        with_options("percent_change", percent_change),
        Transform::new("percentage", |value: &Value, args: &[Value], options: &Options| {
            percentage(value, &bind("percentage", args, options)?)
        }),
        with_options("ratio", ratio),
        Transform::value_only("title", title),
        with_options("tribubble", tribubble),
    ]
}

/// Wrap a transform configured by an option record.
fn with_options<P, F>(name: &'static str, f: F) -> Transform
where
    P: Parameters,
    F: Fn(&Value, &P) -> String + Send + Sync + 'static,
{
    Transform::new(
        name,
        move |value: &Value, args: &[Value], options: &Options| -> Result<String> {
            let params: P = bind(name, args, options)?;
            Ok(f(value, &params))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_match_transforms() {
        let mut names: Vec<String> = builtin_transforms()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, BUILTIN_NAMES);
    }
}
