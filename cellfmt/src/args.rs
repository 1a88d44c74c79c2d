//! Binding of extra arguments to a transform's option record.
//!
//! A transform is invoked with the cell value, a list of positional
//! arguments (often sibling cells from the same row) and a map of named
//! options. Positional arguments bind to the record's parameter names in
//! declaration order; named options bind by name. The merged map is then
//! deserialized into the record, so absent parameters take its defaults.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CellfmtError;
use crate::value::{Options, MAX_DECIMAL_PLACES};
use crate::Result;

/// An option record whose fields can be filled positionally.
pub trait Parameters: DeserializeOwned {
    /// Field names in positional order.
    const NAMES: &'static [&'static str];

    /// Check values that deserialized but are out of range.
    fn validate(&self) -> std::result::Result<(), String> {
        Ok(())
    }
}

/// Reject a precision larger than [`MAX_DECIMAL_PLACES`].
pub fn check_precision(name: &str, places: usize) -> std::result::Result<(), String> {
    if places > MAX_DECIMAL_PLACES {
        return Err(format!(
            "{} must be at most {} (got {})",
            name, MAX_DECIMAL_PLACES, places
        ));
    }
    Ok(())
}

/// Bind positional arguments and named options into `P`.
///
/// `transform` is only used to label errors.
pub fn bind<P: Parameters>(transform: &str, args: &[Value], options: &Options) -> Result<P> {
    if args.len() > P::NAMES.len() {
        return Err(CellfmtError::TooManyArguments {
            transform: transform.to_string(),
            max: P::NAMES.len(),
            given: args.len(),
        });
    }

    let mut merged = options.clone();
    for (name, arg) in P::NAMES.iter().zip(args) {
        if merged.contains_key(*name) {
            return Err(CellfmtError::DuplicateArgument {
                transform: transform.to_string(),
                name: name.to_string(),
            });
        }
        merged.insert(name.to_string(), arg.clone());
    }

    let params: P =
        serde_json::from_value(Value::Object(merged)).map_err(|e| CellfmtError::InvalidArguments {
            transform: transform.to_string(),
            message: e.to_string(),
        })?;
    params
        .validate()
        .map_err(|message| CellfmtError::InvalidArguments {
            transform: transform.to_string(),
            message,
        })?;
    Ok(params)
}

/// Reject any extra arguments for transforms that take only the value.
pub fn expect_none(transform: &str, args: &[Value], options: &Options) -> Result<()> {
    if !args.is_empty() {
        return Err(CellfmtError::TooManyArguments {
            transform: transform.to_string(),
            max: 0,
            given: args.len(),
        });
    }
    if let Some(name) = options.keys().next() {
        return Err(CellfmtError::InvalidArguments {
            transform: transform.to_string(),
            message: format!("unexpected option '{}'", name),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BubbleOptions, DollarsOptions, LinkOptions, PercentOptions, RatioOptions};
    use serde_json::json;

    fn opts(value: Value) -> Options {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_bind_defaults() {
        let bound: PercentOptions = bind("percentage", &[], &Options::new()).unwrap();
        assert_eq!(bound, PercentOptions::default());
    }

    #[test]
    fn test_bind_positional_in_order() {
        let bound: PercentOptions =
            bind("percentage", &[json!(3), json!(false)], &Options::new()).unwrap();
        assert_eq!(bound.decimal_places, 3);
        assert!(!bound.multiply);
    }

    #[test]
    fn test_bind_mixed_positional_and_named() {
        let bound: BubbleOptions = bind(
            "bubble",
            &[json!("/y.png")],
            &opts(json!({ "empty": "?" })),
        )
        .unwrap();
        assert_eq!(bound.yes_icon, "/y.png");
        assert_eq!(bound.no_icon, "/media/img/bubble_no.png");
        assert_eq!(bound.empty, "?");
    }

    #[test]
    fn test_bind_too_many_positional() {
        let err = bind::<PercentOptions>(
            "percentage",
            &[json!(1), json!(true), json!("extra")],
            &Options::new(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CellfmtError::TooManyArguments {
                transform: "percentage".to_string(),
                max: 2,
                given: 3,
            }
        );
    }

    #[test]
    fn test_bind_duplicate_argument() {
        let err = bind::<PercentOptions>(
            "percentage",
            &[json!(2)],
            &opts(json!({ "decimal_places": 3 })),
        )
        .unwrap_err();
        assert!(matches!(err, CellfmtError::DuplicateArgument { ref name, .. } if name == "decimal_places"));
    }

    #[test]
    fn test_bind_wrong_type() {
        let err = bind::<PercentOptions>(
            "percentage",
            &[],
            &opts(json!({ "decimal_places": "two" })),
        )
        .unwrap_err();
        assert!(matches!(err, CellfmtError::InvalidArguments { .. }));
    }

    #[test]
    fn test_bind_unknown_option() {
        let err =
            bind::<PercentOptions>("percentage", &[], &opts(json!({ "places": 2 }))).unwrap_err();
        assert!(matches!(err, CellfmtError::InvalidArguments { .. }));
    }

    #[test]
    fn test_bind_missing_required() {
        let err = bind::<LinkOptions>("link", &[], &Options::new()).unwrap_err();
        assert!(matches!(err, CellfmtError::InvalidArguments { ref transform, .. } if transform == "link"));
    }

    #[test]
    fn test_bind_rejects_huge_precision() {
        let err = bind::<PercentOptions>("percentage", &[json!(70000)], &Options::new())
            .unwrap_err();
        assert!(matches!(err, CellfmtError::InvalidArguments { ref transform, .. } if transform == "percentage"));

        let bound: PercentOptions =
            bind("percentage", &[json!(MAX_DECIMAL_PLACES)], &Options::new()).unwrap();
        assert_eq!(bound.decimal_places, MAX_DECIMAL_PLACES);
    }

    #[test]
    fn test_bind_rejects_huge_ratio_and_dollar_precision() {
        let ratio = bind::<RatioOptions>("ratio", &[], &opts(json!({ "precision": 1_000_000 })));
        assert!(matches!(ratio, Err(CellfmtError::InvalidArguments { .. })));

        let dollars = bind::<DollarsOptions>("dollars", &[json!(u64::MAX)], &Options::new());
        assert!(matches!(dollars, Err(CellfmtError::InvalidArguments { .. })));

        let dollars: DollarsOptions = bind("dollars", &[Value::Null], &Options::new()).unwrap();
        assert_eq!(dollars.decimal_places, None);
    }

    #[test]
    fn test_expect_none() {
        assert!(expect_none("title", &[], &Options::new()).is_ok());
        assert!(expect_none("title", &[json!(1)], &Options::new()).is_err());
        assert!(expect_none("title", &[], &opts(json!({ "x": 1 }))).is_err());
    }
}
