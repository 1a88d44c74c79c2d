//! Formatter registry and dispatch.
//!
//! A [`Formatter`] maps names to [`Transform`]s and applies them to cell
//! values. Callers either name a registered transform or hand over a
//! transform directly:
//!
//! ```rust
//! use cellfmt::{Formatter, Transform};
//! use serde_json::json;
//!
//! let formatter = Formatter::new();
//! assert_eq!(formatter.apply(&json!(1200), "intcomma").unwrap(), "1,200");
//!
//! let shout = Transform::value_only("shout", |v| cellfmt::value_to_text(v).to_uppercase());
//! assert_eq!(formatter.apply(&json!("hi"), &shout).unwrap(), "HI");
//! ```
//!
//! A `Formatter` is a plain value. Share it behind a lock if it has to be
//! mutated from several threads; formatting alone only needs `&self`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::args::expect_none;
use crate::error::CellfmtError;
use crate::transforms::builtin_transforms;
use crate::value::Options;
use crate::Result;

/// Signature shared by every registered transform.
pub type FormatFn = dyn Fn(&Value, &[Value], &Options) -> Result<String> + Send + Sync;

/// A named formatting function.
///
/// Cloning is cheap; clones share the same function.
#[derive(Clone)]
pub struct Transform {
    name: String,
    func: Arc<FormatFn>,
}

impl Transform {
    /// Create a transform from a function over the value, extra positional
    /// arguments and named options.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value, &[Value], &Options) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Create a transform that only looks at the value.
    ///
    /// Extra arguments or options make the call fail.
    pub fn value_only<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        let name = name.into();
        let label = name.clone();
        Self::new(name, move |value: &Value, args: &[Value], options: &Options| {
            expect_none(&label, args, options)?;
            Ok(func(value))
        })
    }

    /// The name this transform registers under by default.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the transform.
    pub fn call(&self, value: &Value, args: &[Value], options: &Options) -> Result<String> {
        (self.func)(value, args, options)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// What to apply: a registered name or a transform held by the caller.
#[derive(Debug, Clone, Copy)]
pub enum FormatRef<'a> {
    Name(&'a str),
    Transform(&'a Transform),
}

impl<'a> From<&'a str> for FormatRef<'a> {
    fn from(name: &'a str) -> Self {
        FormatRef::Name(name)
    }
}

impl<'a> From<&'a String> for FormatRef<'a> {
    fn from(name: &'a String) -> Self {
        FormatRef::Name(name)
    }
}

impl<'a> From<&'a Transform> for FormatRef<'a> {
    fn from(transform: &'a Transform) -> Self {
        FormatRef::Transform(transform)
    }
}

/// Registry of named transforms.
///
/// At most one transform is held per name; registering a name again
/// replaces the previous entry.
#[derive(Clone)]
pub struct Formatter {
    filters: HashMap<String, Transform>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("filters", &self.names())
            .finish()
    }
}

impl Formatter {
    /// Create a formatter with every built-in transform registered.
    pub fn new() -> Self {
        let mut formatter = Self::empty();
        for transform in builtin_transforms() {
            formatter.register_transform(transform);
        }
        formatter
    }

    /// Create a formatter with nothing registered.
    pub fn empty() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    /// Apply a transform to `value` with extra positional arguments and
    /// named options.
    ///
    /// A [`FormatRef::Transform`] is called directly without touching the
    /// registry. A name is looked up first and fails with
    /// [`CellfmtError::UnknownFormatter`] when nothing is registered under it.
    pub fn format<'a>(
        &self,
        value: &Value,
        func: impl Into<FormatRef<'a>>,
        args: &[Value],
        options: &Options,
    ) -> Result<String> {
        let transform = match func.into() {
            FormatRef::Transform(transform) => transform,
            FormatRef::Name(name) => self
                .filters
                .get(name)
                .ok_or_else(|| CellfmtError::UnknownFormatter(name.to_string()))?,
        };
        trace!(formatter = transform.name(), "formatting value");
        transform.call(value, args, options)
    }

    /// [`Formatter::format`] without extra arguments or options.
    pub fn apply<'a>(&self, value: &Value, func: impl Into<FormatRef<'a>>) -> Result<String> {
        self.format(value, func, &[], &Options::new())
    }

    /// Register `func` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&Value, &[Value], &Options) -> Result<String> + Send + Sync + 'static,
    {
        let name = name.into();
        let transform = Transform::new(name.clone(), func);
        self.insert(name, transform);
    }

    /// Register a transform under its own name.
    pub fn register_transform(&mut self, transform: Transform) {
        self.insert(transform.name().to_string(), transform);
    }

    /// Register with either part optional.
    ///
    /// An explicit name wins over the transform's own name. Without a
    /// transform there is nothing to register and the call does nothing.
    pub fn register_entry(&mut self, name: Option<&str>, transform: Option<Transform>) {
        let Some(transform) = transform else {
            return;
        };
        let name = name.unwrap_or_else(|| transform.name()).to_string();
        self.insert(name, transform);
    }

    fn insert(&mut self, name: String, transform: Transform) {
        debug!(formatter = %name, "registering formatter");
        self.filters.insert(name, transform);
    }

    /// Remove the entry under `name`, if any.
    pub fn unregister(&mut self, name: &str) {
        if self.filters.remove(name).is_some() {
            debug!(formatter = name, "unregistered formatter");
        }
    }

    /// Remove the entry under the transform's own name, if any.
    pub fn unregister_transform(&mut self, transform: &Transform) {
        self.unregister(transform.name());
    }

    /// Unregister with either part optional. An explicit name wins.
    pub fn unregister_entry(&mut self, name: Option<&str>, transform: Option<&Transform>) {
        match (name, transform) {
            (Some(name), _) => self.unregister(name),
            (None, Some(transform)) => self.unregister_transform(transform),
            (None, None) => {}
        }
    }

    /// Check whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Get the transform registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Transform> {
        self.filters.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.filters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

/// Create a formatter pre-populated with the built-in transforms.
///
/// Each call returns an independent instance.
pub fn default_formatter() -> Formatter {
    Formatter::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::BUILTIN_NAMES;
    use crate::value::parse_number;
    use serde_json::json;

    fn double(value: &Value, _args: &[Value], _options: &Options) -> Result<String> {
        Ok((parse_number(value)? * 2.0).to_string())
    }

    #[test]
    fn test_new_has_builtins() {
        let formatter = Formatter::new();
        assert_eq!(formatter.names(), BUILTIN_NAMES);
        assert_eq!(formatter.len(), BUILTIN_NAMES.len());
    }

    #[test]
    fn test_empty() {
        let formatter = Formatter::empty();
        assert!(formatter.is_empty());
        assert!(formatter.apply(&json!(1), "intcomma").is_err());
    }

    #[test]
    fn test_apply_by_name() {
        let formatter = Formatter::new();
        assert_eq!(formatter.apply(&json!(1200), "intcomma").unwrap(), "1,200");
        assert_eq!(formatter.apply(&json!(1200), "dollars").unwrap(), "$1,200");
    }

    #[test]
    fn test_format_passes_args_and_options() {
        let formatter = Formatter::new();
        let mut options = Options::new();
        options.insert("multiply".to_string(), json!(false));
        assert_eq!(
            formatter
                .format(&json!(0.5), "percentage", &[json!(2)], &options)
                .unwrap(),
            "0.50%"
        );
    }

    #[test]
    fn test_unknown_name() {
        let formatter = Formatter::new();
        let err = formatter.apply(&json!(1), "nope").unwrap_err();
        assert_eq!(err, CellfmtError::UnknownFormatter("nope".to_string()));
    }

    #[test]
    fn test_register_and_unregister() {
        let mut formatter = Formatter::new();
        formatter.register("double", double);
        assert_eq!(formatter.apply(&json!(21), "double").unwrap(), "42");

        formatter.unregister("double");
        assert!(!formatter.contains("double"));
        assert!(matches!(
            formatter.apply(&json!(21), "double"),
            Err(CellfmtError::UnknownFormatter(_))
        ));
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut formatter = Formatter::new();
        formatter.register("intcomma", |_: &Value, _: &[Value], _: &Options| {
            Ok("replaced".to_string())
        });
        assert_eq!(formatter.apply(&json!(1000), "intcomma").unwrap(), "replaced");
        assert_eq!(formatter.len(), BUILTIN_NAMES.len());
    }

    #[test]
    fn test_register_transform_infers_name() {
        let mut formatter = Formatter::empty();
        formatter.register_transform(Transform::new("double", double));
        assert!(formatter.contains("double"));
        assert_eq!(formatter.get("double").unwrap().name(), "double");
    }

    #[test]
    fn test_register_entry() {
        let mut formatter = Formatter::empty();
        formatter.register_entry(None, None);
        formatter.register_entry(Some("ignored"), None);
        assert!(formatter.is_empty());

        formatter.register_entry(None, Some(Transform::new("double", double)));
        formatter.register_entry(Some("twice"), Some(Transform::new("double", double)));
        assert_eq!(formatter.names(), vec!["double", "twice"]);
    }

    #[test]
    fn test_unregister_entry() {
        let mut formatter = Formatter::empty();
        let transform = Transform::new("double", double);
        formatter.register_transform(transform.clone());
        formatter.register("twice", double);

        formatter.unregister_entry(None, None);
        formatter.unregister_entry(Some("missing"), None);
        assert_eq!(formatter.len(), 2);

        formatter.unregister_entry(None, Some(&transform));
        assert_eq!(formatter.names(), vec!["twice"]);
        formatter.unregister_entry(Some("twice"), Some(&transform));
        assert!(formatter.is_empty());
    }

    #[test]
    fn test_unregister_transform() {
        let mut formatter = Formatter::empty();
        let transform = Transform::new("double", double);
        formatter.register_transform(transform.clone());
        formatter.unregister_transform(&transform);
        assert!(formatter.is_empty());
        formatter.unregister_transform(&transform);
    }

    #[test]
    fn test_direct_transform_skips_registry() {
        let formatter = Formatter::empty();
        let transform = Transform::new("double", double);
        assert_eq!(formatter.apply(&json!("2.5"), &transform).unwrap(), "5");
        assert!(!formatter.contains("double"));
    }

    #[test]
    fn test_value_only_rejects_arguments() {
        let formatter = Formatter::empty();
        let upper = Transform::value_only("upper", |v| v.to_string().to_uppercase());
        assert!(formatter
            .format(&json!("a"), &upper, &[json!(1)], &Options::new())
            .is_err());
    }

    #[test]
    fn test_name_from_string() {
        let formatter = Formatter::new();
        let name = String::from("title");
        assert_eq!(formatter.apply(&json!("hello world"), &name).unwrap(), "Hello World");
    }

    #[test]
    fn test_instances_are_isolated() {
        let mut first = default_formatter();
        let second = default_formatter();
        first.unregister("title");
        assert!(!first.contains("title"));
        assert!(second.contains("title"));
    }

    #[test]
    fn test_debug_lists_names() {
        let mut formatter = Formatter::empty();
        formatter.register("double", double);
        let debug = format!("{:?}", formatter);
        assert!(debug.contains("double"));
    }
}
