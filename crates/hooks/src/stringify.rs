//! Value stringification for conditional properties.
//!
//! Conditional values are spliced into `var()` fallbacks, so they must be
//! turned into CSS text. Frameworks with their own conventions (unit
//! suffixes, for example) supply a closure instead of [`GenericStringify`].

use serde_json::Value;

/// Converts a property value into CSS text, or `None` when the value has no
/// textual form. Properties whose value yields `None` are skipped.
pub trait Stringify {
    fn stringify(&self, property: &str, value: &Value) -> Option<String>;
}

impl<F> Stringify for F
where
    F: Fn(&str, &Value) -> Option<String>,
{
    fn stringify(&self, property: &str, value: &Value) -> Option<String> {
        self(property, value)
    }
}

/// Strings pass through and numbers print in their shortest form; nothing
/// else can be stringified.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenericStringify;

impl Stringify for GenericStringify {
    fn stringify(&self, _property: &str, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(i.to_string())
                } else if let Some(u) = n.as_u64() {
                    Some(u.to_string())
                } else {
                    n.as_f64().map(|f| f.to_string())
                }
            }
            _ => None,
        }
    }
}
