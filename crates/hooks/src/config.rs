//! Hooks configuration.
//!
//! A configuration can be assembled with the builder methods or loaded from
//! JSON:
//!
//! ```json
//! {
//!   "hooks": {
//!     "hover": {"and": ["&:hover", "@media (hover:hover)"]},
//!     "dark": "@media (prefers-color-scheme: dark)"
//!   },
//!   "fallback": "revert-layer",
//!   "debug": true,
//!   "sort": {"properties": true, "conditionalStyles": false}
//! }
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use condition::Condition;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hook::HookImpl;
use crate::id::HookNameToId;

/// The keyword a conditional property falls back to when nothing earlier in
/// the merge set it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fallback {
    RevertLayer,
    #[default]
    Unset,
}

impl Fallback {
    pub fn as_str(self) -> &'static str {
        match self {
            Fallback::RevertLayer => "revert-layer",
            Fallback::Unset => "unset",
        }
    }
}

/// Ordering rules applied while merging declaration blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SortOptions {
    /// Every write moves the property to the end of the merged map. When
    /// disabled a rewritten property keeps the position of its first write.
    pub properties: bool,
    /// Apply every conditional override after all unconditional properties
    /// of the call instead of in argument order.
    pub conditional_styles: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            properties: true,
            conditional_styles: false,
        }
    }
}

/// Everything needed to compile a style sheet and merge styles.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct HooksConfig {
    /// Hook name to raw condition, in declaration order.
    pub hooks: IndexMap<String, Condition<HookImpl>>,
    pub fallback: Fallback,
    /// Readable output: whitespace in the style sheet and merged values,
    /// hook names in ids.
    pub debug: bool,
    pub sort: SortOptions,
    #[serde(skip)]
    pub hook_name_to_id: Option<HookNameToId>,
}

impl HooksConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Declares a hook. Redeclaring a name replaces its condition but keeps
    /// its original position.
    pub fn hook(mut self, name: impl Into<String>, condition: Condition<HookImpl>) -> Self {
        self.hooks.insert(name.into(), condition);
        self
    }

    /// Declares a hook bound to a single selector template or at-rule.
    pub fn try_hook(self, name: impl Into<String>, source: &str) -> Result<Self> {
        let hook = HookImpl::parse(source)?;
        Ok(self.hook(name, Condition::Atom(hook)))
    }

    pub fn fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn sort(mut self, sort: SortOptions) -> Self {
        self.sort = sort;
        self
    }

    /// Overrides how hook names become toggle ids. Mostly useful for tests.
    pub fn hook_name_to_id(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.hook_name_to_id = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for HooksConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HooksConfig")
            .field("hooks", &self.hooks)
            .field("fallback", &self.fallback)
            .field("debug", &self.debug)
            .field("sort", &self.sort)
            .field("hook_name_to_id", &self.hook_name_to_id.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = HooksConfig::new();
        assert_eq!(config.fallback, Fallback::Unset);
        assert!(!config.debug);
        assert!(config.sort.properties);
        assert!(!config.sort.conditional_styles);
    }

    #[test]
    fn redeclared_hooks_keep_their_slot() {
        let config = HooksConfig::new()
            .try_hook("a", "&:hover")
            .and_then(|c| c.try_hook("b", "&:focus"))
            .and_then(|c| c.try_hook("a", "&:active"))
            .unwrap();
        let names: Vec<&str> = config.hooks.keys().map(String::as_str).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(
            config.hooks["a"],
            Condition::Atom(HookImpl::Selector("&:active".into()))
        );
    }
}
