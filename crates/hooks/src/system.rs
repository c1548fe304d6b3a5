//! The entry points: a [`HooksSystem`] fixes how values are stringified, and
//! each configuration passed to it becomes a [`Hooks`] handle.

use std::sync::Arc;

use condition::{Condition, normalize};
use indexmap::IndexMap;
use once_cell::sync::OnceCell;

use crate::config::{Fallback, HooksConfig, SortOptions};
use crate::error::Result;
use crate::hook::HookImpl;
use crate::id;
use crate::merge::{DeclarationBlock, Merger, Properties};
use crate::stringify::{GenericStringify, Stringify};
use crate::stylesheet;
use crate::toggle::Format;

/// A stringifier waiting for hook configurations.
#[derive(Debug, Default)]
pub struct HooksSystem<F = GenericStringify> {
    stringify: Arc<F>,
}

impl<F> Clone for HooksSystem<F> {
    fn clone(&self) -> Self {
        Self {
            stringify: Arc::clone(&self.stringify),
        }
    }
}

impl HooksSystem<GenericStringify> {
    pub fn generic() -> Self {
        Self::new(GenericStringify)
    }
}

impl<F: Stringify> HooksSystem<F> {
    pub fn new(stringify: F) -> Self {
        Self {
            stringify: Arc::new(stringify),
        }
    }

    /// Assigns toggle ids to every hook that can apply.
    ///
    /// Hooks whose condition normalizes to nothing are left out of the style
    /// sheet, and conditions naming them treat them as absent.
    pub fn create_hooks(&self, config: HooksConfig) -> Result<Hooks<F>> {
        let mut hook_ids = IndexMap::new();
        let mut compiled = Vec::new();

        for (name, raw) in &config.hooks {
            let Some(normalized) = normalize(raw) else {
                log::debug!("hook `{name}` never applies; left out of the style sheet");
                continue;
            };
            let id = match &config.hook_name_to_id {
                Some(custom) => custom(name),
                None => id::hook_id(name, raw, config.debug)?,
            };
            hook_ids.insert(name.clone(), id.clone());
            compiled.push((id, normalized));
        }

        log::debug!(
            "created {} hooks ({} declared)",
            compiled.len(),
            config.hooks.len()
        );

        Ok(Hooks {
            hook_ids,
            compiled,
            fallback: config.fallback,
            sort: config.sort,
            debug: config.debug,
            style_sheet: OnceCell::new(),
            stringify: Arc::clone(&self.stringify),
        })
    }
}

/// Shorthand for `HooksSystem::generic().create_hooks(config)`.
pub fn create_hooks(config: HooksConfig) -> Result<Hooks> {
    HooksSystem::generic().create_hooks(config)
}

/// A compiled configuration.
///
/// The style sheet is built on first request and cached; [`Hooks::css`]
/// keeps no state between calls.
pub struct Hooks<F = GenericStringify> {
    hook_ids: IndexMap<String, String>,
    compiled: Vec<(String, Condition<HookImpl>)>,
    fallback: Fallback,
    sort: SortOptions,
    debug: bool,
    style_sheet: OnceCell<String>,
    stringify: Arc<F>,
}

impl<F: Stringify> Hooks<F> {
    /// CSS text declaring every hook's toggle.
    pub fn style_sheet(&self) -> &str {
        self.style_sheet.get_or_init(|| {
            stylesheet::compile(
                self.compiled
                    .iter()
                    .map(|(id, condition)| (id.as_str(), condition)),
                self.debug,
            )
        })
    }

    /// Merges `blocks` into one flat style.
    pub fn css<'a>(&self, blocks: impl IntoIterator<Item = &'a DeclarationBlock>) -> Properties {
        Merger {
            hook_ids: &self.hook_ids,
            fallback: self.fallback,
            sort: self.sort,
            format: Format::new(self.debug),
            stringify: self.stringify.as_ref(),
        }
        .merge(blocks)
    }

    /// The toggle id assigned to `hook`, if it can apply.
    pub fn hook_id(&self, hook: &str) -> Option<&str> {
        self.hook_ids.get(hook).map(String::as_str)
    }

    /// Names of the hooks that made it into the style sheet, in declaration
    /// order.
    pub fn hook_names(&self) -> impl Iterator<Item = &str> {
        self.hook_ids.keys().map(String::as_str)
    }
}
