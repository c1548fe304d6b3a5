//! Merging declaration blocks into one flat style.
//!
//! Blocks are applied in order:
//!
//! - Plain properties overwrite whatever was there before, including any
//!   conditional chain built for the same property
//! - Each conditional override wraps the current value:
//!   `var(--T-1, <override>) var(--T-0, <previous or fallback keyword>)`
//!   where `T` is the toggle of the override's condition
//!
//! Conditions are written over hook names. A condition that is a single hook
//! reuses the hook's global toggle; compound conditions get call-local toggles
//! (`cond0`, `cond0A`, ...) whose channels are declared in the merged style
//! itself.
//!
//! ## Known limitation
//!
//! The two-term value only parses for properties whose grammar tolerates the
//! juxtaposition of the two substituted halves. No property is special-cased.

use condition::{Condition, normalize};
use indexmap::IndexMap;
use serde_json::Value;

use crate::config::{Fallback, SortOptions};
use crate::id::SyntheticIds;
use crate::stringify::Stringify;
use crate::toggle::{Format, Junction, Toggle, combine};

/// Property name to value, in write order.
pub type Properties = IndexMap<String, Value>;

/// Properties that apply only while `condition` holds.
#[derive(Clone, Debug, PartialEq)]
pub struct Override {
    pub condition: Condition<String>,
    pub properties: Properties,
}

/// Shorthand for [`Override`].
pub fn on(condition: impl Into<Condition<String>>, properties: Properties) -> Override {
    Override {
        condition: condition.into(),
        properties,
    }
}

/// One argument to a merge.
#[derive(Clone, Debug, PartialEq)]
pub enum DeclarationBlock {
    Unconditional(Properties),
    /// Plain properties followed by overrides, applied in that order.
    Conditional {
        properties: Properties,
        on: Vec<Override>,
    },
}

impl DeclarationBlock {
    /// A block made of a single override.
    pub fn when(condition: impl Into<Condition<String>>, properties: Properties) -> Self {
        DeclarationBlock::Conditional {
            properties: Properties::new(),
            on: vec![on(condition, properties)],
        }
    }
}

impl From<Properties> for DeclarationBlock {
    fn from(properties: Properties) -> Self {
        DeclarationBlock::Unconditional(properties)
    }
}

impl From<Override> for DeclarationBlock {
    fn from(value: Override) -> Self {
        DeclarationBlock::Conditional {
            properties: Properties::new(),
            on: vec![value],
        }
    }
}

/// Builds [`Properties`] from `name => value` pairs; values go through
/// `serde_json::json!`.
///
/// ```
/// let props = hooks::props! { "color" => "red", "z-index" => 3 };
/// assert_eq!(props["z-index"], 3);
/// ```
#[macro_export]
macro_rules! props {
    ($($name:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut properties = $crate::Properties::new();
        $(
            properties.insert(
                ::std::string::String::from($name),
                $crate::serde_json::json!($value),
            );
        )*
        properties
    }};
}

/// Everything a merge reads besides its arguments.
pub(crate) struct Merger<'a, F: ?Sized> {
    /// Hook name to global toggle id, for hooks that can apply.
    pub hook_ids: &'a IndexMap<String, String>,
    pub fallback: Fallback,
    pub sort: SortOptions,
    pub format: Format,
    pub stringify: &'a F,
}

impl<F: Stringify + ?Sized> Merger<'_, F> {
    pub fn merge<'b>(&self, blocks: impl IntoIterator<Item = &'b DeclarationBlock>) -> Properties {
        let mut style = Properties::new();
        let mut synthetic = SyntheticIds::new();
        let mut deferred = Vec::new();

        for block in blocks {
            match block {
                DeclarationBlock::Unconditional(properties) => {
                    self.write_literals(&mut style, properties)
                }
                DeclarationBlock::Conditional { properties, on } => {
                    self.write_literals(&mut style, properties);
                    if self.sort.conditional_styles {
                        deferred.extend(on);
                    } else {
                        for entry in on {
                            self.apply(&mut style, &mut synthetic, entry);
                        }
                    }
                }
            }
        }

        for entry in deferred {
            self.apply(&mut style, &mut synthetic, entry);
        }
        style
    }

    fn write_literals(&self, style: &mut Properties, properties: &Properties) {
        for (name, value) in properties {
            self.write(style, name.clone(), value.clone());
        }
    }

    fn write(&self, style: &mut Properties, name: String, value: Value) {
        if self.sort.properties {
            style.shift_remove(&name);
        }
        style.insert(name, value);
    }

    fn apply(&self, style: &mut Properties, synthetic: &mut SyntheticIds, entry: &Override) {
        let resolved = entry.condition.filter_map_atoms(&mut |name: &String| {
            let id = self.hook_ids.get(name).cloned();
            if id.is_none() {
                log::trace!("hook `{name}` is undeclared or never applies");
            }
            id
        });
        let Some(condition) = normalize(&resolved) else {
            log::trace!(
                "override of {} properties never applies; skipped",
                entry.properties.len()
            );
            return;
        };

        let toggle = match &condition {
            Condition::Atom(id) => Toggle::new(id.clone()),
            compound => self.lower(synthetic.mint(), compound, style),
        };

        let space = self.format.space;
        for (property, value) in &entry.properties {
            let Some(text) = self.stringify.stringify(property, value) else {
                log::trace!("`{property}` value cannot be stringified; skipped");
                continue;
            };
            let fallback = style
                .get(property)
                .and_then(|current| self.stringify.stringify(property, current))
                .unwrap_or_else(|| self.fallback.as_str().to_string());
            let chained = format!(
                "{}{space}{}",
                toggle.var_or(true, &text, self.format),
                toggle.var_or(false, &fallback, self.format),
            );
            self.write(style, property.clone(), Value::String(chained));
        }
    }

    /// Returns the toggle for `condition`, declaring call-local channels for
    /// every compound node under `name`.
    fn lower(&self, name: String, condition: &Condition<String>, style: &mut Properties) -> Toggle {
        match condition {
            Condition::Atom(id) => Toggle::new(id.clone()),
            Condition::Not(inner) => self.lower(name, inner, style).negate(),
            Condition::And(items) => self.lower_junction(name, Junction::And, items, style),
            Condition::Or(items) => self.lower_junction(name, Junction::Or, items, style),
        }
    }

    fn lower_junction(
        &self,
        name: String,
        junction: Junction,
        items: &[Condition<String>],
        style: &mut Properties,
    ) -> Toggle {
        let (first, rest) = match items {
            [] => return Toggle::new(name),
            [only] => return self.lower(name, only, style),
            [first, rest @ ..] => (first, rest),
        };

        let a = self.lower(format!("{name}A"), first, style);
        let b = self.lower_junction(format!("{name}B"), junction, rest, style);

        let toggle = Toggle::new(name);
        let [false_value, true_value] = combine(junction, &a, &b, self.format);
        self.write(style, toggle.channel(false), Value::String(false_value));
        self.write(style, toggle.channel(true), Value::String(true_value));
        toggle
    }
}
