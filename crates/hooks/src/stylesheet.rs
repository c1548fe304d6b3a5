//! Style sheet compilation.
//!
//! Every declared hook is lowered into a tree of toggles:
//!
//! - Leaves declare their channel pair in the root `*` rule with the false
//!   channel active, then again inside the hook's own selector or at-rule
//!   with the true channel active
//! - `and`/`or` nodes name their operands `<id>A` and `<id>B` and declare
//!   their own channels in the root rule (see [`crate::toggle`])
//! - `not` declares nothing; it flips the polarity handed to its operand.
//!   Negated `and`/`or` nodes are lowered as their De Morgan duals so the
//!   negation always lands on leaves
//!
//! ## Output layout
//!
//! ```css
//! * { <every channel declaration, hook by hook> }
//! <leaf scope> { <leaf channels, inverted> }
//! ...
//! ```

use condition::Condition;

use crate::hook::HookImpl;
use crate::toggle::{Format, Junction, Toggle, combine};

/// A leaf whose scoped rule still has to be written.
struct Leaf<'a> {
    id: String,
    hook: &'a HookImpl,
    negated: bool,
}

/// Compiles `(toggle id, normalized condition)` pairs into CSS text.
///
/// Conditions are expected in normalized form. Longer operand lists are
/// paired from the right, the same way the normalizer folds them.
pub fn compile<'a>(
    hooks: impl IntoIterator<Item = (&'a str, &'a Condition<HookImpl>)>,
    debug: bool,
) -> String {
    let format = Format::new(debug);
    let mut root = String::new();
    let mut leaves = Vec::new();

    for (id, condition) in hooks {
        lower(id.to_string(), condition, false, format, &mut root, &mut leaves);
    }

    let Format {
        space,
        newline,
        indent,
    } = format;
    let mut sheet = format!("*{space}{{{newline}{root}}}{newline}");

    for leaf in &leaves {
        let active = !leaf.negated;
        match leaf.hook {
            HookImpl::Selector(_) => {
                sheet.push_str(&format!(
                    "{}{space}{{{newline}{}}}{newline}",
                    leaf.hook.scoped_selector(),
                    variable_pair(&leaf.id, active, 1, format),
                ));
            }
            HookImpl::AtRule(rule) => {
                sheet.push_str(&format!(
                    "{rule}{space}{{{newline}{indent}*{space}{{{newline}{}{indent}}}{newline}}}{newline}",
                    variable_pair(&leaf.id, active, 2, format),
                ));
            }
        }
    }

    log::debug!(
        "compiled style sheet: {} toggle leaves, {} bytes",
        leaves.len(),
        sheet.len()
    );
    sheet
}

fn lower<'a>(
    id: String,
    condition: &'a Condition<HookImpl>,
    negated: bool,
    format: Format,
    root: &mut String,
    leaves: &mut Vec<Leaf<'a>>,
) {
    match condition {
        Condition::Atom(hook) => {
            root.push_str(&variable_pair(&id, negated, 1, format));
            leaves.push(Leaf { id, hook, negated });
        }
        Condition::Not(inner) => lower(id, inner, !negated, format, root, leaves),
        Condition::And(items) => {
            lower_junction(id, Junction::And, items, negated, format, root, leaves)
        }
        Condition::Or(items) => {
            lower_junction(id, Junction::Or, items, negated, format, root, leaves)
        }
    }
}

fn lower_junction<'a>(
    id: String,
    junction: Junction,
    items: &'a [Condition<HookImpl>],
    negated: bool,
    format: Format,
    root: &mut String,
    leaves: &mut Vec<Leaf<'a>>,
) {
    let (first, rest) = match items {
        [] => return,
        [only] => return lower(id, only, negated, format, root, leaves),
        [first, rest @ ..] => (first, rest),
    };

    let a = format!("{id}A");
    let b = format!("{id}B");
    lower(a.clone(), first, negated, format, root, leaves);
    lower_junction(b.clone(), junction, rest, negated, format, root, leaves);

    let junction = if negated { junction.dual() } else { junction };
    let [false_value, true_value] = combine(junction, &Toggle::new(a), &Toggle::new(b), format);
    let Format {
        space,
        newline,
        indent,
    } = format;
    root.push_str(&format!("{indent}--{id}-0:{space}{false_value};{newline}"));
    root.push_str(&format!("{indent}--{id}-1:{space}{true_value};{newline}"));
}

/// Declares both channels of `id`, making the `active` one invalid.
fn variable_pair(id: &str, active: bool, indents: usize, format: Format) -> String {
    let indent = format.indent.repeat(indents);
    [false, true]
        .into_iter()
        .map(|channel| {
            let value = if channel == active {
                "initial"
            } else {
                format.empty_value()
            };
            format!(
                "{indent}--{id}-{}:{}{value};{}",
                u8::from(channel),
                format.space,
                format.newline
            )
        })
        .collect()
}
