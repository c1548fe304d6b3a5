//! Canonicalization of condition trees.
//!
//! ## Rules
//!
//! - An empty `and`/`or` (or one whose operands are all absent) is absent
//! - An atom is kept as-is
//! - `not(not(x))` collapses to `x`; `not(absent)` is absent
//! - Surviving operands of `and`/`or` are right-folded into binary pairs:
//!   `and(a, b, c)` becomes `and(a, and(b, c))`
//!
//! Operand order is never changed.

use crate::Condition;

/// Normalizes `cond` into strict binary form, or `None` when it can never
/// apply.
///
/// The result is a fixed point: normalizing it again yields the same tree.
pub fn normalize<S: Clone>(cond: &Condition<S>) -> Option<Condition<S>> {
    match cond {
        Condition::Atom(atom) => Some(Condition::Atom(atom.clone())),
        Condition::Not(inner) => match normalize(inner)? {
            // `not(and(not(x)))` collapses the same way as `not(not(x))`
            Condition::Not(twice) => Some(*twice),
            other => Some(Condition::Not(Box::new(other))),
        },
        Condition::And(items) => fold(items, Condition::And),
        Condition::Or(items) => fold(items, Condition::Or),
    }
}

fn fold<S: Clone>(
    items: &[Condition<S>],
    op: fn(Vec<Condition<S>>) -> Condition<S>,
) -> Option<Condition<S>> {
    let survivors: Vec<Condition<S>> = items.iter().filter_map(normalize).collect();
    pair_up(survivors, op)
}

// Survivors are already normalized, so the tail can be paired without
// normalizing each operand a second time.
fn pair_up<S>(
    mut survivors: Vec<Condition<S>>,
    op: fn(Vec<Condition<S>>) -> Condition<S>,
) -> Option<Condition<S>> {
    if survivors.len() <= 1 {
        return survivors.pop();
    }
    let tail = survivors.split_off(1);
    let head = survivors.pop()?;
    let rest = pair_up(tail, op)?;
    Some(op(vec![head, rest]))
}
