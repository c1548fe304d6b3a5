//! Shorthands for building conditions.

use crate::Condition;

/// Every condition must hold.
pub fn all<S>(conditions: impl IntoIterator<Item = Condition<S>>) -> Condition<S> {
    Condition::And(conditions.into_iter().collect())
}

/// At least one condition must hold.
pub fn any<S>(conditions: impl IntoIterator<Item = Condition<S>>) -> Condition<S> {
    Condition::Or(conditions.into_iter().collect())
}

pub fn not<S>(condition: Condition<S>) -> Condition<S> {
    Condition::Not(Box::new(condition))
}
