//! Serde representation of conditions.
//!
//! Atoms are encoded as themselves; operators are single-key objects:
//!
//! ```json
//! {"and": ["&:hover", {"not": "&:disabled"}]}
//! ```
//!
//! The compact JSON form of a condition doubles as its canonical encoding
//! for id hashing, so the field order and spelling here are load-bearing.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Condition;

impl<S: Serialize> Serialize for Condition<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        match self {
            Condition::Atom(atom) => atom.serialize(serializer),
            Condition::And(items) => single_entry(serializer, "and", items),
            Condition::Or(items) => single_entry(serializer, "or", items),
            Condition::Not(inner) => single_entry(serializer, "not", inner),
        }
    }
}

fn single_entry<Ser: Serializer, V: Serialize + ?Sized>(
    serializer: Ser,
    key: &str,
    value: &V,
) -> Result<Ser::Ok, Ser::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(key, value)?;
    map.end()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr<S> {
    And { and: Vec<Condition<S>> },
    Or { or: Vec<Condition<S>> },
    Not { not: Box<Condition<S>> },
    Atom(S),
}

impl<S> From<Repr<S>> for Condition<S> {
    fn from(repr: Repr<S>) -> Self {
        match repr {
            Repr::And { and } => Condition::And(and),
            Repr::Or { or } => Condition::Or(or),
            Repr::Not { not } => Condition::Not(not),
            Repr::Atom(atom) => Condition::Atom(atom),
        }
    }
}

impl<'de, S: Deserialize<'de>> Deserialize<'de> for Condition<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Repr::deserialize(deserializer).map(Condition::from)
    }
}
