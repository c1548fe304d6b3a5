//! The condition tree.

/// A boolean expression over atoms of type `S`.
///
/// Raw conditions may carry any number of operands. After
/// [`normalize`](crate::normalize()) every `And`/`Or` has exactly two
/// operands and no `Not` wraps another `Not`.
///
/// An empty `And` or `Or` is the loose spelling of "never applies"; the
/// normalizer turns it into `None`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Condition<S> {
    Atom(S),
    And(Vec<Condition<S>>),
    Or(Vec<Condition<S>>),
    Not(Box<Condition<S>>),
}

impl<S> Condition<S> {
    pub fn atom(value: impl Into<S>) -> Self {
        Condition::Atom(value.into())
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Condition::Atom(_))
    }

    /// Returns the operator keyword used in the serialized form, or `None`
    /// for atoms.
    pub fn operator(&self) -> Option<&'static str> {
        match self {
            Condition::Atom(_) => None,
            Condition::And(_) => Some("and"),
            Condition::Or(_) => Some("or"),
            Condition::Not(_) => Some("not"),
        }
    }

    /// Visits every atom from left to right.
    pub fn atoms(&self) -> Vec<&S> {
        let mut out = Vec::new();
        self.collect_atoms(&mut out);
        out
    }

    fn collect_atoms<'a>(&'a self, out: &mut Vec<&'a S>) {
        match self {
            Condition::Atom(atom) => out.push(atom),
            Condition::And(items) | Condition::Or(items) => {
                for item in items {
                    item.collect_atoms(out);
                }
            }
            Condition::Not(inner) => inner.collect_atoms(out),
        }
    }

    /// Rewrites every atom, keeping the tree shape.
    pub fn map_atoms<T>(&self, mut f: impl FnMut(&S) -> T) -> Condition<T> {
        self.filter_map_atoms(&mut |atom| Some(f(atom)))
    }

    /// Rewrites every atom; atoms for which `f` returns `None` become the
    /// empty disjunction, which the normalizer drops as absent.
    pub fn filter_map_atoms<T>(&self, f: &mut impl FnMut(&S) -> Option<T>) -> Condition<T> {
        match self {
            Condition::Atom(atom) => match f(atom) {
                Some(mapped) => Condition::Atom(mapped),
                None => Condition::Or(Vec::new()),
            },
            Condition::And(items) => {
                Condition::And(items.iter().map(|c| c.filter_map_atoms(f)).collect())
            }
            Condition::Or(items) => {
                Condition::Or(items.iter().map(|c| c.filter_map_atoms(f)).collect())
            }
            Condition::Not(inner) => Condition::Not(Box::new(inner.filter_map_atoms(f))),
        }
    }

    /// Evaluates the condition with the given truth assignment for atoms.
    ///
    /// Only meaningful for normalized conditions: the normalizer drops empty
    /// operands rather than treating them as `false`.
    pub fn evaluate(&self, truth: &mut impl FnMut(&S) -> bool) -> bool {
        match self {
            Condition::Atom(atom) => truth(atom),
            Condition::And(items) => items.iter().all(|c| c.evaluate(truth)),
            Condition::Or(items) => items.iter().any(|c| c.evaluate(truth)),
            Condition::Not(inner) => !inner.evaluate(truth),
        }
    }
}

impl From<&str> for Condition<String> {
    fn from(value: &str) -> Self {
        Condition::Atom(value.to_string())
    }
}

impl From<String> for Condition<String> {
    fn from(value: String) -> Self {
        Condition::Atom(value)
    }
}
