//! Toggles: one boolean encoded as a pair of custom properties.
//!
//! Toggle `x` owns `--x-0` (the false channel) and `--x-1` (the true
//! channel). At any time exactly one channel holds the guaranteed-invalid
//! value `initial`; that channel is the active one, because `var()`
//! references to it fall through to their fallback. The other channel holds
//! an empty value, so references to it substitute nothing.
//!
//! Binary operators are built from references to their operands:
//!
//! | node       | false channel            | true channel             |
//! |------------|--------------------------|--------------------------|
//! | `and(a,b)` | `var(a0) var(b0)`        | `var(a1, var(b1))`       |
//! | `or(a,b)`  | `var(a0, var(b0))`       | `var(a1) var(b1)`        |
//!
//! A concatenation is invalid as soon as one reference is invalid; a
//! fallback chain is invalid only when every link is.

/// Whitespace used when printing declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Format {
    pub space: &'static str,
    pub newline: &'static str,
    pub indent: &'static str,
}

impl Format {
    pub fn new(debug: bool) -> Self {
        if debug {
            Self {
                space: " ",
                newline: "\n",
                indent: "  ",
            }
        } else {
            Self {
                space: "",
                newline: "",
                indent: "",
            }
        }
    }

    /// The always-valid value of an inactive channel. Compact output uses a
    /// single space since a declaration needs at least one token.
    pub fn empty_value(&self) -> &'static str {
        if self.space.is_empty() { " " } else { "" }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Junction {
    And,
    Or,
}

impl Junction {
    /// The operator that takes the place of this one under a negation.
    pub fn dual(self) -> Self {
        match self {
            Junction::And => Junction::Or,
            Junction::Or => Junction::And,
        }
    }
}

/// A reference to a toggle, optionally read inverted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Toggle {
    pub id: String,
    pub negated: bool,
}

impl Toggle {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            negated: false,
        }
    }

    /// Reads the same custom properties with the channels swapped.
    pub fn negate(self) -> Self {
        Self {
            negated: !self.negated,
            ..self
        }
    }

    /// Name of the custom property carrying `value`.
    pub fn channel(&self, value: bool) -> String {
        format!("--{}-{}", self.id, u8::from(value != self.negated))
    }

    pub fn var(&self, value: bool) -> String {
        format!("var({})", self.channel(value))
    }

    pub fn var_or(&self, value: bool, fallback: &str, format: Format) -> String {
        format!("var({},{}{})", self.channel(value), format.space, fallback)
    }
}

/// Values of the `[false, true]` channels of a binary node over `a` and `b`.
pub(crate) fn combine(junction: Junction, a: &Toggle, b: &Toggle, format: Format) -> [String; 2] {
    let space = format.space;
    let concat = |value: bool| format!("{}{}{}", a.var(value), space, b.var(value));
    let chain = |value: bool| a.var_or(value, &b.var(value), format);
    match junction {
        Junction::And => [concat(false), chain(true)],
        Junction::Or => [chain(false), concat(true)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negated_toggles_swap_channels() {
        let toggle = Toggle::new("x");
        assert_eq!(toggle.channel(true), "--x-1");
        assert_eq!(toggle.clone().negate().channel(true), "--x-0");
        assert_eq!(toggle.negate().negate().channel(false), "--x-0");
    }

    #[test]
    fn and_concatenates_false_and_chains_true() {
        let [f, t] = combine(
            Junction::And,
            &Toggle::new("a"),
            &Toggle::new("b"),
            Format::new(true),
        );
        assert_eq!(f, "var(--a-0) var(--b-0)");
        assert_eq!(t, "var(--a-1, var(--b-1))");
    }

    #[test]
    fn or_respects_negated_operands() {
        let [f, t] = combine(
            Junction::Or,
            &Toggle::new("a").negate(),
            &Toggle::new("b"),
            Format::new(false),
        );
        assert_eq!(f, "var(--a-1,var(--b-0))");
        assert_eq!(t, "var(--a-0)var(--b-1)");
    }
}
