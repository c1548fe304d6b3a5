//! A tiny custom-property resolver for checking compiled output.
//!
//! It understands exactly the CSS this crate emits: a root `*` rule, scoped
//! rules with a selector prelude, and at-rules wrapping a single `*` rule.
//! Which scoped rules apply is decided by the caller from the prelude text.

#![allow(dead_code)]

use std::collections::HashMap;

use hooks::Properties;

type Declarations = Vec<(String, String)>;

#[derive(Debug, Default)]
pub struct Sheet {
    pub root: Declarations,
    pub scoped: Vec<(String, Declarations)>,
}

pub fn parse_sheet(text: &str) -> Sheet {
    let mut sheet = Sheet::default();
    let mut rest = text.trim_start();
    let mut first = true;

    while !rest.is_empty() {
        let open = rest.find('{').expect("rule without a block");
        let prelude = rest[..open].trim().to_string();
        rest = &rest[open + 1..];

        if prelude.starts_with('@') {
            let inner = rest.trim_start();
            let inner = inner.strip_prefix('*').expect("at-rule without `*`");
            let inner = inner.trim_start().strip_prefix('{').expect("missing block");
            let close = inner.find('}').expect("unclosed rule");
            let body = parse_declarations(&inner[..close]);
            let after = inner[close + 1..].trim_start();
            rest = after.strip_prefix('}').expect("unclosed at-rule");
            sheet.scoped.push((prelude, body));
        } else {
            let close = rest.find('}').expect("unclosed rule");
            let body = parse_declarations(&rest[..close]);
            rest = &rest[close + 1..];
            if first {
                assert_eq!(prelude, "*", "style sheet must open with the root rule");
                sheet.root = body;
            } else {
                sheet.scoped.push((prelude, body));
            }
        }
        rest = rest.trim_start();
        first = false;
    }
    sheet
}

fn parse_declarations(block: &str) -> Declarations {
    block
        .split(';')
        .filter(|d| !d.trim().is_empty())
        .map(|d| {
            let (name, value) = d.split_once(':').expect("declaration without `:`");
            (name.trim().to_string(), value.to_string())
        })
        .collect()
}

/// Computed custom properties of one element.
pub struct Element {
    custom: HashMap<String, String>,
}

impl Element {
    /// Cascades the root rule, then every scoped rule `matches` accepts, then
    /// the custom properties of the inline `style`.
    pub fn new(sheet: &Sheet, matches: impl Fn(&str) -> bool, style: &Properties) -> Self {
        let mut custom = HashMap::new();
        let scoped = sheet
            .scoped
            .iter()
            .filter(|(prelude, _)| matches(prelude.as_str()))
            .flat_map(|(_, body)| body.iter());
        for (name, value) in sheet.root.iter().chain(scoped) {
            custom.insert(name.clone(), value.clone());
        }
        for (name, value) in style {
            if name.starts_with("--") {
                let value = value.as_str().expect("custom property is text");
                custom.insert(name.clone(), value.to_string());
            }
        }
        Self { custom }
    }

    /// The computed value of a custom property; `None` is the
    /// guaranteed-invalid value.
    pub fn custom(&self, name: &str) -> Option<String> {
        let raw = self.custom.get(name)?;
        if raw.trim() == "initial" {
            return None;
        }
        self.substitute(raw)
    }

    /// Substitutes every `var()` in `text`; `None` when any reference is
    /// invalid and has no usable fallback.
    pub fn substitute(&self, text: &str) -> Option<String> {
        let mut out = String::new();
        let mut rest = text;
        while let Some(start) = rest.find("var(") {
            out.push_str(&rest[..start]);
            let args_start = start + "var(".len();
            let (args, after) = split_call(&rest[args_start..]);
            let (name, fallback) = match split_top_level_comma(args) {
                Some((name, fallback)) => (name.trim(), Some(fallback)),
                None => (args.trim(), None),
            };
            let value = match self.custom(name) {
                Some(value) => value,
                None => self.substitute(fallback?)?,
            };
            out.push_str(&value);
            rest = after;
        }
        out.push_str(rest);
        Some(out)
    }

    /// The used value of a regular property set inline.
    pub fn property(&self, style: &Properties, name: &str) -> Option<String> {
        let value = style.get(name)?.as_str()?;
        self.substitute(value).map(|v| v.trim().to_string())
    }
}

// Splits `args...) rest` at the parenthesis closing the call.
fn split_call(text: &str) -> (&str, &str) {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return (&text[..i], &text[i + 1..]),
            ')' => depth -= 1,
            _ => {}
        }
    }
    panic!("unbalanced var() call in {text:?}");
}

fn split_top_level_comma(text: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => return Some((&text[..i], &text[i + 1..])),
            _ => {}
        }
    }
    None
}
