//! Resolves compiled output the way a browser would and checks that the
//! cascade picks the intended values.

mod support;

use std::collections::HashMap;

use hooks::{
    Condition, DeclarationBlock, HookImpl, Hooks, HooksConfig, all, any, create_hooks, not, on,
    props,
};
use support::{Element, parse_sheet};

fn c(name: &str) -> Condition<String> {
    Condition::atom(name)
}

/// Resolves `property` for an element on which exactly the scoped rules
/// in `active` apply.
fn resolve(hooks: &Hooks, blocks: &[DeclarationBlock], active: &[&str], property: &str) -> String {
    let sheet = parse_sheet(hooks.style_sheet());
    let style = hooks.css(blocks);
    let element = Element::new(&sheet, |prelude| active.iter().any(|a| *a == prelude), &style);
    element
        .property(&style, property)
        .unwrap_or_else(|| panic!("`{property}` resolved to nothing in {style:?}"))
}

#[test]
fn hover_override_resolves_per_state() {
    for debug in [false, true] {
        let hooks = create_hooks(
            HooksConfig::new()
                .try_hook("hover", "&:hover")
                .unwrap()
                .debug(debug),
        )
        .unwrap();
        let blocks = [DeclarationBlock::Conditional {
            properties: props! { "color" => "black" },
            on: vec![on("hover", props! { "color" => "pink" })],
        }];

        assert_eq!(resolve(&hooks, &blocks, &["*:hover"], "color"), "pink");
        assert_eq!(resolve(&hooks, &blocks, &[], "color"), "black");
    }
}

#[test]
fn unset_fallback_shows_when_nothing_came_before() {
    let hooks = create_hooks(HooksConfig::new().try_hook("hover", "&:hover").unwrap()).unwrap();
    let blocks = [DeclarationBlock::when("hover", props! { "color" => "pink" })];
    assert_eq!(resolve(&hooks, &blocks, &[], "color"), "unset");
}

const SCOPES: [(&str, &str); 3] = [("a", ".a &"), ("b", ".b &"), ("c", "@media (c)")];

fn scope(atom: &str) -> HookImpl {
    let (_, source) = SCOPES.iter().find(|(name, _)| *name == atom).unwrap();
    HookImpl::parse(source).unwrap()
}

fn conditions() -> Vec<Condition<String>> {
    vec![
        c("a"),
        not(c("a")),
        all([c("a"), c("b")]),
        any([c("a"), c("b")]),
        not(all([c("a"), c("b")])),
        not(any([c("a"), not(c("b"))])),
        all([c("a"), any([c("b"), not(c("c"))])]),
        any([not(all([c("a"), c("b")])), c("c")]),
        all([c("a"), c("b"), c("c")]),
        any([c("a"), c("b"), c("c")]),
        not(all([c("a"), not(any([c("b"), c("c")]))])),
        all([not(c("a")), not(c("b"))]),
        any([all([c("a"), not(c("b"))]), all([not(c("a")), c("b")])]),
    ]
}

/// Every assignment of truth values to `a`, `b` and `c`.
fn assignments() -> impl Iterator<Item = HashMap<&'static str, bool>> {
    (0u8..8).map(|bits| {
        SCOPES
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (*name, bits & (1 << i) != 0))
            .collect()
    })
}

fn active_preludes(assignment: &HashMap<&str, bool>) -> Vec<String> {
    assignment
        .iter()
        .filter(|(_, on)| **on)
        .map(|(name, _)| scope(name).scoped_selector())
        .collect()
}

fn check_truth_table(hooks: &Hooks, gate: Condition<String>, expected: &Condition<String>) {
    let blocks = [DeclarationBlock::Conditional {
        properties: props! { "content" => "no" },
        on: vec![on(gate, props! { "content" => "yes" })],
    }];
    for assignment in assignments() {
        let preludes = active_preludes(&assignment);
        let active: Vec<&str> = preludes.iter().map(String::as_str).collect();
        let want = expected.evaluate(&mut |atom: &String| assignment[atom.as_str()]);
        let got = resolve(hooks, &blocks, &active, "content");
        assert_eq!(
            got,
            if want { "yes" } else { "no" },
            "{expected:?} with {assignment:?}"
        );
    }
}

#[test]
fn compiled_hooks_follow_boolean_logic() {
    for debug in [false, true] {
        let mut config = HooksConfig::new().debug(debug);
        for (i, condition) in conditions().iter().enumerate() {
            config = config.hook(format!("h{i}"), condition.map_atoms(|atom| scope(atom)));
        }
        let hooks = create_hooks(config).unwrap();

        for (i, condition) in conditions().iter().enumerate() {
            check_truth_table(&hooks, c(&format!("h{i}")), condition);
        }
    }
}

#[test]
fn call_local_toggles_follow_boolean_logic() {
    for debug in [false, true] {
        let mut config = HooksConfig::new().debug(debug);
        for (name, source) in SCOPES {
            config = config.try_hook(name, source).unwrap();
        }
        let hooks = create_hooks(config).unwrap();

        for condition in conditions() {
            check_truth_table(&hooks, condition.clone(), &condition);
        }
    }
}

#[test]
fn call_local_toggles_combine_compound_hooks() {
    let hooks = create_hooks(
        HooksConfig::new()
            .hook("ab", all(["a", "b"].map(|n| Condition::Atom(scope(n)))))
            .try_hook("c", "@media (c)")
            .unwrap(),
    )
    .unwrap();

    let gate = any([c("ab"), not(c("c"))]);
    let expected = any([all([c("a"), c("b")]), not(c("c"))]);
    check_truth_table(&hooks, gate, &expected);
}

