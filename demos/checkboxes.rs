//! Six checkboxes and a list of statements about which ones are checked.
//!
//! Prints the hooks style sheet followed by the inline style of every element.
//! Run with `CSS_HOOKS_LOG=debug` to see what the compiler does.

use css_hooks::{
    Condition, DeclarationBlock, HookImpl, HooksConfig, Properties, all, any, create_hooks, not,
    on, props,
};

const BOXES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];
const MUTED: &str = "#999";

fn hook(name: &str) -> Condition<String> {
    Condition::atom(name)
}

fn every(names: &[&str]) -> Vec<Condition<String>> {
    names.iter().map(|name| hook(name)).collect()
}

fn config() -> css_hooks::Result<HooksConfig> {
    let mut config = HooksConfig::new();
    for name in BOXES {
        config = config.try_hook(name, &format!(":has([name='{name}']:checked) &"))?;
    }
    let hover = all([
        Condition::Atom(HookImpl::parse("&:hover")?),
        Condition::Atom(HookImpl::parse("@media (hover:hover)")?),
    ]);
    Ok(config.hook("hover", hover))
}

fn label(name: &str) -> [DeclarationBlock; 4] {
    [
        props! { "text-align" => "center" }.into(),
        DeclarationBlock::when(name, props! { "background" => "black", "color" => "white" }),
        DeclarationBlock::when(
            all([hook("hover"), not(hook(name))]),
            props! { "background" => "#ccc" },
        ),
        DeclarationBlock::when(all([hook("hover"), hook(name)]), props! { "background" => "#333" }),
    ]
}

fn statements() -> Vec<(&'static str, Condition<String>)> {
    vec![
        ("None selected", any(every(&BOXES))),
        ("Any selected", not(any(every(&BOXES)))),
        ("All selected", not(all(every(&BOXES)))),
        (
            "ab, cd, or ef selected",
            not(any([
                all(every(&["a", "b"])),
                all(every(&["c", "d"])),
                all(every(&["e", "f"])),
            ])),
        ),
        (
            "abc xor def selected",
            not(any([
                all([hook("a"), hook("b"), hook("c"), not(any(every(&["d", "e", "f"])))]),
                all([hook("d"), hook("e"), hook("f"), not(any(every(&["a", "b", "c"])))]),
            ])),
        ),
    ]
}

fn print_style(title: &str, style: &Properties) -> css_hooks::Result<()> {
    println!("{title}: {}", css_hooks::serde_json::to_string_pretty(style)?);
    Ok(())
}

fn main() -> css_hooks::Result<()> {
    css_hooks::log_init::init_logger_from_env();

    let debug = std::env::args().any(|arg| arg == "--debug");
    let hooks = create_hooks(config()?.debug(debug))?;

    println!("{}\n", hooks.style_sheet());

    for name in BOXES {
        print_style(&format!("label {name}"), &hooks.css(&label(name)))?;
    }

    for (text, muted_when) in statements() {
        let style = hooks.css(&[DeclarationBlock::Conditional {
            properties: Properties::new(),
            on: vec![on(muted_when, props! { "color" => MUTED })],
        }]);
        print_style(text, &style)?;
    }

    Ok(())
}
