//! # css-hooks - conditional inline styles compiled to custom properties
//!
//! This crate re-exports the workspace members:
//!
//! - [`condition`]: boolean conditions over atoms and their normalization
//! - [`hooks`]: hook configuration, style sheet compilation and the style merge
//!
//! ```rust
//! use css_hooks::{Condition, DeclarationBlock, HooksConfig, all, create_hooks, props};
//!
//! let atom = |name: &str| Condition::<String>::atom(name);
//! let hooks = create_hooks(
//!     HooksConfig::new()
//!         .try_hook("hover", "&:hover")?
//!         .try_hook("enabled", "&:enabled")?,
//! )?;
//!
//! let style = hooks.css(&[
//!     DeclarationBlock::from(props! { "color" => "white" }),
//!     DeclarationBlock::when(all([atom("enabled"), atom("hover")]), props! { "color" => "pink" }),
//! ]);
//! assert!(style["--cond0-1"].is_string());
//! assert!(hooks.style_sheet().starts_with("*{"));
//! # Ok::<(), css_hooks::HooksError>(())
//! ```

pub mod log_init;

pub use condition;
pub use hooks;

pub use hooks::{
    Condition, DeclarationBlock, Fallback, GenericStringify, HookImpl, Hooks, HooksConfig,
    HooksError, HooksSystem, Override, Properties, Result, SortOptions, Stringify, all, any,
    create_hooks, not, on, props, serde_json,
};
pub use log_init::init_logger;
