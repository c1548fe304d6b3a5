//! # hooks - conditional styles on top of CSS custom properties
//!
//! Named hooks bind a boolean condition to selectors and at-rules. This crate
//! turns them into:
//!
//! - **A style sheet** where every hook becomes a pair of custom properties
//!   flipped by its selector or at-rule ([`Hooks::style_sheet`])
//! - **Flat styles** where conditional overrides are expressed as `var()`
//!   fallback chains reading those properties ([`Hooks::css`])
//!
//! ## Quick Start
//!
//! ```rust
//! use hooks::{DeclarationBlock, HooksConfig, create_hooks, on, props};
//!
//! let hooks = create_hooks(
//!     HooksConfig::new()
//!         .try_hook("hover", "&:hover")
//!         .unwrap()
//!         .hook_name_to_id(|name| name.to_string()),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     hooks.style_sheet(),
//!     "*{--hover-0:initial;--hover-1: ;}*:hover{--hover-0: ;--hover-1:initial;}"
//! );
//!
//! let style = hooks.css(&[DeclarationBlock::Conditional {
//!     properties: props! { "color" => "black" },
//!     on: vec![on("hover", props! { "color" => "pink" })],
//! }]);
//! assert_eq!(style["color"], "var(--hover-1,pink)var(--hover-0,black)");
//! ```
//!
//! ## Modules
//!
//! - [`config`]: hooks configuration, fallback keyword, sort options
//! - [`hook`]: selector templates and at-rules
//! - [`id`]: toggle id assignment
//! - [`stylesheet`]: style sheet compilation
//! - [`merge`]: declaration blocks and the merge
//! - [`stringify`]: value stringification
//! - [`error`]: configuration errors

pub mod config;
pub mod error;
pub mod hook;
pub mod id;
pub mod merge;
pub mod stringify;
pub mod stylesheet;
pub mod system;
mod toggle;

pub use condition::{self, Condition, all, any, not};
pub use config::{Fallback, HooksConfig, SortOptions};
pub use error::{HooksError, Result};
pub use hook::HookImpl;
pub use merge::{DeclarationBlock, Override, Properties, on};
pub use serde_json;
pub use stringify::{GenericStringify, Stringify};
pub use system::{Hooks, HooksSystem, create_hooks};
