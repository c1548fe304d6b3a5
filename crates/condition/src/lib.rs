//! Boolean condition trees over an arbitrary atom type.
//!
//! A [`Condition`] is either an atom or one of the `and`/`or`/`not` operators
//! applied to nested conditions. Conditions are written loosely (any number of
//! operands, redundant negations, empty operand lists) and then brought into a
//! canonical binary form by [`normalize`].
//!
//! # Usage
//!
//! ```
//! use condition::{all, any, not, normalize, Condition};
//!
//! let raw: Condition<String> = all([
//!     "hover".into(),
//!     any(["a".into(), "b".into(), "c".into()]),
//!     not(not("focus".into())),
//! ]);
//!
//! let canonical = normalize(&raw).unwrap();
//! assert_eq!(
//!     canonical,
//!     Condition::And(vec![
//!         "hover".into(),
//!         Condition::And(vec![
//!             Condition::Or(vec![
//!                 "a".into(),
//!                 Condition::Or(vec!["b".into(), "c".into()]),
//!             ]),
//!             "focus".into(),
//!         ]),
//!     ])
//! );
//!
//! // An empty conjunction never applies.
//! assert_eq!(normalize(&all::<String>([])), None);
//! ```
//!
//! ## Modules
//!
//! - [`condition`]: the [`Condition`] tree and atom rewriting helpers
//! - [`normalize`](mod@normalize): canonicalization into strict binary form
//! - [`builders`]: `all`/`any`/`not` shorthands
//! - [`encoding`]: the serde representation (`{"and": [...]}` etc.)

pub mod builders;
pub mod condition;
pub mod encoding;
pub mod normalize;

pub use builders::{all, any, not};
pub use condition::Condition;
pub use normalize::normalize;
