//! Hook implementations: the selector or at-rule a hook is bound to.
//!
//! ## Accepted forms
//!
//! - Selector templates containing `&` for the styled element, e.g.
//!   `&:hover`, `.dark &`, `:has([name='a']:checked) &`
//! - At-rules: `@media ...`, `@container ...`, `@supports ...`

use std::fmt;
use std::str::FromStr;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until},
    character::complete::{char, multispace1},
    combinator::recognize,
    sequence::{preceded, tuple},
};
use serde::{Deserialize, Serialize};

use crate::error::{HooksError, Result};

/// The CSS scope that switches a hook on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HookImpl {
    /// A selector template; `&` stands for the styled element.
    Selector(String),
    /// An `@media`, `@container` or `@supports` prelude.
    AtRule(String),
}

impl HookImpl {
    pub fn parse(source: &str) -> Result<Self> {
        if at_rule_prelude(source).is_ok() {
            return Ok(HookImpl::AtRule(source.to_string()));
        }
        if selector_template(source).is_ok() {
            return Ok(HookImpl::Selector(source.to_string()));
        }
        Err(HooksError::InvalidHookImpl(source.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            HookImpl::Selector(s) | HookImpl::AtRule(s) => s,
        }
    }

    /// The selector with every `&` replaced by the universal selector.
    ///
    /// At-rules are returned unchanged.
    pub fn scoped_selector(&self) -> String {
        match self {
            HookImpl::Selector(s) => s.replace('&', "*"),
            HookImpl::AtRule(s) => s.clone(),
        }
    }
}

fn at_rule_prelude(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        char('@'),
        alt((tag("media"), tag("container"), tag("supports"))),
        multispace1,
    )))(input)
}

fn selector_template(input: &str) -> IResult<&str, &str> {
    preceded(take_until("&"), tag("&"))(input)
}

impl FromStr for HookImpl {
    type Err = HooksError;

    fn from_str(s: &str) -> Result<Self> {
        HookImpl::parse(s)
    }
}

impl TryFrom<String> for HookImpl {
    type Error = HooksError;

    fn try_from(value: String) -> Result<Self> {
        HookImpl::parse(&value)
    }
}

impl From<HookImpl> for String {
    fn from(value: HookImpl) -> Self {
        match value {
            HookImpl::Selector(s) | HookImpl::AtRule(s) => s,
        }
    }
}

impl fmt::Display for HookImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
