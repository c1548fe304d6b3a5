//! Toggle id assignment.
//!
//! Declared hooks get an id derived from their raw definition, so the
//! compiled style sheet is stable for a given configuration:
//!
//! 1. The raw condition is encoded as compact JSON (see
//!    [`condition::encoding`])
//! 2. A 31-bit rolling hash runs over the UTF-16 code units of that text
//! 3. The hash is printed in base 36
//!
//! In debug mode the hook name is prepended for readability. Distinct
//! definitions can collide; nothing guards against it.

use std::sync::Arc;

use condition::Condition;

use crate::error::Result;
use crate::hook::HookImpl;

/// Caller-supplied replacement for the default hook naming scheme.
pub type HookNameToId = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Hashes `encoded` into a short base-36 string.
pub fn hash(encoded: &str) -> String {
    let value = encoded.encode_utf16().fold(0u32, |acc, unit| {
        (acc << 5).wrapping_sub(acc).wrapping_add(u32::from(unit)) & 0x7fff_ffff
    });
    to_base36(value)
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

/// Replaces every character outside `[A-Za-z0-9-]` with `_`.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Computes the default id for a declared hook from its raw definition.
pub fn hook_id(name: &str, definition: &Condition<HookImpl>, debug: bool) -> Result<String> {
    let digest = hash(&serde_json::to_string(definition)?);
    Ok(if debug {
        format!("{}-{}", sanitize(name), digest)
    } else {
        digest
    })
}

/// Mints call-local toggle ids (`cond0`, `cond1`, ...) for compound
/// conditions met while merging styles.
///
/// A fresh counter is created for every merge so identical inputs always
/// produce identical output.
#[derive(Debug, Default)]
pub struct SyntheticIds {
    next: usize,
}

impl SyntheticIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mint(&mut self) -> String {
        let id = format!("cond{}", self.next);
        self.next += 1;
        id
    }
}
