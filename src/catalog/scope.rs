use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::error::{ElfError, ElfResult};

static NEXT_SCOPE: AtomicU64 = AtomicU64::new(1);

/// Per-character identifier used to namespace style rules, so several characters can share one
/// document without their rules colliding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdScope(String);

impl IdScope {
    /// Allocate a fresh process-unique scope (`elf-1`, `elf-2`, ...).
    pub fn next() -> Self {
        let n = NEXT_SCOPE.fetch_add(1, Ordering::Relaxed);
        Self(format!("elf-{n}"))
    }

    /// Use a fixed name. It must be a valid XML id / CSS identifier: an ASCII letter followed by
    /// ASCII letters, digits, `-` or `_`.
    pub fn named(name: impl Into<String>) -> ElfResult<Self> {
        let name = name.into();
        let mut chars = name.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ElfError::validation(format!("invalid id scope '{name}'")));
        }
        Ok(Self(name))
    }

    /// The scope as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IdScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/scope.rs"]
mod tests;
