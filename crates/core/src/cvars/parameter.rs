//! CVar metadata

use std::fmt;

use super::flags::{CVarFlags, CVarType};
use super::hash::CVarKey;

/// Identity and metadata of one registered CVar
///
/// Created once at registration and never mutated afterwards. The registry
/// hands out `Arc<Parameter>`, so a reference stays valid for the process.
pub struct Parameter {
    /// Name as registered (original casing)
    name: String,
    /// Case-insensitive lookup key
    key: CVarKey,
    /// Help text
    description: String,
    /// Display grouping
    category: String,
    /// Scalar kind
    kind: CVarType,
    /// Index into the typed array matching `kind`
    slot: usize,
    /// Write restrictions
    flags: CVarFlags,
}

impl Parameter {
    pub(crate) fn new(
        name: &str,
        description: &str,
        category: &str,
        kind: CVarType,
        slot: usize,
        flags: CVarFlags,
    ) -> Self {
        Self {
            name: name.to_string(),
            key: CVarKey::of(name),
            description: description.to_string(),
            category: category.to_string(),
            kind,
            slot,
            flags,
        }
    }

    /// Get the CVar name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the lookup key
    pub fn key(&self) -> CVarKey {
        self.key
    }

    /// Get the help text
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the scalar kind
    pub fn kind(&self) -> CVarType {
        self.kind
    }

    /// Get the slot index in the array for `kind()`
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Get the flags
    pub fn flags(&self) -> CVarFlags {
        self.flags
    }

    /// Check whether `name` refers to this parameter (case-insensitive)
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("key", &format_args!("{}", self.key))
            .field("kind", &self.kind)
            .field("slot", &self.slot)
            .field("flags", &self.flags)
            .field("category", &self.category)
            .finish()
    }
}
