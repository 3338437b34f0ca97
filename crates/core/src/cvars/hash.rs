//! Case-insensitive name hashing for CVar lookup
//!
//! CVar names are folded to ASCII lowercase and run through a polynomial
//! hash with base 131. The result is the registry's lookup key.

use std::fmt;

/// Multiplier of the polynomial name hash
const HASH_BASE: u32 = 131;

/// Case-insensitive polynomial hash (compile-time capable)
pub const fn name_hash(data: &[u8]) -> u32 {
    let mut hash: u32 = 0;
    let mut i = 0;
    while i < data.len() {
        hash = hash
            .wrapping_mul(HASH_BASE)
            .wrapping_add(data[i].to_ascii_lowercase() as u32);
        i += 1;
    }
    hash
}

/// Lookup key of a CVar name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CVarKey(pub u32);

impl CVarKey {
    /// Compute the key for a name (compile-time capable)
    pub const fn of(name: &str) -> Self {
        Self(name_hash(name.as_bytes()))
    }
}

impl From<&str> for CVarKey {
    fn from(name: &str) -> Self {
        Self::of(name)
    }
}

impl fmt::Display for CVarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(name_hash(b""), 0);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(name_hash(b"a"), 97);
        assert_eq!(name_hash(b"ab"), 97 * 131 + 98);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            CVarKey::of("r.Shadow.FixCascade"),
            CVarKey::of("r.shadow.fixcascade")
        );
        assert_eq!(CVarKey::of("R.BLOOM"), CVarKey::from("r.bloom"));
    }

    #[test]
    fn test_distinct_names() {
        assert_ne!(CVarKey::of("r.Bloom.Intensity"), CVarKey::of("r.Bloom.Threshold"));
    }

    #[test]
    fn test_const_evaluation() {
        const KEY: CVarKey = CVarKey::of("r.Shadow.Softness");
        assert_eq!(KEY, CVarKey::of("R.SHADOW.SOFTNESS"));
    }
}
