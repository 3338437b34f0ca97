//! Scalar value kinds and their storage cells
//!
//! Each supported scalar type names the cell it is stored in. Cells are read
//! and written without the registry lock: integers and floats live in atomics
//! of their native width, strings behind a per-slot lock so a reader never
//! sees a torn value.

use std::fmt;
use std::sync::atomic::{AtomicI32, AtomicU32, AtomicU64, Ordering};

use parking_lot::RwLock;

use super::array::TypedArray;
use super::flags::CVarType;
use super::registry::CVarRegistry;

mod private {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for String {}
}

/// Storage cell holding the current value of one slot
pub trait ValueCell<T>: Send + Sync {
    /// Create a cell holding `value`
    fn new(value: T) -> Self;

    /// Read the value
    fn load(&self) -> T;

    /// Replace the value
    fn store(&self, value: T);
}

/// Trait for the scalar types a CVar can hold
///
/// Sealed: only `i32`, `f32`, `f64` and `String` are supported.
pub trait CVarValue: private::Sealed + Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Kind tag recorded in the parameter
    const TYPE: CVarType;

    /// Cell type used for the current value
    type Cell: ValueCell<Self>;

    /// Parse from console or config text
    fn parse(text: &str) -> Option<Self>;

    /// Format for display (strings are quoted)
    fn format(&self) -> String;

    /// The registry array holding values of this type
    fn array(registry: &CVarRegistry) -> &TypedArray<Self>;
}

/// `f32` stored as its bit pattern
#[derive(Debug)]
pub struct AtomicF32(AtomicU32);

impl AtomicF32 {
    pub fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    pub fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    pub fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

/// `f64` stored as its bit pattern
#[derive(Debug)]
pub struct AtomicF64(AtomicU64);

impl AtomicF64 {
    pub fn new(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    pub fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    pub fn store(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl ValueCell<i32> for AtomicI32 {
    fn new(value: i32) -> Self {
        AtomicI32::new(value)
    }

    fn load(&self) -> i32 {
        AtomicI32::load(self, Ordering::Relaxed)
    }

    fn store(&self, value: i32) {
        AtomicI32::store(self, value, Ordering::Relaxed);
    }
}

impl ValueCell<f32> for AtomicF32 {
    fn new(value: f32) -> Self {
        AtomicF32::new(value)
    }

    fn load(&self) -> f32 {
        AtomicF32::load(self)
    }

    fn store(&self, value: f32) {
        AtomicF32::store(self, value);
    }
}

impl ValueCell<f64> for AtomicF64 {
    fn new(value: f64) -> Self {
        AtomicF64::new(value)
    }

    fn load(&self) -> f64 {
        AtomicF64::load(self)
    }

    fn store(&self, value: f64) {
        AtomicF64::store(self, value);
    }
}

impl ValueCell<String> for RwLock<String> {
    fn new(value: String) -> Self {
        RwLock::new(value)
    }

    fn load(&self) -> String {
        self.read().clone()
    }

    fn store(&self, value: String) {
        *self.write() = value;
    }
}

/// Whether `text` spells infinity rather than overflowing to it
fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Parse a float, rejecting finite text that overflows the type
fn parse_float<F>(text: &str, is_infinite: fn(F) -> bool) -> Option<F>
where
    F: std::str::FromStr + Copy,
{
    let text = text.trim();
    let value = text.parse::<F>().ok()?;
    if is_infinite(value) && !is_infinity_literal(text) {
        return None;
    }
    Some(value)
}

impl CVarValue for i32 {
    const TYPE: CVarType = CVarType::Int32;
    type Cell = AtomicI32;

    fn parse(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }

    fn format(&self) -> String {
        ToString::to_string(self)
    }

    fn array(registry: &CVarRegistry) -> &TypedArray<Self> {
        registry.ints()
    }
}

impl CVarValue for f32 {
    const TYPE: CVarType = CVarType::Float;
    type Cell = AtomicF32;

    fn parse(text: &str) -> Option<Self> {
        parse_float::<f32>(text, f32::is_infinite)
    }

    fn format(&self) -> String {
        // Whole numbers keep a ".0" so "2.0" reads as a float
        if self.is_finite() && self.fract() == 0.0 && self.abs() < 1e15 {
            format!("{:.1}", self)
        } else {
            ToString::to_string(self)
        }
    }

    fn array(registry: &CVarRegistry) -> &TypedArray<Self> {
        registry.floats()
    }
}

impl CVarValue for f64 {
    const TYPE: CVarType = CVarType::Double;
    type Cell = AtomicF64;

    fn parse(text: &str) -> Option<Self> {
        parse_float::<f64>(text, f64::is_infinite)
    }

    fn format(&self) -> String {
        if self.is_finite() && self.fract() == 0.0 && self.abs() < 1e15 {
            format!("{:.1}", self)
        } else {
            ToString::to_string(self)
        }
    }

    fn array(registry: &CVarRegistry) -> &TypedArray<Self> {
        registry.doubles()
    }
}

impl CVarValue for String {
    const TYPE: CVarType = CVarType::String;
    type Cell = RwLock<String>;

    fn parse(text: &str) -> Option<Self> {
        Some(text.to_string())
    }

    fn format(&self) -> String {
        format!("\"{}\"", self)
    }

    fn array(registry: &CVarRegistry) -> &TypedArray<Self> {
        registry.strings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_i32() {
        assert_eq!(<i32 as CVarValue>::parse("42"), Some(42));
        assert_eq!(<i32 as CVarValue>::parse(" -10 "), Some(-10));
        assert_eq!(<i32 as CVarValue>::parse("1.5"), None);
        assert_eq!(<i32 as CVarValue>::parse("not_a_number"), None);
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(<f32 as CVarValue>::parse("2.0"), Some(2.0));
        assert_eq!(<f32 as CVarValue>::parse("-2.5"), Some(-2.5));
        assert_eq!(<f64 as CVarValue>::parse("0.125"), Some(0.125));
        assert_eq!(<f64 as CVarValue>::parse("abc"), None);
    }

    #[test]
    fn test_parse_float_overflow() {
        assert_eq!(<f32 as CVarValue>::parse("1e39"), None);
        assert_eq!(<f32 as CVarValue>::parse("-1e39"), None);
        assert_eq!(<f64 as CVarValue>::parse("1e400"), None);
        assert_eq!(<f32 as CVarValue>::parse("3.4e38"), Some(3.4e38));
        assert_eq!(<f64 as CVarValue>::parse("1e300"), Some(1e300));

        assert_eq!(<f32 as CVarValue>::parse("inf"), Some(f32::INFINITY));
        assert_eq!(<f32 as CVarValue>::parse("-Infinity"), Some(f32::NEG_INFINITY));
        assert_eq!(<f64 as CVarValue>::parse("+inf"), Some(f64::INFINITY));
    }

    #[test]
    fn test_parse_string_is_raw() {
        assert_eq!(
            <String as CVarValue>::parse("pcf"),
            Some("pcf".to_string())
        );
    }

    #[test]
    fn test_format() {
        assert_eq!(CVarValue::format(&7i32), "7");
        assert_eq!(CVarValue::format(&1.5f32), "1.5");
        assert_eq!(CVarValue::format(&2.0f32), "2.0");
        assert_eq!(CVarValue::format(&1.1f32), "1.1");
        assert_eq!(CVarValue::format(&0.25f64), "0.25");
        assert_eq!(CVarValue::format(&3.0f64), "3.0");
        assert_eq!(CVarValue::format(&3e15f32), "3000000000000000");
        assert_eq!(CVarValue::format(&16777216f32), "16777216.0");
        assert_eq!(CVarValue::format(&"pcf".to_string()), "\"pcf\"");
    }

    #[test]
    fn test_cells() {
        let int = <AtomicI32 as ValueCell<i32>>::new(3);
        ValueCell::store(&int, 9);
        assert_eq!(ValueCell::load(&int), 9);

        let float = AtomicF32::new(1.5);
        float.store(-0.5);
        assert_eq!(float.load(), -0.5);

        let double = AtomicF64::new(0.1);
        double.store(1e-9);
        assert_eq!(double.load(), 1e-9);

        let text = <RwLock<String> as ValueCell<String>>::new("a".to_string());
        ValueCell::store(&text, "b".to_string());
        assert_eq!(ValueCell::load(&text), "b");
    }
}
