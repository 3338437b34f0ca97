//! Auto CVars - registration handles with a cached slot index
//!
//! An [`AutoCVar`] registers its name in the global registry exactly once,
//! when it is constructed, and keeps only the slot index it was given. Reads
//! and writes through the handle go straight to the typed array and never
//! take the registry lock or repeat the name lookup.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::LazyLock;
//! use autocvar_core::cvars::{AutoCVarFloat, CVarFlags};
//!
//! static BLOOM_INTENSITY: LazyLock<AutoCVarFloat> = LazyLock::new(|| {
//!     AutoCVarFloat::new(
//!         "r.Bloom.Intensity",
//!         "Bloom intensity",
//!         "Render",
//!         1.5,
//!         CVarFlags::READ_AND_WRITE,
//!     )
//! });
//!
//! fn bloom_strength() -> f32 {
//!     BLOOM_INTENSITY.get()
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::flags::CVarFlags;
use super::parameter::Parameter;
use super::registry::registry;
use super::value::CVarValue;

/// Registration handle for one CVar in the global registry
pub struct AutoCVar<T: CVarValue> {
    /// Slot index in the array for `T`
    slot: usize,
    _marker: PhantomData<fn() -> T>,
}

/// Integer CVar handle
pub type AutoCVarInt = AutoCVar<i32>;
/// Float CVar handle
pub type AutoCVarFloat = AutoCVar<f32>;
/// Double CVar handle
pub type AutoCVarDouble = AutoCVar<f64>;
/// String CVar handle
pub type AutoCVarString = AutoCVar<String>;

impl<T: CVarValue> AutoCVar<T> {
    /// Register a CVar in the global registry and bind to its slot
    ///
    /// # Panics
    /// Panics if the name is empty or no slot is left for `T`.
    pub fn new(
        name: &str,
        description: &str,
        category: &str,
        default: T,
        flags: CVarFlags,
    ) -> Self {
        let parameter = registry().register(
            name,
            description,
            category,
            default.clone(),
            default,
            flags,
        );

        Self {
            slot: parameter.slot(),
            _marker: PhantomData,
        }
    }

    /// Get the current value
    pub fn get(&self) -> T {
        registry().get_current(self.slot)
    }

    /// Set the current value
    ///
    /// Returns false if the CVar is INIT_ONCE and the write was dropped.
    pub fn set(&self, value: T) -> bool {
        registry().set_current(value, self.slot)
    }

    /// Get the cell holding the current value
    ///
    /// Lets hot code keep a `'static` reference and read it directly.
    pub fn get_ptr(&self) -> &'static T::Cell {
        registry().current_ptr::<T>(self.slot)
    }

    /// Restore the registration value
    pub fn reset(&self) -> bool {
        registry().reset::<T>(self.slot)
    }

    /// Check if the current value equals the registration value
    pub fn is_default(&self) -> bool {
        registry().array::<T>().slot(self.slot).is_default()
    }

    /// Get the registration value
    pub fn default_value(&self) -> &'static T {
        registry().array::<T>().slot(self.slot).initial()
    }

    /// Get the parameter metadata
    pub fn parameter(&self) -> &'static Arc<Parameter> {
        registry().array::<T>().slot(self.slot).parameter()
    }

    /// Get the CVar name
    pub fn name(&self) -> &'static str {
        self.parameter().name()
    }

    /// Get the slot index
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl<T: CVarValue> fmt::Debug for AutoCVar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoCVar")
            .field("name", &self.name())
            .field("type", &T::TYPE)
            .field("slot", &self.slot)
            .field("value", &self.get())
            .finish()
    }
}

impl<T: CVarValue> fmt::Display for AutoCVar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name(), self.get().format())
    }
}
