//! CVar registry - process-wide name table and typed storage
//!
//! Registering a name takes the write lock; name lookup takes the read lock.
//! Slot values are reached through the typed arrays and never take the
//! registry lock.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use super::array::TypedArray;
use super::error::{CVarError, CVarResult};
use super::flags::{CVarFlags, CVarType};
use super::hash::CVarKey;
use super::parameter::Parameter;
use super::value::CVarValue;

/// Slots available per scalar kind in the global registry
pub const MAX_CVARS_PER_TYPE: usize = 2000;

/// Registry of CVar metadata and the four typed arrays
pub struct CVarRegistry {
    /// Lookup by case-insensitive name key
    parameters: RwLock<HashMap<CVarKey, Arc<Parameter>>>,
    ints: TypedArray<i32>,
    doubles: TypedArray<f64>,
    floats: TypedArray<f32>,
    strings: TypedArray<String>,
}

/// Global registry instance, built on first access
static REGISTRY: LazyLock<CVarRegistry> = LazyLock::new(CVarRegistry::new);

/// Get the global registry
pub fn registry() -> &'static CVarRegistry {
    &REGISTRY
}

impl CVarRegistry {
    /// Create a registry with the default capacity per kind
    pub fn new() -> Self {
        Self::with_capacity(MAX_CVARS_PER_TYPE)
    }

    /// Create a registry with room for `capacity` CVars of each kind
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parameters: RwLock::new(HashMap::new()),
            ints: TypedArray::with_capacity(capacity),
            doubles: TypedArray::with_capacity(capacity),
            floats: TypedArray::with_capacity(capacity),
            strings: TypedArray::with_capacity(capacity),
        }
    }

    pub(crate) fn ints(&self) -> &TypedArray<i32> {
        &self.ints
    }

    pub(crate) fn doubles(&self) -> &TypedArray<f64> {
        &self.doubles
    }

    pub(crate) fn floats(&self) -> &TypedArray<f32> {
        &self.floats
    }

    pub(crate) fn strings(&self) -> &TypedArray<String> {
        &self.strings
    }

    /// Get the storage array for one kind
    pub fn array<T: CVarValue>(&self) -> &TypedArray<T> {
        T::array(self)
    }

    /// Register a CVar and return its parameter
    ///
    /// Registering a name that is already present replaces the map entry; the
    /// previous parameter and its slot stay alive but are no longer found by
    /// name. Well-formed code registers each name once.
    ///
    /// # Panics
    /// Panics if `name` is empty or the array for `T` is full.
    pub fn register<T: CVarValue>(
        &self,
        name: &str,
        description: &str,
        category: &str,
        initial: T,
        current: T,
        flags: CVarFlags,
    ) -> Arc<Parameter> {
        assert!(!name.trim().is_empty(), "CVar name must not be empty");

        let mut parameters = self.parameters.write();
        let array = T::array(self);

        let slot = array.len();
        let parameter = Arc::new(Parameter::new(
            name,
            description,
            category,
            T::TYPE,
            slot,
            flags,
        ));
        let assigned = array.append(initial, current, Arc::clone(&parameter));
        debug_assert_eq!(assigned, slot);

        if let Some(previous) = parameters.insert(parameter.key(), Arc::clone(&parameter)) {
            tracing::warn!(
                "CVar '{}' re-registered as '{}' ({}); previous {} entry replaced",
                previous.name(),
                name,
                T::TYPE,
                previous.kind()
            );
        }

        tracing::debug!("Registered CVar {} ({}) in slot {}", name, T::TYPE, slot);
        parameter
    }

    /// Find a CVar by name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<Arc<Parameter>> {
        self.parameters
            .read()
            .get(&CVarKey::of(name))
            .filter(|parameter| parameter.matches(name))
            .cloned()
    }

    /// Find a CVar by precomputed key
    pub fn find_by_key(&self, key: CVarKey) -> Option<Arc<Parameter>> {
        self.parameters.read().get(&key).cloned()
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.parameters.read().len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.parameters.read().is_empty()
    }

    // ==================== SLOT ACCESS ====================

    /// Read the current value of a slot
    pub fn get_current<T: CVarValue>(&self, slot: usize) -> T {
        T::array(self).read(slot)
    }

    /// Write the current value of a slot
    ///
    /// Dropped without error if the slot's parameter is INIT_ONCE; the return
    /// value tells whether the write was applied.
    pub fn set_current<T: CVarValue>(&self, value: T, slot: usize) -> bool {
        T::array(self).write(value, slot)
    }

    /// Get the cell holding a slot's current value
    pub fn current_ptr<T: CVarValue>(&self, slot: usize) -> &T::Cell {
        T::array(self).read_ptr(slot)
    }

    /// Restore a slot to its registration value
    pub fn reset<T: CVarValue>(&self, slot: usize) -> bool {
        T::array(self).slot(slot).reset()
    }

    // ==================== NAME ACCESS ====================

    fn find_typed<T: CVarValue>(&self, name: &str) -> CVarResult<Arc<Parameter>> {
        let parameter = self
            .find(name)
            .ok_or_else(|| CVarError::NotFound(name.to_string()))?;

        if parameter.kind() != T::TYPE {
            return Err(CVarError::TypeMismatch {
                name: parameter.name().to_string(),
                actual: parameter.kind(),
                requested: T::TYPE,
            });
        }
        Ok(parameter)
    }

    /// Read a CVar's current value by name
    pub fn get_by_name<T: CVarValue>(&self, name: &str) -> CVarResult<T> {
        let parameter = self.find_typed::<T>(name)?;
        Ok(self.get_current(parameter.slot()))
    }

    /// Write a CVar's current value by name
    ///
    /// Returns `Ok(false)` when the CVar is INIT_ONCE and the write was dropped.
    pub fn set_by_name<T: CVarValue>(&self, name: &str, value: T) -> CVarResult<bool> {
        let parameter = self.find_typed::<T>(name)?;
        Ok(self.set_current(value, parameter.slot()))
    }

    /// Parse `text` as the CVar's kind and write it by name
    pub fn set_from_str(&self, name: &str, text: &str) -> CVarResult<bool> {
        let parameter = self
            .find(name)
            .ok_or_else(|| CVarError::NotFound(name.to_string()))?;
        self.parse_and_set(&parameter, text)
    }

    /// Parse `text` as the parameter's kind and write it
    ///
    /// The parameter must come from this registry.
    pub fn parse_and_set(&self, parameter: &Parameter, text: &str) -> CVarResult<bool> {
        match parameter.kind() {
            CVarType::Int32 => self.parse_into::<i32>(parameter, text),
            CVarType::Double => self.parse_into::<f64>(parameter, text),
            CVarType::Float => self.parse_into::<f32>(parameter, text),
            CVarType::String => self.parse_into::<String>(parameter, text),
        }
    }

    fn parse_into<T: CVarValue>(&self, parameter: &Parameter, text: &str) -> CVarResult<bool> {
        let value = T::parse(text).ok_or_else(|| CVarError::InvalidValue {
            name: parameter.name().to_string(),
            value: text.to_string(),
            expected: T::TYPE,
        })?;
        Ok(self.set_current(value, parameter.slot()))
    }

    /// Format the parameter's current value for display
    ///
    /// The parameter must come from this registry.
    pub fn current_string(&self, parameter: &Parameter) -> String {
        let slot = parameter.slot();
        match parameter.kind() {
            CVarType::Int32 => self.ints.read(slot).format(),
            CVarType::Double => self.doubles.read(slot).format(),
            CVarType::Float => self.floats.read(slot).format(),
            CVarType::String => self.strings.read(slot).format(),
        }
    }

    /// Format the parameter's registration value for display
    pub fn initial_string(&self, parameter: &Parameter) -> String {
        let slot = parameter.slot();
        match parameter.kind() {
            CVarType::Int32 => self.ints.slot(slot).initial().format(),
            CVarType::Double => self.doubles.slot(slot).initial().format(),
            CVarType::Float => self.floats.slot(slot).initial().format(),
            CVarType::String => self.strings.slot(slot).initial().format(),
        }
    }

    /// Restore the parameter's registration value
    pub fn reset_parameter(&self, parameter: &Parameter) -> bool {
        let slot = parameter.slot();
        match parameter.kind() {
            CVarType::Int32 => self.reset::<i32>(slot),
            CVarType::Double => self.reset::<f64>(slot),
            CVarType::Float => self.reset::<f32>(slot),
            CVarType::String => self.reset::<String>(slot),
        }
    }

    // ==================== ENUMERATION ====================

    /// All parameters that own a slot, in kind then slot order
    pub fn parameters(&self) -> Vec<Arc<Parameter>> {
        let mut parameters = Vec::new();
        parameters.extend(self.ints.iter().map(|s| Arc::clone(s.parameter())));
        parameters.extend(self.doubles.iter().map(|s| Arc::clone(s.parameter())));
        parameters.extend(self.floats.iter().map(|s| Arc::clone(s.parameter())));
        parameters.extend(self.strings.iter().map(|s| Arc::clone(s.parameter())));
        parameters
    }

    /// Names of all parameters that own a slot
    pub fn names(&self) -> Vec<String> {
        self.parameters()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }
}

impl Default for CVarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CVarRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CVarRegistry")
            .field("names", &self.len())
            .field("ints", &self.ints.len())
            .field("doubles", &self.doubles.len())
            .field("floats", &self.floats.len())
            .field("strings", &self.strings.len())
            .finish()
    }
}
