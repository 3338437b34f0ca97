//! Fixed-capacity storage for one scalar kind
//!
//! Slots are allocated up front and handed out densely from 0. A slot never
//! moves or gets reused, so a cached index stays valid for the process and
//! readers can reach a slot without the registry lock.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use super::parameter::Parameter;
use super::value::{CVarValue, ValueCell};

/// One value cell with its initial value and owning parameter
pub struct Slot<T: CVarValue> {
    /// Value at registration, never mutated
    initial: T,
    /// Live value
    current: T::Cell,
    /// Owning parameter
    parameter: Arc<Parameter>,
}

impl<T: CVarValue> Slot<T> {
    /// Get the registration value
    pub fn initial(&self) -> &T {
        &self.initial
    }

    /// Get the current value
    pub fn current(&self) -> T {
        self.current.load()
    }

    /// Get the cell holding the current value
    pub fn cell(&self) -> &T::Cell {
        &self.current
    }

    /// Get the owning parameter
    pub fn parameter(&self) -> &Arc<Parameter> {
        &self.parameter
    }

    /// Write the current value
    ///
    /// Returns false if the write was dropped because the parameter is INIT_ONCE.
    pub fn set(&self, value: T) -> bool {
        if self.parameter.flags().is_init_once() {
            tracing::debug!(
                "Dropped write to init-once CVar {}",
                self.parameter.name()
            );
            return false;
        }
        self.current.store(value);
        true
    }

    /// Restore the registration value
    pub fn reset(&self) -> bool {
        self.set(self.initial.clone())
    }

    /// Check if the current value equals the registration value
    pub fn is_default(&self) -> bool {
        self.current() == self.initial
    }
}

/// Fixed-capacity array of slots for one scalar kind
pub struct TypedArray<T: CVarValue> {
    slots: Box<[OnceLock<Slot<T>>]>,
    /// High-water mark; slots below it are initialized
    len: AtomicUsize,
}

impl<T: CVarValue> TypedArray<T> {
    /// Create an empty array with room for `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| OnceLock::new()).collect(),
            len: AtomicUsize::new(0),
        }
    }

    /// Maximum number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots in use
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Check if no slot is in use
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if another append would exceed capacity
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Store a value pair in the next free slot and return its index
    ///
    /// Callers must serialize appends; the registry does so under its write lock.
    ///
    /// # Panics
    /// Panics if the array is full. Running out of slots means more CVars of one
    /// type are declared than the build allows, which cannot be fixed at runtime.
    pub(crate) fn append(&self, initial: T, current: T, parameter: Arc<Parameter>) -> usize {
        let index = self.len.load(Ordering::Acquire);
        if index >= self.capacity() {
            tracing::error!(
                "CVar capacity exceeded for {} values ({} slots) while registering {}",
                T::TYPE,
                self.capacity(),
                parameter.name()
            );
            panic!(
                "CVar capacity exceeded: all {} {} slots are in use",
                self.capacity(),
                T::TYPE
            );
        }

        let slot = Slot {
            initial,
            current: T::Cell::new(current),
            parameter,
        };
        if self.slots[index].set(slot).is_err() {
            panic!("CVar slot {} assigned twice", index);
        }
        self.len.store(index + 1, Ordering::Release);
        index
    }

    /// Get a slot by index, if it is in use
    pub fn get(&self, index: usize) -> Option<&Slot<T>> {
        self.slots.get(index)?.get()
    }

    /// Get a slot by index
    ///
    /// # Panics
    /// Panics if no slot has been assigned at `index`.
    pub fn slot(&self, index: usize) -> &Slot<T> {
        match self.get(index) {
            Some(slot) => slot,
            None => panic!(
                "{} CVar slot {} is not registered (len {})",
                T::TYPE,
                index,
                self.len()
            ),
        }
    }

    /// Read the current value of a slot
    pub fn read(&self, index: usize) -> T {
        self.slot(index).current()
    }

    /// Get the cell holding a slot's current value
    pub fn read_ptr(&self, index: usize) -> &T::Cell {
        self.slot(index).cell()
    }

    /// Write a slot's current value, unless its parameter is INIT_ONCE
    pub fn write(&self, value: T, index: usize) -> bool {
        self.slot(index).set(value)
    }

    /// Iterate over all slots in use, in index order
    pub fn iter(&self) -> impl Iterator<Item = &Slot<T>> + '_ {
        self.slots[..self.len()].iter().filter_map(OnceLock::get)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvars::flags::{CVarFlags, CVarType};

    fn param(name: &str, kind: CVarType, slot: usize, flags: CVarFlags) -> Arc<Parameter> {
        Arc::new(Parameter::new(name, "test", "test", kind, slot, flags))
    }

    #[test]
    fn test_append_assigns_dense_indices() {
        let array = TypedArray::<i32>::with_capacity(4);
        assert!(array.is_empty());

        let a = array.append(1, 1, param("a", CVarType::Int32, 0, CVarFlags::empty()));
        let b = array.append(2, 2, param("b", CVarType::Int32, 1, CVarFlags::empty()));

        assert_eq!((a, b), (0, 1));
        assert_eq!(array.len(), 2);
        assert_eq!(array.read(0), 1);
        assert_eq!(array.read(1), 2);
        assert!(array.get(2).is_none());
    }

    #[test]
    fn test_write_then_read() {
        let array = TypedArray::<f32>::with_capacity(1);
        let idx = array.append(1.5, 1.5, param("f", CVarType::Float, 0, CVarFlags::empty()));

        assert!(array.write(2.0, idx));
        assert_eq!(array.read(idx), 2.0);
        assert_eq!(*array.slot(idx).initial(), 1.5);
        assert_eq!(array.read_ptr(idx).load(), 2.0);
    }

    #[test]
    fn test_init_once_drops_writes() {
        let array = TypedArray::<String>::with_capacity(1);
        let idx = array.append(
            "pcf".to_string(),
            "pcf".to_string(),
            param("s", CVarType::String, 0, CVarFlags::INIT_ONCE),
        );

        for _ in 0..3 {
            assert!(!array.write("vsm".to_string(), idx));
        }
        assert_eq!(array.read(idx), "pcf");
    }

    #[test]
    fn test_reset() {
        let array = TypedArray::<f64>::with_capacity(1);
        let idx = array.append(0.5, 0.5, param("d", CVarType::Double, 0, CVarFlags::empty()));

        array.write(4.0, idx);
        assert!(!array.slot(idx).is_default());
        assert!(array.slot(idx).reset());
        assert!(array.slot(idx).is_default());
        assert_eq!(array.read(idx), 0.5);
    }

    #[test]
    fn test_iter_in_order() {
        let array = TypedArray::<i32>::with_capacity(8);
        for i in 0..3 {
            let name = format!("v{}", i);
            array.append(i, i, param(&name, CVarType::Int32, i as usize, CVarFlags::empty()));
        }

        let names: Vec<_> = array.iter().map(|s| s.parameter().name().to_string()).collect();
        assert_eq!(names, vec!["v0", "v1", "v2"]);
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_append_beyond_capacity_panics() {
        let array = TypedArray::<i32>::with_capacity(1);
        array.append(0, 0, param("a", CVarType::Int32, 0, CVarFlags::empty()));
        array.append(0, 0, param("b", CVarType::Int32, 1, CVarFlags::empty()));
    }
}
