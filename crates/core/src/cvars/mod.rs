//! CVar System - Named, typed, runtime-tunable variables
//!
//! This module provides the process-wide CVar registry and two ways to reach a value:
//!
//! 1. **Handles** - [`AutoCVar`] registers once and caches its slot index; reads and
//!    writes skip the name lookup and the registry lock
//! 2. **Name lookup** - [`CVarRegistry::find`] and friends, used by the console and
//!    the config loader
//!
//! Four scalar kinds are supported: `i32`, `f64`, `f32` and `String`. Each kind has
//! its own fixed-capacity array; a slot index is assigned once and never reused.
//!
//! # Handle Example
//!
//! ```ignore
//! use autocvar_core::auto_cvar;
//!
//! #[auto_cvar(name = "r.Shadow.FixCascade", description = "Fix shadow cascade", category = "Shadows")]
//! static FIX_CASCADE: i32 = 1;
//!
//! fn cascade() -> i32 {
//!     FIX_CASCADE.get()
//! }
//! ```
//!
//! # Name Lookup Example
//!
//! ```ignore
//! use autocvar_core::cvars::registry;
//!
//! if let Some(parameter) = registry().find("r.shadow.fixcascade") {
//!     tracing::info!("{} = {}", parameter.name(), registry().current_string(&parameter));
//! }
//! ```

mod array;
mod auto;
mod error;
mod flags;
mod hash;
mod parameter;
mod registry;
mod value;

// Re-export main types
pub use array::{Slot, TypedArray};
pub use auto::{AutoCVar, AutoCVarDouble, AutoCVarFloat, AutoCVarInt, AutoCVarString};
pub use error::{CVarError, CVarResult};
pub use flags::{CVarFlags, CVarType};
pub use hash::{name_hash, CVarKey};
pub use parameter::Parameter;
pub use registry::{registry, CVarRegistry, MAX_CVARS_PER_TYPE};
pub use value::{AtomicF32, AtomicF64, CVarValue, ValueCell};
