//! AutoCVar - Core
//!
//! A process-wide registry of named, typed console variables (CVars) that
//! engine code reads through cached handles and that consoles and config
//! files reach by name.
//!
//! # Modules
//!
//! - [`cvars`] - registry, typed storage and [`AutoCVar`] handles
//! - [`commands`] - the `<name> [value]` console protocol and name completion
//! - [`config`] - applying TOML files to registered CVars

// Allow the crate to refer to itself as `autocvar_core` for proc macro compatibility
extern crate self as autocvar_core;

pub mod commands;
pub mod config;
pub mod cvars;

// Re-export commonly used items
pub use commands::{complete, execute, CommandError, CommandReply, CommandResult};
pub use config::{ConfigError, ConfigReport, ConfigResult};
pub use cvars::{
    registry, AutoCVar, AutoCVarDouble, AutoCVarFloat, AutoCVarInt, AutoCVarString, CVarError,
    CVarFlags, CVarKey, CVarRegistry, CVarResult, CVarType, CVarValue, Parameter,
};

// Re-export macros
pub use autocvar_macros::auto_cvar;
