//! Console Command Protocol
//!
//! Interprets console text against the CVar registry. Any command surface
//! (an in-game console, a shell, the config loader's diagnostics) feeds raw
//! lines in and shows the reply or error text.
//!
//! # Grammar
//!
//! Lines are split on whitespace:
//!
//! - `<name>` - print the CVar's description and current value
//! - `<name> <value>` - parse `value` by the CVar's type and store it
//!
//! Any other token count is rejected. Writes to READ_ONLY or INIT_ONCE CVars
//! are refused with a message.
//!
//! # Example
//!
//! ```ignore
//! use autocvar_core::commands::{complete, execute};
//!
//! match execute("r.Bloom.Intensity 2.0") {
//!     Ok(reply) => println!("{}", reply),
//!     Err(err) => println!("{}", err),
//! }
//!
//! for name in complete("r.bloom") {
//!     println!("  {}", name);
//! }
//! ```

mod console;
mod info;

pub use console::{
    complete, complete_in, execute, execute_in, CommandError, CommandReply, CommandResult,
};
pub use info::CommandInfo;
