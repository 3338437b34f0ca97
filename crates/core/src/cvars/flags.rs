//! CVar flags and scalar kinds

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Flags that control how a CVar may be written
    ///
    /// An empty set means no restrictions beyond the defaults.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CVarFlags: u32 {
        /// Cannot be changed from the interactive console
        const READ_ONLY = 0x01;
        /// Readable and writable from everywhere
        const READ_AND_WRITE = 0x02;
        /// Keeps its registration value; later writes are dropped
        const INIT_ONCE = 0x04;
    }
}

impl CVarFlags {
    /// Returns true if the interactive console must refuse writes
    pub fn rejects_console_writes(self) -> bool {
        self.intersects(Self::READ_ONLY | Self::INIT_ONCE)
    }

    /// Returns true if every write after registration is dropped
    pub fn is_init_once(self) -> bool {
        self.contains(Self::INIT_ONCE)
    }
}

/// Scalar kind stored by a CVar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CVarType {
    /// 32-bit signed integer
    Int32,
    /// 64-bit float
    Double,
    /// 32-bit float
    Float,
    /// UTF-8 string
    String,
}

impl CVarType {
    /// All kinds, in enumeration order
    pub const ALL: [CVarType; 4] = [Self::Int32, Self::Double, Self::Float, Self::String];

    /// Short lowercase name used in messages
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int32 => "int",
            Self::Double => "double",
            Self::Float => "float",
            Self::String => "string",
        }
    }
}

impl fmt::Display for CVarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
