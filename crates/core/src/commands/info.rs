//! Command line tokenization

/// A tokenized console command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    /// Whitespace-separated tokens (index 0 is the CVar name)
    args: Vec<String>,

    /// Full command string as received
    raw_string: String,
}

impl CommandInfo {
    /// Tokenize a command line on whitespace
    pub fn parse(line: &str) -> Self {
        Self {
            args: line.split_whitespace().map(str::to_string).collect(),
            raw_string: line.to_string(),
        }
    }

    /// Get the number of tokens (including the name at index 0)
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Get a token by index (0 = name)
    ///
    /// Returns empty string if index is out of bounds.
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map(|s| s.as_str()).unwrap_or("")
    }

    /// Get the CVar name (alias for arg(0))
    pub fn command_name(&self) -> &str {
        self.arg(0)
    }

    /// Get all tokens after the name as a single string
    pub fn arg_string(&self) -> String {
        if self.args.len() > 1 {
            self.args[1..].join(" ")
        } else {
            String::new()
        }
    }

    /// Get all tokens as a slice
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Get the full raw command string
    pub fn get_command_string(&self) -> &str {
        &self.raw_string
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_info() {
        let info = CommandInfo::parse("r.Bloom.Intensity  2.0\t3.0 ");

        assert_eq!(info.arg_count(), 3);
        assert_eq!(info.command_name(), "r.Bloom.Intensity");
        assert_eq!(info.arg(1), "2.0");
        assert_eq!(info.arg(2), "3.0");
        assert_eq!(info.arg(999), "");
        assert_eq!(info.arg_string(), "2.0 3.0");
        assert_eq!(info.get_command_string(), "r.Bloom.Intensity  2.0\t3.0 ");
    }

    #[test]
    fn test_blank_line() {
        let info = CommandInfo::parse("   ");
        assert_eq!(info.arg_count(), 0);
        assert_eq!(info.command_name(), "");
        assert!(info.args().is_empty());
    }
}
