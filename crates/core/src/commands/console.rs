//! Console protocol - query, assign and complete CVars from text

use std::fmt;
use std::sync::Arc;

use super::info::CommandInfo;
use crate::cvars::{registry, CVarError, CVarRegistry};

/// Successful outcome of a console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandReply {
    /// `<name>`: the CVar's help text and current value
    Query {
        name: String,
        description: String,
        value: String,
    },
    /// `<name> <value>`: the value now stored
    Assigned { name: String, value: String },
}

impl fmt::Display for CommandReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query {
                name,
                description,
                value,
            } => {
                write!(f, "{} = {}", name, value)?;
                if !description.is_empty() {
                    write!(f, "\n  {}", description)?;
                }
                Ok(())
            }
            Self::Assigned { name, value } => write!(f, "{} set to {}", name, value),
        }
    }
}

/// Console command failure; `Display` is the message shown to the user
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    /// Nothing but whitespace was entered
    #[error("Empty command")]
    Empty,

    /// No CVar with this name
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The CVar is READ_ONLY or INIT_ONCE
    #[error("{0} is read-only")]
    ReadOnly(String),

    /// The value did not parse for the CVar's type
    #[error(transparent)]
    Rejected(#[from] CVarError),

    /// More than one value token
    #[error("Too many arguments: expected `<name> [value]`, received {0} arguments")]
    ArgumentCount(usize),
}

/// Result of executing a console command
pub type CommandResult = Result<CommandReply, CommandError>;

/// Execute a command line against the global registry
pub fn execute(line: &str) -> CommandResult {
    execute_in(registry(), line)
}

/// Execute a command line against `registry`
///
/// - `<name>` reports the description and current value
/// - `<name> <value>` parses the value by the CVar's type and stores it
pub fn execute_in(registry: &CVarRegistry, line: &str) -> CommandResult {
    let info = CommandInfo::parse(line);
    tracing::debug!("Console command: {}", info.get_command_string().trim());

    match info.arg_count() {
        0 => Err(CommandError::Empty),
        1 => query(registry, &info),
        2 => assign(registry, &info),
        count => Err(CommandError::ArgumentCount(count - 1)),
    }
}

fn query(registry: &CVarRegistry, info: &CommandInfo) -> CommandResult {
    let name = info.command_name();
    let parameter = registry
        .find(name)
        .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;

    Ok(CommandReply::Query {
        name: parameter.name().to_string(),
        description: parameter.description().to_string(),
        value: registry.current_string(&parameter),
    })
}

fn assign(registry: &CVarRegistry, info: &CommandInfo) -> CommandResult {
    let name = info.command_name();
    let parameter = registry
        .find(name)
        .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;

    if parameter.flags().rejects_console_writes() {
        return Err(CommandError::ReadOnly(parameter.name().to_string()));
    }

    registry.parse_and_set(&parameter, info.arg(1))?;

    let value = registry.current_string(&parameter);
    tracing::info!("{} set to {}", parameter.name(), value);
    Ok(CommandReply::Assigned {
        name: parameter.name().to_string(),
        value,
    })
}

/// Complete a CVar name prefix against the global registry
pub fn complete(prefix: &str) -> Vec<String> {
    complete_in(registry(), prefix)
}

/// Complete a CVar name prefix (case-insensitive)
///
/// Every match across all four kinds is returned, in kind then slot order.
/// Slots left behind by a re-registration are skipped.
pub fn complete_in(registry: &CVarRegistry, prefix: &str) -> Vec<String> {
    let prefix = prefix.to_ascii_lowercase();

    registry
        .parameters()
        .iter()
        .filter(|parameter| {
            registry
                .find_by_key(parameter.key())
                .is_some_and(|live| Arc::ptr_eq(&live, parameter))
        })
        .map(|parameter| parameter.name())
        .filter(|name| name.to_ascii_lowercase().starts_with(&prefix))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvars::{CVarFlags, CVarType};

    fn render_registry() -> CVarRegistry {
        let registry = CVarRegistry::with_capacity(16);
        registry.register(
            "r.Bloom.Intensity",
            "Bloom intensity",
            "Render",
            1.5f32,
            1.5f32,
            CVarFlags::READ_AND_WRITE,
        );
        registry.register(
            "r.Shadow.FixCascade",
            "Fix shadow cascade",
            "Shadows",
            1,
            1,
            CVarFlags::READ_ONLY,
        );
        registry.register(
            "r.Shadow.Technique",
            "Shadow filtering",
            "Shadows",
            "pcf".to_string(),
            "pcf".to_string(),
            CVarFlags::INIT_ONCE,
        );
        registry.register(
            "r.Shadow.Softness",
            "Penumbra scale",
            "Shadows",
            0.25f64,
            0.25f64,
            CVarFlags::empty(),
        );
        registry
    }

    #[test]
    fn test_query_reports_description_and_value() {
        let registry = render_registry();
        let reply = execute_in(&registry, "r.Bloom.Intensity").unwrap();
        let text = reply.to_string();

        assert!(text.contains("Bloom intensity"));
        assert!(text.contains("1.5"));
    }

    #[test]
    fn test_query_quotes_strings() {
        let registry = render_registry();
        let reply = execute_in(&registry, "r.shadow.technique").unwrap();

        assert_eq!(
            reply,
            CommandReply::Query {
                name: "r.Shadow.Technique".to_string(),
                description: "Shadow filtering".to_string(),
                value: "\"pcf\"".to_string(),
            }
        );
    }

    #[test]
    fn test_assign_then_query() {
        let registry = render_registry();

        let reply = execute_in(&registry, "r.Bloom.Intensity 2.0").unwrap();
        assert_eq!(reply.to_string(), "r.Bloom.Intensity set to 2.0");
        assert_eq!(registry.get_by_name::<f32>("r.Bloom.Intensity"), Ok(2.0));

        let text = execute_in(&registry, "r.Bloom.Intensity").unwrap().to_string();
        assert!(text.contains("2.0"));
    }

    #[test]
    fn test_too_many_arguments() {
        let registry = render_registry();
        let err = execute_in(&registry, "r.Bloom.Intensity 2.0 3.0").unwrap_err();

        assert_eq!(err, CommandError::ArgumentCount(2));
        assert!(err.to_string().contains('2'));
        assert_eq!(registry.get_by_name::<f32>("r.Bloom.Intensity"), Ok(1.5));
    }

    #[test]
    fn test_unknown_command() {
        let registry = render_registry();
        let before = registry.names();

        let err = execute_in(&registry, "r.DoesNotExist").unwrap_err();
        assert!(err.to_string().to_lowercase().contains("unknown command"));

        let err = execute_in(&registry, "r.DoesNotExist 1").unwrap_err();
        assert_eq!(err, CommandError::UnknownCommand("r.DoesNotExist".to_string()));
        assert_eq!(registry.names(), before);
    }

    #[test]
    fn test_read_only_rejected() {
        let registry = render_registry();

        let err = execute_in(&registry, "r.Shadow.FixCascade 3").unwrap_err();
        assert_eq!(err, CommandError::ReadOnly("r.Shadow.FixCascade".to_string()));
        assert_eq!(registry.get_by_name::<i32>("r.Shadow.FixCascade"), Ok(1));

        // Programmatic writes are not blocked by READ_ONLY
        assert_eq!(registry.set_by_name("r.Shadow.FixCascade", 3), Ok(true));
    }

    #[test]
    fn test_init_once_rejected_on_console() {
        let registry = render_registry();

        let err = execute_in(&registry, "r.Shadow.Technique vsm").unwrap_err();
        assert!(err.to_string().contains("read-only"));
        assert_eq!(
            registry.get_by_name::<String>("r.Shadow.Technique"),
            Ok("pcf".to_string())
        );
    }

    #[test]
    fn test_invalid_value() {
        let registry = render_registry();

        let err = execute_in(&registry, "r.Shadow.Softness soft").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Rejected(CVarError::InvalidValue {
                expected: CVarType::Double,
                ..
            })
        ));
        assert_eq!(registry.get_by_name::<f64>("r.Shadow.Softness"), Ok(0.25));
    }

    #[test]
    fn test_float_overflow_rejected() {
        let registry = render_registry();

        let err = execute_in(&registry, "r.Bloom.Intensity 1e39").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Rejected(CVarError::InvalidValue {
                expected: CVarType::Float,
                ..
            })
        ));
        assert_eq!(registry.get_by_name::<f32>("r.Bloom.Intensity"), Ok(1.5));
    }

    #[test]
    fn test_large_float_reply() {
        let registry = render_registry();

        let reply = execute_in(&registry, "r.Bloom.Intensity 3e15").unwrap();
        assert_eq!(reply.to_string(), "r.Bloom.Intensity set to 3000000000000000");
    }

    #[test]
    fn test_empty_line() {
        let registry = render_registry();
        assert_eq!(execute_in(&registry, "  \t"), Err(CommandError::Empty));
    }

    #[test]
    fn test_completion() {
        let registry = render_registry();

        assert_eq!(
            complete_in(&registry, "R.SHADOW."),
            vec!["r.Shadow.FixCascade", "r.Shadow.Softness", "r.Shadow.Technique"]
        );
        assert_eq!(complete_in(&registry, "r.b"), vec!["r.Bloom.Intensity"]);
        assert_eq!(complete_in(&registry, "").len(), 4);
        assert!(complete_in(&registry, "x").is_empty());
    }

    #[test]
    fn test_completion_after_reregistration() {
        let registry = render_registry();
        registry.register("dup", "", "", 1, 1, CVarFlags::empty());
        registry.register("DUP", "", "", 2, 2, CVarFlags::empty());

        assert_eq!(complete_in(&registry, "du"), vec!["DUP"]);
        assert_eq!(complete_in(&registry, "").len(), 5);
    }

    #[test]
    fn test_global_execute() {
        registry().register(
            "test.console.Global",
            "Global console test",
            "Test",
            10,
            10,
            CVarFlags::empty(),
        );

        execute("test.console.global 11").unwrap();
        assert_eq!(registry().get_by_name::<i32>("test.console.Global"), Ok(11));
        assert_eq!(complete("test.console.g"), vec!["test.console.Global"]);
    }
}
