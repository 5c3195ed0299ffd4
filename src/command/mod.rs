//! Command invocations
//! Commands cross the host boundary as a name plus string-keyed arguments

/// ## command/ Invariants
///
/// - An invocation carries everything needed to dispatch it: name and args.
/// - Argument values are plain strings; the host owns any further typing.
/// - Invocations are immutable once created.
/// - Command names never collide with typed characters; raw character input
///   reaches the controller only through buffer-modification notifications.
use std::collections::HashMap;

/// Arguments passed along with a command dispatch.
pub type CommandArgs = HashMap<String, String>;

/// Argument key for commands that insert text.
pub const ARG_CHARACTERS: &str = "characters";

/// A command together with its arguments, ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub args: CommandArgs,
}

impl Invocation {
    /// An invocation with no arguments.
    #[must_use]
    pub fn bare(name: &str) -> Self {
        Invocation {
            name: name.to_string(),
            args: CommandArgs::new(),
        }
    }

    /// An invocation carrying a single argument.
    #[must_use]
    pub fn with_arg(name: &str, key: &str, value: &str) -> Self {
        let mut args = CommandArgs::new();
        args.insert(key.to_string(), value.to_string());
        Invocation {
            name: name.to_string(),
            args,
        }
    }
}

/// Whether a typed character counts as repeat-count input.
#[must_use]
pub fn is_count_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}
