//! Compiler configuration
//!
//! [`CompilerConfig`] gathers the knobs shared by the phases: which call
//! names are intrinsics (and how the emitter spells them), whether the emitted
//! module gets a main guard, and which Python runs it. The CLI builds one from
//! its flags; everything else uses [`CompilerConfig::default`].

use std::str::FromStr;
use thiserror::Error;

/// Python interpreter used by `minic run` unless overridden
pub const DEFAULT_PYTHON: &str = "python3";

/// Source name and emitted name of the default print intrinsic
pub const DEFAULT_PRINT_INTRINSIC: (&str, &str) = ("printf", "print");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid intrinsic '{0}': expected NAME or NAME=TARGET with identifier names")]
    InvalidIntrinsic(String),
}

/// A built-in callable: declared in the global scope under `name`, emitted
/// as `emit_as`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intrinsic {
    pub name: String,
    pub emit_as: String,
}

impl Intrinsic {
    pub fn new(name: impl Into<String>, emit_as: impl Into<String>) -> Self {
        Intrinsic {
            name: name.into(),
            emit_as: emit_as.into(),
        }
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl FromStr for Intrinsic {
    type Err = ConfigError;

    /// Parse `NAME` or `NAME=TARGET`
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (name, emit_as) = match spec.split_once('=') {
            Some((name, emit_as)) => (name.trim(), emit_as.trim()),
            None => (spec.trim(), spec.trim()),
        };

        if is_identifier(name) && is_identifier(emit_as) {
            Ok(Intrinsic::new(name, emit_as))
        } else {
            Err(ConfigError::InvalidIntrinsic(spec.to_string()))
        }
    }
}

/// Table of recognised intrinsic call names.
///
/// The validator seeds every entry into the global scope; the emitter uses
/// the same table to rename calls, so both sides agree on one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intrinsics {
    entries: Vec<Intrinsic>,
}

impl Intrinsics {
    /// Build a table; a later entry with the same name replaces an earlier one
    pub fn new(entries: impl IntoIterator<Item = Intrinsic>) -> Self {
        let mut table = Intrinsics {
            entries: Vec::new(),
        };
        for entry in entries {
            table.entries.retain(|existing| existing.name != entry.name);
            table.entries.push(entry);
        }
        table
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intrinsic> {
        self.entries.iter()
    }

    /// Name to emit for a call to `callee`, if it is an intrinsic
    pub fn emitted_name(&self, callee: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == callee)
            .map(|entry| entry.emit_as.as_str())
    }
}

impl Default for Intrinsics {
    fn default() -> Self {
        let (name, emit_as) = DEFAULT_PRINT_INTRINSIC;
        Intrinsics::new([Intrinsic::new(name, emit_as)])
    }
}

/// Settings shared by the validator, emitter and driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    pub intrinsics: Intrinsics,
    /// Append `if __name__ == '__main__':` calling the program's function
    pub main_guard: bool,
    /// Interpreter used to run emitted programs
    pub python: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            intrinsics: Intrinsics::default(),
            main_guard: true,
            python: DEFAULT_PYTHON.to_string(),
        }
    }
}
