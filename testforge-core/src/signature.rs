//! Function prototype parsing
//!
//! Splits a prototype string such as `doExample($argc, $argv)` into the
//! function name and its ordered parameter declarations. Parsing is a plain
//! string split; malformed input degrades silently rather than erroring,
//! which is the contract of the tool this reproduces.

use serde::{Deserialize, Serialize};
use testforge_utils::string::trim_tokens;

/// A parsed function signature: the name plus its ordered parameters
///
/// Parameters are carried as they appeared between the parentheses,
/// including the leading `$` sigil.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Function name (text before the first `(`)
    pub name: String,
    /// Ordered parameter declarations; empty for a zero-argument function
    pub params: Vec<String>,
}

impl Signature {
    /// Whether the function takes any parameters
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }
}

/// Parse a function prototype into a [`Signature`]
///
/// - The function name is everything before the first `(`.
/// - A prototype with no `$` anywhere is treated as zero-argument.
/// - A single parameter is kept exactly as it appeared, surrounding
///   whitespace included; comma-separated parameters are each trimmed.
///   The asymmetry comes from the tool being reproduced and is kept as
///   its observable contract.
/// - Missing or out-of-order parentheses yield an empty argument text
///   instead of an error.
pub fn parse_prototype(prototype: &str) -> Signature {
    let name = match prototype.find('(') {
        Some(open) => &prototype[..open],
        None => prototype,
    };

    // Check to see if there's any arguments
    if !prototype.contains('$') {
        return Signature {
            name: name.to_string(),
            params: Vec::new(),
        };
    }

    // Get entire argument signature
    let arguments = match (prototype.find('('), prototype.find(')')) {
        (Some(open), Some(close)) if close > open => &prototype[open + 1..close],
        _ => "",
    };

    // Check to see if there's only one argument
    if !arguments.contains(',') {
        return Signature {
            name: name.to_string(),
            params: vec![arguments.to_string()],
        };
    }

    Signature {
        name: name.to_string(),
        params: trim_tokens(arguments.split(',')),
    }
}
