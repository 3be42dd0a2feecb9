pub mod validator;

pub use validator::{CommandPolicy, SubstringDenylist, ValidationError};

/// Default denylist of substrings that reject a command outright.
///
/// The check is substring-based, not grammar-aware: a destructive git
/// subcommand that is not listed here (e.g. `git push --force`) passes.
/// Widening this list requires careful review; the narrow scope is a
/// documented limitation of the tool.
pub const DEFAULT_DENIED_SUBSTRINGS: &[&str] = &["rm -rf .git", "sudo", "shutdown"];
