use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Empty command")]
    EmptyCommand,

    #[error("Command does not start with 'git ': {0}")]
    MissingGitPrefix(String),

    #[error("Command contains denied substring '{0}'")]
    DeniedSubstring(String),
}

/// Predicate deciding whether a suggested command may be executed.
///
/// The executor only depends on this trait, so a stricter checker (e.g. one
/// that parses git's argument grammar) can be swapped in without touching
/// the execution contract.
pub trait CommandPolicy: Send + Sync {
    fn check(&self, command: &str) -> Result<(), ValidationError>;
}

/// The shipped policy: case-insensitive `git ` prefix check plus a fixed
/// set of denied substrings matched anywhere in the command.
pub struct SubstringDenylist {
    denied: Vec<String>,
}

impl SubstringDenylist {
    /// Build a policy from a list of denied substrings. Matching is
    /// case-insensitive, so entries are normalized to lowercase up front.
    pub fn new<I, S>(denied: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            denied: denied
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn denied(&self) -> &[String] {
        &self.denied
    }
}

impl Default for SubstringDenylist {
    fn default() -> Self {
        Self::new(crate::security::DEFAULT_DENIED_SUBSTRINGS.iter().copied())
    }
}

impl CommandPolicy for SubstringDenylist {
    fn check(&self, command: &str) -> Result<(), ValidationError> {
        let normalized = command.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(ValidationError::EmptyCommand);
        }

        if !normalized.starts_with("git ") {
            return Err(ValidationError::MissingGitPrefix(normalized));
        }

        for denied in &self.denied {
            if normalized.contains(denied.as_str()) {
                return Err(ValidationError::DeniedSubstring(denied.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_git_command() {
        let policy = SubstringDenylist::default();
        assert!(policy.check("git status").is_ok());
    }

    #[test]
    fn test_accepts_chained_git_commands() {
        let policy = SubstringDenylist::default();
        assert!(policy.check("git add . && git commit -m 'x'").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        let policy = SubstringDenylist::default();
        assert!(matches!(
            policy.check(""),
            Err(ValidationError::EmptyCommand)
        ));
        assert!(matches!(
            policy.check("   \n"),
            Err(ValidationError::EmptyCommand)
        ));
    }

    #[test]
    fn test_rejects_missing_prefix() {
        let policy = SubstringDenylist::default();
        assert!(matches!(
            policy.check("ls -la"),
            Err(ValidationError::MissingGitPrefix(_))
        ));
        // "git" alone, without the trailing space, is not a command
        assert!(policy.check("git").is_err());
    }

    #[test]
    fn test_prefix_check_is_case_insensitive() {
        let policy = SubstringDenylist::default();
        assert!(policy.check("Git Status").is_ok());
        assert!(policy.check("  GIT status  ").is_ok());
    }

    #[test]
    fn test_rejects_denied_substring_anywhere() {
        let policy = SubstringDenylist::default();
        for cmd in [
            "git sudo something",
            "git status && sudo reboot",
            "git rm -rf .git",
            "git shutdown",
        ] {
            assert!(
                matches!(policy.check(cmd), Err(ValidationError::DeniedSubstring(_))),
                "should reject: {}",
                cmd
            );
        }
    }

    #[test]
    fn test_denied_substring_is_case_insensitive() {
        let policy = SubstringDenylist::default();
        assert!(policy.check("git SUDO thing").is_err());
        assert!(policy.check("git Rm -Rf .GIT").is_err());
    }

    #[test]
    fn test_custom_denylist() {
        let policy = SubstringDenylist::new(["push --force"]);
        assert!(policy.check("git push --force origin main").is_err());
        // The default entries are not implied
        assert!(policy.check("git sudo").is_ok());
    }

    #[test]
    fn test_rejection_does_not_depend_on_position() {
        let policy = SubstringDenylist::default();
        assert!(policy.check("git shutdown now").is_err());
        assert!(policy.check("git commit -m 'shutdown'").is_err());
    }
}
