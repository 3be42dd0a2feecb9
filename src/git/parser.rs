use crate::error::GitResult;

/// One line of `git status --short` output, reduced to the trailing path
/// token used for display and index-based staging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub raw: String,
    pub path: String,
}

/// Parse short-form status output into entries.
///
/// No attempt is made to interpret the two-character state columns; the
/// last whitespace-delimited token is the path (for renames that is the
/// new name).
pub fn parse_short_status(output: &str) -> GitResult<Vec<StatusEntry>> {
    let mut entries = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(path) = line.split_whitespace().last() {
            entries.push(StatusEntry {
                raw: line.to_string(),
                path: path.to_string(),
            });
        }
    }

    Ok(entries)
}

/// Extract branch names from a log decoration string.
///
/// The decoration is the parenthesized ref-list suffix of a log line, e.g.
/// ` (HEAD -> main, origin/main, tag: v1.0)`. Names are split on commas
/// with the `HEAD -> ` and `origin/` prefixes removed. A commit with no
/// decoration belongs to `default_branch`.
pub fn extract_branch_names(decoration: &str, default_branch: &str) -> Vec<String> {
    let Some(open) = decoration.rfind('(') else {
        return vec![default_branch.to_string()];
    };

    let inner = decoration[open + 1..]
        .split(')')
        .next()
        .unwrap_or_default();

    inner
        .split(", ")
        .map(|name| {
            let name = name.trim();
            let name = name.strip_prefix("HEAD -> ").unwrap_or(name);
            let name = name.strip_prefix("origin/").unwrap_or(name);
            name.to_string()
        })
        .collect()
}
