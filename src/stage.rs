use crate::error::GitResult;
use crate::git::parser::StatusEntry;
use crate::git::repository::Repository;
use crate::ui::prompt;
use console::style;

/// Parsed staging selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    /// Zero-based indices into the status listing
    Indices(Vec<usize>),
}

/// Interpret user input against a listing of `count` entries.
///
/// Accepts the literal "all" or a comma-separated list of 1-based indices.
/// Tokens that are not numbers, or point outside the listing, are dropped
/// without complaint.
pub fn parse_selection(input: &str, count: usize) -> Selection {
    if input.trim().eq_ignore_ascii_case("all") {
        return Selection::All;
    }

    let indices = input
        .split(',')
        .filter_map(|token| token.trim().parse::<usize>().ok())
        .filter(|&index| index >= 1 && index <= count)
        .map(|index| index - 1)
        .collect();

    Selection::Indices(indices)
}

/// Resolve a selection to the paths it names, in listing order.
pub fn selected_paths<'a>(entries: &'a [StatusEntry], selection: &Selection) -> Vec<&'a str> {
    match selection {
        Selection::All => entries.iter().map(|entry| entry.path.as_str()).collect(),
        Selection::Indices(indices) => indices
            .iter()
            .filter_map(|&index| entries.get(index))
            .map(|entry| entry.path.as_str())
            .collect(),
    }
}

/// Stage every selected path with an individual add invocation. Returns
/// how many paths were staged.
pub fn apply_selection(
    repo: &Repository,
    entries: &[StatusEntry],
    selection: &Selection,
) -> GitResult<usize> {
    let paths = selected_paths(entries, selection);

    for path in &paths {
        repo.stage_path(path)?;
    }

    Ok(paths.len())
}

/// The interactive flow: list changed files with indices, read a
/// selection, stage it.
pub fn run_interactive(repo: &Repository) -> GitResult<()> {
    let entries = repo.short_status()?;

    if entries.is_empty() {
        println!("{}", style("Working tree clean; nothing to stage.").green());
        return Ok(());
    }

    println!("{}", style("Changed files:").bold());
    for (i, entry) in entries.iter().enumerate() {
        println!("  {} {}", style(format!("[{}]", i + 1)).cyan(), entry.path);
    }

    let input = prompt::read_selection()?;
    let selection = parse_selection(&input, entries.len());
    let staged = apply_selection(repo, &entries, &selection)?;

    if staged == 0 {
        println!("{}", style("No matching entries; nothing staged.").yellow());
    } else {
        println!("{} {} file(s)", style("Staged").green().bold(), staged);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(paths: &[&str]) -> Vec<StatusEntry> {
        paths
            .iter()
            .map(|p| StatusEntry {
                raw: format!(" M {}", p),
                path: p.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_parse_all_keyword() {
        assert_eq!(parse_selection("all", 4), Selection::All);
        assert_eq!(parse_selection("  ALL ", 4), Selection::All);
    }

    #[test]
    fn test_parse_comma_separated_indices() {
        assert_eq!(parse_selection("2,3", 4), Selection::Indices(vec![1, 2]));
    }

    #[test]
    fn test_parse_skips_out_of_range() {
        assert_eq!(parse_selection("9", 4), Selection::Indices(vec![]));
        assert_eq!(parse_selection("2,9,3", 4), Selection::Indices(vec![1, 2]));
        assert_eq!(parse_selection("0,1", 4), Selection::Indices(vec![0]));
    }

    #[test]
    fn test_parse_skips_non_numeric() {
        assert_eq!(parse_selection("a,2", 4), Selection::Indices(vec![1]));
        assert_eq!(parse_selection("", 4), Selection::Indices(vec![]));
    }

    #[test]
    fn test_parse_tolerates_spaces() {
        assert_eq!(parse_selection(" 1 , 3 ", 4), Selection::Indices(vec![0, 2]));
    }

    #[test]
    fn test_selected_paths_by_index() {
        let entries = entries(&["a.txt", "b.txt", "c.txt", "d.txt"]);
        let selection = parse_selection("2,3", entries.len());
        assert_eq!(selected_paths(&entries, &selection), vec!["b.txt", "c.txt"]);
    }

    #[test]
    fn test_selected_paths_all() {
        let entries = entries(&["a.txt", "b.txt"]);
        assert_eq!(
            selected_paths(&entries, &Selection::All),
            vec!["a.txt", "b.txt"]
        );
    }

    #[test]
    fn test_selected_paths_empty_selection() {
        let entries = entries(&["a.txt"]);
        let selection = parse_selection("9", entries.len());
        assert!(selected_paths(&entries, &selection).is_empty());
    }
}
