use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use std::io;

fn into_io_error(e: dialoguer::Error) -> io::Error {
    match e {
        dialoguer::Error::IO(e) => e,
    }
}

/// Yes/no gate before running a suggested command. Declining is the
/// default.
pub fn confirm_execution(command: &str) -> io::Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Run `{}`?", command))
        .default(false)
        .interact()
        .map_err(into_io_error)
}

/// Read the staging selection: comma-separated indices or "all".
pub fn read_selection() -> io::Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Files to stage (e.g. 1,3 or 'all')")
        .allow_empty(true)
        .interact_text()
        .map_err(into_io_error)
}
