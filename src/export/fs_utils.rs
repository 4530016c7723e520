// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check whether an output file may be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists and `!force` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    eprint!("Overwrite? [y/N]: ");
    io::stderr().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "cancelled: '{}' not overwritten",
            path.display()
        )))
    }
}

/// Output paths must be absolute so that nothing lands in an unexpected cwd.
pub(crate) fn require_absolute(path: &Path) -> AppResult<()> {
    if path.is_absolute() {
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "output file path must be absolute: {}",
            path.display()
        )))
    }
}
