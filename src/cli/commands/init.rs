use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command
///
/// Writes a configuration file with default values at `path`. An existing
/// file is left alone unless `--force` is given.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if path.exists() && !*force {
            warning(format!(
                "Configuration already exists at {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(());
        }

        info("Initializing rTimeline…");
        Config::default().save(path)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
