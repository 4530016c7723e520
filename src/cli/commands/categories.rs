use crate::cli::commands::load_dataset;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{colorize_category, colorize_muted};
use crate::utils::formatting::{bold, pad_right};

/// Handle the `categories` command: legend rows in legend order.
pub fn handle(cmd: &Commands, input: &Option<String>, cfg: &Config) -> AppResult<()> {
    if let Commands::Categories = cmd {
        let data = load_dataset(input, cfg)?;

        if data.categories.is_empty() {
            warning("Dataset has no entries.");
            return Ok(());
        }

        header("Legend");
        println!(
            "{}",
            bold(&format!(
                "{}{}{}{}",
                pad_right("category", 12),
                pad_right("color", 10),
                pad_right("bars", 7),
                "dropped"
            ))
        );

        for cat in &data.categories {
            let bars = data.entries.iter().filter(|e| e.category == *cat).count();
            let dropped = data.dropped.iter().filter(|e| e.category == *cat).count();
            // colour codes are zero-width on screen, pad the raw name
            let pad = " ".repeat(12usize.saturating_sub(cat.as_str().len()));

            // legend rows whose entries were all dropped draw no bars
            let name = if bars == 0 {
                colorize_muted(cat.as_str())
            } else {
                colorize_category(*cat)
            };

            println!(
                "{}{}{}{}{}",
                name,
                pad,
                pad_right(cat.color(), 10),
                pad_right(&bars.to_string(), 7),
                dropped
            );
        }
    }
    Ok(())
}
