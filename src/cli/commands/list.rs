use crate::cli::commands::load_dataset;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, Entry};
use crate::ui::messages::{header, warning};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_clock, format_minutes};

pub fn handle(cmd: &Commands, input: &Option<String>, cfg: &Config) -> AppResult<()> {
    if let Commands::List { category, all } = cmd {
        let data = load_dataset(input, cfg)?;

        let filter = match category {
            Some(name) => Some(
                Category::from_name(name).ok_or_else(|| AppError::InvalidCategory(name.clone()))?,
            ),
            None => None,
        };
        let keep = |e: &Entry| filter.is_none_or(|c| e.category == c);

        let mut table = Table::new(vec![
            Column::new("#"),
            Column::new("date"),
            Column::new("start"),
            Column::new("end"),
            Column::new("dur"),
            Column::new("category"),
            Column::new("label"),
        ]);

        let mut shown = 0;
        for (i, e) in data.entries.iter().enumerate().filter(|(_, e)| keep(*e)) {
            table.add_row(row((i + 1).to_string(), e));
            shown += 1;
        }
        if *all {
            for e in data.dropped.iter().filter(|e| keep(*e)) {
                table.add_row(row("-".to_string(), e));
                shown += 1;
            }
        }

        if shown == 0 {
            warning("No entries match the selection.");
            return Ok(());
        }

        header(format!("{shown} entries"));
        print!("{}", table.render());
    }
    Ok(())
}

fn row(id: String, e: &Entry) -> Vec<String> {
    vec![
        id,
        e.day().format("%Y-%m-%d").to_string(),
        format_clock(e.start.time()),
        format_clock(e.end.time()),
        format_minutes(e.duration_minutes()),
        e.category.to_string(),
        e.pretty.clone(),
    ]
}
