use crate::cli::commands::load_dataset;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, input: &Option<String>, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let data = load_dataset(input, cfg)?;
        info(format!(
            "Exporting {} entries as {}",
            data.entries.len(),
            format.as_str()
        ));
        ExportLogic::export(&data.entries, format, file, *force)?;
    }
    Ok(())
}
