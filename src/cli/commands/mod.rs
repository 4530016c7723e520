pub mod categories;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod render;

use crate::config::Config;
use crate::core::TimelineView;
use crate::core::loader::{self, Dataset};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Dataset path: --input wins over the configuration.
pub(crate) fn input_path(input: &Option<String>, cfg: &Config) -> PathBuf {
    match input {
        Some(p) => expand_tilde(p),
        None => cfg.input_path(),
    }
}

pub(crate) fn load_dataset(input: &Option<String>, cfg: &Config) -> AppResult<Dataset> {
    let path = input_path(input, cfg);
    info(format!("Loading {}", path.display()));

    let data = loader::load_file(&path)?;
    info(format!(
        "{} entries loaded ({} dropped at midnight)",
        data.entries.len(),
        data.dropped.len()
    ));
    Ok(data)
}

/// Fresh view configured from `cfg` with `data` loaded.
pub(crate) fn build_view(cfg: &Config, data: Dataset) -> TimelineView {
    let today = chrono::Local::now().date_naive();
    let mut view =
        TimelineView::new(cfg.geometry(), today).with_zoom_extent(cfg.min_zoom, cfg.max_zoom);
    view.load(data);
    view
}
