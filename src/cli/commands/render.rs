use crate::cli::commands::{build_view, load_dataset};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{TimelineView, ViewEvent};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::models::{Category, ZoomTransform};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;

/// Handle the `render` command.
///
/// The flags are replayed as view events in the order a user would produce
/// them: resize, legend clicks, pan/zoom, then hover. `--pan-x`/`--pan-y`
/// alone pan at scale 1.
pub fn handle(cmd: &Commands, input: &Option<String>, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        file,
        width,
        height,
        hide,
        zoom,
        pan_x,
        pan_y,
        highlight,
        force,
    } = cmd
    {
        let data = load_dataset(input, cfg)?;
        let mut view = build_view(cfg, data);

        if width.is_some() || height.is_some() {
            let w = width.unwrap_or(cfg.width);
            let h = height.unwrap_or(cfg.height);
            if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
                return Err(AppError::Render(format!(
                    "viewport must be finite and positive, got {w}x{h}"
                )));
            }
            view.handle(ViewEvent::Resize {
                width: w,
                height: h,
            });
        }

        apply_hidden(&mut view, hide)?;

        // a pan without --zoom is a drag at scale 1
        if zoom.is_some() || *pan_x != 0.0 || *pan_y != 0.0 {
            let k = zoom.unwrap_or(1.0);
            view.handle(ViewEvent::Zoom(ZoomTransform::new(k, *pan_x, *pan_y)));
        }

        if let Some(name) = highlight {
            hover_label(&mut view, name);
        }

        let svg = view.render();

        if file == "-" {
            print!("{svg}");
        } else {
            let path = Path::new(file);
            ensure_writable(path, *force)?;
            fs::write(path, svg)?;
            success(format!(
                "Timeline rendered: {} ({} of {} bars visible)",
                path.display(),
                view.visible_entries().len(),
                view.entries().len()
            ));
        }
    }
    Ok(())
}

fn apply_hidden(view: &mut TimelineView, hide: &[String]) -> AppResult<()> {
    for name in hide {
        let cat =
            Category::from_name(name).ok_or_else(|| AppError::InvalidCategory(name.clone()))?;

        // a repeated --hide must not toggle the category back on
        if view.visibility().is_hidden(cat) {
            continue;
        }
        if !view.categories().contains(&cat) {
            warning(format!("Category '{cat}' has no entries in this dataset"));
        }
        view.handle(ViewEvent::LegendClick(cat));
    }
    Ok(())
}

fn hover_label(view: &mut TimelineView, name: &str) {
    let target = view.find_entry(name).and_then(|idx| Some((idx, view.bar_center(idx)?)));

    match target {
        Some((entry, at)) => {
            view.handle(ViewEvent::PointerEnter { entry, at });
        }
        None => warning(format!("No visible entry labelled '{name}'")),
    }
}
