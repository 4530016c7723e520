use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeline
#[derive(Parser)]
#[command(
    name = "rtimeline",
    version = env!("CARGO_PKG_VERSION"),
    about = "Classify time-tracking entries and render them as a zoomable SVG timeline",
    long_about = None
)]
pub struct Cli {
    /// Override the dataset path from the configuration
    #[arg(global = true, long = "input", short = 'i', value_name = "FILE")]
    pub input: Option<String>,

    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Render the timeline to an SVG file
    Render {
        /// Output file ("-" writes to stdout)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Viewport width in pixels
        #[arg(long)]
        width: Option<f64>,

        /// Viewport height in pixels
        #[arg(long)]
        height: Option<f64>,

        /// Hide a category, as if its legend entry had been clicked (repeatable)
        #[arg(long = "hide", value_name = "CATEGORY")]
        hide: Vec<String>,

        /// Zoom scale factor of a pan/zoom gesture
        #[arg(long)]
        zoom: Option<f64>,

        /// Horizontal pan in pixels (scale 1 unless --zoom is given)
        #[arg(long = "pan-x", default_value_t = 0.0, allow_hyphen_values = true)]
        pan_x: f64,

        /// Vertical pan in pixels (scale 1 unless --zoom is given)
        #[arg(long = "pan-y", default_value_t = 0.0, allow_hyphen_values = true)]
        pan_y: f64,

        /// Hover the first bar with this label: highlights it and shows the tooltip
        #[arg(long = "highlight", value_name = "NAME")]
        highlight: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List classified entries
    List {
        /// Only entries of this category
        #[arg(long, short = 'c', value_name = "CATEGORY")]
        category: Option<String>,

        /// Include entries dropped because they start at midnight
        #[arg(long)]
        all: bool,
    },

    /// Show legend categories with entry counts and colours
    Categories,

    /// Export classified entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
