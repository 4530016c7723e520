use crate::core::scale::ChartGeometry;
use crate::core::zoom::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Dataset rendered when no --input is given
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_bar_size")]
    pub bar_size: f64,
    #[serde(default = "default_bar_padding")]
    pub bar_padding: f64,
    #[serde(default = "default_day_start")]
    pub day_start_hour: u32,
    #[serde(default = "default_day_end")]
    pub day_end_hour: u32,
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f64,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
}

fn default_input() -> String {
    "./timeline.json".to_string()
}
fn default_width() -> f64 {
    1200.0
}
fn default_height() -> f64 {
    600.0
}
fn default_bar_size() -> f64 {
    30.0
}
fn default_bar_padding() -> f64 {
    5.0
}
fn default_day_start() -> u32 {
    7
}
fn default_day_end() -> u32 {
    19
}
fn default_min_zoom() -> f64 {
    DEFAULT_MIN_ZOOM
}
fn default_max_zoom() -> f64 {
    DEFAULT_MAX_ZOOM
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            width: default_width(),
            height: default_height(),
            bar_size: default_bar_size(),
            bar_padding: default_bar_padding(),
            day_start_hour: default_day_start(),
            day_end_hour: default_day_end(),
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimeline")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimeline")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeline.conf")
    }

    /// Load configuration from `path` (or the standard location), falling
    /// back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("failed to parse {}: {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write this configuration as YAML to `path`, creating parent dirs.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        let numbers = [
            ("width", self.width),
            ("height", self.height),
            ("bar_size", self.bar_size),
            ("bar_padding", self.bar_padding),
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
        ];
        if let Some((name, v)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AppError::Config(format!("{name} must be a finite number, got {v}")));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(AppError::Config("width and height must be positive".into()));
        }
        if self.bar_size <= 0.0 || self.bar_padding < 0.0 {
            return Err(AppError::Config(
                "bar_size must be positive and bar_padding not negative".into(),
            ));
        }
        if self.day_start_hour >= self.day_end_hour || self.day_end_hour > 24 {
            return Err(AppError::Config(format!(
                "invalid working-hours window {}..{}",
                self.day_start_hour, self.day_end_hour
            )));
        }
        if self.min_zoom <= 0.0 || self.min_zoom > self.max_zoom {
            return Err(AppError::Config(format!(
                "invalid zoom extent {}..{}",
                self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }

    pub fn input_path(&self) -> PathBuf {
        expand_tilde(&self.input)
    }

    pub fn geometry(&self) -> ChartGeometry {
        ChartGeometry {
            width: self.width,
            height: self.height,
            bar_size: self.bar_size,
            bar_padding: self.bar_padding,
            day_start_hour: self.day_start_hour,
            day_end_hour: self.day_end_hour,
        }
    }
}
