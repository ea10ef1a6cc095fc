//! Configuration read from an optional TOML file.

use anyhow::Context;
use ringlog::Level;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// defaults

fn path() -> PathBuf {
    PathBuf::from("Tubes_Mosi.xlsx")
}

fn sheet() -> String {
    "DataTrain".to_string()
}

fn exclude() -> Vec<String> {
    ["id", "bulan", "tahun", "month", "year"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn log_level() -> String {
    "info".to_string()
}

fn log_queue_depth() -> usize {
    4096
}

fn log_single_message_size() -> usize {
    1024
}

/// Which file and sheet hold the visitor counts and which columns are not
/// regions.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
    #[serde(default = "path")]
    path: PathBuf,
    #[serde(default = "sheet")]
    sheet: String,
    #[serde(default = "exclude")]
    exclude: Vec<String>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            path: path(),
            sheet: sheet(),
            exclude: exclude(),
        }
    }
}

impl Dataset {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    /// Columns which are never offered as regions.
    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Debug {
    #[serde(default = "log_level")]
    log_level: String,
    #[serde(default = "log_queue_depth")]
    log_queue_depth: usize,
    #[serde(default = "log_single_message_size")]
    log_single_message_size: usize,
}

impl Default for Debug {
    fn default() -> Self {
        Self {
            log_level: log_level(),
            log_queue_depth: log_queue_depth(),
            log_single_message_size: log_single_message_size(),
        }
    }
}

impl Debug {
    pub fn log_level(&self) -> anyhow::Result<Level> {
        self.log_level
            .parse()
            .with_context(|| format!("invalid log level: {}", self.log_level))
    }

    pub fn log_queue_depth(&self) -> usize {
        self.log_queue_depth
    }

    pub fn log_single_message_size(&self) -> usize {
        self.log_single_message_size
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    dataset: Dataset,
    #[serde(default)]
    debug: Debug,
}

impl Config {
    /// Reads the configuration file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn debug(&self) -> &Debug {
        &self.debug
    }

    /// Applies values given on the command line, which take precedence over
    /// the file.
    pub fn override_with(
        &mut self,
        path: Option<PathBuf>,
        sheet: Option<String>,
        log_level: Option<Level>,
    ) {
        if let Some(path) = path {
            self.dataset.path = path;
        }
        if let Some(sheet) = sheet {
            self.dataset.sheet = sheet;
        }
        if let Some(level) = log_level {
            self.debug.log_level = level.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.dataset().path(), Path::new("Tubes_Mosi.xlsx"));
        assert_eq!(config.dataset().sheet(), "DataTrain");
        assert_eq!(
            config.dataset().exclude(),
            &["id", "bulan", "tahun", "month", "year"]
        );
        assert_eq!(config.debug().log_level().unwrap(), Level::Info);
    }

    #[test]
    fn partial() {
        let config = Config::parse(
            r#"
            [dataset]
            path = "visitors.csv"

            [debug]
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.dataset().path(), Path::new("visitors.csv"));
        assert_eq!(config.dataset().sheet(), "DataTrain");
        assert_eq!(config.debug().log_level().unwrap(), Level::Debug);
        assert_eq!(config.debug().log_queue_depth(), 4096);
    }

    #[test]
    fn unknown_field() {
        assert!(Config::parse("[dataset]\nfile = \"x.csv\"\n").is_err());
    }

    #[test]
    fn invalid_level() {
        let config = Config::parse("[debug]\nlog_level = \"loud\"\n").unwrap();
        assert!(config.debug().log_level().is_err());
    }

    #[test]
    fn command_line_wins() {
        let mut config = Config::parse("[dataset]\nsheet = \"Other\"\n").unwrap();
        config.override_with(Some("a.csv".into()), None, Some(Level::Warn));
        assert_eq!(config.dataset().path(), Path::new("a.csv"));
        assert_eq!(config.dataset().sheet(), "Other");
        assert_eq!(config.debug().log_level().unwrap(), Level::Warn);
    }
}
