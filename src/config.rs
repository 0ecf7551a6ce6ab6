use crate::quiz::DEFAULT_MAX_OPTIONS;
use crate::quiz_generator::QuizGenConfig;
use crate::word::QuestionDirection;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the built-in pool used when nothing else is configured
pub const DEFAULT_POOL: &str = "basics";

/// Directory name settings are stored under
pub const APP_NAME: &str = "vocab-quiz";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub max_options: usize,
    pub question_count: Option<usize>,
    pub direction: QuestionDirection,
    pub random_distractors: bool,
    pub pool: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_options: DEFAULT_MAX_OPTIONS,
            question_count: Some(10),
            direction: QuestionDirection::SourceToTarget,
            random_distractors: false,
            pool: DEFAULT_POOL.to_string(),
        }
    }
}

impl From<&Config> for QuizGenConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            question_count: cfg.question_count,
            max_options: cfg.max_options,
            direction: cfg.direction,
            random_distractors: cfg.random_distractors,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Store under the platform config dir for this binary
    pub fn new() -> Self {
        Self::for_app(APP_NAME)
    }

    /// `<config dir>/<app>/config.json`, or `<app>_config.json` in the working
    /// directory when the platform has no home to resolve
    pub fn for_app(app: &str) -> Self {
        let path = match ProjectDirs::from("", "", app) {
            Some(dirs) => dirs.config_dir().join("config.json"),
            None => PathBuf::from(format!("{}_config.json", app.replace('-', "_"))),
        };
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice::<Config>(&bytes) {
                Ok(cfg) => return cfg,
                Err(e) => log::warn!(
                    "ignoring unreadable config {}: {e}",
                    self.path.display()
                ),
            },
            Err(e) => log::debug!("no config at {}: {e}", self.path.display()),
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
