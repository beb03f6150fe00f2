//! Runtime settings for the CLI and MCP server.
//!
//! Sources are merged in this order, later ones winning:
//!
//! 1. built-in defaults
//! 2. `config.{toml,yaml,yml,json}` in the user config directory
//! 3. `.newsroom.*` then `newsroom.*` from the nearest directory that has
//!    any, walking up from the search root but not past a `.git` directory
//! 4. files passed to [`ConfigLoader::with_file`], in order
//! 5. `NEWSROOM_*` environment variables (`NEWSROOM_MIN_SEO_SCORE=70`)
//!
//! ```no_run
//! use camino::Utf8Path;
//! use newsroom_core::config::ConfigLoader;
//!
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(Utf8Path::new("/srv/desk/politics"))
//!     .load()?;
//! let gate = config.gate();
//! # Ok::<(), newsroom_core::ConfigError>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::gate::PublishingGate;

const APP_NAME: &str = "newsroom";
const ENV_PREFIX: &str = "NEWSROOM_";
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];
const REPO_MARKER: &str = ".git";

/// Effective newsroom settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Default log level when neither `RUST_LOG` nor `-q`/`-v` is given.
    pub log_level: LogLevel,
    /// Directory for JSONL log files. File logging is off when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Gate threshold for the SEO score. Unset means 60.
    pub min_seo_score: Option<i32>,
    /// Gate threshold for the content score. Unset means 60.
    pub min_content_score: Option<i32>,
    /// Largest draft accepted, in bytes. Unset means 5 MiB.
    pub max_input_bytes: Option<usize>,
    /// Accept drafts of any size; `max_input_bytes` is ignored.
    pub disable_input_limit: bool,
}

impl Config {
    /// Publishing gate built from the configured thresholds.
    pub fn gate(&self) -> PublishingGate {
        PublishingGate::new(self.min_seo_score, self.min_content_score)
    }

    /// Effective input limit: `None` when the limit is disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(crate::DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level names accepted in config files.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything the CLI traces.
    Debug,
    /// Progress and results.
    #[default]
    Info,
    /// Only suspicious input and degraded behaviour.
    Warn,
    /// Only failures.
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive for this level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Files that contributed to a loaded [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// User-level config file.
    pub user_file: Option<Utf8PathBuf>,
    /// Project files from the nearest matching directory, lowest precedence first.
    pub project_files: Vec<Utf8PathBuf>,
    /// Files passed explicitly, lowest precedence first.
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file whose values win, if any file was read.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        [
            self.explicit_files.last(),
            self.project_files.last(),
            self.user_file.as_ref(),
        ]
        .into_iter()
        .flatten()
        .next()
        .map(Utf8PathBuf::as_path)
    }
}

/// Builder that discovers and merges config sources.
#[derive(Debug)]
pub struct ConfigLoader {
    search_root: Option<Utf8PathBuf>,
    user_dir: Option<Utf8PathBuf>,
    files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader that reads the user config directory and nothing else yet.
    pub fn new() -> Self {
        Self {
            search_root: None,
            user_dir: user_config_dir(),
            files: Vec::new(),
        }
    }

    /// Look for project config in `dir` and its ancestors.
    pub fn with_project_search(mut self, dir: impl AsRef<Utf8Path>) -> Self {
        self.search_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Merge `path` after any discovered files.
    pub fn with_file(mut self, path: impl AsRef<Utf8Path>) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Discover, merge and deserialize all sources.
    #[tracing::instrument(skip(self), fields(search_root = ?self.search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = ConfigSources {
            user_file: self.user_dir.as_deref().and_then(find_user_file),
            project_files: self
                .search_root
                .as_deref()
                .map(discover_project_files)
                .unwrap_or_default(),
            explicit_files: self.files,
        };

        let config: Config = sources
            .user_file
            .iter()
            .chain(&sources.project_files)
            .chain(&sources.explicit_files)
            .fold(
                Figment::from(Serialized::defaults(Config::default())),
                |figment, path| merge_file(figment, path),
            )
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true))
            .extract()
            .map_err(Box::new)?;

        tracing::debug!(
            primary_file = ?sources.primary_file(),
            min_seo_score = ?config.min_seo_score,
            min_content_score = ?config.min_content_score,
            "configuration loaded"
        );
        Ok((config, sources))
    }
}

/// Config files in the nearest directory that has any, stopping at the
/// repository root.
fn discover_project_files(start: &Utf8Path) -> Vec<Utf8PathBuf> {
    let stems = [format!(".{APP_NAME}"), APP_NAME.to_string()];
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = stems
            .iter()
            .flat_map(|stem| {
                EXTENSIONS
                    .iter()
                    .map(move |ext| dir.join(format!("{stem}.{ext}")))
            })
            .filter(|path| path.is_file())
            .collect();
        if !found.is_empty() {
            return found;
        }
        if dir.join(REPO_MARKER).exists() {
            break;
        }
    }
    Vec::new()
}

fn find_user_file(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_std_path())),
        Some("json") => figment.merge(Json::file_exact(path.as_std_path())),
        _ => figment.merge(Toml::file_exact(path.as_std_path())),
    }
}

/// `~/.config/newsroom` on Linux, the platform equivalent elsewhere.
fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}
