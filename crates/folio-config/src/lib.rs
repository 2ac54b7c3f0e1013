//! Site configuration for Folio.
//!
//! Parses `folio.toml` files with serde and provides auto-discovery of the
//! config file in parent directories. The loaded [`Config`] is the single
//! record the site generator reads: site metadata, build options, markdown
//! options and theme text.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `base`
//! - `out_dir`

mod expand;
pub mod nav;
pub mod outline;
pub mod template;
pub mod theme;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

pub use nav::{LinkKind, NavLink, SidebarGroup};
pub use outline::Outline;
pub use template::{BLOG_TEMPLATE, write_template};
pub use theme::{DocFooter, Footer, ThemeConfig};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output directory. Relative paths resolve against the
    /// current directory.
    pub out_dir: Option<PathBuf>,
    /// Override public base path.
    pub base: Option<String>,
    /// Override last-updated tracking.
    pub last_updated: Option<bool>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "folio.toml";

/// Site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site title, used in page titles and as the default header title.
    pub title: String,
    /// Site description for `<meta name="description">`.
    pub description: String,
    /// Language tag of the site (e.g. `zh-CN`).
    pub lang: String,
    /// Public path the site is served under. Starts and ends with `/`.
    pub base: String,
    /// Whether pages record their last-updated time.
    pub last_updated: bool,
    /// URL-cleaning mode.
    pub clean_urls: CleanUrls,
    /// Output directory as written in the config file.
    pub out_dir: String,
    /// Markdown rendering options.
    pub markdown: MarkdownConfig,
    /// Theme and UI text.
    pub theme: ThemeConfig,

    /// Output directory resolved against the config file location.
    #[serde(skip)]
    pub out_dir_resolved: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// How page URLs drop their `.html` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleanUrls {
    /// URLs keep the `.html` suffix.
    #[default]
    Disabled,
    /// `/guide.html` is served as `/guide`.
    WithoutSubfolders,
    /// Pages are emitted as `guide/index.html` and served as `/guide/`.
    WithSubfolders,
}

impl CleanUrls {
    /// Name used in config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::WithoutSubfolders => "without-subfolders",
            Self::WithSubfolders => "with-subfolders",
        }
    }
}

impl fmt::Display for CleanUrls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CleanUrls {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disabled" => Ok(Self::Disabled),
            "without-subfolders" => Ok(Self::WithoutSubfolders),
            "with-subfolders" => Ok(Self::WithSubfolders),
            other => Err(format!(
                "unknown clean_urls mode \"{other}\", expected disabled, \
                 without-subfolders or with-subfolders"
            )),
        }
    }
}

impl<'de> Deserialize<'de> for CleanUrls {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Mode(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(true) => Ok(Self::WithoutSubfolders),
            Raw::Flag(false) => Ok(Self::Disabled),
            Raw::Mode(mode) => mode.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Markdown rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Syntax-highlight theme identifier.
    pub theme: String,
    /// Show line numbers in code blocks.
    pub line_numbers: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            theme: "github-dark".to_owned(),
            line_numbers: false,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Refused to overwrite an existing file.
    #[error("Configuration file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`out_dir`").
        field: String,
        /// Error message (e.g., "${`DEPLOY_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents.
    ///
    /// CLI settings are applied after path resolution and before validation,
    /// so CLI arguments take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else {
            Self::discover_from(&std::env::current_dir()?)?
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// Relative paths are resolved against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let config = Self::parse(content, base_dir)?;
        config.validate()?;
        Ok(config)
    }

    /// Header title: the theme override, or the site title.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.theme.site_title.as_deref().unwrap_or(&self.title)
    }

    /// Every sidebar entry in display order.
    pub fn sidebar_links(&self) -> impl Iterator<Item = &NavLink> {
        self.theme.sidebar.iter().flat_map(|group| group.items.iter())
    }

    /// Serialize to TOML in the `folio.toml` layout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if a value cannot be represented.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if a value cannot be represented.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Apply CLI settings to the configuration.
    ///
    /// A relative `out_dir` override is made absolute against the current
    /// directory, so the stored value no longer depends on the config file
    /// location.
    fn apply_cli_settings(&mut self, settings: &CliSettings) -> Result<(), ConfigError> {
        if let Some(out_dir) = &settings.out_dir {
            let absolute = std::path::absolute(out_dir)?;
            let Some(out_dir) = absolute.to_str() else {
                return Err(ConfigError::Validation(format!(
                    "out_dir {} is not valid UTF-8",
                    absolute.display()
                )));
            };
            self.out_dir = out_dir.to_owned();
            self.out_dir_resolved = absolute;
        }
        if let Some(base) = &settings.base {
            self.base.clone_from(base);
        }
        if let Some(last_updated) = settings.last_updated {
            self.last_updated = last_updated;
        }
        Ok(())
    }

    /// Load the nearest `folio.toml` in `start` or its parents.
    ///
    /// Falls back to defaults rooted at `start`. Does not validate.
    fn discover_from(start: &Path) -> Result<Self, ConfigError> {
        if let Some(discovered) = Self::discover_config_from(start) {
            tracing::debug!(path = %discovered.display(), "Discovered configuration file");
            Self::load_from_file(&discovered)
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Ok(Self::default_with_base(start))
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            title: "Folio".to_owned(),
            description: String::new(),
            lang: "en-US".to_owned(),
            base: "/".to_owned(),
            last_updated: false,
            clean_urls: CleanUrls::default(),
            out_dir: "dist".to_owned(),
            markdown: MarkdownConfig::default(),
            theme: ThemeConfig::default(),
            out_dir_resolved: base.join("dist"),
            config_path: None,
        }
    }

    /// Load configuration from a specific file. Does not validate.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::parse(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), title = %config.title, "Loaded configuration");
        Ok(config)
    }

    /// Parse TOML, expand environment variables and resolve paths.
    fn parse(content: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve_paths(config_dir);
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        require_non_empty(&self.out_dir, "out_dir")?;
        require_non_empty(&self.markdown.theme, "markdown.theme")?;
        self.theme.validate()
    }

    /// Validate site identity and base path.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        require_non_empty(&self.lang, "lang")?;

        let lang_ok = self
            .lang
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !self.lang.starts_with('-')
            && !self.lang.ends_with('-');
        if !lang_ok {
            return Err(ConfigError::Validation(format!(
                "lang \"{}\" is not a valid language tag",
                self.lang
            )));
        }

        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            return Err(ConfigError::Validation(
                "base must start and end with /".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.base = expand::expand_env(&self.base, "base")?;
        self.out_dir = expand::expand_env(&self.out_dir, "out_dir")?;
        Ok(())
    }

    /// Resolve the output directory against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.out_dir_resolved = config_dir.join(&self.out_dir);
    }
}
