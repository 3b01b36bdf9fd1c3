//! TOML-based configuration.
//!
//! Supports a config file (schemaforge.toml) with environment variable expansion.
//!
//! Example configuration:
//! ```toml
//! [compile]
//! dialect = "postgres"
//! inheritance = "class_table"  # overrides the design's own setting
//!
//! [output]
//! format = "verbose"
//! directory = "${SCHEMA_OUT}/sql"
//! statement_separator = "\n\n"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::compile::CompileOptions;
use crate::model::InheritanceKind;
use crate::sql::Dialect;

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    #[error("Unknown inheritance kind: {0}")]
    UnknownInheritanceKind(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub compile: CompileSettings,
    pub output: OutputSettings,
}

/// Compilation defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CompileSettings {
    /// Target dialect (sqlite, postgres, mysql, tsql).
    pub dialect: String,

    /// Inheritance mapping to use instead of the design's own.
    pub inheritance: Option<String>,
}

impl Default for CompileSettings {
    fn default() -> Self {
        Self {
            dialect: Dialect::default().to_string(),
            inheritance: None,
        }
    }
}

impl CompileSettings {
    pub fn dialect(&self) -> Result<Dialect, SettingsError> {
        Dialect::from_str(&self.dialect)
            .ok_or_else(|| SettingsError::UnsupportedDialect(self.dialect.clone()))
    }

    pub fn inheritance(&self) -> Result<Option<InheritanceKind>, SettingsError> {
        self.inheritance
            .as_deref()
            .map(|s| {
                InheritanceKind::from_str(s)
                    .ok_or_else(|| SettingsError::UnknownInheritanceKind(s.to_string()))
            })
            .transpose()
    }
}

/// How compiled SQL is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Statements only.
    #[default]
    Sql,
    /// Statements preceded by `-- <label>` comments.
    Verbose,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,

    /// Directory to write `.sql` files into (supports ${ENV_VAR} expansion).
    /// Output goes to stdout when unset.
    pub directory: Option<String>,

    /// Text placed between statements.
    pub statement_separator: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Sql,
            directory: None,
            statement_separator: "\n\n".to_string(),
        }
    }
}

impl OutputSettings {
    /// Get the output directory with environment variables expanded.
    pub fn resolved_directory(&self) -> Result<Option<PathBuf>, SettingsError> {
        self.directory
            .as_deref()
            .map(|dir| expand_env_vars(dir).map(PathBuf::from))
            .transpose()
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `SCHEMAFORGE_CONFIG`
    /// 2. `./schemaforge.toml`
    /// 3. `~/.config/schemaforge/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("SCHEMAFORGE_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("schemaforge.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("schemaforge").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }

    /// Compile options described by the `[compile]` section.
    pub fn compile_options(&self) -> Result<CompileOptions, SettingsError> {
        let mut options = CompileOptions::default().with_dialect(self.compile.dialect()?);
        if let Some(kind) = self.compile.inheritance()? {
            options = options.with_inheritance(kind);
        }
        Ok(options)
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let var_name: String = if chars.next_if_eq(&'{').is_some() {
            let name: String = std::iter::from_fn(|| chars.next_if(|&ch| ch != '}')).collect();
            chars.next_if_eq(&'}');
            name
        } else {
            // $VAR ends at the first non-alphanumeric/underscore
            let name: String =
                std::iter::from_fn(|| chars.next_if(|&ch| ch.is_alphanumeric() || ch == '_'))
                    .collect();
            if name.is_empty() {
                // Just a lone $, keep it
                result.push('$');
                continue;
            }
            name
        };

        let value =
            env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}
