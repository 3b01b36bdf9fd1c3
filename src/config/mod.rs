//! Configuration: file discovery, defaults, and environment variables.

mod settings;

pub use settings::{
    expand_env_vars, CompileSettings, OutputFormat, OutputSettings, Settings, SettingsError,
};
