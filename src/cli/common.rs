//! Common helper functions shared across CLI commands

use crate::config::{CONFIG_FILE_NAME, ColorOption, Config};
use crate::error::ConfigError;
use std::path::Path;

/// Exit codes. Setup failures and error-severity findings both map to 1.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Load the configuration for a run
///
/// An explicit path must exist. Without one, `api-error-lint.toml` in the
/// working directory is used when present, otherwise the defaults.
///
/// # Errors
///
/// Returns `ConfigError::Io` if an explicit file cannot be read.
/// Returns `ConfigError::Parse` or `ConfigError::Validation` if the file is invalid.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    let default_path = Path::new(CONFIG_FILE_NAME);
    if default_path.is_file() {
        tracing::debug!(path = %default_path.display(), "loading configuration");
        Config::load(default_path)
    } else {
        Ok(Config::default())
    }
}

/// Map the configured color option onto termcolor's choice
pub fn color_choice(option: ColorOption) -> termcolor::ColorChoice {
    match option {
        ColorOption::Auto => {
            if std::io::IsTerminal::is_terminal(&std::io::stdout()) {
                termcolor::ColorChoice::Auto
            } else {
                termcolor::ColorChoice::Never
            }
        }
        ColorOption::Always => termcolor::ColorChoice::Always,
        ColorOption::Never => termcolor::ColorChoice::Never,
    }
}
