//! Configuration constants and profile loading for curlview
//!
//! A profile is an INI section that supplies default parser and formatter
//! options:
//!
//! ```ini
//! [default]
//! data_flags = extended
//! missing_argument = fail
//! header_order = sorted
//! body_render = json-first
//! ```

use crate::curl::{
    BodyRender, DataFlagSet, FormatOptions, HeaderOrder, InvalidOptionValue,
    MissingArgumentPolicy, ParseOptions,
};
use ini::{Ini, Properties};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Default profile file path for curlview
pub const DEFAULT_PROFILE_PATH: &str = "~/.curlview/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "CURLVIEW_PROFILE_PATH";

/// Environment variable name for the log level
pub const LOG_LEVEL_ENV_VAR: &str = "CURLVIEW_LOG_LEVEL";

/// Profile used when none is given on the command line
pub const DEFAULT_PROFILE_NAME: &str = "default";

const KEY_DATA_FLAGS: &str = "data_flags";
const KEY_MISSING_ARGUMENT: &str = "missing_argument";
const KEY_HEADER_ORDER: &str = "header_order";
const KEY_BODY_RENDER: &str = "body_render";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read profile file '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: ini::Error,
    },

    #[error("profile '{profile}', key '{key}': {source}")]
    InvalidValue {
        profile: String,
        key: &'static str,
        #[source]
        source: InvalidOptionValue,
    },
}

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Expand `~` and environment variables in a profile path
pub fn expand_profile_path(path: &str) -> PathBuf {
    match shellexpand::full(path) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(_) => PathBuf::from(shellexpand::tilde(path).into_owned()),
    }
}

/// Options read from one profile section. Unset keys stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub data_flags: Option<DataFlagSet>,
    pub missing_argument: Option<MissingArgumentPolicy>,
    pub header_order: Option<HeaderOrder>,
    pub body_render: Option<BodyRender>,
}

impl Profile {
    fn from_properties(profile: &str, props: &Properties) -> Result<Self, ConfigError> {
        Ok(Self {
            data_flags: read_key(profile, props, KEY_DATA_FLAGS)?,
            missing_argument: read_key(profile, props, KEY_MISSING_ARGUMENT)?,
            header_order: read_key(profile, props, KEY_HEADER_ORDER)?,
            body_render: read_key(profile, props, KEY_BODY_RENDER)?,
        })
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            data_flags: self.data_flags.unwrap_or_default(),
            missing_argument: self.missing_argument.unwrap_or_default(),
        }
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            header_order: self.header_order.unwrap_or_default(),
            body_render: self.body_render.unwrap_or_default(),
        }
    }
}

fn read_key<T>(profile: &str, props: &Properties, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr<Err = InvalidOptionValue>,
{
    props
        .get(key)
        .map(|raw| {
            raw.parse().map_err(|source| ConfigError::InvalidValue {
                profile: profile.to_string(),
                key,
                source,
            })
        })
        .transpose()
}

/// Load `profile_name` from the INI file at `profile_path`.
///
/// A missing file or a missing section is not an error; the caller gets
/// `None` and falls back to defaults.
pub fn load_profile(profile_name: &str, profile_path: &str) -> Result<Option<Profile>, ConfigError> {
    let path = expand_profile_path(profile_path);
    if !path.exists() {
        tracing::debug!("Profile file '{}' does not exist", path.display());
        return Ok(None);
    }

    let ini = Ini::load_from_file(&path).map_err(|source| ConfigError::Load {
        path: path.display().to_string(),
        source,
    })?;

    match ini.section(Some(profile_name)) {
        Some(props) => Profile::from_properties(profile_name, props).map(Some),
        None => {
            tracing::debug!(
                "Profile '{}' not found in '{}'",
                profile_name,
                path.display()
            );
            Ok(None)
        }
    }
}
