//! nusched configuration at ~/.config/nusched/config.toml

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::bounds::SemesterBounds;
use crate::constants::*;
use crate::error::{NuSchedError, NuSchedResult};
use crate::ics::CalendarMetadata;

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_calendar_name() -> String {
    DEFAULT_CALENDAR_NAME.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_product_id() -> String {
    DEFAULT_PRODUCT_ID.to_string()
}

fn default_uid_domain() -> String {
    DEFAULT_UID_DOMAIN.to_string()
}

fn default_fallback_start() -> NaiveDate {
    let (y, m, d) = FALLBACK_START;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn default_fallback_until() -> NaiveDate {
    let (y, m, d) = FALLBACK_UNTIL;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Settings for fetching and exporting. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NuSchedConfig {
    /// Where `nusched export` writes the calendar
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Captured "Copy as fetch" request used when no input is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_file: Option<PathBuf>,

    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,

    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_product_id")]
    pub product_id: String,

    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,

    /// Anchor used when no class has a parseable start date
    #[serde(default = "default_fallback_start")]
    pub fallback_start: NaiveDate,

    /// Recurrence end used when no class has a parseable end date
    #[serde(default = "default_fallback_until")]
    pub fallback_until: NaiveDate,
}

impl Default for NuSchedConfig {
    fn default() -> Self {
        NuSchedConfig {
            output_path: default_output_path(),
            request_file: None,
            calendar_name: default_calendar_name(),
            timezone: default_timezone(),
            product_id: default_product_id(),
            uid_domain: default_uid_domain(),
            fallback_start: default_fallback_start(),
            fallback_until: default_fallback_until(),
        }
    }
}

impl NuSchedConfig {
    pub fn config_path() -> NuSchedResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| NuSchedError::Config("Could not determine config directory".into()))?
            .join("nusched");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, creating a commented-out default on first run.
    pub fn load() -> NuSchedResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load a config file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> NuSchedResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| NuSchedError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| NuSchedError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> NuSchedResult<()> {
        let contents = format!(
            "\
# nusched configuration

# Where exported calendars are written:
# output_path = \"{}\"

# Captured \"Copy as fetch\" request to use when no --input/--request is given:
# request_file = \"~/nusched/request.txt\"

# Calendar envelope:
# calendar_name = \"{}\"
# timezone = \"{}\"
# product_id = \"{}\"
# uid_domain = \"{}\"

# Used when the schedule carries no usable start/end dates:
# fallback_start = \"{}\"
# fallback_until = \"{}\"
",
            DEFAULT_OUTPUT_PATH,
            DEFAULT_CALENDAR_NAME,
            DEFAULT_TIMEZONE,
            DEFAULT_PRODUCT_ID,
            DEFAULT_UID_DOMAIN,
            default_fallback_start(),
            default_fallback_until(),
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Output path with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        expand(&self.output_path)
    }

    /// Request file path with `~` expanded.
    pub fn request_file(&self) -> Option<PathBuf> {
        self.request_file.as_deref().map(expand)
    }

    pub fn metadata(&self) -> CalendarMetadata {
        CalendarMetadata {
            calendar_name: self.calendar_name.clone(),
            timezone: self.timezone.clone(),
            product_id: self.product_id.clone(),
            uid_domain: self.uid_domain.clone(),
        }
    }

    pub fn fallback_bounds(&self) -> SemesterBounds {
        SemesterBounds {
            anchor: self.fallback_start,
            until: self.fallback_until,
        }
    }

    /// The effective settings in config file syntax.
    pub fn to_toml(&self) -> NuSchedResult<String> {
        toml::to_string_pretty(self).map_err(|e| NuSchedError::Serialization(e.to_string()))
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
