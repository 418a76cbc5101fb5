use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use crate::calendar;
use crate::models::{Blackout, SchoolDaySequence, SeatingTemplate};

/// Classroom shipped with the binary.
const BUILTIN: &str = include_str!("../classroom.toml");

/// Semester window, blackout dates and the four seating templates.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeatingConfig {
    #[serde(default = "default_title")]
    pub title: String,
    pub semester: Semester,
    #[serde(default)]
    pub blackouts: Vec<Blackout>,
    /// Template N starts in row N.
    pub templates: [SeatingTemplate; 4],
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Semester {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

fn default_title() -> String {
    "Harta Clasei".to_string()
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("blackout range {start}..{end} ends before it starts")]
    InvertedBlackout { start: NaiveDate, end: NaiveDate },
}

impl SeatingConfig {
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_toml(BUILTIN).context("built-in classroom config is invalid")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_toml(&toml_str)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    /// The file at `path` when given, otherwise the built-in classroom.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::builtin()?,
        };
        info!(
            source = %path.map_or_else(|| "built-in".to_string(), |p| p.display().to_string()),
            start = %config.semester.start,
            end = %config.semester.end,
            blackouts = config.blackouts.len(),
            "loaded classroom config"
        );
        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        let config: SeatingConfig = toml::from_str(toml_str).context("failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for blackout in &self.blackouts {
            if let Blackout::Range { start, end } = blackout {
                if start > end {
                    return Err(ConfigError::InvertedBlackout {
                        start: *start,
                        end: *end,
                    });
                }
            }
        }
        if self.semester.start > self.semester.end {
            warn!(
                start = %self.semester.start,
                end = %self.semester.end,
                "semester ends before it starts, there are no school days"
            );
        }
        Ok(())
    }

    pub fn school_days(&self) -> SchoolDaySequence {
        let days =
            calendar::generate_school_days(self.semester.start, self.semester.end, &self.blackouts);
        info!(count = days.len(), "school days ready");
        days
    }
}
