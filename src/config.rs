// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

// Optional per-user settings, read from a JSON file named .snptemplateconfig in $HOME or the
// current directory, eg
//
//   { "log_level": "info", "strict": true, "format": "json", "all_markers": false }
//
// Unknown keys are ignored, and so are known keys with a value of the wrong type.

use std::{fs, path::Path, path::PathBuf};

use log::LevelFilter;
use serde_json::Value;

use crate::errors::SnpError;
use crate::report::OutputFormat;

pub const CONFIG_FILE_NAME: &str = ".snptemplateconfig";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnpTemplateConfig {
    pub log_level: Option<LevelFilter>,
    pub strict: Option<bool>,
    pub format: Option<OutputFormat>,
    pub all_markers: Option<bool>,
}

impl SnpTemplateConfig {
    pub fn from_file(path: &Path) -> Result<Self, SnpError> {
        let text = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)?;
        Ok(SnpTemplateConfig::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        SnpTemplateConfig {
            log_level: value
                .get("log_level")
                .and_then(Value::as_str)
                .and_then(|s| s.parse().ok()),
            strict: value.get("strict").and_then(Value::as_bool),
            format: value
                .get("format")
                .and_then(Value::as_str)
                .and_then(OutputFormat::from_name),
            all_markers: value.get("all_markers").and_then(Value::as_bool),
        }
    }
}

pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
