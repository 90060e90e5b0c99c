// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decoder tool configuration
//!
//! Loaded from a TOML file. Besides output preferences it lets a user label
//! families of codes that the built-in tables do not know yet, for example
//! while reverse-engineering a new service:
//!
//! ```toml
//! json = false
//!
//! [[ranges]]
//! name = "HidVibration"
//! module = "HID"
//! start = 100
//! end = 199
//! ```
//!
//! These labels are matched at run time and only affect tool output. Guest
//! code uses compile-time [`ResultRange`](crate::core::result::ResultRange)
//! constants instead.

use crate::core::error::{EmulatorError, Result};
use crate::core::result::{ErrorModule, ResultCode, MAX_DESCRIPTION, MAX_MODULE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A user-labelled description range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRange {
    /// Label printed when a code falls in the range
    pub name: String,
    /// Module name or decimal id
    pub module: String,
    /// First description (inclusive)
    pub start: u32,
    /// Last description (inclusive)
    pub end: u32,
}

impl NamedRange {
    /// Resolve the module field to a numeric id
    pub fn module_id(&self) -> Result<u32> {
        if let Some(module) = ErrorModule::parse(&self.module) {
            return Ok(module.raw() & MAX_MODULE);
        }
        match self.module.parse::<u32>() {
            Ok(id) if id <= MAX_MODULE => Ok(id),
            Ok(id) => Err(EmulatorError::ModuleOutOfRange { id, max: MAX_MODULE }),
            Err(_) => Err(EmulatorError::UnknownModule(self.module.clone())),
        }
    }

    /// Check the bounds and module of this range
    pub fn validate(&self) -> Result<()> {
        self.module_id()?;
        let invalid = |reason: &str| EmulatorError::InvalidRange {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.start > self.end {
            return Err(invalid("start is past end"));
        }
        if self.end > MAX_DESCRIPTION {
            return Err(invalid("end does not fit 13 bits"));
        }
        Ok(())
    }

    /// True if `code` is in this range
    ///
    /// A range whose module does not resolve includes nothing.
    pub fn includes(&self, code: ResultCode) -> bool {
        match self.module_id() {
            Ok(id) => {
                code.module_id() == id && (self.start..=self.end).contains(&code.description())
            }
            Err(_) => false,
        }
    }
}

/// Decoder tool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Print reports as JSON instead of text
    pub json: bool,

    /// User-labelled ranges
    pub ranges: Vec<NamedRange>,
}

impl ToolConfig {
    /// Load configuration from a TOML file
    ///
    /// Every range is validated; the first bad one is reported.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: ToolConfig = toml::from_str(contents)?;
        for range in &config.ranges {
            range.validate()?;
        }
        Ok(config)
    }

    /// Load configuration, falling back to defaults if it cannot be read
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            log::info!(
                "Using default tool config (failed to load {}: {})",
                path.display(),
                e
            );
            Self::default()
        })
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Labels of every user range that includes `code`
    pub fn labels_for(&self, code: ResultCode) -> Vec<String> {
        self.ranges
            .iter()
            .filter(|range| range.includes(code))
            .map(|range| range.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hid_range() -> NamedRange {
        NamedRange {
            name: "HidVibration".to_string(),
            module: "HID".to_string(),
            start: 100,
            end: 199,
        }
    }

    #[test]
    fn test_default_config() {
        let config = ToolConfig::default();
        assert!(!config.json);
        assert!(config.ranges.is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let config = ToolConfig::from_toml(
            r#"
            json = true

            [[ranges]]
            name = "HidVibration"
            module = "HID"
            start = 100
            end = 199
            "#,
        )
        .unwrap();
        assert!(config.json);
        assert_eq!(config.ranges, vec![hid_range()]);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = ToolConfig::from_toml("").unwrap();
        assert_eq!(config, ToolConfig::default());
    }

    #[test]
    fn test_invalid_range_rejected() {
        let err = ToolConfig::from_toml(
            r#"
            [[ranges]]
            name = "Backwards"
            module = "FS"
            start = 10
            end = 5
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, EmulatorError::InvalidRange { .. }));

        let err = ToolConfig::from_toml(
            r#"
            [[ranges]]
            name = "Nowhere"
            module = "NotAModule"
            start = 1
            end = 2
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, EmulatorError::UnknownModule(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = ToolConfig::from_toml("json = [").unwrap_err();
        assert!(matches!(err, EmulatorError::ConfigParse(_)));
    }

    #[test]
    fn test_numeric_module_ids() {
        let range = NamedRange {
            module: "300".to_string(),
            ..hid_range()
        };
        assert_eq!(range.module_id().unwrap(), 300);
        assert!(range.includes(ResultCode::from_parts(300, 150)));

        let range = NamedRange {
            module: "600".to_string(),
            ..hid_range()
        };
        assert!(matches!(
            range.module_id(),
            Err(EmulatorError::ModuleOutOfRange { id: 600, .. })
        ));
        assert!(!range.includes(ResultCode::from_parts(88, 150)));
    }

    #[test]
    fn test_labels_for() {
        let config = ToolConfig {
            json: false,
            ranges: vec![hid_range()],
        };
        let inside = ResultCode::new(ErrorModule::HID, 150);
        let outside = ResultCode::new(ErrorModule::HID, 200);
        assert_eq!(config.labels_for(inside), vec!["HidVibration".to_string()]);
        assert!(config.labels_for(outside).is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hzresult.toml");

        let config = ToolConfig {
            json: true,
            ranges: vec![hid_range()],
        };
        config.save(&path).unwrap();
        assert_eq!(ToolConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ToolConfig::load_or_default(dir.path().join("missing.toml"));
        assert_eq!(config, ToolConfig::default());
    }
}
