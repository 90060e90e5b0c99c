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

//! Decoded result reports

use super::config::ToolConfig;
use crate::core::error::Result;
use crate::core::hle::results::describe;
use crate::core::result::{ErrorModule, ResultCode};
use serde::Serialize;
use std::fmt;

/// Everything the tool knows about one result word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    /// Raw word as hex
    pub raw: String,
    /// `2XXX-YYYY` form
    pub code: String,
    /// True for the success word
    pub success: bool,
    /// Module id field
    pub module_id: u32,
    /// Module name, if the id is known
    pub module: Option<&'static str>,
    /// Description field
    pub description: u32,
    /// Symbolic name from the built-in tables
    pub name: Option<&'static str>,
    /// Built-in ranges that include the code, widest first
    pub ranges: Vec<&'static str>,
    /// User ranges from the tool config that include the code
    pub labels: Vec<String>,
    /// True if bits above the description field are set
    pub reserved_bits: bool,
}

impl DecodeReport {
    /// Decode `code` against the built-in tables and `config`
    pub fn new(code: ResultCode, config: &ToolConfig) -> Self {
        let known = describe(code);
        let (name, ranges) = match known {
            Some(info) => (info.name, info.ranges),
            None => (None, Vec::new()),
        };

        Self {
            raw: format!("0x{:08X}", code.raw()),
            code: code.to_string(),
            success: code.is_success(),
            module_id: code.module_id(),
            module: code.error_module().map(ErrorModule::name),
            description: code.description(),
            name,
            ranges,
            labels: config.labels_for(code),
            reserved_bits: code.raw() != code.inner_value(),
        }
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.raw)?;
        if self.success {
            return write!(f, ": success");
        }
        writeln!(f)?;
        match self.module {
            Some(module) => writeln!(f, "  module:      {} ({})", module, self.module_id)?,
            None => writeln!(f, "  module:      unknown ({})", self.module_id)?,
        }
        write!(f, "  description: {}", self.description)?;
        if let Some(name) = self.name {
            write!(f, "\n  name:        {}", name)?;
        }
        if !self.ranges.is_empty() {
            write!(f, "\n  ranges:      {}", self.ranges.join(" > "))?;
        }
        if !self.labels.is_empty() {
            write!(f, "\n  labels:      {}", self.labels.join(", "))?;
        }
        if self.reserved_bits {
            write!(f, "\n  warning:     reserved bits set")?;
        }
        Ok(())
    }
}

/// One line per known module: id and name
pub fn module_listing() -> Vec<String> {
    ErrorModule::ALL
        .iter()
        .map(|module| format!("{:>4}  {}", module.raw(), module.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hle::results::{fs, kernel};
    use crate::core::result::{RESULT_SUCCESS, RESULT_UNKNOWN};
    use crate::tool::config::NamedRange;

    #[test]
    fn test_report_for_named_code() {
        let report = DecodeReport::new(kernel::INVALID_HANDLE.code(), &ToolConfig::default());
        assert_eq!(report.raw, "0x0000E401");
        assert_eq!(report.code, "2001-0114");
        assert!(!report.success);
        assert_eq!(report.module, Some("Kernel"));
        assert_eq!(report.name, Some("INVALID_HANDLE"));
        assert!(!report.reserved_bits);
        assert_eq!(
            report.to_string(),
            "2001-0114 (0x0000E401)\n  module:      Kernel (1)\n  description: 114\n  name:        INVALID_HANDLE"
        );
    }

    #[test]
    fn test_report_for_success() {
        let report = DecodeReport::new(RESULT_SUCCESS, &ToolConfig::default());
        assert!(report.success);
        assert_eq!(report.to_string(), "2000-0000 (0x00000000): success");
    }

    #[test]
    fn test_report_ranges_and_labels() {
        let config = ToolConfig {
            json: false,
            ranges: vec![NamedRange {
                name: "MyPathFamily".to_string(),
                module: "FS".to_string(),
                start: 6000,
                end: 6010,
            }],
        };
        let report = DecodeReport::new(fs::TOO_LONG_PATH.code(), &config);
        assert_eq!(
            report.ranges,
            vec!["PRECONDITION_VIOLATION", "INVALID_ARGUMENT", "INVALID_PATH"]
        );
        assert_eq!(report.labels, vec!["MyPathFamily".to_string()]);
        assert!(report
            .to_string()
            .contains("ranges:      PRECONDITION_VIOLATION > INVALID_ARGUMENT > INVALID_PATH"));
    }

    #[test]
    fn test_report_flags_reserved_bits() {
        let report = DecodeReport::new(RESULT_UNKNOWN, &ToolConfig::default());
        assert!(report.reserved_bits);
        assert_eq!(report.module, None);
        assert!(report.to_string().contains("reserved bits set"));
    }

    #[test]
    fn test_report_json() {
        let report = DecodeReport::new(fs::PATH_NOT_FOUND.code(), &ToolConfig::default());
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["code"], "2002-0001");
        assert_eq!(json["module"], "FS");
        assert_eq!(json["description"], 1);
        assert_eq!(json["name"], "PATH_NOT_FOUND");
    }

    #[test]
    fn test_module_listing() {
        let lines = module_listing();
        assert_eq!(lines.len(), ErrorModule::ALL.len());
        assert_eq!(lines[0], "   0  Common");
        assert_eq!(lines[2], "   2  FS");
    }
}
