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

//! Host-side error types
//!
//! These errors describe failures of the emulator host itself (bad tool input,
//! unreadable configuration, malformed result strings). They are never handed to
//! guest software; guest-visible failures travel as
//! [`ResultCode`](crate::core::result::ResultCode) values instead.

use thiserror::Error;

/// Host-side emulator error
#[derive(Debug, Error)]
pub enum EmulatorError {
    /// Module id does not fit the 9-bit module field
    #[error("Module id {id} out of range (max {max})")]
    ModuleOutOfRange { id: u32, max: u32 },

    /// Description does not fit the 13-bit description field
    #[error("Description {description} out of range (max {max})")]
    DescriptionOutOfRange { description: u32, max: u32 },

    /// Module name or id not present in the module table
    #[error("Unknown error module: {0}")]
    UnknownModule(String),

    /// String could not be parsed as a result code
    #[error("Invalid result string '{input}': {reason}")]
    InvalidResultString { input: String, reason: String },

    /// Result range declared with inconsistent bounds
    #[error("Invalid result range '{name}': {reason}")]
    InvalidRange { name: String, reason: String },

    /// Supervisor call could not be registered
    #[error("Cannot register SVC 0x{id:02X}: {reason}")]
    SvcRegistration { id: u32, reason: &'static str },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// JSON report could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for host-side operations
pub type Result<T> = std::result::Result<T, EmulatorError>;
