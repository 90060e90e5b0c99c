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

//! hzresult: Horizon OS result codes for high-level emulation
//!
//! Every emulated OS service call reports success or one of hundreds of
//! failure codes through a packed 32-bit result word. This crate reproduces
//! that word bit for bit and provides the propagation tools HLE services are
//! written with.
//!
//! # Architecture
//!
//! - [`core::result`]: Result word, module registry, ranges, `ResultVal<T>`,
//!   propagation macros and scoped outcome guards
//! - [`core::hle`]: Per-module result tables
//! - [`core::svc`]: Supervisor call dispatch into guest registers
//! - [`tool`]: Support code for the `hzresult` decoder binary
//!
//! # Example
//!
//! ```
//! use hzresult::core::hle::results::fs;
//! use hzresult::core::result::{ResultVal, ResultValExt};
//! use hzresult::r_unless;
//!
//! fn open(path: &str) -> ResultVal<u32> {
//!     r_unless!(path.len() < 0x300, fs::TOO_LONG_PATH);
//!     Ok(3)
//! }
//!
//! fn open_twice(path: &str) -> ResultVal<(u32, u32)> {
//!     let a = open(path)?;
//!     let b = open(path)?;
//!     Ok((a, b))
//! }
//!
//! let long = "a".repeat(0x400);
//! assert_eq!(open_twice(&long).code(), fs::TOO_LONG_PATH.code());
//! assert!(fs::INVALID_PATH.includes(open_twice(&long).code()));
//! ```
//!
//! # Error Handling
//!
//! Guest-visible failures are [`ResultCode`] values and never host errors.
//! Host-side fallible operations (parsing, configuration) return
//! [`core::error::Result<T>`], an alias for `Result<T, EmulatorError>`.
//! Contract violations such as unwrapping a failed `ResultVal` panic.

pub mod core;
pub mod tool;

// Re-export commonly used types
pub use self::core::error::{EmulatorError, Result};
pub use self::core::result::{ErrorModule, ResultCode, ResultError, ResultRange, ResultVal};
