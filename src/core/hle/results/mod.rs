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

//! Per-module result tables
//!
//! Each submodule declares the failures one Horizon OS module reports, with
//! the description values from the public error code documentation. The
//! values are a fixed protocol with guest software and must not change.
//!
//! Tables are declared with [`define_results!`](crate::define_results), which
//! also records the symbolic names so tools can [`describe`] a raw code.

pub mod cmif;
pub mod fs;
pub mod kernel;
pub mod sm;

use crate::core::result::{ErrorModule, ResultCode, ResultError, ResultRange};

/// Symbolic names for one module's results
#[derive(Debug, Clone, Copy)]
pub struct ResultTable {
    /// Module the table belongs to
    pub module: ErrorModule,
    /// Named single results
    pub results: &'static [(&'static str, ResultError)],
    /// Named result ranges
    pub ranges: &'static [(&'static str, ResultRange)],
}

impl ResultTable {
    /// Name of `code` in this table, if declared
    pub fn name_of(&self, code: ResultCode) -> Option<&'static str> {
        self.results
            .iter()
            .find(|(_, err)| err.code() == code)
            .map(|(name, _)| *name)
    }

    /// Names of every range in this table that includes `code`
    pub fn ranges_of(&self, code: ResultCode) -> impl Iterator<Item = &'static str> + '_ {
        self.ranges
            .iter()
            .filter(move |(_, range)| range.includes(code))
            .map(|(name, _)| *name)
    }
}

/// All built-in tables
pub const TABLES: &[ResultTable] = &[kernel::TABLE, fs::TABLE, cmif::TABLE, sm::TABLE];

/// A code matched against the built-in tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    /// Module that declared the match
    pub module: ErrorModule,
    /// Symbolic name of the exact code, if declared
    pub name: Option<&'static str>,
    /// Every declared range that includes the code, widest first
    pub ranges: Vec<&'static str>,
}

/// Look up the symbolic name of `code`
///
/// # Returns
///
/// - `Some(Description)` if the code's module has a table and the code is
///   named or falls in a named range
/// - `None` otherwise (including success)
///
/// # Example
///
/// ```
/// use hzresult::core::hle::results::{describe, fs};
///
/// let info = describe(fs::TOO_LONG_PATH.code()).unwrap();
/// assert_eq!(info.name, Some("TOO_LONG_PATH"));
/// assert_eq!(info.ranges, ["PRECONDITION_VIOLATION", "INVALID_ARGUMENT", "INVALID_PATH"]);
/// ```
pub fn describe(code: ResultCode) -> Option<Description> {
    let table = TABLES
        .iter()
        .find(|table| table.module.raw() == code.module_id() && code.is_failure())?;

    let name = table.name_of(code);
    let mut ranges: Vec<(&'static str, ResultRange)> = table
        .ranges
        .iter()
        .copied()
        .filter(|(_, range)| range.includes(code))
        .collect();
    ranges.sort_by_key(|(_, range)| std::cmp::Reverse(range.len()));

    if name.is_none() && ranges.is_empty() {
        return None;
    }

    Some(Description {
        module: table.module,
        name,
        ranges: ranges.into_iter().map(|(name, _)| name).collect(),
    })
}

/// Declare the results of one module
///
/// Expands to one `pub const` [`ResultError`] per entry, one `pub const`
/// [`ResultRange`] per range entry, and a `pub const TABLE: ResultTable`
/// carrying the names.
///
/// ```
/// mod hid {
///     hzresult::define_results! {
///         HID => {
///             /// Npad id out of range
///             INVALID_NPAD_ID: 709,
///         }
///         ranges {
///             VIBRATION: 100..=199,
///         }
///     }
/// }
///
/// assert_eq!(hid::INVALID_NPAD_ID.to_string(), "2202-0709");
/// assert!(hid::VIBRATION.includes(hid::VIBRATION.code()));
/// assert_eq!(hid::TABLE.results.len(), 1);
/// ```
#[macro_export]
macro_rules! define_results {
    (
        $module:ident => {
            $( $(#[$meta:meta])* $name:ident : $description:literal ),* $(,)?
        }
        $( ranges {
            $( $(#[$range_meta:meta])* $range:ident : $start:literal ..= $end:literal ),* $(,)?
        } )?
    ) => {
        $(
            $(#[$meta])*
            pub const $name: $crate::core::result::ResultError =
                $crate::core::result::ResultError::new(
                    $crate::core::result::ErrorModule::$module,
                    $description,
                );
        )*

        $($(
            $(#[$range_meta])*
            pub const $range: $crate::core::result::ResultRange =
                $crate::result_range!($module, $start, $end);
        )*)?

        /// Names of every result declared in this module
        pub const TABLE: $crate::core::hle::results::ResultTable =
            $crate::core::hle::results::ResultTable {
                module: $crate::core::result::ErrorModule::$module,
                results: &[$((stringify!($name), $name),)*],
                ranges: &[$($((stringify!($range), $range),)*)?],
            };
    };
}
