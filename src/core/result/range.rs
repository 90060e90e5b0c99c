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

//! Result ranges
//!
//! A range groups a family of related descriptions inside one module so call
//! sites can ask "was this any of the data-corruption errors" with a single
//! check. Converting a range to a code always yields the lower bound; the
//! specific failing description is not preserved by that conversion.
//!
//! Ranges are declared with [`result_range!`](crate::result_range), which
//! forces evaluation at compile time. Passing a runtime value fails to build.
//!
//! ```
//! use hzresult::core::result::{ErrorModule, ResultCode, ResultRange};
//! use hzresult::result_range;
//!
//! const DATA_CORRUPTED: ResultRange = result_range!(FS, 4000, 4999);
//!
//! let code = ResultCode::new(ErrorModule::FS, 4301);
//! assert!(DATA_CORRUPTED.includes(code));
//! assert_eq!(DATA_CORRUPTED.code(), ResultCode::new(ErrorModule::FS, 4000));
//! ```

use super::code::{ResultCode, ResultError, MAX_DESCRIPTION};
use super::module::ErrorModule;

/// Inclusive range of descriptions within one module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultRange {
    /// Representative failure (module + first description)
    code: ResultError,
    /// Last description in the range (inclusive)
    description_end: u32,
}

impl ResultRange {
    /// Build a range; use [`result_range!`](crate::result_range) instead
    ///
    /// Panics on inverted bounds, an end past 8191, or a lower bound that
    /// packs to the success word. Inside a `const` item each of these is a
    /// compile error.
    #[doc(hidden)]
    pub const fn new(module: ErrorModule, description_start: u32, description_end: u32) -> Self {
        assert!(
            description_start <= description_end,
            "range start is past range end"
        );
        assert!(
            description_end <= MAX_DESCRIPTION,
            "range end does not fit 13 bits"
        );
        let code = match ResultError::from_code(ResultCode::new(module, description_start)) {
            Some(code) => code,
            None => panic!("range lower bound is the success code"),
        };
        Self {
            code,
            description_end,
        }
    }

    /// True if `other` is in this module and its description is in range
    #[inline]
    pub const fn includes(self, other: ResultCode) -> bool {
        let description = other.description();
        self.code.module_id() == other.module_id()
            && self.code.description() <= description
            && description <= self.description_end
    }

    /// Representative code (the lower bound)
    #[inline(always)]
    pub const fn code(self) -> ResultCode {
        self.code.code()
    }

    /// Representative failure (the lower bound)
    #[inline(always)]
    pub const fn error(self) -> ResultError {
        self.code
    }

    /// Module id shared by every code in the range
    #[inline(always)]
    pub const fn module_id(self) -> u32 {
        self.code.module_id()
    }

    /// First description (inclusive)
    #[inline(always)]
    pub const fn start(self) -> u32 {
        self.code.description()
    }

    /// Last description (inclusive)
    #[inline(always)]
    pub const fn end(self) -> u32 {
        self.description_end
    }

    /// Number of descriptions covered
    pub const fn len(self) -> u32 {
        self.description_end - self.start() + 1
    }

    /// Always false; a range covers at least one description
    pub const fn is_empty(self) -> bool {
        false
    }
}

impl From<ResultRange> for ResultCode {
    fn from(range: ResultRange) -> Self {
        range.code()
    }
}

impl From<ResultRange> for ResultError {
    fn from(range: ResultRange) -> Self {
        range.error()
    }
}

/// Declare a [`ResultRange`] evaluated at compile time
///
/// ```
/// use hzresult::core::result::ResultRange;
/// use hzresult::result_range;
///
/// const INVALID_PATH: ResultRange = result_range!(FS, 6002, 6029);
/// assert_eq!(INVALID_PATH.len(), 28);
/// ```
///
/// Runtime bounds are rejected:
///
/// ```compile_fail
/// use hzresult::result_range;
///
/// let end = 10;
/// let _range = result_range!(FS, 1, end);
/// ```
#[macro_export]
macro_rules! result_range {
    ($module:ident, $start:expr, $end:expr) => {{
        const RANGE: $crate::core::result::ResultRange = $crate::core::result::ResultRange::new(
            $crate::core::result::ErrorModule::$module,
            $start,
            $end,
        );
        RANGE
    }};
}
