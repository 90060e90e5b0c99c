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

//! Packed Horizon OS result word
//!
//! A result code is a 32-bit word that crosses the guest/host boundary
//! unchanged, so its layout must match the console bit for bit.
//!
//! ## Layout
//!
//! ```text
//! 31          22 21                    9 8             0
//! +-------------+-----------------------+---------------+
//! |  reserved   |  description (13)     |  module (9)   |
//! +-------------+-----------------------+---------------+
//! ```
//!
//! A raw value of zero is the only success value. Every other word is a
//! failure, including words whose fields name no known module.
//!
//! ## Display format
//!
//! Error viewers on the console show codes as `2XXX-YYYY`, where `2XXX` is
//! 2000 plus the module id and `YYYY` is the zero-padded description.

use super::module::ErrorModule;
use crate::core::error::{EmulatorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Width of the module field in bits
pub const MODULE_BITS: u32 = 9;

/// Width of the description field in bits
pub const DESCRIPTION_BITS: u32 = 13;

/// Bit position of the description field
pub const DESCRIPTION_SHIFT: u32 = MODULE_BITS;

/// Largest module id that fits the module field
pub const MAX_MODULE: u32 = (1 << MODULE_BITS) - 1;

/// Largest description that fits the description field
pub const MAX_DESCRIPTION: u32 = (1 << DESCRIPTION_BITS) - 1;

/// Mask of the bits used by module and description together
const USED_MASK: u32 = (1 << (MODULE_BITS + DESCRIPTION_BITS)) - 1;

/// Offset added to the module id in the `2XXX-YYYY` display form
const DISPLAY_MODULE_BASE: u32 = 2000;

/// The default success code
pub const RESULT_SUCCESS: ResultCode = ResultCode(0);

/// Placeholder for failures whose real code is not known yet
///
/// Only use this while the correct module/description pair is unknown.
pub const RESULT_UNKNOWN: ResultCode = ResultCode(u32::MAX);

/// A Horizon OS result code (success or failure)
///
/// Plain copyable value; two codes with the same raw word are
/// interchangeable.
///
/// # Example
///
/// ```
/// use hzresult::core::result::{ErrorModule, ResultCode};
///
/// let code = ResultCode::new(ErrorModule::FS, 42);
/// assert_eq!(code.raw(), (42 << 9) | 2);
/// assert_eq!(code.to_string(), "2002-0042");
/// assert!(code.is_failure());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
#[must_use = "this `ResultCode` may be a failure that should be handled"]
pub struct ResultCode(u32);

impl ResultCode {
    /// Create a result code from a known module and a description
    ///
    /// Module ids wider than 9 bits (the applet ids from 800 up) are masked
    /// exactly like the hardware field. A description wider than 13 bits is a
    /// programmer error: it asserts in debug builds and is masked in release.
    ///
    /// # Arguments
    ///
    /// * `module` - Module that raised the error
    /// * `description` - Module-specific description (0-8191)
    #[inline(always)]
    pub const fn new(module: ErrorModule, description: u32) -> Self {
        Self::from_parts(module.raw() & MAX_MODULE, description)
    }

    /// Create a result code from a raw module id and a description
    ///
    /// Both fields are asserted in debug builds and masked in release.
    #[inline(always)]
    pub const fn from_parts(module_id: u32, description: u32) -> Self {
        debug_assert!(module_id <= MAX_MODULE, "module id does not fit 9 bits");
        debug_assert!(
            description <= MAX_DESCRIPTION,
            "description does not fit 13 bits"
        );
        Self((module_id & MAX_MODULE) | ((description & MAX_DESCRIPTION) << DESCRIPTION_SHIFT))
    }

    /// Checked construction for numbers from untrusted input
    ///
    /// # Returns
    ///
    /// - `Ok(ResultCode)` if both fields fit
    /// - `Err(EmulatorError)` naming the field that does not
    pub fn try_from_parts(module_id: u32, description: u32) -> Result<Self> {
        if module_id > MAX_MODULE {
            return Err(EmulatorError::ModuleOutOfRange {
                id: module_id,
                max: MAX_MODULE,
            });
        }
        if description > MAX_DESCRIPTION {
            return Err(EmulatorError::DescriptionOutOfRange {
                description,
                max: MAX_DESCRIPTION,
            });
        }
        Ok(Self::from_parts(module_id, description))
    }

    /// Wrap a raw word exactly as the guest sees it
    #[inline(always)]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw word written back to the guest
    #[inline(always)]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Module id field (bits 0-8)
    #[inline(always)]
    pub const fn module_id(self) -> u32 {
        self.0 & MAX_MODULE
    }

    /// Module field resolved against the module table
    ///
    /// Returns `None` when the id is not a known module.
    pub const fn error_module(self) -> Option<ErrorModule> {
        ErrorModule::from_raw(self.module_id())
    }

    /// Description field (bits 9-21)
    #[inline(always)]
    pub const fn description(self) -> u32 {
        (self.0 >> DESCRIPTION_SHIFT) & MAX_DESCRIPTION
    }

    /// Module and description repacked without the reserved high bits
    #[inline(always)]
    pub const fn inner_value(self) -> u32 {
        self.0 & USED_MASK
    }

    /// True if the raw word is zero
    #[inline(always)]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }

    /// True if the raw word is non-zero
    #[inline(always)]
    pub const fn is_failure(self) -> bool {
        !self.is_success()
    }

    /// Alias of [`ResultCode::is_failure`]
    #[inline(always)]
    pub const fn is_error(self) -> bool {
        self.is_failure()
    }

    /// True if `other` is exactly this error (module and description)
    #[inline(always)]
    pub const fn includes(self, other: ResultCode) -> bool {
        self.inner_value() == other.inner_value()
    }

    /// The failure carried by this code, if any
    #[inline(always)]
    pub const fn error(self) -> Option<ResultError> {
        ResultError::from_code(self)
    }

    /// Convert into a [`ResultVal<()>`](super::ResultVal) so `?` can propagate it
    ///
    /// # Example
    ///
    /// ```
    /// use hzresult::core::result::{ErrorModule, ResultCode, ResultVal};
    ///
    /// fn close(code: ResultCode) -> ResultVal<()> {
    ///     code.into_result()?;
    ///     Ok(())
    /// }
    ///
    /// let failure = ResultCode::new(ErrorModule::Kernel, 114);
    /// assert_eq!(close(failure).unwrap_err().code(), failure);
    /// ```
    #[inline]
    pub fn into_result(self) -> std::result::Result<(), ResultError> {
        match self.error() {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:04}",
            DISPLAY_MODULE_BASE + self.module_id(),
            self.description()
        )
    }
}

impl fmt::Debug for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            return f.write_str("ResultCode(Success)");
        }
        let mut s = f.debug_struct("ResultCode");
        match self.error_module() {
            Some(module) => s.field("module", &module),
            None => s.field("module", &self.module_id()),
        };
        s.field("description", &self.description())
            .field("raw", &format_args!("0x{:08X}", self.0))
            .finish()
    }
}

impl From<u32> for ResultCode {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<ResultCode> for u32 {
    fn from(code: ResultCode) -> Self {
        code.0
    }
}

impl FromStr for ResultCode {
    type Err = EmulatorError;

    /// Parse `2XXX-YYYY`, a `0x`-prefixed hex word, or a decimal word
    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let invalid = |reason: &str| EmulatorError::InvalidResultString {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        if let Some((module, description)) = input.split_once('-') {
            let module: u32 = module
                .parse()
                .map_err(|_| invalid("module part is not a number"))?;
            let description: u32 = description
                .parse()
                .map_err(|_| invalid("description part is not a number"))?;
            let module_id = module
                .checked_sub(DISPLAY_MODULE_BASE)
                .ok_or_else(|| invalid("module part must be at least 2000"))?;
            return Self::try_from_parts(module_id, description);
        }

        if let Some(hex) = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
        {
            return u32::from_str_radix(hex, 16)
                .map(Self)
                .map_err(|_| invalid("not a hexadecimal word"));
        }

        input
            .parse::<u32>()
            .map(Self)
            .map_err(|_| invalid("expected 2XXX-YYYY, 0x-prefixed hex, or decimal"))
    }
}

/// A failing result code
///
/// Unlike [`ResultCode`] this can never hold the success word, so a failed
/// [`ResultVal`](super::ResultVal) can never read back as success.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(transparent)]
pub struct ResultError(NonZeroU32);

impl ResultError {
    /// Create a failure from a module and a description
    ///
    /// Panics (a compile error in `const` context) if the pair packs to
    /// the success word.
    pub const fn new(module: ErrorModule, description: u32) -> Self {
        match Self::from_code(ResultCode::new(module, description)) {
            Some(err) => err,
            None => panic!("success is not a failure code"),
        }
    }

    /// Failure carried by `code`, or `None` for success
    #[inline(always)]
    pub const fn from_code(code: ResultCode) -> Option<Self> {
        match NonZeroU32::new(code.0) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// The failure as a plain result code
    #[inline(always)]
    pub const fn code(self) -> ResultCode {
        ResultCode(self.0.get())
    }

    /// The raw word written back to the guest
    #[inline(always)]
    pub const fn raw(self) -> u32 {
        self.0.get()
    }

    /// Module id field
    #[inline(always)]
    pub const fn module_id(self) -> u32 {
        self.code().module_id()
    }

    /// Module field resolved against the module table
    pub const fn error_module(self) -> Option<ErrorModule> {
        self.code().error_module()
    }

    /// Description field
    #[inline(always)]
    pub const fn description(self) -> u32 {
        self.code().description()
    }

    /// True if `other` is exactly this error
    #[inline(always)]
    pub const fn includes(self, other: ResultCode) -> bool {
        self.code().includes(other)
    }
}

impl From<ResultError> for ResultCode {
    fn from(err: ResultError) -> Self {
        err.code()
    }
}

impl From<ResultError> for u32 {
    fn from(err: ResultError) -> Self {
        err.raw()
    }
}

impl TryFrom<u32> for ResultError {
    type Error = EmulatorError;

    fn try_from(raw: u32) -> Result<Self> {
        ResultError::from_code(ResultCode(raw)).ok_or_else(|| EmulatorError::InvalidResultString {
            input: raw.to_string(),
            reason: "success is not a failure code".to_string(),
        })
    }
}

impl PartialEq<ResultCode> for ResultError {
    fn eq(&self, other: &ResultCode) -> bool {
        self.code() == *other
    }
}

impl PartialEq<ResultError> for ResultCode {
    fn eq(&self, other: &ResultError) -> bool {
        *self == other.code()
    }
}

impl fmt::Display for ResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.code(), f)
    }
}

impl fmt::Debug for ResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.code(), f)
    }
}

impl std::error::Error for ResultError {}
