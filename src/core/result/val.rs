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

//! Fallible values
//!
//! [`ResultVal<T>`] is either a produced value or a [`ResultError`]. It is an
//! alias of the standard `Result`, so `?` propagates failures and the usual
//! combinators apply. [`ResultValExt`] adds the query and unwrap operations HLE
//! code expects. A plain [`ResultCode`] is the degenerate `ResultVal<()>`.
//!
//! ```
//! use hzresult::core::result::{ErrorModule, ResultError, ResultVal, ResultValExt};
//!
//! fn frobnicate(strength: f32) -> ResultVal<i32> {
//!     if !(0.0..=1.0).contains(&strength) {
//!         return Err(ResultError::new(ErrorModule::Common, 1));
//!     }
//!     Ok(42)
//! }
//!
//! let ok = frobnicate(0.75);
//! assert!(ok.succeeded());
//! assert_eq!(ok.unwrap_val(), 42);
//!
//! let failed = frobnicate(2.0);
//! assert!(failed.failed());
//! assert_eq!(failed.code().raw(), 1 << 9);
//! ```

use super::code::{ResultCode, ResultError, RESULT_SUCCESS};
use super::range::ResultRange;

/// A value of type `T`, or the failure that prevented producing it
pub type ResultVal<T = ()> = std::result::Result<T, ResultError>;

/// Query and unwrap operations on [`ResultVal`]
pub trait ResultValExt<T> {
    /// [`RESULT_SUCCESS`] when holding a value, else the failure code
    fn code(&self) -> ResultCode;

    /// True when holding a value
    fn succeeded(&self) -> bool;

    /// True when holding a failure
    fn failed(&self) -> bool;

    /// Take the held value
    ///
    /// # Panics
    ///
    /// Panics when holding a failure. Unwrapping without checking first is
    /// an emulator bug, not a guest-visible error.
    fn unwrap_val(self) -> T;

    /// Take the held value, or `default` on failure
    fn value_or(self, default: T) -> T;
}

impl<T> ResultValExt<T> for ResultVal<T> {
    #[inline]
    fn code(&self) -> ResultCode {
        match self {
            Ok(_) => RESULT_SUCCESS,
            Err(err) => err.code(),
        }
    }

    #[inline]
    fn succeeded(&self) -> bool {
        self.is_ok()
    }

    #[inline]
    fn failed(&self) -> bool {
        self.is_err()
    }

    #[track_caller]
    fn unwrap_val(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("Tried to unwrap failed ResultVal: {} ({:?})", err, err),
        }
    }

    #[inline]
    fn value_or(self, default: T) -> T {
        self.unwrap_or(default)
    }
}

/// Anything that can be turned into a [`ResultVal`]
///
/// This is what lets [`r_try!`](crate::r_try) accept a bare code, a failure,
/// a range, or a full `ResultVal<T>`.
pub trait IntoResultVal<T> {
    /// Convert, mapping the success word to `Ok`
    fn into_result_val(self) -> ResultVal<T>;
}

impl IntoResultVal<()> for ResultCode {
    #[inline]
    fn into_result_val(self) -> ResultVal<()> {
        self.into_result()
    }
}

impl IntoResultVal<()> for ResultError {
    #[inline]
    fn into_result_val(self) -> ResultVal<()> {
        Err(self)
    }
}

impl IntoResultVal<()> for ResultRange {
    #[inline]
    fn into_result_val(self) -> ResultVal<()> {
        Err(self.error())
    }
}

impl<T> IntoResultVal<T> for ResultVal<T> {
    #[inline(always)]
    fn into_result_val(self) -> ResultVal<T> {
        self
    }
}

/// Anything whose outcome can be read as a [`ResultCode`] without consuming it
pub trait ToResultCode {
    /// The code this value would report to the guest
    fn to_result_code(&self) -> ResultCode;
}

impl ToResultCode for ResultCode {
    #[inline(always)]
    fn to_result_code(&self) -> ResultCode {
        *self
    }
}

impl ToResultCode for ResultError {
    #[inline(always)]
    fn to_result_code(&self) -> ResultCode {
        self.code()
    }
}

impl ToResultCode for ResultRange {
    #[inline(always)]
    fn to_result_code(&self) -> ResultCode {
        self.code()
    }
}

impl<T> ToResultCode for ResultVal<T> {
    #[inline(always)]
    fn to_result_code(&self) -> ResultCode {
        self.code()
    }
}

impl<R: ToResultCode + ?Sized> ToResultCode for &R {
    #[inline(always)]
    fn to_result_code(&self) -> ResultCode {
        (**self).to_result_code()
    }
}

impl From<ResultVal<()>> for ResultCode {
    fn from(result: ResultVal<()>) -> Self {
        result.code()
    }
}
