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

//! Early-return propagation
//!
//! HLE functions are chains of fallible steps that must stop at the first
//! failure. For `ResultVal<T>` the `?` operator already does this. The macros
//! here cover the remaining shapes:
//!
//! - [`r_try!`](crate::r_try): propagate a bare [`ResultCode`] (or anything
//!   [`IntoResultVal`]) and yield the success value
//! - [`r_throw!`](crate::r_throw): return a failure
//! - [`r_unless!`](crate::r_unless): return a failure unless a condition holds
//! - [`r_succeed!`](crate::r_succeed) / [`r_succeed_if!`](crate::r_succeed_if):
//!   return success (conditionally)
//!
//! Every macro returns through [`ReturnCode`] / [`SuccessCode`], so the
//! enclosing function may return either a `ResultCode` or a `ResultVal<T>`.
//!
//! ```
//! use hzresult::core::result::{ErrorModule, ResultCode, ResultError, RESULT_SUCCESS};
//! use hzresult::{r_try, r_unless};
//!
//! const INVALID_SIZE: ResultError = ResultError::new(ErrorModule::Kernel, 101);
//!
//! fn check_size(size: u64) -> ResultCode {
//!     r_unless!(size % 0x1000 == 0, INVALID_SIZE);
//!     RESULT_SUCCESS
//! }
//!
//! fn map(size: u64) -> ResultCode {
//!     r_try!(check_size(size));
//!     RESULT_SUCCESS
//! }
//!
//! assert_eq!(map(0x2000), RESULT_SUCCESS);
//! assert_eq!(map(0x2001), INVALID_SIZE.code());
//! ```
//!
//! [`IntoResultVal`]: super::IntoResultVal

use super::code::{ResultCode, ResultError, RESULT_SUCCESS};
use super::val::{ResultVal, ToResultCode};
use std::panic::Location;

/// Return types a failure can be propagated through
pub trait ReturnCode {
    /// Build the return value for `err`
    fn from_failure(err: ResultError) -> Self;
}

impl ReturnCode for ResultCode {
    #[inline(always)]
    fn from_failure(err: ResultError) -> Self {
        err.code()
    }
}

impl<T> ReturnCode for ResultVal<T> {
    #[inline(always)]
    fn from_failure(err: ResultError) -> Self {
        Err(err)
    }
}

/// Return types that can express success without a value
pub trait SuccessCode {
    /// The success return value
    fn success() -> Self;
}

impl SuccessCode for ResultCode {
    #[inline(always)]
    fn success() -> Self {
        RESULT_SUCCESS
    }
}

impl SuccessCode for ResultVal<()> {
    #[inline(always)]
    fn success() -> Self {
        Ok(())
    }
}

/// Convert `err` into the enclosing return type, tracing the call site
///
/// Used by the propagation macros; not normally called directly.
#[doc(hidden)]
#[track_caller]
#[inline]
pub fn propagate<R: ReturnCode>(err: ResultError) -> R {
    let location = Location::caller();
    log::trace!(
        "Propagating {} from {}:{}",
        err,
        location.file(),
        location.line()
    );
    R::from_failure(err)
}

/// True if `result` reports success
#[inline]
pub fn r_succeeded(result: impl ToResultCode) -> bool {
    result.to_result_code().is_success()
}

/// True if `result` reports failure
#[inline]
pub fn r_failed(result: impl ToResultCode) -> bool {
    result.to_result_code().is_failure()
}

/// Propagate a failure out of the enclosing function
///
/// Accepts anything implementing
/// [`IntoResultVal`](crate::core::result::IntoResultVal). On success the
/// macro evaluates to the unwrapped value (`()` for a bare code).
#[macro_export]
macro_rules! r_try {
    ($expr:expr) => {
        match $crate::core::result::IntoResultVal::into_result_val($expr) {
            ::std::result::Result::Ok(value) => value,
            ::std::result::Result::Err(err) => {
                return $crate::core::result::propagate::propagate(err);
            }
        }
    };
}

/// Return a failure from the enclosing function
///
/// Accepts a [`ResultError`](crate::core::result::ResultError) or a
/// [`ResultRange`](crate::core::result::ResultRange) (which throws its lower
/// bound).
#[macro_export]
macro_rules! r_throw {
    ($err:expr) => {
        return $crate::core::result::propagate::propagate(
            $crate::core::result::ResultError::from($err),
        )
    };
}

/// Return `err` from the enclosing function unless `cond` holds
#[macro_export]
macro_rules! r_unless {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            $crate::r_throw!($err);
        }
    };
}

/// Return success from the enclosing function
#[macro_export]
macro_rules! r_succeed {
    () => {
        return $crate::core::result::SuccessCode::success()
    };
}

/// Return success from the enclosing function if `cond` holds
#[macro_export]
macro_rules! r_succeed_if {
    ($cond:expr) => {
        if $cond {
            $crate::r_succeed!();
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::result::{ErrorModule, ResultRange, ResultValExt};
    use crate::{r_succeed, r_succeed_if, r_throw, r_try, r_unless, result_range};

    const INVALID_HANDLE: ResultError = ResultError::new(ErrorModule::Kernel, 114);
    const PATH_NOT_FOUND: ResultError = ResultError::new(ErrorModule::FS, 1);
    const DATA_CORRUPTED: ResultRange = result_range!(FS, 4000, 4999);

    fn lookup(handle: u32) -> ResultVal<u64> {
        r_unless!(handle != 0, INVALID_HANDLE);
        Ok(u64::from(handle) * 0x1000)
    }

    fn lookup_code(handle: u32) -> ResultCode {
        let address = r_try!(lookup(handle));
        assert_eq!(address % 0x1000, 0);
        RESULT_SUCCESS
    }

    fn open(path: &str) -> ResultCode {
        r_unless!(!path.is_empty(), PATH_NOT_FOUND);
        RESULT_SUCCESS
    }

    #[test]
    fn test_r_try_propagates_bare_code_unchanged() {
        fn open_both(a: &str, b: &str) -> ResultVal<()> {
            r_try!(open(a));
            r_try!(open(b));
            Ok(())
        }

        assert_eq!(open_both("a", "b"), Ok(()));
        assert_eq!(open_both("a", ""), Err(PATH_NOT_FOUND));
    }

    #[test]
    fn test_r_try_binds_value() {
        fn sum(a: u32, b: u32) -> ResultVal<u64> {
            let x = r_try!(lookup(a));
            let y = r_try!(lookup(b));
            Ok(x + y)
        }

        assert_eq!(sum(1, 2), Ok(0x3000));
        assert_eq!(sum(1, 0).code(), INVALID_HANDLE.code());
    }

    #[test]
    fn test_r_try_into_code_return() {
        assert_eq!(lookup_code(3), RESULT_SUCCESS);
        assert_eq!(lookup_code(0), INVALID_HANDLE.code());
    }

    #[test]
    fn test_question_mark_matches_r_try() {
        fn via_question_mark(handle: u32) -> ResultVal<u64> {
            let address = lookup(handle)?;
            Ok(address + 1)
        }

        assert_eq!(via_question_mark(0), Err(INVALID_HANDLE));
        assert_eq!(via_question_mark(1), Ok(0x1001));
    }

    #[test]
    fn test_r_throw_range_uses_lower_bound() {
        fn verify(ok: bool) -> ResultCode {
            if !ok {
                r_throw!(DATA_CORRUPTED);
            }
            RESULT_SUCCESS
        }

        assert_eq!(verify(true), RESULT_SUCCESS);
        assert_eq!(verify(false), ResultCode::new(ErrorModule::FS, 4000));
    }

    #[test]
    fn test_r_succeed_if_short_circuits() {
        fn flush(cached: bool, calls: &mut u32) -> ResultVal<()> {
            r_succeed_if!(cached);
            *calls += 1;
            r_throw!(PATH_NOT_FOUND);
        }

        let mut calls = 0;
        assert_eq!(flush(true, &mut calls), Ok(()));
        assert_eq!(calls, 0);
        assert_eq!(flush(false, &mut calls), Err(PATH_NOT_FOUND));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_r_succeed_into_code() {
        fn early() -> ResultCode {
            r_succeed!();
        }
        assert_eq!(early(), RESULT_SUCCESS);
    }

    #[test]
    fn test_r_succeeded_and_failed() {
        assert!(r_succeeded(RESULT_SUCCESS));
        assert!(r_failed(INVALID_HANDLE));
        assert!(r_failed(DATA_CORRUPTED));

        let val: ResultVal<String> = Ok("x".to_string());
        assert!(r_succeeded(&val));
        assert!(!r_failed(&val));
    }
}
