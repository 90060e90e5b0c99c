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

//! Horizon OS result codes
//!
//! Every emulated OS service call reports its outcome as a packed 32-bit
//! result word. This module provides the word itself, the module registry,
//! description ranges, fallible values, and the propagation helpers HLE code
//! uses to stop at the first failure.
//!
//! ## Types
//!
//! - [`ErrorModule`]: which subsystem raised an error
//! - [`ResultCode`]: the packed word (success or failure)
//! - [`ResultError`]: a packed word that is guaranteed to be a failure
//! - [`ResultRange`]: a family of descriptions within one module
//! - [`ResultVal<T>`]: a value or the failure that prevented it
//!
//! ## Control flow
//!
//! - `?` on `ResultVal<T>`
//! - [`r_try!`](crate::r_try), [`r_throw!`](crate::r_throw),
//!   [`r_unless!`](crate::r_unless), [`r_succeed!`](crate::r_succeed),
//!   [`r_succeed_if!`](crate::r_succeed_if)
//! - [`scoped`] with [`ResultScope::on_failure`] / [`ResultScope::on_success`]
//!
//! ## Example
//!
//! ```
//! use hzresult::core::result::{scoped, ErrorModule, ResultCode, ResultError};
//! use hzresult::{r_try, r_unless};
//! use std::cell::Cell;
//!
//! const PATH_NOT_FOUND: ResultError = ResultError::new(ErrorModule::FS, 1);
//!
//! fn open(path: &str) -> ResultCode {
//!     r_unless!(path.starts_with('/'), PATH_NOT_FOUND);
//!     ResultCode::default()
//! }
//!
//! let closed = Cell::new(false);
//! let code: ResultCode = scoped(|scope| {
//!     scope.on_failure(|_| closed.set(true));
//!     r_try!(open("relative/path"));
//!     ResultCode::default()
//! });
//!
//! assert_eq!(code.to_string(), "2002-0001");
//! assert!(closed.get());
//! ```

mod code;
mod module;
pub mod propagate;
mod range;
mod scope;
mod val;

pub use code::{
    ResultCode, ResultError, DESCRIPTION_BITS, DESCRIPTION_SHIFT, MAX_DESCRIPTION, MAX_MODULE,
    MODULE_BITS, RESULT_SUCCESS, RESULT_UNKNOWN,
};
pub use module::ErrorModule;
pub use propagate::{r_failed, r_succeeded, ReturnCode, SuccessCode};
pub use range::ResultRange;
pub use scope::{scoped, Outcome, ResultScope};
pub use val::{IntoResultVal, ResultVal, ResultValExt, ToResultCode};
