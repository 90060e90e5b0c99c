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

//! Scoped outcome guards
//!
//! Cleanup that must run only when a function ultimately fails (or only when
//! it succeeds) is registered on a [`ResultScope`]. The scope belongs to one
//! function activation: [`scoped`] creates it, runs the body, records the
//! body's final code, then fires the matching guards exactly once in reverse
//! registration order. Early returns through `?` or the propagation macros
//! are covered because they leave the body, not the scope.
//!
//! Nested and recursive activations each get their own scope, and nothing is
//! stored in thread-local state, so inner guards never observe an outer
//! function's result.
//!
//! ```
//! use hzresult::core::result::{scoped, ErrorModule, ResultError, ResultVal};
//! use std::cell::RefCell;
//!
//! const OUT_OF_MEMORY: ResultError = ResultError::new(ErrorModule::Kernel, 104);
//!
//! fn map_pages(mapped: &RefCell<Vec<u64>>, addresses: &[u64]) -> ResultVal<()> {
//!     scoped(|scope| {
//!         // Undo partial mappings if anything below fails
//!         scope.on_failure(move |_| mapped.borrow_mut().clear());
//!         for &address in addresses {
//!             if address == 0 {
//!                 return Err(OUT_OF_MEMORY);
//!             }
//!             mapped.borrow_mut().push(address);
//!         }
//!         Ok(())
//!     })
//! }
//!
//! let mapped = RefCell::new(Vec::new());
//! assert!(map_pages(&mapped, &[0x1000, 0x2000]).is_ok());
//! assert_eq!(mapped.borrow().len(), 2);
//!
//! let mapped = RefCell::new(Vec::new());
//! assert!(map_pages(&mapped, &[0x1000, 0]).is_err());
//! assert!(mapped.borrow().is_empty());
//! ```

use super::code::ResultCode;
use super::val::ToResultCode;

/// Which final outcome a guard fires on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Fire when the final code is success
    Success,
    /// Fire when the final code is a failure
    Failure,
}

impl Outcome {
    /// True if `code` is the outcome this guard waits for
    #[inline]
    pub const fn matches(self, code: ResultCode) -> bool {
        match self {
            Outcome::Success => code.is_success(),
            Outcome::Failure => code.is_failure(),
        }
    }
}

struct Guard<'a> {
    when: Outcome,
    action: Box<dyn FnOnce(ResultCode) + 'a>,
}

/// Per-activation outcome cell plus the guards waiting on it
///
/// Only obtainable through [`scoped`].
pub struct ResultScope<'a> {
    /// Final code of the body; `None` until the body returns
    current: Option<ResultCode>,
    guards: Vec<Guard<'a>>,
}

impl<'a> ResultScope<'a> {
    fn new() -> Self {
        Self {
            current: None,
            guards: Vec::new(),
        }
    }

    /// Run `action` at scope exit if the final code is a failure
    ///
    /// The action receives the final code.
    pub fn on_failure(&mut self, action: impl FnOnce(ResultCode) + 'a) {
        self.on_outcome(Outcome::Failure, action);
    }

    /// Run `action` at scope exit if the final code is success
    pub fn on_success(&mut self, action: impl FnOnce(ResultCode) + 'a) {
        self.on_outcome(Outcome::Success, action);
    }

    /// Run `action` at scope exit if the final code matches `when`
    pub fn on_outcome(&mut self, when: Outcome, action: impl FnOnce(ResultCode) + 'a) {
        self.guards.push(Guard {
            when,
            action: Box::new(action),
        });
    }

    /// Number of guards registered and not yet fired
    pub fn pending(&self) -> usize {
        self.guards.len()
    }

    fn finish(&mut self, code: ResultCode) {
        self.current = Some(code);
    }
}

impl Drop for ResultScope<'_> {
    fn drop(&mut self) {
        let Some(code) = self.current else {
            // Body unwound; there is no final result to judge
            if !self.guards.is_empty() {
                log::warn!(
                    "Result scope dropped without a final result, skipping {} guard(s)",
                    self.guards.len()
                );
            }
            return;
        };

        while let Some(guard) = self.guards.pop() {
            if guard.when.matches(code) {
                log::debug!("Firing {:?} guard for {}", guard.when, code);
                (guard.action)(code);
            }
        }
    }
}

/// Run `body` with a fresh [`ResultScope`] and fire its guards on exit
///
/// `body` may return a [`ResultCode`] or any `ResultVal<T>`; its return
/// value is passed through unchanged.
///
/// # Arguments
///
/// * `body` - The function body; guards are registered on the scope it gets
///
/// # Returns
///
/// Whatever `body` returned
pub fn scoped<'a, R, F>(body: F) -> R
where
    R: ToResultCode,
    F: FnOnce(&mut ResultScope<'a>) -> R,
{
    let mut scope = ResultScope::new();
    let result = body(&mut scope);
    scope.finish(result.to_result_code());
    drop(scope);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::result::{
        ErrorModule, ResultError, ResultVal, ResultValExt, RESULT_SUCCESS,
    };
    use crate::{r_throw, r_try, r_unless};
    use std::cell::{Cell, RefCell};

    const BUSY: ResultError = ResultError::new(ErrorModule::Kernel, 122);
    const TIMED_OUT: ResultError = ResultError::new(ErrorModule::Kernel, 117);

    #[test]
    fn test_failure_guard_fires_on_failure_only() {
        let fired = Cell::new(0);

        let run = |fail: bool| -> ResultCode {
            scoped(|scope| {
                scope.on_failure(|_| fired.set(fired.get() + 1));
                r_unless!(!fail, BUSY);
                RESULT_SUCCESS
            })
        };

        assert_eq!(run(false), RESULT_SUCCESS);
        assert_eq!(fired.get(), 0);
        assert_eq!(run(true), BUSY.code());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_success_guard_fires_on_success_only() {
        let fired = Cell::new(0);

        let run = |fail: bool| -> ResultVal<u32> {
            scoped(|scope| {
                scope.on_success(|code| {
                    assert!(code.is_success());
                    fired.set(fired.get() + 1);
                });
                if fail {
                    return Err(BUSY);
                }
                Ok(3)
            })
        };

        assert_eq!(run(true), Err(BUSY));
        assert_eq!(fired.get(), 0);
        assert_eq!(run(false), Ok(3));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_guard_sees_final_code_across_return_points() {
        let seen = RefCell::new(Vec::new());

        let run = |step: u32| -> ResultCode {
            scoped(|scope| {
                scope.on_failure(|code| seen.borrow_mut().push(code));
                if step == 0 {
                    r_throw!(BUSY);
                }
                if step == 1 {
                    return TIMED_OUT.code();
                }
                RESULT_SUCCESS
            })
        };

        let _ = run(0);
        let _ = run(1);
        let _ = run(2);
        assert_eq!(*seen.borrow(), vec![BUSY.code(), TIMED_OUT.code()]);
    }

    #[test]
    fn test_guards_fire_in_reverse_order() {
        let order = RefCell::new(Vec::new());

        let result: ResultVal<()> = scoped(|scope| {
            scope.on_failure(|_| order.borrow_mut().push("first"));
            scope.on_failure(|_| order.borrow_mut().push("second"));
            scope.on_success(|_| order.borrow_mut().push("never"));
            assert_eq!(scope.pending(), 3);
            Err(BUSY)
        });

        assert_eq!(result, Err(BUSY));
        assert_eq!(*order.borrow(), vec!["second", "first"]);
    }

    #[test]
    fn test_nested_scopes_are_independent() {
        let inner_fired = Cell::new(false);
        let outer_fired = Cell::new(false);

        let inner = || -> ResultCode {
            scoped(|scope| {
                scope.on_failure(|_| inner_fired.set(true));
                BUSY.code()
            })
        };

        // Outer recovers from the inner failure and succeeds
        let outer: ResultCode = scoped(|scope| {
            scope.on_failure(|_| outer_fired.set(true));
            let recovered = inner().is_failure();
            assert!(recovered);
            RESULT_SUCCESS
        });

        assert_eq!(outer, RESULT_SUCCESS);
        assert!(inner_fired.get());
        assert!(!outer_fired.get());
    }

    #[test]
    fn test_recursive_activations_keep_their_own_cell() {
        fn countdown(n: u32, events: &RefCell<Vec<(u32, bool)>>) -> ResultVal<()> {
            scoped(|scope| {
                scope.on_success(move |_| events.borrow_mut().push((n, true)));
                scope.on_failure(move |_| events.borrow_mut().push((n, false)));
                if n == 0 {
                    r_throw!(TIMED_OUT);
                }
                // Odd levels swallow the failure below them
                let below = countdown(n - 1, events);
                if n % 2 == 1 {
                    return Ok(());
                }
                r_try!(below);
                Ok(())
            })
        }

        let events = RefCell::new(Vec::new());
        let result = countdown(2, &events);
        assert_eq!(result, Ok(()));
        assert_eq!(*events.borrow(), vec![(0, false), (1, true), (2, true)]);
    }

    #[test]
    fn test_no_guards_fire_when_body_panics() {
        let fired = Cell::new(false);

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _: ResultCode = scoped(|scope| {
                scope.on_failure(|_| fired.set(true));
                scope.on_success(|_| fired.set(true));
                panic!("emulator bug");
            });
        }));

        assert!(outcome.is_err());
        assert!(!fired.get());
    }

    #[test]
    fn test_outcome_matches() {
        assert!(Outcome::Success.matches(RESULT_SUCCESS));
        assert!(!Outcome::Success.matches(BUSY.code()));
        assert!(Outcome::Failure.matches(BUSY.code()));
        assert!(!Outcome::Failure.matches(RESULT_SUCCESS));
    }

    #[test]
    fn test_code_passes_through_scoped() {
        let val: ResultVal<String> = scoped(|_| Ok("kept".to_string()));
        assert_eq!(val.code(), RESULT_SUCCESS);
        assert_eq!(val.unwrap_val(), "kept");
    }
}
