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

//! Supervisor call dispatch
//!
//! This is where HLE results cross back into the guest. A guest `svc`
//! instruction is routed to a host handler; the handler's [`ResultCode`] is
//! written, uninterpreted, into the guest's first general-purpose register
//! (zero-extended, exactly as the console kernel does).
//!
//! ## Register convention
//!
//! ```text
//! X0      | result word on return (W0, upper half cleared)
//! X1-X7   | handler-specific arguments and outputs
//! ```

use crate::core::error::{EmulatorError, Result};
use crate::core::hle::results::kernel;
use crate::core::result::ResultCode;

/// Number of supervisor call slots
pub const SVC_COUNT: usize = 0x80;

/// Guest general-purpose register state seen by a supervisor call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadContext {
    /// General purpose registers (X0-X30)
    regs: [u64; 31],

    /// Program counter of the `svc` instruction
    pub pc: u64,
}

impl ThreadContext {
    /// Create a context with all registers cleared
    pub fn new() -> Self {
        Self::default()
    }

    /// Read general purpose register `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is not 0-30.
    #[inline(always)]
    pub fn reg(&self, index: usize) -> u64 {
        self.regs[index]
    }

    /// Write general purpose register `index`
    #[inline(always)]
    pub fn set_reg(&mut self, index: usize, value: u64) {
        self.regs[index] = value;
    }

    /// Store a result word in W0 (upper half of X0 cleared)
    #[inline(always)]
    pub fn set_result(&mut self, code: ResultCode) {
        self.regs[0] = u64::from(code.raw());
    }

    /// Result word currently held in W0
    #[inline(always)]
    pub fn result(&self) -> ResultCode {
        ResultCode::from_raw(self.regs[0] as u32)
    }
}

/// Host handler for one supervisor call
pub type SvcHandler<S> = fn(&mut S, &mut ThreadContext) -> ResultCode;

struct SvcEntry<S> {
    name: &'static str,
    handler: SvcHandler<S>,
}

/// Supervisor call table
///
/// `S` is the emulated kernel state handed to every handler.
///
/// # Example
///
/// ```
/// use hzresult::core::hle::results::kernel;
/// use hzresult::core::result::{ResultCode, RESULT_SUCCESS};
/// use hzresult::core::svc::{SvcTable, ThreadContext};
/// use hzresult::r_unless;
///
/// fn sleep_thread(_: &mut (), ctx: &mut ThreadContext) -> ResultCode {
///     r_unless!((ctx.reg(0) as i64) >= -2, kernel::INVALID_ARGUMENT);
///     RESULT_SUCCESS
/// }
///
/// let mut table: SvcTable<()> = SvcTable::new();
/// table.register(0x0B, "SleepThread", sleep_thread)?;
///
/// let mut ctx = ThreadContext::new();
/// ctx.set_reg(0, (-5i64) as u64);
/// table.dispatch(&mut (), 0x0B, &mut ctx);
/// assert_eq!(ctx.reg(0), 0x1C01);
/// # Ok::<(), hzresult::core::error::EmulatorError>(())
/// ```
pub struct SvcTable<S> {
    entries: Vec<Option<SvcEntry<S>>>,
}

impl<S> SvcTable<S> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: (0..SVC_COUNT).map(|_| None).collect(),
        }
    }

    /// Register `handler` for supervisor call `id`
    ///
    /// # Returns
    ///
    /// - `Ok(())` on success
    /// - `Err(EmulatorError::SvcRegistration)` if `id` is out of range or
    ///   already taken
    pub fn register(&mut self, id: u32, name: &'static str, handler: SvcHandler<S>) -> Result<()> {
        let slot = self
            .entries
            .get_mut(id as usize)
            .ok_or(EmulatorError::SvcRegistration {
                id,
                reason: "id out of range",
            })?;
        if slot.is_some() {
            return Err(EmulatorError::SvcRegistration {
                id,
                reason: "id already registered",
            });
        }
        *slot = Some(SvcEntry { name, handler });
        log::debug!("SVC 0x{:02X} registered as {}", id, name);
        Ok(())
    }

    /// Name registered for `id`
    pub fn name(&self, id: u32) -> Option<&'static str> {
        self.entry(id).map(|entry| entry.name)
    }

    /// Run supervisor call `id` and write its result word into `ctx`
    ///
    /// Unregistered ids report `kernel::NOT_IMPLEMENTED` to the guest.
    ///
    /// # Returns
    ///
    /// The result word written to W0
    pub fn dispatch(&self, state: &mut S, id: u32, ctx: &mut ThreadContext) -> ResultCode {
        let code = match self.entry(id) {
            Some(entry) => {
                let code = (entry.handler)(state, ctx);
                if code.is_failure() {
                    log::debug!("SVC {} returned {} ({:?})", entry.name, code, code);
                }
                code
            }
            None => {
                log::warn!("Unimplemented SVC 0x{:02X} at PC=0x{:016X}", id, ctx.pc);
                kernel::NOT_IMPLEMENTED.code()
            }
        };
        ctx.set_result(code);
        code
    }

    fn entry(&self, id: u32) -> Option<&SvcEntry<S>> {
        self.entries.get(id as usize).and_then(Option::as_ref)
    }
}

impl<S> Default for SvcTable<S> {
    fn default() -> Self {
        Self::new()
    }
}
