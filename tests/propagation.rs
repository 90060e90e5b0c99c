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

//! End-to-end propagation through nested HLE calls

use hzresult::core::hle::results::{fs, kernel};
use hzresult::core::result::{
    scoped, ErrorModule, ResultCode, ResultError, ResultVal, ResultValExt, RESULT_SUCCESS,
};
use hzresult::core::svc::{SvcTable, ThreadContext};
use hzresult::{r_try, r_unless};
use std::cell::{Cell, RefCell};

const STORAGE_FAILURE: ResultError = ResultError::new(ErrorModule::FS, 42);

/// Innermost call: fails if any sector is bad
fn read_sectors(sectors: &[u32]) -> ResultCode {
    r_unless!(!sectors.contains(&0xBAD), STORAGE_FAILURE);
    RESULT_SUCCESS
}

/// Middle call: forwards failures untouched
fn read_file(sectors: &[u32]) -> ResultVal<usize> {
    r_try!(read_sectors(sectors));
    Ok(sectors.len() * 0x200)
}

/// Outer call: owns a cache entry that must be released on failure
fn load(
    sectors: &[u32],
    cache: &RefCell<Vec<&'static str>>,
    seen: &Cell<Option<ResultCode>>,
) -> ResultCode {
    scoped(|scope| {
        cache.borrow_mut().push("entry");
        scope.on_failure(|code| {
            seen.set(Some(code));
            cache.borrow_mut().pop();
        });
        let size = r_try!(read_file(sectors));
        r_unless!(size > 0, fs::OUT_OF_RANGE);
        RESULT_SUCCESS
    })
}

#[test]
fn test_failure_reaches_outer_guard_unchanged() {
    let cache = RefCell::new(Vec::new());
    let seen = Cell::new(None);

    let code = load(&[1, 0xBAD, 3], &cache, &seen);

    assert_eq!(code, STORAGE_FAILURE.code());
    assert_eq!(seen.get(), Some(STORAGE_FAILURE.code()));
    assert!(cache.borrow().is_empty());
    assert_eq!(code.raw(), (42 << 9) | 2);
}

#[test]
fn test_success_keeps_outer_state() {
    let cache = RefCell::new(Vec::new());
    let seen = Cell::new(None);

    assert_eq!(load(&[1, 2], &cache, &seen), RESULT_SUCCESS);
    assert_eq!(seen.get(), None);
    assert_eq!(*cache.borrow(), vec!["entry"]);
}

#[test]
fn test_outer_failure_from_own_check() {
    let cache = RefCell::new(Vec::new());
    let seen = Cell::new(None);

    assert_eq!(load(&[], &cache, &seen), fs::OUT_OF_RANGE.code());
    assert_eq!(seen.get(), Some(fs::OUT_OF_RANGE.code()));
}

#[test]
fn test_middle_layer_value_access() {
    assert_eq!(read_file(&[1, 2, 3]).unwrap_val(), 0x600);
    assert_eq!(read_file(&[0xBAD]).code(), STORAGE_FAILURE.code());
}

#[test]
fn test_guest_receives_packed_word() {
    fn svc_load(_: &mut (), ctx: &mut ThreadContext) -> ResultCode {
        let cache = RefCell::new(Vec::new());
        let seen = Cell::new(None);
        let sectors = [ctx.reg(1) as u32];
        load(&sectors, &cache, &seen)
    }

    let mut table: SvcTable<()> = SvcTable::new();
    table.register(0x40, "Load", svc_load).unwrap();

    let mut ctx = ThreadContext::new();
    ctx.set_reg(1, 0xBAD);
    table.dispatch(&mut (), 0x40, &mut ctx);
    assert_eq!(ctx.reg(0), u64::from((42u32 << 9) | 2));

    ctx.set_reg(1, 7);
    table.dispatch(&mut (), 0x40, &mut ctx);
    assert_eq!(ctx.reg(0), 0);

    table.dispatch(&mut (), 0x41, &mut ctx);
    assert_eq!(ctx.result(), kernel::NOT_IMPLEMENTED.code());
}

#[test]
fn test_threads_use_independent_scopes() {
    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            std::thread::spawn(move || {
                let cache = RefCell::new(Vec::new());
                let seen = Cell::new(None);
                let sectors = if i % 2 == 0 { vec![1] } else { vec![0xBAD] };
                let code = load(&sectors, &cache, &seen);
                (i, code, seen.get())
            })
        })
        .collect();

    for handle in handles {
        let (i, code, seen) = handle.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(code, RESULT_SUCCESS);
            assert_eq!(seen, None);
        } else {
            assert_eq!(code, STORAGE_FAILURE.code());
            assert_eq!(seen, Some(STORAGE_FAILURE.code()));
        }
    }
}
