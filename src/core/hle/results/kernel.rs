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

//! Kernel (svc) results
//!
//! Returned by supervisor calls. Descriptions follow the kernel's own
//! numbering, so most svc failures read as `2001-01xx`.

crate::define_results! {
    Kernel => {
        OUT_OF_SESSIONS: 7,
        INVALID_ARGUMENT: 14,
        NOT_IMPLEMENTED: 33,
        NO_SYNCHRONIZATION_OBJECT: 57,
        TERMINATION_REQUESTED: 59,
        INVALID_SIZE: 101,
        INVALID_ADDRESS: 102,
        OUT_OF_RESOURCE: 103,
        OUT_OF_MEMORY: 104,
        OUT_OF_HANDLES: 105,
        INVALID_CURRENT_MEMORY: 106,
        INVALID_NEW_MEMORY_PERMISSION: 108,
        INVALID_MEMORY_REGION: 110,
        INVALID_PRIORITY: 112,
        INVALID_CORE_ID: 113,
        INVALID_HANDLE: 114,
        INVALID_POINTER: 115,
        INVALID_COMBINATION: 116,
        TIMED_OUT: 117,
        CANCELLED: 118,
        OUT_OF_RANGE: 119,
        INVALID_ENUM_VALUE: 120,
        NOT_FOUND: 121,
        BUSY: 122,
        SESSION_CLOSED: 123,
        INVALID_STATE: 125,
        RESERVED_USED: 126,
        PORT_CLOSED: 131,
        LIMIT_REACHED: 132,
        INVALID_ID: 519,
    }
}
