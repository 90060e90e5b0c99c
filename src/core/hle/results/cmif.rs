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

//! IPC command interface (CMIF) results

crate::define_results! {
    CMIF => {
        INVALID_HEADER_SIZE: 202,
        INVALID_IN_HEADER: 211,
        UNKNOWN_COMMAND_ID: 221,
        INVALID_OUT_RAW_SIZE: 232,
        INVALID_NUM_IN_OBJECTS: 235,
        INVALID_NUM_OUT_OBJECTS: 236,
        INVALID_IN_OBJECT: 239,
        TARGET_NOT_FOUND: 261,
        OUT_OF_DOMAIN_ENTRIES: 301,
    }
}
