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

//! Filesystem results
//!
//! The filesystem module groups most of its failures into families, so
//! callers usually test membership in a range rather than an exact code.

crate::define_results! {
    FS => {
        PATH_NOT_FOUND: 1,
        PATH_ALREADY_EXISTS: 2,
        UNSUPPORTED_SDK_VERSION: 50,
        PARTITION_NOT_FOUND: 1001,
        TARGET_NOT_FOUND: 1002,
        PORT_SD_CARD_NO_DEVICE: 2001,
        NOT_IMPLEMENTED: 3001,
        UNSUPPORTED_VERSION: 3002,
        OUT_OF_RANGE: 3005,
        TOO_LONG_PATH: 6003,
        INVALID_CHARACTER: 6004,
        INVALID_OFFSET: 6061,
        INVALID_SIZE: 6062,
        NULLPTR_ARGUMENT: 6063,
        INVALID_OPEN_MODE: 6072,
    }
    ranges {
        PRECONDITION_VIOLATION: 6000..=6499,
        INVALID_ARGUMENT: 6001..=6199,
        INVALID_PATH: 6002..=6029,
        /// Any integrity or format failure in stored data
        DATA_CORRUPTED: 4000..=4999,
        UNSUPPORTED_OPERATION: 6300..=6399,
    }
}
