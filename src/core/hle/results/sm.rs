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

//! Service manager (sm) results

crate::define_results! {
    SM => {
        OUT_OF_PROCESSES: 1,
        INVALID_CLIENT: 2,
        OUT_OF_SESSIONS: 3,
        ALREADY_REGISTERED: 4,
        OUT_OF_SERVICES: 5,
        INVALID_SERVICE_NAME: 6,
        NOT_REGISTERED: 7,
        NOT_ALLOWED: 8,
        TOO_LARGE_ACCESS_CONTROL: 9,
    }
}
