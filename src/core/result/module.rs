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

//! Error module registry
//!
//! Every Horizon OS result code names the subsystem that raised it. The ids
//! below are a fixed ABI contract with guest software and come from the public
//! error code documentation (switchbrew "Error codes" page). They are sparse,
//! and they must never be renumbered.
//!
//! ## References
//!
//! - [switchbrew: Error codes](https://switchbrew.org/wiki/Error_codes)

use std::fmt;

macro_rules! error_modules {
    ($($name:ident = $value:literal,)*) => {
        /// Identifies the module which caused an error
        ///
        /// Error codes are propagated through call chains, so the module of a
        /// code does not always match the module whose API was called.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u32)]
        #[allow(clippy::upper_case_acronyms)]
        pub enum ErrorModule {
            $($name = $value,)*
        }

        impl ErrorModule {
            /// Every known module, in ascending id order
            pub const ALL: &'static [ErrorModule] = &[$(ErrorModule::$name,)*];

            /// Look up a module by its numeric id
            ///
            /// Returns `None` for ids that are not in the table.
            pub const fn from_raw(raw: u32) -> Option<Self> {
                match raw {
                    $($value => Some(ErrorModule::$name),)*
                    _ => None,
                }
            }

            /// Symbolic name of the module
            pub const fn name(self) -> &'static str {
                match self {
                    $(ErrorModule::$name => stringify!($name),)*
                }
            }
        }
    };
}

error_modules! {
    Common = 0,
    Kernel = 1,
    FS = 2,
    OS = 3,
    HTCS = 4,
    NCM = 5,
    DD = 6,
    LR = 8,
    Loader = 9,
    CMIF = 10,
    HIPC = 11,
    PM = 15,
    NS = 16,
    HTC = 18,
    NCMContent = 20,
    SM = 21,
    RO = 22,
    SDMMC = 24,
    OVLN = 25,
    SPL = 26,
    ETHC = 100,
    I2C = 101,
    GPIO = 102,
    UART = 103,
    Settings = 105,
    WLAN = 107,
    XCD = 108,
    NIFM = 110,
    Hwopus = 111,
    Bluetooth = 113,
    VI = 114,
    NFP = 115,
    Time = 116,
    FGM = 117,
    OE = 118,
    PCIe = 120,
    Friends = 121,
    BCAT = 122,
    SSLSrv = 123,
    Account = 124,
    News = 125,
    Mii = 126,
    NFC = 127,
    AM = 128,
    PlayReport = 129,
    AHID = 130,
    Qlaunch = 132,
    PCV = 133,
    OMM = 134,
    BPC = 135,
    PSM = 136,
    NIM = 137,
    PSC = 138,
    TC = 139,
    USB = 140,
    NSD = 141,
    PCTL = 142,
    BTM = 143,
    ETicket = 145,
    NGC = 146,
    ERPT = 147,
    APM = 148,
    Profiler = 150,
    ErrorUpload = 151,
    Audio = 153,
    NPNS = 154,
    NPNSHTTPSTREAM = 155,
    ARP = 157,
    SWKBD = 158,
    BOOT = 159,
    NFCMifare = 161,
    UserlandAssert = 162,
    Fatal = 163,
    NIMShop = 164,
    SPSM = 165,
    BGTC = 167,
    UserlandCrash = 168,
    SREPO = 180,
    Dauth = 181,
    HID = 202,
    LDN = 203,
    Irsensor = 205,
    Capture = 206,
    Manu = 208,
    ATK = 209,
    GRC = 212,
    Migration = 216,
    MigrationLdcServ = 217,
    GeneralWebApplet = 800,
    WifiWebAuthApplet = 809,
    WhitelistedApplet = 810,
    ShopN = 811,
}

impl ErrorModule {
    /// Numeric module id
    #[inline(always)]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Look up a module by name (case-insensitive) or by decimal id
    pub fn parse(s: &str) -> Option<Self> {
        if let Ok(id) = s.parse::<u32>() {
            return Self::from_raw(id);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|module| module.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ErrorModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abi_ids_are_stable() {
        assert_eq!(ErrorModule::Common.raw(), 0);
        assert_eq!(ErrorModule::Kernel.raw(), 1);
        assert_eq!(ErrorModule::FS.raw(), 2);
        assert_eq!(ErrorModule::CMIF.raw(), 10);
        assert_eq!(ErrorModule::SM.raw(), 21);
        assert_eq!(ErrorModule::HID.raw(), 202);
        assert_eq!(ErrorModule::ShopN.raw(), 811);
    }

    #[test]
    fn test_from_raw_roundtrips_table() {
        for &module in ErrorModule::ALL {
            assert_eq!(ErrorModule::from_raw(module.raw()), Some(module));
        }
    }

    #[test]
    fn test_from_raw_rejects_gaps() {
        assert_eq!(ErrorModule::from_raw(7), None);
        assert_eq!(ErrorModule::from_raw(12), None);
        assert_eq!(ErrorModule::from_raw(511), None);
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in ErrorModule::ALL.windows(2) {
            assert!(pair[0].raw() < pair[1].raw(), "{} >= {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_parse_by_name_and_id() {
        assert_eq!(ErrorModule::parse("fs"), Some(ErrorModule::FS));
        assert_eq!(ErrorModule::parse("Kernel"), Some(ErrorModule::Kernel));
        assert_eq!(ErrorModule::parse("21"), Some(ErrorModule::SM));
        assert_eq!(ErrorModule::parse("nope"), None);
        assert_eq!(ErrorModule::parse("7"), None);
    }
}
