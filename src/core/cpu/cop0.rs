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

/// Coprocessor 0 (System Control)
///
/// COP0 is the system control unit responsible for exception handling.
/// Only four of its 32 register indices carry architectural state in this
/// core: BadVaddr (8), SR (12), Cause (13), and EPC (14). Every other index
/// reads and writes a single shared scratch cell so stray MFC0/MTC0
/// instructions stay harmless.
pub(super) struct COP0 {
    /// Bad Virtual Address (register 8)
    pub(super) bad_vaddr: u32,
    /// Status Register (register 12)
    pub(super) sr: u32,
    /// Cause Register (register 13)
    pub(super) cause: u32,
    /// Exception PC (register 14)
    pub(super) epc: u32,
    /// Backing cell for every index without dedicated storage
    scratch: u32,
}

impl COP0 {
    /// Bad Virtual Address
    pub const BADA: u8 = 8;
    /// Status Register
    pub const SR: u8 = 12;
    /// Cause Register
    pub const CAUSE: u8 = 13;
    /// Exception PC
    pub const EPC: u8 = 14;

    /// SR bit 16: isolate cache. While set, store-word instructions poke
    /// the (unmodeled) data cache instead of memory and are dropped.
    pub const SR_ISC: u32 = 1 << 16;

    /// Create a new COP0 instance with all registers zeroed
    pub(super) fn new() -> Self {
        Self {
            bad_vaddr: 0,
            sr: 0,
            cause: 0,
            epc: 0,
            scratch: 0,
        }
    }

    /// Reset COP0 registers to initial state
    pub(super) fn reset(&mut self) {
        *self = Self::new();
    }

    /// Read a COP0 register by index
    pub(super) fn read(&self, index: u8) -> u32 {
        match index {
            Self::BADA => self.bad_vaddr,
            Self::SR => self.sr,
            Self::CAUSE => self.cause,
            Self::EPC => self.epc,
            _ => self.scratch,
        }
    }

    /// Write a COP0 register by index
    pub(super) fn write(&mut self, index: u8, value: u32) {
        match index {
            Self::BADA => self.bad_vaddr = value,
            Self::SR => self.sr = value,
            Self::CAUSE => self.cause = value,
            Self::EPC => self.epc = value,
            _ => self.scratch = value,
        }
    }
}

/// Exception cause codes for the MIPS R3000A
///
/// These correspond to the exception codes stored in the CAUSE register
/// when a CPU exception occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ExceptionCause {
    /// Address error on load (or instruction fetch)
    AddressErrorLoad = 4,
    /// Address error on store
    AddressErrorStore = 5,
    /// Syscall instruction executed
    Syscall = 8,
    /// Breakpoint instruction executed
    Breakpoint = 9,
    /// Arithmetic overflow
    Overflow = 12,
}
