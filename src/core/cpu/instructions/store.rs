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

use super::super::cop0::COP0;
use super::super::{ExceptionCause, Instruction, CPU};
use crate::core::memory::Bus;

impl CPU {
    // === Store Instructions ===

    /// SW: Store Word (32-bit)
    ///
    /// The address must be 4-byte aligned. While SR.IsC is set the data
    /// cache is isolated and the store targets the cache instead of memory;
    /// this core models that by dropping the write, which is what the BIOS
    /// cache-flush routine relies on.
    ///
    /// Format: sw rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt
    pub(crate) fn op_sw(&mut self, instruction: Instruction, bus: &mut Bus) {
        let addr = self
            .reg(instruction.rs())
            .wrapping_add(instruction.imm_se());

        if addr & 0x3 != 0 {
            self.exception(ExceptionCause::AddressErrorStore);
            return;
        }

        if self.cop0.sr & COP0::SR_ISC != 0 {
            log::trace!("SW at 0x{:08X} dropped while cache is isolated", addr);
            return;
        }

        bus.write32(addr, self.reg(instruction.rt()));
    }

    /// SH: Store Halfword (16-bit)
    ///
    /// Stores the lower 16 bits of rt. The address must be 2-byte aligned.
    ///
    /// Format: sh rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt[15:0]
    pub(crate) fn op_sh(&mut self, instruction: Instruction, bus: &mut Bus) {
        let addr = self
            .reg(instruction.rs())
            .wrapping_add(instruction.imm_se());

        if addr & 0x1 != 0 {
            self.exception(ExceptionCause::AddressErrorStore);
            return;
        }

        bus.write16(addr, self.reg(instruction.rt()) as u16);
    }

    /// SB: Store Byte (8-bit)
    ///
    /// Stores the lower 8 bits of rt. No alignment restrictions.
    ///
    /// Format: sb rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt[7:0]
    pub(crate) fn op_sb(&mut self, instruction: Instruction, bus: &mut Bus) {
        let addr = self
            .reg(instruction.rs())
            .wrapping_add(instruction.imm_se());

        bus.write8(addr, self.reg(instruction.rt()) as u8);
    }

    /// SWL: Store Word Left
    ///
    /// Writes the most significant bytes of rt into the aligned word
    /// containing the unaligned address, preserving the rest of that word.
    /// Never traps on alignment.
    ///
    /// Format: swl rt, offset(rs)
    pub(crate) fn op_swl(&mut self, instruction: Instruction, bus: &mut Bus) {
        let addr = self
            .reg(instruction.rs())
            .wrapping_add(instruction.imm_se());
        let aligned_addr = addr & !0x3;

        let mem = bus.read32(aligned_addr);
        let rt = self.reg(instruction.rt());

        let value = match addr & 0x3 {
            0 => (mem & 0xFFFF_FF00) | (rt >> 24),
            1 => (mem & 0xFFFF_0000) | (rt >> 16),
            2 => (mem & 0xFF00_0000) | (rt >> 8),
            _ => rt,
        };

        bus.write32(aligned_addr, value);
    }

    /// SWR: Store Word Right
    ///
    /// Companion to SWL: writes the least significant bytes of rt into the
    /// aligned word containing the unaligned address.
    ///
    /// Format: swr rt, offset(rs)
    pub(crate) fn op_swr(&mut self, instruction: Instruction, bus: &mut Bus) {
        let addr = self
            .reg(instruction.rs())
            .wrapping_add(instruction.imm_se());
        let aligned_addr = addr & !0x3;

        let mem = bus.read32(aligned_addr);
        let rt = self.reg(instruction.rt());

        let value = match addr & 0x3 {
            0 => rt,
            1 => (mem & 0x0000_00FF) | (rt << 8),
            2 => (mem & 0x0000_FFFF) | (rt << 16),
            _ => (mem & 0x00FF_FFFF) | (rt << 24),
        };

        bus.write32(aligned_addr, value);
    }
}
