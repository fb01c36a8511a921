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

use super::super::{ExceptionCause, Instruction, CPU};
use crate::core::memory::Bus;

impl CPU {
    // === Load Instructions ===

    /// Effective address for a load or store: base register plus
    /// sign-extended offset.
    #[inline(always)]
    fn vaddr(&self, instruction: Instruction) -> u32 {
        self.reg(instruction.rs()).wrapping_add(instruction.imm_se())
    }

    /// LW: Load Word (32-bit)
    ///
    /// Loads a 32-bit word from memory through the load delay slot.
    /// The address must be 4-byte aligned.
    ///
    /// Format: lw rt, offset(rs)
    /// Operation: rt = memory[rs + sign_extend(offset)]
    pub(crate) fn op_lw(&mut self, instruction: Instruction, bus: &mut Bus) {
        let addr = self.vaddr(instruction);

        if addr & 0x3 != 0 {
            self.exception_at(ExceptionCause::AddressErrorLoad, addr);
            return;
        }

        let value = bus.read32(addr);
        self.set_reg_delayed(instruction.rt(), value);
    }

    /// LH: Load Halfword (16-bit, sign-extended)
    ///
    /// The address must be 2-byte aligned.
    ///
    /// Format: lh rt, offset(rs)
    /// Operation: rt = sign_extend(memory[rs + sign_extend(offset)])
    pub(crate) fn op_lh(&mut self, instruction: Instruction, bus: &mut Bus) {
        let addr = self.vaddr(instruction);

        if addr & 0x1 != 0 {
            self.exception_at(ExceptionCause::AddressErrorLoad, addr);
            return;
        }

        let value = bus.read16(addr) as i16 as i32 as u32;
        self.set_reg_delayed(instruction.rt(), value);
    }

    /// LHU: Load Halfword Unsigned (16-bit, zero-extended)
    ///
    /// The address must be 2-byte aligned.
    ///
    /// Format: lhu rt, offset(rs)
    /// Operation: rt = zero_extend(memory[rs + sign_extend(offset)])
    pub(crate) fn op_lhu(&mut self, instruction: Instruction, bus: &mut Bus) {
        let addr = self.vaddr(instruction);

        if addr & 0x1 != 0 {
            self.exception_at(ExceptionCause::AddressErrorLoad, addr);
            return;
        }

        let value = bus.read16(addr) as u32;
        self.set_reg_delayed(instruction.rt(), value);
    }

    /// LB: Load Byte (8-bit, sign-extended)
    ///
    /// No alignment restrictions.
    ///
    /// Format: lb rt, offset(rs)
    /// Operation: rt = sign_extend(memory[rs + sign_extend(offset)])
    pub(crate) fn op_lb(&mut self, instruction: Instruction, bus: &mut Bus) {
        let addr = self.vaddr(instruction);
        let value = bus.read8(addr) as i8 as i32 as u32;
        self.set_reg_delayed(instruction.rt(), value);
    }

    /// LBU: Load Byte Unsigned (8-bit, zero-extended)
    ///
    /// No alignment restrictions.
    ///
    /// Format: lbu rt, offset(rs)
    /// Operation: rt = zero_extend(memory[rs + sign_extend(offset)])
    pub(crate) fn op_lbu(&mut self, instruction: Instruction, bus: &mut Bus) {
        let addr = self.vaddr(instruction);
        let value = bus.read8(addr) as u32;
        self.set_reg_delayed(instruction.rt(), value);
    }

    /// LWL: Load Word Left
    ///
    /// Merges the most significant bytes of an unaligned word into rt,
    /// reading from the aligned word containing the address. Never traps
    /// on alignment; it exists to handle unaligned words.
    ///
    /// Format: lwl rt, offset(rs)
    pub(crate) fn op_lwl(&mut self, instruction: Instruction, bus: &mut Bus) {
        let addr = self.vaddr(instruction);
        let aligned = bus.read32(addr & !0x3);
        let old = self.pending_or_current(instruction.rt());

        let value = match addr & 0x3 {
            0 => (old & 0x00FF_FFFF) | (aligned << 24),
            1 => (old & 0x0000_FFFF) | (aligned << 16),
            2 => (old & 0x0000_00FF) | (aligned << 8),
            _ => aligned,
        };

        self.set_reg_delayed(instruction.rt(), value);
    }

    /// LWR: Load Word Right
    ///
    /// Companion to LWL: merges the least significant bytes of an unaligned
    /// word into rt.
    ///
    /// Format: lwr rt, offset(rs)
    pub(crate) fn op_lwr(&mut self, instruction: Instruction, bus: &mut Bus) {
        let addr = self.vaddr(instruction);
        let aligned = bus.read32(addr & !0x3);
        let old = self.pending_or_current(instruction.rt());

        let value = match addr & 0x3 {
            0 => aligned,
            1 => (old & 0xFF00_0000) | (aligned >> 8),
            2 => (old & 0xFFFF_0000) | (aligned >> 16),
            _ => (old & 0xFFFF_FF00) | (aligned >> 24),
        };

        self.set_reg_delayed(instruction.rt(), value);
    }

    /// The value of `reg` as seen by LWL/LWR.
    ///
    /// An LWL/LWR pair executes back to back, so the second half must merge
    /// with the value the first half still has in the load delay slot, not
    /// with the stale register file contents.
    fn pending_or_current(&self, reg: u8) -> u32 {
        match self.load_delay {
            Some(delay) if delay.reg == reg => delay.value,
            _ => self.reg(reg),
        }
    }
}
