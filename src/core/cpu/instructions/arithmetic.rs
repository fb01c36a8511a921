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

impl CPU {
    // === Arithmetic Instructions ===

    /// ADD: Add (with overflow exception)
    ///
    /// Adds two registers with signed overflow detection.
    /// If overflow occurs, triggers an Overflow exception and the
    /// destination register is left unchanged.
    ///
    /// Format: add rd, rs, rt
    /// Operation: rd = rs + rt
    pub(crate) fn op_add(&mut self, rs: u8, rt: u8, rd: u8) {
        let a = self.reg(rs) as i32;
        let b = self.reg(rt) as i32;

        match a.checked_add(b) {
            Some(result) => self.set_reg(rd, result as u32),
            None => self.exception(ExceptionCause::Overflow),
        }
    }

    /// ADDU: Add Unsigned (no overflow exception)
    ///
    /// Adds two registers without overflow detection.
    /// Overflow wraps around (modulo 2^32).
    ///
    /// Format: addu rd, rs, rt
    /// Operation: rd = rs + rt
    pub(crate) fn op_addu(&mut self, rs: u8, rt: u8, rd: u8) {
        let result = self.reg(rs).wrapping_add(self.reg(rt));
        self.set_reg(rd, result);
    }

    /// ADDI: Add Immediate (with overflow exception)
    ///
    /// Adds a sign-extended immediate value to a register with overflow
    /// detection.
    ///
    /// Format: addi rt, rs, imm
    /// Operation: rt = rs + sign_extend(imm)
    pub(crate) fn op_addi(&mut self, instruction: Instruction) {
        let imm = instruction.imm_se() as i32;
        let a = self.reg(instruction.rs()) as i32;

        match a.checked_add(imm) {
            Some(result) => self.set_reg(instruction.rt(), result as u32),
            None => self.exception(ExceptionCause::Overflow),
        }
    }

    /// ADDIU: Add Immediate Unsigned (no overflow exception)
    ///
    /// Despite the name "unsigned", the immediate is sign-extended; the
    /// instruction simply never traps.
    ///
    /// Format: addiu rt, rs, imm
    /// Operation: rt = rs + sign_extend(imm)
    pub(crate) fn op_addiu(&mut self, instruction: Instruction) {
        let result = self.reg(instruction.rs()).wrapping_add(instruction.imm_se());
        self.set_reg(instruction.rt(), result);
    }

    /// SUB: Subtract (with overflow exception)
    ///
    /// Format: sub rd, rs, rt
    /// Operation: rd = rs - rt
    pub(crate) fn op_sub(&mut self, rs: u8, rt: u8, rd: u8) {
        let a = self.reg(rs) as i32;
        let b = self.reg(rt) as i32;

        match a.checked_sub(b) {
            Some(result) => self.set_reg(rd, result as u32),
            None => self.exception(ExceptionCause::Overflow),
        }
    }

    /// SUBU: Subtract Unsigned (no overflow exception)
    ///
    /// Format: subu rd, rs, rt
    /// Operation: rd = rs - rt
    pub(crate) fn op_subu(&mut self, rs: u8, rt: u8, rd: u8) {
        let result = self.reg(rs).wrapping_sub(self.reg(rt));
        self.set_reg(rd, result);
    }

    /// SLT: Set on Less Than (signed)
    ///
    /// Format: slt rd, rs, rt
    /// Operation: rd = (rs < rt) ? 1 : 0
    pub(crate) fn op_slt(&mut self, rs: u8, rt: u8, rd: u8) {
        let a = self.reg(rs) as i32;
        let b = self.reg(rt) as i32;
        self.set_reg(rd, if a < b { 1 } else { 0 });
    }

    /// SLTU: Set on Less Than Unsigned
    ///
    /// Format: sltu rd, rs, rt
    /// Operation: rd = (rs < rt) ? 1 : 0
    pub(crate) fn op_sltu(&mut self, rs: u8, rt: u8, rd: u8) {
        let result = if self.reg(rs) < self.reg(rt) { 1 } else { 0 };
        self.set_reg(rd, result);
    }

    /// SLTI: Set on Less Than Immediate (signed)
    ///
    /// Format: slti rt, rs, imm
    /// Operation: rt = (rs < sign_extend(imm)) ? 1 : 0
    pub(crate) fn op_slti(&mut self, instruction: Instruction) {
        let imm = instruction.imm_se() as i32;
        let a = self.reg(instruction.rs()) as i32;
        self.set_reg(instruction.rt(), if a < imm { 1 } else { 0 });
    }

    /// SLTIU: Set on Less Than Immediate Unsigned
    ///
    /// The immediate is sign-extended first and the comparison is then
    /// unsigned.
    ///
    /// Format: sltiu rt, rs, imm
    /// Operation: rt = (rs < sign_extend(imm)) ? 1 : 0
    pub(crate) fn op_sltiu(&mut self, instruction: Instruction) {
        let imm = instruction.imm_se();
        let a = self.reg(instruction.rs());
        self.set_reg(instruction.rt(), if a < imm { 1 } else { 0 });
    }
}
