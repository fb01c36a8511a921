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

use super::super::{Instruction, CPU};

impl CPU {
    // === Logical Instructions ===

    /// AND: Bitwise And
    ///
    /// Format: and rd, rs, rt
    pub(crate) fn op_and(&mut self, rs: u8, rt: u8, rd: u8) {
        let result = self.reg(rs) & self.reg(rt);
        self.set_reg(rd, result);
    }

    /// OR: Bitwise Or
    ///
    /// Format: or rd, rs, rt
    pub(crate) fn op_or(&mut self, rs: u8, rt: u8, rd: u8) {
        let result = self.reg(rs) | self.reg(rt);
        self.set_reg(rd, result);
    }

    /// XOR: Bitwise Exclusive Or
    ///
    /// Format: xor rd, rs, rt
    pub(crate) fn op_xor(&mut self, rs: u8, rt: u8, rd: u8) {
        let result = self.reg(rs) ^ self.reg(rt);
        self.set_reg(rd, result);
    }

    /// NOR: Bitwise Not Or
    ///
    /// Format: nor rd, rs, rt
    pub(crate) fn op_nor(&mut self, rs: u8, rt: u8, rd: u8) {
        let result = !(self.reg(rs) | self.reg(rt));
        self.set_reg(rd, result);
    }

    /// ANDI: And Immediate
    ///
    /// The immediate is zero-extended.
    ///
    /// Format: andi rt, rs, imm
    pub(crate) fn op_andi(&mut self, instruction: Instruction) {
        let result = self.reg(instruction.rs()) & instruction.imm() as u32;
        self.set_reg(instruction.rt(), result);
    }

    /// ORI: Or Immediate
    ///
    /// The immediate is zero-extended.
    ///
    /// Format: ori rt, rs, imm
    pub(crate) fn op_ori(&mut self, instruction: Instruction) {
        let result = self.reg(instruction.rs()) | instruction.imm() as u32;
        self.set_reg(instruction.rt(), result);
    }

    /// XORI: Exclusive Or Immediate
    ///
    /// The immediate is zero-extended.
    ///
    /// Format: xori rt, rs, imm
    pub(crate) fn op_xori(&mut self, instruction: Instruction) {
        let result = self.reg(instruction.rs()) ^ instruction.imm() as u32;
        self.set_reg(instruction.rt(), result);
    }

    /// LUI: Load Upper Immediate
    ///
    /// Loads a 16-bit immediate value into the upper 16 bits of a register,
    /// setting the lower 16 bits to 0. Not a memory load, so no load delay.
    ///
    /// Format: lui rt, imm
    /// Operation: rt = imm << 16
    pub(crate) fn op_lui(&mut self, instruction: Instruction) {
        let value = (instruction.imm() as u32) << 16;
        self.set_reg(instruction.rt(), value);
    }
}
