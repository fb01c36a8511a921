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
    // === Branch Instructions ===

    /// Handle the BCOND group (opcode 0x01)
    ///
    /// This group encodes BLTZ, BGEZ, BLTZAL and BGEZAL, but on the
    /// PlayStation's LR33300 *every* rt value is a valid encoding; the
    /// hardware only inspects two bits:
    /// - bit 4 of rt requests linking, which happens unconditionally,
    ///   whether or not the branch is taken;
    /// - bit 0 of rt flips the sign test: 0 branches when rs is negative,
    ///   1 branches when rs is positive or zero.
    ///
    /// The condition is evaluated by XORing rs with rt shifted into the
    /// sign bit and testing the signed result against zero, which is how
    /// the hardware collapses both tests into one.
    pub(in crate::core::cpu) fn op_bcond(&mut self, instruction: Instruction) {
        let rs = instruction.rs();
        let rt = instruction.rt();

        if rt & 0x10 != 0 {
            // Link before the condition is evaluated; rs may be r31.
            self.set_reg(31, self.next_pc);
        }

        let test = (self.reg(rs) ^ ((rt as u32) << 31)) as i32;
        if test < 0 {
            self.branch((instruction.imm_se() << 2) as i32);
        }
    }

    /// BEQ: Branch on Equal
    ///
    /// Format: beq rs, rt, offset
    /// Operation: if (rs == rt) branch
    pub(in crate::core::cpu) fn op_beq(&mut self, instruction: Instruction) {
        if self.reg(instruction.rs()) == self.reg(instruction.rt()) {
            self.branch((instruction.imm_se() << 2) as i32);
        }
    }

    /// BNE: Branch on Not Equal
    ///
    /// Format: bne rs, rt, offset
    /// Operation: if (rs != rt) branch
    pub(in crate::core::cpu) fn op_bne(&mut self, instruction: Instruction) {
        if self.reg(instruction.rs()) != self.reg(instruction.rt()) {
            self.branch((instruction.imm_se() << 2) as i32);
        }
    }

    /// BLEZ: Branch on Less Than or Equal to Zero
    ///
    /// Format: blez rs, offset
    /// Operation: if (rs <= 0) branch (signed)
    pub(in crate::core::cpu) fn op_blez(&mut self, instruction: Instruction) {
        if (self.reg(instruction.rs()) as i32) <= 0 {
            self.branch((instruction.imm_se() << 2) as i32);
        }
    }

    /// BGTZ: Branch on Greater Than Zero
    ///
    /// Format: bgtz rs, offset
    /// Operation: if (rs > 0) branch (signed)
    pub(in crate::core::cpu) fn op_bgtz(&mut self, instruction: Instruction) {
        if (self.reg(instruction.rs()) as i32) > 0 {
            self.branch((instruction.imm_se() << 2) as i32);
        }
    }

    /// Take a branch by offsetting next_pc
    ///
    /// At this point in a step, pc holds the delay slot address, so the
    /// target is relative to the instruction after the branch, per MIPS
    /// semantics. Only next_pc changes; the delay slot still executes.
    pub(in crate::core::cpu) fn branch(&mut self, offset: i32) {
        self.next_pc = self.pc.wrapping_add(offset as u32);
    }
}
