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
    // === Jump Instructions ===

    /// J: Jump
    ///
    /// Unconditional jump. The target address combines the upper 4 bits of
    /// the delay slot address with the 26-bit target field shifted left
    /// by 2. Only next_pc is touched, so the delay slot still executes.
    ///
    /// Format: j target
    /// Operation: next_pc = (pc & 0xF0000000) | (target << 2)
    pub(in crate::core::cpu) fn op_j(&mut self, instruction: Instruction) {
        self.next_pc = (self.pc & 0xF000_0000) | (instruction.target() << 2);
    }

    /// JAL: Jump and Link
    ///
    /// Like J, but saves the return address (the instruction after the
    /// delay slot) in r31.
    ///
    /// Format: jal target
    /// Operation: r31 = pc + 8; next_pc = (pc & 0xF0000000) | (target << 2)
    pub(in crate::core::cpu) fn op_jal(&mut self, instruction: Instruction) {
        // next_pc already points past the delay slot.
        self.set_reg(31, self.next_pc);
        self.next_pc = (self.pc & 0xF000_0000) | (instruction.target() << 2);
    }

    /// JR: Jump Register
    ///
    /// Format: jr rs
    /// Operation: next_pc = rs
    pub(in crate::core::cpu) fn op_jr(&mut self, rs: u8) {
        self.next_pc = self.reg(rs);
    }

    /// JALR: Jump and Link Register
    ///
    /// The return address lands in rd rather than being fixed to r31.
    ///
    /// Format: jalr rd, rs
    /// Operation: rd = pc + 8; next_pc = rs
    pub(in crate::core::cpu) fn op_jalr(&mut self, rs: u8, rd: u8) {
        self.set_reg(rd, self.next_pc);
        self.next_pc = self.reg(rs);
    }
}
