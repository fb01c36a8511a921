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

//! Coprocessor 0 (System Control) instructions

use super::super::{Instruction, CPU};

impl CPU {
    /// MFC0: Move From Coprocessor 0
    ///
    /// Moves the contents of a COP0 register to a general-purpose register.
    /// Registers without dedicated storage read the shared scratch cell.
    ///
    /// Format: mfc0 rt, rd
    pub(in crate::core::cpu) fn op_mfc0(&mut self, instruction: Instruction) {
        let value = self.cop0.read(instruction.rd());
        self.set_reg(instruction.rt(), value);
    }

    /// MTC0: Move To Coprocessor 0
    ///
    /// Moves the contents of a general-purpose register to a COP0 register.
    /// Writes to registers without dedicated storage land in the scratch
    /// cell.
    ///
    /// Format: mtc0 rt, rd
    pub(in crate::core::cpu) fn op_mtc0(&mut self, instruction: Instruction) {
        let value = self.reg(instruction.rt());
        self.cop0.write(instruction.rd(), value);
    }

    /// RFE: Restore From Exception
    ///
    /// Pops the three-level interrupt-enable/kernel-user stack held in
    /// SR[5:0] by shifting it down one entry, undoing the push performed
    /// on exception entry.
    pub(in crate::core::cpu) fn op_rfe(&mut self) {
        let sr = self.cop0.sr;
        self.cop0.sr = (sr & 0xFFFF_FFF0) | ((sr & 0x3C) >> 2);
    }
}
