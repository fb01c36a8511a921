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

use super::super::CPU;

impl CPU {
    // === Shift Instructions ===

    /// SLL: Shift Left Logical
    ///
    /// Note: SLL with all fields zero is the canonical NOP encoding.
    ///
    /// Format: sll rd, rt, shamt
    /// Operation: rd = rt << shamt
    pub(crate) fn op_sll(&mut self, rt: u8, rd: u8, shamt: u8) {
        let value = self.reg(rt) << shamt;
        self.set_reg(rd, value);
    }

    /// SRL: Shift Right Logical
    ///
    /// Format: srl rd, rt, shamt
    /// Operation: rd = rt >> shamt (zero fill)
    pub(crate) fn op_srl(&mut self, rt: u8, rd: u8, shamt: u8) {
        let value = self.reg(rt) >> shamt;
        self.set_reg(rd, value);
    }

    /// SRA: Shift Right Arithmetic
    ///
    /// Format: sra rd, rt, shamt
    /// Operation: rd = rt >> shamt (sign fill)
    pub(crate) fn op_sra(&mut self, rt: u8, rd: u8, shamt: u8) {
        let value = (self.reg(rt) as i32) >> shamt;
        self.set_reg(rd, value as u32);
    }

    /// SLLV: Shift Left Logical Variable
    ///
    /// Only the low five bits of rs are used as the shift amount.
    ///
    /// Format: sllv rd, rt, rs
    /// Operation: rd = rt << (rs & 31)
    pub(crate) fn op_sllv(&mut self, rs: u8, rt: u8, rd: u8) {
        let value = self.reg(rt) << (self.reg(rs) & 0x1F);
        self.set_reg(rd, value);
    }

    /// SRLV: Shift Right Logical Variable
    ///
    /// Format: srlv rd, rt, rs
    /// Operation: rd = rt >> (rs & 31) (zero fill)
    pub(crate) fn op_srlv(&mut self, rs: u8, rt: u8, rd: u8) {
        let value = self.reg(rt) >> (self.reg(rs) & 0x1F);
        self.set_reg(rd, value);
    }

    /// SRAV: Shift Right Arithmetic Variable
    ///
    /// Format: srav rd, rt, rs
    /// Operation: rd = rt >> (rs & 31) (sign fill)
    pub(crate) fn op_srav(&mut self, rs: u8, rt: u8, rd: u8) {
        let value = (self.reg(rt) as i32) >> (self.reg(rs) & 0x1F);
        self.set_reg(rd, value as u32);
    }
}
