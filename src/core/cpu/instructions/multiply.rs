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
    // === Multiply/Divide Instructions ===

    /// MULT: Multiply (signed)
    ///
    /// Multiplies two 32-bit signed integers and stores the 64-bit result
    /// in the HI and LO registers.
    ///
    /// Format: mult rs, rt
    /// Operation: (HI, LO) = rs * rt (signed 64-bit result)
    pub(crate) fn op_mult(&mut self, rs: u8, rt: u8) {
        let a = self.reg(rs) as i32 as i64;
        let b = self.reg(rt) as i32 as i64;
        let result = a * b;

        self.lo = result as u32;
        self.hi = (result >> 32) as u32;
    }

    /// MULTU: Multiply Unsigned
    ///
    /// Format: multu rs, rt
    /// Operation: (HI, LO) = rs * rt (unsigned 64-bit result)
    pub(crate) fn op_multu(&mut self, rs: u8, rt: u8) {
        let a = self.reg(rs) as u64;
        let b = self.reg(rt) as u64;
        let result = a * b;

        self.lo = result as u32;
        self.hi = (result >> 32) as u32;
    }

    /// DIV: Divide (signed)
    ///
    /// Quotient in LO, remainder in HI. Division never traps; the two
    /// degenerate cases produce the fixed results the hardware does.
    ///
    /// Format: div rs, rt
    /// Operation: LO = rs / rt, HI = rs % rt
    ///
    /// # Special Cases
    ///
    /// * Division by zero: LO = 1 for a negative dividend, 0xFFFFFFFF
    ///   otherwise; HI = dividend
    /// * 0x80000000 / -1: LO = 0x80000000, HI = 0
    pub(crate) fn op_div(&mut self, rs: u8, rt: u8) {
        let numerator = self.reg(rs) as i32;
        let denominator = self.reg(rt) as i32;

        if denominator == 0 {
            self.lo = if numerator >= 0 { 0xFFFF_FFFF } else { 1 };
            self.hi = numerator as u32;
        } else if numerator as u32 == 0x8000_0000 && denominator == -1 {
            // i32::MIN / -1 does not fit in 32 bits.
            self.lo = 0x8000_0000;
            self.hi = 0;
        } else {
            self.lo = (numerator / denominator) as u32;
            self.hi = (numerator % denominator) as u32;
        }
    }

    /// DIVU: Divide Unsigned
    ///
    /// Format: divu rs, rt
    /// Operation: LO = rs / rt, HI = rs % rt
    ///
    /// # Special Cases
    ///
    /// * Division by zero: LO = 0xFFFFFFFF, HI = dividend
    pub(crate) fn op_divu(&mut self, rs: u8, rt: u8) {
        let numerator = self.reg(rs);
        let denominator = self.reg(rt);

        if denominator == 0 {
            self.lo = 0xFFFF_FFFF;
            self.hi = numerator;
        } else {
            self.lo = numerator / denominator;
            self.hi = numerator % denominator;
        }
    }

    /// MFHI: Move From HI
    ///
    /// Format: mfhi rd
    /// Operation: rd = HI
    pub(crate) fn op_mfhi(&mut self, rd: u8) {
        self.set_reg(rd, self.hi);
    }

    /// MFLO: Move From LO
    ///
    /// Format: mflo rd
    /// Operation: rd = LO
    pub(crate) fn op_mflo(&mut self, rd: u8) {
        self.set_reg(rd, self.lo);
    }

    /// MTHI: Move To HI
    ///
    /// Format: mthi rs
    /// Operation: HI = rs
    pub(crate) fn op_mthi(&mut self, rs: u8) {
        self.hi = self.reg(rs);
    }

    /// MTLO: Move To LO
    ///
    /// Format: mtlo rs
    /// Operation: LO = rs
    pub(crate) fn op_mtlo(&mut self, rs: u8) {
        self.lo = self.reg(rs);
    }
}
