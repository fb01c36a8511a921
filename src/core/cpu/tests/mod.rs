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

//! CPU test modules
//!
//! Tests are organized into the following categories:
//! - `basic`: CPU initialization, reset, register access, PC handling
//! - `decode`: Instruction field decoding
//! - `load_delay`: Load delay slot behavior
//! - `branch`: Branches, jumps, the BCOND group and delay slots
//! - `exceptions`: Traps, the COP0 stack, RFE
//! - `instructions`: ALU, shift and multiply/divide execution
//! - `memory_ops`: Loads and stores, including the unaligned word group

use super::*;
use crate::core::memory::Bus;





#[cfg(test)]
mod instructions;


#[cfg(test)]
mod memory_ops;

/// Default RAM address test programs are loaded at
const PROGRAM_BASE: u32 = 0x8000_0100;

/// Load a program into RAM at `PROGRAM_BASE` and point the CPU at it
fn setup_program(program: &[u32]) -> (CPU, Bus) {
    setup_program_at(PROGRAM_BASE, program)
}

/// Load a program into RAM at `base` and point the CPU at it
fn setup_program_at(base: u32, program: &[u32]) -> (CPU, Bus) {
    let mut cpu = CPU::new();
    let mut bus = Bus::new();

    for (i, &word) in program.iter().enumerate() {
        bus.write32(base + (i as u32) * 4, word);
    }

    cpu.set_pc(&bus, base);
    (cpu, bus)
}
