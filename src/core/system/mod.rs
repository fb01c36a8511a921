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

//! System integration module
//!
//! Ties the CPU and the bus together, drives the step loop, and carries
//! the two pieces of host glue that live just outside the interpreter:
//! PS-X EXE injection once the BIOS shell is reached, and forwarding of
//! BIOS TTY output to stdout.

#[cfg(test)]
mod tests;

use super::cpu::CPU;
use super::error::Result;
use super::loader::PSXExecutable;
use super::memory::Bus;
use std::io::{self, Write};

/// PlayStation system
///
/// Integrates the hardware components and manages the emulation loop.
///
/// # Example
/// ```no_run
/// use ember_core::core::system::System;
///
/// let mut system = System::new();
/// system.load_bios("SCPH1001.BIN").unwrap();
/// system.reset();
/// system.run(1000);
/// ```
pub struct System {
    /// CPU instance
    cpu: CPU,
    /// Memory bus (owns RAM, scratchpad, BIOS and the GPU)
    bus: Bus,
    /// Executable parked for injection once the BIOS shell is reached
    exe: Option<PSXExecutable>,
    /// Total cycles executed
    cycles: u64,
}

impl System {
    /// PC value at which the BIOS has finished initializing and is about
    /// to enter the shell; a parked executable is injected here
    const SHELL_READY_PC: u32 = 0x8003_0000;

    /// BIOS A-function dispatch entry point
    const BIOS_A_DISPATCH: u32 = 0x0000_00A0;

    /// BIOS B-function dispatch entry point
    const BIOS_B_DISPATCH: u32 = 0x0000_00B0;

    /// Create a new System instance with all components in reset state
    pub fn new() -> Self {
        Self {
            cpu: CPU::new(),
            bus: Bus::new(),
            exe: None,
            cycles: 0,
        }
    }

    /// Load BIOS from file
    ///
    /// The BIOS must be exactly 512KB.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or has the wrong size.
    pub fn load_bios(&mut self, path: &str) -> Result<()> {
        self.bus.load_bios(path)
    }

    /// Load a PS-X EXE and park it for injection
    ///
    /// The executable is validated and held until the CPU reaches the
    /// shell-ready PC, at which point it replaces the shell.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// PS-X EXE image.
    pub fn load_executable(&mut self, path: &str) -> Result<()> {
        let data = std::fs::read(path)?;
        let exe = PSXExecutable::load(&data)?;

        log::info!(
            "Executable parked for injection at PC=0x{:08X}",
            Self::SHELL_READY_PC
        );
        self.exe = Some(exe);
        Ok(())
    }

    /// Reset the system to initial state
    ///
    /// Resets the bus (clearing RAM and the GPU, preserving the BIOS) and
    /// then the CPU, which prefetches from the reset vector.
    pub fn reset(&mut self) {
        self.bus.reset();
        self.cpu.reset(&self.bus);
        self.cycles = 0;
    }

    /// Execute one CPU instruction
    ///
    /// Checks the injection and TTY observation points against the current
    /// PC before stepping the interpreter.
    ///
    /// # Returns
    /// Number of cycles consumed
    pub fn step(&mut self) -> u32 {
        if self.cpu.pc() == Self::SHELL_READY_PC {
            if let Some(exe) = self.exe.take() {
                self.inject_executable(&exe);
            }
        }

        self.forward_tty_output();

        let cycles = self.cpu.step(&mut self.bus);
        self.cycles += u64::from(cycles);
        cycles
    }

    /// Execute a number of instructions
    pub fn run(&mut self, instructions: usize) {
        for _ in 0..instructions {
            self.step();
        }
    }

    /// Copy a parked executable into RAM and redirect the CPU to it
    ///
    /// The interpreter is quiesced between steps here, so RAM and CPU
    /// state can be rewritten together.
    fn inject_executable(&mut self, exe: &PSXExecutable) {
        log::info!(
            "Injecting executable: PC=0x{:08X}, load=0x{:08X}, size=0x{:X}",
            exe.pc,
            exe.load_address,
            exe.load_size
        );

        for (i, &byte) in exe.data.iter().enumerate() {
            self.bus.write8(exe.load_address.wrapping_add(i as u32), byte);
        }

        if exe.gp != 0 {
            self.cpu.set_reg(28, exe.gp);
        }
        if exe.stack_base != 0 {
            let sp = exe.stack_base.wrapping_add(exe.stack_offset);
            self.cpu.set_reg(29, sp);
            self.cpu.set_reg(30, sp);
        }

        self.cpu.set_pc(&self.bus, exe.pc);
    }

    /// Forward BIOS TTY output to stdout
    ///
    /// The A-function table at 0xA0 and the B-function table at 0xB0 both
    /// expose a putchar (functions 0x3C and 0x3D respectively, selected by
    /// r9) that prints r4. This is an observation point only; the BIOS
    /// code still runs.
    fn forward_tty_output(&self) {
        let pc = self.cpu.pc();
        let function = self.cpu.reg(9);

        let putchar = (pc == Self::BIOS_A_DISPATCH && function == 0x3C)
            || (pc == Self::BIOS_B_DISPATCH && function == 0x3D);

        if putchar {
            print!("{}", (self.cpu.reg(4) as u8) as char);
            let _ = io::stdout().flush();
        }
    }

    /// Current program counter
    pub fn pc(&self) -> u32 {
        self.cpu.pc()
    }

    /// Total cycles executed since reset
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// The CPU instance
    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    /// Mutable access to the CPU instance
    pub fn cpu_mut(&mut self) -> &mut CPU {
        &mut self.cpu
    }

    /// The memory bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Mutable access to the memory bus
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
