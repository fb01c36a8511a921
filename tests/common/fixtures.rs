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

//! Test fixtures for common test scenarios

use ember_core::core::cpu::CPU;
use ember_core::core::memory::Bus;
use ember_core::core::system::System;
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a CPU with default memory bus for testing
#[allow(dead_code)]
pub fn create_cpu_with_bus() -> (CPU, Bus) {
    let cpu = CPU::new();
    let bus = Bus::new();
    (cpu, bus)
}

/// Create a System with initialized components
#[allow(dead_code)]
pub fn create_test_system() -> System {
    System::new()
}

/// Build a full-size BIOS image with a program at the reset vector
#[allow(dead_code)]
pub fn bios_with_program(program: &[u32]) -> Vec<u8> {
    let mut image = vec![0u8; Bus::BIOS_SIZE];
    for (i, &word) in program.iter().enumerate() {
        image[i * 4..i * 4 + 4].copy_from_slice(&word.to_le_bytes());
    }
    image
}

/// Write a BIOS image with a program to a temporary file
#[allow(dead_code)]
pub fn bios_file_with_program(program: &[u32]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp BIOS");
    file.write_all(&bios_with_program(program))
        .expect("Failed to write temp BIOS");
    file
}

/// Build a PS-X EXE image carrying a program
#[allow(dead_code)]
pub fn exe_image(entry_pc: u32, load_address: u32, program: &[u32]) -> Vec<u8> {
    let mut image = vec![0u8; 0x800 + program.len() * 4];

    image[0..8].copy_from_slice(b"PS-X EXE");
    image[0x10..0x14].copy_from_slice(&entry_pc.to_le_bytes());
    image[0x18..0x1C].copy_from_slice(&load_address.to_le_bytes());
    image[0x1C..0x20].copy_from_slice(&((program.len() * 4) as u32).to_le_bytes());

    for (i, &word) in program.iter().enumerate() {
        let offset = 0x800 + i * 4;
        image[offset..offset + 4].copy_from_slice(&word.to_le_bytes());
    }

    image
}

/// Write a PS-X EXE image to a temporary file
#[allow(dead_code)]
pub fn exe_file(entry_pc: u32, load_address: u32, program: &[u32]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp EXE");
    file.write_all(&exe_image(entry_pc, load_address, program))
        .expect("Failed to write temp EXE");
    file
}

/// Load a test program into memory at the specified address
#[allow(dead_code)]
pub fn load_test_program(bus: &mut Bus, start_addr: u32, program: &[u32]) {
    for (i, &instruction) in program.iter().enumerate() {
        let addr = start_addr + (i as u32 * 4);
        bus.write32(addr, instruction);
    }
}

/// Execute N CPU instructions
#[allow(dead_code)]
pub fn execute_n_instructions(cpu: &mut CPU, bus: &mut Bus, n: usize) {
    for _ in 0..n {
        cpu.step(bus);
    }
}
