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

use super::*;
use crate::core::loader::PSXExecutable;

/// Plant a program at the BIOS reset vector
fn plant_bios_program(system: &mut System, program: &[u32]) {
    for (i, &word) in program.iter().enumerate() {
        system
            .bus
            .write_bios_for_test(i * 4, &word.to_le_bytes());
    }
    // Re-run the reset so the prefetch sees the program.
    system.cpu.reset(&system.bus);
}

#[test]
fn test_boot_from_bios_image() {
    let mut system = System::new();

    plant_bios_program(
        &mut system,
        &[
            0x3C081234, // LUI r8, 0x1234
            0x35085678, // ORI r8, r8, 0x5678
            0x00000000, // NOP
        ],
    );

    system.run(3);

    assert_eq!(system.cpu().reg(8), 0x12345678);
    assert_eq!(system.pc(), 0xBFC0000C);
}

#[test]
fn test_bios_program_can_reach_ram_and_gpu() {
    let mut system = System::new();

    // Store a word to RAM, then push a GP0 rectangle through the
    // memory-mapped port:
    //   LUI r8, 0x8000       ; RAM base
    //   LUI r9, 0x1F80       ; I/O base
    //   ORI r9, r9, 0x1810   ; GP0 port
    //   LUI r10, 0x68FF      ; rect command, color 0xFF0000
    //   SW  r10, 0(r9)       ; GP0 <- command
    //   SW  r0, 0(r9)        ; GP0 <- position (0, 0)
    //   SW  r10, 0(r8)       ; RAM <- marker
    plant_bios_program(
        &mut system,
        &[
            0x3C088000, // LUI r8, 0x8000
            0x3C091F80, // LUI r9, 0x1F80
            0x35291810, // ORI r9, r9, 0x1810
            0x3C0A68FF, // LUI r10, 0x68FF
            0xAD2A0000, // SW r10, 0(r9)
            0xAD200000, // SW r0, 0(r9)
            0xAD0A0000, // SW r10, 0(r8)
        ],
    );

    system.run(7);

    // Color 0xFF0000 is pure blue, which packs into bits 10-14.
    assert_eq!(system.bus().gpu().read_vram(0, 0), 31 << 10);
    assert_eq!(system.bus().read32(0x80000000), 0x68FF0000);
}

#[test]
fn test_executable_injection_at_shell_ready_pc() {
    let mut system = System::new();

    // Payload: ADDIU r9, r0, 42; NOP
    let exe = PSXExecutable {
        pc: 0x80010000,
        gp: 0x80020000,
        load_address: 0x80010000,
        load_size: 8,
        stack_base: 0x801FFF00,
        stack_offset: 0,
        data: vec![0x2A, 0x00, 0x09, 0x24, 0x00, 0x00, 0x00, 0x00],
    };
    system.exe = Some(exe);

    // Park the CPU at the shell-ready address.
    system.cpu.set_pc(&system.bus, 0x80030000);

    // The next step injects and executes the first payload instruction.
    system.step();

    assert_eq!(system.bus().read32(0x80010000), 0x2409002A);
    assert_eq!(system.cpu().reg(28), 0x80020000);
    assert_eq!(system.cpu().reg(29), 0x801FFF00);

    system.step();
    assert_eq!(system.cpu().reg(9), 42);
}

#[test]
fn test_injection_only_happens_with_parked_exe() {
    let mut system = System::new();

    system.cpu.set_pc(&system.bus, 0x80030000);
    system.step();

    // Nothing parked: execution just continues from the shell address.
    assert_eq!(system.pc(), 0x80030004);
}

#[test]
fn test_tty_hook_does_not_disturb_execution() {
    let mut system = System::new();

    // Arrange the putchar observation point: PC at the A-function
    // dispatch with r9 selecting putchar and r4 carrying the character.
    system.cpu.set_pc(&system.bus, 0x000000A0);
    system.cpu.set_reg(9, 0x3C);
    system.cpu.set_reg(4, b'*' as u32);

    system.step();

    assert_eq!(system.pc(), 0x000000A4);
    assert_eq!(system.cpu().reg(9), 0x3C);
}
