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

#[test]
fn test_unknown_command_is_ignored() {
    let mut gpu = GPU::new();

    gpu.gp0(0x01000000);
    gpu.gp0(0xE1000000);

    assert!(gpu.is_awaiting_command());
    assert!(gpu.vram().iter().all(|&pixel| pixel == 0));
}

#[test]
fn test_rect_waits_for_position_parameter() {
    let mut gpu = GPU::new();

    gpu.gp0(0x68FFFFFF);
    assert!(!gpu.is_awaiting_command());

    gpu.gp0(0x00000000);
    assert!(gpu.is_awaiting_command());
}

#[test]
fn test_rect_draws_single_pixel() {
    let mut gpu = GPU::new();

    // White dot at (5, 3)
    gpu.gp0(0x68FFFFFF);
    gpu.gp0(0x00030005);

    assert_eq!(gpu.read_vram(5, 3), 0x7FFF);

    // Neighbors untouched
    assert_eq!(gpu.read_vram(4, 3), 0);
    assert_eq!(gpu.read_vram(6, 3), 0);
    assert_eq!(gpu.read_vram(5, 2), 0);
    assert_eq!(gpu.read_vram(5, 4), 0);
}

#[test]
fn test_rect_color_packing() {
    let mut gpu = GPU::new();

    // Pure red (0x0000BBGGRR): red lands in bits 0-4.
    gpu.gp0(0x680000FF);
    gpu.gp0(0x00000000);
    assert_eq!(gpu.read_vram(0, 0), 0x001F);

    // Pure green lands in bits 5-9.
    gpu.gp0(0x6800FF00);
    gpu.gp0(0x00010000);
    assert_eq!(gpu.read_vram(0, 1), 0x03E0);

    // Pure blue lands in bits 10-14.
    gpu.gp0(0x68FF0000);
    gpu.gp0(0x00020000);
    assert_eq!(gpu.read_vram(0, 2), 0x7C00);
}

#[test]
fn test_rect_channel_reduction() {
    let mut gpu = GPU::new();

    // 8-bit channels divide by 8 into 5 bits: 0x40 -> 8.
    gpu.gp0(0x68000040);
    gpu.gp0(0x00000000);
    assert_eq!(gpu.read_vram(0, 0), 8);
}

#[test]
fn test_rect_negative_coordinates_wrap_into_vram() {
    let mut gpu = GPU::new();

    // x = -1 masks to 1023, y = -1 masks to 511.
    gpu.gp0(0x68FFFFFF);
    gpu.gp0(0xFFFFFFFF);

    assert_eq!(gpu.read_vram(1023, 511), 0x7FFF);
}

#[test]
fn test_cpu_to_vram_transfer_spec_shape() {
    let mut gpu = GPU::new();

    // 2x1 upload to (0, 0): two pixels in one data word.
    gpu.gp0(0xA0000000);
    gpu.gp0(0x00000000); // destination
    gpu.gp0(0x00010002); // height = 1, width = 2
    gpu.gp0(0xBBBBAAAA); // data

    assert_eq!(gpu.vram()[0], 0xAAAA);
    assert_eq!(gpu.vram()[1], 0xBBBB);
    assert!(gpu.is_awaiting_command());
}

#[test]
fn test_cpu_to_vram_transfer_not_idle_during_data() {
    let mut gpu = GPU::new();

    gpu.gp0(0xA0000000);
    gpu.gp0(0x00000000);
    gpu.gp0(0x00010004); // height = 1, width = 4: two data words

    assert!(!gpu.is_awaiting_command());
    gpu.gp0(0x22221111);
    assert!(!gpu.is_awaiting_command());
    gpu.gp0(0x44443333);
    assert!(gpu.is_awaiting_command());

    assert_eq!(gpu.vram()[0..4], [0x1111, 0x2222, 0x3333, 0x4444]);
}

#[test]
fn test_transfer_row_advance() {
    let mut gpu = GPU::new();

    // 2x2 upload to (10, 20)
    gpu.gp0(0xA0000000);
    gpu.gp0(0x0014000A); // y = 20, x = 10
    gpu.gp0(0x00020002); // height = 2, width = 2
    gpu.gp0(0xBBBBAAAA);
    gpu.gp0(0xDDDDCCCC);

    assert_eq!(gpu.read_vram(10, 20), 0xAAAA);
    assert_eq!(gpu.read_vram(11, 20), 0xBBBB);
    assert_eq!(gpu.read_vram(10, 21), 0xCCCC);
    assert_eq!(gpu.read_vram(11, 21), 0xDDDD);
    assert!(gpu.is_awaiting_command());
}

#[test]
fn test_transfer_size_decodes_with_wrap() {
    let mut gpu = GPU::new();

    // Raw width 0 means 1024, raw height 0 means 512: a full-frame
    // upload of 1024*512/2 = 262144 words.
    gpu.gp0(0xA0000000);
    gpu.gp0(0x00000000);
    gpu.gp0(0x00000000);

    for _ in 0..262144 {
        assert!(!gpu.is_awaiting_command());
        gpu.gp0(0x00010001);
    }

    assert!(gpu.is_awaiting_command());
    assert!(gpu.vram().iter().all(|&pixel| pixel == 1));
}

#[test]
fn test_odd_sized_transfer_drains_dummy_word() {
    let mut gpu = GPU::new();

    // 1x1: zero full data words, so the port consumes one dummy word
    // without writing before going idle.
    gpu.gp0(0xA0000000);
    gpu.gp0(0x00000000);
    gpu.gp0(0x00010001);

    assert!(!gpu.is_awaiting_command());
    gpu.gp0(0xFFFFFFFF);

    assert!(gpu.is_awaiting_command());
    assert_eq!(gpu.vram()[0], 0);
}

#[test]
fn test_vram_to_cpu_transfer_fills_gpuread() {
    let mut gpu = GPU::new();

    gpu.write_vram(0, 0, 0x1111);
    gpu.write_vram(1, 0, 0x2222);

    gpu.gp0(0xC0000000);
    gpu.gp0(0x00000000); // source
    gpu.gp0(0x00010002); // height = 1, width = 2

    assert!(!gpu.is_awaiting_command());

    // Each clocking write produces one word in GPUREAD.
    gpu.gp0(0x00000000);
    assert_eq!(gpu.gpuread(), 0x22221111);
    assert!(gpu.is_awaiting_command());
}

#[test]
fn test_back_to_back_commands() {
    let mut gpu = GPU::new();

    gpu.gp0(0x68FFFFFF);
    gpu.gp0(0x00000000);

    gpu.gp0(0xA0000000);
    gpu.gp0(0x00040000); // y = 4
    gpu.gp0(0x00010002);
    gpu.gp0(0x99998888);

    assert_eq!(gpu.read_vram(0, 0), 0x7FFF);
    assert_eq!(gpu.read_vram(0, 4), 0x8888);
    assert_eq!(gpu.read_vram(1, 4), 0x9999);
    assert!(gpu.is_awaiting_command());
}
