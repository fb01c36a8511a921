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

/// Upload a rectangle of pixels via GP0(0xA0)
fn upload(gpu: &mut GPU, x: u16, y: u16, width: u16, height: u16, pixels: &[u16]) {
    gpu.gp0(0xA0000000);
    gpu.gp0(((y as u32) << 16) | x as u32);
    gpu.gp0(((height as u32) << 16) | width as u32);

    for pair in pixels.chunks(2) {
        let word = (pair[0] as u32) | ((pair.get(1).copied().unwrap_or(0) as u32) << 16);
        gpu.gp0(word);
    }
}

/// Read a rectangle of pixels back via GP0(0xC0)
fn download(gpu: &mut GPU, x: u16, y: u16, width: u16, height: u16) -> Vec<u16> {
    gpu.gp0(0xC0000000);
    gpu.gp0(((y as u32) << 16) | x as u32);
    gpu.gp0(((height as u32) << 16) | width as u32);

    let words = (width as usize * height as usize) / 2;
    let mut pixels = Vec::with_capacity(words * 2);

    for _ in 0..words {
        gpu.gp0(0x00000000);
        let word = gpu.gpuread();
        pixels.push(word as u16);
        pixels.push((word >> 16) as u16);
    }

    pixels
}

#[test]
fn test_upload_download_round_trip() {
    let mut gpu = GPU::new();

    let pixels: Vec<u16> = (0..32u16).map(|i| 0x1000 + i).collect();
    upload(&mut gpu, 100, 200, 8, 4, &pixels);
    assert!(gpu.is_awaiting_command());

    let readback = download(&mut gpu, 100, 200, 8, 4);
    assert!(gpu.is_awaiting_command());

    assert_eq!(readback, pixels);
}

#[test]
fn test_round_trip_single_row() {
    let mut gpu = GPU::new();

    let pixels = [0xAAAA, 0xBBBB, 0xCCCC, 0xDDDD];
    upload(&mut gpu, 0, 0, 4, 1, &pixels);

    let readback = download(&mut gpu, 0, 0, 4, 1);
    assert_eq!(readback, pixels);
}

#[test]
fn test_upload_does_not_disturb_surroundings() {
    let mut gpu = GPU::new();

    // Paint a border around the target area first.
    for x in 0..6u16 {
        for y in 0..6u16 {
            gpu.write_vram(10 + x, 10 + y, 0x5555);
        }
    }

    upload(&mut gpu, 11, 11, 4, 4, &[0x1111; 16]);

    // Inside overwritten, border preserved.
    assert_eq!(gpu.read_vram(11, 11), 0x1111);
    assert_eq!(gpu.read_vram(14, 14), 0x1111);
    assert_eq!(gpu.read_vram(10, 10), 0x5555);
    assert_eq!(gpu.read_vram(15, 15), 0x5555);
    assert_eq!(gpu.read_vram(10, 12), 0x5555);
    assert_eq!(gpu.read_vram(15, 12), 0x5555);
}

#[test]
fn test_transfer_coordinates_mask_into_range() {
    let mut gpu = GPU::new();

    // x = 0x400 masks to 0, y = 0x200 masks to 0.
    gpu.gp0(0xA0000000);
    gpu.gp0(0x02000400);
    gpu.gp0(0x00010002);
    gpu.gp0(0xBBBBAAAA);

    assert_eq!(gpu.read_vram(0, 0), 0xAAAA);
    assert_eq!(gpu.read_vram(1, 0), 0xBBBB);
}

#[test]
fn test_download_walks_rows() {
    let mut gpu = GPU::new();

    gpu.write_vram(20, 30, 0x0101);
    gpu.write_vram(21, 30, 0x0202);
    gpu.write_vram(20, 31, 0x0303);
    gpu.write_vram(21, 31, 0x0404);

    let readback = download(&mut gpu, 20, 30, 2, 2);
    assert_eq!(readback, [0x0101, 0x0202, 0x0303, 0x0404]);
}
