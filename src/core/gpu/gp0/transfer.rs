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

//! GP0 block transfer commands (CPU to VRAM and VRAM to CPU)

use super::super::GPU;
use super::GP0State;

/// Cursor state for an in-flight block transfer
///
/// Both transfer directions walk VRAM the same way: pixels advance left to
/// right from `x_start`; on reaching `x_max` the cursor drops one line and
/// snaps back. Each 32-bit data word carries two pixels, low halfword
/// first.
#[derive(Debug, Clone, Copy)]
pub(in crate::core::gpu) struct VramTransfer {
    /// Current column
    pub x: u16,
    /// Current line
    pub y: u16,
    /// Column the cursor snaps back to at the end of a line
    pub x_start: u16,
    /// One past the last column of a line (x_start + width)
    pub x_max: u16,
    /// Data words left in the transfer
    pub remaining_words: u32,
}

impl VramTransfer {
    /// Build a transfer cursor from the two header words
    ///
    /// Word 0 holds the base coordinate (`y << 16 | x`), word 1 the size
    /// (`height << 16 | width`). Sizes decode with wrap: a raw width of 0
    /// means 1024 and a raw height of 0 means 512.
    pub(super) fn from_params(params: &[u32]) -> Self {
        let dest = params[0];
        let size = params[1];

        let width = ((size & 0xFFFF).wrapping_sub(1) & 0x3FF) + 1;
        let height = (((size >> 16) & 0xFFFF).wrapping_sub(1) & 0x1FF) + 1;

        let x = (dest & 0x3FF) as u16;
        let y = ((dest >> 16) & 0x1FF) as u16;

        Self {
            x,
            y,
            x_start: x,
            x_max: x + width as u16,
            remaining_words: width * height / 2,
        }
    }
}

impl GPU {
    /// Consume one data word of a CPU-to-VRAM transfer
    ///
    /// A transfer whose pixel count rounded down to zero words drains this
    /// one packet without writing and the port returns to idle.
    pub(super) fn gp0_receive_data(&mut self, mut transfer: VramTransfer, packet: u32) {
        if transfer.remaining_words != 0 {
            self.store_transfer_pixel(&mut transfer, packet as u16);
            self.store_transfer_pixel(&mut transfer, (packet >> 16) as u16);
            transfer.remaining_words -= 1;
        }

        if transfer.remaining_words == 0 {
            log::debug!("CPU to VRAM transfer complete");
            self.reset_gp0();
        } else {
            self.gp0 = GP0State::ReceivingData(transfer);
        }
    }

    /// Produce one word of a VRAM-to-CPU transfer into GPUREAD
    ///
    /// The incoming packet only clocks the transfer; its value is ignored.
    pub(super) fn gp0_send_data(&mut self, mut transfer: VramTransfer) {
        if transfer.remaining_words != 0 {
            let pixel0 = self.load_transfer_pixel(&mut transfer) as u32;
            let pixel1 = self.load_transfer_pixel(&mut transfer) as u32;

            self.gpuread = (pixel1 << 16) | pixel0;
            transfer.remaining_words -= 1;
        }

        if transfer.remaining_words == 0 {
            log::debug!("VRAM to CPU transfer complete");
            self.reset_gp0();
        } else {
            self.gp0 = GP0State::TransferringData(transfer);
        }
    }

    /// Write one pixel at the cursor and advance it
    fn store_transfer_pixel(&mut self, transfer: &mut VramTransfer, pixel: u16) {
        self.write_vram(transfer.x, transfer.y, pixel);
        transfer.x += 1;

        if transfer.x >= transfer.x_max {
            transfer.y += 1;
            transfer.x = transfer.x_start;
        }
    }

    /// Read one pixel at the cursor and advance it
    fn load_transfer_pixel(&mut self, transfer: &mut VramTransfer) -> u16 {
        let pixel = self.read_vram(transfer.x, transfer.y);
        transfer.x += 1;

        if transfer.x >= transfer.x_max {
            transfer.y += 1;
            transfer.x = transfer.x_start;
        }

        pixel
    }
}
