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

//! GP0 port state machine
//!
//! Every GP0 write is a 32-bit packet. In the idle state the top byte of
//! the packet selects a command; the command then collects its parameter
//! words one packet at a time, and block transfers continue into a data
//! phase that carries its own cursor. Each in-flight command is plain data
//! (an enum variant plus a [`VramTransfer`] cursor), so the port can be
//! resumed packet by packet without any captured state.

mod rectangle;
mod transfer;

use super::GPU;
pub(super) use transfer::VramTransfer;

/// GP0 port state
pub(super) enum GP0State {
    /// The port is idle, awaiting a command packet
    AwaitingCommand,
    /// A command has been accepted and is collecting parameter words
    ReceivingParameters {
        /// The pending command
        command: GP0Command,
        /// Parameter words received so far (including any taken from the
        /// command packet itself)
        params: Vec<u32>,
        /// Parameter words still expected before the command runs
        remaining_words: u32,
    },
    /// A CPU-to-VRAM transfer is consuming data words
    ReceivingData(VramTransfer),
    /// A VRAM-to-CPU transfer is producing words into GPUREAD
    TransferringData(VramTransfer),
}

/// Commands the GP0 port understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum GP0Command {
    /// GP0(0x68): 1x1 monochrome opaque rectangle
    MonochromeRect,
    /// GP0(0xA0): copy rectangle, CPU to VRAM
    CpuToVramCopy,
    /// GP0(0xC0): copy rectangle, VRAM to CPU
    VramToCpuCopy,
}

impl GPU {
    /// Process a GP0 command packet for rendering and VRAM access
    ///
    /// # Arguments
    ///
    /// * `packet` - The 32-bit GP0 packet
    pub fn gp0(&mut self, packet: u32) {
        let state = std::mem::replace(&mut self.gp0, GP0State::AwaitingCommand);

        match state {
            GP0State::AwaitingCommand => self.gp0_command(packet),
            GP0State::ReceivingParameters {
                command,
                mut params,
                remaining_words,
            } => {
                params.push(packet);
                let remaining_words = remaining_words - 1;

                if remaining_words == 0 {
                    self.gp0_run_command(command, params);
                } else {
                    self.gp0 = GP0State::ReceivingParameters {
                        command,
                        params,
                        remaining_words,
                    };
                }
            }
            GP0State::ReceivingData(transfer) => self.gp0_receive_data(transfer, packet),
            GP0State::TransferringData(transfer) => self.gp0_send_data(transfer),
        }
    }

    /// Accept a command packet while the port is idle
    fn gp0_command(&mut self, packet: u32) {
        match packet >> 24 {
            // GP0(0x68) - Monochrome Rectangle (1x1) (Dot) (opaque)
            0x68 => {
                self.gp0 = GP0State::ReceivingParameters {
                    command: GP0Command::MonochromeRect,
                    // The low 24 bits of the command packet are the color.
                    params: vec![packet & 0x00FF_FFFF],
                    remaining_words: 1,
                };
            }

            // GP0(0xA0) - Copy Rectangle (CPU to VRAM)
            0xA0 => {
                self.gp0 = GP0State::ReceivingParameters {
                    command: GP0Command::CpuToVramCopy,
                    params: Vec::new(),
                    remaining_words: 2,
                };
            }

            // GP0(0xC0) - Copy Rectangle (VRAM to CPU)
            0xC0 => {
                self.gp0 = GP0State::ReceivingParameters {
                    command: GP0Command::VramToCpuCopy,
                    params: Vec::new(),
                    remaining_words: 2,
                };
            }

            command => {
                log::warn!(
                    "Unknown GP0 command 0x{:02X} (packet 0x{:08X}), ignored",
                    command,
                    packet
                );
            }
        }
    }

    /// Run a command whose parameter list is complete
    fn gp0_run_command(&mut self, command: GP0Command, params: Vec<u32>) {
        match command {
            GP0Command::MonochromeRect => self.gp0_monochrome_rect(&params),
            GP0Command::CpuToVramCopy => {
                let transfer = VramTransfer::from_params(&params);
                log::debug!(
                    "CPU to VRAM transfer at ({}, {}), {} data words",
                    transfer.x,
                    transfer.y,
                    transfer.remaining_words
                );
                self.gp0 = GP0State::ReceivingData(transfer);
            }
            GP0Command::VramToCpuCopy => {
                let transfer = VramTransfer::from_params(&params);
                log::debug!(
                    "VRAM to CPU transfer at ({}, {}), {} data words",
                    transfer.x,
                    transfer.y,
                    transfer.remaining_words
                );
                self.gp0 = GP0State::TransferringData(transfer);
            }
        }
    }
}
