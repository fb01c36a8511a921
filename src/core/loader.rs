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

//! PS-X EXE loading
//!
//! PSX-EXE files have a 2048-byte header followed by the executable code:
//!
//! ```text
//! 0x00-0x07: "PS-X EXE" magic
//! 0x10-0x13: Initial PC (entry point)
//! 0x14-0x17: Initial GP (global pointer)
//! 0x18-0x1B: Load address
//! 0x1C-0x1F: Load size
//! 0x30-0x33: Stack base
//! 0x34-0x37: Stack offset
//! 0x800+:    Executable data
//! ```
//!
//! All header fields are little-endian 32-bit words. The system injects a
//! parsed executable into RAM once the BIOS shell is reached; see
//! [`crate::core::system::System`].

use super::error::{EmulatorError, Result};

/// PSX-EXE executable
///
/// A parsed PlayStation executable: the header register values plus the
/// payload destined for RAM.
#[derive(Debug, Clone)]
pub struct PSXExecutable {
    /// Initial program counter (entry point)
    pub pc: u32,

    /// Initial global pointer (GP register, r28)
    pub gp: u32,

    /// Load address in RAM
    pub load_address: u32,

    /// Size of data to load
    pub load_size: u32,

    /// Stack base address
    pub stack_base: u32,

    /// Stack offset from base
    pub stack_offset: u32,

    /// Executable data (code and initialized data)
    pub data: Vec<u8>,
}

impl PSXExecutable {
    /// PSX-EXE header size
    const HEADER_SIZE: usize = 0x800;

    /// Load a PSX-EXE file from binary data
    ///
    /// Parses the header and extracts the executable payload.
    ///
    /// # Arguments
    ///
    /// * `data` - Raw PSX-EXE file data (header + executable)
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::LoaderError` if the file is too small, the
    /// magic number is wrong, or the declared load size exceeds the file.
    ///
    /// # Example
    ///
    /// ```
    /// use ember_core::core::loader::PSXExecutable;
    ///
    /// let mut exe_data = vec![0u8; 0x900];
    /// exe_data[0..8].copy_from_slice(b"PS-X EXE");
    ///
    /// let exe = PSXExecutable::load(&exe_data).unwrap();
    /// assert_eq!(exe.load_size, 0);
    /// ```
    pub fn load(data: &[u8]) -> Result<Self> {
        if data.len() < Self::HEADER_SIZE {
            return Err(EmulatorError::LoaderError(
                "Invalid PSX-EXE: file too small".to_string(),
            ));
        }

        if &data[0..8] != b"PS-X EXE" {
            return Err(EmulatorError::LoaderError(
                "Invalid PSX-EXE: bad magic number".to_string(),
            ));
        }

        // Parse header fields (little-endian)
        let pc = read_le_word(data, 0x10);
        let gp = read_le_word(data, 0x14);
        let load_address = read_le_word(data, 0x18);
        let load_size = read_le_word(data, 0x1C);
        let stack_base = read_le_word(data, 0x30);
        let stack_offset = read_le_word(data, 0x34);

        // Extract executable data
        let data_start = Self::HEADER_SIZE;
        let data_end = data_start + load_size as usize;

        if data_end > data.len() {
            return Err(EmulatorError::LoaderError(format!(
                "Invalid PSX-EXE: load_size (0x{:X}) exceeds file size",
                load_size
            )));
        }

        let exe_data = data[data_start..data_end].to_vec();

        log::info!(
            "PSX-EXE loaded: PC=0x{:08X}, GP=0x{:08X}, Load=0x{:08X}, Size=0x{:X}",
            pc,
            gp,
            load_address,
            load_size
        );

        Ok(Self {
            pc,
            gp,
            load_address,
            load_size,
            stack_base,
            stack_offset,
            data: exe_data,
        })
    }
}

/// Read a little-endian word from a header offset
fn read_le_word(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
