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

//! Memory bus implementation
//!
//! The Bus is the central component for all memory operations in the
//! emulator. It owns RAM, the scratchpad, the BIOS ROM and the GPU, and
//! routes every CPU access to the right device.
//!
//! # Memory Map
//!
//! | Physical Address Range | Region       | Size   | Access |
//! |------------------------|--------------|--------|--------|
//! | 0x00000000-0x001FFFFF  | RAM          | 2MB    | R/W    |
//! | 0x1F800000-0x1F8003FF  | Scratchpad   | 1KB    | R/W    |
//! | 0x1F801000-0x1F801FFF  | I/O Ports    | 4KB    | R/W    |
//! | 0x1FC00000-0x1FC7FFFF  | BIOS ROM     | 512KB  | R only |
//!
//! # Address Translation
//!
//! KUSEG, KSEG0 and KSEG1 all mirror the same physical space, so the
//! translation is a single mask of the upper three bits. (This also
//! aliases the KSEG2 cache-control register onto the map; nothing in
//! scope observes the difference.)
//!
//! Accesses to addresses nothing responds to never fail: reads return 0
//! and writes are dropped, each with a diagnostic. Alignment is the CPU's
//! concern; the bus itself accepts any address.
//!
//! # Example
//!
//! ```
//! use ember_core::core::memory::Bus;
//!
//! let mut bus = Bus::new();
//!
//! // Write to RAM via KSEG0, read it back through other segments.
//! bus.write32(0x80000000, 0x12345678);
//! assert_eq!(bus.read32(0x00000000), 0x12345678);
//! assert_eq!(bus.read32(0xA0000000), 0x12345678);
//! ```

use crate::core::error::{EmulatorError, Result};
use crate::core::gpu::GPU;
use std::fs::File;
use std::io::Read;

/// Memory bus managing all memory accesses
///
/// Owns main RAM, the scratchpad, the BIOS ROM and the GPU instance, and
/// performs address decoding for every access width.
pub struct Bus {
    /// Main RAM (2MB)
    ///
    /// Physical address: 0x00000000-0x001FFFFF
    ram: Vec<u8>,

    /// Scratchpad (1KB fast RAM)
    ///
    /// Physical address: 0x1F800000-0x1F8003FF
    /// The data cache wired up as fast RAM, used for time-critical data
    scratchpad: [u8; 1024],

    /// BIOS ROM (512KB)
    ///
    /// Physical address: 0x1FC00000-0x1FC7FFFF
    /// Populated by the host before execution; read-only afterwards
    bios: Vec<u8>,

    /// GPU device instance, reached through the I/O page
    gpu: GPU,
}

/// Memory region identification
///
/// Used to identify which memory region a physical address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryRegion {
    /// Main RAM (2MB)
    RAM,
    /// Scratchpad (1KB)
    Scratchpad,
    /// I/O ports
    IO,
    /// BIOS ROM
    BIOS,
    /// Nothing responds here
    Unmapped,
}

impl Bus {
    /// RAM size (2MB)
    pub const RAM_SIZE: usize = 2 * 1024 * 1024;

    /// BIOS size (512KB)
    pub const BIOS_SIZE: usize = 512 * 1024;

    /// RAM physical address range
    const RAM_START: u32 = 0x0000_0000;
    const RAM_END: u32 = 0x001F_FFFF;

    /// Scratchpad physical address range
    const SCRATCHPAD_START: u32 = 0x1F80_0000;
    const SCRATCHPAD_END: u32 = 0x1F80_03FF;

    /// I/O ports physical address range
    const IO_START: u32 = 0x1F80_1000;
    const IO_END: u32 = 0x1F80_1FFF;

    /// BIOS ROM physical address range
    const BIOS_START: u32 = 0x1FC0_0000;
    const BIOS_END: u32 = 0x1FC7_FFFF;

    /// Create a new Bus instance
    ///
    /// All memory regions start zeroed; the BIOS image is loaded
    /// separately.
    pub fn new() -> Self {
        Self {
            ram: vec![0u8; Self::RAM_SIZE],
            scratchpad: [0u8; 1024],
            bios: vec![0u8; Self::BIOS_SIZE],
            gpu: GPU::new(),
        }
    }

    /// Reset the bus to initial state
    ///
    /// Clears RAM and the scratchpad and resets the GPU, simulating a
    /// power cycle. The BIOS image is ROM and survives.
    pub fn reset(&mut self) {
        self.ram.fill(0);
        self.scratchpad.fill(0);
        self.gpu.reset();
    }

    /// Load BIOS from file
    ///
    /// The file must be exactly 512KB.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the BIOS file
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::BiosError` if the file cannot be opened or
    /// read, `EmulatorError::InvalidBiosSize` if it has the wrong size.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ember_core::core::memory::Bus;
    ///
    /// let mut bus = Bus::new();
    /// bus.load_bios("SCPH1001.BIN").unwrap();
    /// ```
    pub fn load_bios(&mut self, path: &str) -> Result<()> {
        let mut file = File::open(path).map_err(|e| EmulatorError::BiosError {
            message: format!("Unable to open {}: {}", path, e),
        })?;

        let metadata = file.metadata()?;

        if metadata.len() != Self::BIOS_SIZE as u64 {
            return Err(EmulatorError::InvalidBiosSize {
                expected: Self::BIOS_SIZE,
                got: metadata.len() as usize,
            });
        }

        file.read_exact(&mut self.bios)?;

        Ok(())
    }

    /// Set the BIOS image from memory
    ///
    /// The image must be exactly 512KB and is copied verbatim.
    pub fn set_bios(&mut self, data: &[u8]) -> Result<()> {
        if data.len() != Self::BIOS_SIZE {
            return Err(EmulatorError::InvalidBiosSize {
                expected: Self::BIOS_SIZE,
                got: data.len(),
            });
        }

        self.bios.copy_from_slice(data);
        Ok(())
    }

    /// The GPU owned by this bus
    pub fn gpu(&self) -> &GPU {
        &self.gpu
    }

    /// Mutable access to the GPU owned by this bus
    pub fn gpu_mut(&mut self) -> &mut GPU {
        &mut self.gpu
    }

    /// Translate virtual address to physical address
    ///
    /// KUSEG, KSEG0 and KSEG1 fold onto the same physical space by masking
    /// the upper three bits.
    #[inline(always)]
    fn translate_address(vaddr: u32) -> u32 {
        vaddr & 0x1FFF_FFFF
    }

    /// Identify the memory region for a virtual address
    ///
    /// # Example
    ///
    /// ```
    /// use ember_core::core::memory::{Bus, MemoryRegion};
    ///
    /// assert_eq!(Bus::identify_region(0x00000000), MemoryRegion::RAM);
    /// assert_eq!(Bus::identify_region(0x1F800000), MemoryRegion::Scratchpad);
    /// assert_eq!(Bus::identify_region(0x1F801000), MemoryRegion::IO);
    /// assert_eq!(Bus::identify_region(0xBFC00000), MemoryRegion::BIOS);
    /// assert_eq!(Bus::identify_region(0x1FFFFFFF), MemoryRegion::Unmapped);
    /// ```
    pub fn identify_region(vaddr: u32) -> MemoryRegion {
        let paddr = Self::translate_address(vaddr);

        if (Self::RAM_START..=Self::RAM_END).contains(&paddr) {
            MemoryRegion::RAM
        } else if (Self::SCRATCHPAD_START..=Self::SCRATCHPAD_END).contains(&paddr) {
            MemoryRegion::Scratchpad
        } else if (Self::IO_START..=Self::IO_END).contains(&paddr) {
            MemoryRegion::IO
        } else if (Self::BIOS_START..=Self::BIOS_END).contains(&paddr) {
            MemoryRegion::BIOS
        } else {
            MemoryRegion::Unmapped
        }
    }

    /// Read 8-bit value from memory
    ///
    /// Byte reads have no alignment requirement. Unmapped addresses read
    /// as 0.
    pub fn read8(&self, vaddr: u32) -> u8 {
        let paddr = Self::translate_address(vaddr);

        match Self::identify_region(vaddr) {
            MemoryRegion::RAM => self.ram[paddr as usize],
            MemoryRegion::Scratchpad => self.scratchpad[(paddr - Self::SCRATCHPAD_START) as usize],
            MemoryRegion::BIOS => self.bios[(paddr - Self::BIOS_START) as usize],
            MemoryRegion::IO => {
                // The GPU registers are word sized; narrow reads see 0.
                log::trace!("I/O port read8 at 0x{:08X}", paddr);
                0
            }
            MemoryRegion::Unmapped => {
                log::warn!("Unknown memory read: 0x{:08X}, returning 0", paddr);
                0
            }
        }
    }

    /// Read 16-bit value from memory (little-endian)
    ///
    /// The bus accepts any address; the CPU raises alignment traps before
    /// calling in. Unmapped addresses read as 0.
    pub fn read16(&self, vaddr: u32) -> u16 {
        let paddr = Self::translate_address(vaddr);

        match Self::identify_region(vaddr) {
            MemoryRegion::RAM => Self::read_le16(&self.ram, paddr as usize),
            MemoryRegion::Scratchpad => {
                Self::read_le16(&self.scratchpad, (paddr - Self::SCRATCHPAD_START) as usize)
            }
            MemoryRegion::BIOS => Self::read_le16(&self.bios, (paddr - Self::BIOS_START) as usize),
            MemoryRegion::IO => {
                log::trace!("I/O port read16 at 0x{:08X}", paddr);
                0
            }
            MemoryRegion::Unmapped => {
                log::warn!("Unknown memory read: 0x{:08X}, returning 0", paddr);
                0
            }
        }
    }

    /// Read 32-bit value from memory (little-endian)
    ///
    /// The bus accepts any address; the CPU raises alignment traps before
    /// calling in. Unmapped addresses read as 0.
    pub fn read32(&self, vaddr: u32) -> u32 {
        let paddr = Self::translate_address(vaddr);

        match Self::identify_region(vaddr) {
            MemoryRegion::RAM => Self::read_le32(&self.ram, paddr as usize),
            MemoryRegion::Scratchpad => {
                Self::read_le32(&self.scratchpad, (paddr - Self::SCRATCHPAD_START) as usize)
            }
            MemoryRegion::BIOS => Self::read_le32(&self.bios, (paddr - Self::BIOS_START) as usize),
            MemoryRegion::IO => match paddr & 0xFFF {
                GPU::GP0 => self.gpu.gpuread(),
                GPU::GPUSTAT => self.gpu.status(),
                _ => {
                    log::warn!("Unknown I/O port read: 0x{:08X}, returning 0", paddr);
                    0
                }
            },
            MemoryRegion::Unmapped => {
                log::warn!("Unknown memory read: 0x{:08X}, returning 0", paddr);
                0
            }
        }
    }

    /// Write 8-bit value to memory
    ///
    /// Writes to ROM and unmapped addresses are dropped.
    pub fn write8(&mut self, vaddr: u32, value: u8) {
        let paddr = Self::translate_address(vaddr);

        match Self::identify_region(vaddr) {
            MemoryRegion::RAM => self.ram[paddr as usize] = value,
            MemoryRegion::Scratchpad => {
                self.scratchpad[(paddr - Self::SCRATCHPAD_START) as usize] = value;
            }
            MemoryRegion::BIOS => {
                log::trace!("Attempt to write to BIOS at 0x{:08X} (ignored)", paddr);
            }
            MemoryRegion::IO => {
                log::trace!("I/O port write8 at 0x{:08X} = 0x{:02X} (ignored)", paddr, value);
            }
            MemoryRegion::Unmapped => {
                log::warn!("Unknown memory write: 0x{:08X} <- 0x{:02X}", paddr, value);
            }
        }
    }

    /// Write 16-bit value to memory (little-endian)
    pub fn write16(&mut self, vaddr: u32, value: u16) {
        let paddr = Self::translate_address(vaddr);

        match Self::identify_region(vaddr) {
            MemoryRegion::RAM => Self::write_le16(&mut self.ram, paddr as usize, value),
            MemoryRegion::Scratchpad => Self::write_le16(
                &mut self.scratchpad,
                (paddr - Self::SCRATCHPAD_START) as usize,
                value,
            ),
            MemoryRegion::BIOS => {
                log::trace!("Attempt to write to BIOS at 0x{:08X} (ignored)", paddr);
            }
            MemoryRegion::IO => {
                log::trace!("I/O port write16 at 0x{:08X} = 0x{:04X} (ignored)", paddr, value);
            }
            MemoryRegion::Unmapped => {
                log::warn!("Unknown memory write: 0x{:08X} <- 0x{:04X}", paddr, value);
            }
        }
    }

    /// Write 32-bit value to memory (little-endian)
    ///
    /// Word writes to the GPU ports are forwarded to GP0/GP1.
    pub fn write32(&mut self, vaddr: u32, value: u32) {
        let paddr = Self::translate_address(vaddr);

        match Self::identify_region(vaddr) {
            MemoryRegion::RAM => Self::write_le32(&mut self.ram, paddr as usize, value),
            MemoryRegion::Scratchpad => Self::write_le32(
                &mut self.scratchpad,
                (paddr - Self::SCRATCHPAD_START) as usize,
                value,
            ),
            MemoryRegion::BIOS => {
                log::trace!("Attempt to write to BIOS at 0x{:08X} (ignored)", paddr);
            }
            MemoryRegion::IO => match paddr & 0xFFF {
                GPU::GP0 => self.gpu.gp0(value),
                GPU::GP1 => self.gpu.gp1(value),
                _ => {
                    log::warn!("Unknown I/O port write: 0x{:08X} <- 0x{:08X}", paddr, value);
                }
            },
            MemoryRegion::Unmapped => {
                log::warn!("Unknown memory write: 0x{:08X} <- 0x{:08X}", paddr, value);
            }
        }
    }

    /// Assemble a little-endian halfword from a region
    ///
    /// An access whose last byte falls outside the region is dropped with
    /// a diagnostic instead of reading out of bounds.
    fn read_le16(region: &[u8], offset: usize) -> u16 {
        match region.get(offset..offset + 2) {
            Some(bytes) => u16::from_le_bytes([bytes[0], bytes[1]]),
            None => {
                log::warn!("Halfword read past region end (offset 0x{:X}), returning 0", offset);
                0
            }
        }
    }

    /// Assemble a little-endian word from a region
    fn read_le32(region: &[u8], offset: usize) -> u32 {
        match region.get(offset..offset + 4) {
            Some(bytes) => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            None => {
                log::warn!("Word read past region end (offset 0x{:X}), returning 0", offset);
                0
            }
        }
    }

    /// Scatter a halfword into a region, little-endian
    fn write_le16(region: &mut [u8], offset: usize, value: u16) {
        match region.get_mut(offset..offset + 2) {
            Some(bytes) => bytes.copy_from_slice(&value.to_le_bytes()),
            None => {
                log::warn!("Halfword write past region end (offset 0x{:X}), dropped", offset);
            }
        }
    }

    /// Scatter a word into a region, little-endian
    fn write_le32(region: &mut [u8], offset: usize, value: u32) {
        match region.get_mut(offset..offset + 4) {
            Some(bytes) => bytes.copy_from_slice(&value.to_le_bytes()),
            None => {
                log::warn!("Word write past region end (offset 0x{:X}), dropped", offset);
            }
        }
    }

    /// Write directly to BIOS memory (test helper)
    ///
    /// Bypasses the read-only protection of BIOS so tests can plant
    /// programs at the reset vector.
    ///
    /// # Panics
    ///
    /// Panics if `offset + data.len()` exceeds the BIOS size.
    #[cfg(test)]
    pub(crate) fn write_bios_for_test(&mut self, offset: usize, data: &[u8]) {
        let end = offset + data.len();
        assert!(
            end <= Self::BIOS_SIZE,
            "BIOS write out of bounds: offset={}, len={}",
            offset,
            data.len()
        );
        self.bios[offset..end].copy_from_slice(data);
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
