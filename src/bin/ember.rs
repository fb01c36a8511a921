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

use clap::Parser;
use ember_core::core::error::Result;
use ember_core::core::system::System;
use log::{error, info};

/// PlayStation (PSX) emulator core runner
#[derive(Parser)]
#[command(name = "ember")]
#[command(about = "PlayStation emulator", long_about = None)]
struct Args {
    /// Path to PlayStation BIOS file (e.g., SCPH1001.BIN)
    bios_file: String,

    /// Path to a PS-X EXE to inject once the BIOS shell is reached
    #[arg(short = 'e', long)]
    exe: Option<String>,

    /// Number of instructions to execute
    #[arg(short = 'n', long, default_value = "100000")]
    instructions: usize,
}

fn main() -> Result<()> {
    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("ember v{}", env!("CARGO_PKG_VERSION"));
    info!("PlayStation emulator core");

    let args = Args::parse();

    let mut system = System::new();

    info!("Loading BIOS from: {}", args.bios_file);
    if let Err(e) = system.load_bios(&args.bios_file) {
        error!("Failed to load BIOS: {}", e);
        return Err(e);
    }
    info!("BIOS loaded successfully");

    if let Some(exe_path) = &args.exe {
        info!("Loading executable from: {}", exe_path);
        if let Err(e) = system.load_executable(exe_path) {
            error!("Failed to load executable: {}", e);
            return Err(e);
        }
        info!("Executable loaded successfully");
    }

    info!("Starting emulation...");
    system.reset();

    let total_instructions = args.instructions;
    let log_interval = (total_instructions / 10).max(1);

    for i in 0..total_instructions {
        if i % log_interval == 0 && i > 0 {
            info!(
                "Progress: {}/{} instructions | PC: 0x{:08X} | Cycles: {}",
                i,
                total_instructions,
                system.pc(),
                system.cycles()
            );
        }

        system.step();
    }

    info!("Emulation completed");
    info!("Total instructions: {}", total_instructions);
    info!("Total cycles: {}", system.cycles());
    info!("Final PC: 0x{:08X}", system.pc());

    Ok(())
}
