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

//! Exception-triggering instructions

use super::super::{ExceptionCause, CPU};

impl CPU {
    /// SYSCALL: System Call
    ///
    /// Transfers control to the exception handler with the Syscall cause
    /// code. Used by programs to request BIOS kernel services.
    pub(in crate::core::cpu) fn op_syscall(&mut self) {
        self.exception(ExceptionCause::Syscall);
    }

    /// BREAK: Breakpoint
    ///
    /// Transfers control to the exception handler with the Breakpoint
    /// cause code. Typically planted by debuggers.
    pub(in crate::core::cpu) fn op_break(&mut self) {
        self.exception(ExceptionCause::Breakpoint);
    }
}
