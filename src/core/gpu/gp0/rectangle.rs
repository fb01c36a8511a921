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

//! GP0 rectangle drawing

use super::super::GPU;

/// Vertex data for a rectangle command
struct Vertex {
    /// -1024..+1023
    x: i16,
    /// -1024..+1023
    y: i16,
    /// 24-bit color, 0x00BBGGRR
    color: u32,
}

impl GPU {
    /// GP0(0x68): draw a 1x1 monochrome opaque rectangle
    ///
    /// Parameters: the color retained from the command packet, then one
    /// word with the position packed as `y << 16 | x` (both signed
    /// halfwords). The port returns to idle once the pixel is drawn.
    pub(super) fn gp0_monochrome_rect(&mut self, params: &[u32]) {
        let v0 = Vertex {
            color: params[0],
            y: (params[1] >> 16) as i16,
            x: (params[1] & 0xFFFF) as i16,
        };

        self.draw_rect(v0);
    }

    /// Draw a rectangle (one pixel, for the command set in scope)
    ///
    /// Each 8-bit channel is reduced to 5 bits and packed as
    /// `(g << 5) | (b << 10) | r` - green in bits 5-9 and red in bits 0-4,
    /// the layout the frame renderer consumes. Note this is not the
    /// console's native BGR555 ordering.
    fn draw_rect(&mut self, v0: Vertex) {
        let pixel_r = (v0.color & 0x0000_00FF) / 8;
        let pixel_g = ((v0.color >> 8) & 0xFF) / 8;
        let pixel_b = ((v0.color >> 16) & 0xFF) / 8;

        let pixel = ((pixel_g << 5) | (pixel_b << 10) | pixel_r) as u16;

        let x = (v0.x as u16) & 0x3FF;
        let y = (v0.y as u16) & 0x1FF;
        self.write_vram(x, y, pixel);
    }
}
