// Copyright 2026 the Bezel Authors.
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

//! Colors and the bezel gray ramp.

/// An 8-bit-per-channel RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb8(0, 0, 0);
    pub const WHITE: Color = Color::rgb8(0xff, 0xff, 0xff);

    /// The theme background gray; the shade the ramp letter `'R'` resolves to.
    pub const GRAY75: Color = Color::gray8(0xc0);

    /// Create a color from 8-bit channel values.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Create a gray color with all channels equal.
    pub const fn gray8(v: u8) -> Color {
        Color { r: v, g: v, b: v }
    }

    /// The channel values as a tuple.
    pub const fn as_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Resolve a bezel pattern letter into a gray shade.
    ///
    /// `'A'` is black and `'X'` is white, with the letters between mapped
    /// linearly across 24 steps. `'R'` is reserved: it resolves to the theme
    /// background gray rather than its literal ramp position. Bytes outside
    /// the ramp clamp to its ends.
    pub fn from_ramp(c: u8) -> Color {
        if c == b'R' {
            return Color::GRAY75;
        }
        let step = i32::from(c) - i32::from(b'A');
        let step = step.max(0).min(RAMP_STEPS - 1);
        Color::gray8((step * 255 / (RAMP_STEPS - 1)) as u8)
    }

    /// The dimmed version of this foreground color over `bg`.
    ///
    /// Used for the INACTIVE state: an even mix of the two colors.
    pub fn inactive(self, bg: Color) -> Color {
        Color {
            r: mid(self.r, bg.r),
            g: mid(self.g, bg.g),
            b: mid(self.b, bg.b),
        }
    }
}

/// Number of shades in the `'A'..='X'` gray ramp.
const RAMP_STEPS: i32 = 24;

fn mid(a: u8, b: u8) -> u8 {
    ((u16::from(a) + u16::from(b)) / 2) as u8
}
