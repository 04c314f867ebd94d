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

//! Widget state flags passed into every box draw call.

use bitflags::bitflags;

bitflags! {
    /// A bitmask of independent boolean facets of a widget's visual state.
    ///
    /// Every box draw call receives the current flags by value and resolves
    /// them into colors and pattern choices. The alignment bits control
    /// label placement; `ALIGN_CENTER` is the absence of all alignment bits.
    #[derive(Default)]
    pub struct Flags: u32 {
        /// The widget does not respond to input; drawn dimmed.
        const INACTIVE = 1;
        /// The widget displays output only.
        const OUTPUT = 1 << 1;
        /// The widget is turned on (a pushed-in button, a checked box).
        const VALUE = 1 << 2;
        /// The widget is part of the current selection.
        const SELECTED = 1 << 3;
        /// Skip drawing the interior; only the frame is wanted.
        const INVISIBLE = 1 << 4;
        /// The pointer is over the widget.
        const HIGHLIGHT = 1 << 5;
        /// The widget owns the keyboard focus.
        const FOCUSED = 1 << 6;
        /// The pointer is pressing the widget.
        const PUSHED = 1 << 7;

        /// Align the label to the top edge.
        const ALIGN_TOP = 1 << 8;
        /// Align the label to the bottom edge.
        const ALIGN_BOTTOM = 1 << 9;
        /// Align the label to the left edge.
        const ALIGN_LEFT = 1 << 10;
        /// Align the label to the right edge.
        const ALIGN_RIGHT = 1 << 11;
        /// Place the label inside the widget rather than next to it.
        const ALIGN_INSIDE = 1 << 12;
        /// Clip the label to the widget rectangle.
        const ALIGN_CLIP = 1 << 13;
        /// Word-wrap the label.
        const ALIGN_WRAP = 1 << 14;

        /// All alignment bits.
        const ALIGN_MASK = Self::ALIGN_TOP.bits
            | Self::ALIGN_BOTTOM.bits
            | Self::ALIGN_LEFT.bits
            | Self::ALIGN_RIGHT.bits
            | Self::ALIGN_INSIDE.bits
            | Self::ALIGN_CLIP.bits
            | Self::ALIGN_WRAP.bits;
    }
}

impl Flags {
    /// The alignment bits of this value.
    pub fn alignment(self) -> Flags {
        self & Flags::ALIGN_MASK
    }

    /// Replace the alignment bits, leaving state bits untouched.
    pub fn with_alignment(self, align: Flags) -> Flags {
        (self - Flags::ALIGN_MASK) | (align & Flags::ALIGN_MASK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_is_separable() {
        let f = Flags::PUSHED | Flags::ALIGN_LEFT | Flags::ALIGN_INSIDE;
        assert_eq!(f.alignment(), Flags::ALIGN_LEFT | Flags::ALIGN_INSIDE);
        assert!(f.contains(Flags::PUSHED));
    }

    #[test]
    fn with_alignment_replaces_only_alignment() {
        let f = Flags::FOCUSED | Flags::ALIGN_RIGHT;
        let g = f.with_alignment(Flags::ALIGN_LEFT | Flags::ALIGN_INSIDE);
        assert!(g.contains(Flags::FOCUSED));
        assert!(g.contains(Flags::ALIGN_LEFT));
        assert!(!g.contains(Flags::ALIGN_RIGHT));
    }
}
