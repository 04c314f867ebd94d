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

//! Label measurement.

use unicode_segmentation::UnicodeSegmentation;

use crate::Size;

/// A function measuring a label's natural pixel extent at a font size.
///
/// Real text measurement lives in the rendering backend; widgets that need
/// extents during layout go through a function of this type so that a
/// backend (or a test) can substitute its own metrics.
pub type LabelMeasure = fn(&str, f32) -> Size;

/// Measure a label with the built-in fixed-advance metrics.
///
/// Width is the grapheme count of the longest line times half the font
/// size; height is the line count times 1.2 times the font size, both
/// rounded. Deterministic, and a reasonable stand-in for a real font until
/// a backend provides one.
pub fn measure_label(text: &str, size: f32) -> Size {
    if text.is_empty() {
        return Size::ZERO;
    }
    let advance = (size * 0.5).round() as i32;
    let line_height = (size * 1.2).round() as i32;
    let mut widest = 0;
    let mut lines = 0;
    for line in text.split('\n') {
        lines += 1;
        widest = widest.max(line.graphemes(true).count() as i32);
    }
    Size::new(widest * advance, lines * line_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_label_has_no_extent() {
        assert_eq!(measure_label("", 12.0), Size::ZERO);
    }

    #[test]
    fn single_line() {
        // 5 graphemes at advance 6, one line at height 14.
        assert_eq!(measure_label("Hello", 12.0), Size::new(30, 14));
    }

    #[test]
    fn multi_line_takes_widest() {
        let size = measure_label("a\nlonger\nxx", 10.0);
        assert_eq!(size, Size::new(6 * 5, 3 * 12));
    }

    #[test]
    fn graphemes_not_bytes() {
        // A combining sequence counts as one cell.
        let composed = "e\u{301}"; // e + combining acute
        assert_eq!(measure_label(composed, 12.0).width, 6);
    }
}
