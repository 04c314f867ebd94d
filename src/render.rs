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

//! The drawing backend seam.
//!
//! The toolkit core emits drawing through this trait and nothing else; the
//! windowing backend (rasterizer, display server, test recorder) implements
//! it. The interface is deliberately stateful in the immediate-mode style:
//! a current color, a current line style, and a translation stack for
//! drawing children in parent-relative coordinates.

use crate::{Color, Rect};

/// How lines and stroked rectangles are rendered.
///
/// `Dotted` is the logical alternating on/off pixel pattern used by focus
/// frames; whether the backend realizes it with a dash pattern or a stipple
/// is its own concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dotted,
}

/// The set of backend primitives the core draws with.
///
/// All coordinates are in the current translated frame. None of these
/// operations can fail; drawing into degenerate geometry is the caller's
/// responsibility to avoid.
pub trait RenderContext {
    /// Set the color used by subsequent fill, stroke, line and text calls.
    fn set_color(&mut self, color: Color);

    /// Fill `rect` with the current color.
    fn fill_rect(&mut self, rect: Rect);

    /// Outline `rect` with a one-pixel border in the current color.
    fn stroke_rect(&mut self, rect: Rect);

    /// Draw a one-pixel line between two points, inclusive.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);

    /// Set the line style for subsequent stroke and line calls.
    fn set_line_style(&mut self, style: LineStyle);

    /// Draw `text` with its top-left corner at `(x, y)` at the given size,
    /// in the current color.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: f32);

    /// Push a translation; subsequent coordinates are offset by `(dx, dy)`.
    fn push_translation(&mut self, dx: i32, dy: i32);

    /// Undo the most recent [`push_translation`].
    ///
    /// [`push_translation`]: RenderContext::push_translation
    fn pop_translation(&mut self);
}
