// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0

//! A backend that records primitives instead of rasterizing them.

use crate::{BoxStyle, Color, Flags, LineStyle, Rect, RenderContext, Style};

/// One recorded backend primitive.
///
/// Rectangles and line endpoints are recorded in absolute coordinates;
/// the recorder applies the translation stack so tests can assert against
/// screen positions directly.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Color(Color),
    FillRect(Rect),
    StrokeRect(Rect),
    Line(i32, i32, i32, i32),
    LineStyle(LineStyle),
    Text(String, i32, i32),
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
    offsets: Vec<(i32, i32)>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    fn offset(&self) -> (i32, i32) {
        self.offsets
            .iter()
            .fold((0, 0), |(x, y), (dx, dy)| (x + dx, y + dy))
    }

    fn place(&self, rect: Rect) -> Rect {
        let (dx, dy) = self.offset();
        Rect::new(rect.x + dx, rect.y + dy, rect.width, rect.height)
    }

    /// Number of line draws recorded.
    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Line(..)))
            .count()
    }

    /// All drawn text runs, in draw order.
    pub fn texts(&self) -> Vec<(String, i32, i32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(s, x, y) => Some((s.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl RenderContext for Recorder {
    fn set_color(&mut self, color: Color) {
        self.ops.push(Op::Color(color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        let rect = self.place(rect);
        self.ops.push(Op::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        let rect = self.place(rect);
        self.ops.push(Op::StrokeRect(rect));
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let (dx, dy) = self.offset();
        self.ops.push(Op::Line(x0 + dx, y0 + dy, x1 + dx, y1 + dy));
    }

    fn set_line_style(&mut self, style: LineStyle) {
        self.ops.push(Op::LineStyle(style));
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, _size: f32) {
        let (dx, dy) = self.offset();
        self.ops.push(Op::Text(text.to_owned(), x + dx, y + dy));
    }

    fn push_translation(&mut self, dx: i32, dy: i32) {
        self.offsets.push((dx, dy));
    }

    fn pop_translation(&mut self) {
        self.offsets.pop();
    }
}

/// Draw a box directly and return the recorded primitives.
pub fn draw_box(b: &dyn BoxStyle, rect: Rect, style: &Style, flags: Flags) -> Vec<Op> {
    let mut recorder = Recorder::new();
    b.draw(rect, style, flags, &mut recorder);
    recorder.ops
}
