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

//! A plain box-and-label widget.

use std::any::Any;

use crate::style::NamedStyle;
use crate::text::measure_label;
use crate::{BoxStyle, Flags, Rect, RenderContext, Style, Widget};

/// The simplest widget: a box, an optional label, no behavior.
///
/// Used directly for static text and decoration, and by containers as the
/// building block for text slots. The label is drawn inside the box's
/// content rectangle according to the alignment flags.
pub struct Frame {
    rect: Rect,
    flags: Flags,
    label: String,
    shared: &'static NamedStyle,
    local: Style,
    damage: bool,
}

impl Frame {
    /// The shared style new frames start with; every field unset, so the
    /// hard defaults apply until a theme says otherwise.
    pub const DEFAULT_STYLE: NamedStyle = NamedStyle::new("Frame", |_| {});

    /// Create a frame with no label.
    pub fn new(rect: Rect) -> Frame {
        Frame {
            rect,
            flags: Flags::ALIGN_INSIDE,
            label: String::new(),
            shared: &Self::DEFAULT_STYLE,
            local: Style::default(),
            damage: true,
        }
    }

    /// Create a frame with a label.
    pub fn with_label(rect: Rect, label: impl Into<String>) -> Frame {
        let mut frame = Frame::new(rect);
        frame.label = label.into();
        frame
    }

    /// The current label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label text, damaging the frame if it changed.
    pub fn set_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        if label != self.label {
            self.label = label;
            self.damage = true;
        }
    }

    /// The current state flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Replace the state flags.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    /// Replace only the alignment bits.
    pub fn set_align(&mut self, align: Flags) {
        self.flags = self.flags.with_alignment(align);
    }

    /// Override the box locally for this widget.
    pub fn set_box(&mut self, b: &'static dyn BoxStyle) {
        self.local.set_box(b);
        self.damage = true;
    }

    /// Override the label size locally for this widget.
    pub fn set_label_size(&mut self, size: f32) {
        self.local.set_label_size(size);
        self.damage = true;
    }

    /// Attach a different shared style.
    pub fn set_style(&mut self, shared: &'static NamedStyle) {
        self.shared = shared;
        self.damage = true;
    }

    /// The fully resolved style: local overrides over the shared style.
    pub fn style(&self) -> Style {
        self.local.or(self.shared.get())
    }

    /// The resolved label size.
    pub fn label_size(&self) -> f32 {
        self.style().label_size()
    }

    /// Whether this frame wants a repaint.
    pub fn needs_repaint(&self) -> bool {
        self.damage
    }

    /// Request a repaint.
    pub fn redraw(&mut self) {
        self.damage = true;
    }

    fn draw_label(&self, style: &Style, ctx: &mut dyn RenderContext) {
        let content = self.rect.inset(style.box_style().info());
        if content.is_empty() {
            return;
        }
        let extent = measure_label(&self.label, style.label_size());
        let x = if self.flags.contains(Flags::ALIGN_LEFT) {
            content.x
        } else if self.flags.contains(Flags::ALIGN_RIGHT) {
            content.right() - extent.width
        } else {
            content.x + (content.width - extent.width) / 2
        };
        let y = if self.flags.contains(Flags::ALIGN_TOP) {
            content.y
        } else if self.flags.contains(Flags::ALIGN_BOTTOM) {
            content.bottom() - extent.height
        } else {
            content.y + (content.height - extent.height) / 2
        };
        let (_, fg) = style.box_colors(self.flags);
        ctx.set_color(fg);
        ctx.draw_text(&self.label, x, y, style.label_size());
    }
}

impl Widget for Frame {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        if rect != self.rect {
            self.rect = rect;
            self.damage = true;
        }
    }

    fn draw(&mut self, ctx: &mut dyn RenderContext) {
        let style = self.style();
        style.box_style().draw(self.rect, &style, self.flags, ctx);
        if !self.label.is_empty() {
            self.draw_label(&style, ctx);
        }
        if self.flags.contains(Flags::FOCUSED) {
            style.focus_box().draw(self.rect, &style, self.flags, ctx);
        }
        self.damage = false;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
