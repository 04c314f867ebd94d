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

//! A bottom-anchored status strip with three text slots.
//!
//! The strip repositions itself against the bottom of its parent's content
//! area after every layout pass and shortens any sibling that would extend
//! over it. Text goes into one of three independently managed slots:
//!
//! ```
//! use bezel::{Position, StatusBar};
//!
//! let mut bar = StatusBar::new(24);
//! bar.set("Ready", Position::Left);
//! bar.set_fmt(Position::Right, format_args!("{} items", 5));
//! bar.set("", Position::Left); // empty text releases the slot
//! ```

use std::any::Any;
use std::fmt;

use crate::boxes::{BoxInfo, BoxStyle, FLAT_BOX, THIN_DOWN_BOX, THIN_UP_BOX};
use crate::style::NamedStyle;
use crate::text::{measure_label, LabelMeasure};
use crate::{Color, Flags, Frame, Pod, Rect, RenderContext, Style, Widget};

/// Extra vertical/horizontal breathing room around a slot, in pixels.
const BORDER_WIDTH: i32 = 2;

/// One of the three text slots of a [`StatusBar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Left,
    Center,
    Right,
}

impl Position {
    /// All slots, in update order.
    pub const ALL: [Position; 3] = [Position::Left, Position::Center, Position::Right];

    fn index(self) -> usize {
        self as usize
    }
}

/// A status bar strip that manages its own geometry and text.
///
/// Only the height matters at construction; width and vertical position
/// are recomputed from the parent on every layout pass. Slot widgets are
/// created lazily by [`set`] and destroyed by setting empty text.
///
/// [`set`]: StatusBar::set
pub struct StatusBar {
    rect: Rect,
    flags: Flags,
    shared: &'static NamedStyle,
    local: Style,
    slots: [Option<Frame>; 3],
    slot_boxes: [&'static dyn BoxStyle; 3],
    measure: LabelMeasure,
    damage: bool,
}

impl StatusBar {
    /// The shared style for status bars: a thin raised box, theme gray,
    /// small labels.
    pub const DEFAULT_STYLE: NamedStyle = NamedStyle::new("StatusBar", |s| {
        s.set_box(&THIN_UP_BOX);
        s.set_color(Color::GRAY75);
        s.set_label_size(10.0);
    });

    /// Create a strip of the given height.
    pub fn new(height: i32) -> StatusBar {
        let mut local = Style::default();
        local.set_box(&THIN_DOWN_BOX);
        StatusBar {
            rect: Rect::new(0, 0, 0, height),
            flags: Flags::ALIGN_INSIDE,
            shared: &Self::DEFAULT_STYLE,
            local,
            slots: [None, None, None],
            slot_boxes: [&FLAT_BOX; 3],
            measure: measure_label,
            damage: true,
        }
    }

    /// The fully resolved style: local overrides over the shared style.
    pub fn style(&self) -> Style {
        self.local.or(self.shared.get())
    }

    /// Override the strip's own box locally.
    pub fn set_box(&mut self, b: &'static dyn BoxStyle) {
        self.local.set_box(b);
        self.damage = true;
    }

    /// Substitute the label measuring function (backends, tests).
    pub fn set_measure(&mut self, measure: LabelMeasure) {
        self.measure = measure;
        for pos in Position::ALL.iter() {
            self.update_slot(*pos);
        }
    }

    /// Set the text at a slot, allocating or releasing the slot widget.
    ///
    /// Empty text destroys the slot's widget and clears the slot; this is
    /// idempotent. Non-empty text creates the widget on first use, then
    /// replaces its label and recomputes its geometry.
    pub fn set(&mut self, text: &str, pos: Position) {
        let i = pos.index();
        if text.is_empty() {
            if self.slots[i].take().is_some() {
                self.damage = true;
            }
            return;
        }
        if self.slots[i].is_none() {
            let info = *self.style().box_style().info();
            let mut slot = Frame::new(Rect::new(info.dx, info.dh + BORDER_WIDTH, 10, 10));
            slot.set_box(self.slot_boxes[i]);
            slot.set_align(Flags::ALIGN_LEFT | Flags::ALIGN_INSIDE);
            self.slots[i] = Some(slot);
        }
        if let Some(slot) = self.slots[i].as_mut() {
            slot.set_label(text);
        }
        tracing::trace!(?pos, "status text set");
        self.update_slot(pos);
        self.damage = true;
    }

    /// Set formatted text at a slot.
    ///
    /// Renders through a growable buffer, so the formatted result can be
    /// any length:
    ///
    /// ```
    /// # use bezel::{Position, StatusBar};
    /// # let mut bar = StatusBar::new(24);
    /// bar.set_fmt(Position::Center, format_args!("{} of {}", 3, 10));
    /// ```
    pub fn set_fmt(&mut self, pos: Position, args: fmt::Arguments) {
        let text = args.to_string();
        self.set(&text, pos);
    }

    /// Set the box used by all three slots.
    pub fn child_box(&mut self, b: &'static dyn BoxStyle) {
        for pos in Position::ALL.iter() {
            self.child_box_at(b, *pos);
        }
    }

    /// Set the box used by one slot.
    pub fn child_box_at(&mut self, b: &'static dyn BoxStyle, pos: Position) {
        let i = pos.index();
        self.slot_boxes[i] = b;
        if let Some(slot) = self.slots[i].as_mut() {
            slot.set_box(b);
        }
        self.update_slot(pos);
    }

    /// The slot widget at a position, if the slot is allocated.
    pub fn slot(&self, pos: Position) -> Option<&Frame> {
        self.slots[pos.index()].as_ref()
    }

    /// Whether the strip wants a repaint.
    pub fn needs_repaint(&self) -> bool {
        self.damage
    }

    /// Anchor the strip to the bottom of its parent's content area and
    /// shorten any sibling that would extend over it.
    ///
    /// `parent` is the parent's own rectangle and `parent_box` its box
    /// insets. Siblings are never moved, only shortened, floored at zero
    /// height; a shortened sibling that is itself a container has its
    /// child-size baselines invalidated (direct children only — geometry
    /// changes do not propagate deeper).
    ///
    /// Called by the owning [`Group`] after its generic layout pass, so
    /// the strip reads finalized parent dimensions and sibling rects.
    ///
    /// [`Group`]: crate::Group
    pub fn resize_from_parent<'a>(
        &mut self,
        parent: Rect,
        parent_box: &BoxInfo,
        siblings: impl IntoIterator<Item = &'a mut Pod>,
    ) {
        self.rect.x = parent_box.dx;
        self.rect.width = parent.width - parent_box.dw;
        self.rect.y = parent.height - parent_box.dh - self.rect.height;
        tracing::trace!(rect = ?self.rect, "status bar anchored");
        for pod in siblings {
            let r = pod.rect();
            let overlap = r.bottom() - self.rect.y;
            if overlap > 0 {
                let mut shrunk = r;
                shrunk.height = (r.height - overlap).max(0);
                pod.set_rect(shrunk);
                if let Some(group) = pod.widget_mut().as_group_mut() {
                    group.init_sizes();
                }
            }
        }
        for pos in Position::ALL.iter() {
            self.update_slot(*pos);
        }
        self.damage = true;
    }

    /// Recompute a slot's rectangle from its measured text extent.
    fn update_slot(&mut self, pos: Position) {
        let style = self.style();
        let strip_info = *style.box_style().info();
        let slot_info = *self.slot_boxes[pos.index()].info();
        let rect = self.rect;
        let measure = self.measure;
        let slot = match self.slots[pos.index()].as_mut() {
            Some(slot) => slot,
            None => return,
        };
        let extent = measure(slot.label(), slot.label_size());
        let width = extent.width + (slot_info.dw + 1) * 2;
        let height = rect.height - (strip_info.dh + BORDER_WIDTH) * 2;
        // CENTER and RIGHT measure from the strip's right edge in parent
        // coordinates, not the content area; LEFT respects the inset.
        let x = match pos {
            Position::Left => strip_info.dx,
            Position::Center => (rect.right() - width) / 2,
            Position::Right => rect.right() - width - strip_info.dw - BORDER_WIDTH,
        };
        slot.set_rect(Rect::new(x, slot.rect().y, width, height));
        slot.redraw();
    }
}

impl Widget for StatusBar {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        if rect != self.rect {
            self.rect = rect;
            self.damage = true;
        }
    }

    fn layout(&mut self) {
        // the strip's own pass refreshes the slots; the anchored
        // correction runs afterward in the parent's pass
        for pos in Position::ALL.iter() {
            self.update_slot(*pos);
        }
    }

    fn draw(&mut self, ctx: &mut dyn RenderContext) {
        let style = self.style();
        style.box_style().draw(self.rect, &style, self.flags, ctx);
        ctx.push_translation(self.rect.x, self.rect.y);
        for slot in self.slots.iter_mut().flatten() {
            slot.draw(ctx);
        }
        ctx.pop_translation();
        self.damage = false;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_releases_the_slot() {
        let mut bar = StatusBar::new(24);
        bar.set("Hello", Position::Right);
        assert!(bar.slot(Position::Right).is_some());
        bar.set("", Position::Right);
        assert!(bar.slot(Position::Right).is_none());
        // idempotent on an empty slot
        bar.set("", Position::Right);
        assert!(bar.slot(Position::Right).is_none());
    }

    #[test]
    fn slots_are_independent() {
        let mut bar = StatusBar::new(24);
        bar.set("L", Position::Left);
        bar.set("R", Position::Right);
        bar.set("", Position::Left);
        assert!(bar.slot(Position::Left).is_none());
        assert_eq!(bar.slot(Position::Right).map(Frame::label), Some("R"));
    }

    #[test]
    fn set_fmt_renders_through_growable_buffer() {
        let mut bar = StatusBar::new(24);
        let long = "x".repeat(2048); // would overflow a fixed buffer
        bar.set_fmt(Position::Center, format_args!("{} items, {}", 5, long));
        let label = bar.slot(Position::Center).map(Frame::label);
        assert!(label.map_or(false, |l| l.starts_with("5 items, xxx")));
        assert!(label.map_or(false, |l| l.len() > 2048));
    }

    #[test]
    fn child_box_applies_to_live_slots() {
        let mut bar = StatusBar::new(24);
        bar.set("text", Position::Left);
        bar.child_box(&THIN_DOWN_BOX);
        let slot = match bar.slot(Position::Left) {
            Some(slot) => slot,
            None => panic!("slot missing"),
        };
        assert_eq!(slot.style().box_style().name(), "thin_down");
    }
}
