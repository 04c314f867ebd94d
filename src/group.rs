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

//! A child-owning container widget.

use std::any::Any;

use crate::status_bar::StatusBar;
use crate::style::NamedStyle;
use crate::{BoxStyle, Flags, Pod, Rect, RenderContext, Style, Widget};

/// A container that owns an ordered list of child widgets.
///
/// Children live in parent-relative coordinates. The layout pass runs the
/// generic per-child pass first and corrects anchored strips strictly
/// last, so a strip is never clobbered by a later generic step; sibling
/// geometry adjustments are mediated here, where disjoint `&mut` borrows
/// over the child list are possible.
pub struct Group {
    rect: Rect,
    flags: Flags,
    shared: &'static NamedStyle,
    local: Style,
    children: Vec<Pod>,
    initial_sizes: Option<Vec<Rect>>,
    damage: bool,
}

impl Group {
    /// The shared style new groups start with.
    pub const DEFAULT_STYLE: NamedStyle = NamedStyle::new("Group", |_| {});

    /// Create an empty group.
    pub fn new(rect: Rect) -> Group {
        Group {
            rect,
            flags: Flags::empty(),
            shared: &Self::DEFAULT_STYLE,
            local: Style::default(),
            children: Vec::new(),
            initial_sizes: None,
            damage: true,
        }
    }

    /// Append a child. Returns the pod wrapping it.
    pub fn add(&mut self, widget: impl Widget + 'static) -> &mut Pod {
        // the recorded baselines no longer describe the child list
        self.initial_sizes = None;
        self.children.push(Pod::new(widget));
        self.damage = true;
        match self.children.last_mut() {
            Some(pod) => pod,
            None => unreachable!(),
        }
    }

    /// The children, in add order.
    pub fn children(&self) -> &[Pod] {
        &self.children
    }

    /// The children, mutably.
    pub fn children_mut(&mut self) -> &mut [Pod] {
        &mut self.children
    }

    /// Override the box locally for this group.
    pub fn set_box(&mut self, b: &'static dyn BoxStyle) {
        self.local.set_box(b);
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

    /// This group's content rectangle in its own coordinate frame.
    pub fn content_rect(&self) -> Rect {
        let info = self.style().box_style().info();
        Rect::new(
            info.dx,
            info.dy,
            self.rect.width - info.dw,
            self.rect.height - info.dh,
        )
    }

    /// Discard the recorded child-size baselines.
    ///
    /// The next layout pass re-captures them. Called when a sibling pass
    /// has changed child geometry out from under this group.
    pub fn init_sizes(&mut self) {
        self.initial_sizes = None;
    }

    /// The recorded child-size baselines, if a layout pass has run since
    /// the last [`init_sizes`].
    ///
    /// [`init_sizes`]: Group::init_sizes
    pub fn initial_sizes(&self) -> Option<&[Rect]> {
        self.initial_sizes.as_deref()
    }

    /// Whether this group wants a repaint.
    pub fn needs_repaint(&self) -> bool {
        self.damage
    }

    /// Correct every anchored strip among the children, last.
    ///
    /// Runs after the generic pass so the strip reads finalized parent
    /// dimensions and accurate sibling rectangles.
    fn place_anchored(&mut self) {
        let parent_rect = self.rect;
        let info = *self.style().box_style().info();
        for i in 0..self.children.len() {
            let (head, tail) = self.children.split_at_mut(i);
            let (pod, rest) = match tail.split_first_mut() {
                Some(split) => split,
                None => break,
            };
            if let Some(strip) = pod.downcast_mut::<StatusBar>() {
                strip.resize_from_parent(
                    parent_rect,
                    &info,
                    head.iter_mut().chain(rest.iter_mut()),
                );
            }
        }
    }
}

impl Widget for Group {
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
        self.rect.debug_check("Group::layout");
        tracing::trace!(children = self.children.len(), "group layout pass");
        if self.initial_sizes.is_none() {
            self.initial_sizes = Some(self.children.iter().map(Pod::rect).collect());
        }
        for child in &mut self.children {
            child.widget_mut().layout();
        }
        self.place_anchored();
    }

    fn draw(&mut self, ctx: &mut dyn RenderContext) {
        let style = self.style();
        style.box_style().draw(self.rect, &style, self.flags, ctx);
        ctx.push_translation(self.rect.x, self.rect.y);
        for child in &mut self.children {
            child.widget_mut().draw(ctx);
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

    fn as_group_mut(&mut self) -> Option<&mut Group> {
        Some(self)
    }
}
