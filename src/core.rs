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

//! Core types for the widget tree.

use std::any::Any;

use crate::{Group, Rect, RenderContext};

/// The trait implemented by everything that lives in a widget tree.
///
/// A widget owns its rectangle in parent-relative pixel coordinates.
/// Containers own their children wrapped in [`Pod`]s and drive the two
/// passes: `layout` recomputes geometry top-down, `draw` emits backend
/// primitives and clears damage.
pub trait Widget {
    /// This widget's rectangle, relative to its parent's origin.
    fn rect(&self) -> Rect;

    /// Move/resize this widget. Setting a changed rectangle damages it.
    fn set_rect(&mut self, rect: Rect);

    /// Recompute geometry. Containers recurse into children.
    fn layout(&mut self) {}

    /// Draw this widget at its rectangle in the current translated frame.
    fn draw(&mut self, ctx: &mut dyn RenderContext);

    /// This widget as [`Any`], for downcasting through a [`Pod`].
    fn as_any(&self) -> &dyn Any;

    /// Mutable [`Any`] access, for downcasting through a [`Pod`].
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// This widget as a [`Group`], if it is a container.
    fn as_group_mut(&mut self) -> Option<&mut Group> {
        None
    }
}

/// A container's handle to one child widget.
///
/// Owns the boxed child and is the only way containers address children,
/// so sibling-geometry passes can work with disjoint `&mut` borrows over a
/// pod slice without caring what concrete widgets sit inside.
pub struct Pod {
    widget: Box<dyn Widget>,
}

impl Pod {
    /// Box a widget into a pod.
    pub fn new(widget: impl Widget + 'static) -> Pod {
        Pod {
            widget: Box::new(widget),
        }
    }

    /// The child widget.
    pub fn widget(&self) -> &dyn Widget {
        &*self.widget
    }

    /// The child widget, mutably.
    pub fn widget_mut(&mut self) -> &mut dyn Widget {
        &mut *self.widget
    }

    /// Downcast the child to a concrete widget type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.widget.as_any().downcast_ref()
    }

    /// Downcast the child to a concrete widget type, mutably.
    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.widget.as_any_mut().downcast_mut()
    }

    /// The child's rectangle.
    pub fn rect(&self) -> Rect {
        self.widget.rect()
    }

    /// Move/resize the child.
    pub fn set_rect(&mut self, rect: Rect) {
        rect.debug_check("Pod::set_rect");
        self.widget.set_rect(rect);
    }
}
