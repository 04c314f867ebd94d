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

//! Styled box drawing and layout primitives for GUI toolkits.
//!
//! The crate provides the rendering-independent core of a widget toolkit:
//! composable box drawing strategies driven by a shared style/flags model,
//! a layout protocol that propagates geometry changes through a widget
//! tree, and a status-strip container demonstrating child-driven layout
//! recomputation. Rasterization and the event pump live behind the
//! [`RenderContext`] seam and are a backend's concern.

#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod boxes;
mod color;
mod core;
mod flags;
mod frame;
mod geometry;
mod group;
mod render;
mod status_bar;
mod style;
mod text;

#[cfg(test)]
mod tests;

pub use crate::boxes::{
    by_name, inactive_pattern, BorderFrame, BoxInfo, BoxStyle, DottedFrame, FlatBox, FrameBox,
    HighlightBox, NoBox, BORDER_BOX, BORDER_FRAME, DOTTED_FRAME, DOWN_BOX, EMBOSSED_BOX,
    ENGRAVED_BOX, FLAT_BOX, HIGHLIGHT_DOWN_BOX, HIGHLIGHT_UP_BOX, NO_BOX, THIN_DOWN_BOX,
    THIN_UP_BOX, UP_BOX,
};
pub use crate::color::Color;
pub use crate::core::{Pod, Widget};
pub use crate::flags::Flags;
pub use crate::frame::Frame;
pub use crate::geometry::{Rect, Size};
pub use crate::group::Group;
pub use crate::render::{LineStyle, RenderContext};
pub use crate::status_bar::{Position, StatusBar};
pub use crate::style::{revert_all, NamedStyle, Revert, Style};
pub use crate::text::{measure_label, LabelMeasure};
