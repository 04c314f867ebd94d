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

//! Styles and the named style registry.
//!
//! A [`Style`] maps semantic roles (box, colors, label size) to values.
//! Every field is optional; an unset field means "use the fallback".
//! Resolution is field-by-field: a widget's local overrides sit in front of
//! its [`NamedStyle`]'s shared values, and whatever is still unset falls
//! back to hard defaults in the getters.
//!
//! Named styles are process-wide, initialized on first access from their
//! `revert` callback, and never destroyed. Mutation happens only through
//! the documented operations ([`NamedStyle::update`], [`NamedStyle::revert`]
//! and [`revert_all`]); the registry exists so that theme switching has one
//! explicit place to reach every shared style.

use std::fmt;
use std::sync::RwLock;

use fnv::FnvHashMap;
use once_cell::sync::Lazy;

use crate::boxes::{BoxStyle, DOTTED_FRAME, NO_BOX};
use crate::{Color, Flags};

/// A partial style; unset fields fall back at resolution time.
#[derive(Clone, Copy, Default)]
pub struct Style {
    box_style: Option<&'static dyn BoxStyle>,
    focus_box: Option<&'static dyn BoxStyle>,
    color: Option<Color>,
    text_color: Option<Color>,
    label_size: Option<f32>,
    highlight_color: Option<Color>,
    highlight_text_color: Option<Color>,
    selection_color: Option<Color>,
    selection_text_color: Option<Color>,
    draw_boxes_inactive: Option<bool>,
}

impl Style {
    /// This style with every unset field taken from `fallback`.
    pub fn or(self, fallback: Style) -> Style {
        Style {
            box_style: self.box_style.or(fallback.box_style),
            focus_box: self.focus_box.or(fallback.focus_box),
            color: self.color.or(fallback.color),
            text_color: self.text_color.or(fallback.text_color),
            label_size: self.label_size.or(fallback.label_size),
            highlight_color: self.highlight_color.or(fallback.highlight_color),
            highlight_text_color: self.highlight_text_color.or(fallback.highlight_text_color),
            selection_color: self.selection_color.or(fallback.selection_color),
            selection_text_color: self.selection_text_color.or(fallback.selection_text_color),
            draw_boxes_inactive: self.draw_boxes_inactive.or(fallback.draw_boxes_inactive),
        }
    }

    /// The widget's background/border box.
    pub fn box_style(&self) -> &'static dyn BoxStyle {
        self.box_style.unwrap_or(&NO_BOX)
    }

    /// The box drawn over a widget that owns the keyboard focus.
    pub fn focus_box(&self) -> &'static dyn BoxStyle {
        self.focus_box.unwrap_or(&DOTTED_FRAME)
    }

    /// The background color.
    pub fn color(&self) -> Color {
        self.color.unwrap_or(Color::GRAY75)
    }

    /// The label/text color.
    pub fn text_color(&self) -> Color {
        self.text_color.unwrap_or(Color::BLACK)
    }

    /// The label font size in pixels.
    pub fn label_size(&self) -> f32 {
        self.label_size.unwrap_or(12.0)
    }

    /// The background color under the HIGHLIGHT flag, if one is configured.
    pub fn highlight_color(&self) -> Option<Color> {
        self.highlight_color
    }

    /// The text color that goes with [`highlight_color`].
    ///
    /// [`highlight_color`]: Style::highlight_color
    pub fn highlight_text_color(&self) -> Color {
        self.highlight_text_color.unwrap_or_else(|| self.text_color())
    }

    /// The background color under the SELECTED flag.
    pub fn selection_color(&self) -> Color {
        self.selection_color.unwrap_or(Color::rgb8(0x00, 0x00, 0x80))
    }

    /// The text color under the SELECTED flag.
    pub fn selection_text_color(&self) -> Color {
        self.selection_text_color.unwrap_or(Color::WHITE)
    }

    /// Whether boxes dim their bezel shades under the INACTIVE flag.
    pub fn draw_boxes_inactive(&self) -> bool {
        self.draw_boxes_inactive.unwrap_or(true)
    }

    /// Resolve the `(background, foreground)` pair for a draw call.
    ///
    /// SELECTED takes the selection colors; otherwise HIGHLIGHT takes the
    /// highlight colors when a highlight color is configured; otherwise the
    /// plain color/text color. INACTIVE then dims the foreground toward
    /// the background.
    pub fn box_colors(&self, flags: Flags) -> (Color, Color) {
        let highlight = if flags.contains(Flags::HIGHLIGHT) {
            self.highlight_color
        } else {
            None
        };
        let (bg, mut fg) = if flags.contains(Flags::SELECTED) {
            (self.selection_color(), self.selection_text_color())
        } else if let Some(bg) = highlight {
            (bg, self.highlight_text_color())
        } else {
            (self.color(), self.text_color())
        };
        if flags.contains(Flags::INACTIVE) {
            fg = fg.inactive(bg);
        }
        (bg, fg)
    }

    pub fn set_box(&mut self, b: &'static dyn BoxStyle) {
        self.box_style = Some(b);
    }

    pub fn set_focus_box(&mut self, b: &'static dyn BoxStyle) {
        self.focus_box = Some(b);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = Some(color);
    }

    pub fn set_label_size(&mut self, size: f32) {
        self.label_size = Some(size);
    }

    pub fn set_highlight_color(&mut self, color: Color) {
        self.highlight_color = Some(color);
    }

    pub fn set_highlight_text_color(&mut self, color: Color) {
        self.highlight_text_color = Some(color);
    }

    pub fn set_selection_color(&mut self, color: Color) {
        self.selection_color = Some(color);
    }

    pub fn set_selection_text_color(&mut self, color: Color) {
        self.selection_text_color = Some(color);
    }

    pub fn set_draw_boxes_inactive(&mut self, on: bool) {
        self.draw_boxes_inactive = Some(on);
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Style")
            .field("box", &self.box_style.map(|b| b.name()))
            .field("color", &self.color)
            .field("text_color", &self.text_color)
            .field("label_size", &self.label_size)
            .finish()
    }
}

/// A revert callback: writes a named style's default values.
pub type Revert = fn(&mut Style);

struct Entry {
    style: Style,
    revert: Revert,
}

static REGISTRY: Lazy<RwLock<FnvHashMap<&'static str, Entry>>> =
    Lazy::new(|| RwLock::new(FnvHashMap::default()));

/// A shared, process-wide style, keyed by name.
///
/// The static value holds only the name and the revert callback; the
/// mutable style itself lives in the registry and is created on first
/// access by running the callback against an empty style.
pub struct NamedStyle {
    name: &'static str,
    revert: Revert,
}

impl NamedStyle {
    /// Declare a named style. Nothing is registered until first access.
    pub const fn new(name: &'static str, revert: Revert) -> NamedStyle {
        NamedStyle { name, revert }
    }

    /// The registry key.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The current shared values, initializing on first access.
    pub fn get(&self) -> Style {
        let mut registry = REGISTRY.write().expect("style registry poisoned");
        self.entry(&mut registry).style
    }

    /// Mutate the shared values in place.
    ///
    /// Every widget using this named style sees the change on its next
    /// draw; nothing is repainted automatically.
    pub fn update(&self, f: impl FnOnce(&mut Style)) {
        let mut registry = REGISTRY.write().expect("style registry poisoned");
        f(&mut self.entry(&mut registry).style);
    }

    /// Discard accumulated changes and re-run the revert callback.
    pub fn revert(&self) {
        tracing::trace!(name = self.name, "reverting named style");
        let mut registry = REGISTRY.write().expect("style registry poisoned");
        let entry = self.entry(&mut registry);
        entry.style = Style::default();
        (entry.revert)(&mut entry.style);
    }

    fn entry<'a>(&self, registry: &'a mut FnvHashMap<&'static str, Entry>) -> &'a mut Entry {
        registry.entry(self.name).or_insert_with(|| {
            tracing::trace!(name = self.name, "initializing named style");
            let mut style = Style::default();
            (self.revert)(&mut style);
            Entry {
                style,
                revert: self.revert,
            }
        })
    }
}

/// Re-run every registered style's revert callback.
///
/// The theme-switch entry point: a theme installs new defaults by calling
/// this after adjusting what the revert callbacks read.
pub fn revert_all() {
    let mut registry = REGISTRY.write().expect("style registry poisoned");
    for (name, entry) in registry.iter_mut() {
        tracing::trace!(name, "reverting named style");
        entry.style = Style::default();
        (entry.revert)(&mut entry.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxes::{THIN_UP_BOX, UP_BOX};

    #[test]
    fn unset_fields_fall_back_to_hard_defaults() {
        let style = Style::default();
        assert_eq!(style.box_style().name(), "none");
        assert_eq!(style.color(), Color::GRAY75);
        assert_eq!(style.text_color(), Color::BLACK);
        assert_eq!(style.label_size(), 12.0);
        assert!(style.draw_boxes_inactive());
    }

    #[test]
    fn or_is_field_by_field() {
        let mut local = Style::default();
        local.set_color(Color::WHITE);
        let mut shared = Style::default();
        shared.set_color(Color::BLACK);
        shared.set_label_size(10.0);
        shared.set_box(&UP_BOX);

        let resolved = local.or(shared);
        assert_eq!(resolved.color(), Color::WHITE);
        assert_eq!(resolved.label_size(), 10.0);
        assert_eq!(resolved.box_style().name(), "up");
    }

    #[test]
    fn box_colors_resolve_flags() {
        let mut style = Style::default();
        style.set_color(Color::GRAY75);
        style.set_text_color(Color::BLACK);

        let (bg, fg) = style.box_colors(Flags::empty());
        assert_eq!((bg, fg), (Color::GRAY75, Color::BLACK));

        let (bg, fg) = style.box_colors(Flags::SELECTED);
        assert_eq!(bg, style.selection_color());
        assert_eq!(fg, Color::WHITE);

        let (bg, fg) = style.box_colors(Flags::INACTIVE);
        assert_eq!(bg, Color::GRAY75);
        assert_eq!(fg, Color::BLACK.inactive(Color::GRAY75));
    }

    #[test]
    fn named_styles_initialize_revert_and_update() {
        static TEST_STYLE: NamedStyle = NamedStyle::new("test-style-registry", |s| {
            s.set_label_size(10.0);
            s.set_box(&THIN_UP_BOX);
        });

        assert_eq!(TEST_STYLE.get().label_size(), 10.0);
        assert_eq!(TEST_STYLE.get().box_style().name(), "thin_up");

        TEST_STYLE.update(|s| s.set_label_size(16.0));
        assert_eq!(TEST_STYLE.get().label_size(), 16.0);

        TEST_STYLE.revert();
        assert_eq!(TEST_STYLE.get().label_size(), 10.0);
    }
}
