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

//! Box drawing strategies.
//!
//! A *box* is a named, immutable drawing strategy for a widget's background
//! and border. Boxes are singletons: widgets and styles refer to them by
//! `&'static` reference and never own them. The set of kinds is closed and
//! small, so dispatch goes through the [`BoxStyle`] trait with a fixed
//! implementer set.
//!
//! The standard set is exported as statics: [`NO_BOX`], [`FLAT_BOX`], the
//! [`FrameBox`] bezels ([`UP_BOX`], [`DOWN_BOX`], [`THIN_UP_BOX`],
//! [`THIN_DOWN_BOX`], [`ENGRAVED_BOX`], [`EMBOSSED_BOX`], [`BORDER_BOX`]),
//! [`BORDER_FRAME`], [`DOTTED_FRAME`], and the two highlight boxes.

use std::fmt;

use crate::{Color, Flags, LineStyle, Rect, RenderContext, Style};

/// Border geometry for a box.
///
/// `(dx, dy)` is the top-left content offset and `(dw, dh)` the total
/// width/height consumed by the border, so the content rectangle of `r` is
/// `(r.x + dx, r.y + dy, r.width - dw, r.height - dh)`.
///
/// `fills_rectangle` is a tri-state: [`BoxInfo::FILLS_NONE`] means the box
/// never covers its rectangle, [`BoxInfo::FILLS_ALL`] that it always does,
/// and other values encode partially opaque borders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxInfo {
    pub dx: i32,
    pub dy: i32,
    pub dw: i32,
    pub dh: i32,
    pub fills_rectangle: u8,
}

impl BoxInfo {
    /// `fills_rectangle` value for a box that never covers its rectangle.
    pub const FILLS_NONE: u8 = 0;
    /// `fills_rectangle` value for a fully opaque box.
    pub const FILLS_ALL: u8 = 3;

    /// Zero insets, never opaque.
    pub const NONE: BoxInfo = BoxInfo {
        dx: 0,
        dy: 0,
        dw: 0,
        dh: 0,
        fills_rectangle: Self::FILLS_NONE,
    };
}

/// A drawing strategy for a rectangular widget background/border.
///
/// Implementations are stateless beyond construction-time parameters. The
/// invariant to uphold is that [`info`]'s insets agree with what [`draw`]
/// actually consumes, or child content will overlap the border.
///
/// [`draw`]: BoxStyle::draw
/// [`info`]: BoxStyle::info
pub trait BoxStyle: Sync {
    /// The name this box is registered under.
    fn name(&self) -> &'static str;

    /// Draw the box into `rect`, resolving colors from `style` and `flags`.
    ///
    /// Degenerate rectangles are a silent no-op; this method cannot fail.
    fn draw(&self, rect: Rect, style: &Style, flags: Flags, ctx: &mut dyn RenderContext);

    /// Border geometry. Pure and callable without a draw context.
    fn info(&self) -> &BoxInfo;
}

impl fmt::Debug for dyn BoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BoxStyle({})", self.name())
    }
}

// ---------------------------------------------------------------------------

/// Draws nothing; a fully transparent region.
pub struct NoBox;

impl BoxStyle for NoBox {
    fn name(&self) -> &'static str {
        "none"
    }

    fn draw(&self, _rect: Rect, _style: &Style, _flags: Flags, _ctx: &mut dyn RenderContext) {}

    fn info(&self) -> &BoxInfo {
        &BoxInfo::NONE
    }
}

pub static NO_BOX: NoBox = NoBox;

// ---------------------------------------------------------------------------

/// Fills the rectangle with the style's background color.
pub struct FlatBox;

impl BoxStyle for FlatBox {
    fn name(&self) -> &'static str {
        "flat"
    }

    fn draw(&self, rect: Rect, style: &Style, flags: Flags, ctx: &mut dyn RenderContext) {
        if flags.contains(Flags::INVISIBLE) || rect.is_empty() {
            return;
        }
        let (bg, _) = style.box_colors(flags);
        ctx.set_color(bg);
        ctx.fill_rect(rect);
    }

    fn info(&self) -> &BoxInfo {
        static INFO: BoxInfo = BoxInfo {
            dx: 0,
            dy: 0,
            dw: 0,
            dh: 0,
            fills_rectangle: BoxInfo::FILLS_ALL,
        };
        &INFO
    }
}

pub static FLAT_BOX: FlatBox = FlatBox;

// ---------------------------------------------------------------------------

/// A bezel described by a compact gray-shade pattern string.
///
/// Each character encodes one edge's shade: `'A'` is black, `'X'` is white,
/// the letters between are 24 linear gray steps, and `'R'` is the theme
/// background gray. The edges are drawn as a spiral from the outside in, in
/// the cyclic order bottom, right, top, left, shrinking the working
/// rectangle by one pixel after each edge. A leading `'2'` starts the
/// spiral on the top edge instead, which mirrors exactly which pixels land
/// in the corners.
///
/// The standard up box draws `"AAWWHHTT"`; the standard down box draws
/// `"WWHHPPAA"`. The VALUE flag substitutes the pattern of the box's
/// `down` companion, so a pushed-in widget gets a visibly different bezel.
/// The INVISIBLE flag skips the interior fill.
pub struct FrameBox {
    name: &'static str,
    pattern: &'static str,
    down: Option<&'static FrameBox>,
    info: BoxInfo,
}

impl FrameBox {
    /// Create a frame box from a shade pattern.
    ///
    /// Border thickness is `pattern.len() / 2` and the content inset half
    /// of that, both fixed for the box's lifetime. The pattern minus any
    /// leading `'2'` must be non-empty, of even length, and use only the
    /// shade letters `'A'..='X'`; violating this is a construction-time
    /// contract violation and panics (at compile time for `static` boxes).
    pub const fn new(
        name: &'static str,
        pattern: &'static str,
        down: Option<&'static FrameBox>,
    ) -> FrameBox {
        let pattern = validate_pattern(pattern);
        let thickness = (pattern.len() / 2) as i32;
        FrameBox {
            name,
            pattern,
            down,
            info: BoxInfo {
                dx: thickness / 2,
                dy: thickness / 2,
                dw: thickness,
                dh: thickness,
                fills_rectangle: BoxInfo::FILLS_ALL,
            },
        }
    }

    /// The shade pattern this box draws when not pushed in.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// The box whose pattern is used under the VALUE flag.
    ///
    /// A frame box without an explicit companion is its own down box.
    pub fn down(&self) -> &FrameBox {
        match self.down {
            Some(down) => down,
            None => self,
        }
    }
}

impl BoxStyle for FrameBox {
    fn name(&self) -> &'static str {
        self.name
    }

    fn draw(&self, rect: Rect, style: &Style, flags: Flags, ctx: &mut dyn RenderContext) {
        if rect.is_empty() {
            return;
        }
        let mut pattern = self.pattern;
        if flags.contains(Flags::VALUE) {
            pattern = self.down().pattern;
        }
        let dimmed;
        if flags.contains(Flags::INACTIVE) && style.draw_boxes_inactive() {
            dimmed = inactive_pattern(pattern);
            pattern = &dimmed;
        }
        draw_bezel(pattern, rect, style, flags, ctx);
    }

    fn info(&self) -> &BoxInfo {
        &self.info
    }
}

const fn validate_pattern(pattern: &'static str) -> &'static str {
    let bytes = pattern.as_bytes();
    let mut i = 0;
    if !bytes.is_empty() && bytes[0] == b'2' {
        i = 1;
    }
    let visible = bytes.len() - i;
    assert!(visible > 0, "bezel pattern must not be empty");
    assert!(
        visible % 2 == 0,
        "bezel pattern must have an even number of shades"
    );
    while i < bytes.len() {
        assert!(
            bytes[i] >= b'A' && bytes[i] <= b'X',
            "bezel pattern shades must be letters 'A'..='X'"
        );
        i += 1;
    }
    pattern
}

/// Remap a pattern's shades toward the mid-gray band for INACTIVE drawing.
///
/// Each shade letter becomes `'M' + (c - 'A') / 3`; a leading `'2'` mode
/// character passes through unchanged.
pub fn inactive_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut shades = pattern.as_bytes();
    if let [b'2', rest @ ..] = shades {
        out.push('2');
        shades = rest;
    }
    for &c in shades {
        out.push((b'M' + (c - b'A') / 3) as char);
    }
    out
}

/// Interpret a shade pattern as a spiral of edge draws into `rect`.
fn draw_bezel(pattern: &str, rect: Rect, style: &Style, flags: Flags, ctx: &mut dyn RenderContext) {
    let shades = pattern.as_bytes();
    let mut r = rect;
    let mut i = 0;
    let mut top_first = false;
    if shades[0] == b'2' {
        i = 1;
        top_first = true;
    }
    loop {
        if !top_first {
            // bottom edge
            ctx.set_color(Color::from_ramp(shades[i]));
            i += 1;
            ctx.draw_line(r.x, r.bottom() - 1, r.right() - 1, r.bottom() - 1);
            r.height -= 1;
            if r.height <= 0 {
                return;
            }
            // right edge
            ctx.set_color(Color::from_ramp(shades[i]));
            i += 1;
            ctx.draw_line(r.right() - 1, r.y, r.right() - 1, r.bottom() - 1);
            r.width -= 1;
            if r.width <= 0 {
                return;
            }
            if i == shades.len() {
                break;
            }
        }
        top_first = false;
        // top edge
        ctx.set_color(Color::from_ramp(shades[i]));
        i += 1;
        ctx.draw_line(r.x, r.y, r.right() - 1, r.y);
        r.y += 1;
        r.height -= 1;
        if r.height <= 0 {
            return;
        }
        // left edge
        ctx.set_color(Color::from_ramp(shades[i]));
        i += 1;
        ctx.draw_line(r.x, r.y, r.x, r.bottom() - 1);
        r.x += 1;
        r.width -= 1;
        if r.width <= 0 {
            return;
        }
        if i == shades.len() {
            break;
        }
    }
    if !flags.contains(Flags::INVISIBLE) {
        let (bg, _) = style.box_colors(flags);
        ctx.set_color(bg);
        ctx.fill_rect(r);
    }
}

/// A pushed-down button bezel.
pub static DOWN_BOX: FrameBox = FrameBox::new("down", "WWHHPPAA", None);

/// A raised button bezel; draws [`DOWN_BOX`] under the VALUE flag.
pub static UP_BOX: FrameBox = FrameBox::new("up", "AAWWHHTT", Some(&DOWN_BOX));

/// One-pixel-thick inset bezel.
pub static THIN_DOWN_BOX: FrameBox = FrameBox::new("thin_down", "WWHH", None);

/// One-pixel-thick raised bezel.
pub static THIN_UP_BOX: FrameBox = FrameBox::new("thin_up", "HHWW", Some(&THIN_DOWN_BOX));

/// Two-pixel engraved line around the edge.
pub static ENGRAVED_BOX: FrameBox = FrameBox::new("engraved", "2HHWWWWHH", Some(&DOWN_BOX));

/// Two-pixel embossed line around the edge.
pub static EMBOSSED_BOX: FrameBox = FrameBox::new("embossed", "2WWHHHHWW", Some(&DOWN_BOX));

/// One-pixel gray line around the rectangle.
pub static BORDER_BOX: FrameBox = FrameBox::new("border", "HHHH", Some(&DOWN_BOX));

// ---------------------------------------------------------------------------

/// Strokes the rectangle outline in the style's text color; no interior.
///
/// A compatibility box kept for widgets that want a colored edge and an
/// untouched interior.
pub struct BorderFrame;

impl BoxStyle for BorderFrame {
    fn name(&self) -> &'static str {
        "border_frame"
    }

    fn draw(&self, rect: Rect, style: &Style, _flags: Flags, ctx: &mut dyn RenderContext) {
        if rect.is_empty() {
            return;
        }
        ctx.set_color(style.text_color());
        ctx.stroke_rect(rect);
    }

    fn info(&self) -> &BoxInfo {
        static INFO: BoxInfo = BoxInfo {
            dx: 1,
            dy: 1,
            dw: 2,
            dh: 2,
            fills_rectangle: BoxInfo::FILLS_NONE,
        };
        &INFO
    }
}

pub static BORDER_FRAME: BorderFrame = BorderFrame;

// ---------------------------------------------------------------------------

/// The keyboard focus indicator.
///
/// Draws nothing unless the FOCUSED flag is set; otherwise a dotted
/// rectangle outline one pixel inside the edge. Rectangles too small to
/// show a visible frame degenerate to a no-op.
pub struct DottedFrame;

impl BoxStyle for DottedFrame {
    fn name(&self) -> &'static str {
        "dotted_frame"
    }

    fn draw(&self, rect: Rect, style: &Style, flags: Flags, ctx: &mut dyn RenderContext) {
        if !flags.contains(Flags::FOCUSED) {
            return;
        }
        let mut r = rect;
        if r.width > 4 {
            r.x += 1;
            r.width -= 2;
        } else if r.width > 3 {
            r.width -= 1;
        } else {
            return;
        }
        if r.height > 4 {
            r.y += 1;
            r.height -= 2;
        } else if r.height > 3 {
            r.height -= 1;
        } else {
            return;
        }
        let (_, fg) = style.box_colors(flags);
        ctx.set_color(fg);
        ctx.set_line_style(LineStyle::Dotted);
        ctx.stroke_rect(r);
        ctx.set_line_style(LineStyle::Solid);
    }

    fn info(&self) -> &BoxInfo {
        &BoxInfo::NONE
    }
}

pub static DOTTED_FRAME: DottedFrame = DottedFrame;

// ---------------------------------------------------------------------------

/// Draws as [`FlatBox`] normally and as its `active` box when any of
/// HIGHLIGHT, SELECTED, VALUE or PUSHED is set.
///
/// Used to make frames appear when the pointer reaches a widget or the
/// widget turns on. Geometry always comes from the active box, so content
/// does not shift when the frame appears.
pub struct HighlightBox {
    name: &'static str,
    active: &'static dyn BoxStyle,
}

impl HighlightBox {
    /// Create a highlight box that shows `active` when lit up.
    pub const fn new(name: &'static str, active: &'static dyn BoxStyle) -> HighlightBox {
        HighlightBox { name, active }
    }
}

impl BoxStyle for HighlightBox {
    fn name(&self) -> &'static str {
        self.name
    }

    fn draw(&self, rect: Rect, style: &Style, flags: Flags, ctx: &mut dyn RenderContext) {
        if flags.intersects(Flags::HIGHLIGHT | Flags::SELECTED | Flags::VALUE | Flags::PUSHED) {
            self.active.draw(rect, style, flags, ctx);
        } else {
            FLAT_BOX.draw(rect, style, flags, ctx);
        }
    }

    fn info(&self) -> &BoxInfo {
        self.active.info()
    }
}

/// Flat normally, [`THIN_UP_BOX`] when lit up.
pub static HIGHLIGHT_UP_BOX: HighlightBox = HighlightBox::new("highlight_up", &THIN_UP_BOX);

/// Flat normally, [`THIN_DOWN_BOX`] when lit up.
pub static HIGHLIGHT_DOWN_BOX: HighlightBox = HighlightBox::new("highlight_down", &THIN_DOWN_BOX);

// ---------------------------------------------------------------------------

/// Look up a standard box by its registered name.
pub fn by_name(name: &str) -> Option<&'static dyn BoxStyle> {
    Some(match name {
        "none" => &NO_BOX,
        "flat" => &FLAT_BOX,
        "up" => &UP_BOX,
        "down" => &DOWN_BOX,
        "thin_up" => &THIN_UP_BOX,
        "thin_down" => &THIN_DOWN_BOX,
        "engraved" => &ENGRAVED_BOX,
        "embossed" => &EMBOSSED_BOX,
        "border" => &BORDER_BOX,
        "border_frame" => &BORDER_FRAME,
        "dotted_frame" => &DOTTED_FRAME,
        "highlight_up" => &HIGHLIGHT_UP_BOX,
        "highlight_down" => &HIGHLIGHT_DOWN_BOX,
        _ => return None,
    })
}
