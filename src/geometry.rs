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

//! Integer pixel geometry.

use crate::boxes::BoxInfo;

/// A rectangle in parent-relative integer pixel coordinates.
///
/// Widths and heights are expected to be non-negative; a rectangle with a
/// zero or negative dimension is *empty* and every drawing operation treats
/// it as a silent no-op rather than an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// A width/height pair in integer pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Create a new rectangle.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// The x coordinate one past the right edge.
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// The y coordinate one past the bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// The size of this rectangle.
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Whether this rectangle encloses no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// The content rectangle left inside a border described by `info`.
    pub const fn inset(&self, info: &BoxInfo) -> Rect {
        Rect {
            x: self.x + info.dx,
            y: self.y + info.dy,
            width: self.width - info.dw,
            height: self.height - info.dh,
        }
    }

    /// Check to see if this rectangle is legit.
    ///
    /// Logs a warning if the rectangle has a negative dimension.
    pub fn debug_check(&self, name: &str) {
        if self.width < 0 || self.height < 0 {
            tracing::warn!("Bad Rect passed to {}: {:?}", name, self);
        }
    }
}

impl Size {
    /// A size of zero width and height.
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    /// Create a new size.
    pub const fn new(width: i32, height: i32) -> Size {
        Size { width, height }
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Size {
        Size { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rects() {
        assert!(Rect::new(0, 0, 0, 10).is_empty());
        assert!(Rect::new(0, 0, 10, 0).is_empty());
        assert!(Rect::new(5, 5, -1, 10).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.size(), Size::new(30, 40));
    }

    #[test]
    fn inset_by_box_info() {
        let info = BoxInfo {
            dx: 2,
            dy: 2,
            dw: 4,
            dh: 4,
            fills_rectangle: 3,
        };
        let r = Rect::new(0, 0, 100, 50).inset(&info);
        assert_eq!(r, Rect::new(2, 2, 96, 46));
    }
}
