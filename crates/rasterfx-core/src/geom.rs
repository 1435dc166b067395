/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel coordinate geometry.

/// A pixel position, origin at the top left corner.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Point {
    pub x: usize,
    pub y: usize
}

impl Point {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Point {
        Point { x, y }
    }
}

/// An axis aligned rectangle in pixel coordinates.
///
/// `x` and `y` describe the top left corner, `width` and `height` the
/// extent to the right and downwards.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rect {
    pub x:      usize,
    pub y:      usize,
    pub width:  usize,
    pub height: usize
}

impl Rect {
    #[must_use]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Rect {
        Rect {
            x,
            y,
            width,
            height
        }
    }

    /// A rectangle anchored at the origin.
    #[must_use]
    pub const fn from_size(width: usize, height: usize) -> Rect {
        Rect::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// One past the rightmost column covered by this rectangle.
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the bottom row covered by this rectangle.
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }
}

/// An inclusive bounding box, both corner points are part of the box.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point
}

impl Bounds {
    /// A degenerate box covering the single pixel `p`.
    #[must_use]
    pub const fn at(p: Point) -> Bounds {
        Bounds { min: p, max: p }
    }

    /// Width of the box, counting both corners.
    pub const fn width(&self) -> usize {
        self.max.x - self.min.x + 1
    }

    /// Height of the box, counting both corners.
    pub const fn height(&self) -> usize {
        self.max.y - self.min.y + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(2, 3, 4, 5);
        assert_eq!(r.right(), 6);
        assert_eq!(r.bottom(), 8);
        assert!(!r.is_empty());
        assert!(Rect::new(1, 1, 0, 5).is_empty());
    }

    #[test]
    fn bounds_are_inclusive() {
        let b = Bounds {
            min: Point::new(1, 1),
            max: Point::new(2, 2)
        };
        assert_eq!(b.width(), 2);
        assert_eq!(b.height(), 2);
        assert_eq!(Bounds::at(Point::new(5, 6)).width(), 1);
    }
}
