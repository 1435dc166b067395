/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scoped pixel buffer views
//!
//! This module encapsulates the two guard types handed out by
//! [`RasterImage::pixels`](crate::image::RasterImage::pixels) and
//! [`RasterImage::pixels_mut`](crate::image::RasterImage::pixels_mut).
//!
//! A guard is the library's rendition of a scoped buffer lock: the view
//! exists for the guard's lifetime, its release runs on every exit path
//! because dropping is unconditional, and exclusiveness is enforced by
//! the borrow it holds. The guard exposes `(data, stride, width, height,
//! bytes per pixel)` plus bounds checked row and pixel accessors so
//! filters never do unchecked pointer arithmetic.

use rasterfx_core::geom::Rect;
use rasterfx_core::layout::PixelLayout;

/// A shared, read only pixel view over a rectangle of an image.
pub struct Pixels<'a> {
    data:   &'a [u8],
    stride: usize,
    rect:   Rect,
    layout: PixelLayout
}

impl<'a> Pixels<'a> {
    pub(crate) fn new(data: &'a [u8], stride: usize, rect: Rect, layout: PixelLayout) -> Pixels<'a> {
        Pixels {
            data,
            stride,
            rect,
            layout
        }
    }

    /// Width of the view in pixels.
    pub const fn width(&self) -> usize {
        self.rect.width
    }

    /// Height of the view in pixels.
    pub const fn height(&self) -> usize {
        self.rect.height
    }

    /// Byte length of one full image row, padding included.
    pub const fn stride(&self) -> usize {
        self.stride
    }

    pub const fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub const fn bytes_per_pixel(&self) -> usize {
        self.layout.bytes_per_pixel()
    }

    /// One row of pixels, exactly `width * bytes_per_pixel` bytes.
    ///
    /// `y` is relative to the acquired rectangle.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.rect.width * self.bytes_per_pixel()]
    }

    /// The bytes of a single pixel, relative to the acquired rectangle.
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let bpp = self.bytes_per_pixel();
        let start = y * self.stride + x * bpp;
        &self.data[start..start + bpp]
    }

    /// The raw bytes the view spans, starting at the rectangle's first
    /// pixel. Rows repeat every `stride` bytes; bytes between
    /// `width * bytes_per_pixel` and `stride` belong to padding or to
    /// pixels outside the rectangle and must not be treated as view data.
    pub fn data(&self) -> &[u8] {
        self.data
    }
}

/// An exclusive pixel view over a rectangle of an image.
pub struct PixelsMut<'a> {
    data:   &'a mut [u8],
    stride: usize,
    rect:   Rect,
    layout: PixelLayout
}

impl<'a> PixelsMut<'a> {
    pub(crate) fn new(
        data: &'a mut [u8], stride: usize, rect: Rect, layout: PixelLayout
    ) -> PixelsMut<'a> {
        PixelsMut {
            data,
            stride,
            rect,
            layout
        }
    }

    pub const fn width(&self) -> usize {
        self.rect.width
    }

    pub const fn height(&self) -> usize {
        self.rect.height
    }

    pub const fn stride(&self) -> usize {
        self.stride
    }

    pub const fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub const fn bytes_per_pixel(&self) -> usize {
        self.layout.bytes_per_pixel()
    }

    /// One row of pixels, see [`Pixels::row`].
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.rect.width * self.bytes_per_pixel()]
    }

    /// Mutable access to one row of pixels.
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let bpp = self.bytes_per_pixel();
        let start = y * self.stride;
        &mut self.data[start..start + self.rect.width * bpp]
    }

    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let bpp = self.bytes_per_pixel();
        let start = y * self.stride + x * bpp;
        &self.data[start..start + bpp]
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [u8] {
        let bpp = self.bytes_per_pixel();
        let start = y * self.stride + x * bpp;
        &mut self.data[start..start + bpp]
    }

    /// The raw bytes the view spans, see [`Pixels::data`].
    pub fn data(&self) -> &[u8] {
        self.data
    }

    /// Mutable raw bytes, for kernels that do their own stride
    /// bookkeeping. Padding bytes must be left untouched.
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use rasterfx_core::access::AccessMode;
    use rasterfx_core::geom::Rect;
    use rasterfx_core::layout::PixelLayout;

    use crate::image::RasterImage;

    #[test]
    fn rows_skip_padding() {
        // 2x2 rgb24 with 2 bytes of row padding
        let data = vec![
            1, 2, 3, 4, 5, 6, 255, 255, //
            7, 8, 9, 10, 11, 12, 255, 255,
        ];
        let image = RasterImage::from_vec(data, PixelLayout::Rgb24, 2, 2, 8).unwrap();
        let view = image.pixels(image.bounds_rect(), AccessMode::READ).unwrap();

        assert_eq!(view.row(0), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(view.row(1), &[7, 8, 9, 10, 11, 12]);
        assert_eq!(view.pixel(1, 1), &[10, 11, 12]);
    }

    #[test]
    fn sub_rect_view_is_offset() {
        let image = RasterImage::from_fn(4, 4, PixelLayout::Rgb24, |x, y| {
            [(y * 4 + x) as u8, 0, 0, 0]
        });
        let view = image
            .pixels(Rect::new(1, 2, 2, 2), AccessMode::READ)
            .unwrap();

        assert_eq!(view.pixel(0, 0)[0], 9);
        assert_eq!(view.pixel(1, 1)[0], 14);
    }

    #[test]
    fn exclusive_view_writes_through() {
        let mut image = RasterImage::new(PixelLayout::Rgba32, 2, 2);
        {
            let rect = image.bounds_rect();
            let mut view = image.pixels_mut(rect, AccessMode::READ_WRITE).unwrap();
            view.pixel_mut(1, 0).copy_from_slice(&[1, 2, 3, 4]);
        }
        assert_eq!(&image.data()[4..8], &[1, 2, 3, 4]);
    }
}
