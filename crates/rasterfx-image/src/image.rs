/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is represented as
//!
//! - one interleaved byte buffer
//!     - of `stride * height` bytes
//!         - in a pixel layout (see [`PixelLayout`])
//!             - with the same width and height
//!
//! `stride` is the byte length of one row and may exceed
//! `width * bytes_per_pixel`; the excess bytes are padding and are never
//! treated as pixel data.
use log::trace;
use rasterfx_core::access::AccessMode;
use rasterfx_core::geom::Rect;
use rasterfx_core::layout::PixelLayout;

use crate::buffer::{Pixels, PixelsMut};
use crate::errors::{BufferErrors, ImageErrors};

/// A single raster image owning exactly one pixel buffer.
#[derive(Clone)]
pub struct RasterImage {
    data:   Vec<u8>,
    width:  usize,
    height: usize,
    stride: usize,
    layout: PixelLayout
}

impl RasterImage {
    /// Create a zeroed image with a tight stride.
    #[must_use]
    pub fn new(layout: PixelLayout, width: usize, height: usize) -> RasterImage {
        let stride = width * layout.bytes_per_pixel();

        RasterImage {
            data: vec![0; stride * height],
            width,
            height,
            stride,
            layout
        }
    }

    /// Build an image from an existing byte buffer.
    ///
    /// # Errors
    /// - Stride smaller than `width * bytes_per_pixel`
    /// - Buffer length not equal to `stride * height`
    pub fn from_vec(
        data: Vec<u8>, layout: PixelLayout, width: usize, height: usize, stride: usize
    ) -> Result<RasterImage, ImageErrors> {
        let min_stride = width * layout.bytes_per_pixel();

        if stride < min_stride {
            return Err(BufferErrors::InvalidStride(stride, min_stride).into());
        }
        if data.len() != stride * height {
            return Err(BufferErrors::LengthMismatch(stride * height, data.len()).into());
        }

        Ok(RasterImage {
            data,
            width,
            height,
            stride,
            layout
        })
    }

    /// Create an image with a static color in it.
    ///
    /// `pixel` holds one pixel's bytes, in buffer order, so it must be
    /// exactly `layout.bytes_per_pixel()` long.
    ///
    /// # Errors
    /// - `pixel` length does not match the layout
    pub fn fill(
        pixel: &[u8], layout: PixelLayout, width: usize, height: usize
    ) -> Result<RasterImage, ImageErrors> {
        if pixel.len() != layout.bytes_per_pixel() {
            return Err(ImageErrors::InvalidParameter(
                "Fill pixel length does not match the pixel layout"
            ));
        }
        let mut image = RasterImage::new(layout, width, height);

        for y in 0..height {
            let start = y * image.stride;
            let row = &mut image.data[start..start + width * pixel.len()];

            for px in row.chunks_exact_mut(pixel.len()) {
                px.copy_from_slice(pixel);
            }
        }
        Ok(image)
    }

    /// Create an image from a function.
    ///
    /// The function receives the x and y offset of each pixel and returns
    /// an array of four bytes in buffer order; layouts with fewer bytes
    /// per pixel ignore the tail.
    ///
    /// ```
    /// use rasterfx_core::layout::PixelLayout;
    /// use rasterfx_image::image::RasterImage;
    ///
    /// // a diagonal gradient on the blue channel
    /// let img = RasterImage::from_fn(16, 16, PixelLayout::Rgb24, |x, y| {
    ///     [((x + y) % 256) as u8, 0, 0, 0]
    /// });
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, layout: PixelLayout, func: F) -> RasterImage
    where
        F: Fn(usize, usize) -> [u8; 4]
    {
        let mut image = RasterImage::new(layout, width, height);
        let bpp = layout.bytes_per_pixel();

        for y in 0..height {
            let start = y * image.stride;
            let row = &mut image.data[start..start + width * bpp];

            for (x, px) in row.chunks_exact_mut(bpp).enumerate() {
                let value = (func)(x, y);
                px.copy_from_slice(&value[..bpp]);
            }
        }
        image
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Byte length of one image row, padding included.
    pub const fn stride(&self) -> usize {
        self.stride
    }

    pub const fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub const fn bytes_per_pixel(&self) -> usize {
        self.layout.bytes_per_pixel()
    }

    /// The rectangle covering the whole image.
    pub const fn bounds_rect(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Raw bytes of the image, `stride * height` long.
    ///
    /// Bytes past `width * bytes_per_pixel` in each row are padding.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image and return its byte buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Acquire a shared, read only view over `rect`.
    ///
    /// The view is released when the guard is dropped, on every exit
    /// path including failure in the caller.
    ///
    /// # Errors
    /// - `rect` is empty or extends past the image
    /// - `mode` requests write access
    pub fn pixels(&self, rect: Rect, mode: AccessMode) -> Result<Pixels<'_>, BufferErrors> {
        if mode.contains(AccessMode::WRITE) {
            return Err(BufferErrors::WriteOnSharedView);
        }
        let range = self.check_rect(rect)?;

        Ok(Pixels::new(
            &self.data[range.0..range.1],
            self.stride,
            rect,
            self.layout
        ))
    }

    /// Acquire an exclusive view over `rect`.
    ///
    /// # Errors
    /// - `rect` is empty or extends past the image
    /// - `mode` does not request write access
    pub fn pixels_mut(
        &mut self, rect: Rect, mode: AccessMode
    ) -> Result<PixelsMut<'_>, BufferErrors> {
        if !mode.contains(AccessMode::WRITE) {
            return Err(BufferErrors::MissingWriteAccess);
        }
        let range = self.check_rect(rect)?;

        Ok(PixelsMut::new(
            &mut self.data[range.0..range.1],
            self.stride,
            rect,
            self.layout
        ))
    }

    /// Validate an acquisition rectangle and return the byte range it
    /// spans, from the first pixel to the end of the last covered row.
    fn check_rect(&self, rect: Rect) -> Result<(usize, usize), BufferErrors> {
        if rect.is_empty() {
            return Err(BufferErrors::EmptyRect);
        }
        if rect.right() > self.width || rect.bottom() > self.height {
            return Err(BufferErrors::RectOutOfBounds(rect, self.width, self.height));
        }
        let bpp = self.layout.bytes_per_pixel();
        let start = rect.y * self.stride + rect.x * bpp;
        let end = start + (rect.height - 1) * self.stride + rect.width * bpp;

        Ok((start, end))
    }

    /// Convert the image into another pixel layout.
    ///
    /// Going to [`PixelLayout::Rgba32`] fills alpha with 255, going to
    /// [`PixelLayout::Rgb24`] drops it. The result has a tight stride.
    #[must_use]
    pub fn convert_layout(&self, layout: PixelLayout) -> RasterImage {
        if layout == self.layout {
            return self.clone();
        }
        trace!("Converting image layout {:?} -> {layout:?}", self.layout);

        let src_bpp = self.bytes_per_pixel();

        RasterImage::from_fn(self.width, self.height, layout, |x, y| {
            let off = y * self.stride + x * src_bpp;
            let px = &self.data[off..off + src_bpp];
            let mut out = [0u8, 0, 0, 255];
            out[..3].copy_from_slice(&px[..3]);
            if src_bpp == 4 {
                out[3] = px[3];
            }
            out
        })
    }
}
