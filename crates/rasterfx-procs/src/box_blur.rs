/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use rasterfx_core::access::AccessMode;
use rasterfx_core::geom::Rect;
use rasterfx_core::layout::PixelLayout;
use rasterfx_image::errors::ImageErrors;
use rasterfx_image::image::RasterImage;
use rasterfx_image::traits::OperationsTrait;

/// Box blur over a rectangular region of an image.
///
/// For every anchor pixel in the region the mean color of the
/// `size x size` window below and to the right of it, clipped at the
/// image edges, is written back over that window. The blur runs in
/// place, so windows near the region's trailing edges observe already
/// blurred values; this is what gives the filter its smeared look.
///
/// Writes are additionally cut off where the absolute coordinate
/// reaches the region's width or height, so regions placed away from
/// the origin blur a smaller area than they cover.
pub struct BoxBlur {
    region: Rect,
    size:   usize
}

impl BoxBlur {
    /// Create a new box blur filter
    ///
    /// # Arguments
    /// - region: The anchor rectangle, must lie within the image.
    /// - size: Window side length, at least 1.
    #[must_use]
    pub fn new(region: Rect, size: usize) -> BoxBlur {
        BoxBlur { region, size }
    }
}

impl OperationsTrait for BoxBlur {
    fn name(&self) -> &'static str {
        "Box blur"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), ImageErrors> {
        if self.size == 0 {
            return Err(ImageErrors::InvalidParameter(
                "Blur window size must be at least one"
            ));
        }
        // checks the region against the image before any write happens
        image.pixels(self.region, AccessMode::READ)?;

        let rect = image.bounds_rect();
        let mut view = image.pixels_mut(rect, AccessMode::READ_WRITE)?;
        let bpp = view.bytes_per_pixel();
        let stride = view.stride();

        region_blur(
            view.data_mut(),
            stride,
            rect.width,
            rect.height,
            bpp,
            self.region,
            self.size
        );

        Ok(())
    }

    fn supported_layouts(&self) -> &'static [PixelLayout] {
        &[PixelLayout::Rgb24, PixelLayout::Rgba32]
    }
}

/// Blur a region of an interleaved buffer in place.
///
/// `region` must lie within the `width` x `height` image.
pub fn region_blur(
    data: &mut [u8], stride: usize, width: usize, height: usize, bpp: usize, region: Rect,
    size: usize
) {
    for xx in region.x..region.right() {
        for yy in region.y..region.bottom() {
            let mut avg = [0_i32; 3];
            let mut count = 0_i32;

            for x in xx..(xx + size).min(width) {
                for y in yy..(yy + size).min(height) {
                    let off = y * stride + x * bpp;

                    for (c, total) in avg.iter_mut().enumerate() {
                        *total += i32::from(data[off + c]);
                    }
                    count += 1;
                }
            }

            for total in &mut avg {
                *total /= count;
            }

            // the write bound compares absolute coordinates against the
            // region's extent, not its far edge
            for x in xx..(xx + size).min(width).min(region.width) {
                for y in yy..(yy + size).min(height).min(region.height) {
                    let off = y * stride + x * bpp;

                    for (c, total) in avg.iter().enumerate() {
                        data[off + c] = *total as u8;
                    }
                    if bpp == 4 {
                        data[off + 3] = 255;
                    }
                }
            }
        }
    }
}
