/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use rasterfx_core::access::AccessMode;
use rasterfx_core::layout::PixelLayout;
use rasterfx_image::errors::ImageErrors;
use rasterfx_image::image::RasterImage;
use rasterfx_image::traits::OperationsTrait;

use crate::utils::clamp_u8;

/// Add a constant to every color byte of an image, clamping to the
/// byte range.
///
/// Negative values darken. Alpha bytes are left untouched.
pub struct Brighten {
    value: i32
}

impl Brighten {
    /// Create a new brighten filter
    ///
    /// # Arguments
    /// - value: The amount added to every color byte, from -255 to 255.
    ///   Values outside that range saturate every pixel.
    #[must_use]
    pub fn new(value: i32) -> Brighten {
        Brighten { value }
    }
}

impl OperationsTrait for Brighten {
    fn name(&self) -> &'static str {
        "Brighten"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), ImageErrors> {
        let rect = image.bounds_rect();
        let mut view = image.pixels_mut(rect, AccessMode::READ_WRITE)?;
        let bpp = view.bytes_per_pixel();
        let stride = view.stride();

        brighten(view.data_mut(), stride, rect.width, rect.height, bpp, self.value);

        Ok(())
    }

    fn supported_layouts(&self) -> &'static [PixelLayout] {
        &[PixelLayout::Rgb24, PixelLayout::Rgba32]
    }
}

/// Brighten every color byte of an interleaved buffer.
///
/// The fourth byte of each pixel, when present, is skipped.
pub fn brighten(
    data: &mut [u8], stride: usize, width: usize, height: usize, bpp: usize, value: i32
) {
    for y in 0..height {
        let start = y * stride;
        let row = &mut data[start..start + width * bpp];

        for px in row.chunks_exact_mut(bpp) {
            for color in &mut px[..3] {
                *color = clamp_u8(i32::from(*color) + value);
            }
        }
    }
}
