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

/// Shift each color channel of an image by its own amount, clamping to
/// the byte range.
///
/// A shift of -255 empties a channel, 255 saturates it. Alpha bytes are
/// left untouched.
pub struct Balance {
    red:   i32,
    green: i32,
    blue:  i32
}

impl Balance {
    /// Create a new balance filter
    ///
    /// # Arguments
    /// - red, green, blue: The amount added to the respective channel
    ///   of every pixel, each from -255 to 255.
    ///
    /// Arguments are taken in red, green, blue order. Beware when
    /// porting callers of older DIB era balance filters, which took
    /// red, blue, green.
    #[must_use]
    pub fn new(red: i32, green: i32, blue: i32) -> Balance {
        Balance { red, green, blue }
    }
}

impl OperationsTrait for Balance {
    fn name(&self) -> &'static str {
        "Balance"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), ImageErrors> {
        let rect = image.bounds_rect();
        let mut view = image.pixels_mut(rect, AccessMode::READ_WRITE)?;
        let bpp = view.bytes_per_pixel();
        let stride = view.stride();

        balance(
            view.data_mut(),
            stride,
            rect.width,
            rect.height,
            bpp,
            [self.blue, self.green, self.red]
        );

        Ok(())
    }

    fn supported_layouts(&self) -> &'static [PixelLayout] {
        &[PixelLayout::Rgb24, PixelLayout::Rgba32]
    }
}

/// Shift the color channels of an interleaved buffer.
///
/// `shifts` is indexed by in-pixel byte position, so blue first.
pub fn balance(
    data: &mut [u8], stride: usize, width: usize, height: usize, bpp: usize, shifts: [i32; 3]
) {
    for y in 0..height {
        let start = y * stride;
        let row = &mut data[start..start + width * bpp];

        for px in row.chunks_exact_mut(bpp) {
            for (color, shift) in px[..3].iter_mut().zip(shifts) {
                *color = clamp_u8(i32::from(*color) + shift);
            }
        }
    }
}
