/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use rasterfx_core::access::AccessMode;
use rasterfx_core::layout::{PixelLayout, Rgb};
use rasterfx_image::errors::ImageErrors;
use rasterfx_image::image::RasterImage;
use rasterfx_image::traits::OperationsTrait;

use crate::balance::balance;

/// Keep a single color channel and empty the other two.
///
/// This is a balance with a shift of -255 on the channels that are not
/// kept, so the kept channel passes through unchanged.
pub struct Isolate {
    channel: Rgb
}

impl Isolate {
    /// Create a new channel isolation filter
    #[must_use]
    pub fn new(channel: Rgb) -> Isolate {
        Isolate { channel }
    }
}

impl OperationsTrait for Isolate {
    fn name(&self) -> &'static str {
        "Isolate channel"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), ImageErrors> {
        let mut shifts = [-255_i32; 3];
        shifts[self.channel.offset()] = 0;

        let rect = image.bounds_rect();
        let mut view = image.pixels_mut(rect, AccessMode::READ_WRITE)?;
        let bpp = view.bytes_per_pixel();
        let stride = view.stride();

        balance(view.data_mut(), stride, rect.width, rect.height, bpp, shifts);

        Ok(())
    }

    fn supported_layouts(&self) -> &'static [PixelLayout] {
        &[PixelLayout::Rgb24, PixelLayout::Rgba32]
    }
}
