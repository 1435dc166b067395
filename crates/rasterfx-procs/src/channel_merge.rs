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

/// Replace one channel of an image with a channel taken from a donor
/// image of the same dimensions.
///
/// The donor byte is not read from the channel's own offset: the blue
/// merge samples the donor's second byte and the green and red merges
/// its first. A donor byte of zero falls back to the filtered image's
/// own value for that channel, so fully black donor pixels leave the
/// image unchanged. The other two channels always pass through.
pub struct ChannelMerge<'a> {
    donor:   &'a RasterImage,
    channel: Rgb
}

impl<'a> ChannelMerge<'a> {
    /// Create a new channel merge filter
    ///
    /// # Arguments
    /// - donor: The image the replacement channel is sampled from.
    /// - channel: The channel replaced in the filtered image.
    #[must_use]
    pub fn new(donor: &'a RasterImage, channel: Rgb) -> ChannelMerge<'a> {
        ChannelMerge { donor, channel }
    }
}

impl OperationsTrait for ChannelMerge<'_> {
    fn name(&self) -> &'static str {
        "Channel merge"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), ImageErrors> {
        if image.dimensions() != self.donor.dimensions() {
            return Err(ImageErrors::DimensionsMisMatch(
                image.dimensions(),
                self.donor.dimensions()
            ));
        }
        let rect = image.bounds_rect();
        let mut target = image.pixels_mut(rect, AccessMode::READ_WRITE)?;
        let donor = self.donor.pixels(rect, AccessMode::READ)?;

        let t_bpp = target.bytes_per_pixel();
        let d_bpp = donor.bytes_per_pixel();

        // which donor byte feeds each merge
        let donor_byte = match self.channel {
            Rgb::Blue => 1,
            Rgb::Green | Rgb::Red => 0
        };
        let replaced = self.channel.offset();

        for y in 0..rect.height {
            let t_row = target.row_mut(y);
            let d_row = donor.row(y);

            for (t_px, d_px) in t_row
                .chunks_exact_mut(t_bpp)
                .zip(d_row.chunks_exact(d_bpp))
            {
                let mut value = d_px[donor_byte];

                if value == 0 {
                    value = t_px[replaced];
                }
                t_px[replaced] = value;
            }
        }

        Ok(())
    }

    fn supported_layouts(&self) -> &'static [PixelLayout] {
        &[PixelLayout::Rgb24, PixelLayout::Rgba32]
    }
}
