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

/// Keep only the color bytes that changed between a reference image and
/// the image being filtered.
///
/// Per color byte the signed difference `image - reference` is taken;
/// bytes whose difference is at most 15, or at least 254, are zeroed in
/// the filtered image. The asymmetric band means a byte that merely
/// darkened is dropped as well. Alpha bytes are left untouched.
///
/// Both images must share dimensions; they may differ in layout.
pub struct Difference<'a> {
    reference: &'a RasterImage
}

/// Differences at or below this are treated as unchanged.
const START_THRESHOLD: i32 = 15;
/// Differences at or above `END_THRESHOLD - 1` wrap the band and are
/// dropped too.
const END_THRESHOLD: i32 = 255;

impl<'a> Difference<'a> {
    /// Create a new difference filter
    ///
    /// # Arguments
    /// - reference: The image subtracted from the one being filtered.
    #[must_use]
    pub fn new(reference: &'a RasterImage) -> Difference<'a> {
        Difference { reference }
    }
}

impl OperationsTrait for Difference<'_> {
    fn name(&self) -> &'static str {
        "Difference"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), ImageErrors> {
        if image.dimensions() != self.reference.dimensions() {
            return Err(ImageErrors::DimensionsMisMatch(
                image.dimensions(),
                self.reference.dimensions()
            ));
        }
        let rect = image.bounds_rect();
        let mut target = image.pixels_mut(rect, AccessMode::READ_WRITE)?;
        let reference = self.reference.pixels(rect, AccessMode::READ)?;

        let t_bpp = target.bytes_per_pixel();
        let r_bpp = reference.bytes_per_pixel();

        for y in 0..rect.height {
            let t_row = target.row_mut(y);
            let r_row = reference.row(y);

            for (t_px, r_px) in t_row
                .chunks_exact_mut(t_bpp)
                .zip(r_row.chunks_exact(r_bpp))
            {
                for c in 0..3 {
                    let diff = i32::from(t_px[c]) - i32::from(r_px[c]);

                    if diff <= START_THRESHOLD || diff >= END_THRESHOLD - 1 {
                        t_px[c] = 0;
                    }
                }
            }
        }

        Ok(())
    }

    fn supported_layouts(&self) -> &'static [PixelLayout] {
        &[PixelLayout::Rgb24, PixelLayout::Rgba32]
    }
}

#[cfg(test)]
mod tests {
    use rasterfx_core::layout::PixelLayout;
    use rasterfx_image::errors::ImageErrors;
    use rasterfx_image::image::RasterImage;
    use rasterfx_image::traits::OperationsTrait;

    use crate::difference::Difference;

    #[test]
    fn small_and_negative_differences_are_zeroed() {
        let reference = RasterImage::fill(&[100, 100, 100], PixelLayout::Rgb24, 1, 1).unwrap();
        let mut image = RasterImage::fill(&[110, 150, 80], PixelLayout::Rgb24, 1, 1).unwrap();

        Difference::new(&reference).execute(&mut image).unwrap();

        // +10 is within the unchanged band, +50 survives, -20 is dropped
        assert_eq!(image.data(), &[0, 150, 0]);
    }

    #[test]
    fn band_edges() {
        let reference = RasterImage::fill(&[0, 0, 0], PixelLayout::Rgb24, 1, 1).unwrap();
        let mut image = RasterImage::fill(&[15, 16, 254], PixelLayout::Rgb24, 1, 1).unwrap();

        Difference::new(&reference).execute(&mut image).unwrap();

        // 15 is unchanged, 16 survives, 254 falls off the top of the band
        assert_eq!(image.data(), &[0, 16, 0]);
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        let reference = RasterImage::new(PixelLayout::Rgb24, 2, 2);
        let mut image = RasterImage::new(PixelLayout::Rgb24, 3, 2);

        let result = Difference::new(&reference).execute(&mut image);
        assert!(matches!(
            result,
            Err(ImageErrors::DimensionsMisMatch(..))
        ));
    }
}
