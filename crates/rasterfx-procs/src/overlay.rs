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

use crate::stretch::bilinear_stretch;

/// Blend an image over another with a constant weight.
///
/// The canvas takes the larger width and the larger height of the two
/// operands and both are bilinearly stretched onto it, then every color
/// byte becomes `alpha * filtered + (1 - alpha) * other`. The result is
/// always [`PixelLayout::Rgb24`] and replaces the filtered image.
///
/// Operands with a zero area are rejected with a buffer acquisition
/// error.
pub struct Overlay<'a> {
    image: &'a RasterImage,
    alpha: f64
}

impl<'a> Overlay<'a> {
    /// Create a new overlay filter
    ///
    /// # Arguments
    /// - image: The image blended underneath the filtered one.
    /// - alpha: Weight of the filtered image, from 0.0 to 1.0.
    #[must_use]
    pub fn new(image: &'a RasterImage, alpha: f64) -> Overlay<'a> {
        Overlay { image, alpha }
    }
}

impl OperationsTrait for Overlay<'_> {
    fn name(&self) -> &'static str {
        "Overlay"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), ImageErrors> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ImageErrors::InvalidParameter(
                "Overlay alpha must be between 0.0 and 1.0"
            ));
        }
        // a zero area operand has nothing to stretch onto the canvas
        image.pixels(image.bounds_rect(), AccessMode::READ)?;
        self.image.pixels(self.image.bounds_rect(), AccessMode::READ)?;

        let width = image.width().max(self.image.width());
        let height = image.height().max(self.image.height());

        let top = bilinear_stretch(&image.convert_layout(PixelLayout::Rgb24), width, height);
        let bottom = bilinear_stretch(&self.image.convert_layout(PixelLayout::Rgb24), width, height);

        let top_data = top.data();
        let bottom_data = bottom.data();
        let alpha = self.alpha;

        let result = RasterImage::from_fn(width, height, PixelLayout::Rgb24, |x, y| {
            let t_off = y * top.stride() + x * 3;
            let b_off = y * bottom.stride() + x * 3;
            let mut out = [0_u8; 4];

            for c in 0..3 {
                let blended = alpha * f64::from(top_data[t_off + c])
                    + (1.0 - alpha) * f64::from(bottom_data[b_off + c]);

                out[c] = blended as u8;
            }
            out
        });

        *image = result;
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

    use crate::overlay::Overlay;

    #[test]
    fn alpha_outside_unit_range_is_rejected() {
        let other = RasterImage::new(PixelLayout::Rgb24, 2, 2);
        let mut image = RasterImage::new(PixelLayout::Rgb24, 2, 2);

        let result = Overlay::new(&other, 1.5).execute(&mut image);
        assert!(matches!(result, Err(ImageErrors::InvalidParameter(_))));
    }

    #[test]
    fn zero_area_operand_is_rejected() {
        let empty = RasterImage::new(PixelLayout::Rgb24, 0, 0);
        let mut image = RasterImage::fill(&[20, 20, 20], PixelLayout::Rgb24, 2, 2).unwrap();

        let result = Overlay::new(&empty, 0.5).execute(&mut image);
        assert!(matches!(result, Err(ImageErrors::BufferAcquisition(_))));

        let other = RasterImage::fill(&[20, 20, 20], PixelLayout::Rgb24, 2, 2).unwrap();
        let mut empty = RasterImage::new(PixelLayout::Rgb24, 2, 0);

        let result = Overlay::new(&other, 0.5).execute(&mut empty);
        assert!(matches!(result, Err(ImageErrors::BufferAcquisition(_))));
    }

    #[test]
    fn blends_with_the_given_weight() {
        let other = RasterImage::fill(&[0, 0, 0], PixelLayout::Rgb24, 2, 2).unwrap();
        let mut image = RasterImage::fill(&[200, 100, 40], PixelLayout::Rgb24, 2, 2).unwrap();

        Overlay::new(&other, 0.25).execute(&mut image).unwrap();

        assert_eq!(&image.data()[..3], &[50, 25, 10]);
    }

    #[test]
    fn canvas_takes_the_larger_extents() {
        let other = RasterImage::fill(&[10, 10, 10], PixelLayout::Rgb24, 8, 2).unwrap();
        let mut image = RasterImage::fill(&[30, 30, 30, 255], PixelLayout::Rgba32, 4, 6).unwrap();

        Overlay::new(&other, 0.5).execute(&mut image).unwrap();

        assert_eq!(image.dimensions(), (8, 6));
        assert_eq!(image.layout(), PixelLayout::Rgb24);
        assert_eq!(&image.data()[..3], &[20, 20, 20]);
    }
}
