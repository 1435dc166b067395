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

/// Crop an image to a rectangle.
///
/// A rectangle reaching past the right or bottom edge is shrunk to fit;
/// a top left corner outside the image is an error. The cropped result
/// replaces the input and has a tight stride.
pub struct Crop {
    x:      usize,
    y:      usize,
    width:  usize,
    height: usize
}

impl Crop {
    /// Create a new crop operation
    ///
    /// # Arguments
    /// - width: The width of the new cropped out image
    /// - height: The height of the new cropped out image
    /// - x: How far from the x origin the image should start from
    /// - y: How far from the y origin the image should start from
    #[must_use]
    pub fn new(width: usize, height: usize, x: usize, y: usize) -> Crop {
        Crop {
            x,
            y,
            width,
            height
        }
    }
}

impl OperationsTrait for Crop {
    fn name(&self) -> &'static str {
        "Crop"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), ImageErrors> {
        let (img_width, img_height) = image.dimensions();

        let width = self.width.min(img_width.saturating_sub(self.x));
        let height = self.height.min(img_height.saturating_sub(self.y));

        let rect = Rect::new(self.x, self.y, width, height);
        let view = image.pixels(rect, AccessMode::READ)?;

        let mut out = RasterImage::new(image.layout(), width, height);
        {
            let out_rect = out.bounds_rect();
            let mut dst = out.pixels_mut(out_rect, AccessMode::READ_WRITE)?;

            for y in 0..height {
                dst.row_mut(y).copy_from_slice(view.row(y));
            }
        }

        *image = out;
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

    use crate::crop::Crop;

    fn numbered(width: usize, height: usize) -> RasterImage {
        RasterImage::from_fn(width, height, PixelLayout::Rgb24, |x, y| {
            [(y * width + x) as u8, 0, 0, 0]
        })
    }

    #[test]
    fn crops_the_requested_rectangle() {
        let mut image = numbered(4, 4);
        Crop::new(2, 2, 1, 1).execute(&mut image).unwrap();

        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.data()[0], 5);
        assert_eq!(image.data()[3], 6);
        assert_eq!(image.data()[6], 9);
    }

    #[test]
    fn oversized_rectangle_is_clamped() {
        let mut image = numbered(4, 4);
        Crop::new(10, 10, 2, 3).execute(&mut image).unwrap();

        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.data()[0], 14);
    }

    #[test]
    fn origin_outside_the_image_is_an_error() {
        let mut image = numbered(4, 4);
        let result = Crop::new(2, 2, 4, 0).execute(&mut image);

        assert!(matches!(result, Err(ImageErrors::BufferAcquisition(_))));
        // the image is untouched on failure
        assert_eq!(image.dimensions(), (4, 4));
    }
}
