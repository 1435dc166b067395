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

/// Binary sobel edge detection.
///
/// Each interior pixel is turned black when the squared gradient
/// magnitude of the surrounding intensity exceeds a fixed threshold,
/// white otherwise. Intensity is the integer mean of the three color
/// bytes. The one pixel border keeps its input value; alpha of
/// processed pixels is forced to 255.
pub struct Sobel;

const GX: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const GY: [[i32; 3]; 3] = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Squared gradient magnitudes above this become black.
const THRESHOLD: i32 = 128 * 128;

impl Sobel {
    /// Create a new sobel filter
    #[must_use]
    pub fn new() -> Sobel {
        Sobel
    }
}

impl Default for Sobel {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationsTrait for Sobel {
    fn name(&self) -> &'static str {
        "Sobel"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), ImageErrors> {
        let src = image.clone();
        let src_stride = src.stride();
        let src_data = src.data();

        let rect = image.bounds_rect();
        let mut view = image.pixels_mut(rect, AccessMode::READ_WRITE)?;
        let bpp = view.bytes_per_pixel();
        let stride = view.stride();
        let data = view.data_mut();

        let intensity = |x: usize, y: usize| -> i32 {
            let off = y * src_stride + x * bpp;
            let px = &src_data[off..off + 3];

            (i32::from(px[0]) + i32::from(px[1]) + i32::from(px[2])) / 3
        };

        for y in 1..rect.height.saturating_sub(1) {
            for x in 1..rect.width.saturating_sub(1) {
                let mut grad_x = 0;
                let mut grad_y = 0;

                for wy in 0..3 {
                    for wx in 0..3 {
                        let c = intensity(x + wx - 1, y + wy - 1);

                        grad_x += GX[wy][wx] * c;
                        grad_y += GY[wy][wx] * c;
                    }
                }

                let value = if grad_x * grad_x + grad_y * grad_y > THRESHOLD {
                    0
                } else {
                    255
                };
                let off = y * stride + x * bpp;

                data[off..off + 3].fill(value);
                if bpp == 4 {
                    data[off + 3] = 255;
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
    use rasterfx_image::image::RasterImage;
    use rasterfx_image::traits::OperationsTrait;

    use crate::sobel::Sobel;

    /// Left half dark, right half bright.
    fn step_image() -> RasterImage {
        RasterImage::from_fn(6, 5, PixelLayout::Rgb24, |x, _| {
            if x < 3 {
                [0, 0, 0, 0]
            } else {
                [240, 240, 240, 0]
            }
        })
    }

    #[test]
    fn vertical_step_becomes_a_black_line() {
        let mut image = step_image();
        Sobel::new().execute(&mut image).unwrap();

        // columns touching the step edge go black, flat interior goes white
        for y in 1..4 {
            let edge = y * image.stride() + 3 * 3;
            assert_eq!(&image.data()[edge..edge + 3], &[0, 0, 0]);

            let flat = y * image.stride() + 3;
            assert_eq!(&image.data()[flat..flat + 3], &[255, 255, 255]);
        }
    }

    #[test]
    fn border_pixels_keep_their_input() {
        let mut image = step_image();
        Sobel::new().execute(&mut image).unwrap();

        assert_eq!(&image.data()[..3], &[0, 0, 0]);
        let corner = 4 * image.stride() + 5 * 3;
        assert_eq!(&image.data()[corner..corner + 3], &[240, 240, 240]);
    }

    #[test]
    fn flat_image_goes_white() {
        let mut image = RasterImage::fill(&[90, 90, 90, 7], PixelLayout::Rgba32, 4, 4).unwrap();
        Sobel::new().execute(&mut image).unwrap();

        let center = image.stride() + 4;
        assert_eq!(&image.data()[center..center + 4], &[255, 255, 255, 255]);
    }
}
