/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bilinear stretching of an image to arbitrary dimensions.
//!
//! This is the internal scaling primitive used by filters that have to
//! bring two operands onto one canvas. Callers wanting high quality
//! resizing should go through an external
//! [`RasterizerTrait`](rasterfx_image::traits::RasterizerTrait)
//! implementation instead.

use rasterfx_image::image::RasterImage;

/// Stretch an image to `width` x `height` with bilinear interpolation.
///
/// The output keeps the input's pixel layout and has a tight stride.
/// Matching dimensions return a plain copy.
#[must_use]
pub fn bilinear_stretch(image: &RasterImage, width: usize, height: usize) -> RasterImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    let (src_w, src_h) = image.dimensions();
    let src_stride = image.stride();
    let src = image.data();
    let bpp = image.bytes_per_pixel();

    let x_ratio = src_w as f64 / width as f64;
    let y_ratio = src_h as f64 / height as f64;

    RasterImage::from_fn(width, height, image.layout(), |x, y| {
        let src_x = x as f64 * x_ratio;
        let src_y = y as f64 * y_ratio;

        let x0 = (src_x as usize).min(src_w - 1);
        let y0 = (src_y as usize).min(src_h - 1);
        let x1 = (x0 + 1).min(src_w - 1);
        let y1 = (y0 + 1).min(src_h - 1);

        let x_frac = src_x - x0 as f64;
        let y_frac = src_y - y0 as f64;

        let mut out = [0_u8; 4];

        for (c, value) in out[..bpp].iter_mut().enumerate() {
            let p00 = f64::from(src[y0 * src_stride + x0 * bpp + c]);
            let p10 = f64::from(src[y0 * src_stride + x1 * bpp + c]);
            let p01 = f64::from(src[y1 * src_stride + x0 * bpp + c]);
            let p11 = f64::from(src[y1 * src_stride + x1 * bpp + c]);

            let top = p00 + (p10 - p00) * x_frac;
            let bottom = p01 + (p11 - p01) * x_frac;

            *value = (top + (bottom - top) * y_frac).round() as u8;
        }
        out
    })
}

#[cfg(test)]
mod tests {
    use rasterfx_core::layout::PixelLayout;
    use rasterfx_image::image::RasterImage;

    use crate::stretch::bilinear_stretch;

    #[test]
    fn same_size_is_a_copy() {
        let image = RasterImage::from_fn(3, 3, PixelLayout::Rgb24, |x, y| {
            [(x + y) as u8, 0, 0, 0]
        });
        let copy = bilinear_stretch(&image, 3, 3);
        assert_eq!(copy.data(), image.data());
    }

    #[test]
    fn upscale_keeps_flat_colors_flat() {
        let image = RasterImage::fill(&[40, 90, 160], PixelLayout::Rgb24, 2, 2).unwrap();
        let big = bilinear_stretch(&image, 7, 5);

        assert_eq!(big.dimensions(), (7, 5));
        for y in 0..5 {
            for x in 0..7 {
                let off = y * big.stride() + x * 3;
                assert_eq!(&big.data()[off..off + 3], &[40, 90, 160]);
            }
        }
    }

    #[test]
    fn downscale_interpolates_between_neighbors() {
        // left half 0, right half 200
        let image = RasterImage::from_fn(4, 1, PixelLayout::Rgb24, |x, _| {
            if x < 2 {
                [0, 0, 0, 0]
            } else {
                [200, 200, 200, 0]
            }
        });
        let small = bilinear_stretch(&image, 2, 1);

        assert_eq!(&small.data()[..3], &[0, 0, 0]);
        assert_eq!(&small.data()[3..6], &[200, 200, 200]);
    }
}
