/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;
use rasterfx_core::access::AccessMode;
use rasterfx_core::geom::{Bounds, Point};
use rasterfx_core::layout::PixelLayout;
use rasterfx_image::errors::ImageErrors;
use rasterfx_image::image::RasterImage;
use rasterfx_image::traits::OperationsTrait;

use crate::crop::Crop;

/// Crop an image down to its foreground.
///
/// The background color is voted from the four corner pixels: a corner
/// qualifies when at least three corners lie within ten percent of it
/// on every channel, and the last qualifying corner wins. When no
/// corner qualifies there is no background and every pixel counts as
/// foreground.
///
/// Pixels outside the ten percent band around the background are
/// foreground; the crop covers their horizontal extent and extends
/// down to the last foreground row, but never back up above the first
/// one found. An image with no foreground collapses to a single pixel
/// at the origin.
pub struct CropBackground;

impl CropBackground {
    /// Create a new background cropping filter
    #[must_use]
    pub fn new() -> CropBackground {
        CropBackground
    }
}

impl Default for CropBackground {
    fn default() -> Self {
        Self::new()
    }
}

/// A channel is close enough to the background when it lies within ten
/// percent of it.
fn channel_matches(channel: u8, background: u8) -> bool {
    let channel = f64::from(channel);
    let background = f64::from(background);

    channel <= background * 1.1 && channel >= background * 0.9
}

fn pixel_matches(pixel: &[u8], background: [u8; 3]) -> bool {
    pixel[..3]
        .iter()
        .zip(background)
        .all(|(c, b)| channel_matches(*c, b))
}

impl OperationsTrait for CropBackground {
    fn name(&self) -> &'static str {
        "Crop background"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let rect = image.bounds_rect();
        let view = image.pixels(rect, AccessMode::READ)?;

        let corners = [
            (0, 0),
            (0, height - 1),
            (width - 1, 0),
            (width - 1, height - 1)
        ];

        let mut background: Option<[u8; 3]> = None;

        for (cx, cy) in corners {
            let px = view.pixel(cx, cy);
            let candidate = [px[0], px[1], px[2]];

            let matched = corners
                .iter()
                .filter(|(x, y)| pixel_matches(view.pixel(*x, *y), candidate))
                .count();

            if matched > 2 {
                background = Some(candidate);
            }
        }

        let mut bounds: Option<Bounds> = None;

        for y in 0..height {
            for x in 0..width {
                let foreground = match background {
                    Some(back) => !pixel_matches(view.pixel(x, y), back),
                    // no agreed background, everything is foreground
                    None => true
                };
                if !foreground {
                    continue;
                }

                match &mut bounds {
                    None => bounds = Some(Bounds::at(Point::new(x, y))),
                    Some(b) => {
                        if x > b.max.x {
                            b.max.x = x;
                        } else if x < b.min.x {
                            b.min.x = x;
                        }
                        // the top edge is frozen at the first foreground
                        // row, only the bottom ever moves
                        if y >= b.max.y {
                            b.max.y = y;
                        }
                    }
                }
            }
        }

        let bounds = bounds.unwrap_or(Bounds::at(Point::new(0, 0)));
        drop(view);

        trace!(
            "Cropping background to ({}, {}) - ({}, {})",
            bounds.min.x,
            bounds.min.y,
            bounds.max.x,
            bounds.max.y
        );

        Crop::new(bounds.width(), bounds.height(), bounds.min.x, bounds.min.y).execute(image)
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

    use crate::crop_background::CropBackground;

    /// White canvas with a dark rectangle on it.
    fn object_on_white(
        width: usize, height: usize, left: usize, top: usize, right: usize, bottom: usize
    ) -> RasterImage {
        RasterImage::from_fn(width, height, PixelLayout::Rgb24, |x, y| {
            if x >= left && x <= right && y >= top && y <= bottom {
                [10, 10, 10, 0]
            } else {
                [250, 250, 250, 0]
            }
        })
    }

    #[test]
    fn crops_to_the_foreground_object() {
        let mut image = object_on_white(10, 10, 3, 2, 6, 7);
        CropBackground::new().execute(&mut image).unwrap();

        assert_eq!(image.dimensions(), (4, 6));
        assert_eq!(&image.data()[..3], &[10, 10, 10]);
    }

    #[test]
    fn all_background_collapses_to_one_pixel() {
        let mut image = RasterImage::fill(&[250, 250, 250], PixelLayout::Rgb24, 6, 6).unwrap();
        CropBackground::new().execute(&mut image).unwrap();

        assert_eq!(image.dimensions(), (1, 1));
    }

    #[test]
    fn disagreeing_corners_keep_the_whole_image() {
        // four wildly different corners, no background wins the vote
        let mut image = RasterImage::from_fn(5, 5, PixelLayout::Rgb24, |x, y| {
            [(x * 50) as u8, (y * 50) as u8, 128, 0]
        });
        CropBackground::new().execute(&mut image).unwrap();

        assert_eq!(image.dimensions(), (5, 5));
    }

    #[test]
    fn top_edge_freezes_at_the_first_foreground_row() {
        // two objects, the second one higher up would not widen the top
        let mut image = RasterImage::from_fn(10, 10, PixelLayout::Rgb24, |x, y| {
            let on_object = (x == 5 && y == 4) || (x == 2 && y == 8);
            if on_object {
                [10, 10, 10, 0]
            } else {
                [250, 250, 250, 0]
            }
        });
        CropBackground::new().execute(&mut image).unwrap();

        // rows 4 through 8, columns 2 through 5
        assert_eq!(image.dimensions(), (4, 5));
    }
}
