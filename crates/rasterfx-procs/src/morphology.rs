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

/// Whether the structuring window takes the maximum or the minimum of
/// each channel.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MorphologyMode {
    /// Grow bright regions, window maximum.
    Dilate,
    /// Shrink bright regions, window minimum.
    Erode
}

/// Optional edge extraction applied after the window.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MorphologyEdge {
    /// Plain dilation or erosion.
    None,
    /// Keep only the difference the window introduced.
    Edge,
    /// The edge added back onto the original pixel.
    EdgeSharpen
}

/// Morphological dilation and erosion with optional edge extraction.
///
/// The filter slides an odd sized square window over the image and
/// replaces each channel with the window maximum (dilation) or minimum
/// (erosion). Channels can be exempted individually, exempted channels
/// keep the origin pixel's byte.
///
/// The result is always [`PixelLayout::Rgba32`] and replaces the input;
/// pixels closer than the window radius to an edge are not processed
/// and stay transparent black. Processed pixels get an alpha of 255.
pub struct Morphology {
    size:        usize,
    mode:        MorphologyMode,
    edge:        MorphologyEdge,
    apply_blue:  bool,
    apply_green: bool,
    apply_red:   bool
}

impl Morphology {
    /// Create a new morphology filter applying to all three channels
    /// with no edge extraction.
    ///
    /// # Arguments
    /// - size: Side length of the structuring window, must be odd.
    /// - mode: Dilate or erode.
    #[must_use]
    pub fn new(size: usize, mode: MorphologyMode) -> Morphology {
        Morphology {
            size,
            mode,
            edge: MorphologyEdge::None,
            apply_blue: true,
            apply_green: true,
            apply_red: true
        }
    }

    /// Set the edge extraction mode.
    #[must_use]
    pub fn edge(mut self, edge: MorphologyEdge) -> Morphology {
        self.edge = edge;
        self
    }

    /// Choose which channels the window applies to.
    ///
    /// A channel set to `false` keeps the origin pixel's byte.
    #[must_use]
    pub fn channels(mut self, blue: bool, green: bool, red: bool) -> Morphology {
        self.apply_blue = blue;
        self.apply_green = green;
        self.apply_red = red;
        self
    }
}

impl OperationsTrait for Morphology {
    fn name(&self) -> &'static str {
        "Morphology"
    }

    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), ImageErrors> {
        if self.size % 2 == 0 {
            return Err(ImageErrors::InvalidParameter(
                "Morphology window size must be odd"
            ));
        }
        let radius = (self.size - 1) / 2;
        let (width, height) = image.dimensions();

        let src = image.convert_layout(PixelLayout::Rgba32);
        let src_stride = src.stride();
        let src_data = src.data();

        let mut dst = RasterImage::new(PixelLayout::Rgba32, width, height);
        {
            let rect = dst.bounds_rect();
            let mut view = dst.pixels_mut(rect, AccessMode::READ_WRITE)?;
            let dst_stride = view.stride();
            let dst_data = view.data_mut();

            let reset = match self.mode {
                MorphologyMode::Dilate => 0_i32,
                MorphologyMode::Erode => 255_i32
            };
            let apply = [self.apply_blue, self.apply_green, self.apply_red];

            for y in radius..height.saturating_sub(radius) {
                for x in radius..width.saturating_sub(radius) {
                    let origin = y * src_stride + x * 4;
                    let mut channels = [reset; 3];

                    for wy in y - radius..=y + radius {
                        for wx in x - radius..=x + radius {
                            let off = wy * src_stride + wx * 4;

                            for (c, value) in channels.iter_mut().enumerate() {
                                let sample = i32::from(src_data[off + c]);

                                match self.mode {
                                    MorphologyMode::Dilate => *value = sample.max(*value),
                                    MorphologyMode::Erode => *value = sample.min(*value)
                                }
                            }
                        }
                    }

                    for (c, value) in channels.iter_mut().enumerate() {
                        if !apply[c] {
                            *value = i32::from(src_data[origin + c]);
                        }
                    }

                    if self.edge != MorphologyEdge::None {
                        for (c, value) in channels.iter_mut().enumerate() {
                            let original = i32::from(src_data[origin + c]);

                            *value = match self.mode {
                                MorphologyMode::Dilate => *value - original,
                                MorphologyMode::Erode => original - *value
                            };
                            if self.edge == MorphologyEdge::EdgeSharpen {
                                *value += original;
                            }
                        }
                    }

                    let out = y * dst_stride + x * 4;
                    for (c, value) in channels.iter().enumerate() {
                        dst_data[out + c] = clamp_u8(*value);
                    }
                    dst_data[out + 3] = 255;
                }
            }
        }

        *image = dst;
        Ok(())
    }

    fn supported_layouts(&self) -> &'static [PixelLayout] {
        &[PixelLayout::Rgb24, PixelLayout::Rgba32]
    }
}
