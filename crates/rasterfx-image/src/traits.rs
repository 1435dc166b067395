/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Seams between the filter engine and the outside world
//!
//! [`OperationsTrait`] is the contract every filter implements.
//! The remaining traits describe the external collaborators the engine
//! consumes but does not implement: decoding, encoding, interpolated
//! drawing and text rendering all live behind these seams.

use log::trace;
use rasterfx_core::geom::Rect;
use rasterfx_core::layout::PixelLayout;

use crate::errors::ImageErrors;
use crate::format::ImageFormat;
use crate::image::RasterImage;
use crate::quality::EncodeQuality;

/// An image operation.
///
/// Filters either mutate the image in place or replace it with a newly
/// allocated result; each filter documents which. `execute` is the
/// entry point callers use, it verifies the pixel layout before
/// delegating to the filter body.
pub trait OperationsTrait {
    /// The name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation, skipping layout validation.
    ///
    /// # Errors
    /// Operation specific, see the implementing filter.
    fn execute_impl(&self, image: &mut RasterImage) -> Result<(), ImageErrors>;

    /// Execute the operation on an image.
    ///
    /// # Errors
    /// - The image layout is not in [`supported_layouts`](Self::supported_layouts)
    /// - Whatever `execute_impl` reports
    fn execute(&self, image: &mut RasterImage) -> Result<(), ImageErrors> {
        if !self.supported_layouts().contains(&image.layout()) {
            return Err(ImageErrors::UnsupportedLayout(
                image.layout(),
                self.name(),
                self.supported_layouts()
            ));
        }
        trace!("Running the {} filter", self.name());

        self.execute_impl(image)
    }

    /// Pixel layouts this operation understands.
    fn supported_layouts(&self) -> &'static [PixelLayout];
}

/// Decodes encoded image bytes into a [`RasterImage`].
///
/// Implementations normalize whatever they read into one of the two
/// supported pixel layouts.
pub trait DecoderTrait {
    /// Decode a buffer of encoded bytes.
    ///
    /// # Errors
    /// Decoder specific.
    fn decode(&mut self, buffer: &[u8]) -> Result<RasterImage, ImageErrors>;

    /// Dimensions of the image, if known before a full decode.
    fn dimensions(&self) -> Option<(usize, usize)>;
}

/// Encodes a [`RasterImage`] into a container format.
pub trait EncoderTrait {
    /// Encode an image at the given quality.
    ///
    /// # Errors
    /// Encoder specific.
    fn encode(
        &self, image: &RasterImage, format: ImageFormat, quality: EncodeQuality
    ) -> Result<Vec<u8>, ImageErrors>;
}

/// A high quality interpolated scale and draw primitive.
///
/// Used by the resize family of operations which sit outside this
/// engine; the engine itself only stretches through its internal
/// bilinear helper.
pub trait RasterizerTrait {
    /// Draw `src_rect` of `source` into `dest_rect` of a new canvas of
    /// `dest_width` x `dest_height` pixels.
    ///
    /// # Errors
    /// Rasterizer specific.
    fn scale_draw(
        &self, source: &RasterImage, src_rect: Rect, dest_width: usize, dest_height: usize,
        dest_rect: Rect
    ) -> Result<RasterImage, ImageErrors>;
}

/// Renders a line of text into an image.
///
/// The engine only uses this to synthesize diagnostic placeholder
/// images, see [`placeholder`](crate::placeholder).
pub trait TextRendererTrait {
    fn render(&self, text: &str) -> RasterImage;
}
