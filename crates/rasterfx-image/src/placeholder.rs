/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Diagnostic placeholder images
//!
//! Some callers would rather ship an image that says what went wrong
//! than propagate an error across a service boundary. This module is
//! that compatibility layer: it runs an operation and, on failure,
//! renders the error into an image through a caller provided
//! [`TextRendererTrait`].
//!
//! The core library never does this on its own, errors stay typed
//! unless a caller opts in here.

use log::trace;

use crate::errors::ImageErrors;
use crate::image::RasterImage;
use crate::traits::{OperationsTrait, TextRendererTrait};

/// Render an error into a diagnostic image.
pub fn error_image<R: TextRendererTrait>(renderer: &R, error: &ImageErrors) -> RasterImage {
    renderer.render(&format!("{error:?}"))
}

/// Execute an operation, replacing the image with a rendered diagnostic
/// on failure.
///
/// Returns the error that was swallowed, if any, so callers can still
/// log or count it.
pub fn execute_or_placeholder<R: TextRendererTrait>(
    operation: &dyn OperationsTrait, image: &mut RasterImage, renderer: &R
) -> Option<ImageErrors> {
    match operation.execute(image) {
        Ok(()) => None,
        Err(error) => {
            trace!(
                "The {} filter failed, substituting a placeholder",
                operation.name()
            );
            *image = error_image(renderer, &error);
            Some(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use rasterfx_core::layout::PixelLayout;

    use crate::errors::ImageErrors;
    use crate::image::RasterImage;
    use crate::placeholder::execute_or_placeholder;
    use crate::traits::{OperationsTrait, TextRendererTrait};

    struct FailingOp;

    impl OperationsTrait for FailingOp {
        fn name(&self) -> &'static str {
            "always fails"
        }
        fn execute_impl(&self, _: &mut RasterImage) -> Result<(), ImageErrors> {
            Err(ImageErrors::GenericStr("boom"))
        }
        fn supported_layouts(&self) -> &'static [PixelLayout] {
            &[PixelLayout::Rgb24, PixelLayout::Rgba32]
        }
    }

    struct OnePixelRenderer;

    impl TextRendererTrait for OnePixelRenderer {
        fn render(&self, text: &str) -> RasterImage {
            // encode the message length into the width
            RasterImage::new(PixelLayout::Rgb24, text.len().max(1), 1)
        }
    }

    #[test]
    fn failure_substitutes_a_rendered_image() {
        let mut image = RasterImage::new(PixelLayout::Rgb24, 8, 8);
        let swallowed = execute_or_placeholder(&FailingOp, &mut image, &OnePixelRenderer);

        assert!(swallowed.is_some());
        assert_eq!(image.height(), 1);
        assert!(image.width() >= "boom".len());
    }
}
