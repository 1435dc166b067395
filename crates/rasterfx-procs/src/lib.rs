/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image filters for `rasterfx`
//!
//! Every filter here implements the `OperationsTrait` defined by
//! `rasterfx-image` and works over stride aware interleaved byte
//! buffers acquired from a `RasterImage`.
//!
//! # Example
//! - Brighten an image by 40
//! ```
//! use rasterfx_core::layout::PixelLayout;
//! use rasterfx_image::image::RasterImage;
//! use rasterfx_image::traits::OperationsTrait;
//! use rasterfx_procs::brighten::Brighten;
//! let mut image = RasterImage::fill(&[100, 100, 100], PixelLayout::Rgb24, 100, 100).unwrap();
//! let brighten = Brighten::new(40);
//! // execute the filter
//! brighten.execute(&mut image).unwrap();
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

pub mod balance;
pub mod box_blur;
pub mod brighten;
pub mod channel_merge;
pub mod crop;
pub mod crop_background;
pub mod difference;
pub mod isolate;
pub mod morphology;
pub mod overlay;
pub mod sobel;
pub mod stretch;
mod utils;
