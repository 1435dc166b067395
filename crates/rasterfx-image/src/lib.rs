/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Raster image representation for the rasterfx crates
//!
//! An image here is a single interleaved byte buffer with an explicit
//! stride, see [`image::RasterImage`]. Filters reach the bytes through
//! scoped acquisitions ([`buffer::Pixels`]/[`buffer::PixelsMut`]) whose
//! release is guaranteed by `Drop` on every exit path.
//!
//! Decoding, encoding, interpolated drawing and text rendering are
//! external collaborators, the library only defines their seams in
//! [`traits`].
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
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::doc_markdown
)]

pub mod buffer;
pub mod errors;
pub mod format;
pub mod image;
pub mod placeholder;
pub mod quality;
pub mod traits;
