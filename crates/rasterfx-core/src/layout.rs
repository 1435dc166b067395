/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel layout information and channel selectors.

/// All pixel layouts understood by the library.
///
/// Both layouts are interleaved, one pixel after the other, with the
/// bytes of a pixel stored in `B,G,R(,A)` order, the DIB convention the
/// buffers originate from. The layout names describe the channel set,
/// not the byte order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PixelLayout {
    /// Blue, Green, Red at 3 bytes per pixel
    Rgb24,
    /// Blue, Green, Red, Alpha at 4 bytes per pixel
    Rgba32
}

impl PixelLayout {
    /// Number of bytes a single pixel occupies.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb24 => 3,
            Self::Rgba32 => 4
        }
    }

    /// Number of color bytes in a pixel, excluding alpha.
    pub const fn color_bytes(self) -> usize {
        3
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba32)
    }

    /// Byte offset of the alpha sample inside a pixel, if the layout
    /// carries one.
    pub const fn alpha_offset(self) -> Option<usize> {
        match self {
            Self::Rgb24 => None,
            Self::Rgba32 => Some(3)
        }
    }
}

/// Selects a single color channel for channel level filters.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rgb {
    Red,
    Green,
    Blue
}

impl Rgb {
    /// Byte offset of this channel inside a pixel.
    ///
    /// Blue is stored first, see [`PixelLayout`].
    pub const fn offset(self) -> usize {
        match self {
            Self::Blue => 0,
            Self::Green => 1,
            Self::Red => 2
        }
    }
}
