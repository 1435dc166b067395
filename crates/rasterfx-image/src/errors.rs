//! Errors possible during image processing
use std::fmt::{Debug, Formatter};

use rasterfx_core::geom::Rect;
use rasterfx_core::layout::PixelLayout;

/// Errors raised while acquiring a pixel buffer view.
///
/// Acquisition either fully succeeds or fails with one of these; the
/// image is never left half locked.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum BufferErrors {
    /// The requested rectangle has a zero area
    EmptyRect,
    /// The requested rectangle extends past the image
    RectOutOfBounds(Rect, usize, usize),
    /// A shared view was asked for write access
    WriteOnSharedView,
    /// An exclusive view was acquired without write access
    MissingWriteAccess,
    /// Stride is smaller than one row of pixels
    InvalidStride(usize, usize),
    /// The byte buffer length does not match `stride * height`
    LengthMismatch(usize, usize)
}

impl Debug for BufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRect => {
                writeln!(f, "Cannot acquire a zero area rectangle")
            }
            Self::RectOutOfBounds(rect, width, height) => {
                writeln!(
                    f,
                    "Rectangle {rect:?} does not fit in a {width}x{height} image"
                )
            }
            Self::WriteOnSharedView => {
                writeln!(f, "Write access requested on a shared pixel view")
            }
            Self::MissingWriteAccess => {
                writeln!(f, "Exclusive pixel view acquired without write access")
            }
            Self::InvalidStride(stride, minimum) => {
                writeln!(
                    f,
                    "Stride {stride} is smaller than the minimum row length {minimum}"
                )
            }
            Self::LengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Buffer length mismatch, expected {expected} bytes but found {found}"
                )
            }
        }
    }
}

/// All possible image errors that can occur.
///
/// This contains buffer acquisition, parameter and filter execution
/// errors possible in this library.
pub enum ImageErrors {
    /// Acquiring a pixel view failed
    BufferAcquisition(BufferErrors),
    /// Two buffers were expected to share dimensions but don't
    DimensionsMisMatch((usize, usize), (usize, usize)),
    /// The filter does not understand the image's pixel layout
    UnsupportedLayout(PixelLayout, &'static str, &'static [PixelLayout]),
    /// A filter parameter is outside its valid range
    InvalidParameter(&'static str),
    /// Generic errors
    GenericStr(&'static str),
    /// Generic errors which have more context
    GenericString(String)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BufferAcquisition(ref error) => {
                writeln!(f, "Buffer acquisition failed: {error:?}")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected:?} but found {found:?}"
                )
            }
            Self::UnsupportedLayout(present, operation, supported) => {
                writeln!(
                    f,
                    "Unsupported layout {present:?} for the operation {operation}\nSupported layouts are {supported:?}"
                )
            }
            Self::InvalidParameter(reason) => {
                writeln!(f, "{reason}")
            }
            Self::GenericStr(err) => {
                writeln!(f, "{err}")
            }
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl From<BufferErrors> for ImageErrors {
    fn from(from: BufferErrors) -> Self {
        ImageErrors::BufferAcquisition(from)
    }
}

impl From<String> for ImageErrors {
    fn from(s: String) -> ImageErrors {
        ImageErrors::GenericString(s)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(s: &'static str) -> ImageErrors {
        ImageErrors::GenericStr(s)
    }
}
