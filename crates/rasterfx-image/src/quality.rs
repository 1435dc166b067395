/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encode quality presets
//!
//! Encoders take quality as a number between 0 and 100; these presets
//! name the values pipelines commonly reach for so callers don't pass
//! around magic integers.

use crate::errors::ImageErrors;

/// A named encode quality level.
///
/// Each preset maps to a fixed value on the 0 to 100 scale, `Custom`
/// carries an arbitrary validated value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EncodeQuality {
    UltraLow,
    VeryLow,
    Low,
    Medium,
    /// The usual tradeoff for images served over the network.
    Web,
    High,
    VeryHigh,
    UltraHigh,
    Custom(u8)
}

impl EncodeQuality {
    /// The quality value on the 0 to 100 scale.
    ///
    /// # Errors
    /// - `Custom` carries a value above 100
    pub fn value(self) -> Result<u8, ImageErrors> {
        let value = match self {
            Self::UltraLow => 0,
            Self::VeryLow => 20,
            Self::Low => 35,
            Self::Medium => 50,
            Self::Web => 60,
            Self::High => 75,
            Self::VeryHigh => 90,
            Self::UltraHigh => 100,
            Self::Custom(v) => {
                if v > 100 {
                    return Err(ImageErrors::InvalidParameter(
                        "Custom encode quality must be between 0 and 100"
                    ));
                }
                v
            }
        };
        Ok(value)
    }
}
