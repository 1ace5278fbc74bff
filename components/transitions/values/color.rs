/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animated color values.

use crate::values::CSSFloat;

/// An RGBA color with four float channels, nominally in [0, 1].
///
/// Channels are not clamped during animation: an overshooting easing curve
/// legitimately produces out-of-range channels mid-flight, and the paint
/// stage quantizes at the end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RGBA {
    /// The red channel.
    pub red: CSSFloat,
    /// The green channel.
    pub green: CSSFloat,
    /// The blue channel.
    pub blue: CSSFloat,
    /// The alpha channel.
    pub alpha: CSSFloat,
}

impl RGBA {
    /// Creates a new color from float channels.
    #[inline]
    pub fn new(red: CSSFloat, green: CSSFloat, blue: CSSFloat, alpha: CSSFloat) -> Self {
        RGBA {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        RGBA::new(
            red as CSSFloat / 255.0,
            green as CSSFloat / 255.0,
            blue as CSSFloat / 255.0,
            alpha as CSSFloat / 255.0,
        )
    }

    /// Quantizes to 8-bit channels, clamping whatever animation overshoot is
    /// still present.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        fn quantize(channel: CSSFloat) -> u8 {
            (channel.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue),
            quantize(self.alpha),
        ]
    }
}
