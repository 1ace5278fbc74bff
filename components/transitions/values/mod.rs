/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animated CSS value types.
//!
//! Everything here is a *computed* value: the cascade has already resolved
//! relative units, keywords, and inheritance before a snapshot lands in a
//! transition.

pub mod animated;
pub mod color;
pub mod effects;
pub mod length;
pub mod transform;

/// A float as specified in CSS.
pub type CSSFloat = f32;

/// A computed angle, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(CSSFloat);

impl Angle {
    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(degrees: CSSFloat) -> Self {
        Angle(degrees)
    }

    /// The angle in degrees.
    #[inline]
    pub fn degrees(self) -> CSSFloat {
        self.0
    }

    /// The angle in radians.
    #[inline]
    pub fn radians(self) -> CSSFloat {
        self.0.to_radians()
    }
}
