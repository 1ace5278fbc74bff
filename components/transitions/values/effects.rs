/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animated values for CSS effects.

use crate::values::color::RGBA;
use crate::values::length::Length;
use crate::values::{Angle, CSSFloat};

/// A simple shadow: color plus offsets and blur, no spread.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleShadow {
    /// Shadow color.
    pub color: RGBA,
    /// Horizontal offset.
    pub horizontal: Length,
    /// Vertical offset.
    pub vertical: Length,
    /// Blur radius.
    pub blur: Length,
}

/// A single `filter` primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Filter {
    /// `blur(<length>)`
    Blur(Length),
    /// `brightness(<factor>)`
    Brightness(CSSFloat),
    /// `contrast(<factor>)`
    Contrast(CSSFloat),
    /// `grayscale(<factor>)`
    Grayscale(CSSFloat),
    /// `hue-rotate(<angle>)`
    HueRotate(Angle),
    /// `invert(<factor>)`
    Invert(CSSFloat),
    /// `opacity(<factor>)`
    Opacity(CSSFloat),
    /// `saturate(<factor>)`
    Saturate(CSSFloat),
    /// `sepia(<factor>)`
    Sepia(CSSFloat),
    /// `drop-shadow(...)`. Blending is not implemented for this primitive;
    /// a drop-shadow slot keeps its previous mix value.
    DropShadow(SimpleShadow),
}

/// An ordered list of filter primitives, applied first to last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterList(pub Vec<Filter>);
