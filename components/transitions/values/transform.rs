/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animated values for CSS transforms.

use crate::values::length::Length;
use crate::values::{Angle, CSSFloat};

/// A 2D transformation matrix, `matrix(a, b, c, d, e, f)`.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    pub a: CSSFloat,
    pub b: CSSFloat,
    pub c: CSSFloat,
    pub d: CSSFloat,
    pub e: CSSFloat,
    pub f: CSSFloat,
}

/// A single operation in a CSS `transform` list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOperation {
    /// `none` occupying a list slot.
    None,
    /// `matrix(...)`. Blending is not implemented for this operation; a
    /// matrix slot keeps its previous mix value.
    Matrix(Matrix),
    /// `translate(<length>, <length>)`
    Translate(Length, Length),
    /// `scale(...)`, with both factors carried as computed lengths.
    Scale(Length, Length),
    /// `rotate(<angle>)`
    Rotate(Angle),
    /// `skew(<angle>, <angle>)`
    Skew(Angle, Angle),
    /// `skewX(<angle>)`
    SkewX(Angle),
    /// `skewY(<angle>)`
    SkewY(Angle),
}

/// How a matched pair of `none` entries affects the rest of the mixing
/// loop.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NoneBehavior {
    /// A matched pair of `none` entries ends mixing for the remainder of
    /// the list; later slots keep their previous mix values.
    #[default]
    TerminateList,
    /// A matched pair of `none` entries is skipped and mixing continues
    /// with the next slot.
    SkipEntry,
}

/// An ordered list of transform operations, outermost first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformList {
    /// The operations.
    pub ops: Vec<TransformOperation>,
    none_behavior: NoneBehavior,
}

impl TransformList {
    /// Creates a list with the default `none` handling.
    #[inline]
    pub fn new(ops: Vec<TransformOperation>) -> Self {
        TransformList {
            ops,
            none_behavior: NoneBehavior::default(),
        }
    }

    /// Overrides how `none` entries are treated during mixing.
    #[inline]
    pub fn with_none_behavior(mut self, none_behavior: NoneBehavior) -> Self {
        self.none_behavior = none_behavior;
        self
    }

    /// The configured `none` handling.
    #[inline]
    pub fn none_behavior(&self) -> NoneBehavior {
        self.none_behavior
    }
}
