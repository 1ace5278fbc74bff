/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Blending of animated values.
//!
//! Every frame the transition machinery re-blends its start and end
//! snapshots into a mix buffer at the eased progress for that frame. The
//! blend is a plain linear mix with no internal clamping, so easing curves
//! whose control points leave [0, 1] in y extrapolate past the endpoints
//! the way the CSS model expects.

use std::cmp;
use std::mem;

use app_units::Au;
use log::debug;

use crate::values::color::RGBA;
use crate::values::effects::{Filter, FilterList};
use crate::values::length::Width;
use crate::values::transform::{NoneBehavior, TransformList, TransformOperation};
use crate::values::{Angle, CSSFloat};

/// Linear blend between two scalars. Deliberately unclamped.
#[inline]
pub fn mix(progress: f64, from: f64, to: f64) -> f64 {
    (1.0 - progress) * from + progress * to
}

/// In-place update of a transition's mix buffer.
///
/// `self` is the mix buffer; `from` and `to` are the owned start and end
/// snapshots. Scalar implementations overwrite the buffer outright. List
/// implementations pair entries positionally and leave a slot untouched
/// when the pairing fails, so that slot keeps whatever the previous frame
/// produced.
pub trait Animate {
    /// Blend `from` towards `to` at the eased `progress`, storing the
    /// result into `self`.
    fn animate(&mut self, from: &Self, to: &Self, progress: f64);
}

/// Why a positional slot of two animated lists did or did not blend.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlotPairing {
    /// Both lists have an entry of the same kind at this position.
    Matched,
    /// Both lists have an entry at this position, but of different kinds.
    KindMismatch,
    /// One list has no entry at this position.
    LengthMismatch,
}

/// Classifies the pairing of one positional slot of two animated lists.
///
/// Pairing is purely positional: entries are never searched for a
/// same-kind partner elsewhere in the other list. A `KindMismatch` or
/// `LengthMismatch` slot is not an error; its mix value is simply left
/// unchanged for that frame.
pub fn pair_slot<T>(from: Option<&T>, to: Option<&T>) -> SlotPairing {
    match (from, to) {
        (Some(from), Some(to)) if mem::discriminant(from) == mem::discriminant(to) => {
            SlotPairing::Matched
        },
        (Some(_), Some(_)) => SlotPairing::KindMismatch,
        _ => SlotPairing::LengthMismatch,
    }
}

impl Animate for CSSFloat {
    #[inline]
    fn animate(&mut self, from: &Self, to: &Self, progress: f64) {
        *self = mix(progress, *from as f64, *to as f64) as CSSFloat;
    }
}

impl Animate for Au {
    #[inline]
    fn animate(&mut self, from: &Self, to: &Self, progress: f64) {
        *self = Au(mix(progress, from.0 as f64, to.0 as f64).round() as i32);
    }
}

impl Animate for Width {
    #[inline]
    fn animate(&mut self, from: &Self, to: &Self, progress: f64) {
        self.0.animate(&from.0, &to.0, progress);
    }
}

impl Animate for Angle {
    #[inline]
    fn animate(&mut self, from: &Self, to: &Self, progress: f64) {
        *self = Angle::from_degrees(
            mix(progress, from.degrees() as f64, to.degrees() as f64) as CSSFloat,
        );
    }
}

impl Animate for RGBA {
    #[inline]
    fn animate(&mut self, from: &Self, to: &Self, progress: f64) {
        self.red.animate(&from.red, &to.red, progress);
        self.green.animate(&from.green, &to.green, progress);
        self.blue.animate(&from.blue, &to.blue, progress);
        self.alpha.animate(&from.alpha, &to.alpha, progress);
    }
}

impl Animate for FilterList {
    fn animate(&mut self, from: &Self, to: &Self, progress: f64) {
        let slots = cmp::max(from.0.len(), to.0.len());
        for index in 0..slots {
            let (from_filter, to_filter) = (from.0.get(index), to.0.get(index));
            match pair_slot(from_filter, to_filter) {
                SlotPairing::Matched => {},
                pairing => {
                    debug!("filter slot {} left unmixed: {:?}", index, pairing);
                    continue;
                },
            }
            let (Some(from_filter), Some(to_filter)) = (from_filter, to_filter) else {
                continue;
            };
            let Some(mixed) = self.0.get_mut(index) else {
                continue;
            };
            mix_filter(mixed, from_filter, to_filter, progress);
        }
    }
}

/// Blends one same-kind filter pair into `mixed`. Angle for `hue-rotate`,
/// a length or factor for the rest; `drop-shadow` has no blending yet and
/// keeps its previous mix value.
fn mix_filter(mixed: &mut Filter, from: &Filter, to: &Filter, progress: f64) {
    match (mixed, from, to) {
        (Filter::Blur(mixed), Filter::Blur(from), Filter::Blur(to)) => {
            mixed.animate(from, to, progress)
        },
        (Filter::Brightness(mixed), Filter::Brightness(from), Filter::Brightness(to)) => {
            mixed.animate(from, to, progress)
        },
        (Filter::Contrast(mixed), Filter::Contrast(from), Filter::Contrast(to)) => {
            mixed.animate(from, to, progress)
        },
        (Filter::Grayscale(mixed), Filter::Grayscale(from), Filter::Grayscale(to)) => {
            mixed.animate(from, to, progress)
        },
        (Filter::HueRotate(mixed), Filter::HueRotate(from), Filter::HueRotate(to)) => {
            mixed.animate(from, to, progress)
        },
        (Filter::Invert(mixed), Filter::Invert(from), Filter::Invert(to)) => {
            mixed.animate(from, to, progress)
        },
        (Filter::Opacity(mixed), Filter::Opacity(from), Filter::Opacity(to)) => {
            mixed.animate(from, to, progress)
        },
        (Filter::Saturate(mixed), Filter::Saturate(from), Filter::Saturate(to)) => {
            mixed.animate(from, to, progress)
        },
        (Filter::Sepia(mixed), Filter::Sepia(from), Filter::Sepia(to)) => {
            mixed.animate(from, to, progress)
        },
        (Filter::DropShadow(..), ..) => {
            debug!("drop-shadow blending not implemented; slot left unmixed");
        },
        _ => {},
    }
}

impl Animate for TransformList {
    fn animate(&mut self, from: &Self, to: &Self, progress: f64) {
        let none_behavior = self.none_behavior();
        let slots = cmp::max(from.ops.len(), to.ops.len());
        for index in 0..slots {
            let (from_op, to_op) = (from.ops.get(index), to.ops.get(index));
            match pair_slot(from_op, to_op) {
                SlotPairing::Matched => {},
                pairing => {
                    debug!("transform slot {} left unmixed: {:?}", index, pairing);
                    continue;
                },
            }
            let (Some(from_op), Some(to_op)) = (from_op, to_op) else {
                continue;
            };
            if matches!(from_op, TransformOperation::None) {
                match none_behavior {
                    NoneBehavior::TerminateList => {
                        debug!("`none` at transform slot {} ends mixing", index);
                        return;
                    },
                    NoneBehavior::SkipEntry => continue,
                }
            }
            let Some(mixed) = self.ops.get_mut(index) else {
                continue;
            };
            mix_transform(mixed, from_op, to_op, progress);
        }
    }
}

/// Blends one same-kind transform pair into `mixed`: a length pair for
/// translate and scale, one or two angles for rotate and the skews.
/// `matrix` has no blending yet and keeps its previous mix value.
fn mix_transform(
    mixed: &mut TransformOperation,
    from: &TransformOperation,
    to: &TransformOperation,
    progress: f64,
) {
    use crate::values::transform::TransformOperation::*;
    match (mixed, from, to) {
        (Translate(mx, my), Translate(fx, fy), Translate(tx, ty)) => {
            mx.animate(fx, tx, progress);
            my.animate(fy, ty, progress);
        },
        (Scale(mx, my), Scale(fx, fy), Scale(tx, ty)) => {
            mx.animate(fx, tx, progress);
            my.animate(fy, ty, progress);
        },
        (Rotate(mixed), Rotate(from), Rotate(to)) => mixed.animate(from, to, progress),
        (Skew(ma, mb), Skew(fa, fb), Skew(ta, tb)) => {
            ma.animate(fa, ta, progress);
            mb.animate(fb, tb, progress);
        },
        (SkewX(mixed), SkewX(from), SkewX(to)) => mixed.animate(from, to, progress),
        (SkewY(mixed), SkewY(from), SkewY(to)) => mixed.animate(from, to, progress),
        (Matrix(..), ..) => {
            debug!("matrix blending not implemented; slot left unmixed");
        },
        _ => {},
    }
}
