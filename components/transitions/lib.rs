/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Timed interpolation of CSS property values.
//!
//! The style engine hands this crate a start snapshot, an end snapshot, a
//! timing function, and a per-frame clock reading; the crate hands back the
//! mixed value the paint stage should draw for that frame. Parsing,
//! cascading, and layout happen elsewhere — by the time a [`Transition`]
//! exists, both endpoints are fully computed values.
//!
//! [`Transition`]: crate::transition::Transition

#![deny(unsafe_code)]

pub mod bezier;
pub mod easing;
pub mod registry;
pub mod transition;
pub mod values;

pub use crate::transition::{
    ColorTransition, FilterTransition, LengthTransition, TransformTransition, Transition,
    TransitionState, WidthTransition,
};
