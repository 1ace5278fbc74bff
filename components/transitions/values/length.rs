/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Fixed-point length values.

pub use app_units::Au;

/// A computed length, stored in app units (a scaled integer) so layout math
/// stays deterministic across frames.
pub type Length = Au;

/// The computed value of the `width` property.
///
/// Kept distinct from [`Length`] so a width snapshot cannot be fed into a
/// generic length slot by accident.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Width(pub Au);
