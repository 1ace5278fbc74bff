/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Parametric Bézier curves.
//!
//! This is not a general-purpose Bézier evaluator: CSS easing only ever
//! needs the y-coordinate for a given x-coordinate of a unit curve, so the
//! solver runs a bisection-style search by subdividing the control polygon
//! until a subdivided point's x lands within tolerance of the query.

#![deny(missing_docs)]

use euclid::approxeq::ApproxEq;
use euclid::default::Point2D;

/// Tolerance for matching the query x-coordinate during subdivision.
const SUBDIVISION_TOLERANCE: f64 = 0.00005;

/// Hard cap on subdivision depth. Control points with near-vertical
/// tangents can converge slower than the tolerance assumes; past this depth
/// the midpoint of the current segment is returned as the best estimate.
const MAX_SUBDIVISION_DEPTH: u8 = 48;

/// A unit cubic Bézier curve, used for timing functions in CSS transitions
/// and animations.
///
/// The start and end points are always (0, 0) and (1, 1) so that a
/// transition or animation starts at 0% and ends at 100%.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bezier {
    p1: Point2D<f64>,
    p2: Point2D<f64>,
}

impl Bezier {
    /// Create a unit cubic Bézier curve from the two middle control points.
    ///
    /// X coordinate is time, Y coordinate is function advancement. The
    /// x-components must lie in [0, 1]; the y-components are unconstrained,
    /// which is how overshooting curves are expressed.
    #[inline]
    pub fn new(p1: Point2D<f64>, p2: Point2D<f64>) -> Bezier {
        assert!(
            (0.0..=1.0).contains(&p1.x) && (0.0..=1.0).contains(&p2.x),
            "control point x-components must be within [0, 1]: {:?}, {:?}",
            p1,
            p2
        );
        Bezier { p1, p2 }
    }

    /// Evaluate the eased progress for the elapsed fraction `x`.
    ///
    /// The endpoints are answered exactly so that the first and last frame
    /// of a transition are not disturbed by floating round-off.
    pub fn solve(&self, x: f64) -> f64 {
        if x.approx_eq(&0.0) {
            return 0.0;
        }
        if x.approx_eq(&1.0) {
            return 1.0;
        }
        subdivide(
            x,
            Point2D::new(0.0, 0.0),
            self.p1,
            self.p2,
            Point2D::new(1.0, 1.0),
            0,
        )
    }
}

#[inline]
fn midpoint(a: Point2D<f64>, b: Point2D<f64>) -> Point2D<f64> {
    a.lerp(b, 0.5)
}

#[inline]
fn within_tolerance(x: f64, candidate: f64) -> bool {
    (x - candidate).abs() < SUBDIVISION_TOLERANCE
}

/// Searches for the curve parameter whose x-coordinate matches `x` and
/// returns the y-coordinate there, by splitting the control polygon at its
/// midpoint and recursing into the half containing `x`.
fn subdivide(
    x: f64,
    p0: Point2D<f64>,
    p1: Point2D<f64>,
    p2: Point2D<f64>,
    p3: Point2D<f64>,
    depth: u8,
) -> f64 {
    let p01 = midpoint(p0, p1);
    let p12 = midpoint(p1, p2);
    let p23 = midpoint(p2, p3);
    let p012 = midpoint(p01, p12);
    let p123 = midpoint(p12, p23);
    let p0123 = midpoint(p012, p123);

    if depth == MAX_SUBDIVISION_DEPTH {
        return p0123.y;
    }

    if x < p0123.x {
        if within_tolerance(x, p012.x) {
            return p012.y;
        } else if within_tolerance(x, p0123.x) {
            return p0123.y;
        } else if within_tolerance(x, p0.x) {
            return p0.y;
        } else if within_tolerance(x, p01.x) {
            return p01.y;
        }
        return subdivide(x, p0, p01, p012, p0123, depth + 1);
    }

    if within_tolerance(x, p0123.x) {
        return p0123.y;
    } else if within_tolerance(x, p123.x) {
        return p123.y;
    } else if within_tolerance(x, p23.x) {
        return p23.y;
    } else if within_tolerance(x, p3.x) {
        return p3.y;
    }
    subdivide(x, p0123, p123, p23, p3, depth + 1)
}
