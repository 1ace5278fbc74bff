/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use euclid::default::Point2D;
use transitions::bezier::Bezier;

fn ease() -> Bezier {
    Bezier::new(Point2D::new(0.25, 0.1), Point2D::new(0.25, 1.0))
}

#[test]
fn endpoints_are_exact_for_any_control_points() {
    let curves = [
        ease(),
        Bezier::new(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0)),
        // Overshooting y-components are legal.
        Bezier::new(Point2D::new(0.68, -0.55), Point2D::new(0.265, 1.55)),
    ];
    for bezier in &curves {
        assert_eq!(bezier.solve(0.0), 0.0);
        assert_eq!(bezier.solve(1.0), 1.0);
    }
}

#[test]
fn linear_curve_tracks_identity() {
    let bezier = Bezier::new(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0));
    for i in 1..10 {
        let x = f64::from(i) / 10.0;
        assert!(
            (bezier.solve(x) - x).abs() < 1e-4,
            "y should track x at {}",
            x
        );
    }
}

#[test]
fn ease_curve_is_monotone() {
    let bezier = ease();
    let mut previous = 0.0;
    for i in 1..20 {
        let y = bezier.solve(f64::from(i) / 20.0);
        assert!(y >= previous, "decreased at step {}: {} < {}", i, y, previous);
        previous = y;
    }
}

#[test]
fn ease_curve_midpoint_matches_reference_value() {
    // cubic-bezier(0.25, 0.1, 0.25, 1.0) passes through y ~= 0.8024 at
    // x = 0.5.
    let y = ease().solve(0.5);
    assert!((y - 0.8024).abs() < 5e-3, "got {}", y);
}

#[test]
fn overshooting_curve_leaves_unit_range() {
    let bezier = Bezier::new(Point2D::new(0.34, 1.56), Point2D::new(0.64, 1.0));
    let max = (1..10)
        .map(|i| bezier.solve(f64::from(i) / 10.0))
        .fold(f64::MIN, f64::max);
    assert!(max > 1.0, "expected overshoot above 1.0, max was {}", max);
}

#[test]
fn steep_control_points_still_terminate() {
    let bezier = Bezier::new(Point2D::new(0.0, 5.0), Point2D::new(1.0, -5.0));
    for i in 1..10 {
        assert!(bezier.solve(f64::from(i) / 10.0).is_finite());
    }
}

#[test]
#[should_panic]
fn control_point_x_outside_unit_range_is_rejected() {
    let _ = Bezier::new(Point2D::new(1.2, 0.0), Point2D::new(0.5, 1.0));
}
