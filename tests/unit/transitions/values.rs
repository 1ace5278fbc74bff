/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use app_units::Au;
use transitions::values::animated::{Animate, SlotPairing, mix, pair_slot};
use transitions::values::color::RGBA;
use transitions::values::effects::{Filter, FilterList, SimpleShadow};
use transitions::values::length::Width;
use transitions::values::transform::{
    Matrix, NoneBehavior, TransformList, TransformOperation,
};
use transitions::values::Angle;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_approx(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn mix_is_exact_linear_blend() {
    assert_eq!(mix(0.25, 4.0, 8.0), 5.0);
    assert_eq!(mix(0.0, 4.0, 8.0), 4.0);
    assert_eq!(mix(1.0, 4.0, 8.0), 8.0);
}

#[test]
fn color_mix_is_exact_at_the_endpoints() {
    let from = RGBA::from_rgba8(150, 0, 0, 102);
    let to = RGBA::from_rgba8(0, 150, 0, 204);

    let mut mixed = from;
    mixed.animate(&from, &to, 0.0);
    assert_eq!(mixed, from);

    mixed.animate(&from, &to, 1.0);
    assert_eq!(mixed, to);
}

#[test]
fn color_extrapolates_without_clamping() {
    // Some cubic-bezier curves produce eased progress outside [0, 1]; the
    // blend must pass the overshoot through.
    let from = RGBA::new(0.3, 0.0, 0.0, 0.4);
    let to = RGBA::new(0.0, 1.0, 0.0, 0.6);
    let mut mixed = from;
    mixed.animate(&from, &to, -0.5);
    assert_approx(mixed.red, 0.45);
    assert_approx(mixed.green, -0.5);
    assert_approx(mixed.alpha, 0.3);
}

#[test]
fn color_quantizes_with_clamping() {
    let color = RGBA::new(1.2, -0.1, 0.5, 1.0);
    assert_eq!(color.to_rgba8(), [255, 0, 128, 255]);
}

#[test]
fn length_mix_is_exact_linear_blend() {
    let mut mixed = Au(100);
    mixed.animate(&Au(100), &Au(200), 0.25);
    assert_eq!(mixed, Au(125));

    // Extrapolation below zero progress.
    mixed.animate(&Au(100), &Au(200), -0.25);
    assert_eq!(mixed, Au(75));
}

#[test]
fn width_blends_like_a_length() {
    let mut mixed = Width(Au(0));
    mixed.animate(&Width(Au(0)), &Width(Au(60)), 0.5);
    assert_eq!(mixed, Width(Au(30)));
}

#[test]
fn angle_blends_in_degrees() {
    let mut mixed = Angle::from_degrees(0.0);
    mixed.animate(&Angle::from_degrees(0.0), &Angle::from_degrees(90.0), 0.5);
    assert_approx(mixed.degrees(), 45.0);
}

#[test]
fn slot_pairing_is_positional() {
    let blur = Filter::Blur(Au(0));
    let sepia = Filter::Sepia(1.0);
    assert_eq!(pair_slot(Some(&blur), Some(&blur)), SlotPairing::Matched);
    assert_eq!(
        pair_slot(Some(&blur), Some(&sepia)),
        SlotPairing::KindMismatch
    );
    assert_eq!(pair_slot(Some(&blur), None), SlotPairing::LengthMismatch);
}

#[test]
fn filter_lists_blend_pairwise() {
    init_logging();
    let from = FilterList(vec![
        Filter::Blur(Au(0)),
        Filter::Brightness(1.0),
        Filter::HueRotate(Angle::from_degrees(0.0)),
    ]);
    let to = FilterList(vec![
        Filter::Blur(Au(600)),
        Filter::Brightness(3.0),
        Filter::HueRotate(Angle::from_degrees(180.0)),
    ]);
    let mut mixed = from.clone();
    mixed.animate(&from, &to, 0.5);
    assert_eq!(mixed.0[0], Filter::Blur(Au(300)));
    assert_eq!(mixed.0[1], Filter::Brightness(2.0));
    assert_eq!(mixed.0[2], Filter::HueRotate(Angle::from_degrees(90.0)));
}

#[test]
fn mismatched_filter_slots_keep_their_previous_mix() {
    init_logging();
    let from = FilterList(vec![Filter::Blur(Au(0)), Filter::Brightness(1.0)]);
    let to = FilterList(vec![Filter::Blur(Au(600)), Filter::Contrast(3.0)]);
    let mut mixed = from.clone();
    mixed.animate(&from, &to, 0.5);
    assert_eq!(mixed.0[0], Filter::Blur(Au(300)));
    // Kind mismatch at slot 1: untouched.
    assert_eq!(mixed.0[1], Filter::Brightness(1.0));
}

#[test]
fn short_filter_lists_leave_the_tail_unmixed() {
    init_logging();
    let from = FilterList(vec![Filter::Blur(Au(0)), Filter::Sepia(0.0)]);
    let to = FilterList(vec![Filter::Blur(Au(600))]);
    let mut mixed = from.clone();
    mixed.animate(&from, &to, 0.5);
    assert_eq!(mixed.0[0], Filter::Blur(Au(300)));
    assert_eq!(mixed.0[1], Filter::Sepia(0.0));
}

#[test]
fn drop_shadow_slots_are_never_blended() {
    init_logging();
    let shadow = |offset| SimpleShadow {
        color: RGBA::from_rgba8(0, 0, 0, 255),
        horizontal: Au(offset),
        vertical: Au(offset),
        blur: Au(0),
    };
    let from = FilterList(vec![Filter::DropShadow(shadow(0))]);
    let to = FilterList(vec![Filter::DropShadow(shadow(600))]);
    let mut mixed = from.clone();
    mixed.animate(&from, &to, 0.5);
    assert_eq!(mixed.0[0], Filter::DropShadow(shadow(0)));
}

#[test]
fn transform_lists_blend_pairwise() {
    init_logging();
    let from = TransformList::new(vec![
        TransformOperation::Translate(Au(0), Au(0)),
        TransformOperation::Scale(Au(60), Au(60)),
        TransformOperation::Rotate(Angle::from_degrees(0.0)),
        TransformOperation::Skew(Angle::from_degrees(0.0), Angle::from_degrees(0.0)),
    ]);
    let to = TransformList::new(vec![
        TransformOperation::Translate(Au(600), Au(1200)),
        TransformOperation::Scale(Au(120), Au(120)),
        TransformOperation::Rotate(Angle::from_degrees(90.0)),
        TransformOperation::Skew(Angle::from_degrees(10.0), Angle::from_degrees(20.0)),
    ]);
    let mut mixed = from.clone();
    mixed.animate(&from, &to, 0.5);
    assert_eq!(
        mixed.ops[0],
        TransformOperation::Translate(Au(300), Au(600))
    );
    assert_eq!(mixed.ops[1], TransformOperation::Scale(Au(90), Au(90)));
    assert_eq!(
        mixed.ops[2],
        TransformOperation::Rotate(Angle::from_degrees(45.0))
    );
    assert_eq!(
        mixed.ops[3],
        TransformOperation::Skew(Angle::from_degrees(5.0), Angle::from_degrees(10.0))
    );
}

#[test]
fn matched_none_terminates_the_rest_of_the_list() {
    init_logging();
    let from = TransformList::new(vec![
        TransformOperation::Rotate(Angle::from_degrees(0.0)),
        TransformOperation::None,
        TransformOperation::Translate(Au(0), Au(0)),
    ]);
    let to = TransformList::new(vec![
        TransformOperation::Rotate(Angle::from_degrees(90.0)),
        TransformOperation::None,
        TransformOperation::Translate(Au(600), Au(600)),
    ]);
    let mut mixed = from.clone();
    mixed.animate(&from, &to, 0.5);
    assert_eq!(
        mixed.ops[0],
        TransformOperation::Rotate(Angle::from_degrees(45.0))
    );
    // Everything after the `none` pair keeps its previous mix value.
    assert_eq!(mixed.ops[2], TransformOperation::Translate(Au(0), Au(0)));
}

#[test]
fn matched_none_can_be_configured_to_skip_instead() {
    init_logging();
    let from = TransformList::new(vec![
        TransformOperation::None,
        TransformOperation::Translate(Au(0), Au(0)),
    ])
    .with_none_behavior(NoneBehavior::SkipEntry);
    let to = TransformList::new(vec![
        TransformOperation::None,
        TransformOperation::Translate(Au(600), Au(600)),
    ]);
    let mut mixed = from.clone();
    mixed.animate(&from, &to, 0.5);
    assert_eq!(
        mixed.ops[1],
        TransformOperation::Translate(Au(300), Au(300))
    );
}

#[test]
fn matrix_slots_are_never_blended() {
    init_logging();
    let matrix = |scale| Matrix {
        a: scale,
        b: 0.0,
        c: 0.0,
        d: scale,
        e: 0.0,
        f: 0.0,
    };
    let from = TransformList::new(vec![TransformOperation::Matrix(matrix(1.0))]);
    let to = TransformList::new(vec![TransformOperation::Matrix(matrix(3.0))]);
    let mut mixed = from.clone();
    mixed.animate(&from, &to, 0.5);
    assert_eq!(mixed.ops[0], TransformOperation::Matrix(matrix(1.0)));
}
