/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Computed types for CSS easing functions.

use euclid::approxeq::ApproxEq;
use euclid::default::Point2D;
use serde::{Deserialize, Serialize};

use crate::bezier::Bezier;
use crate::values::CSSFloat;

/// Where in each interval a stepped easing function changes value.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum StepPosition {
    /// The value jumps at the start of each interval.
    Start,
    /// The value jumps at the end of each interval.
    End,
}

/// `linear | ease | ease-in | ease-out | ease-in-out`
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TimingKeyword {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl TimingKeyword {
    /// Returns the keyword as a quadruplet of Bezier point coordinates
    /// `(x1, y1, x2, y2)`.
    #[inline]
    pub fn to_bezier(self) -> (CSSFloat, CSSFloat, CSSFloat, CSSFloat) {
        match self {
            TimingKeyword::Linear => (0., 0., 1., 1.),
            TimingKeyword::Ease => (0.25, 0.1, 0.25, 1.),
            TimingKeyword::EaseIn => (0.42, 0., 1., 1.),
            TimingKeyword::EaseOut => (0., 0., 0.58, 1.),
            TimingKeyword::EaseInOut => (0.42, 0., 0.58, 1.),
        }
    }
}

/// A computed timing function: maps the elapsed fraction of a transition to
/// its eased progress.
///
/// Immutable once constructed; one instance is shared read-only across every
/// frame of the transition it was declared for.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub enum TimingFunction {
    /// `cubic-bezier(<number>, <number>, <number>, <number>)`
    #[allow(missing_docs)]
    CubicBezier {
        x1: CSSFloat,
        y1: CSSFloat,
        x2: CSSFloat,
        y2: CSSFloat,
    },
    /// `steps(<integer>, [ start | end ]?)`
    Steps(i32, StepPosition),
}

impl Default for TimingFunction {
    fn default() -> Self {
        TimingFunction::ease()
    }
}

impl TimingFunction {
    /// `ease`
    #[inline]
    pub fn ease() -> Self {
        TimingFunction::from_keyword(TimingKeyword::Ease)
    }

    /// The cubic-bezier curve equivalent to the given keyword.
    #[inline]
    pub fn from_keyword(keyword: TimingKeyword) -> Self {
        let (x1, y1, x2, y2) = keyword.to_bezier();
        TimingFunction::CubicBezier { x1, y1, x2, y2 }
    }

    /// `cubic-bezier(x1, y1, x2, y2)`. The x-components must be within
    /// [0, 1]; anything else is a bug in the declaration producer.
    pub fn cubic_bezier(x1: CSSFloat, y1: CSSFloat, x2: CSSFloat, y2: CSSFloat) -> Self {
        assert!(
            (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2),
            "cubic-bezier x-components must be within [0, 1]: ({}, {})",
            x1,
            x2
        );
        TimingFunction::CubicBezier { x1, y1, x2, y2 }
    }

    /// `steps(intervals, position)`. The interval count must be at least 1.
    pub fn steps(intervals: i32, position: StepPosition) -> Self {
        assert!(
            intervals >= 1,
            "step easing needs a positive interval count: {}",
            intervals
        );
        TimingFunction::Steps(intervals, position)
    }

    /// The output of the timing function given the progress ratio of this
    /// transition.
    pub fn calculate_output(&self, progress: f64) -> f64 {
        match *self {
            TimingFunction::CubicBezier { x1, y1, x2, y2 } => Bezier::new(
                Point2D::new(x1 as f64, y1 as f64),
                Point2D::new(x2 as f64, y2 as f64),
            )
            .solve(progress),
            TimingFunction::Steps(intervals, position) => {
                calculate_step_output(progress, intervals, position == StepPosition::Start)
            },
        }
    }
}

/// Step easing per interval count and change-point policy.
///
/// `t` outside [0, 1] is a caller bug: the transition clamps its elapsed
/// fraction before ever getting here.
fn calculate_step_output(t: f64, intervals: i32, jump_at_start: bool) -> f64 {
    assert!(
        (0.0..=1.0).contains(&t),
        "progress outside the interval [0, 1]: {}",
        t
    );
    assert!(
        intervals >= 1,
        "step easing needs a positive interval count: {}",
        intervals
    );
    if intervals == 1 {
        // Shortcut for the common steps(1) case.
        return if jump_at_start {
            1.0
        } else if t < 1.0 {
            0.0
        } else {
            1.0
        };
    }
    if t.approx_eq(&0.0) {
        return if jump_at_start {
            1.0 / intervals as f64
        } else {
            0.0
        };
    }
    if t.approx_eq(&1.0) {
        return 1.0;
    }
    let step_incr = 1.0 / intervals as f64;
    let step = (jump_at_start as i32) + (t / step_incr) as i32;
    step.min(intervals) as f64 * step_incr
}
