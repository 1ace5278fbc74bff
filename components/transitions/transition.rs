/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! CSS transitions.
//!
//! A [`Transition`] interpolates one property of one element between an
//! owned start snapshot and an owned end snapshot over a fixed duration.
//! The animation driver calls [`process`](Transition::process) once per
//! frame with the current clock; the paint stage then reads
//! [`mix_value`](Transition::mix_value) to draw the in-between state.
//! Each transition is exclusively owned by the style engine entry that
//! created it, so there is no locking anywhere in here.

use std::fmt;

use crate::easing::TimingFunction;
use crate::values::animated::Animate;
use crate::values::color::RGBA;
use crate::values::effects::FilterList;
use crate::values::length::{Length, Width};
use crate::values::transform::TransformList;

/// Lifecycle of a transition.
///
/// There is no path out of `Finished`: a style change that needs further
/// animation creates a fresh transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransitionState {
    /// Created but not yet armed by the scheduler.
    Pending,
    /// Armed; `process` advances the mix value each frame.
    Running,
    /// Progress reached 1.0 and the mix value is frozen at the end blend.
    Finished,
}

/// A timed interpolation of one CSS property value.
///
/// The snapshots are owned copies, not references into the live style tree,
/// so they stay stable for the whole run even if the element's computed
/// style changes mid-flight.
#[derive(Clone, Debug)]
pub struct Transition<T> {
    timing_function: TimingFunction,
    duration: f64,
    delay: f64,
    start_time: f64,
    state: TransitionState,
    start: T,
    end: T,
    mix: T,
}

/// A transition over an RGBA color.
pub type ColorTransition = Transition<RGBA>;
/// A transition over a fixed-point length.
pub type LengthTransition = Transition<Length>;
/// A transition over the `width` property.
pub type WidthTransition = Transition<Width>;
/// A transition over a filter list.
pub type FilterTransition = Transition<FilterList>;
/// A transition over a transform list.
pub type TransformTransition = Transition<TransformList>;

impl<T: Animate + Clone> Transition<T> {
    /// Creates a transition in the `Pending` state, with the mix buffer
    /// initialized to a copy of `start`.
    ///
    /// `duration` and `delay` are in seconds. A non-positive duration is
    /// not rejected: the first in-window tick jumps straight to the end
    /// blend. A negative delay means the delay has already elapsed.
    pub fn new(
        timing_function: TimingFunction,
        duration: f64,
        delay: f64,
        start: T,
        end: T,
    ) -> Self {
        let mix = start.clone();
        Transition {
            timing_function,
            duration,
            delay,
            start_time: 0.0,
            state: TransitionState::Pending,
            start,
            end,
            mix,
        }
    }

    /// Arms the transition to begin at the absolute time `start_time`.
    ///
    /// The scheduler is expected to have folded the delay in already;
    /// [`schedule`](Transition::schedule) does that. Arming a transition
    /// that is already running or finished has no effect.
    pub fn start_at(&mut self, start_time: f64) {
        if self.state == TransitionState::Pending {
            self.start_time = start_time;
            self.state = TransitionState::Running;
        }
    }

    /// Arms the transition from `now`, honoring the configured delay.
    #[inline]
    pub fn schedule(&mut self, now: f64) {
        self.start_at(now + self.delay);
    }

    /// Advances the mix value for the frame clock reading `time`.
    ///
    /// Call once per frame with a monotonically non-decreasing clock; the
    /// behavior of a clock that moves backwards is unspecified. This is a
    /// no-op before the start time, and once the duration has strictly
    /// elapsed the mix value freezes at the end blend.
    pub fn process(&mut self, time: f64) {
        if self.state != TransitionState::Running {
            return;
        }
        if time > self.start_time + self.duration {
            self.mix.animate(&self.start, &self.end, 1.0);
            self.state = TransitionState::Finished;
        } else if time >= self.start_time {
            let frac = (time - self.start_time) / self.duration;
            if frac > 1.0 {
                self.mix.animate(&self.start, &self.end, 1.0);
            } else {
                let outp = self.timing_function.calculate_output(frac);
                self.mix.animate(&self.start, &self.end, outp);
            }
        }
    }
}

impl<T> Transition<T> {
    /// The interpolated value for the current frame.
    #[inline]
    pub fn mix_value(&self) -> &T {
        &self.mix
    }

    /// The current lifecycle state.
    #[inline]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Whether the scheduler has armed this transition.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.state != TransitionState::Pending
    }

    /// Whether the transition has frozen at the end blend.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == TransitionState::Finished
    }

    /// The duration in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// The delay in seconds.
    #[inline]
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// The absolute start time, meaningful once armed.
    #[inline]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// The timing function driving this transition.
    #[inline]
    pub fn timing_function(&self) -> TimingFunction {
        self.timing_function
    }
}

impl<T: fmt::Debug> fmt::Display for Transition<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "from {:?} to {:?}, mix: {:?}, state: {:?}, duration: {}, delay: {}, start_time: {}",
            self.start,
            self.end,
            self.mix,
            self.state,
            self.duration,
            self.delay,
            self.start_time
        )
    }
}
