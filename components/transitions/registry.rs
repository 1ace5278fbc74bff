/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! A registry of numeric self-checks.
//!
//! Checks are plain functions on an explicitly constructed
//! [`CheckRegistry`]: whoever boots the process builds the registry and
//! hands it to a runner. Nothing registers itself from a static
//! initializer, so there is no initialization-order hazard to reason
//! about.

use euclid::default::Point2D;
use log::{error, info};

use crate::bezier::Bezier;

/// A named self-check.
pub struct Check {
    /// Name shown in logs and failure reports.
    pub name: &'static str,
    /// The check body; `Err` carries a description of the failure.
    pub run: fn() -> Result<(), String>,
}

/// An explicitly constructed set of self-checks.
#[derive(Default)]
pub struct CheckRegistry {
    checks: Vec<Check>,
}

impl CheckRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        CheckRegistry { checks: Vec::new() }
    }

    /// A registry preloaded with this crate's built-in checks.
    pub fn with_builtin_checks() -> Self {
        let mut registry = CheckRegistry::new();
        registry.register("bezier_ease_curve", check_bezier_ease_curve);
        registry
    }

    /// Adds a named check.
    pub fn register(&mut self, name: &'static str, run: fn() -> Result<(), String>) {
        self.checks.push(Check { name, run });
    }

    /// The registered checks, in registration order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Runs every check, logging each outcome, and returns the failures.
    pub fn run_all(&self) -> Vec<(&'static str, String)> {
        let mut failures = Vec::new();
        for check in &self.checks {
            match (check.run)() {
                Ok(()) => info!("check {} passed", check.name),
                Err(message) => {
                    error!("check {} failed: {}", check.name, message);
                    failures.push((check.name, message));
                },
            }
        }
        failures
    }
}

/// Spot-checks the Bézier solver over the `ease` curve: endpoints exact,
/// intermediate outputs finite and non-decreasing.
fn check_bezier_ease_curve() -> Result<(), String> {
    let bezier = Bezier::new(Point2D::new(0.25, 0.1), Point2D::new(0.25, 1.0));
    let mut previous = bezier.solve(0.0);
    if previous != 0.0 {
        return Err(format!("ease must start at 0, got {}", previous));
    }
    for i in 1..=10 {
        let x = f64::from(i) / 10.0;
        let y = bezier.solve(x);
        if !y.is_finite() {
            return Err(format!("non-finite output at x = {}: {}", x, y));
        }
        if y < previous {
            return Err(format!(
                "output decreased at x = {}: {} < {}",
                x, y, previous
            ));
        }
        previous = y;
    }
    if previous != 1.0 {
        return Err(format!("ease must end at 1, got {}", previous));
    }
    Ok(())
}
