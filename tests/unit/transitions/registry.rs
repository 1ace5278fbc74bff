/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use transitions::registry::CheckRegistry;

#[test]
fn builtin_checks_pass() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = CheckRegistry::with_builtin_checks();
    assert!(!registry.checks().is_empty());
    assert!(registry.run_all().is_empty());
}

#[test]
fn failures_are_reported_by_name() {
    let mut registry = CheckRegistry::new();
    registry.register("always_passes", || Ok(()));
    registry.register("always_fails", || Err("nope".to_owned()));

    let failures = registry.run_all();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "always_fails");
    assert_eq!(failures[0].1, "nope");
}
