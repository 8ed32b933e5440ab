//! Behavioral specs for `storecheck journeys`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

fn journeys_in(project: &Project) -> std::process::Command {
    let mut cmd = storecheck_cmd();
    cmd.arg("journeys").current_dir(project.path());
    cmd
}

#[test]
fn lists_every_suite() {
    let temp = Project::empty();

    journeys_in(&temp)
        .assert()
        .success()
        .stdout(predicates::str::contains("📁 Login Tests (login)"))
        .stdout(predicates::str::contains("📁 Add to Cart Tests (add-to-cart)"))
        .stdout(predicates::str::contains("📁 Checkout Tests (checkout)"))
        .stdout(predicates::str::contains("📁 Logout Tests (logout)"))
        .stdout(predicates::str::contains("  • should complete checkout process"));
}

#[test]
fn suite_filter_limits_listing() {
    let temp = Project::empty();

    let output = journeys_in(&temp)
        .args(["--suite", "logout"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    similar_asserts::assert_eq!(
        stdout,
        "🌐 Target: https://www.saucedemo.com (user standard_user)\n\
         📁 Logout Tests (logout)\n\
         \x20 • should logout from landing page\n\
         \x20 • should logout from cart page\n\
         \x20 • should logout from customer information page\n"
    );
}

#[test]
fn suite_filter_accepts_title() {
    let temp = Project::empty();

    journeys_in(&temp)
        .args(["--suite", "checkout tests"])
        .assert()
        .success()
        .stdout(predicates::str::contains("📁 Checkout Tests"))
        .stdout(predicates::str::contains("Login Tests").not());
}

#[test]
fn unknown_suite_exits_2() {
    let temp = Project::empty();

    journeys_in(&temp)
        .args(["--suite", "payments"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown suite `payments`"))
        .stderr(predicates::str::contains("login, add-to-cart, checkout, logout"));
}

#[test]
fn target_comes_from_config_suite_section() {
    let temp = Project::empty();
    temp.config("version = 1\n[suite]\nbase_url = \"https://staging.test\"\nusername = \"visual_user\"\n");

    journeys_in(&temp)
        .assert()
        .success()
        .stdout(predicates::str::contains("🌐 Target: https://staging.test (user visual_user)"));
}

#[test]
fn environment_overrides_config_target() {
    let temp = Project::empty();
    temp.config("version = 1\n[suite]\nbase_url = \"https://staging.test\"\n");

    journeys_in(&temp)
        .env("BASE_URL", "https://local.test")
        .env("USERNAME", "")
        .assert()
        .success()
        .stdout(predicates::str::contains("🌐 Target: https://local.test (user standard_user)"));
}
