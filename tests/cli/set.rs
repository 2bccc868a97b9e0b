//! Tests for `actseal set` argument handling.

use crate::support::*;

#[test]
fn test_set_rejects_invalid_name() {
    let t = Test::new();

    let output = t.set("API-KEY", &["--repo", "octo/app"], "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid secret name 'API-KEY'");
    assert_stderr_contains(&output, "invalid character '-'");
}

#[test]
fn test_set_rejects_leading_digit() {
    let t = Test::new();

    let output = t.set("1TOKEN", &["--repo", "octo/app"], "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot start with a digit");
}

#[test]
fn test_set_rejects_reserved_prefix() {
    let t = Test::new();

    let output = t.set("github_token", &["--repo", "octo/app"], "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot start with GITHUB_");
}

#[test]
fn test_set_rejects_empty_body() {
    let t = Test::new();

    let output = t.set("API_KEY", &["--repo", "octo/app"], "");
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot be empty");
}

#[test]
fn test_set_rejects_empty_stdin() {
    let t = Test::new();

    let output = t.set_stdin("API_KEY", &["--repo", "octo/app"], "\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot be empty");
}

#[test]
fn test_set_requires_target() {
    let t = Test::new();

    let output = t.set("API_KEY", &[], "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "no target");
}

#[test]
fn test_set_rejects_malformed_repo() {
    let t = Test::new();

    let output = t.set("API_KEY", &["--repo", "just-a-name"], "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid repository 'just-a-name'");
}

#[test]
fn test_set_repo_and_org_conflict() {
    let t = Test::new();

    let output = t.set("API_KEY", &["--repo", "octo/app", "--org", "octo"], "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot be used with");
}

#[test]
fn test_set_repos_require_selected_visibility() {
    let t = Test::new();

    let output = t.set(
        "API_KEY",
        &["--org", "octo", "--visibility", "all", "--repos", "app,web"],
        "value",
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "only be listed when visibility is 'selected'");
}

#[test]
fn test_set_selected_requires_repos() {
    let t = Test::new();

    let output = t.set(
        "API_KEY",
        &["--org", "octo", "--visibility", "selected"],
        "value",
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "requires at least one repository");
}

#[test]
fn test_set_rejects_unknown_visibility() {
    let t = Test::new();

    let output = t.set(
        "API_KEY",
        &["--org", "octo", "--visibility", "internal"],
        "value",
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "internal");
}

#[test]
fn test_set_org_options_rejected_for_repo() {
    let t = Test::new();

    let output = t.set(
        "API_KEY",
        &["--repo", "octo/app", "--visibility", "all"],
        "value",
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "only apply to organization secrets");
}

#[test]
fn test_set_without_token_fails_with_hint() {
    let t = Test::new();

    let output = t.set("API_KEY", &["--repo", "octo/app"], "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "no API token found");
    assert_stderr_contains(&output, "ACTSEAL_TOKEN");
    assert_stderr_contains(&output, "GH_TOKEN");
}

#[test]
fn test_set_default_org_from_config() {
    let t = Test::with_config("[defaults]\norg = \"octo\"\n");

    // Target resolves from config, so the run gets as far as the token.
    let output = t.set("API_KEY", &[], "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "no API token found");
}

#[test]
fn test_set_validates_before_reading_token() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("GH_TOKEN", "ghp_unused")
        .args(["set", "BAD NAME", "--repo", "octo/app", "--body", "value"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid secret name");
}

#[test]
fn test_set_rejects_org_with_slash() {
    let t = Test::new();

    let output = t.set("API_KEY", &["--org", "octo/app"], "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid organization 'octo/app'");
}
