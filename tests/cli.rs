//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary engine root, so no
//! state leaks between tests.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn forge() -> Command {
    Command::cargo_bin("forge").unwrap()
}

/// Minimal engine root: one template and the apple client-runtime skeleton
fn seed_engine_root() -> TempDir {
    let root = TempDir::new().unwrap();

    fs::create_dir_all(root.path().join("templates/default-3d/assets")).unwrap();
    fs::write(
        root.path().join("templates/default-3d/project.cfg"),
        "renderer = forward\n",
    )
    .unwrap();
    fs::write(
        root.path().join("templates/default-3d/assets/scene.dat"),
        "scene",
    )
    .unwrap();

    let skeleton = root.path().join("runtime/client/skeleton");
    fs::create_dir_all(&skeleton).unwrap();
    fs::write(
        skeleton.join("{{PROJECT_NAME}}.txt"),
        "Hello {{PROJECT_NAME}}",
    )
    .unwrap();
    fs::write(skeleton.join("{{PROJECT_NAME}}.json"), "{}").unwrap();

    root
}

#[cfg(not(target_os = "macos"))]
#[test]
fn apple_builds_on_foreign_host_exit_one() {
    let root = TempDir::new().unwrap();
    for platform in ["macos", "ios", "visionos"] {
        forge()
            .current_dir(root.path())
            .args(["build", "--platform", platform])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("builds require macOS"));
    }
}

#[cfg(not(target_os = "windows"))]
#[test]
fn windows_build_on_foreign_host_exits_one() {
    let root = TempDir::new().unwrap();
    forge()
        .current_dir(root.path())
        .args(["build", "--platform", "windows"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("builds require Windows"));
}

#[test]
fn android_build_without_wrapper_exits_one() {
    let root = TempDir::new().unwrap();
    forge()
        .current_dir(root.path())
        .args(["build", "--platform", "android"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing tool"));
}

#[test]
fn unknown_platform_is_a_usage_error() {
    forge()
        .args(["build", "--platform", "amiga"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn new_project_materializes_template_and_apple_skeleton() {
    let root = seed_engine_root();
    forge()
        .current_dir(root.path())
        .args(["new", "--name", "Foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Foo created"));

    let project = root.path().join("projects/Foo");
    assert_eq!(
        fs::read_to_string(project.join("project.cfg")).unwrap(),
        "renderer = forward\n"
    );
    assert!(project.join("assets/scene.dat").exists());

    // content and file name are substituted
    assert_eq!(
        fs::read_to_string(project.join("build/apple/Foo.txt")).unwrap(),
        "Hello Foo"
    );

    // renamed even though its contents carry no token
    assert_eq!(
        fs::read_to_string(project.join("build/apple/Foo.json")).unwrap(),
        "{}"
    );
}

#[test]
fn duplicate_project_name_is_rejected() {
    let root = seed_engine_root();
    forge()
        .current_dir(root.path())
        .args(["new", "--name", "Foo"])
        .assert()
        .success();

    fs::write(root.path().join("projects/Foo/keep.txt"), "first run").unwrap();

    forge()
        .current_dir(root.path())
        .args(["new", "--name", "Foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // the first invocation's output is left unchanged
    assert_eq!(
        fs::read_to_string(root.path().join("projects/Foo/keep.txt")).unwrap(),
        "first run"
    );
    assert!(root.path().join("projects/Foo/build/apple/Foo.txt").exists());
}

#[test]
fn missing_template_is_rejected() {
    let root = seed_engine_root();
    forge()
        .current_dir(root.path())
        .args(["new", "--name", "Baz", "--template", "voxel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("template not found"));

    assert!(!root.path().join("projects/Baz").exists());
}

#[test]
fn missing_skeleton_platform_is_skipped() {
    let root = seed_engine_root();
    forge()
        .current_dir(root.path())
        .args(["new", "--name", "Bar", "--platforms", "apple", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Bar created"))
        .stderr(predicate::str::contains("No skeleton source found for web"));

    assert!(root.path().join("projects/Bar/build/apple/Bar.txt").exists());
    assert!(!root.path().join("projects/Bar/build/web").exists());
}

#[test]
fn platform_skeleton_resolves_under_platforms_dir() {
    let root = seed_engine_root();
    let web = root.path().join("platforms/web/skeleton");
    fs::create_dir_all(&web).unwrap();
    fs::write(web.join("index.html"), "<title>{{PROJECT_NAME}}</title>").unwrap();

    forge()
        .current_dir(root.path())
        .args(["new", "--name", "Qux", "--platforms", "web"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(root.path().join("projects/Qux/build/web/index.html")).unwrap(),
        "<title>Qux</title>"
    );
}

#[test]
fn skeleton_overlay_leaves_template_files_alone() {
    let root = seed_engine_root();
    // a template file carrying the token must NOT be substituted; only the
    // skeleton subtree gets the pass
    fs::write(
        root.path().join("templates/default-3d/readme.md"),
        "This is {{PROJECT_NAME}}",
    )
    .unwrap();

    forge()
        .current_dir(root.path())
        .args(["new", "--name", "Nori"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(root.path().join("projects/Nori/readme.md")).unwrap(),
        "This is {{PROJECT_NAME}}"
    );
}

#[test]
fn check_reports_each_platform() {
    let root = TempDir::new().unwrap();
    forge()
        .current_dir(root.path())
        .arg("check")
        .assert()
        .stdout(
            predicate::str::contains("[macos]")
                .and(predicate::str::contains("[android]"))
                .and(predicate::str::contains("[windows]")),
        );
}

#[test]
fn check_rejects_unknown_platform() {
    forge()
        .args(["check", "amiga"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown platform"));
}
