//! End-to-end tests for the sdfgen binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sdfgen() -> Command {
    let mut cmd = Command::cargo_bin("sdfgen").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

const WORLD_TEMPLATE: &str = "<sdf version='{{ sdf_version }}'>\n\
  <world name='{{ world_name }}'>\n\
    <shadows>{{ shadows }}</shadows>\n\
  </world>\n\
</sdf>\n";

#[test]
fn help_lists_subcommands() {
    sdfgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("world"))
        .stdout(predicate::str::contains("model"))
        .stdout(predicate::str::contains("catalog"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_reports_package_version() {
    sdfgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_prints_help_and_fails() {
    sdfgen().assert().failure();
}

#[test]
fn help_and_version_go_to_stdout_with_exit_zero() {
    for flag in ["--help", "--version"] {
        sdfgen()
            .arg(flag)
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }
}

#[test]
fn no_color_env_follows_the_convention() {
    // NO_COLOR holds arbitrary truthy text in the wild; none of these
    // spellings may abort argument parsing.
    for value in ["1", "true", "yes"] {
        sdfgen()
            .env("NO_COLOR", value)
            .arg("catalog")
            .assert()
            .success();
    }
}

#[test]
fn world_generation_writes_next_to_the_template() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("ksql.sdf.jinja");
    std::fs::write(&template, WORLD_TEMPLATE).unwrap();

    sdfgen()
        .args(["world", template.to_str().unwrap(), "--world", "ksql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ksql.sdf"));

    let written = std::fs::read_to_string(temp.path().join("ksql.sdf")).unwrap();
    assert!(written.contains("<sdf version='1.5'>"));
    assert!(written.contains("<world name='ksql'>"));
    assert!(written.contains("<shadows>1</shadows>"));
}

#[test]
fn explicit_output_file_is_respected() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("empty.sdf.jinja");
    let out = temp.path().join("generated/empty.sdf");
    std::fs::write(&template, WORLD_TEMPLATE).unwrap();

    sdfgen()
        .args([
            "world",
            template.to_str().unwrap(),
            "--output-file",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(out.exists());
    assert!(!temp.path().join("empty.sdf").exists());
}

#[test]
fn model_generation_applies_the_auxiliary_prefix() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("iris.sdf.jinja");
    std::fs::write(
        &template,
        "<model name='{{ model_name }}'><pose>{{ model_pose }}</pose></model>",
    )
    .unwrap();

    sdfgen()
        .args(["model", template.to_str().unwrap(), "--name", "iris"])
        .assert()
        .success();

    let written = std::fs::read_to_string(temp.path().join("iris.sdf")).unwrap();
    assert!(written.contains("<model name='hitl_iris'>"));
    assert!(written.contains("<pose>0 0 0.25 0 0 0</pose>"));
}

#[test]
fn invalid_world_exits_2_and_lists_valid_names() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("w.sdf.jinja");
    std::fs::write(&template, WORLD_TEMPLATE).unwrap();

    sdfgen()
        .args(["world", template.to_str().unwrap(), "--world", "atlantis"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("atlantis"))
        .stderr(predicate::str::contains("empty"))
        .stderr(predicate::str::contains("ksql"));

    assert!(!temp.path().join("w.sdf").exists());
}

#[test]
fn invalid_model_exits_2_and_lists_valid_names() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("m.sdf.jinja");
    std::fs::write(&template, "<model/>").unwrap();

    sdfgen()
        .args(["model", template.to_str().unwrap(), "--name", "submarine"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("iris"))
        .stderr(predicate::str::contains("typhoon_h480"));
}

#[test]
fn missing_template_exits_3() {
    sdfgen()
        .args(["world", "/nonexistent/w.sdf.jinja"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("template not found"));
}

#[test]
fn missing_explicit_config_exits_4() {
    sdfgen()
        .args(["--config", "/nonexistent/sdfgen.toml", "catalog"])
        .assert()
        .code(4);
}

#[test]
fn catalog_table_lists_worlds_and_models() {
    sdfgen()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("ksql"))
        .stdout(predicate::str::contains("1.5"))
        .stdout(predicate::str::contains("iris"))
        .stdout(predicate::str::contains("0 0 0.25 0 0 0"));
}

#[test]
fn catalog_json_is_parseable() {
    let output = sdfgen()
        .args(["catalog", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(value["worlds"].as_array().is_some_and(|w| !w.is_empty()));
    assert!(value["models"].as_array().is_some_and(|m| !m.is_empty()));
}

#[test]
fn catalog_worlds_only_omits_models() {
    let output = sdfgen()
        .args(["catalog", "worlds", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(value["worlds"].is_array());
    assert!(value["models"].is_null());
}

#[test]
fn completions_emit_a_bash_script() {
    sdfgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sdfgen"));
}

#[test]
fn package_lookup_uses_the_explicit_prefix() {
    let prefix = TempDir::new().unwrap();
    std::fs::create_dir_all(prefix.path().join("share/mavlink_sitl_gazebo")).unwrap();

    let temp = TempDir::new().unwrap();
    let template = temp.path().join("typhoon.sdf.jinja");
    std::fs::write(&template, "<uri>{{ mavlink_sitl_gazebo_dir }}</uri>").unwrap();

    sdfgen()
        .args([
            "world",
            template.to_str().unwrap(),
            "--world",
            "typhoon",
            "--package",
            "mavlink_sitl_gazebo",
            "--package-prefix",
            prefix.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(temp.path().join("typhoon.sdf")).unwrap();
    assert!(written.contains("mavlink_sitl_gazebo"));
}

#[test]
fn package_without_index_exits_4() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("w.sdf.jinja");
    std::fs::write(&template, WORLD_TEMPLATE).unwrap();

    sdfgen()
        .env_remove("AMENT_PREFIX_PATH")
        .env_remove("ROS_PACKAGE_PATH")
        .args([
            "world",
            template.to_str().unwrap(),
            "--package",
            "mavlink_sitl_gazebo",
        ])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("package index"));
}
