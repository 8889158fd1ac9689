use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::process::Output;

pub fn treepath() -> Command {
    cargo_bin_cmd!("treepath")
}

#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

#[allow(dead_code)]
pub fn stderr_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).expect("stderr is not valid JSON")
}
