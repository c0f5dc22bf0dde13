#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const REPORT: &str = "reports/governance/credo_report.html";
pub const SBOM: &str = "reports/sbom/bom.json";
pub const FAIRNESS: &str = "reports/fairness/fairness_report.html";
pub const QUALITY: &str = "reports/quality/giskard_report.html";
pub const SECURITY: &str = "reports/security/garak_report.jsonl";

/// Throwaway project root the binary is pointed at with `--root`.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("project");
        fs::create_dir_all(&root).expect("create project root");
        Self { _tmp: tmp, root }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("govgate");
        cmd.env_remove("RUST_LOG")
            .arg("--root")
            .arg(self.root.to_str().expect("root path utf8"));
        cmd
    }

    pub fn write_metrics(&self, body: &str) {
        fs::write(self.root.join("metrics.json"), body).expect("write metrics");
    }

    pub fn touch(&self, rel: &str) {
        let p = self.root.join(rel);
        fs::create_dir_all(p.parent().expect("artifact parent")).expect("create artifact dir");
        fs::write(p, "{}").expect("write artifact");
    }

    pub fn write(&self, rel: &str, body: &str) {
        let p = self.root.join(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(p, body).expect("write file");
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join(rel)).expect("read file")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }
}
