#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const GOPHER_TEXT: &str = "Go Go gopher";

pub const STORY_TEXT: &str = "The cat sat on the mat.\n\
The dog sat on the log; the cat-dog ran!\n\
2024 was the year_of_the_cat, THE end.";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub docs: PathBuf,
    pub out: PathBuf,
    cargo_home: PathBuf,
    rustup_home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let docs = tmp.path().join("docs");
        let out = tmp.path().join("out");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&docs).expect("create docs dir");

        let orig_home = std::env::var("HOME").unwrap_or_default();
        let cargo_home = PathBuf::from(&orig_home).join(".cargo");
        let rustup_home = PathBuf::from(&orig_home).join(".rustup");

        Self {
            _tmp: tmp,
            home,
            docs,
            out,
            cargo_home,
            rustup_home,
        }
    }

    /// Writes a fixture document and returns its path as a string.
    pub fn doc(&self, name: &str, text: &str) -> String {
        let path = self.docs.join(name);
        fs::write(&path, text).expect("write fixture document");
        path.to_str().expect("doc path utf8").to_string()
    }

    pub fn missing_doc(&self) -> String {
        self.docs
            .join("does-not-exist.txt")
            .to_str()
            .expect("doc path utf8")
            .to_string()
    }

    pub fn out_dir(&self) -> String {
        self.out.to_str().expect("out path utf8").to_string()
    }

    pub fn write_config(&self, body: &str) {
        let path = self.home.join(".config/wordfreq/config.toml");
        fs::create_dir_all(path.parent().expect("config parent")).expect("create config dir");
        fs::write(path, body).expect("write config");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("wordfreq");
        cmd.env("HOME", &self.home)
            .env("CARGO_HOME", &self.cargo_home)
            .env("RUSTUP_HOME", &self.rustup_home)
            .env_remove("WORDFREQ_LOG");
        cmd
    }

    pub fn run_json(&self, source: &str, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--source")
            .arg(source)
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, source: &str, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--source")
            .arg(source)
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }

    pub fn csv_lines(&self) -> Vec<String> {
        let raw = fs::read_to_string(self.out.join("data.csv")).expect("read data.csv");
        raw.lines().map(str::to_string).collect()
    }
}

/// Every JSON document printed by one session, in order.
pub fn json_stream(stdout: &[u8]) -> Vec<Value> {
    serde_json::Deserializer::from_slice(stdout)
        .into_iter::<Value>()
        .map(|v| v.expect("valid json document"))
        .collect()
}
