//! Shared testing utilities for promptgen CLI tests.
#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const API_KEY: &str = "test-key";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-pro:generateContent";

const CONFIG_VARS: &[&str] = &[
    "GEMINI_API_KEY",
    "GEMINI_BASE_URL",
    "AI_TEMPERATURE",
    "AI_TOP_P",
    "AI_MAX_TOKENS",
    "AI_NUM_RESULTS",
    "AI_TIMEOUT_SECS",
];

/// Testing harness providing an isolated working directory and a mock generation endpoint.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    pub server: mockito::ServerGuard,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir, server: mockito::Server::new() }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Base URL of the mock endpoint, without the key delimiter.
    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.url(), GENERATE_PATH)
    }

    /// Build a command for invoking the compiled `promptgen` binary against the mock endpoint.
    pub fn cli(&self) -> Command {
        let mut cmd = self.bare_cli();
        cmd.env("GEMINI_API_KEY", API_KEY).env("GEMINI_BASE_URL", self.base_url());
        cmd
    }

    /// Build a command with no generation settings in its environment.
    pub fn bare_cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("promptgen").expect("Failed to locate promptgen binary");
        cmd.current_dir(&self.work_dir);
        for var in CONFIG_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Mock a successful generation returning `text` as the first candidate part.
    pub fn mock_generation(&mut self, text: &str) -> mockito::Mock {
        self.server
            .mock("POST", mockito::Matcher::Regex(format!("^{}", GENERATE_PATH)))
            .match_query(mockito::Matcher::UrlEncoded("key".into(), API_KEY.into()))
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(candidate_body(text))
            .create()
    }

    /// Write a file into the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("Failed to read test file")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }
}

pub fn candidate_body(text: &str) -> String {
    json!({"candidates": [{"content": {"parts": [{"text": text}]}}]}).to_string()
}
