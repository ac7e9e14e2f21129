//! Shared test harness: runs the CLI in-process through [`felt_cli::run`] or
//! as the built `felt` binary when real stdin is needed.
#![allow(dead_code)]

use std::io::Write as _;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

#[derive(Debug, Default)]
pub struct CliRunner;

impl CliRunner {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_with_env(args, &[])
    }

    /// Sets `env` for the duration of the call. Callers touching the
    /// environment must be `#[serial]`.
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        let _guard = EnvGuard::apply(env);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let argv: Vec<String> = std::iter::once("felt".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let start = Instant::now();
        let code = felt_cli::run(argv, &mut out, &mut err);
        CliResult {
            exit_code: code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
            duration: start.elapsed(),
        }
    }

    /// Spawns the compiled binary and feeds `input` on stdin.
    pub fn run_binary_with_input(&self, args: &[&str], input: &str) -> CliResult {
        let start = Instant::now();
        let mut child = Command::new(env!("CARGO_BIN_EXE_felt"))
            .args(args)
            .env_remove("FELT_CONFIG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn felt");
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes()).expect("write stdin");
        }
        let output = child.wait_with_output().expect("failed to read output");
        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration: start.elapsed(),
        }
    }
}

/// Sets environment variables and restores the previous values on drop.
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(vars: &[(&str, &str)]) -> Self {
        let saved = vars
            .iter()
            .map(|(k, _)| (k.to_string(), std::env::var(k).ok()))
            .collect();
        for (k, v) in vars {
            unsafe { std::env::set_var(k, v) };
        }
        Self { saved }
    }

    pub fn clear(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();
        for k in keys {
            unsafe { std::env::remove_var(k) };
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (k, v) in &self.saved {
            match v {
                Some(v) => unsafe { std::env::set_var(k, v) },
                None => unsafe { std::env::remove_var(k) },
            }
        }
    }
}

pub const FELT_VARS: [&str; 7] = [
    "FELT_CONFIG",
    "FELT_SEED",
    "FELT_STARTING_CHIPS",
    "FELT_SMALL_BLIND",
    "FELT_BIG_BLIND",
    "FELT_FOLD_PERCENT",
    "FELT_SIM_BREAK_AFTER",
];
