//! Exit codes: 0 on success, 2 on any error, 130 when a run is cut short.

mod helpers;

use felt_cli::exit_code;
use helpers::{CliRunner, EnvGuard, FELT_VARS};
use serial_test::serial;

#[test]
#[serial]
fn successful_commands_return_zero() {
    let _clean = EnvGuard::clear(&FELT_VARS);
    let cli = CliRunner::new();
    for args in [
        vec!["deal", "--seed", "1"],
        vec!["rng", "--seed", "1"],
        vec!["eval", "2c", "3d", "4h", "5s", "6c"],
        vec!["sim", "--hands", "5", "--seed", "1"],
        vec!["cfg"],
        vec!["--version"],
    ] {
        let res = cli.run(&args);
        assert_eq!(res.exit_code, exit_code::SUCCESS, "{:?}: {}", args, res.stderr);
    }
}

#[test]
#[serial]
fn errors_return_two_on_stderr() {
    let _clean = EnvGuard::clear(&FELT_VARS);
    let cli = CliRunner::new();
    for args in [
        vec!["nonsense"],
        vec!["sim", "--hands", "0"],
        vec!["sim", "--hands", "3", "--opponent", "shark"],
        vec!["sim", "--hands", "many"],
        vec!["eval", "Ah", "Kh", "Qh", "Jh", "Th", "9h", "8h", "7h"],
        vec!["eval", "Ah", "Kh", "Qh", "Jh", "1x"],
        vec!["deal", "--seed", "-4"],
    ] {
        let res = cli.run(&args);
        assert_eq!(res.exit_code, exit_code::ERROR, "{:?}", args);
        assert!(!res.stderr.is_empty(), "{:?} printed no error", args);
    }
}

#[test]
#[serial]
fn interrupted_sim_returns_130() {
    let _clean = EnvGuard::clear(&FELT_VARS);
    let res = CliRunner::new().run_with_env(
        &["sim", "--hands", "10", "--seed", "2"],
        &[("FELT_SIM_BREAK_AFTER", "4")],
    );
    assert_eq!(res.exit_code, exit_code::INTERRUPTED);
    assert!(res.stdout.contains("Interrupted: simulated 4/10"));
}

#[test]
#[serial]
fn quitting_the_binary_is_not_an_error() {
    let res = CliRunner::new().run_binary_with_input(&["play", "--seed", "8"], "q\n");
    assert_eq!(res.exit_code, exit_code::SUCCESS, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Returning to lobby..."));
}
