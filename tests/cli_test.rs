use std::io::Write;
use std::process::{Command, Output, Stdio};

const WORKED_EXAMPLE: &str = "5 E
2
Q 1 1 A1 B2
P 2 1 D4 C3
A1 B2 B2 B3
A1 B2 B3 A1 D1 E1 D4 D4 D5 D5
";

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_volley"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start volley");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("volley output")
}

#[test]
fn test_stdin_until_end_of_data() {
    let input = format!("{}EOD\nthis line is never read\n", WORKED_EXAMPLE);
    let output = run_with_stdin(&[], &input);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Player-1:\n\n20000\n"));
    assert!(stdout.contains("Player-2 fires a missile with target D5 which got hit\n"));
    assert!(stdout.ends_with("Player-2 won the battle\n"));
}

#[test]
fn test_file_argument() {
    let path = std::env::temp_dir().join(format!("volley-cli-{}.txt", std::process::id()));
    std::fs::write(&path, WORKED_EXAMPLE).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_volley"))
        .arg(&path)
        .output()
        .expect("failed to run volley");
    std::fs::remove_file(&path).ok();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches(" which got ").count(), 13);
}

#[test]
fn test_json_summary() {
    let output = run_with_stdin(&["stdin", "--json"], WORKED_EXAMPLE);
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("invalid json");
    assert_eq!(v["outcome"]["verdict"]["winner"], "Two");
    assert_eq!(v["outcome"]["termination"], "fleet_destroyed");
    assert_eq!(v["surviving"], serde_json::json!([0, 1]));
}

#[test]
fn test_invalid_input_prints_usage_and_exits_with_one() {
    let output = run_with_stdin(&[], "five E\n");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("invalid format given for the grid size x"));
    assert!(stdout.contains("Usage: volley"));
}

#[test]
fn test_oversized_grid_exits_with_one() {
    let output = run_with_stdin(&[], "1000000000 Z\n0\n\n\nEOD\n");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Grid of 1000000000x26 exceeds the 999x26 limit"));
    assert!(stdout.contains("Usage: volley"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_volley"))
        .args(["stdin", "--json"])
        .env("VOLLEY_LOG", "trace")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            child
                .stdin
                .take()
                .expect("stdin")
                .write_all(WORKED_EXAMPLE.as_bytes())?;
            child.wait_with_output()
        })
        .expect("volley output");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("invalid json");
    assert_eq!(v["outcome"]["termination"], "fleet_destroyed");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("INFO - battle over: Player-2 won the battle"));
}
