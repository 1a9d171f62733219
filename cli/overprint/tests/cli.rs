//! End-to-end tests driving the built `overprint` binary.

use std::process::{Command, Output};

fn overprint(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_overprint"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run overprint")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

const DEMO: &str = "\
Int: 10
Const Int* : 10
Unsigned Int& : 20
Const Unsigned Int& : 20
Long* : 30
Short: 50
Double: 3.14
Bool: true
Char: A
C-string: C-style string
String: C++ string
";

#[test]
fn no_arguments_prints_the_eleven_lines() {
    let output = overprint(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), DEMO);
    assert!(output.stderr.is_empty(), "nothing on stderr at the default log level");
}

#[test]
fn demo_subcommand_matches_default() {
    let output = overprint(&["demo", "--format", "text"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), DEMO);
}

#[test]
fn demo_json_is_parseable() {
    let output = overprint(&["demo", "--format", "json"]);
    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    let records = records.as_array().expect("array");
    assert_eq!(records.len(), 11);
    assert_eq!(records[2]["category"], "unsigned-ref");
    assert_eq!(records[10]["line"], "String: C++ string");
}

#[test]
fn overloads_lists_declarations() {
    let output = overprint(&["overloads"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("void print(const unsigned int& x)"));
    assert!(text.contains("void print(long* x)"));
    assert_eq!(text.matches("void print(").count(), 11);
}

#[test]
fn resolve_reports_selected_overload() {
    let output = overprint(&["resolve", "float"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("print(float) binds void print(double x)"));
}

#[test]
fn resolve_ambiguous_call_fails() {
    let output = overprint(&["resolve", "long"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: "));
    assert!(stderr.contains("ambiguous"));
}

#[test]
fn unknown_format_fails() {
    let output = overprint(&["overloads", "--format", "yaml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown output format"));
}

#[test]
fn resolve_unparseable_type_fails() {
    let output = overprint(&["resolve", "widget"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: "));
    assert!(stderr.contains("invalid type"));
}

#[test]
fn resolve_without_viable_overload_fails() {
    let output = overprint(&["resolve", "void"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no viable overload"));
}

#[cfg(target_os = "linux")]
#[test]
fn full_stdout_is_an_error_for_every_command() {
    use std::fs::File;
    use std::process::Stdio;

    for args in [
        &[][..],
        &["demo", "--format", "json"][..],
        &["overloads"][..],
        &["resolve", "int"][..],
    ] {
        let sink = File::create("/dev/full").expect("open /dev/full");
        let output = Command::new(env!("CARGO_BIN_EXE_overprint"))
            .args(args)
            .env_remove("RUST_LOG")
            .stdout(Stdio::from(sink))
            .output()
            .expect("run overprint");
        assert_eq!(output.status.code(), Some(1), "exit code for {args:?}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.starts_with("error: "), "stderr for {args:?}: {stderr}");
        assert!(stderr.contains("I/O error"), "stderr for {args:?}: {stderr}");
        assert!(!stderr.contains("panicked"), "stderr for {args:?}: {stderr}");
    }
}
