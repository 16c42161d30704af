use serde_json::{Value, json};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "chainkit-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn chainkit_command<I, S>(args: I) -> Command
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(env!("CARGO_BIN_EXE_chainkit"));
    command
        .args(args)
        .env_remove("CHAINKIT_LOG")
        .env_remove("RUST_LOG");
    command
}

fn run_chainkit<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    chainkit_command(args)
        .output()
        .expect("chainkit command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_failure(output: &Output) {
    if output.status.success() {
        panic!(
            "command unexpectedly succeeded\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout should be valid json: {e}\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        )
    })
}

#[test]
fn validate_passes_when_every_input_is_valid() {
    let output = run_chainkit(["validate", "int", "123", "-45"]);
    assert_success(&output);
    let text = stdout_text(&output);
    assert!(text.starts_with("chainkit validate int"));
    assert!(text.contains("ok   123"));
    assert!(text.contains("ok   -45"));
}

#[test]
fn validate_reports_failures_with_exit_code_one() {
    let output = run_chainkit(["validate", "int_between:1,10", "5", "11", "--json"]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["rule"], "int_between:1,10");
    assert_eq!(payload["passed"], false);
    assert_eq!(
        payload["results"],
        json!([
            { "input": "5", "valid": true },
            { "input": "11", "valid": false },
        ])
    );
}

#[test]
fn validate_unknown_rule_exits_two() {
    let output = run_chainkit(["validate", "no_such_rule", "x"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("validator not found: no_such_rule"));

    let malformed = run_chainkit(["validate", "int_max:abc", "1"]);
    assert_eq!(malformed.status.code(), Some(2));
}

#[test]
fn str_operations_print_plain_text() {
    let output = run_chainkit(["str", "upper-first", "hello world"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "Hello world\n");

    let output = run_chainkit(["str", "substring", "你好世界", "1", "2"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "好世\n");

    let output = run_chainkit(["str", "len", "你好"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "2\n");

    let output = run_chainkit(["str", "md5", "你好世界"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "65396ee4aad0b4f17aacd1c6112ee364\n");
}

#[test]
fn str_json_envelope() {
    let output = run_chainkit(["str", "explode", "a,b,c", ",", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["op"], "explode");
    assert_eq!(payload["result"], json!(["a", "b", "c"]));

    let output = run_chainkit(["str", "position", "hello", "z", "--json"]);
    assert_success(&output);
    assert_eq!(parse_json_stdout(&output)["result"], Value::Null);
}

#[test]
fn str_arguments_are_checked_by_the_parser() {
    let output = run_chainkit(["str", "truncate", "hello"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("<LENGTH>"));

    let output = run_chainkit(["str", "repeat", "ab", "twice"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("invalid value 'twice'"));
}

#[test]
fn str_flags_override_defaults() {
    let output = run_chainkit(["str", "contains", "Hello", "hello", "--ignore-case"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "true\n");

    let output = run_chainkit(["str", "contains", "Hello", ""]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "true\n");

    let output = run_chainkit(["str", "position", "abcabc", "b", "--last"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "4\n");

    let output = run_chainkit(["str", "after", "key=value", "=", "--include"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "=value\n");
}

#[test]
fn raw_digest_is_written_as_bytes() {
    let output = run_chainkit(["str", "md5", "你好世界", "--raw"]);
    assert_success(&output);
    assert_eq!(
        output.stdout,
        [
            0x65, 0x39, 0x6e, 0xe4, 0xaa, 0xd0, 0xb4, 0xf1, 0x7a, 0xac, 0xd1, 0xc6, 0x11, 0x2e,
            0xe3, 0x64,
        ]
    );

    let output = run_chainkit(["str", "sha1", "abc", "--raw"]);
    assert_success(&output);
    assert_eq!(output.stdout.len(), 20);
}

#[test]
fn oversized_results_fail_instead_of_allocating() {
    let output = run_chainkit(["str", "repeat", "ab", "18446744073709551615"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("exceeds the limit"));

    let output = run_chainkit(["ary", "pad", "[1]", "-9223372036854775808", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("exceed the limit"));
}

#[test]
fn log_filter_sends_events_to_stderr() {
    let output = chainkit_command(["str", "len", "abc"])
        .env("CHAINKIT_LOG", "debug")
        .output()
        .expect("chainkit command should execute");
    assert_success(&output);
    assert_eq!(stdout_text(&output), "3\n");
    let stderr = stderr_text(&output);
    assert!(stderr.contains("str operation finished"));
    assert!(!stderr.contains("warning"));
}

#[test]
fn ary_sorts_and_aggregates() {
    let output = run_chainkit(["ary", "sort", "[3,1,2]", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["op"], "sort");
    assert_eq!(payload["result"], json!([1, 2, 3]));

    let output = run_chainkit([
        "ary",
        "sort",
        r#"["file10","file2","file1"]"#,
        "--kind",
        "natural",
        "--json",
    ]);
    assert_success(&output);
    assert_eq!(
        parse_json_stdout(&output)["result"],
        json!(["file1", "file2", "file10"])
    );

    let output = run_chainkit(["ary", "sum", "[1,2,3.5]"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "6.5\n");

    let output = run_chainkit(["ary", "join", r#"["a","b"]"#, "+"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "a+b\n");
}

#[test]
fn ary_lookups() {
    let output = run_chainkit(["ary", "search", r#"{"a":1,"b":2}"#, "2"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "b\n");

    let output = run_chainkit(["ary", "first", "[]"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "null\n");

    let rows = r#"[{"name":"tea","price":3},{"name":"pie","price":6.5}]"#;
    let output = run_chainkit(["ary", "column", rows, "name", "--json"]);
    assert_success(&output);
    assert_eq!(parse_json_stdout(&output)["result"], json!(["tea", "pie"]));
}

#[test]
fn ary_rejects_invalid_documents() {
    let output = run_chainkit(["ary", "count", "{not json"]);
    assert_failure(&output);
    assert!(stderr_text(&output).contains("invalid document"));
}

#[test]
fn config_file_overrides_defaults() {
    let tmp = TempDirGuard::new("config");
    let config_path = tmp.path().join("chainkit.toml");
    fs::write(
        &config_path,
        "[ary]\njson_pretty = false\n\n[str]\ncase_sensitive = false\n",
    )
    .expect("config should be written");
    let config = config_path.to_string_lossy().into_owned();

    let output = run_chainkit(["--config", &config, "ary", "values", r#"{"a":1,"b":2}"#]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "[1,2]\n");

    let output = run_chainkit(["str", "contains", "Hello", "hello", "--config", &config]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "true\n");

    let output = run_chainkit(["str", "contains", "Hello", "hello"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "false\n");
}

#[test]
fn malformed_config_is_reported() {
    let tmp = TempDirGuard::new("bad-config");
    let config_path = tmp.path().join("chainkit.toml");
    fs::write(&config_path, "[ary\njson_pretty = ").expect("config should be written");
    let config = config_path.to_string_lossy().into_owned();

    let output = run_chainkit(["--config", &config, "str", "len", "abc"]);
    assert_failure(&output);
    assert!(stderr_text(&output).contains("failed to parse config"));
}
