// CLI integration tests driving the real binary over pipes.
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_json2list");
    Command::new(exe)
}

fn run_with_stdin(args: &[&str], input: &[u8]) -> Output {
    let mut child = cmd()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn json2list");

    let mut stdin = child.stdin.take().expect("stdin");
    // 進程可能在讀取輸入前就退出（配置錯誤），管道中斷不算測試失敗
    let _ = stdin.write_all(input);
    drop(stdin);

    child.wait_with_output().expect("wait for json2list")
}

#[test]
fn stdin_to_stdout_flow() {
    let output = run_with_stdin(&[], br#"[{"name":"a"},{"name":"b"}]"#);

    assert!(output.status.success());
    assert_eq!(output.stdout, b"<li>a</li><li>b</li>");
}

#[test]
fn empty_array_produces_empty_stdout() {
    let output = run_with_stdin(&[], b"[]");

    assert!(output.status.success());
    assert_eq!(output.stdout, b"");
}

#[test]
fn missing_name_field_renders_empty_item() {
    let output = run_with_stdin(&[], br#"[{"id":7}]"#);

    assert!(output.status.success());
    assert_eq!(output.stdout, b"<li></li>");
}

#[test]
fn values_are_inserted_verbatim() {
    let output = run_with_stdin(&[], br#"[{"name":"<b>&amp;</b>"}]"#);

    assert!(output.status.success());
    assert_eq!(output.stdout, b"<li><b>&amp;</b></li>");
}

#[test]
fn malformed_input_fails_with_no_output() {
    let output = run_with_stdin(&[], b"not json");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(output.stdout, b"");
    assert!(!output.stderr.is_empty());
}

#[test]
fn empty_input_fails_as_parse_error() {
    let output = run_with_stdin(&[], b"");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(output.stdout, b"");
}

#[test]
fn file_to_file_flow() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input_path = temp.path().join("input.json");
    let output_path = temp.path().join("list.html");
    std::fs::write(&input_path, br#"[{"name":"from file"}]"#).expect("write input");

    let output = cmd()
        .args([
            "-i",
            input_path.to_str().unwrap(),
            "-o",
            output_path.to_str().unwrap(),
        ])
        .output()
        .expect("run json2list");

    assert!(output.status.success());
    assert_eq!(output.stdout, b"");
    assert_eq!(
        std::fs::read(&output_path).expect("read output"),
        b"<li>from file</li>"
    );
}

#[test]
fn missing_input_file_exits_with_io_code() {
    let output = cmd()
        .args(["-i", "/nonexistent/input.json"])
        .output()
        .expect("run json2list");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(output.stdout, b"");
}

#[test]
fn empty_output_path_exits_with_config_code() {
    let output = run_with_stdin(&["-o", ""], b"[]");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn rerun_yields_byte_identical_output() {
    let input = br#"[{"name":"a"},{"id":2},{"name":"c"}]"#;

    let first = run_with_stdin(&[], input);
    let second = run_with_stdin(&[], input);

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}
