use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_timetabled");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn timetabled");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

#[test]
fn health_reports_version_and_empty_counts() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let resp = request(&mut stdin, &mut reader, "1", "health", json!({}));
    assert_eq!(resp.get("ok").and_then(|v| v.as_bool()), Some(true));
    let result = resp.get("result").expect("result");
    assert!(result
        .get("version")
        .and_then(|v| v.as_str())
        .is_some_and(|s| !s.is_empty()));
    assert_eq!(result.get("baseCount").and_then(|v| v.as_i64()), Some(0));
    assert_eq!(
        result.get("tombstoneCount").and_then(|v| v.as_i64()),
        Some(0)
    );
    assert_eq!(
        result.get("rejectedCount").and_then(|v| v.as_i64()),
        Some(0)
    );
}

#[test]
fn unknown_method_answers_not_implemented() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let resp = request(&mut stdin, &mut reader, "1", "no.such.method", json!({}));
    assert_eq!(resp.get("ok").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(
        resp.pointer("/error/code").and_then(|v| v.as_str()),
        Some("not_implemented")
    );
}

#[test]
fn views_get_on_fresh_state_renders_empty_grids() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let resp = request(&mut stdin, &mut reader, "1", "views.get", json!({}));
    assert_eq!(resp.get("ok").and_then(|v| v.as_bool()), Some(true));
    let rows = resp
        .pointer("/result/views/master/rows")
        .and_then(|v| v.as_array())
        .expect("master rows");
    assert_eq!(rows.len(), 7);
    for row in rows {
        let cells = row.get("cells").and_then(|v| v.as_array()).expect("cells");
        assert_eq!(cells.len(), 7);
        assert!(cells.iter().all(|c| c.is_null()));
    }
    assert_eq!(
        resp.pointer("/result/views/teacher")
            .and_then(|v| v.as_array())
            .map(|a| a.len()),
        Some(0)
    );
}
