//! Runs the `folio` binary against the shipped knowledge base.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn folio() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
    cmd.current_dir(workspace_root())
        .env("FOLIO_LOG", "off")
        .env_remove("FOLIO_KNOWLEDGE_PATH")
        .env_remove("FOLIO_EMBEDDING_PROVIDER")
        .env_remove("FOLIO_MATCH_THRESHOLD");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn ask_json_includes_navigation() {
    let output = folio()
        .args(["ask", "--json", "show", "me", "your", "projects"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let reply: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(reply["role"], "assistant");
    assert_eq!(reply["navigate_to"], "/projects");
}

#[test]
fn ask_blank_question_asks_for_one() {
    let output = folio().args(["ask", "   "]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Please ask me something!");
}

#[test]
fn ask_explain_reports_keyword_route() {
    let output = folio().args(["ask", "--explain", "hello"]).output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("[keyword intent=greeting]"));
}

#[test]
fn intents_json_lists_examples() {
    let output = folio().args(["intents", "--json"]).output().unwrap();
    assert!(output.status.success());
    let intents: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(!intents.is_empty());
    for intent in &intents {
        let examples = intent["examplePatterns"].as_array().unwrap();
        assert!(!examples.is_empty() && examples.len() <= 3);
    }
}

#[test]
fn validate_shipped_knowledge() {
    let output = folio().arg("validate").output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains(": ok, "));
}

#[test]
fn validate_rejects_broken_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"intents":[],"fallback_responses":[]}}"#).unwrap();
    let output = folio()
        .arg("validate")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let output = folio()
        .args(["--threshold", "2.5", "ask", "hello"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("matcher.threshold"));
}

#[test]
fn chat_session_answers_until_exit() {
    let mut child = folio()
        .arg("chat")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"show me your projects\nexit\nhello\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("→ /projects"));
    // Nothing after "exit" is answered.
    assert_eq!(text.matches("> ").count(), 2);
}
