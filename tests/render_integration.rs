use assert_cmd::Command;
use predicates::prelude::*;

fn sample_day() -> serde_json::Value {
    serde_json::json!({
        "dateLong": "Monday, February 9, 2026",
        "dateDisplay": "Feb 9, 2026",
        "headline": "One Commit,<br><em>Infinite Review</em>",
        "subtitle": "One-sentence summary",
        "stats": [
            { "value": "279", "unit": "", "label": "sessions", "isHighlight": false },
            { "value": "1", "unit": "", "label": "commit", "isHighlight": true }
        ],
        "timeline": [
            {
                "time": "09:30",
                "timeEnd": "11:00",
                "messages": 127,
                "shortName": "Calendar fix",
                "title": "Statusline Bug Fix",
                "description": "Fixed the next-meeting countdown.",
                "color": "warm",
                "tags": [ { "text": "bugfix", "color": "warm" } ],
                "isCommit": false
            },
            {
                "time": "14:00",
                "title": "Quick check",
                "description": "Point event.",
                "color": "cyan"
            }
        ],
        "workspaces": [
            { "name": "ppm (root)", "count": 635, "percent": 63.5,
              "color": "accent", "colorDim": "accent-dim" }
        ],
        "agents": [
            { "icon": "&#9678;", "name": "Claude Code", "count": "914", "label": "messages" }
        ],
        "heroNumber": "1",
        "heroLabel": "Commit. 16,000 messages to get there."
    })
}

fn write_data(dir: &tempfile::TempDir, value: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join("day.json");
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

#[test]
fn render_requires_data_and_output_paths() {
    let mut cmd = Command::cargo_bin("daymap").unwrap();
    cmd.arg("render");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("required arguments were not provided"));
}

#[test]
fn render_writes_a_complete_document() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(&dir, &sample_day());
    let output = dir.path().join("day.html");

    let mut cmd = Command::cargo_bin("daymap").unwrap();
    cmd.arg("render")
        .arg("--data-file")
        .arg(&data)
        .arg("--output-file")
        .arg(&output);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generated:"));

    let html = std::fs::read_to_string(&output).unwrap();
    for token in [
        "{{DATE_LONG}}",
        "{{DATE_DISPLAY}}",
        "{{HEADLINE}}",
        "{{SUBTITLE}}",
        "{{STATS_INLINE}}",
        "{{DAYMAP_LANES}}",
        "{{DAYMAP_AXIS}}",
        "{{JOURNAL_ITEMS}}",
        "{{WORKSPACE_ROWS}}",
        "{{AGENT_ITEMS}}",
        "{{HERO_NUMBER}}",
        "{{HERO_LABEL}}",
    ] {
        assert!(!html.contains(token), "{token} left in output");
    }
    assert!(html.contains("One Commit,<br><em>Infinite Review</em>"));
    assert!(html.contains("Calendar fix"));
    assert!(html.contains("min-width:14px"));
}

#[test]
fn render_overwrites_an_existing_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(&dir, &sample_day());
    let output = dir.path().join("day.html");
    std::fs::write(&output, "stale").unwrap();

    let mut cmd = Command::cargo_bin("daymap").unwrap();
    cmd.arg("render")
        .arg("--data-file")
        .arg(&data)
        .arg("--output-file")
        .arg(&output);
    cmd.assert().success();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(!html.contains("stale"));
}

#[test]
fn render_accepts_a_custom_template() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(&dir, &sample_day());
    let template = dir.path().join("custom.html");
    std::fs::write(&template, "<p>{{HERO_NUMBER}}</p> {{NOT_A_TOKEN}}").unwrap();
    let output = dir.path().join("day.html");

    let mut cmd = Command::cargo_bin("daymap").unwrap();
    cmd.arg("render")
        .arg("--data-file")
        .arg(&data)
        .arg("--output-file")
        .arg(&output)
        .arg("--template")
        .arg(&template);
    cmd.assert().success();

    let html = std::fs::read_to_string(&output).unwrap();
    assert_eq!(html, "<p>1</p> {{NOT_A_TOKEN}}");
}

#[test]
fn missing_data_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("daymap").unwrap();
    cmd.arg("render")
        .arg("--data-file")
        .arg(dir.path().join("nope.json"))
        .arg("--output-file")
        .arg(dir.path().join("day.html"));
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn missing_template_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(&dir, &sample_day());
    let mut cmd = Command::cargo_bin("daymap").unwrap();
    cmd.arg("render")
        .arg("--data-file")
        .arg(&data)
        .arg("--output-file")
        .arg(dir.path().join("day.html"))
        .arg("--template")
        .arg(dir.path().join("missing.html"));
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("missing.html"));
}

#[test]
fn missing_required_field_is_a_schema_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut value = sample_day();
    value.as_object_mut().unwrap().remove("headline");
    let data = write_data(&dir, &value);

    let mut cmd = Command::cargo_bin("daymap").unwrap();
    cmd.arg("render")
        .arg("--data-file")
        .arg(&data)
        .arg("--output-file")
        .arg(dir.path().join("day.html"));
    cmd.assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("headline"));
}

#[test]
fn malformed_time_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut value = sample_day();
    value["timeline"][0]["time"] = serde_json::json!("nine-ish");
    let data = write_data(&dir, &value);

    let mut cmd = Command::cargo_bin("daymap").unwrap();
    cmd.arg("render")
        .arg("--data-file")
        .arg(&data)
        .arg("--output-file")
        .arg(dir.path().join("day.html"));
    cmd.assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid time"));
}

#[test]
fn check_reports_axis_and_counts() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(&dir, &sample_day());

    let mut cmd = Command::cargo_bin("daymap").unwrap();
    cmd.arg("check").arg("--data-file").arg(&data);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("daymap-check"))
        .stdout(predicate::str::contains("items=2"))
        .stdout(predicate::str::contains("point-events=1"))
        .stdout(predicate::str::contains("axis  start=9  end=15"));
}

#[test]
fn check_json_report_parses() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(&dir, &sample_day());

    let mut cmd = Command::cargo_bin("daymap").unwrap();
    cmd.arg("check")
        .arg("--data-file")
        .arg(&data)
        .arg("--format")
        .arg("json");
    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["timeline"]["items"], 2);
    assert_eq!(report["sections"]["workspaces"], 1);
}

#[test]
fn check_warns_when_an_item_ends_before_it_starts() {
    let dir = tempfile::tempdir().unwrap();
    let mut value = sample_day();
    value["timeline"][0]["timeEnd"] = serde_json::json!("08:00");
    let data = write_data(&dir, &value);

    let mut cmd = Command::cargo_bin("daymap").unwrap();
    cmd.arg("check").arg("--data-file").arg(&data);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ends before it starts"));
}

#[test]
fn schema_describes_the_data_file() {
    let mut cmd = Command::cargo_bin("daymap").unwrap();
    cmd.arg("schema");
    let output = cmd.assert().success().get_output().stdout.clone();
    let schema: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let props = &schema["properties"];
    assert!(props.get("dateLong").is_some());
    assert!(props.get("timeline").is_some());
    assert!(props.get("heroLabel").is_some());
}
