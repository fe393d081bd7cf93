#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const MISSION: &str = "\
# Product Mission

## Pitch

TaskMaster is a productivity software designed for small business owners that helps them manage tasks efficiently.

## Users

### Primary Customers

- **Small Business Owners**: Entrepreneurs running businesses with 1-50 employees
- **Freelancers**: Independent professionals managing multiple projects

## The Problem

### Task Management Chaos

Small businesses struggle with scattered tasks. This leads to decreased productivity.

**Our Solution:** Centralized task management with smart prioritization.
";

fn brandkit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("brandkit").unwrap();
    cmd.current_dir(dir.path())
        .env("BRANDKIT_ROOT", dir.path())
        .env_remove("THEME_ACCENT_COLOR")
        .env_remove("THEME_BASE_COLOR");
    cmd
}

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, body).unwrap();
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".agent-os/product/mission.md", MISSION);
    write(
        dir.path(),
        "resources/css/app.css",
        "@theme {\n    --color-accent: var(--color-blue-600);\n}\n",
    );
    dir
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.arg("--json").output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

fn create_session(dir: &TempDir, extra: &[&str]) -> String {
    let value = json_output(brandkit(dir).args(["session", "create"]).args(extra));
    value["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// brandkit init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();
    brandkit(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("created: .brandkit/config.yaml"));

    assert!(dir.path().join(".brandkit/sessions").is_dir());
    let config = std::fs::read_to_string(dir.path().join(".brandkit/config.yaml")).unwrap();
    assert!(config.contains("accent: blue"));
}

#[test]
fn init_keeps_existing_config() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".brandkit/config.yaml", "theme:\n  accent: rose\n");
    brandkit(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists:"));

    let config = std::fs::read_to_string(dir.path().join(".brandkit/config.yaml")).unwrap();
    assert_eq!(config, "theme:\n  accent: rose\n");
}

// ---------------------------------------------------------------------------
// pipeline commands
// ---------------------------------------------------------------------------

#[test]
fn context_json() {
    let dir = project();
    let value = json_output(brandkit(&dir).arg("context"));
    assert_eq!(value["industry"], "productivity software");
    assert_eq!(
        value["target_audience"],
        serde_json::json!(["small business owners", "freelancers"])
    );
    assert_eq!(value["brand_personality"], serde_json::json!(["efficient"]));
    assert_eq!(
        value["values"],
        serde_json::json!(["organization", "productivity"])
    );
}

#[test]
fn context_without_mission() {
    let dir = TempDir::new().unwrap();
    brandkit(&dir)
        .arg("context")
        .assert()
        .success()
        .stdout(predicate::str::contains("No business context found."));
}

#[test]
fn app_name_from_pitch() {
    let dir = project();
    brandkit(&dir)
        .arg("app-name")
        .assert()
        .success()
        .stdout("TaskMaster\n");
}

#[test]
fn colors_include_shade() {
    let dir = project();
    let value = json_output(brandkit(&dir).arg("colors"));
    assert_eq!(value["accent"], "blue");
    assert_eq!(value["base"], "zinc");
    assert_eq!(value["accent_shade"], "blue-600");
}

#[test]
fn colors_follow_environment() {
    let dir = project();
    let value = json_output(
        brandkit(&dir)
            .env("THEME_ACCENT_COLOR", "purple")
            .arg("colors"),
    );
    assert_eq!(value["accent"], "purple");
    assert!(value.get("accent_shade").is_none());
}

#[test]
fn colors_list_families() {
    let dir = TempDir::new().unwrap();
    brandkit(&dir)
        .args(["colors", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Accent colors:").and(predicate::str::contains("blue")))
        .stdout(predicate::str::contains("Base colors:").and(predicate::str::contains("zinc")));
}

#[test]
fn colors_set_accent_rewrites_stylesheet_and_config() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "resources/css/app.css",
        "@theme {\n    --color-accent: var(--color-blue-600);\n}\n\n\
         .dark {\n    --color-accent: var(--color-blue-500);\n}\n",
    );

    brandkit(&dir)
        .args(["colors", "set", "purple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Accent color updated to: purple"));

    let css = std::fs::read_to_string(dir.path().join("resources/css/app.css")).unwrap();
    assert!(css.contains("@theme {\n    --color-accent: var(--color-purple-600);"));
    assert!(css.contains(".dark {\n    --color-accent: var(--color-purple-500);"));
    assert!(!css.contains("blue"));

    let value = json_output(brandkit(&dir).arg("colors"));
    assert_eq!(value["accent"], "purple");
    assert_eq!(value["accent_shade"], "purple-600");
}

#[test]
fn colors_set_base() {
    let dir = project();
    let value = json_output(brandkit(&dir).args(["colors", "set", "--base", "slate"]));
    assert_eq!(value["base"], "slate");
    assert_eq!(value["accent"], "blue");
    assert_eq!(value["declarations_updated"], 0);

    let config = std::fs::read_to_string(dir.path().join(".brandkit/config.yaml")).unwrap();
    assert!(config.contains("base: slate"));
}

#[test]
fn colors_set_rejects_unknown_accent() {
    let dir = project();
    brandkit(&dir)
        .args(["colors", "set", "invalid-color"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown accent colour 'invalid-color'"));

    let css = std::fs::read_to_string(dir.path().join("resources/css/app.css")).unwrap();
    assert!(css.contains("var(--color-blue-600)"));
    assert!(!dir.path().join(".brandkit/config.yaml").exists());
}

#[test]
fn colors_set_rejects_unknown_base() {
    let dir = project();
    brandkit(&dir)
        .args(["colors", "set", "--base", "invalid-base"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown base colour 'invalid-base'"));
}

#[test]
fn colors_set_requires_a_colour() {
    let dir = project();
    brandkit(&dir)
        .args(["colors", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to set"));
}

#[test]
fn prompt_text() {
    let dir = project();
    brandkit(&dir)
        .arg("prompt")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Create a minimalist square logo for TaskMaster, a productivity software application. \
             The logo should be efficient. Use blue as the primary color.",
        ));
}

#[test]
fn prompt_falls_back_without_mission() {
    let dir = TempDir::new().unwrap();
    brandkit(&dir)
        .arg("prompt")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "logo for the application, a technology application. The logo should be modern, professional.",
        ));
}

#[test]
fn prompt_context_only() {
    let dir = project();
    let value = json_output(brandkit(&dir).args(["prompt", "--context-only"]));
    assert_eq!(value["style_keywords"], serde_json::json!(["efficient"]));
    assert_eq!(value["color_palette"], serde_json::json!(["blue", "zinc"]));
    assert_eq!(
        value["industry_context"],
        serde_json::json!(["productivity software"])
    );
}

// ---------------------------------------------------------------------------
// brandkit config
// ---------------------------------------------------------------------------

#[test]
fn config_validate_clean() {
    let dir = TempDir::new().unwrap();
    brandkit(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No warnings"));
}

#[test]
fn config_validate_reports_unknown_colour() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".brandkit/config.yaml", "theme:\n  accent: invalid-color\n");
    brandkit(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown colour 'invalid-color'"));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".brandkit/config.yaml", "theme: [unclosed\n");
    brandkit(&dir)
        .arg("colors")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: failed to load"));
}

// ---------------------------------------------------------------------------
// brandkit session
// ---------------------------------------------------------------------------

#[test]
fn session_create_stores_context_and_prompt() {
    let dir = project();
    let id = create_session(&dir, &[]);

    let value = json_output(brandkit(&dir).args(["session", "show", &id]));
    let session = &value["session"];
    assert_eq!(session["status"], "pending");
    assert_eq!(session["app_name"], "TaskMaster");
    assert_eq!(
        session["business_context"]["industry"],
        "productivity software"
    );
    assert!(session["prompt_template"]
        .as_str()
        .unwrap()
        .contains("logo for TaskMaster"));
    assert_eq!(value["options"], serde_json::json!([]));
}

#[test]
fn session_create_without_mission_uses_default_name() {
    let dir = TempDir::new().unwrap();
    let value = json_output(brandkit(&dir).args(["session", "create"]));
    assert_eq!(value["app_name"], "Untitled App");
    assert!(value["prompt_template"]
        .as_str()
        .unwrap()
        .contains("logo for the application"));
}

#[test]
fn session_full_lifecycle() {
    let dir = project();
    let id = create_session(&dir, &[]);

    brandkit(&dir)
        .args(["session", "status", &id, "generating"])
        .assert()
        .success();

    let option = json_output(brandkit(&dir).args([
        "session",
        "add-option",
        &id,
        "--service",
        "dall-e-3",
        "--image-url",
        "https://img.example/1.png",
        "--metadata",
        r#"{"size":"1024x1024"}"#,
    ]));
    let option_id = option["id"].as_str().unwrap().to_string();
    assert!(option["prompt"].as_str().unwrap().contains("TaskMaster"));

    brandkit(&dir)
        .args(["session", "status", &id, "ready"])
        .assert()
        .success();
    brandkit(&dir)
        .args(["session", "select", &id, &option_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("completed"));

    let value = json_output(brandkit(&dir).args(["session", "show", &id]));
    assert_eq!(value["session"]["status"], "completed");
    assert_eq!(value["session"]["selected_option_id"], option_id.as_str());
    assert_eq!(value["options"][0]["ai_service"], "dall-e-3");
    assert_eq!(value["options"][0]["metadata"]["size"], "1024x1024");
}

#[test]
fn session_invalid_transition_fails() {
    let dir = project();
    let id = create_session(&dir, &[]);
    brandkit(&dir)
        .args(["session", "status", &id, "completed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid transition from pending to completed"));
}

#[test]
fn session_unknown_status_fails() {
    let dir = project();
    let id = create_session(&dir, &[]);
    brandkit(&dir)
        .args(["session", "status", &id, "finished"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid session status: finished"));
}

#[test]
fn session_show_rejects_non_uuid() {
    let dir = project();
    brandkit(&dir)
        .args(["session", "show", "../../etc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a uuid"));
}

#[test]
fn session_service_name_too_long() {
    let dir = project();
    let id = create_session(&dir, &[]);
    let service = "x".repeat(51);
    brandkit(&dir)
        .args(["session", "add-option", &id, "--service", &service])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds 50 characters"));
}

#[test]
fn session_list_filters_and_purge() {
    let dir = project();
    let stale = create_session(&dir, &["--ttl-minutes", "0"]);
    let fresh = create_session(&dir, &[]);

    let active = json_output(brandkit(&dir).args(["session", "list", "--active"]));
    let ids: Vec<_> = active
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec![fresh.clone()]);

    let expired = json_output(brandkit(&dir).args(["session", "list", "--expired"]));
    assert_eq!(expired[0]["id"], stale.as_str());

    brandkit(&dir)
        .args(["session", "purge"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Purged 1 expired session(s)"));

    let all = json_output(brandkit(&dir).args(["session", "list"]));
    assert_eq!(all.as_array().unwrap().len(), 1);
    assert_eq!(all[0]["id"], fresh.as_str());
}

#[test]
fn session_list_flags_conflict() {
    let dir = project();
    brandkit(&dir)
        .args(["session", "list", "--active", "--expired"])
        .assert()
        .failure();
}

#[test]
fn session_delete() {
    let dir = project();
    let id = create_session(&dir, &[]);
    brandkit(&dir)
        .args(["session", "delete", &id])
        .assert()
        .success();
    assert!(!dir.path().join(".brandkit/sessions").join(&id).exists());

    brandkit(&dir)
        .args(["session", "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("session not found"));
}

#[test]
fn session_list_empty() {
    let dir = TempDir::new().unwrap();
    brandkit(&dir)
        .args(["session", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions."));
}
