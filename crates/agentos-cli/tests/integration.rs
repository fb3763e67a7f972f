#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn agentos(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("agentos").unwrap();
    cmd.current_dir(dir.path())
        .env("AGENTOS_ROOT", dir.path())
        .env("DESIGN_PORT", free_port().to_string())
        .env("APP_PORT", free_port().to_string())
        .env_remove("PORT");
    cmd
}

fn init_project(dir: &TempDir) {
    std::fs::create_dir_all(dir.path().join("agent-os/specs")).unwrap();
}

fn write(dir: &TempDir, rel: &str, content: &str) {
    let path = dir.path().join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// agentos status / next
// ---------------------------------------------------------------------------

#[test]
fn status_json_on_empty_project() {
    let dir = TempDir::new().unwrap();
    let json = json_output(agentos(&dir).args(["--json", "status"]));

    assert_eq!(json["product"]["mission"]["exists"], false);
    assert_eq!(json["services"]["api"], true);
    assert_eq!(json["services"]["design"], false);
    assert_eq!(json["next"]["title"], "Plan Your Product");
}

#[test]
fn status_human_output_shows_next_step() {
    let dir = TempDir::new().unwrap();
    agentos(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan Your Product"))
        .stdout(predicate::str::contains("No specs yet."));
}

#[test]
fn next_follows_product_progress() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write(&dir, "agent-os/product/mission.md", "# Mission\nBuild a great app.");
    write(&dir, "agent-os/product/roadmap.md", "# Roadmap\n1. Accounts");
    write(&dir, "agent-os/product/tech-stack.md", "# Tech Stack\nRust.");

    let json = json_output(agentos(&dir).args(["next", "--json"]));
    assert_eq!(json["phase"], "Phase 2: Design System");
    assert_eq!(json["title"], "Sync Product to Design OS");

    agentos(&dir)
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phase:    Phase 2: Design System"));
}

// ---------------------------------------------------------------------------
// agentos spec
// ---------------------------------------------------------------------------

#[test]
fn spec_create_list_delete() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    agentos(&dir)
        .args(["spec", "create", "feature-one"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created spec 'feature-one'"));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("agent-os/specs/feature-one/tasks.md")).unwrap(),
        "# Tasks\n\n- [ ] Initial task"
    );

    agentos(&dir)
        .args(["spec", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("feature-one"))
        .stdout(predicate::str::contains("0/1"))
        .stdout(predicate::str::contains("Initial task"));

    agentos(&dir)
        .args(["spec", "delete", "feature-one"])
        .assert()
        .success();
    assert!(!dir.path().join("agent-os/specs/feature-one").exists());
}

#[test]
fn spec_create_twice_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    agentos(&dir).args(["spec", "create", "auth"]).assert().success();
    agentos(&dir)
        .args(["spec", "create", "auth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn spec_delete_rejects_traversal() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::create_dir_all(dir.path().join("agent-os/etc")).unwrap();

    agentos(&dir)
        .args(["spec", "delete", "../etc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid spec name"));
    assert!(dir.path().join("agent-os/etc").exists());
}

#[test]
fn spec_list_json_is_array() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    agentos(&dir).args(["spec", "create", "b-spec"]).assert().success();
    agentos(&dir).args(["spec", "create", "a-spec"]).assert().success();

    let json = json_output(agentos(&dir).args(["--json", "spec", "list"]));
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["a-spec", "b-spec"]);
}

// ---------------------------------------------------------------------------
// agentos file
// ---------------------------------------------------------------------------

#[test]
fn file_put_then_get() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    agentos(&dir)
        .args(["file", "put", "product/mission.md", "# Mission"])
        .assert()
        .success();

    agentos(&dir)
        .args(["file", "get", "product/mission.md"])
        .assert()
        .success()
        .stdout("# Mission");
}

#[test]
fn file_put_reads_stdin() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    agentos(&dir)
        .args(["file", "put", "notes.md", "-"])
        .write_stdin("- [ ] from stdin\n")
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("agent-os/notes.md")).unwrap(),
        "- [ ] from stdin\n"
    );
}

#[test]
fn file_get_outside_sandbox_is_denied() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write(&dir, "secrets.md", "top secret");

    agentos(&dir)
        .args(["file", "get", "../secrets.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("access denied"));
}

#[test]
fn file_get_missing_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    agentos(&dir)
        .args(["file", "get", "product/roadmap.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

// ---------------------------------------------------------------------------
// agentos config
// ---------------------------------------------------------------------------

#[test]
fn config_show_applies_env_overrides() {
    let dir = TempDir::new().unwrap();
    let json = json_output(
        agentos(&dir)
            .env("APP_PORT", "3000")
            .args(["--json", "config", "show"]),
    );
    assert_eq!(json["ports"]["app"], 3000);
    assert_eq!(json["ports"]["api"], 5403);
    assert_eq!(json["paths"]["agent_os"], "agent-os");
}

#[test]
fn config_init_writes_file_once() {
    let dir = TempDir::new().unwrap();
    agentos(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("control-center.yaml").exists());

    agentos(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    agentos(&dir).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn config_validate_flags_duplicate_ports() {
    let dir = TempDir::new().unwrap();
    write(&dir, "control-center.yaml", "ports:\n  design: 4000\n  app: 4000\n");

    agentos(&dir)
        .env_remove("DESIGN_PORT")
        .env_remove("APP_PORT")
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error]"));
}

#[test]
fn serve_refuses_invalid_config() {
    let dir = TempDir::new().unwrap();
    write(&dir, "control-center.yaml", "probe:\n  timeout_ms: 0\n");

    agentos(&dir)
        .args(["serve", "--port", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to start"));
}
