use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with plain output, an isolated database and no assistant key.
fn lumen_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lumen").expect("Failed to find lumen binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .env_remove("LUMEN_API_KEY")
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY");
    cmd
}

/// Creates a decision and returns its id.
fn create_decision(db_path: &Path, args: &[&str]) -> String {
    let output = lumen_cmd(db_path)
        .arg("new")
        .args(args)
        .output()
        .expect("Failed to run lumen");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Created decision with ID: "))
        .expect("creation output names the id")
        .trim()
        .to_string()
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli_test.db");

    lumen_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No decisions logged yet."));
}

#[test]
fn test_cli_new_and_list() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli_test.db");

    let id = create_decision(
        &db_path,
        &["--title", "Job offer", "--situation", "Choosing between job A and B"],
    );
    assert!(id.starts_with("decision-"));

    lumen_cmd(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("## Job offer (ID: {id})")))
        .stdout(predicate::str::contains("○ Pending"));
}

#[test]
fn test_cli_new_from_template() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli_test.db");

    let id = create_decision(&db_path, &["--template", "should i ask for a raise?"]);

    lumen_cmd(&db_path)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Should I Ask for a Raise?"))
        .stdout(predicate::str::contains(
            "I will schedule a meeting with my manager",
        ));
}

#[test]
fn test_cli_unknown_template_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli_test.db");

    lumen_cmd(&db_path)
        .args(["new", "--template", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No template named 'Nope'"));
}

#[test]
fn test_cli_edit_review_and_summary() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_decision(&db_path, &["--situation", "Moving cities"]);

    lumen_cmd(&db_path)
        .args(["edit", &id, "--choice", "Move to Lisbon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated choice"))
        .stdout(predicate::str::contains("Move to Lisbon"));

    lumen_cmd(&db_path)
        .args(["edit", &id, "--actual-outcome", "Too early"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("actualOutcome"));

    lumen_cmd(&db_path)
        .args(["review", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Marked"));

    lumen_cmd(&db_path)
        .args(["show", &id, "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Faced with the situation of **Moving cities**, the chosen course of action was to **Move to Lisbon**.",
        ))
        .stdout(predicate::str::contains("## Actual Outcome\n\n_Not yet specified._"));
}

#[test]
fn test_cli_reopen_keeps_outcome() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_decision(&db_path, &[]);

    lumen_cmd(&db_path).args(["review", &id]).assert().success();
    lumen_cmd(&db_path)
        .args(["edit", &id, "--actual-outcome", "It worked out"])
        .assert()
        .success();
    lumen_cmd(&db_path).args(["reopen", &id]).assert().success();
    lumen_cmd(&db_path).args(["review", &id]).assert().success();

    lumen_cmd(&db_path)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("It worked out"));
}

#[test]
fn test_cli_review_twice_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_decision(&db_path, &[]);

    lumen_cmd(&db_path).args(["review", &id]).assert().success();
    lumen_cmd(&db_path)
        .args(["review", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already Reviewed"));
}

#[test]
fn test_cli_delete_prompt_declined() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_decision(&db_path, &["--title", "Keep me"]);

    lumen_cmd(&db_path)
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled"));

    lumen_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep me"));
}

#[test]
fn test_cli_delete_prompt_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_decision(&db_path, &["--title", "Remove me"]);

    lumen_cmd(&db_path)
        .args(["delete", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted decision 'Remove me'"));

    lumen_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No decisions logged yet."));
}

#[test]
fn test_cli_delete_with_confirm_flag() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_decision(&db_path, &[]);

    lumen_cmd(&db_path)
        .args(["delete", &id, "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("(ID: {id})")));

    lumen_cmd(&db_path)
        .args(["delete", &id, "--confirm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_templates() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli_test.db");

    lumen_cmd(&db_path)
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Career"))
        .stdout(predicate::str::contains("Deciding Between Two Job Offers"));
}

#[test]
fn test_cli_assist_without_key_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_decision(&db_path, &["--situation", "Choosing between job A and B"]);

    lumen_cmd(&db_path)
        .args(["assist", &id, "brainstorm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not configured"));
}

#[test]
fn test_cli_assist_precondition_checked_before_request() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_decision(&db_path, &[]);

    lumen_cmd(&db_path)
        .args(["assist", &id, "brainstorm", "--api-key", "test-key"])
        .env("LUMEN_API_ENDPOINT", "http://127.0.0.1:9")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please describe the situation first."));
}

#[test]
fn test_cli_show_unknown_decision() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli_test.db");

    lumen_cmd(&db_path)
        .args(["show", "decision-0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Decision with ID decision-0 not found"));
}
