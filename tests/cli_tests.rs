//! Binary-surface tests: startup, connectivity failures, exit codes.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use assert_cmd::Command;

mod common;
use common::fixtures::single_student_dataset;

fn write_dataset_file(dir: &tempfile::TempDir) -> anyhow::Result<std::path::PathBuf> {
    let path = dir.path().join("gradebook.json");
    let json = serde_json::to_string_pretty(&single_student_dataset())?;
    std::fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_voluntary_exit_returns_zero() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        let data = write_dataset_file(&dir)?;

        let mut cmd = Command::cargo_bin("gradebook-navigator")?;
        cmd.arg("--data")
            .arg(&data)
            .write_stdin("0\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Menu:"))
            .stdout(predicate::str::contains("[1] Search Student"))
            .stdout(predicate::str::contains("Goodbye!"));

        Ok(())
    }

    #[test]
    fn test_end_of_input_exits_cleanly() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        let data = write_dataset_file(&dir)?;

        let mut cmd = Command::cargo_bin("gradebook-navigator")?;
        cmd.arg("--data")
            .arg(&data)
            .write_stdin("")
            .assert()
            .success()
            .stdout(predicate::str::contains("Goodbye!"));

        Ok(())
    }

    #[test]
    fn test_missing_dataset_is_fatal_before_the_loop() -> anyhow::Result<()> {
        let mut cmd = Command::cargo_bin("gradebook-navigator")?;
        cmd.arg("--data")
            .arg("/no/such/gradebook.json")
            .write_stdin("0\n")
            .assert()
            .failure()
            .stdout(predicate::str::contains("Cannot open dataset"))
            .stdout(predicate::str::contains("Menu:").not());

        Ok(())
    }

    #[test]
    fn test_malformed_dataset_is_fatal_before_the_loop() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json")?;

        let mut cmd = Command::cargo_bin("gradebook-navigator")?;
        cmd.arg("--data")
            .arg(&path)
            .write_stdin("0\n")
            .assert()
            .failure()
            .stdout(predicate::str::contains("Cannot parse dataset"));

        Ok(())
    }

    #[test]
    fn test_env_var_selects_dataset_when_flag_absent() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        let data = write_dataset_file(&dir)?;

        let mut cmd = Command::cargo_bin("gradebook-navigator")?;
        cmd.env("GRADEBOOK_DATA", &data)
            .write_stdin("0\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Goodbye!"));

        Ok(())
    }

    #[test]
    fn test_interactive_search_through_the_binary() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        let data = write_dataset_file(&dir)?;

        let mut cmd = Command::cargo_bin("gradebook-navigator")?;
        cmd.arg("--data")
            .arg(&data)
            .write_stdin("1\n1\nDoe\n1\n0\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Student 'Doe Jensen'"))
            .stdout(predicate::str::contains("Email: doe.jensen@example.edu"));

        Ok(())
    }
}
