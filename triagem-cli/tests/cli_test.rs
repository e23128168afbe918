use std::io::Write;
use std::process::Command;

fn triagem_bin() -> &'static str {
    env!("CARGO_BIN_EXE_triagem")
}

#[test]
fn text_subcommand_prints_json_result() {
    let output = Command::new(triagem_bin())
        .args(["text", "CPF 390.533.447-05"])
        .output()
        .expect("failed to run triagem");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["status"], "REVIEW");
    assert_eq!(parsed["total_matches"], 1);
}

#[test]
fn batch_subcommand_reads_named_column() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "id,texto").unwrap();
    writeln!(file, "1,texto comum sem nada").unwrap();
    writeln!(file, "2,CPF 390.533.447-05").unwrap();
    file.flush().unwrap();

    let output = Command::new(triagem_bin())
        .args(["batch", file.path().to_str().unwrap(), "--column", "texto"])
        .output()
        .expect("failed to run triagem");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[1]["status"], "REVIEW");
}

#[test]
fn batch_subcommand_rejects_missing_column() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "id,descricao").unwrap();
    writeln!(file, "1,ola").unwrap();
    file.flush().unwrap();

    let output = Command::new(triagem_bin())
        .args(["batch", file.path().to_str().unwrap(), "--column", "texto"])
        .output()
        .expect("failed to run triagem");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("MissingColumn"));
}

#[test]
fn custom_policy_file_overrides_thresholds() {
    let mut policy_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(policy_file, "score_review = 100").unwrap();
    policy_file.flush().unwrap();

    let output = Command::new(triagem_bin())
        .args([
            "--policy",
            policy_file.path().to_str().unwrap(),
            "text",
            "CPF 390.533.447-05",
        ])
        .output()
        .expect("failed to run triagem");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["status"], "PUBLISH");
}
