//! End-to-end tests driving the compiled binary.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

const TWO_CASES: &str = r#"[
    {
        "input": {
            "trip_duration_days": 5,
            "miles_traveled": 100,
            "total_receipts_amount": 42.49
        },
        "expected_output": 200
    },
    {
        "input": {
            "trip_duration_days": 8,
            "miles_traveled": 50,
            "total_receipts_amount": 10.00
        },
        "expected_output": 80
    }
]"#;

const ARTIFACTS: [&str; 4] = [
    "reimbursement_vs_inputs.png",
    "reimbursement_5day.png",
    "reimbursement_8day.png",
    "rounding_bug.png",
];

fn reimviz() -> Command {
    Command::new(env!("CARGO_BIN_EXE_reimviz"))
}

#[test]
fn two_record_scenario_produces_all_charts() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("public_cases.json");
    fs::write(&input, TWO_CASES).unwrap();
    let out = dir.path().join("charts");

    let output = reimviz()
        .arg("--input")
        .arg(&input)
        .arg("--out-dir")
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.starts_with("Analysis complete. Plots saved in"),
        "unexpected stdout: {stdout}"
    );

    for name in ARTIFACTS {
        let bytes = fs::read(out.join(name))
            .unwrap_or_else(|_| panic!("missing artifact {name}"));
        assert!(bytes.starts_with(&PNG_SIGNATURE), "{name} is not a PNG");
    }
}

#[test]
fn rerun_on_unchanged_input_succeeds() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cases.json");
    fs::write(&input, TWO_CASES).unwrap();
    let out = dir.path().join("charts");

    for _ in 0..2 {
        let status = reimviz()
            .arg("--input")
            .arg(&input)
            .arg("--out-dir")
            .arg(&out)
            .status()
            .unwrap();
        assert!(status.success());
    }

    for name in ARTIFACTS {
        assert!(out.join(name).is_file());
    }
}

#[test]
fn missing_input_fails_without_artifacts() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("charts");

    let status = reimviz()
        .arg("--input")
        .arg(dir.path().join("absent.json"))
        .arg("--out-dir")
        .arg(&out)
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!out.exists());
}

#[test]
fn malformed_input_fails_without_artifacts() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cases.json");
    fs::write(&input, "definitely not json").unwrap();
    let out = dir.path().join("charts");

    let status = reimviz()
        .arg("--input")
        .arg(&input)
        .arg("--out-dir")
        .arg(&out)
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!out.exists());
}
