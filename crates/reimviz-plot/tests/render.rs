//! Rendering pipeline tests over in-memory case data.

use std::fs;

use reimviz_plot::render_charts;
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

const EXPECTED_ARTIFACTS: [&str; 4] = [
    "reimbursement_vs_inputs.png",
    "reimbursement_5day.png",
    "reimbursement_8day.png",
    "rounding_bug.png",
];

#[test]
fn two_case_dataset_renders_every_artifact() {
    let dir = TempDir::new().unwrap();
    let written = render_charts(TWO_CASES.as_bytes(), dir.path()).unwrap();

    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_owned())
        .collect();
    assert_eq!(names, EXPECTED_ARTIFACTS);

    for path in &written {
        let bytes = fs::read(path).unwrap();
        assert!(
            bytes.starts_with(&PNG_SIGNATURE),
            "{} is not a PNG",
            path.display()
        );
    }
}

#[test]
fn empty_case_list_still_renders_every_artifact() {
    let dir = TempDir::new().unwrap();
    let written = render_charts(b"[]".as_slice(), dir.path()).unwrap();
    assert_eq!(written.len(), EXPECTED_ARTIFACTS.len());
    for path in &written {
        assert!(fs::read(path).unwrap().starts_with(&PNG_SIGNATURE));
    }
}

#[test]
fn unmatched_durations_render_empty_views() {
    // No 5-day or 8-day trips and no suffix hits: the filtered charts
    // must still be produced, empty.
    let json = r#"[
        {
            "input": {
                "trip_duration_days": 3,
                "miles_traveled": 10,
                "total_receipts_amount": 12.34
            },
            "expected_output": 50
        }
    ]"#;
    let dir = TempDir::new().unwrap();
    let written = render_charts(json.as_bytes(), dir.path()).unwrap();
    assert_eq!(written.len(), EXPECTED_ARTIFACTS.len());
    for path in &written {
        assert!(path.is_file());
    }
}

#[test]
fn rerun_overwrites_artifacts_in_place() {
    let dir = TempDir::new().unwrap();
    render_charts(TWO_CASES.as_bytes(), dir.path()).unwrap();
    let written = render_charts(TWO_CASES.as_bytes(), dir.path()).unwrap();
    assert_eq!(written.len(), EXPECTED_ARTIFACTS.len());
}

#[test]
fn malformed_json_is_classified_as_deserialize() {
    let dir = TempDir::new().unwrap();
    let err = render_charts(b"not json".as_slice(), dir.path()).unwrap_err();
    assert!(err.is_deserialize());
    assert!(!err.is_io());
}

#[test]
fn malformed_json_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("charts");
    render_charts(b"{".as_slice(), &out).unwrap_err();
    assert!(!out.exists());
}

#[test]
fn out_dir_colliding_with_a_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("occupied");
    fs::write(&out, b"in the way").unwrap();

    let err = render_charts(b"[]".as_slice(), &out).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn missing_out_dir_is_created() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("a").join("b");
    render_charts(b"[]".as_slice(), &out).unwrap();
    assert!(out.is_dir());
}
