use std::fs;
use std::io::Write;

use tempfile::{tempdir, NamedTempFile};

use seqdiff::seqdiff::{run_seqdiff, Args};
use seqdiff::{MutationRecord, SeqDiffError};

fn sequence_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file.as_file_mut().sync_all().unwrap();
    file
}

fn base_args() -> Args {
    Args {
        seq1: None,
        seq2: None,
        input: None,
        batch: false,
        output: None,
        typed: false,
        json: None,
        plot: None,
        color: false,
        merged: false,
        max_length: None,
        threads: 1,
        verbose: false,
    }
}

#[test]
fn writes_basic_csv() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("mutations.csv");
    let args = Args {
        seq1: Some("AGCT".into()),
        seq2: Some("AGGT".into()),
        output: Some(csv_path.to_str().unwrap().to_string()),
        ..base_args()
    };
    run_seqdiff(args).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv, "Position,Original,Mutated\n3,C,G\n");
}

#[test]
fn writes_typed_csv() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("mutations.csv");
    let args = Args {
        seq1: Some("AGCT".into()),
        seq2: Some("AGT".into()),
        output: Some(csv_path.to_str().unwrap().to_string()),
        typed: true,
        ..base_args()
    };
    run_seqdiff(args).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv, "Position,Original,Mutated,Type\n3,C,-,Deletion\n");
}

#[test]
fn writes_json_records() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("mutations.json");
    let args = Args {
        seq1: Some("agt".into()),
        seq2: Some("agct".into()),
        json: Some(json_path.to_str().unwrap().to_string()),
        ..base_args()
    };
    run_seqdiff(args).unwrap();
    let parsed: Vec<MutationRecord> =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed, vec![MutationRecord::insertion(3, "C".into())]);
}

#[test]
fn reads_sequences_from_file() {
    let input = sequence_file("aaaa\nattA\n");
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("out.csv");
    let args = Args {
        input: Some(input.path().to_str().unwrap().to_string()),
        output: Some(csv_path.to_str().unwrap().to_string()),
        ..base_args()
    };
    run_seqdiff(args).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv, "Position,Original,Mutated\n2,A,T\n3,A,T\n");
}

#[test]
fn zero_mutations_still_exports_a_header() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("out.csv");
    let args = Args {
        seq1: Some("ACGT".into()),
        seq2: Some("ACGT".into()),
        output: Some(csv_path.to_str().unwrap().to_string()),
        ..base_args()
    };
    run_seqdiff(args).unwrap();
    assert_eq!(fs::read_to_string(&csv_path).unwrap(), "Position,Original,Mutated\n");
}

#[test]
fn input_file_with_one_line_fails() {
    let input = sequence_file("ACGT\n");
    let args = Args {
        input: Some(input.path().to_str().unwrap().to_string()),
        ..base_args()
    };
    match run_seqdiff(args) {
        Err(SeqDiffError::Input(msg)) => assert!(msg.contains("one line")),
        other => panic!("expected Input error, got {:?}", other),
    }
}

#[test]
fn missing_input_file_fails_with_io_error() {
    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap().to_string();
    drop(file);
    let args = Args { input: Some(path), ..base_args() };
    assert!(matches!(run_seqdiff(args), Err(SeqDiffError::Io(_))));
}

#[test]
fn length_guard_aborts_the_run() {
    let args = Args {
        seq1: Some("ACGTACGT".into()),
        seq2: Some("ACGT".into()),
        max_length: Some(4),
        ..base_args()
    };
    assert!(matches!(run_seqdiff(args), Err(SeqDiffError::TooLong { len: 8, limit: 4 })));
}

#[test]
fn batch_mode_aligns_every_pair() {
    let input = sequence_file("AGCT\nAGGT\nACGT\nACGT\nAGT\nAGCT\n");
    let args = Args {
        input: Some(input.path().to_str().unwrap().to_string()),
        batch: true,
        threads: 2,
        ..base_args()
    };
    run_seqdiff(args).unwrap();
}

#[test]
fn batch_mode_rejects_odd_line_counts() {
    let input = sequence_file("AGCT\nAGGT\nACGT\n");
    let args = Args {
        input: Some(input.path().to_str().unwrap().to_string()),
        batch: true,
        ..base_args()
    };
    assert!(matches!(run_seqdiff(args), Err(SeqDiffError::Input(_))));
}

#[test]
fn batch_mode_refuses_export_flags() {
    let input = sequence_file("AGCT\nAGGT\n");
    let args = Args {
        input: Some(input.path().to_str().unwrap().to_string()),
        batch: true,
        output: Some("unused.csv".into()),
        ..base_args()
    };
    assert!(matches!(run_seqdiff(args), Err(SeqDiffError::Input(_))));
}

#[test]
fn cli_reports_a_substitution() {
    let exe = env!("CARGO_BIN_EXE_seqdiff");
    let output = std::process::Command::new(exe)
        .args(["AGCT", "AGGT"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 mutation(s) detected:"));
    assert!(stdout.contains("Position 3: C -> G"));
}

#[test]
fn cli_reports_no_mutations() {
    let exe = env!("CARGO_BIN_EXE_seqdiff");
    let output = std::process::Command::new(exe)
        .args(["ACGT", "ACGT"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No mutations detected."));
}

#[test]
fn cli_rejects_a_lone_sequence() {
    let exe = env!("CARGO_BIN_EXE_seqdiff");
    let output = std::process::Command::new(exe).arg("ACGT").output().unwrap();
    assert!(!output.status.success());
}
