//! Integration tests for the batch cleaning run.

use ventas_cli::run::{CleanOptions, run_clean};
use ventas_ingest::read_csv;

fn options(dir: &std::path::Path, input: &str) -> CleanOptions {
    CleanOptions {
        input: dir.join(input),
        output: dir.join("clean.csv"),
        filter_column: "ventas".to_string(),
        key_column: "cliente".to_string(),
        upper_column: "cliente".to_string(),
    }
}

#[test]
fn cleans_a_sales_export_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("ventas.csv"),
        "Ventas ,Cliente\n10,ana\n20,bob\n20,ana\n,leo\n-5,sam\n",
    )
    .unwrap();

    let report = run_clean(&options(dir.path(), "ventas.csv")).unwrap();

    assert_eq!(report.input_rows, 5);
    assert_eq!(report.output_rows, 2);
    assert!(report.steps.iter().all(|step| !step.skipped));

    let df = read_csv(&report.output).unwrap();
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, vec!["ventas", "cliente", "ventas_norm", "cliente_upper"]);
    let upper = df.column("cliente_upper").unwrap().str().unwrap();
    assert_eq!(upper.get(0), Some("ANA"));
    assert_eq!(upper.get(1), Some("BOB"));
}

#[test]
fn optional_columns_are_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ventas.csv"), "Ventas\n10\n20\n").unwrap();

    let report = run_clean(&options(dir.path(), "ventas.csv")).unwrap();

    let skipped: Vec<&str> = report
        .steps
        .iter()
        .filter(|step| step.skipped)
        .map(|step| step.name)
        .collect();
    assert_eq!(skipped, vec!["dedupe_by_key", "uppercase_text"]);
    assert_eq!(report.output_rows, 2);
}

#[test]
fn missing_input_propagates_after_logging() {
    let dir = tempfile::tempdir().unwrap();

    let error = run_clean(&options(dir.path(), "absent.csv")).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("absent.csv"));
    assert!(!dir.path().join("clean.csv").exists());
}
