//! Whole-file CSV readers and writers over Polars.

use std::fs::File;
use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use ventas_model::{PipelineError, Result};

/// Read a CSV file into a DataFrame.
///
/// A missing file maps to [`PipelineError::SourceNotFound`] so batch and
/// event callers report the same failure kind for absent inputs.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(PipelineError::SourceNotFound(path.display().to_string()));
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "csv loaded"
    );
    Ok(df)
}

/// Read an in-memory CSV payload into a DataFrame.
pub fn read_csv_bytes(bytes: &[u8]) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;
    debug!(rows = df.height(), columns = df.width(), "csv payload loaded");
    Ok(df)
}

/// Write a DataFrame to a CSV file, replacing any existing file.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|error| PipelineError::DestinationWriteFailure {
        location: path.display().to_string(),
        reason: error.to_string(),
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|error| PipelineError::DestinationWriteFailure {
            location: path.display().to_string(),
            reason: error.to_string(),
        })?;
    debug!(path = %path.display(), rows = df.height(), "csv written");
    Ok(())
}

/// Serialize a DataFrame to CSV bytes.
pub fn write_csv_bytes(df: &mut DataFrame) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer).include_header(true).finish(df)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_csv_preserves_nulls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ventas.csv");
        std::fs::write(&path, "ventas,cliente\n10,ana\n,leo\n").unwrap();

        let df = read_csv(&path).unwrap();

        assert_eq!(df.height(), 2);
        let ventas = df.column("ventas").unwrap();
        assert_eq!(ventas.null_count(), 1);
    }

    #[test]
    fn read_csv_missing_file_is_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");

        let error = read_csv(&path).unwrap_err();

        match error {
            PipelineError::SourceNotFound(location) => {
                assert!(location.contains("absent.csv"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn byte_payloads_match_file_contents() {
        let mut df = read_csv_bytes(b"ventas,cliente\n10,ana\n20,leo\n").unwrap();

        let bytes = write_csv_bytes(&mut df).unwrap();
        let again = read_csv_bytes(&bytes).unwrap();

        assert_eq!(again.height(), 2);
        let cliente = again.column("cliente").unwrap().str().unwrap();
        assert_eq!(cliente.get(1), Some("leo"));
    }
}
