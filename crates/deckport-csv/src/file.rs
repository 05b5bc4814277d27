//! Reading and writing CSV files.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use deckport_model::Table;

use crate::error::{CsvError, Result};
use crate::{from_csv, to_csv};

/// File name offered when a list is exported.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "cards.csv";

/// Read and decode a CSV file.
pub fn read_csv_file(path: &Path) -> Result<Table> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            CsvError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CsvError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let table = from_csv(&text);
    tracing::debug!(path = %path.display(), rows = table.len(), "read CSV file");
    Ok(table)
}

/// Encode a table and write it to `path`, replacing any existing file.
pub fn write_csv_file(path: &Path, table: &Table) -> Result<()> {
    fs::write(path, to_csv(table)).map_err(|e| CsvError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), rows = table.len(), "wrote CSV file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_file() {
        let file = create_temp_csv("Count,Name\n1,\"Lightning Bolt\"\n");
        let table = read_csv_file(file.path()).unwrap();
        assert_eq!(table.rows(), &[vec!["Count", "Name"], vec!["1", "Lightning Bolt"]]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_csv_file(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(CsvError::FileNotFound { .. })));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE_NAME);
        let table = Table::from_iter(vec![vec!["#", "Name"], vec!["2", "Shock, Again"]]);
        write_csv_file(&path, &table).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "#,Name\n2,\"Shock, Again\""
        );
        assert_eq!(read_csv_file(&path).unwrap(), table);
    }
}
