//! Reading the list of names from a CSV file.

use csv::{ReaderBuilder, Trim};
use log::debug;
use std::path::Path;

use crate::error::{CertgenError, Result};

pub const DEFAULT_NAME_COLUMN: &str = "name";

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    if !path.exists() {
        return Err(CertgenError::ResourceNotFound {
            kind: "CSV",
            path: path.to_path_buf(),
        });
    }

    Ok(ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?)
}

/// Header row of the CSV file
pub fn csv_columns(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let mut reader = open(path.as_ref())?;
    let headers = reader.headers()?;
    Ok(headers.iter().map(str::to_string).collect())
}

/// Liest alle Namen aus der angegebenen Spalte. Leere Zellen werden übersprungen.
pub fn read_names_from_csv(path: impl AsRef<Path>, column: &str) -> Result<Vec<String>> {
    let mut reader = open(path.as_ref())?;

    let headers = reader.headers()?.clone();
    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| CertgenError::ColumnNotFound {
            column: column.to_string(),
            available: headers.iter().map(str::to_string).collect(),
        })?;

    let mut names = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        match record.get(index) {
            Some(cell) if !cell.is_empty() => names.push(cell.to_string()),
            _ => debug!("Skipping row {} without a value in '{}'", row + 1, column),
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reads_column_in_order() {
        let file = csv_file(
            "id,name,email\n1,Alice Smith,a@x.org\n2,Bob,b@x.org\n3,Alice Smith,c@x.org\n",
        );
        let names = read_names_from_csv(file.path(), "name").unwrap();
        assert_eq!(names, vec!["Alice Smith", "Bob", "Alice Smith"]);
    }

    #[test]
    fn test_quoted_and_padded_cells() {
        let file = csv_file("name\n\"O'Brien, Jr.\"\n  Carol  \n");
        let names = read_names_from_csv(file.path(), "name").unwrap();
        assert_eq!(names, vec!["O'Brien, Jr.", "Carol"]);
    }

    #[test]
    fn test_skips_empty_cells_and_short_rows() {
        let file = csv_file("id,name\n1,\n2,Dana\n3\n");
        let names = read_names_from_csv(file.path(), "name").unwrap();
        assert_eq!(names, vec!["Dana"]);
    }

    #[test]
    fn test_missing_column_lists_available() {
        let file = csv_file("id,full_name\n1,Alice\n");
        match read_names_from_csv(file.path(), "name") {
            Err(CertgenError::ColumnNotFound { column, available }) => {
                assert_eq!(column, "name");
                assert_eq!(available, vec!["id", "full_name"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_header_only_yields_nothing() {
        let file = csv_file("name\n");
        assert!(read_names_from_csv(file.path(), "name").unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_names_from_csv("/nonexistent/names.csv", "name"),
            Err(CertgenError::ResourceNotFound { kind: "CSV", .. })
        ));
    }

    #[test]
    fn test_columns() {
        let file = csv_file("name, email ,score\n");
        assert_eq!(csv_columns(file.path()).unwrap(), vec!["name", "email", "score"]);
    }
}
