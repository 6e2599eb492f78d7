use std::path::Path;
use crate::db::error::StoreError;

/// Number of data rows currently in a partition file, 0 if it does not exist.
pub fn count_rows(partition_path: &Path) -> Result<usize, StoreError> {
    if !partition_path.is_file() {
        return Ok(0);
    }
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(partition_path)?;

    let mut count = 0;
    let mut record = csv::ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn absent_file_has_no_rows() {
        let dir = TempDir::new().unwrap();
        assert_eq!(count_rows(&dir.path().join("nope.csv")).unwrap(), 0);
    }

    #[test]
    fn header_is_not_counted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("day.csv");
        fs::write(&path, "snapshot_ts,pairAddress\nt1,P1\nt1,P2").unwrap();
        assert_eq!(count_rows(&path).unwrap(), 2);

        fs::write(&path, "snapshot_ts,pairAddress\n").unwrap();
        assert_eq!(count_rows(&path).unwrap(), 0);
    }
}
