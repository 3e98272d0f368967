//! CSV export of the collected samples
//!
//! Writes the full sample sequence to a tabular file at shutdown, one row per
//! sample in arrival order, overwriting any existing file at the path. The
//! header names match the original experiment logs, so downstream analysis
//! scripts keep working unchanged.

use crate::error::Result;
use crate::types::Sample;
use std::path::Path;

/// Column headers of the export file, in order
pub const CSV_HEADERS: [&str; 3] = ["Waktu (s)", "Sudut (derajat)", "Output PID"];

/// Write `samples` to a CSV file at `path`.
///
/// Returns the number of data rows written. Any existing file is replaced.
/// A failure here is reported by the caller but never aborts shutdown.
pub fn export_csv(samples: &[Sample], path: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(CSV_HEADERS)?;
    for sample in samples {
        writer.write_record([
            sample.time_s.to_string(),
            sample.angle_deg.to_string(),
            sample.pid_output.to_string(),
        ])?;
    }
    writer.flush()?;

    Ok(samples.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sample;

    #[test]
    fn test_export_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let samples = vec![
            Sample::new(1.0, 45.0, 12.5),
            Sample::new(1.01, 44.5, 12.0),
            Sample::new(1.02, 44.0, 11.5),
        ];
        let written = export_csv(&samples, &path).unwrap();
        assert_eq!(written, 3);

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("Waktu (s),Sudut (derajat),Output PID"));
        assert_eq!(lines.next(), Some("1,45,12.5"));
        assert_eq!(lines.next(), Some("1.01,44.5,12"));
        assert_eq!(lines.next(), Some("1.02,44,11.5"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_empty_store_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        assert_eq!(export_csv(&[], &path).unwrap(), 0);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), "Waktu (s),Sudut (derajat),Output PID");
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale contents\nfrom a previous run\n").unwrap();

        export_csv(&[Sample::new(0.5, 1.0, 2.0)], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Waktu (s)"));
        assert!(!contents.contains("stale"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.csv");
        assert!(export_csv(&[Sample::new(0.0, 0.0, 0.0)], &path).is_err());
    }

    #[test]
    fn test_export_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.csv");

        let samples = vec![
            Sample::new(0.123, -179.5, 0.0625),
            Sample::new(0.133, 12.25, -3.5),
        ];
        export_csv(&samples, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<Sample> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                Sample::new(
                    r[0].parse().unwrap(),
                    r[1].parse().unwrap(),
                    r[2].parse().unwrap(),
                )
            })
            .collect();

        assert_eq!(rows, samples);
    }
}
