// src/export.rs
//
// Copy/Export of a Result Set as CSV or TSV. The base rows are never touched;
// the writer serializes each record in `phone::HEADERS` order.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{
    config::options::{ExportFormat, ExportOptions},
    filter::ResultSet,
    phone::HEADERS,
};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("could not write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Write rows to any writer in the chosen format.
pub fn write_results<W: Write>(
    w: W,
    results: &ResultSet<'_>,
    format: ExportFormat,
    include_headers: bool,
) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(format.delim())
        .has_headers(false)
        .from_writer(w);

    if include_headers {
        wtr.write_record(HEADERS)?;
    }
    for rec in results.iter() {
        wtr.serialize(rec)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Full export text (clipboard, stdout).
pub fn to_export_string(
    results: &ResultSet<'_>,
    format: ExportFormat,
    include_headers: bool,
) -> Result<String, ExportError> {
    let mut buf: Vec<u8> = Vec::new();
    write_results(&mut buf, results, format, include_headers)?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/// Write a single export file based on ExportOptions. Returns the final path.
pub fn export_to_file(export: &ExportOptions, results: &ResultSet<'_>) -> Result<PathBuf, ExportError> {
    let path = export.out_path();
    write_to_path(&path, results, export.format, export.include_headers)?;
    Ok(path)
}

/// Write to an explicit path, creating parent directories.
pub fn write_to_path(
    path: &Path,
    results: &ResultSet<'_>,
    format: ExportFormat,
    include_headers: bool,
) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = fs::File::create(path).map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;
    write_results(io::BufWriter::new(file), results, format, include_headers)?;
    logf!("Export: {} row(s) → {}", results.len(), path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{filter::filter_data, phone::PhoneRecord, query::Constraints, store::Dataset};

    fn ds() -> Dataset {
        let mut a = PhoneRecord::new("Redmi", "13C", 7999, 4);
        a.processor = Some(s!("Helio G85"));
        a.screen_size_inches = Some(6.74);
        let b = PhoneRecord::new("Poco", "X6, Neo", 17999, 12);
        Dataset::from_records(vec![a, b])
    }

    #[test]
    fn csv_has_header_and_quotes_commas() {
        let ds = ds();
        let rs = filter_data(&ds, &Constraints::default());
        let out = to_export_string(&rs, ExportFormat::Csv, true).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], HEADERS.join(","));
        assert!(lines[1].starts_with("Redmi,13C,Helio G85,,4,"));
        assert!(lines[2].starts_with("Poco,\"X6, Neo\","));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn tsv_without_headers_only_has_rows() {
        let ds = ds();
        let rs = filter_data(&ds, &Constraints { price_max: Some(10000), ram_min: None });
        let out = to_export_string(&rs, ExportFormat::Tsv, false).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("Redmi\t13C\tHelio G85\t"));
    }
}
