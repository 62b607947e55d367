// src/store.rs
//
// Dataset loading. The dataset is read once, then shared read-only for the
// rest of the process via `init`.

use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
    sync::OnceLock,
};

use thiserror::Error;

use crate::phone::{PhoneRecord, REQUIRED_COLUMNS};

static DATASET: OnceLock<Dataset> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("could not read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{} is missing required column(s): {}", path.display(), columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<&'static str> },

    #[error("bad row in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },
}

/// Ordered, immutable phone rows.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    rows: Vec<PhoneRecord>,
    source: Option<PathBuf>,
}

impl Dataset {
    pub fn from_records(rows: Vec<PhoneRecord>) -> Self {
        Self { rows, source: None }
    }

    /// Parse CSV text with a header row. `origin` only labels errors.
    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|source| LoadError::Csv { path: origin.to_path_buf(), source })?
            .clone();

        let missing: Vec<&'static str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns { path: origin.to_path_buf(), columns: missing });
        }

        let mut rows = Vec::new();
        for rec in rdr.deserialize::<PhoneRecord>() {
            let rec = rec.map_err(|source| LoadError::Csv { path: origin.to_path_buf(), source })?;
            rows.push(rec);
        }

        Ok(Self { rows, source: Some(origin.to_path_buf()) })
    }

    #[inline] pub fn rows(&self) -> &[PhoneRecord] { &self.rows }
    #[inline] pub fn get(&self, ix: usize) -> Option<&PhoneRecord> { self.rows.get(ix) }
    #[inline] pub fn len(&self) -> usize { self.rows.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn source(&self) -> Option<&Path> { self.source.as_deref() }
}

/// Read a dataset file.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io { path: path.to_path_buf(), source: e },
    })?;
    let ds = Dataset::from_reader(io::BufReader::new(file), path)?;
    logf!("Dataset: Loaded {} row(s) from {}", ds.len(), path.display());
    Ok(ds)
}

/// Load the process-wide dataset. Later calls return the first dataset
/// regardless of `path`.
pub fn init(path: &Path) -> Result<&'static Dataset, LoadError> {
    if let Some(ds) = DATASET.get() {
        return Ok(ds);
    }
    let ds = load_dataset(path).inspect_err(|e| loge!("Dataset: {e}"))?;
    Ok(DATASET.get_or_init(|| ds))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
brand,model,Processor,launched_year,ram_gb,battery_capacity_mah,back_camera_mp,launched_price_rs,storage_gb,screen_size_inches,image_url,colour
Redmi,13C,Helio G85,2023,4,5000,50,7999,128,6.74,,blue
Oppo,A3x,,,4.0,nan,,12499,,,https://img.example/a3x.png,green
";

    #[test]
    fn parses_rows_and_tolerates_missing_optionals() {
        let ds = Dataset::from_reader(SAMPLE.as_bytes(), Path::new("sample.csv")).unwrap();
        assert_eq!(ds.len(), 2);

        let redmi = ds.get(0).unwrap();
        assert_eq!(redmi.processor.as_deref(), Some("Helio G85"));
        assert_eq!(redmi.launched_year, Some(2023));
        assert_eq!(redmi.screen_size_inches, Some(6.74));
        assert_eq!(redmi.image_url, None);

        let oppo = ds.get(1).unwrap();
        assert_eq!(oppo.ram_gb, 4);
        assert_eq!(oppo.processor, None);
        assert_eq!(oppo.battery_capacity_mah, None);
        assert_eq!(oppo.storage_gb, None);
        assert_eq!(oppo.image_url.as_deref(), Some("https://img.example/a3x.png"));
    }

    #[test]
    fn missing_required_column_is_reported() {
        let text = "brand,model,ram_gb\nRedmi,13C,4\n";
        let err = Dataset::from_reader(text.as_bytes(), Path::new("x.csv")).unwrap_err();
        match err {
            LoadError::MissingColumns { columns, .. } => assert_eq!(columns, vec!["launched_price_rs"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_price_fails_the_load() {
        let text = "brand,model,ram_gb,launched_price_rs\nRedmi,13C,4,cheap\n";
        let err = Dataset::from_reader(text.as_bytes(), Path::new("x.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Csv { .. }));
    }

    #[test]
    fn absent_file_is_not_found() {
        let path = std::env::temp_dir().join("phone_advisor_definitely_missing.csv");
        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
        assert!(err.to_string().contains("dataset not found"));
    }
}
