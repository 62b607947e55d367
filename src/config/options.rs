// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub dataset_path: PathBuf,
    pub images: ImageOptions,
    pub export: ExportOptions,
    pub cards_per_row: usize,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            images: ImageOptions::default(),
            export: ExportOptions::default(),
            cards_per_row: CARDS_PER_ROW,
        }
    }
}

impl AppOptions {
    /// Defaults, then process environment overrides.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with the variable source injected.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(path) = lookup(ENV_DATASET).filter(|v| !v.trim().is_empty()) {
            opts.dataset_path = PathBuf::from(path.trim());
        }
        if let Some(v) = lookup(ENV_OFFLINE) {
            opts.images.lookup_enabled = !is_truthy(&v);
        }
        if let Some(secs) = lookup(ENV_IMAGE_TIMEOUT).and_then(|v| v.trim().parse::<u64>().ok()) {
            if secs > 0 {
                opts.images.timeout_secs = secs;
            }
        }
        opts
    }
}

fn is_truthy(v: &str) -> bool {
    let v = v.trim();
    v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageOptions {
    /// When false, rows without a stored image go straight to the placeholder.
    pub lookup_enabled: bool,
    pub timeout_secs: u64,
    pub placeholder_url: String,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            lookup_enabled: true,
            timeout_secs: IMAGE_TIMEOUT_SECS,
            placeholder_url: s!(PLACEHOLDER_IMAGE_URL),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_dir: PathBuf,
    file_stem: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: s!(DEFAULT_FILE),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension follows the current format.
    pub fn out_path(&self) -> PathBuf {
        self.out_dir.join(join!(&self.file_stem, ".", self.format.ext()))
    }

    /// Parse user text into dir + stem. Ignores a pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.file_stem = stem.to_string_lossy().into_owned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn env_overrides_apply() {
        let opts = AppOptions::from_lookup(lookup(&[
            (ENV_DATASET, "/tmp/phones.csv"),
            (ENV_OFFLINE, "true"),
            (ENV_IMAGE_TIMEOUT, "3"),
        ]));
        assert_eq!(opts.dataset_path, PathBuf::from("/tmp/phones.csv"));
        assert!(!opts.images.lookup_enabled);
        assert_eq!(opts.images.timeout_secs, 3);
    }

    #[test]
    fn bad_or_blank_env_values_keep_defaults() {
        let opts = AppOptions::from_lookup(lookup(&[
            (ENV_DATASET, "   "),
            (ENV_OFFLINE, "0"),
            (ENV_IMAGE_TIMEOUT, "soon"),
        ]));
        assert_eq!(opts, AppOptions::default());
    }

    #[test]
    fn out_path_extension_follows_format() {
        let mut export = ExportOptions::default();
        export.set_path("exports/cheap.txt");
        assert_eq!(export.out_path(), Path::new("exports").join("cheap.csv"));
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), Path::new("exports").join("cheap.tsv"));
    }
}
