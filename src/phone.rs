// src/phone.rs
//
// One row of the phone dataset, plus the lenient cell parsing used when
// loading it. Only `ram_gb` and `launched_price_rs` are guaranteed; every
// other attribute may be missing and renders as `N/A`.

use serde::{Deserialize, Serialize};

/// Shown in place of any missing attribute.
pub const NOT_AVAILABLE: &str = "N/A";

/// Column order used by the table view and exports.
pub const HEADERS: [&str; 11] = [
    "brand",
    "model",
    "processor",
    "launched_year",
    "ram_gb",
    "battery_capacity_mah",
    "back_camera_mp",
    "launched_price_rs",
    "storage_gb",
    "screen_size_inches",
    "image_url",
];

/// Columns a dataset file must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["brand", "model", "ram_gb", "launched_price_rs"];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneRecord {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(alias = "Processor", default, deserialize_with = "cell::opt_text")]
    pub processor: Option<String>,
    #[serde(default, deserialize_with = "cell::opt_whole")]
    pub launched_year: Option<i64>,
    #[serde(deserialize_with = "cell::whole")]
    pub ram_gb: i64,
    #[serde(default, deserialize_with = "cell::opt_whole")]
    pub battery_capacity_mah: Option<i64>,
    #[serde(default, deserialize_with = "cell::opt_number")]
    pub back_camera_mp: Option<f64>,
    #[serde(deserialize_with = "cell::whole")]
    pub launched_price_rs: i64,
    #[serde(default, deserialize_with = "cell::opt_whole")]
    pub storage_gb: Option<i64>,
    #[serde(default, deserialize_with = "cell::opt_number")]
    pub screen_size_inches: Option<f64>,
    #[serde(default, deserialize_with = "cell::opt_text")]
    pub image_url: Option<String>,
}

impl PhoneRecord {
    /// Minimal record; the two guaranteed attributes only.
    pub fn new(brand: &str, model: &str, launched_price_rs: i64, ram_gb: i64) -> Self {
        Self {
            brand: s!(brand),
            model: s!(model),
            ram_gb,
            launched_price_rs,
            ..Self::default()
        }
    }

    /// "<brand> <model>", the caption and image search term.
    pub fn display_name(&self) -> String {
        join!(self.brand.trim(), " ", self.model.trim()).trim().to_string()
    }

    /// Cells in `HEADERS` order with missing values as `N/A`.
    pub fn table_cells(&self) -> Vec<String> {
        vec![
            self.brand.clone(),
            self.model.clone(),
            or_na!(self.processor),
            or_na!(self.launched_year),
            self.ram_gb.to_string(),
            or_na!(self.battery_capacity_mah),
            or_na!(self.back_camera_mp),
            self.launched_price_rs.to_string(),
            or_na!(self.storage_gb),
            or_na!(self.screen_size_inches),
            or_na!(self.image_url),
        ]
    }
}

/// Card body lines: (label, value-with-unit). Missing values drop the unit.
pub fn card_lines(p: &PhoneRecord) -> Vec<(&'static str, String)> {
    fn with_unit<T: std::fmt::Display>(v: &Option<T>, unit: &str) -> String {
        match v {
            Some(v) => format!("{v} {unit}"),
            None => s!(NOT_AVAILABLE),
        }
    }
    vec![
        ("Processor", or_na!(p.processor)),
        ("Year", or_na!(p.launched_year)),
        ("RAM", format!("{} GB", p.ram_gb)),
        ("Battery", with_unit(&p.battery_capacity_mah, "mAh")),
        ("Camera", with_unit(&p.back_camera_mp, "MP")),
        ("Price", format!("₹{}", p.launched_price_rs)),
        ("Storage", with_unit(&p.storage_gb, "GB")),
        ("Screen", with_unit(&p.screen_size_inches, "inches")),
    ]
}

/// Cell-level deserializers. Text in, typed value out.
mod cell {
    use serde::{Deserialize, Deserializer, de::Error};

    fn is_missing(s: &str) -> bool {
        let s = s.trim();
        s.is_empty()
            || ["nan", "none", "null", "n/a", "na"]
                .iter()
                .any(|m| s.eq_ignore_ascii_case(m))
    }

    /// Integer, or a float with no fractional part ("8.0").
    pub(super) fn parse_whole(s: &str) -> Option<i64> {
        let s = s.trim();
        if let Ok(v) = s.parse::<i64>() {
            return Some(v);
        }
        let f = s.parse::<f64>().ok()?;
        if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
            Some(f as i64)
        } else {
            None
        }
    }

    pub fn whole<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        let raw = String::deserialize(d)?;
        parse_whole(&raw).ok_or_else(|| D::Error::custom(format!("expected a whole number, got {raw:?}")))
    }

    pub fn opt_whole<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        let raw = String::deserialize(d)?;
        if is_missing(&raw) { return Ok(None); }
        Ok(parse_whole(&raw))
    }

    pub fn opt_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let raw = String::deserialize(d)?;
        if is_missing(&raw) { return Ok(None); }
        Ok(raw.trim().parse::<f64>().ok().filter(|f| f.is_finite()))
    }

    pub fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw = String::deserialize(d)?;
        if is_missing(&raw) { return Ok(None); }
        Ok(Some(raw.trim().to_string()))
    }
}
