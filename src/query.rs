// src/query.rs
//! Free-text query → structured constraints.
//!
//! Two fixed rules, both case-insensitive and matched anywhere in the text:
//! - **price**: `under`, an optional whitespace char, an optional `₹`, then
//!   digits. Sets `price_max`.
//! - **RAM**: digits, optional whitespace, `gb`, optional whitespace, `ram`.
//!   Sets `ram_min`.
//!
//! Only the first match of each rule counts. A rule that doesn't match leaves
//! its constraint unset; nothing here can fail.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)under\s?₹?([0-9]+)").expect("price pattern"));

static RAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s?gb\s?ram").expect("ram pattern"));

/// The constraint set for one query. `None` means "no constraint of that kind".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Constraints {
    /// Inclusive upper bound on `launched_price_rs`.
    pub price_max: Option<i64>,
    /// Inclusive lower bound on `ram_gb`.
    pub ram_min: Option<i64>,
}

impl Constraints {
    pub fn is_empty(&self) -> bool {
        self.price_max.is_none() && self.ram_min.is_none()
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(2);
        if let Some(p) = self.price_max { parts.push(format!("price ≤ ₹{p}")); }
        if let Some(r) = self.ram_min { parts.push(format!("RAM ≥ {r} GB")); }
        if parts.is_empty() {
            f.write_str("no filters")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

/// Digit runs past `i64` saturate; the bound stays above every real value.
fn digits_to_i64(digits: &str) -> i64 {
    digits.parse::<i64>().unwrap_or(i64::MAX)
}

fn first_capture(re: &Regex, text: &str) -> Option<i64> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| digits_to_i64(m.as_str()))
}

/// Extract the constraint set from a raw query.
pub fn extract_filters(query: &str) -> Constraints {
    Constraints {
        price_max: first_capture(&PRICE_RE, query),
        ram_min: first_capture(&RAM_RE, query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_price_and_ram_from_the_example_query() {
        let c = extract_filters("phone under ₹14000 with 16GB RAM");
        assert_eq!(c, Constraints { price_max: Some(14000), ram_min: Some(16) });
    }

    #[test]
    fn price_rule_ignores_case_and_surroundings() {
        for q in [
            "under ₹14000",
            "UNDER ₹14000 please",
            "best camera phone Under ₹14000!!",
            "something under 14000",
            "under14000",
        ] {
            assert_eq!(extract_filters(q).price_max, Some(14000), "query: {q}");
        }
    }

    #[test]
    fn ram_rule_allows_single_optional_spaces() {
        for q in ["16gb ram", "16 GB RAM", "16GBram", "need 16 gb ram"] {
            assert_eq!(extract_filters(q).ram_min, Some(16), "query: {q}");
        }
        // Two spaces between number and unit is not the pattern.
        assert_eq!(extract_filters("16  gb ram").ram_min, None);
    }

    #[test]
    fn first_match_wins() {
        let c = extract_filters("under 9000 or maybe under 20000, 8gb ram or 12gb ram");
        assert_eq!(c.price_max, Some(9000));
        assert_eq!(c.ram_min, Some(8));
    }

    #[test]
    fn no_pattern_yields_empty_set() {
        let c = extract_filters("a nice phone with a good camera");
        assert!(c.is_empty());
        assert_eq!(c.to_string(), "no filters");
        assert!(extract_filters("").is_empty());
    }

    #[test]
    fn price_needs_digits_after_the_currency_sign() {
        assert_eq!(extract_filters("under ₹ 14000").price_max, None);
        assert_eq!(extract_filters("under budget").price_max, None);
    }

    #[test]
    fn huge_numbers_saturate() {
        let c = extract_filters("under 99999999999999999999999 with 99999999999999999999999gb ram");
        assert_eq!(c.price_max, Some(i64::MAX));
        assert_eq!(c.ram_min, Some(i64::MAX));
    }

    #[test]
    fn summary_names_each_constraint() {
        let c = Constraints { price_max: Some(14000), ram_min: Some(16) };
        assert_eq!(c.to_string(), "price ≤ ₹14000, RAM ≥ 16 GB");
    }
}
