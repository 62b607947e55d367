// src/filter.rs
//
// Dataset filtering. A ResultSet is a zero-copy view: the positions of kept
// rows in the canonical Dataset, in dataset order. Nothing here mutates the
// dataset; every filter produces a new view.

use crate::phone::PhoneRecord;
use crate::query::Constraints;
use crate::store::Dataset;

impl Constraints {
    /// All present bounds hold (inclusive).
    pub fn matches(&self, p: &PhoneRecord) -> bool {
        self.price_max.is_none_or(|max| p.launched_price_rs <= max)
            && self.ram_min.is_none_or(|min| p.ram_gb >= min)
    }
}

/// Rows of a Dataset matching a constraint set, in original order.
#[derive(Clone, Debug)]
pub struct ResultSet<'a> {
    /// Positions of kept rows in the dataset
    row_ix: Vec<usize>,
    raw: &'a Dataset,
}

impl<'a> ResultSet<'a> {
    /// Every row, unfiltered.
    pub fn all(raw: &'a Dataset) -> Self {
        Self { row_ix: (0..raw.len()).collect(), raw }
    }

    /// Filter this view again. Same constraints twice gives the same view.
    pub fn refine(&self, c: &Constraints) -> ResultSet<'a> {
        let row_ix = self
            .row_ix
            .iter()
            .copied()
            .filter(|&ix| self.raw.get(ix).is_some_and(|p| c.matches(p)))
            .collect();
        ResultSet { row_ix, raw: self.raw }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Dataset positions of the kept rows.
    pub fn indices(&self) -> &[usize] { &self.row_ix }

    /// Borrow a row by position in the view.
    pub fn get(&self, i: usize) -> Option<&'a PhoneRecord> {
        self.row_ix.get(i).and_then(|&ix| self.raw.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a PhoneRecord> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.raw.get(ix))
    }

    /// (dataset position, row) pairs; positions are stable across searches.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &'a PhoneRecord)> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.raw.get(ix).map(|p| (ix, p)))
    }
}

/// Apply a constraint set to the dataset.
pub fn filter_data<'a>(raw: &'a Dataset, c: &Constraints) -> ResultSet<'a> {
    if c.is_empty() {
        return ResultSet::all(raw);
    }
    ResultSet::all(raw).refine(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::extract_filters;

    fn three_rows() -> Dataset {
        Dataset::from_records(vec![
            PhoneRecord::new("A", "One", 12000, 8),
            PhoneRecord::new("B", "Two", 15000, 16),
            PhoneRecord::new("C", "Three", 13000, 16),
        ])
    }

    fn prices(rs: &ResultSet) -> Vec<i64> {
        rs.iter().map(|p| p.launched_price_rs).collect()
    }

    #[test]
    fn example_query_keeps_only_the_cheap_16gb_phone() {
        let ds = three_rows();
        let c = extract_filters("phone under ₹14000 with 16GB RAM");
        assert_eq!(c, Constraints { price_max: Some(14000), ram_min: Some(16) });

        let rs = filter_data(&ds, &c);
        assert_eq!(rs.len(), 1);
        let only = rs.get(0).unwrap();
        assert_eq!((only.launched_price_rs, only.ram_gb), (13000, 16));
        assert_eq!(rs.indices(), &[2]);
    }

    #[test]
    fn no_constraints_returns_everything_in_order() {
        let ds = three_rows();
        let rs = filter_data(&ds, &extract_filters("show me phones"));
        assert_eq!(rs.indices(), &[0, 1, 2]);
        assert_eq!(prices(&rs), vec![12000, 15000, 13000]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let ds = three_rows();
        let rs = filter_data(&ds, &Constraints { price_max: Some(13000), ram_min: None });
        assert_eq!(prices(&rs), vec![12000, 13000]);

        let rs = filter_data(&ds, &Constraints { price_max: None, ram_min: Some(16) });
        assert_eq!(prices(&rs), vec![15000, 13000]);

        let rs = filter_data(&ds, &Constraints { price_max: Some(15000), ram_min: Some(16) });
        assert_eq!(prices(&rs), vec![15000, 13000]);
    }

    #[test]
    fn refining_with_the_same_constraints_is_idempotent() {
        let ds = three_rows();
        for c in [
            Constraints::default(),
            Constraints { price_max: Some(14000), ram_min: None },
            Constraints { price_max: Some(14000), ram_min: Some(16) },
            Constraints { price_max: Some(-1), ram_min: None },
        ] {
            let once = filter_data(&ds, &c);
            let twice = once.refine(&c);
            assert_eq!(once.indices(), twice.indices(), "constraints: {c:?}");
        }
    }

    #[test]
    fn implausible_bounds_are_literal() {
        let ds = three_rows();
        assert!(filter_data(&ds, &Constraints { price_max: Some(-5), ram_min: None }).is_empty());
        assert!(filter_data(&ds, &Constraints { price_max: None, ram_min: Some(i64::MAX) }).is_empty());
        assert_eq!(filter_data(&ds, &Constraints { price_max: Some(i64::MAX), ram_min: Some(0) }).len(), 3);
    }

    #[test]
    fn dataset_is_untouched() {
        let ds = three_rows();
        let before = ds.rows().to_vec();
        let _ = filter_data(&ds, &Constraints { price_max: Some(1), ram_min: Some(64) });
        assert_eq!(ds.rows(), before.as_slice());
    }
}
