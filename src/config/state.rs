// src/config/state.rs
use crate::{
    filter::{ResultSet, filter_data},
    query::{Constraints, extract_filters},
    store::Dataset,
};

/// Interactive session state shared by the GUI and the CLI prompt.
/// Survives redraws; dropped with the session.
#[derive(Clone, Debug, Default)]
pub struct SessionState<'a> {
    /// Last submitted query text
    pub query: String,
    /// Constraints derived from `query`
    pub constraints: Constraints,
    /// Current Result Set; replaced wholesale per search
    pub results: Option<ResultSet<'a>>,
    /// Results view visible (search form hidden)
    pub show_results: bool,
}

impl<'a> SessionState<'a> {
    /// Run one search submission. An empty query clears and hides the results.
    pub fn submit(&mut self, input: &str, dataset: &'a Dataset) {
        self.query = s!(input);
        if input.is_empty() {
            self.constraints = Constraints::default();
            self.results = None;
            self.show_results = false;
            return;
        }
        self.constraints = extract_filters(input);
        self.results = Some(filter_data(dataset, &self.constraints));
        self.show_results = true;
        logf!(
            "Search: {:?} → {} ({} match(es))",
            input,
            self.constraints,
            self.result_count()
        );
    }

    /// "Clear Search": back to the empty-query state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn result_count(&self) -> usize {
        self.results.as_ref().map_or(0, |r| r.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phone::PhoneRecord;

    fn ds() -> Dataset {
        Dataset::from_records(vec![
            PhoneRecord::new("A", "One", 12000, 8),
            PhoneRecord::new("B", "Two", 15000, 16),
            PhoneRecord::new("C", "Three", 13000, 16),
        ])
    }

    #[test]
    fn submit_filters_and_shows_results() {
        let ds = ds();
        let mut st = SessionState::default();
        st.submit("phone under ₹14000 with 16GB RAM", &ds);
        assert!(st.show_results);
        assert_eq!(st.query, "phone under ₹14000 with 16GB RAM");
        assert_eq!(st.constraints.price_max, Some(14000));
        assert_eq!(st.result_count(), 1);
    }

    #[test]
    fn empty_submit_clears() {
        let ds = ds();
        let mut st = SessionState::default();
        st.submit("under 20000", &ds);
        assert_eq!(st.result_count(), 3);
        st.submit("", &ds);
        assert!(!st.show_results);
        assert!(st.results.is_none());
    }

    #[test]
    fn zero_matches_still_shows_the_results_view() {
        let ds = ds();
        let mut st = SessionState::default();
        st.submit("under 100", &ds);
        assert!(st.show_results);
        assert_eq!(st.result_count(), 0);
    }

    #[test]
    fn new_search_replaces_previous_results() {
        let ds = ds();
        let mut st = SessionState::default();
        st.submit("16gb ram", &ds);
        assert_eq!(st.results.as_ref().unwrap().indices(), &[1, 2]);
        st.submit("under 12500", &ds);
        assert_eq!(st.results.as_ref().unwrap().indices(), &[0]);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let ds = ds();
        let mut st = SessionState::default();
        st.submit("under 14000", &ds);
        st.reset();
        assert!(st.query.is_empty());
        assert!(st.results.is_none());
        assert!(!st.show_results);
        assert!(st.constraints.is_empty());
    }
}
