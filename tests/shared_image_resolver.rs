// tests/shared_image_resolver.rs
//
// `resolve_image` goes through one process-wide resolver; this file installs
// a counting provider before anything else can.
use std::sync::atomic::{AtomicUsize, Ordering};

use phone_advisor::images::{self, ImageHit, ImageResolver, ImageSearch, SearchError};
use phone_advisor::resolve_image;

static CALLS: AtomicUsize = AtomicUsize::new(0);

struct Counting;

impl ImageSearch for Counting {
    fn name(&self) -> &'static str { "counting" }

    fn search(&self, query: &str, _max_results: usize) -> Result<Vec<ImageHit>, SearchError> {
        CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(vec![ImageHit { image: format!("https://img.test/{}.jpg", query.replace(' ', "_")) }])
    }
}

#[test]
fn repeated_names_are_looked_up_once_per_process() {
    let installed = images::init_with(ImageResolver::new(Some(Box::new(Counting)), "https://p.test/none.png"));

    let first = resolve_image("Honor X9b", None);
    let second = resolve_image("Honor X9b", None);
    assert_eq!(first, "https://img.test/Honor_X9b.jpg");
    assert_eq!(first, second);
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);

    // front ends asking for the shared resolver get the same one and its memo
    let again = images::init(&Default::default());
    assert!(std::ptr::eq(installed, again));
    assert_eq!(again.resolve_url("Honor X9b", None), first);
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);

    // stored URLs bypass the provider entirely
    assert_eq!(resolve_image("Google Pixel 8a", Some("https://cdn.test/8a.png")), "https://cdn.test/8a.png");
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
}
