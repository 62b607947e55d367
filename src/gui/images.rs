// src/gui/images.rs
//
// Card image slots. Lookups run on a worker thread so the UI never waits on
// the network; each finished row triggers a repaint. Slots are keyed by
// dataset position, which is stable across searches, so a row resolved once
// is never requested again.

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    thread,
};

use eframe::egui;

use crate::{
    filter::ResultSet,
    images::{ImageResolver, Resolved},
};

type Slots = Arc<Mutex<HashMap<usize, Resolved>>>;

fn lock(slots: &Slots) -> MutexGuard<'_, HashMap<usize, Resolved>> {
    slots.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct CardImages {
    resolver: &'static ImageResolver,
    slots: Slots,
    requested: HashSet<usize>,
}

impl CardImages {
    pub fn new(resolver: &'static ImageResolver) -> Self {
        Self {
            resolver,
            slots: Arc::new(Mutex::new(HashMap::new())),
            requested: HashSet::new(),
        }
    }

    /// Queue every row of `results` that hasn't been asked for yet.
    pub fn request(&mut self, results: &ResultSet<'_>, ctx: &egui::Context) {
        let mut jobs: Vec<(usize, String)> = Vec::new();

        for (ix, phone) in results.iter_indexed() {
            if !self.requested.insert(ix) { continue; }
            match phone.image_url.as_deref() {
                // stored URL: no lookup, fill the slot now
                Some(url) => {
                    let r = self.resolver.resolve(&phone.display_name(), Some(url));
                    lock(&self.slots).insert(ix, r);
                }
                None => jobs.push((ix, phone.display_name())),
            }
        }

        if jobs.is_empty() { return; }
        logd!("Images: queued {} lookup(s)", jobs.len());

        let resolver = self.resolver;
        let slots = Arc::clone(&self.slots);
        let ctx = ctx.clone();

        thread::spawn(move || {
            for (ix, name) in jobs {
                let r = resolver.resolve(&name, None);
                lock(&slots).insert(ix, r);
                ctx.request_repaint();
            }
        });
    }

    /// Resolved image for a dataset row, if ready.
    pub fn get(&self, ix: usize) -> Option<Resolved> {
        lock(&self.slots).get(&ix).cloned()
    }

    /// Lookup warnings for the rows currently shown.
    pub fn warnings(&self, results: &ResultSet<'_>) -> Vec<String> {
        let slots = lock(&self.slots);
        results
            .indices()
            .iter()
            .filter_map(|ix| slots.get(ix).and_then(|r| r.warning.clone()))
            .collect()
    }

    pub fn pending(&self, results: &ResultSet<'_>) -> usize {
        let slots = lock(&self.slots);
        results.indices().iter().filter(|ix| !slots.contains_key(ix)).count()
    }
}
