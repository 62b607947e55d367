// src/images/mod.rs
//! # Card image resolution
//!
//! Every result card needs an image URL. A row that stores one uses it as-is;
//! otherwise the display name is sent to an image-search provider and the top
//! hit is used. Any failure falls back to a fixed placeholder and is reported
//! as a warning, never as an error.
//!
//! Outcomes are memoized per display name for the life of the resolver, so a
//! name costs at most one lookup per process. The cache lock is never held
//! across a lookup.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, OnceLock, PoisonError},
};

use thiserror::Error;

pub mod duckduckgo;

pub use duckduckgo::DuckDuckGo;

use crate::config::options::ImageOptions;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One image-search hit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageHit {
    pub image: String,
}

/// An external image-search provider.
pub trait ImageSearch: Send + Sync {
    fn name(&self) -> &'static str;

    /// Up to `max_results` hits for `query`, best first.
    fn search(&self, query: &str, max_results: usize) -> Result<Vec<ImageHit>, SearchError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageOrigin {
    /// URL stored in the dataset row
    Stored,
    /// Top hit from the provider
    Lookup,
    Placeholder,
}

/// A usable image URL plus how it was obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub url: String,
    pub origin: ImageOrigin,
    /// Set when a lookup failed and the placeholder stands in.
    pub warning: Option<String>,
}

pub struct ImageResolver {
    provider: Option<Box<dyn ImageSearch>>,
    placeholder: String,
    cache: Mutex<HashMap<String, Resolved>>,
}

impl ImageResolver {
    pub fn new(provider: Option<Box<dyn ImageSearch>>, placeholder: impl Into<String>) -> Self {
        Self {
            provider,
            placeholder: placeholder.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Production resolver for the given options (DuckDuckGo unless lookups are off).
    pub fn from_options(opts: &ImageOptions) -> Self {
        let provider: Option<Box<dyn ImageSearch>> = if opts.lookup_enabled {
            match DuckDuckGo::new(opts.timeout_secs) {
                Ok(ddg) => Some(Box::new(ddg)),
                Err(e) => {
                    logw!("Images: provider unavailable, using placeholders ({e})");
                    None
                }
            }
        } else {
            None
        };
        Self::new(provider, opts.placeholder_url.clone())
    }

    fn cache(&self) -> MutexGuard<'_, HashMap<String, Resolved>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Image URL for a card: the stored URL if there is one, else a lookup.
    pub fn resolve(&self, display_name: &str, stored_url: Option<&str>) -> Resolved {
        if let Some(url) = stored_url.filter(|u| !u.trim().is_empty()) {
            return Resolved { url: s!(url), origin: ImageOrigin::Stored, warning: None };
        }

        if let Some(hit) = self.cache().get(display_name) {
            return hit.clone();
        }

        let outcome = self.lookup(display_name);
        self.cache()
            .entry(s!(display_name))
            .or_insert(outcome)
            .clone()
    }

    /// Shorthand for callers that only need the URL.
    pub fn resolve_url(&self, display_name: &str, stored_url: Option<&str>) -> String {
        self.resolve(display_name, stored_url).url
    }

    fn lookup(&self, display_name: &str) -> Resolved {
        let Some(provider) = self.provider.as_deref() else {
            return self.fallback(None);
        };

        match provider.search(display_name, 1) {
            Ok(hits) => match hits.into_iter().next() {
                Some(hit) => {
                    logd!("Images: {} hit for {:?} → {}", provider.name(), display_name, hit.image);
                    Resolved { url: hit.image, origin: ImageOrigin::Lookup, warning: None }
                }
                None => self.fallback(Some(format!(
                    "Could not fetch image for {display_name}. No results."
                ))),
            },
            Err(e) => self.fallback(Some(format!(
                "Could not fetch image for {display_name}. Error: {e}"
            ))),
        }
    }

    fn fallback(&self, warning: Option<String>) -> Resolved {
        if let Some(w) = &warning {
            logw!("Images: {w}");
        }
        Resolved { url: self.placeholder.clone(), origin: ImageOrigin::Placeholder, warning }
    }
}

static RESOLVER: OnceLock<ImageResolver> = OnceLock::new();

/// The process-wide resolver. Later calls return the first one regardless of
/// `opts`, so every front end shares one memo.
pub fn init(opts: &ImageOptions) -> &'static ImageResolver {
    RESOLVER.get_or_init(|| ImageResolver::from_options(opts))
}

/// Install a specific resolver as the process-wide one, unless one exists.
pub fn init_with(resolver: ImageResolver) -> &'static ImageResolver {
    RESOLVER.get_or_init(|| resolver)
}

/// Resolve through the process-wide resolver (default settings if none yet).
pub fn resolve_image(display_name: &str, cached_url: Option<&str>) -> String {
    init(&ImageOptions::default()).resolve_url(display_name, cached_url)
}
