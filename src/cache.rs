//! Era caption caching.
//!
//! Year choosers format the same small window of years on every rebuild,
//! so captions are kept in a process-wide LRU keyed by year and format.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::formatter::era_year_label;
use crate::options::EraFormat;

/// Global cache for era year captions.
static CACHE: Mutex<Option<LruCache<(i32, EraFormat), String>>> = Mutex::new(None);

const CACHE_SIZE: usize = 256;

/// Get an era caption for a year, using the cache.
pub fn era_caption(year: i32, format: EraFormat) -> String {
    let mut cache_guard = CACHE.lock().unwrap();

    let cache = cache_guard.get_or_insert_with(|| {
        LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap())
    });

    if let Some(caption) = cache.get(&(year, format)) {
        return caption.clone();
    }

    let caption = era_year_label(year, format);
    cache.put((year, format), caption.clone());
    caption
}
