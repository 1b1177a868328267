//! Compiled-pattern cache
//!
//! Patterns are pure functions of their source string, so entries never need
//! invalidation. Lookups take a read lock; only a miss takes the write lock.
//! Failed compilations are not stored.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

use super::compiler::Pattern;
use super::error::PatternSyntaxError;

static GLOBAL: Lazy<PatternCache> = Lazy::new(PatternCache::new);

#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: RwLock<HashMap<String, Arc<Pattern>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [crate::chunk].
    pub fn global() -> &'static PatternCache {
        &GLOBAL
    }

    pub fn get_or_compile(&self, source: &str) -> Result<Arc<Pattern>, PatternSyntaxError> {
        {
            let patterns = self.patterns.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(pattern) = patterns.get(source) {
                trace!(pattern = source, "pattern cache hit");
                return Ok(Arc::clone(pattern));
            }
        }

        let compiled = Arc::new(Pattern::compile(source)?);
        let mut patterns = self.patterns.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have compiled the same source meanwhile; keep the first.
        let entry = patterns
            .entry(source.to_string())
            .or_insert_with(|| Arc::clone(&compiled));
        Ok(Arc::clone(entry))
    }

    pub fn len(&self) -> usize {
        self.patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.patterns
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_reuses_compiled_pattern() {
        let cache = PatternCache::new();
        let first = cache.get_or_compile("ADJ+ NOUN").unwrap();
        let second = cache.get_or_compile("ADJ+ NOUN").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = PatternCache::new();
        assert!(cache.get_or_compile("AD[J").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = PatternCache::new();
        cache.get_or_compile("NOUN").unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_lookups_share_one_entry() {
        let cache = Arc::new(PatternCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_compile("DET|PRON NOUN+").unwrap())
            })
            .collect();
        let patterns: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(cache.len(), 1);
        assert!(patterns.iter().all(|p| p.source() == "DET|PRON NOUN+"));
    }
}
