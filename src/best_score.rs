//! Best score tracking
//!
//! A single integer persisted under one store key. Malformed stored values
//! read as 0; a failed write keeps the in-memory value and logs a warning.

use crate::persistence::KeyValueStore;

/// Highest score ever achieved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScore {
    value: u32,
}

impl BestScore {
    /// Store key holding the best score
    pub const STORAGE_KEY: &'static str = "flappyBestScore";

    pub fn new() -> Self {
        Self { value: 0 }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Read the best score from a store (absent or malformed = 0)
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(raw) = store.get(Self::STORAGE_KEY) else {
            log::info!("No best score found, starting fresh");
            return Self::new();
        };

        match raw.trim().parse::<u32>() {
            Ok(value) => {
                log::info!("Loaded best score {}", value);
                Self { value }
            }
            Err(_) => {
                log::warn!("Ignoring malformed best score {:?}", raw);
                Self::new()
            }
        }
    }

    /// Record a finished (or finishing) session's score
    ///
    /// Returns true if `score` is a new best. Calling this repeatedly with the
    /// same score only writes once.
    pub fn record(&mut self, score: u32, store: &mut impl KeyValueStore) -> bool {
        if score <= self.value {
            return false;
        }

        self.value = score;
        match store.set(Self::STORAGE_KEY, &score.to_string()) {
            Ok(()) => log::info!("New best score {} saved", score),
            Err(e) => log::warn!("New best score {} not saved: {}", score, e),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::persistence::MemoryStore;

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Rejected {
                key: key.to_string(),
            })
        }
    }

    #[test]
    fn test_load_missing_is_zero() {
        let store = MemoryStore::new();
        assert_eq!(BestScore::load(&store).value(), 0);
    }

    #[test]
    fn test_load_valid_value() {
        let store = MemoryStore::with_entry(BestScore::STORAGE_KEY, "42");
        assert_eq!(BestScore::load(&store).value(), 42);
    }

    #[test]
    fn test_load_malformed_is_zero() {
        for raw in ["", "abc", "-3", "4.5", "99999999999999"] {
            let store = MemoryStore::with_entry(BestScore::STORAGE_KEY, raw);
            assert_eq!(BestScore::load(&store).value(), 0, "raw = {:?}", raw);
        }
    }

    #[test]
    fn test_record_only_on_improvement() {
        let mut store = MemoryStore::new();
        let mut best = BestScore::new();

        assert!(best.record(5, &mut store));
        assert_eq!(store.get(BestScore::STORAGE_KEY).as_deref(), Some("5"));

        // Lower and equal scores are ignored
        assert!(!best.record(3, &mut store));
        assert!(!best.record(5, &mut store));
        assert_eq!(best.value(), 5);
        assert_eq!(store.get(BestScore::STORAGE_KEY).as_deref(), Some("5"));
    }

    #[test]
    fn test_record_zero_never_persists() {
        let mut store = MemoryStore::new();
        let mut best = BestScore::new();
        assert!(!best.record(0, &mut store));
        assert_eq!(store.get(BestScore::STORAGE_KEY), None);
    }

    #[test]
    fn test_failed_write_keeps_value_in_memory() {
        let mut store = ReadOnlyStore;
        let mut best = BestScore::new();
        assert!(best.record(7, &mut store));
        assert_eq!(best.value(), 7);
    }
}
