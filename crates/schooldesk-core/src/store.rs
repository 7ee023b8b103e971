//! Write-through store for practice tests.
//!
//! The whole collection lives in memory and is serialized to a single key of
//! a [`KeyValueStore`] after every mutation. Storage is read only once, when
//! the store is loaded.

use crate::error::StoreError;
use crate::model::PracticeTest;
use crate::traits::KeyValueStore;

/// Storage key the dashboard uses for the practice-test collection.
pub const PRACTICE_TESTS_KEY: &str = "practiceTests";

/// In-memory practice-test collection mirrored to a key-value backend.
///
/// Mutating methods take `&mut self`; hosts that share a store across
/// threads wrap it in a `Mutex` so each mutation and its write stay atomic.
#[derive(Debug)]
pub struct TestStore<S> {
    storage: S,
    key: String,
    tests: Vec<PracticeTest>,
}

impl<S: KeyValueStore> TestStore<S> {
    /// Load the collection stored under [`PRACTICE_TESTS_KEY`].
    pub fn load(storage: S) -> Result<Self, StoreError> {
        Self::load_with_key(storage, PRACTICE_TESTS_KEY)
    }

    /// Load the collection stored under `key`. An absent key yields an empty
    /// collection; unparsable text is an error.
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Result<Self, StoreError> {
        let key = key.into();
        let tests = match storage.get(&key)? {
            Some(text) => serde_json::from_str::<Vec<PracticeTest>>(&text).map_err(|source| {
                StoreError::Corrupt {
                    key: key.clone(),
                    source,
                }
            })?,
            None => Vec::new(),
        };

        tracing::debug!(
            backend = storage.name(),
            key = %key,
            count = tests.len(),
            "loaded practice tests"
        );

        Ok(Self {
            storage,
            key,
            tests,
        })
    }

    /// The collection in insertion order.
    pub fn tests(&self) -> &[PracticeTest] {
        &self.tests
    }

    /// The storage key this store writes to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append `test` and persist the whole collection.
    ///
    /// Ids are not checked for uniqueness. If persisting fails the append is
    /// undone and the error returned.
    pub fn add_test(&mut self, test: PracticeTest) -> Result<(), StoreError> {
        self.tests.push(test);
        if let Err(e) = self.persist() {
            self.tests.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Replace the first test whose id matches `test.id`, keeping its
    /// position, and persist the whole collection.
    ///
    /// Returns [`StoreError::NotFound`] without touching storage when no test
    /// has that id. If persisting fails the previous value is restored.
    pub fn update_test(&mut self, test: PracticeTest) -> Result<(), StoreError> {
        let index = self
            .tests
            .iter()
            .position(|t| t.id == test.id)
            .ok_or_else(|| StoreError::NotFound(test.id.clone()))?;

        let previous = std::mem::replace(&mut self.tests[index], test);
        if let Err(e) = self.persist() {
            self.tests[index] = previous;
            return Err(e);
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        let text = serde_json::to_string(&self.tests).map_err(StoreError::Serialize)?;
        self.storage.set(&self.key, &text)?;
        tracing::debug!(
            backend = self.storage.name(),
            key = %self.key,
            count = self.tests.len(),
            "persisted practice tests"
        );
        Ok(())
    }
}
