//! schooldesk-core: practice tests and the notice board.
//!
//! This crate defines the data model, randomized question generation, the
//! write-through practice-test store, and notice filtering that the rest of
//! schooldesk builds on.

pub mod error;
pub mod generator;
pub mod model;
pub mod notice;
pub mod seed;
pub mod store;
pub mod traits;

pub use error::{StorageError, StoreError};
pub use generator::generate_questions;
pub use notice::{filter_notices, CategoryFilter, Notice, SortBy};
pub use store::{TestStore, PRACTICE_TESTS_KEY};
pub use traits::KeyValueStore;
