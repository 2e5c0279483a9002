//! Cache state machine tests.

/// End-to-end scenarios with known final statistics.
pub mod scenarios;


/// LRU victim selection and recency.
pub mod lru;
