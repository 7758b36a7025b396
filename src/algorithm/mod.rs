/// Candidate tile sets backed by a fixed-width bitset
pub mod domain;
/// Generation loop with staged progress reporting
pub mod executor;
/// Neighbor restriction after a collapse
pub mod propagation;
/// Injectable random sources for reproducible collapse
pub mod random;
/// Lowest entropy cell selection
pub mod selection;
