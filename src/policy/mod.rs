//! Cache eviction policies.
//!
//! The crate ships a single policy: strict least-recently-used. Recency is a
//! total order maintained as a sequence, so eviction never needs a tie-break.

pub mod lru;
