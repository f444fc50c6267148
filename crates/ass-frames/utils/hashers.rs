//! Hash map construction for name-keyed tables
//!
//! Style tables are keyed by user-controlled names, so they use ahash with a
//! random seed for `DoS` resistance.

use ahash::RandomState;
use std::collections::HashMap;

/// `HashMap` keyed with the crate's default hasher
pub type FastHashMap<K, V> = HashMap<K, V, RandomState>;

/// Create a new `HashMap` with the ahash hasher
///
/// # Example
///
/// ```rust
/// use ass_frames::utils::hashers::create_hash_map;
///
/// let mut map = create_hash_map::<String, i32>();
/// map.insert("key".to_string(), 42);
/// ```
#[must_use]
pub fn create_hash_map<K, V>() -> FastHashMap<K, V> {
    HashMap::with_hasher(RandomState::new())
}

/// Create a new `HashMap` with the ahash hasher and pre-allocated capacity
#[must_use]
pub fn create_hash_map_with_capacity<K, V>(capacity: usize) -> FastHashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, RandomState::new())
}
