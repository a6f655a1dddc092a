// ChainedHashMap unit test suite (public API).
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Capacity: fixed at construction, must be >= 1, never changes.
// - Uniqueness: at most one entry per key; set on a present key updates
//   in place without growing the map.
// - Determinism: a key always resolves to the same bucket, so colliding
//   keys stay independently retrievable through their shared chain.
// - Absence: get of a never-set key is None, distinguishable from every
//   stored value.
use chained_hashmap::{ChainedHashMap, ZeroCapacity};

// Test: capacity validation at construction.
// Assumes: a zero-bucket map could never place a key.
// Verifies: ZeroCapacity error, and no usable map value on the error path.
#[test]
fn zero_capacity_rejected() {
    let result = ChainedHashMap::<f64>::with_capacity(0);
    assert!(matches!(result, Err(ZeroCapacity)));
}

// Test: successful construction.
// Assumes: buckets start empty; size counts entries, not buckets.
// Verifies: len 0, is_empty, and the requested capacity, for several sizes.
#[test]
fn fresh_map_is_empty_at_requested_capacity() {
    for capacity in [1, 2, 64, 1021] {
        let m = ChainedHashMap::<f64>::with_capacity(capacity).unwrap();
        assert_eq!(m.capacity(), capacity);
        assert_eq!(m.len(), 0);
        assert!(m.is_empty());
    }
}

// Test: write-then-read round trip.
// Assumes: get returns a reference to the stored value.
// Verifies: the concrete capacity-2 scenario: one set, hit on the set
// key, miss on an absent key.
#[test]
fn set_then_get_round_trips() {
    let mut m = ChainedHashMap::with_capacity(2).unwrap();
    m.set("test", 5.0);

    assert_eq!(m.get("test"), Some(&5.0));
    assert_eq!(m.get("missing"), None);
    assert_eq!(m.len(), 1);
}

// Test: duplicate-key set updates in place.
// Assumes: keys are unique across the whole map.
// Verifies: the second value wins and len does not grow.
#[test]
fn set_on_present_key_overwrites_without_growing() {
    let mut m = ChainedHashMap::with_capacity(4).unwrap();
    m.set("k", 1.0);
    m.set("k", 2.0);

    assert_eq!(m.get("k"), Some(&2.0));
    assert_eq!(m.len(), 1);
}

// Test: collision behavior.
// Assumes: capacity 1 forces every key into the same bucket's chain.
// Verifies: both keys remain independently retrievable and len counts
// both, including updates to a chained (non-head) entry.
#[test]
fn colliding_keys_remain_retrievable() {
    let mut m = ChainedHashMap::with_capacity(1).unwrap();
    m.set("test", 5.0);
    m.set("test2", 12.0);

    assert_eq!(m.get("test"), Some(&5.0));
    assert_eq!(m.get("test2"), Some(&12.0));
    assert_eq!(m.len(), 2);

    // Update deep in the chain, then re-read both.
    m.set("test2", 13.5);
    assert_eq!(m.get("test"), Some(&5.0));
    assert_eq!(m.get("test2"), Some(&13.5));
    assert_eq!(m.len(), 2);
}

// Test: size accounting under heavy collision.
// Assumes: len counts distinct keys regardless of bucket distribution.
// Verifies: N distinct keys give len N at capacity 1 and at a capacity
// larger than N.
#[test]
fn len_counts_distinct_keys_regardless_of_collisions() {
    for capacity in [1, 64] {
        let mut m = ChainedHashMap::with_capacity(capacity).unwrap();
        for i in 0..32 {
            m.set(&format!("key{i}"), f64::from(i));
        }
        assert_eq!(m.len(), 32);
        for i in 0..32 {
            assert_eq!(m.get(&format!("key{i}")), Some(&f64::from(i)));
        }
    }
}

// Test: misses on a populated map.
// Assumes: absence is signaled out of band, never via a reserved value.
// Verifies: keys sharing a bucket with stored entries still miss cleanly.
#[test]
fn get_misses_do_not_alias_stored_values() {
    let mut m = ChainedHashMap::with_capacity(1).unwrap();
    m.set("present", -1.0); // a value a sentinel scheme would reserve
    assert_eq!(m.get("present"), Some(&-1.0));
    assert_eq!(m.get("absent"), None);
}

// Test: non-Copy values.
// Assumes: the map is generic over the value type with no conversions.
// Verifies: owned values round-trip and update in place.
#[test]
fn string_values_round_trip() {
    let mut m = ChainedHashMap::with_capacity(8).unwrap();
    m.set("greeting", "hello".to_string());
    m.set("greeting", "world".to_string());
    assert_eq!(m.get("greeting").map(String::as_str), Some("world"));
    assert_eq!(m.len(), 1);
}
