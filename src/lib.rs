//! chained-hashmap: a fixed-capacity, string-keyed hash map with
//! per-bucket collision chains, plus two companion exercise structures
//! (a singly linked list and a reduced rational type).
//!
//! Internal Design:
//!
//! Summary
//! - Goal: make each structure's ownership story explicit and safe, with
//!   no raw pointers and no sentinel-value error signaling anywhere.
//! - Layers of the map:
//!   - hash::Djb2: the fixed polynomial string hash (seed 5381,
//!     `state*33 + byte`), implemented as a `core::hash::Hasher` over
//!     raw key bytes.
//!   - ChainedHashMap<V>: a bucket array sized once at construction,
//!     each slot holding the head of a singly linked chain; entries live
//!     in a `slotmap` arena and chains link entries by slot key.
//!
//! Constraints
//! - Capacity is fixed for the map's lifetime and must be at least 1;
//!   construction rejects 0. There is no resize and no load-factor
//!   policy.
//! - Keys are unique: `set` on a present key overwrites in place, so the
//!   entry count equals the number of distinct keys ever set.
//! - No delete and no map iteration; the contract is exactly create,
//!   set, get (plus size/capacity observers).
//! - Single-threaded: operations take `&self`/`&mut self` and callers
//!   serialize shared use the way they would for any owned value.
//!
//! Error signaling
//! - Absence is `Option` (`get`, `pop_back`, positional `get`), never a
//!   reserved value, and never a shared error flag; each call returns
//!   its own outcome.
//! - Invalid construction inputs are dedicated error types
//!   (`ZeroCapacity`, `ZeroDenominator`).
//!
//! Why a slot arena for the chains?
//! - Buckets and `next` links hold copyable slot keys instead of owned
//!   boxes, so walking a chain never contends with mutating it in the
//!   borrow checker, and entry storage stays contiguous.
//! - With no removal in the contract, every minted key stays live for
//!   the map's lifetime; chain links can never dangle.
//!
//! Companions
//! - linked_list::LinkedList<T>: owned-link singly linked list with tail
//!   append/pop, positional access, and non-destructive concat.
//! - rational::Rational: always-reduced, sign-normalized `i32` fraction
//!   with value equality.

pub mod chained_hash_map;
pub mod hash;
pub mod linked_list;
pub mod rational;

// Public surface
pub use chained_hash_map::{ChainedHashMap, ZeroCapacity};
pub use hash::Djb2;
pub use linked_list::LinkedList;
pub use rational::{Rational, ZeroDenominator};
