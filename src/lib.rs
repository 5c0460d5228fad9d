//! A hash map that remembers the order in which keys were first inserted, and iterates in that order.
//!
//!     use ordered_map::OrderedMap;
//!
//!     let mut m = OrderedMap::new();
//!     m.insert("b", 1);
//!     m.insert("a", 2);
//!     m.insert("b", 3); // Replaces the value but doesn't move "b"
//!     assert_eq!(m.keys(), &["b", "a"]);
//!     assert_eq!(m.to_string(), r#""b" : "3", "a" : "2""#);
//!
//! Lookup is through a HashMap, so is O(1) as usual. Removal has to find the key in the order list,
//! so is O(n).
//!
//! There is no locking - wrap in a Mutex (or similar) to share between threads.

mod iter;
mod ordered_map;
#[cfg(feature = "serde")]
mod serde_impl;

pub use iter::{IntoIter, Iter, Values};
pub use ordered_map::OrderedMap;
