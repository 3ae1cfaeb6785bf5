//! # snapset
//!
//! A persistent ordered set for Rust with O(1) snapshots, structural
//! sharing, and path-copying updates.
//!
//! ## Overview
//!
//! The centerpiece of this crate is [`PersistentTreeSet`], an ordered set
//! whose copies are cheap: cloning a set duplicates only a constant amount
//! of state, while the underlying tree storage is shared between the
//! original and the copy until one of them is mutated. Mutation never
//! alters nodes visible from another set. Instead it rebuilds only the
//! path from the root to the affected node, reusing every untouched
//! subtree by reference.
//!
//! "Persistent" here means functional, immutable-snapshot semantics, not
//! durability. Nothing is written to disk.
//!
//! ```rust
//! use snapset::persistent::PersistentTreeSet;
//!
//! let original: PersistentTreeSet<i32> = [5, 3, 8].into_iter().collect();
//! let mut snapshot = original.clone(); // O(1), shares the tree
//!
//! snapshot.remove(&3);
//!
//! assert!(original.contains(&3));  // Original unchanged
//! assert!(!snapshot.contains(&3)); // Snapshot diverged
//! ```
//!
//! ## Feature Flags
//!
//! - `arc`: use `std::sync::Arc` instead of `std::rc::Rc` for node
//!   ownership, allowing snapshots that share storage to be sent across
//!   threads
//! - `serde`: serialization support for the set types
//!
//! [`PersistentTreeSet`]: persistent::PersistentTreeSet

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use snapset::prelude::*;
///
/// let set: PersistentTreeSet<i32> = PersistentTreeSet::new();
/// assert!(set.is_empty());
/// ```
pub mod prelude {
    pub use crate::persistent::*;
}

pub mod persistent;
