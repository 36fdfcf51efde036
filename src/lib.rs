//! # kolekt
//!
//! An ordered collection pipeline library for Rust providing
//! chainable, order-preserving transformations over keyed sequences.
//!
//! ## Overview
//!
//! The crate centers on one abstraction,
//! [`Collection`](collection::Collection): an ordered sequence of
//! keyed entries with a composable operation set.
//!
//! - **Construction**: literal values, key/value pairs, iterators, and
//!   the [`collection!`] macro
//! - **Transformation**: `map`, `map_into`, `map_spread`,
//!   `map_to_groups`, `flat_map`, `collapse`
//! - **Filtering**: `filter`, `reject`, `partition`, `contains`
//! - **Windowing**: `slice`, `take`/`skip` and their `while`/`until`
//!   variants, `chunk`
//! - **Ordering & aggregation**: `sort`, `sort_desc`, `sum`, `avg`,
//!   `max`, `min`, `fold`, `reduce`, `group_by`, `join`
//! - **Combination**: `zip`, `concat`, `combine`
//!
//! Every transformation returns a new collection with independent
//! storage; only `push` and `pop` mutate in place. Entry order is
//! explicit and survives every operation that does not document
//! re-keying.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for collections and keys
//! - `fxhash`: faster non-cryptographic hasher for the internal key
//!   index
//!
//! ## Example
//!
//! ```rust
//! use kolekt::prelude::*;
//!
//! let numbers = Collection::from_values([1, 2, 3, 4, 5, 6, 7, 8, 9]);
//!
//! let (evens, odds) = numbers.partition(|value, _| value % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![2, 4, 6, 8]);
//! assert_eq!(odds.sum::<i32>(), 25);
//!
//! let greeting = Collection::from_values(["Daud", "Hidayat", "Ramadhan"]);
//! assert_eq!(greeting.join_with(", ", " and "), "Daud, Hidayat and Ramadhan");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the public surface of the crate.
///
/// # Usage
///
/// ```rust
/// use kolekt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::Collection;
    pub use crate::error::CollectionError;
    pub use crate::key::Key;
    pub use crate::record::Record;
}

pub mod collection;
pub mod error;
pub mod key;
pub mod record;

#[cfg(test)]
mod tests {
    use crate::collection::Collection;

    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        let collection = Collection::from_values([1, 2, 3]);
        assert_eq!(collection.len(), 3);
    }
}
