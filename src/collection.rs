//! Ordered collection with chainable pipeline operations.
//!
//! This module provides [`Collection`], an ordered sequence of keyed
//! entries supporting composable functional transformations: mapping,
//! filtering, grouping, partitioning, windowing, aggregation, and
//! set-like combination.
//!
//! # Overview
//!
//! A `Collection<T>` holds `(Key, T)` entries with unique keys.
//! Entries keep their insertion order: list-like collections are keyed
//! by sequential positional indexes, map-like collections by the order
//! their names were first introduced. Every transformation returns a
//! new collection with independent storage; only
//! [`push`](Collection::push) and [`pop`](Collection::pop) mutate the
//! receiver.
//!
//! Order always comes from the entry sequence itself. An auxiliary
//! hash index exists purely for duplicate-key detection and keyed
//! lookup, never for iteration.
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity   |
//! |----------------------------|--------------|
//! | `new`                      | O(1)         |
//! | `len` / `is_empty`         | O(1)         |
//! | `get` / `contains` by key  | O(1)         |
//! | `push`                     | O(1)*        |
//! | `pop`                      | O(n)         |
//! | `first` / `last`           | O(1)         |
//! | transformations            | O(n)         |
//! | `sort` / `sort_desc`       | O(n log n)   |
//!
//! \* amortized; `pop` is O(n) because it re-derives the next
//! positional key from the remaining entries.
//!
//! # Examples
//!
//! ```rust
//! use kolekt::collection::Collection;
//!
//! let numbers = Collection::from_values([1, 2, 3, 4, 5, 6, 7, 8, 9]);
//!
//! let even_doubles = numbers
//!     .filter(|value, _| value % 2 == 0)
//!     .map(|value| value * 2);
//! assert_eq!(even_doubles.to_vec(), vec![4, 8, 12, 16]);
//!
//! assert_eq!(numbers.sum::<i32>(), 45);
//! assert_eq!(numbers.take(3).to_vec(), vec![1, 2, 3]);
//! ```
//!
//! Map-like collections keep explicit keys through every operation:
//!
//! ```rust
//! use kolekt::collection;
//!
//! let scores = collection! { "daud" => 100, "bintang" => 80, "siraj" => 90 };
//! let passing = scores.filter(|value, _| *value >= 90);
//!
//! assert_eq!(passing.get("daud"), Some(&100));
//! assert_eq!(passing.get("bintang"), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, Sum};
use std::ops::{Bound, RangeBounds};

use rand::seq::SliceRandom;
use smallvec::SmallVec;

use crate::error::CollectionError;
use crate::key::Key;
use crate::record::Record;

// =============================================================================
// Key Index
// =============================================================================

/// Hash index from key to entry position.
///
/// With the `fxhash` feature enabled this is `rustc_hash::FxHashMap`,
/// a faster non-cryptographic hasher. The default is the standard
/// library map with its DoS-resistant hasher.
#[cfg(feature = "fxhash")]
type KeyIndex = rustc_hash::FxHashMap<Key, usize>;

#[cfg(not(feature = "fxhash"))]
type KeyIndex = std::collections::HashMap<Key, usize>;

// =============================================================================
// Collection Definition
// =============================================================================

/// An ordered sequence of keyed entries with a pipeline operation set.
///
/// Entries are `(Key, T)` pairs with unique keys. Inserting a
/// duplicate key overwrites the value at the entry's original
/// position. Iteration always yields entries in the current internal
/// order.
///
/// All transformations take `&self` and build a new collection with
/// fresh storage; [`push`](Collection::push) and
/// [`pop`](Collection::pop) are the only in-place mutations. The type
/// is a plain single-threaded value: it is `Send`/`Sync` when `T` is,
/// but provides no internal synchronization.
///
/// # Examples
///
/// ```rust
/// use kolekt::collection::Collection;
///
/// let names = Collection::from_values(["Daud", "Hidayat", "Ramadhan"]);
/// assert_eq!(names.join("-"), "Daud-Hidayat-Ramadhan");
/// assert_eq!(names.join_with("-", "_"), "Daud-Hidayat_Ramadhan");
/// ```
#[derive(Clone)]
pub struct Collection<T> {
    /// Entries in iteration order. The single order authority.
    entries: Vec<(Key, T)>,
    /// Key to position in `entries`. Invariant: maps every key of
    /// `entries` to its index there, and nothing else.
    index: KeyIndex,
    /// Next positional key to assign: one past the largest
    /// `Key::Index` currently present.
    next_index: u64,
}

// =============================================================================
// Construction & Access
// =============================================================================

impl<T> Collection<T> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection: Collection<i32> = Collection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: KeyIndex::default(),
            next_index: 0,
        }
    }

    /// Builds a list-like collection from a sequence of values.
    ///
    /// Values receive sequential positional keys starting at `0`, in
    /// input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection = Collection::from_values([1, 2, 3]);
    /// assert_eq!(collection.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut collection = Self::new();
        collection.push_many(values);
        collection
    }

    /// Builds a map-like collection from a sequence of key/value
    /// pairs.
    ///
    /// Keys appear in the order they are first introduced. A duplicate
    /// key overwrites the earlier value while the entry keeps its
    /// original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let scores = Collection::from_pairs([("daud", 100), ("siraj", 90), ("daud", 95)]);
    /// assert_eq!(scores.len(), 2);
    /// assert_eq!(scores.get("daud"), Some(&95));
    /// assert_eq!(scores.to_vec(), vec![95, 90]);
    /// ```
    #[must_use]
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut collection = Self::new();
        for (key, value) in pairs {
            collection.insert_pair(key.into(), value);
        }
        collection
    }

    /// Rebuilds a collection around an entry sequence whose keys are
    /// already unique.
    fn from_entries(entries: Vec<(Key, T)>) -> Self {
        let mut index = KeyIndex::default();
        let mut next_index = 0;
        for (position, (key, _)) in entries.iter().enumerate() {
            index.insert(key.clone(), position);
            if let Key::Index(value) = key {
                next_index = next_index.max(value + 1);
            }
        }
        Self {
            entries,
            index,
            next_index,
        }
    }

    /// Inserts one pair, overwriting in place on a duplicate key.
    fn insert_pair(&mut self, key: Key, value: T) {
        if let Some(&position) = self.index.get(&key) {
            if let Some(entry) = self.entries.get_mut(position) {
                entry.1 = value;
            }
        } else {
            if let Key::Index(index) = key {
                self.next_index = self.next_index.max(index + 1);
            }
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    /// Returns the number of entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection = Collection::from_values([1, 2, 3]);
    /// assert_eq!(collection.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection has no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection: Collection<i32> = Collection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the collection has at least one entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection = Collection::from_values([1]);
    /// assert!(collection.is_not_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Complexity
    ///
    /// O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let scores = Collection::from_pairs([("daud", 100), ("siraj", 90)]);
    /// assert_eq!(scores.get("siraj"), Some(&90));
    /// assert_eq!(scores.get("bintang"), None);
    ///
    /// let numbers = Collection::from_values(["a", "b"]);
    /// assert_eq!(numbers.get(1_usize), Some(&"b"));
    /// ```
    #[must_use]
    pub fn get(&self, key: impl Into<Key>) -> Option<&T> {
        let key = key.into();
        self.index
            .get(&key)
            .and_then(|&position| self.entries.get(position))
            .map(|(_, value)| value)
    }

    /// Returns the entry at `position` in current order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    /// use kolekt::key::Key;
    ///
    /// let scores = Collection::from_pairs([("daud", 100), ("siraj", 90)]);
    /// assert_eq!(scores.get_index(0), Some((&Key::from("daud"), &100)));
    /// assert_eq!(scores.get_index(2), None);
    /// ```
    #[must_use]
    pub fn get_index(&self, position: usize) -> Option<(&Key, &T)> {
        self.entries.get(position).map(|(key, value)| (key, value))
    }

    /// Returns the first value in order.
    ///
    /// Returns [`None`] on an empty collection; absence is not an
    /// error on the lookup surface.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection = Collection::from_values([1, 2, 3]);
    /// assert_eq!(collection.first(), Some(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.entries.first().map(|(_, value)| value)
    }

    /// Returns the first value in order satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection = Collection::from_values([1, 2, 3, 4, 5]);
    /// assert_eq!(collection.first_where(|value| *value > 3), Some(&4));
    /// assert_eq!(collection.first_where(|value| *value > 9), None);
    /// ```
    #[must_use]
    pub fn first_where<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.entries
            .iter()
            .map(|(_, value)| value)
            .find(|&value| predicate(value))
    }

    /// Returns the last value in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection = Collection::from_values([1, 2, 3]);
    /// assert_eq!(collection.last(), Some(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.entries.last().map(|(_, value)| value)
    }

    /// Returns the last value in order satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection = Collection::from_values([1, 2, 3, 4, 5]);
    /// assert_eq!(collection.last_where(|value| *value < 3), Some(&2));
    /// ```
    #[must_use]
    pub fn last_where<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.entries
            .iter()
            .rev()
            .map(|(_, value)| value)
            .find(|&value| predicate(value))
    }

    /// Returns a uniformly selected value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no
    /// entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection = Collection::from_values([1, 2, 3, 4, 5]);
    /// let picked = collection.random().unwrap();
    /// assert!(collection.contains(picked));
    /// ```
    pub fn random(&self) -> Result<&T, CollectionError> {
        self.entries
            .choose(&mut rand::thread_rng())
            .map(|(_, value)| value)
            .ok_or(CollectionError::Empty)
    }

    /// Appends a value in place under the next positional key.
    ///
    /// The key continues one past the largest positional key currently
    /// present, so pushing onto a map-like collection still assigns
    /// positional keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let mut collection = Collection::new();
    /// collection.push(1);
    /// collection.push(2);
    /// assert_eq!(collection.to_vec(), vec![1, 2]);
    /// ```
    pub fn push(&mut self, value: T) {
        let key = Key::Index(self.next_index);
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        self.next_index += 1;
    }

    /// Appends every value of a sequence in place, assigning
    /// sequential positional keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let mut collection = Collection::new();
    /// collection.push_many([1, 2, 3]);
    /// assert_eq!(collection.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn push_many<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.push(value);
        }
    }

    /// Removes and returns the last entry's value.
    ///
    /// The next positional key is re-derived from the remaining
    /// entries, so a push following a pop reuses the vacated position.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no
    /// entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let mut collection = Collection::from_values([1, 2, 3]);
    /// assert_eq!(collection.pop(), Ok(3));
    /// assert_eq!(collection.to_vec(), vec![1, 2]);
    /// ```
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        let (key, value) = self.entries.pop().ok_or(CollectionError::Empty)?;
        self.index.remove(&key);
        if key.is_index() {
            self.next_index = self
                .entries
                .iter()
                .filter_map(|(key, _)| key.as_index().map(|index| index + 1))
                .max()
                .unwrap_or(0);
        }
        Ok(value)
    }

    /// Returns an iterator over `(key, value)` entries in current
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection = Collection::from_values([10, 20]);
    /// let mut entries = collection.iter();
    /// let (key, value) = entries.next().unwrap();
    /// assert_eq!((key.as_index(), value), (Some(0), &10));
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> CollectionIterator<'_, T> {
        CollectionIterator {
            entries: self.entries.iter(),
        }
    }

    /// Returns an iterator over the keys in current order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    /// use kolekt::key::Key;
    ///
    /// let scores = Collection::from_pairs([("daud", 100), ("siraj", 90)]);
    /// let keys: Vec<&Key> = scores.keys().collect();
    /// assert_eq!(keys, vec![&Key::from("daud"), &Key::from("siraj")]);
    /// ```
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in current order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection = Collection::from_values([1, 2, 3]);
    /// assert_eq!(collection.values().sum::<i32>(), 6);
    /// ```
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Tests whether any entry satisfies `predicate`, short-circuiting
    /// on the first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection = Collection::from_values([1, 2, 3]);
    /// assert!(collection.contains_where(|value, _| *value > 2));
    /// assert!(!collection.contains_where(|value, _| *value > 9));
    /// ```
    pub fn contains_where<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T, &Key) -> bool,
    {
        self.entries.iter().any(|(key, value)| predicate(value, key))
    }

    /// Folds the values left to right from an explicit initial
    /// accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection = Collection::from_values([1, 2, 3]);
    /// let total = collection.fold(10, |accumulator, value| accumulator + value);
    /// assert_eq!(total, 16);
    /// ```
    pub fn fold<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        let mut accumulator = initial;
        for (_, value) in &self.entries {
            accumulator = function(accumulator, value);
        }
        accumulator
    }
}

// =============================================================================
// Equality-based Lookup
// =============================================================================

impl<T: PartialEq> Collection<T> {
    /// Tests whether any entry equals `value`, short-circuiting on the
    /// first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let names = Collection::from_values(["daud", "hidayat"]);
    /// assert!(names.contains(&"daud"));
    /// assert!(!names.contains(&"siraj"));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.values().any(|candidate| candidate == value)
    }
}

// =============================================================================
// Element-wise Transformation
// =============================================================================

impl<T: Clone> Collection<T> {
    /// Materializes the values as a `Vec` in current order.
    ///
    /// This is the canonical observation of a list-like collection:
    /// exactly the present values in the present order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection = Collection::from_values([1, 2, 3]);
    /// assert_eq!(collection.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.values().cloned().collect()
    }

    /// Materializes the entries as `(Key, T)` pairs in current order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    /// use kolekt::key::Key;
    ///
    /// let scores = Collection::from_pairs([("daud", 100)]);
    /// assert_eq!(scores.to_pairs(), vec![(Key::from("daud"), 100)]);
    /// ```
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(Key, T)> {
        self.entries.clone()
    }

    /// Applies a transform to every value, keeping keys and order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let collection = Collection::from_values([1, 2, 3]);
    /// let doubled = collection.map(|value| value * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, mut transform: F) -> Collection<U>
    where
        F: FnMut(&T) -> U,
    {
        let entries = self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), transform(value)))
            .collect();
        Collection::from_entries(entries)
    }

    /// Converts every value into `U` through its `From` conversion,
    /// keeping keys and order.
    ///
    /// The single-argument construction capability is the standard
    /// [`From`] trait, so the target type is checked at compile time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Person {
    ///     name: String,
    /// }
    ///
    /// impl From<String> for Person {
    ///     fn from(name: String) -> Self {
    ///         Self { name }
    ///     }
    /// }
    ///
    /// let names = Collection::from_values(["daud".to_string()]);
    /// let people = names.map_into::<Person>();
    /// assert_eq!(people.first(), Some(&Person { name: "daud".to_string() }));
    /// ```
    #[must_use]
    pub fn map_into<U>(&self) -> Collection<U>
    where
        U: From<T>,
    {
        self.map(|value| U::from(value.clone()))
    }

    /// Applies a transform to every value with the value's elements
    /// spread into fixed-arity positional arguments.
    ///
    /// Every value must be a sequence of exactly `N` elements; the
    /// transform receives them as an `N`-element array, so the arity
    /// is part of the call's type. Keys and order are kept.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ShapeMismatch`] if a value expands
    /// to a different number of elements than the transform accepts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let names = Collection::from_values([
    ///     ["Daud", "Hidayat"],
    ///     ["Bintang", "Rahmatullah"],
    /// ]);
    /// let full_names = names
    ///     .map_spread(|[first, last]: [&str; 2]| format!("{first} {last}"))
    ///     .unwrap();
    /// assert_eq!(
    ///     full_names.to_vec(),
    ///     vec!["Daud Hidayat".to_string(), "Bintang Rahmatullah".to_string()],
    /// );
    /// ```
    ///
    /// A value with the wrong element count fails:
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    /// use kolekt::error::CollectionError;
    ///
    /// let rows = Collection::from_values([vec![1, 2, 3]]);
    /// let result = rows.map_spread(|[left, right]: [i32; 2]| left + right);
    /// assert_eq!(
    ///     result,
    ///     Err(CollectionError::ShapeMismatch { expected: 2, actual: 3 }),
    /// );
    /// ```
    pub fn map_spread<const N: usize, U, F>(
        &self,
        mut transform: F,
    ) -> Result<Collection<U>, CollectionError>
    where
        T: IntoIterator,
        F: FnMut([T::Item; N]) -> U,
    {
        let mut entries = Vec::with_capacity(self.len());
        for (key, value) in &self.entries {
            let buffer: SmallVec<[T::Item; N]> = value.clone().into_iter().collect();
            match buffer.into_inner() {
                Ok(arguments) => entries.push((key.clone(), transform(arguments))),
                Err(buffer) => {
                    return Err(CollectionError::ShapeMismatch {
                        expected: N,
                        actual: buffer.len(),
                    });
                }
            }
        }
        Ok(Collection::from_entries(entries))
    }

    /// Maps every value to one `(group key, group value)` pair and
    /// collects the group values into nested collections.
    ///
    /// Group keys appear in first-encountered order; within a group,
    /// values keep their original encounter order under fresh
    /// positional keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let employees = Collection::from_values([
    ///     ("daud", "IT"),
    ///     ("Hidayat", "IT"),
    ///     ("Ramadhan", "HR"),
    /// ]);
    /// let by_department = employees.map_to_groups(|(name, department)| (*department, *name));
    ///
    /// assert_eq!(by_department.get("IT").unwrap().to_vec(), vec!["daud", "Hidayat"]);
    /// assert_eq!(by_department.get("HR").unwrap().to_vec(), vec!["Ramadhan"]);
    /// ```
    #[must_use]
    pub fn map_to_groups<K, U, F>(&self, mut transform: F) -> Collection<Collection<U>>
    where
        K: Into<Key>,
        F: FnMut(&T) -> (K, U),
    {
        collect_groups(self.entries.iter().map(|(_, value)| {
            let (group_key, group_value) = transform(value);
            (group_key.into(), group_value)
        }))
    }

    /// Maps every value to a sequence and concatenates the sequences
    /// into one flat collection with fresh positional keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let people = Collection::from_values([
    ///     vec!["Coding", "Gaming"],
    ///     vec!["Reading", "Writing"],
    /// ]);
    /// let hobbies = people.flat_map(|list| list.clone());
    /// assert_eq!(hobbies.to_vec(), vec!["Coding", "Gaming", "Reading", "Writing"]);
    /// ```
    #[must_use]
    pub fn flat_map<U, I, F>(&self, mut transform: F) -> Collection<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T) -> I,
    {
        Collection::from_values(self.values().flat_map(|value| transform(value)))
    }
}

// =============================================================================
// Filtering & Partitioning
// =============================================================================

impl<T: Clone> Collection<T> {
    /// Keeps the entries satisfying `predicate`, preserving original
    /// keys and relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection;
    ///
    /// let scores = collection! { "daud" => 100, "bintang" => 80, "siraj" => 90 };
    /// let passing = scores.filter(|value, _| *value >= 90);
    ///
    /// assert_eq!(passing.len(), 2);
    /// assert_eq!(passing.get("daud"), Some(&100));
    /// assert_eq!(passing.get("siraj"), Some(&90));
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T, &Key) -> bool,
    {
        let entries = self
            .entries
            .iter()
            .filter(|(key, value)| predicate(value, key))
            .cloned()
            .collect();
        Self::from_entries(entries)
    }

    /// Drops the entries satisfying `predicate`; the complement of
    /// [`filter`](Collection::filter).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4]);
    /// let odds = numbers.reject(|value, _| value % 2 == 0);
    /// assert_eq!(odds.to_vec(), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn reject<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T, &Key) -> bool,
    {
        self.filter(|value, key| !predicate(value, key))
    }

    /// Splits the entries into those satisfying `predicate` and those
    /// that do not, each side preserving original keys and order.
    ///
    /// Together the two collections are a complete, non-overlapping
    /// partition of the receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection;
    ///
    /// let scores = collection! { "daud" => 100, "bintang" => 80, "siraj" => 90 };
    /// let (passing, failing) = scores.partition(|value, _| *value >= 90);
    ///
    /// assert_eq!(passing.to_vec(), vec![100, 90]);
    /// assert_eq!(failing.get("bintang"), Some(&80));
    /// ```
    #[must_use]
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&T, &Key) -> bool,
    {
        let mut satisfied = Vec::new();
        let mut rest = Vec::new();
        for entry in &self.entries {
            if predicate(&entry.1, &entry.0) {
                satisfied.push(entry.clone());
            } else {
                rest.push(entry.clone());
            }
        }
        (Self::from_entries(satisfied), Self::from_entries(rest))
    }
}

// =============================================================================
// Windowing & Positional Access
// =============================================================================

impl<T: Clone> Collection<T> {
    /// Returns the entries whose positions fall in `range`, keeping
    /// original keys.
    ///
    /// Bounds beyond the collection clamp to its length, so an
    /// out-of-range window yields an empty collection rather than
    /// failing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    /// assert_eq!(numbers.slice(3..).to_vec(), vec![4, 5, 6, 7, 8, 9, 10]);
    /// assert_eq!(numbers.slice(3..5).to_vec(), vec![4, 5]);
    /// assert_eq!(numbers.slice(20..).to_vec(), Vec::<i32>::new());
    /// ```
    #[must_use]
    pub fn slice<R>(&self, range: R) -> Self
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&bound) => bound,
            Bound::Excluded(&bound) => bound.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&bound) => bound.saturating_add(1),
            Bound::Excluded(&bound) => bound,
            Bound::Unbounded => self.len(),
        };
        let start = start.min(self.len());
        let end = end.min(self.len()).max(start);
        Self::from_entries(self.entries[start..end].to_vec())
    }

    /// Returns the first `count` entries, clipped to the available
    /// length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4, 5]);
    /// assert_eq!(numbers.take(3).to_vec(), vec![1, 2, 3]);
    /// assert_eq!(numbers.take(9).to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.slice(..count)
    }

    /// Returns the longest prefix of entries satisfying `predicate`.
    ///
    /// The prefix stops at the first failing entry; later entries that
    /// would satisfy the predicate again are not picked up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 1, 2]);
    /// assert_eq!(numbers.take_while(|value| *value < 3).to_vec(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn take_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let prefix = self
            .entries
            .iter()
            .take_while(|entry| predicate(&entry.1))
            .cloned()
            .collect();
        Self::from_entries(prefix)
    }

    /// Returns the prefix of entries before the first one satisfying
    /// `predicate`; that entry is excluded.
    ///
    /// If no entry satisfies the predicate the whole collection is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4, 5]);
    /// assert_eq!(numbers.take_until(|value| *value == 3).to_vec(), vec![1, 2]);
    /// assert_eq!(numbers.take_until(|value| *value == 9).len(), 5);
    /// ```
    #[must_use]
    pub fn take_until<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.take_while(|value| !predicate(value))
    }

    /// Drops the first `count` entries and returns the remainder with
    /// original keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4, 5]);
    /// assert_eq!(numbers.skip(3).to_vec(), vec![4, 5]);
    /// assert_eq!(numbers.skip(9).to_vec(), Vec::<i32>::new());
    /// ```
    #[must_use]
    pub fn skip(&self, count: usize) -> Self {
        self.slice(count..)
    }

    /// Drops the longest prefix of entries satisfying `predicate` and
    /// returns everything from the first failing entry onward.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4, 5]);
    /// assert_eq!(numbers.skip_while(|value| *value < 3).to_vec(), vec![3, 4, 5]);
    /// ```
    #[must_use]
    pub fn skip_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let remainder = self
            .entries
            .iter()
            .skip_while(|entry| predicate(&entry.1))
            .cloned()
            .collect();
        Self::from_entries(remainder)
    }

    /// Drops entries until the first one satisfying `predicate` and
    /// returns everything from that entry onward, inclusive.
    ///
    /// If no entry satisfies the predicate the result is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4, 5]);
    /// assert_eq!(numbers.skip_until(|value| *value == 3).to_vec(), vec![3, 4, 5]);
    /// assert_eq!(numbers.skip_until(|value| *value == 9).to_vec(), Vec::<i32>::new());
    /// ```
    #[must_use]
    pub fn skip_until<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.skip_while(|value| !predicate(value))
    }

    /// Partitions the entries into consecutive groups of `size`; the
    /// final group may be shorter.
    ///
    /// Groups keep the original keys of their entries and are returned
    /// under fresh positional keys.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidSize`] if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// let groups = numbers.chunk(3).unwrap();
    ///
    /// assert_eq!(groups.len(), 3);
    /// assert_eq!(groups.first().unwrap().to_vec(), vec![1, 2, 3]);
    /// assert_eq!(groups.last().unwrap().to_vec(), vec![7, 8, 9]);
    /// ```
    pub fn chunk(&self, size: usize) -> Result<Collection<Self>, CollectionError> {
        if size == 0 {
            return Err(CollectionError::InvalidSize { size });
        }
        let groups = self
            .entries
            .chunks(size)
            .map(|window| Self::from_entries(window.to_vec()));
        Ok(Collection::from_values(groups))
    }
}

// =============================================================================
// Ordering & Aggregation
// =============================================================================

impl<T: Clone> Collection<T> {
    /// Returns a new collection with values in ascending natural
    /// order; keys travel with their values.
    ///
    /// The sort is stable: equal values retain their relative input
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4, 8, 9, 7, 5, 6]);
    /// assert_eq!(numbers.sort().to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// ```
    #[must_use]
    pub fn sort(&self) -> Self
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Returns a new collection with values ordered ascending by
    /// `comparator`; stable, keys travel with their values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let words = Collection::from_values(["ccc", "a", "bb"]);
    /// let by_length = words.sort_by(|left, right| left.len().cmp(&right.len()));
    /// assert_eq!(by_length.to_vec(), vec!["a", "bb", "ccc"]);
    /// ```
    #[must_use]
    pub fn sort_by<F>(&self, mut comparator: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut entries = self.entries.clone();
        entries.sort_by(|left, right| comparator(&left.1, &right.1));
        Self::from_entries(entries)
    }

    /// Returns a new collection with values in descending natural
    /// order; stable, keys travel with their values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4, 8, 9, 7, 5, 6]);
    /// assert_eq!(numbers.sort_desc().to_vec(), vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
    /// ```
    #[must_use]
    pub fn sort_desc(&self) -> Self
    where
        T: Ord,
    {
        self.sort_desc_by(T::cmp)
    }

    /// Returns a new collection with values ordered descending by
    /// `comparator`; stable, keys travel with their values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let words = Collection::from_values(["a", "ccc", "bb"]);
    /// let by_length = words.sort_desc_by(|left, right| left.len().cmp(&right.len()));
    /// assert_eq!(by_length.to_vec(), vec!["ccc", "bb", "a"]);
    /// ```
    #[must_use]
    pub fn sort_desc_by<F>(&self, mut comparator: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut entries = self.entries.clone();
        entries.sort_by(|left, right| comparator(&right.1, &left.1));
        Self::from_entries(entries)
    }

    /// Sums the values; an empty collection yields the additive
    /// identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4, 5, 7, 8, 6, 9]);
    /// assert_eq!(numbers.sum::<i32>(), 45);
    ///
    /// let empty: Collection<i32> = Collection::new();
    /// assert_eq!(empty.sum::<i32>(), 0);
    /// ```
    #[must_use]
    pub fn sum<S>(&self) -> S
    where
        S: Sum<T>,
    {
        self.values().cloned().sum()
    }

    /// Averages the values as `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no
    /// entries, since the mean of nothing is undefined.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4, 5, 7, 8, 6, 9]);
    /// assert_eq!(numbers.avg(), Ok(5.0));
    /// ```
    pub fn avg(&self) -> Result<f64, CollectionError>
    where
        T: Into<f64>,
    {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }
        let total: f64 = self.values().cloned().map(Into::into).sum();
        #[allow(clippy::cast_precision_loss)]
        let count = self.len() as f64;
        Ok(total / count)
    }

    /// Returns the largest value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no
    /// entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4, 5, 7, 8, 6, 9]);
    /// assert_eq!(numbers.max(), Ok(9));
    /// ```
    pub fn max(&self) -> Result<T, CollectionError>
    where
        T: Ord,
    {
        self.values().max().cloned().ok_or(CollectionError::Empty)
    }

    /// Returns the smallest value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no
    /// entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4, 5, 7, 8, 6, 9]);
    /// assert_eq!(numbers.min(), Ok(1));
    /// ```
    pub fn min(&self) -> Result<T, CollectionError>
    where
        T: Ord,
    {
        self.values().min().cloned().ok_or(CollectionError::Empty)
    }

    /// Folds the values left to right, seeding the accumulator with
    /// the first value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no
    /// entries, since there is no value to seed the accumulator with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let numbers = Collection::from_values([1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// let total = numbers.reduce(|accumulator, value| accumulator + value);
    /// assert_eq!(total, Ok(45));
    /// ```
    pub fn reduce<F>(&self, mut function: F) -> Result<T, CollectionError>
    where
        F: FnMut(T, T) -> T,
    {
        let mut values = self.values().cloned();
        let first = values.next().ok_or(CollectionError::Empty)?;
        Ok(values.fold(first, |accumulator, value| function(accumulator, value)))
    }

    /// Groups the full values by the key the selector derives from
    /// each entry.
    ///
    /// Group keys appear in first-encountered order; within a group,
    /// values keep their original relative order under fresh
    /// positional keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let employees = Collection::from_values([
    ///     ("daud", "IT"),
    ///     ("Hidayat", "IT"),
    ///     ("Ramadhan", "HR"),
    /// ]);
    /// let by_department = employees.group_by(|(_, department), _| *department);
    ///
    /// assert_eq!(
    ///     by_department.get("IT").unwrap().to_vec(),
    ///     vec![("daud", "IT"), ("Hidayat", "IT")],
    /// );
    /// assert_eq!(by_department.get("HR").unwrap().len(), 1);
    /// ```
    #[must_use]
    pub fn group_by<K, F>(&self, mut selector: F) -> Collection<Collection<T>>
    where
        K: Into<Key>,
        F: FnMut(&T, &Key) -> K,
    {
        collect_groups(
            self.entries
                .iter()
                .map(|(key, value)| (selector(value, key).into(), value.clone())),
        )
    }

    /// Groups the full values by a named field of each value.
    ///
    /// The field-name selector form of
    /// [`group_by`](Collection::group_by); values resolve the field
    /// through the [`Record`] trait.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::MissingField`] if a value does not
    /// expose the requested field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    /// use kolekt::key::Key;
    /// use kolekt::record::Record;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Employee {
    ///     name: &'static str,
    ///     department: &'static str,
    /// }
    ///
    /// impl Record for Employee {
    ///     fn field(&self, name: &str) -> Option<Key> {
    ///         match name {
    ///             "name" => Some(Key::from(self.name)),
    ///             "department" => Some(Key::from(self.department)),
    ///             _ => None,
    ///         }
    ///     }
    /// }
    ///
    /// let employees = Collection::from_values([
    ///     Employee { name: "daud", department: "IT" },
    ///     Employee { name: "Hidayat", department: "IT" },
    ///     Employee { name: "Ramadhan", department: "HR" },
    /// ]);
    /// let by_department = employees.group_by_field("department").unwrap();
    ///
    /// assert_eq!(by_department.len(), 2);
    /// assert_eq!(by_department.get("IT").unwrap().len(), 2);
    /// assert!(employees.group_by_field("salary").is_err());
    /// ```
    pub fn group_by_field(
        &self,
        field: &str,
    ) -> Result<Collection<Collection<T>>, CollectionError>
    where
        T: Record,
    {
        let mut pairs = Vec::with_capacity(self.len());
        for (_, value) in &self.entries {
            let group_key = value
                .field(field)
                .ok_or_else(|| CollectionError::MissingField {
                    field: field.to_string(),
                })?;
            pairs.push((group_key, value.clone()));
        }
        Ok(collect_groups(pairs.into_iter()))
    }
}

// =============================================================================
// Joining
// =============================================================================

impl<T: fmt::Display> Collection<T> {
    /// Renders the values as strings concatenated with `separator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let names = Collection::from_values(["Daud", "Hidayat", "Ramadhan"]);
    /// assert_eq!(names.join("-"), "Daud-Hidayat-Ramadhan");
    /// ```
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.join_with(separator, separator)
    }

    /// Renders the values as strings concatenated with `separator`,
    /// except the final pair which uses `last_separator`.
    ///
    /// Empty and single-value collections have no final pair, so
    /// `last_separator` is ignored for them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let names = Collection::from_values(["Daud", "Hidayat", "Ramadhan"]);
    /// assert_eq!(names.join_with("-", "_"), "Daud-Hidayat_Ramadhan");
    ///
    /// let single = Collection::from_values(["Daud"]);
    /// assert_eq!(single.join_with("-", "_"), "Daud");
    /// ```
    #[must_use]
    pub fn join_with(&self, separator: &str, last_separator: &str) -> String {
        let rendered: Vec<String> = self.values().map(ToString::to_string).collect();
        match rendered.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [head @ .., tail] => format!("{}{last_separator}{tail}", head.join(separator)),
        }
    }
}

// =============================================================================
// Combination
// =============================================================================

impl<T: Clone> Collection<T> {
    /// Pairs every value with the value at the same position in
    /// `other`.
    ///
    /// The result has fresh positional keys and the length of the
    /// shorter input; extra values of the longer input are discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let left = Collection::from_values([1, 2, 3]);
    /// let right = Collection::from_values([4, 5, 6]);
    /// assert_eq!(left.zip(&right).to_vec(), vec![(1, 4), (2, 5), (3, 6)]);
    ///
    /// let short = Collection::from_values(["a"]);
    /// assert_eq!(left.zip(&short).len(), 1);
    /// ```
    #[must_use]
    pub fn zip<U: Clone>(&self, other: &Collection<U>) -> Collection<(T, U)> {
        Collection::from_values(self.values().cloned().zip(other.values().cloned()))
    }

    /// Appends `other`'s values after the receiver's, re-keying the
    /// whole result with fresh positional keys. Nothing is
    /// deduplicated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let left = Collection::from_values([1, 2, 3]);
    /// let right = Collection::from_values([4, 5, 6]);
    /// assert_eq!(left.concat(&right).to_vec(), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self::from_values(self.values().chain(other.values()).cloned())
    }

    /// Uses the receiver's values as keys for `other`'s values, paired
    /// positionally.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::LengthMismatch`] if the two
    /// collections differ in length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection::Collection;
    ///
    /// let fields = Collection::from_values(["name", "country"]);
    /// let values = Collection::from_values(["Daud", "Indonesia"]);
    /// let profile = fields.combine(&values).unwrap();
    ///
    /// assert_eq!(profile.get("name"), Some(&"Daud"));
    /// assert_eq!(profile.get("country"), Some(&"Indonesia"));
    /// ```
    pub fn combine<U: Clone>(&self, other: &Collection<U>) -> Result<Collection<U>, CollectionError>
    where
        T: Into<Key>,
    {
        if self.len() != other.len() {
            return Err(CollectionError::LengthMismatch {
                keys: self.len(),
                values: other.len(),
            });
        }
        Ok(Collection::from_pairs(
            self.values()
                .cloned()
                .map(Into::<Key>::into)
                .zip(other.values().cloned()),
        ))
    }
}

// =============================================================================
// Nested Collections
// =============================================================================

impl<T: Clone> Collection<Collection<T>> {
    /// Flattens a collection of collections by exactly one level,
    /// concatenating the child values in order under fresh positional
    /// keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kolekt::collection;
    ///
    /// let nested = collection![
    ///     collection![1, 2, 3],
    ///     collection![4, 5, 6],
    ///     collection![7, 8, 9],
    /// ];
    /// assert_eq!(nested.collapse().to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// ```
    #[must_use]
    pub fn collapse(&self) -> Collection<T> {
        Collection::from_values(self.values().flat_map(|group| group.values().cloned()))
    }
}

// =============================================================================
// Grouping Helper
// =============================================================================

/// Collects `(group key, value)` pairs into nested collections,
/// keeping group keys in first-encountered order and members in
/// arrival order.
fn collect_groups<U>(pairs: impl Iterator<Item = (Key, U)>) -> Collection<Collection<U>> {
    let mut groups: Vec<(Key, Collection<U>)> = Vec::new();
    let mut positions = KeyIndex::default();
    for (group_key, group_value) in pairs {
        if let Some(&position) = positions.get(&group_key) {
            if let Some((_, group)) = groups.get_mut(position) {
                group.push(group_value);
            }
        } else {
            positions.insert(group_key.clone(), groups.len());
            let mut group = Collection::new();
            group.push(group_value);
            groups.push((group_key, group));
        }
    }
    Collection::from_entries(groups)
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a collection's `(key, value)` entries in
/// current order.
///
/// Created by [`Collection::iter`].
pub struct CollectionIterator<'a, T> {
    entries: std::slice::Iter<'a, (Key, T)>,
}

impl<'a, T> Iterator for CollectionIterator<'a, T> {
    type Item = (&'a Key, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T> DoubleEndedIterator for CollectionIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back().map(|(key, value)| (key, value))
    }
}

impl<T> ExactSizeIterator for CollectionIterator<'_, T> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Owning iterator over a collection's `(key, value)` entries in
/// current order.
///
/// Created by [`IntoIterator::into_iter`] on an owned collection.
pub struct CollectionIntoIterator<T> {
    entries: std::vec::IntoIter<(Key, T)>,
}

impl<T> Iterator for CollectionIntoIterator<T> {
    type Item = (Key, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T> DoubleEndedIterator for CollectionIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<T> ExactSizeIterator for CollectionIntoIterator<T> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = (Key, T);
    type IntoIter = CollectionIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        CollectionIntoIterator {
            entries: self.entries.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = (&'a Key, &'a T);
    type IntoIter = CollectionIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_values(values)
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.push_many(values);
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    /// Two collections are equal iff they hold the same keys in the
    /// same order with equal values. Nested collections compare
    /// recursively through their own `PartialEq`.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Eq> Eq for Collection<T> {}

impl<T: Hash> Hash for Collection<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first to distinguish collections sharing a prefix
        self.entries.len().hash(state);
        for (key, value) in &self.entries {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Collection<T> {
    /// Serializes as a sequence of `(key, value)` pairs so explicit
    /// keys survive a round trip.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for (key, value) in self.iter() {
            sequence.serialize_element(&(key, value))?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct CollectionVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> CollectionVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for CollectionVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Collection<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of key/value pairs")
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut collection = Collection::new();
        while let Some((key, value)) = sequence.next_element::<(Key, T)>()? {
            collection.insert_pair(key, value);
        }
        Ok(collection)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Collection<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(CollectionVisitor::new())
    }
}

// =============================================================================
// Construction Macro
// =============================================================================

/// Creates a [`Collection`] from literal values or key/value pairs.
///
/// Plain values build a list-like collection with sequential
/// positional keys; `key => value` pairs build a map-like collection
/// keyed in written order.
///
/// # Examples
///
/// ```rust
/// use kolekt::collection;
///
/// let numbers = collection![1, 2, 3];
/// assert_eq!(numbers.to_vec(), vec![1, 2, 3]);
///
/// let scores = collection! { "daud" => 100, "siraj" => 90 };
/// assert_eq!(scores.get("daud"), Some(&100));
/// ```
#[macro_export]
macro_rules! collection {
    // Empty: either shape, same result
    () => {
        $crate::collection::Collection::new()
    };

    // Map-like: explicit keys
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::collection::Collection::from_pairs([$(($key, $value)),+])
    };

    // List-like: sequential positional keys
    ($($value:expr),+ $(,)?) => {
        $crate::collection::Collection::from_values([$($value),+])
    };
}

// =============================================================================
// Auto-trait Guarantees
// =============================================================================

static_assertions::assert_impl_all!(Collection<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Collection<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::Collection;
    use rstest::rstest;

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_collection() {
        let collection: Collection<i32> = Collection::new();
        assert_eq!(format!("{collection}"), "{}");
    }

    #[rstest]
    fn test_display_list_like_collection() {
        let collection = Collection::from_values([1, 2, 3]);
        assert_eq!(format!("{collection}"), "{0: 1, 1: 2, 2: 3}");
    }

    #[rstest]
    fn test_display_map_like_collection() {
        let collection = Collection::from_pairs([("daud", 100), ("siraj", 90)]);
        assert_eq!(format!("{collection}"), "{daud: 100, siraj: 90}");
    }

    // =========================================================================
    // Debug Tests
    // =========================================================================

    #[rstest]
    fn test_debug_quotes_named_keys() {
        let collection = Collection::from_pairs([("daud", 100)]);
        assert_eq!(format!("{collection:?}"), "{\"daud\": 100}");
    }

    #[rstest]
    fn test_debug_list_like_collection() {
        let collection = Collection::from_values([1, 2]);
        assert_eq!(format!("{collection:?}"), "{0: 1, 1: 2}");
    }

    // =========================================================================
    // Macro Tests
    // =========================================================================

    #[rstest]
    fn test_macro_empty() {
        let collection: Collection<i32> = collection![];
        assert!(collection.is_empty());
    }

    #[rstest]
    fn test_macro_list_like() {
        let collection = collection![1, 2, 3];
        assert_eq!(collection.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_macro_map_like() {
        let collection = collection! { "a" => 1, "b" => 2 };
        assert_eq!(collection.get("a"), Some(&1));
        assert_eq!(collection.get("b"), Some(&2));
    }
}
