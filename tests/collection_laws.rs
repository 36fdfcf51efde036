//! Property-based tests for Collection laws.
//!
//! This module verifies the structural invariants of the collection
//! pipeline surface using proptest: length preservation, partition
//! completeness, windowing complementarity, ordering stability, and
//! the push/pop inverse.

use kolekt::collection::Collection;
use proptest::prelude::*;

// =============================================================================
// Construction Laws
// =============================================================================

proptest! {
    /// Round-trip Law: a collection built from a sequence observes
    /// back exactly that sequence.
    #[test]
    fn prop_from_values_round_trip(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Collection::from_values(elements.clone());
        prop_assert_eq!(collection.to_vec(), elements);
    }

    /// Key Law: list-like construction assigns sequential positional
    /// keys starting at zero.
    #[test]
    fn prop_from_values_assigns_sequential_keys(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Collection::from_values(elements);
        for (position, (key, _)) in collection.iter().enumerate() {
            prop_assert_eq!(key.as_index(), Some(position as u64));
        }
    }

    /// Push-Pop Law: push followed by pop returns the pushed value and
    /// restores the original entries.
    #[test]
    fn prop_push_pop_inverse(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        new_element: i32
    ) {
        let original = Collection::from_values(elements);
        let mut collection = original.clone();
        collection.push(new_element);

        prop_assert_eq!(collection.pop(), Ok(new_element));
        prop_assert_eq!(collection, original);
    }
}

// =============================================================================
// Transformation Laws
// =============================================================================

proptest! {
    /// Length Law: map preserves the entry count.
    #[test]
    fn prop_map_preserves_length(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Collection::from_values(elements);
        let mapped = collection.map(|value| i64::from(*value) * 2);
        prop_assert_eq!(mapped.len(), collection.len());
    }

    /// Identity Law: mapping the identity function observes the same
    /// values.
    #[test]
    fn prop_map_identity(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Collection::from_values(elements.clone());
        let mapped = collection.map(Clone::clone);
        prop_assert_eq!(mapped.to_vec(), elements);
    }

    /// Partition Law: the two sides are a complete, disjoint split of
    /// the source.
    #[test]
    fn prop_partition_is_complete_and_disjoint(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Collection::from_values(elements);
        let (evens, odds) = collection.partition(|value, _| value % 2 == 0);

        prop_assert_eq!(evens.len() + odds.len(), collection.len());
        for (key, value) in evens.iter() {
            prop_assert!(value % 2 == 0);
            prop_assert_eq!(collection.get(key.clone()), Some(value));
            prop_assert!(odds.get(key.clone()).is_none());
        }
        for (key, value) in odds.iter() {
            prop_assert!(value % 2 != 0);
            prop_assert_eq!(collection.get(key.clone()), Some(value));
        }
    }

    /// Filter-Reject Law: filter and reject split the entries the same
    /// way partition does.
    #[test]
    fn prop_filter_and_reject_complement(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Collection::from_values(elements);
        let (kept, dropped) = collection.partition(|value, _| *value > 0);

        prop_assert_eq!(collection.filter(|value, _| *value > 0), kept);
        prop_assert_eq!(collection.reject(|value, _| *value > 0), dropped);
    }
}

// =============================================================================
// Windowing Laws
// =============================================================================

proptest! {
    /// Complement Law: take(n) followed by skip(n) reassembles the
    /// source values.
    #[test]
    fn prop_take_skip_complement(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        count in 0_usize..60
    ) {
        let collection = Collection::from_values(elements.clone());
        let mut reassembled = collection.take(count).to_vec();
        reassembled.extend(collection.skip(count).to_vec());
        prop_assert_eq!(reassembled, elements);
    }

    /// Prefix Law: take_while and skip_while split at the same
    /// transition point.
    #[test]
    fn prop_take_while_skip_while_complement(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Collection::from_values(elements.clone());
        let mut reassembled = collection.take_while(|value| *value < 0).to_vec();
        reassembled.extend(collection.skip_while(|value| *value < 0).to_vec());
        prop_assert_eq!(reassembled, elements);
    }

    /// Chunk Law: groups have the requested size except the final one,
    /// and concatenate back to the source.
    #[test]
    fn prop_chunk_reassembles(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        size in 1_usize..10
    ) {
        let collection = Collection::from_values(elements.clone());
        let groups = collection.chunk(size).unwrap();

        let mut reassembled = Vec::new();
        for (position, (_, group)) in groups.iter().enumerate() {
            if position + 1 < groups.len() {
                prop_assert_eq!(group.len(), size);
            } else {
                prop_assert!(group.len() <= size);
            }
            reassembled.extend(group.to_vec());
        }
        prop_assert_eq!(reassembled, elements);
    }
}

// =============================================================================
// Ordering & Aggregation Laws
// =============================================================================

proptest! {
    /// Permutation Law: sorting observes the same values in
    /// non-decreasing order.
    #[test]
    fn prop_sort_is_an_ordered_permutation(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Collection::from_values(elements.clone());
        let sorted = collection.sort().to_vec();

        let mut expected = elements;
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    /// Reversal Law: sort_desc is sort reversed.
    #[test]
    fn prop_sort_desc_reverses_sort(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Collection::from_values(elements);
        let mut ascending = collection.sort().to_vec();
        ascending.reverse();
        prop_assert_eq!(collection.sort_desc().to_vec(), ascending);
    }

    /// Fold Law: reduce with addition equals sum over non-empty
    /// collections.
    #[test]
    fn prop_reduce_add_equals_sum(
        elements in prop::collection::vec(-1000_i64..1000, 1..50)
    ) {
        let collection = Collection::from_values(elements);
        let reduced = collection.reduce(|accumulator, value| accumulator + value);
        prop_assert_eq!(reduced, Ok(collection.sum::<i64>()));
    }
}

// =============================================================================
// Combination Laws
// =============================================================================

proptest! {
    /// Length Law: concat lengths add.
    #[test]
    fn prop_concat_length_adds(
        left in prop::collection::vec(any::<i32>(), 0..50),
        right in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let left_collection = Collection::from_values(left.clone());
        let right_collection = Collection::from_values(right.clone());
        let combined = left_collection.concat(&right_collection);

        prop_assert_eq!(combined.len(), left.len() + right.len());

        let mut expected = left;
        expected.extend(right);
        prop_assert_eq!(combined.to_vec(), expected);
    }

    /// Length Law: zip has the length of the shorter input and matches
    /// positionally.
    #[test]
    fn prop_zip_min_length(
        left in prop::collection::vec(any::<i32>(), 0..50),
        right in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let left_collection = Collection::from_values(left.clone());
        let right_collection = Collection::from_values(right.clone());
        let zipped = left_collection.zip(&right_collection);

        prop_assert_eq!(zipped.len(), left.len().min(right.len()));
        for (position, (_, (first, second))) in zipped.iter().enumerate() {
            prop_assert_eq!(*first, left[position]);
            prop_assert_eq!(*second, right[position]);
        }
    }

    /// Pairing Law: combine keys every value of the second collection
    /// under the matching value of the first.
    #[test]
    fn prop_combine_pairs_positionally(
        pairs in prop::collection::hash_map("[a-z]{1,8}", any::<i32>(), 0..20)
    ) {
        let names: Vec<String> = pairs.keys().cloned().collect();
        let values: Vec<i32> = names.iter().map(|name| pairs[name]).collect();

        let keys_collection = Collection::from_values(names.clone());
        let values_collection = Collection::from_values(values);
        let combined = keys_collection.combine(&values_collection).unwrap();

        prop_assert_eq!(combined.len(), names.len());
        for name in &names {
            prop_assert_eq!(combined.get(name.as_str()), Some(&pairs[name]));
        }
    }
}
