mod common;

use proptest::prelude::*;
use viewcomb::{concat, copied, filter, flatten, join, map, reverse, take, view};

proptest! {
    #[test]
    fn filter_keeps_accepted_elements_in_order(
        data in proptest::collection::vec(any::<i32>(), 0..64),
    ) {
        common::init_tracing();
        let kept = filter(&data, |x: &&i32| **x % 3 == 0);
        let expected: Vec<&i32> = data.iter().filter(|x| **x % 3 == 0).collect();

        prop_assert_eq!(kept.distance(), expected.len());
        prop_assert_eq!(kept.collect_as::<Vec<_>>(), expected);
    }

    #[test]
    fn map_applies_function_at_every_index(
        data in proptest::collection::vec(-1000i64..1000, 0..64),
    ) {
        let mapped = map(&data, |x: &i64| x * 7 - 1);

        prop_assert_eq!(mapped.distance(), data.len());
        for (index, x) in data.iter().enumerate() {
            prop_assert_eq!(mapped.at(index), x * 7 - 1);
        }
    }

    #[test]
    fn take_yields_the_shorter_prefix(
        data in proptest::collection::vec(any::<u8>(), 0..64),
        amount in 0usize..80,
    ) {
        let taken = take(&data, amount);
        let expected = amount.min(data.len());

        prop_assert_eq!(taken.distance(), expected);
        prop_assert_eq!(
            taken.collect_as::<Vec<_>>(),
            data.iter().take(expected).collect::<Vec<_>>()
        );
    }

    #[test]
    fn concat_appends_second_after_first(
        a in proptest::collection::vec(any::<u16>(), 0..32),
        b in proptest::collection::vec(any::<u16>(), 0..32),
    ) {
        let joined = concat(&a, &b);
        let expected: Vec<&u16> = a.iter().chain(b.iter()).collect();

        prop_assert_eq!(joined.distance(), a.len() + b.len());
        prop_assert_eq!(joined.collect_as::<Vec<_>>(), expected);
    }

    #[test]
    fn reversing_twice_restores_the_sequence(
        data in proptest::collection::vec(any::<i32>(), 0..64),
    ) {
        let twice = reverse(reverse(&data));
        prop_assert_eq!(
            twice.collect_as::<Vec<_>>(),
            data.iter().collect::<Vec<_>>()
        );

        let doubled = map(&data, |x: &i32| x.wrapping_mul(2));
        let twice = reverse(reverse(&doubled));
        prop_assert_eq!(twice.collect_as::<Vec<_>>(), doubled.collect_as::<Vec<_>>());
    }

    #[test]
    fn flatten_concatenates_inner_sequences(
        nested in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..6), 0..12),
    ) {
        let flat = flatten(&nested);
        let expected: Vec<&u8> = nested.iter().flatten().collect();

        prop_assert_eq!(flat.distance(), expected.len());
        prop_assert_eq!(flat.collect_as::<Vec<_>>(), expected.clone());
        prop_assert_eq!(
            reverse(flat).collect_as::<Vec<_>>(),
            expected.into_iter().rev().collect::<Vec<_>>()
        );
    }

    #[test]
    fn join_places_delimiter_between_elements(
        data in proptest::collection::vec(0u8..100, 0..32),
        delimiter in proptest::collection::vec(100u8..=255, 0..4),
    ) {
        let joined: Vec<u8> = join(copied(&data), copied(&delimiter)).collect_as();

        let mut expected = Vec::new();
        for (index, x) in data.iter().enumerate() {
            if index > 0 {
                expected.extend_from_slice(&delimiter);
            }
            expected.push(*x);
        }
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn view_distance_matches_length(data in proptest::collection::vec(any::<char>(), 0..64)) {
        prop_assert_eq!(view(&data).distance(), data.len());
    }
}
