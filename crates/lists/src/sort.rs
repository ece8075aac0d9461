use std::cmp::Ordering;

/// Sort direction for [`sort_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Return a copy of `items` stably sorted by `key`.
///
/// Stability holds in both directions: descending reverses the comparator,
/// not the result, so equal keys keep their original relative order. Keys
/// only need `PartialOrd` (amounts are `f64` in this domain); incomparable
/// keys compare as equal rather than panicking.
pub fn sort_by<T, K, F>(items: &[T], key: F, direction: SortDirection) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Expense {
        amount: f64,
        seq: usize,
    }

    #[test]
    fn sorts_ascending_and_descending() {
        let items = [3.0, 1.0, 2.0].map(|amount| Expense { amount, seq: 0 });

        let asc = sort_by(&items, |e| e.amount, SortDirection::Ascending);
        let amounts: Vec<f64> = asc.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![1.0, 2.0, 3.0]);

        let desc = sort_by(&items, |e| e.amount, SortDirection::Descending);
        let amounts: Vec<f64> = desc.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn equal_keys_preserve_original_order() {
        let items = [
            Expense { amount: 5.0, seq: 0 },
            Expense { amount: 1.0, seq: 1 },
            Expense { amount: 5.0, seq: 2 },
            Expense { amount: 5.0, seq: 3 },
        ];

        let desc = sort_by(&items, |e| e.amount, SortDirection::Descending);
        let fives: Vec<usize> = desc
            .iter()
            .filter(|e| e.amount == 5.0)
            .map(|e| e.seq)
            .collect();
        assert_eq!(fives, vec![0, 2, 3]);
    }

    #[test]
    fn input_is_untouched() {
        let items = [
            Expense { amount: 2.0, seq: 0 },
            Expense { amount: 1.0, seq: 1 },
        ];
        let _ = sort_by(&items, |e| e.amount, SortDirection::Ascending);
        assert_eq!(items[0].amount, 2.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: sorting by a key with many duplicates preserves the
        /// relative order of equal-keyed elements, in both directions.
        #[test]
        fn stability_under_duplicate_keys(
            keys in prop::collection::vec(0u8..4, 0..40),
        ) {
            let items: Vec<Expense> = keys
                .iter()
                .enumerate()
                .map(|(seq, &k)| Expense { amount: k as f64, seq })
                .collect();

            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let sorted = sort_by(&items, |e| e.amount, direction);
                for window in sorted.windows(2) {
                    if window[0].amount == window[1].amount {
                        prop_assert!(window[0].seq < window[1].seq);
                    }
                }
            }
        }
    }
}
