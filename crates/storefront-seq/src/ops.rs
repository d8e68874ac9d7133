use crate::truthy::Truthy;

/// Map every element through `f`, left to right.
///
/// Element `i` of the output is `f(&source[i], i, source)`. The output always
/// has the same length as `source`.
pub fn transform<T, U, F>(source: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    let mut out = Vec::with_capacity(source.len());
    for (i, item) in source.iter().enumerate() {
        out.push(f(item, i, source));
    }
    out
}

/// Keep the elements for which `predicate` returns a truthy value.
///
/// Relative order is preserved. The predicate may return anything
/// [`Truthy`], not just `bool`.
pub fn select<T, P, R>(source: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> R,
    R: Truthy,
{
    let mut out = Vec::new();
    for (i, item) in source.iter().enumerate() {
        if predicate(item, i, source).is_truthy() {
            out.push(item.clone());
        }
    }
    out
}

/// Fold `source` into a single value, starting from `init`.
pub fn accumulate<T, A, F>(source: &[T], mut f: F, init: A) -> A
where
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    let mut acc = init;
    for (i, item) in source.iter().enumerate() {
        acc = f(acc, item, i, source);
    }
    acc
}

/// Fold with the reset rule of the hand-written reduce this crate started from.
///
/// Whenever the running value is falsy it is replaced by the current element,
/// converted with [`Into`], instead of being combined with it. This applies on
/// every step, not only the first, so a fold that passes through `0` restarts
/// from the next element. Prefer [`accumulate`] unless exact parity with that
/// behaviour is needed.
pub fn accumulate_falsy_reset<T, A, F>(source: &[T], mut f: F, init: A) -> A
where
    T: Clone + Into<A>,
    A: Truthy,
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    let mut acc = init;
    for (i, item) in source.iter().enumerate() {
        acc = if acc.is_truthy() {
            f(acc, item, i, source)
        } else {
            item.clone().into()
        };
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_passes_index_and_source() {
        let source = [10, 20, 30];
        let out = transform(&source, |n, i, all| (*n, i, all.len()));
        assert_eq!(out, vec![(10, 0, 3), (20, 1, 3), (30, 2, 3)]);
    }

    #[test]
    fn test_transform_empty() {
        let out: Vec<i32> = transform(&[] as &[i32], |n, _, _| *n);
        assert!(out.is_empty());
    }

    #[test]
    fn test_select_truthy_results() {
        let words = ["", "a", "", "bc"];
        assert_eq!(select(&words, |w, _, _| w.len()), vec!["a", "bc"]);
        assert_eq!(
            select(&[2, 4, 6, 7, 8, 10], |n, _, _| *n > 5),
            vec![6, 7, 8, 10]
        );
    }

    #[test]
    fn test_select_by_index() {
        let source = ['a', 'b', 'c', 'd'];
        assert_eq!(select(&source, |_, i, _| i % 2 == 0), vec!['a', 'c']);
    }

    #[test]
    fn test_accumulate_sum() {
        assert_eq!(accumulate(&[1, 2, 3, 4, 5], |acc, n, _, _| acc + n, 0), 15);
        assert_eq!(accumulate(&[] as &[i32], |acc, n, _, _| acc + n, 7), 7);
    }

    #[test]
    fn test_accumulate_changes_type() {
        let joined = accumulate(
            &["a", "b"],
            |mut acc: String, s, i, _| {
                acc.push_str(&format!("{i}{s}"));
                acc
            },
            String::new(),
        );
        assert_eq!(joined, "0a1b");
    }

    #[test]
    fn test_falsy_reset_matches_sample() {
        let sum = accumulate_falsy_reset(&[1i32, 2, 3, 4, 5], |a, c, _, _| a + c, 0i32);
        assert_eq!(sum, 15);
    }

    #[test]
    fn test_falsy_reset_with_leading_zero() {
        // 0 -> 0 (reset to element), 0 -> 1 (reset), 1 + 2
        let sum = accumulate_falsy_reset(&[0i32, 1, 2], |a, c, _, _| a + c, 0i32);
        assert_eq!(sum, 3);
        assert_eq!(accumulate(&[0, 1, 2], |a, c, _, _| a + c, 0), 3);
    }

    #[test]
    fn test_falsy_reset_diverges_from_fold() {
        let diff = accumulate_falsy_reset(&[10i32, 3], |a, c, _, _| a - c, 0i32);
        assert_eq!(diff, 7);
        assert_eq!(accumulate(&[10, 3], |a, c, _, _| a - c, 0), -13);
    }

    #[test]
    fn test_falsy_reset_mid_fold() {
        // 5 - 5 hits zero, so 4 replaces it instead of being subtracted
        let diff = accumulate_falsy_reset(&[5i32, 4], |a, c, _, _| a - c, 5i32);
        assert_eq!(diff, 4);
        assert_eq!(accumulate(&[5, 4], |a, c, _, _| a - c, 5), -4);
    }

    #[test]
    fn test_falsy_reset_empty_returns_init() {
        let sum = accumulate_falsy_reset(&[] as &[i32], |a, c, _, _| a + c, 0i32);
        assert_eq!(sum, 0);
    }

    #[test]
    fn test_falsy_reset_widens_accumulator() {
        // 0 resets to 0u8 as u32, resets again to 3, then 3 * 4
        let mul = |a: u32, c: &u8, _: usize, _: &[u8]| a * u32::from(*c);
        assert_eq!(accumulate_falsy_reset(&[0u8, 3, 4], mul, 0), 12);
        assert_eq!(accumulate(&[0u8, 3, 4], mul, 0), 0);
    }

    #[derive(Clone)]
    struct Age(u32);

    impl From<Age> for u64 {
        fn from(age: Age) -> Self {
            u64::from(age.0)
        }
    }

    #[test]
    fn test_falsy_reset_over_records() {
        let ages = [Age(20), Age(22), Age(23), Age(25)];
        let total = accumulate_falsy_reset(&ages, |a: u64, s, _, _| a + u64::from(s.0), 0);
        assert_eq!(total, 90);
    }
}
