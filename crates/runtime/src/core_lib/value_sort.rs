//! A stable merge sort over keyed rows
//!
//! Comparing two values can fail (e.g. a number against a string), so the
//! standard library's sort adaptors don't fit; the comparator here returns a
//! `Result` and a failure aborts the whole sort.

use crate::{Result, Table, Value};
use std::cmp::Ordering;
use std::mem;

/// Stably sorts `(key, row)` pairs by key, ascending
///
/// Bottom-up merge sort: runs of doubling width are merged back and forth
/// between two buffers until one run covers everything. Ties and an empty
/// right run both take from the left run, which keeps equal-keyed rows in
/// their original relative order.
pub(crate) fn merge_sort(items: &mut Vec<(Value, Table)>) -> Result<()> {
    let len = items.len();
    if len < 2 {
        return Ok(());
    }

    let mut src = mem::take(items);
    let mut dst = src.clone();

    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(&src[start..end], &mut dst[start..end], mid - start)?;
            start = end;
        }
        mem::swap(&mut src, &mut dst);
        width *= 2;
    }

    *items = src;
    Ok(())
}

/// Merges the runs `src[..mid]` and `src[mid..]` into `dst`
fn merge(src: &[(Value, Table)], dst: &mut [(Value, Table)], mid: usize) -> Result<()> {
    let mut left = 0;
    let mut right = mid;

    for slot in dst.iter_mut() {
        let take_left = if left == mid {
            false
        } else if right == src.len() {
            true
        } else {
            src[left].0.compare(&src[right].0)? != Ordering::Greater
        };

        *slot = if take_left {
            left += 1;
            src[left - 1].clone()
        } else {
            right += 1;
            src[right - 1].clone()
        };
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(values: &[(i64, i64)]) -> Vec<(Value, Table)> {
        values
            .iter()
            .map(|(key, tag)| {
                let row = Table::from_values([(*key).into(), (*tag).into()]);
                (Value::from(*key), row)
            })
            .collect()
    }

    fn keys_and_tags(items: &[(Value, Table)]) -> Vec<(i64, i64)> {
        items
            .iter()
            .map(|(key, row)| {
                let key = match key {
                    Value::Number(n) => n.as_i64(),
                    other => panic!("unexpected key {other:?}"),
                };
                let tag = match row.get_index(1) {
                    Value::Number(n) => n.as_i64(),
                    other => panic!("unexpected tag {other:?}"),
                };
                (key, tag)
            })
            .collect()
    }

    #[test]
    fn sorts_ascending() {
        let mut items = keyed(&[(3, 0), (1, 1), (2, 2), (0, 3), (5, 4), (4, 5)]);
        merge_sort(&mut items).unwrap();
        let sorted: Vec<i64> = keys_and_tags(&items).iter().map(|(k, _)| *k).collect();
        assert_eq!(sorted, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn equal_keys_keep_their_original_order() {
        let mut items = keyed(&[(1, 0), (0, 1), (1, 2), (0, 3), (1, 4)]);
        merge_sort(&mut items).unwrap();
        assert_eq!(
            keys_and_tags(&items),
            [(0, 1), (0, 3), (1, 0), (1, 2), (1, 4)]
        );
    }

    #[test]
    fn incomparable_keys_abort_the_sort() {
        let mut items = vec![
            (Value::from(1), Table::from_values([1.into()])),
            (Value::from("a"), Table::from_values(["a".into()])),
        ];
        assert!(merge_sort(&mut items).is_err());
    }

    #[test]
    fn short_inputs_are_untouched() {
        let mut empty: Vec<(Value, Table)> = Vec::new();
        merge_sort(&mut empty).unwrap();
        assert!(empty.is_empty());

        let mut single = keyed(&[(7, 0)]);
        merge_sort(&mut single).unwrap();
        assert_eq!(keys_and_tags(&single), [(7, 0)]);
    }
}
