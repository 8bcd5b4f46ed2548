use crate::dispatch::Comparator;
use crate::observer::{Detail, Observer};
use crate::traits::{DynComparable, MapOrder};

/// Compares two maps of equal size.
///
/// Two sorted maps are walked in lock-step, keys and values compared
/// position by position. If either side has no ordering guarantee the
/// entries are matched by key instead.
pub(crate) fn compare<O: Observer>(
    engine: &Comparator<O>,
    left: &dyn DynComparable,
    right: &dyn DynComparable,
    depth: usize,
) -> (bool, Detail) {
    let (Some(left_entries), Some(right_entries)) = (left.entries(), right.entries()) else {
        return (false, Detail::Malformed);
    };
    if left_entries.len() != right_entries.len() {
        return (
            false,
            Detail::SizeMismatch {
                left: left_entries.len(),
                right: right_entries.len(),
            },
        );
    }

    match (left.map_order(), right.map_order()) {
        (MapOrder::Sorted, MapOrder::Sorted) => {
            for (index, ((left_key, left_value), (right_key, right_value))) in
                left_entries.zip(right_entries).enumerate()
            {
                if !engine.compare_at(left_key, right_key, depth + 1)
                    || !engine.compare_at(left_value, right_value, depth + 1)
                {
                    return (false, Detail::Mismatch { index });
                }
            }
            (true, Detail::None)
        }
        _ => keyed(engine, left_entries, right, depth),
    }
}

/// Matches every left entry to a distinct right entry with an equal key and
/// an equal value.
///
/// All pairs are compared once, then a maximum bipartite matching is grown
/// with augmenting paths. The verdict does not depend on iteration order.
fn keyed<'a, O: Observer>(
    engine: &Comparator<O>,
    left_entries: impl Iterator<Item = (&'a dyn DynComparable, &'a dyn DynComparable)>,
    right: &dyn DynComparable,
    depth: usize,
) -> (bool, Detail) {
    let Some(right_entries) = right.entries() else {
        return (false, Detail::Malformed);
    };
    let right_entries: Vec<_> = right_entries.collect();

    let compatible: Vec<Vec<bool>> = left_entries
        .map(|(left_key, left_value)| {
            right_entries
                .iter()
                .map(|(right_key, right_value)| {
                    engine.compare_at(left_key, *right_key, depth + 1)
                        && engine.compare_at(left_value, *right_value, depth + 1)
                })
                .collect()
        })
        .collect();

    let mut owner: Vec<Option<usize>> = vec![None; right_entries.len()];
    for index in 0..compatible.len() {
        let mut visited = vec![false; right_entries.len()];
        if !augment(index, &compatible, &mut visited, &mut owner) {
            return (false, Detail::MissingKey { index });
        }
    }
    (true, Detail::None)
}

/// Kuhn's augmenting-path step: finds a right slot for `row`, re-seating
/// earlier owners when that frees one up.
fn augment(
    row: usize,
    compatible: &[Vec<bool>],
    visited: &mut [bool],
    owner: &mut [Option<usize>],
) -> bool {
    for slot in 0..owner.len() {
        if !compatible[row][slot] || visited[slot] {
            continue;
        }
        visited[slot] = true;
        let free = match owner[slot] {
            None => true,
            Some(previous) => augment(previous, compatible, visited, owner),
        };
        if free {
            owner[slot] = Some(row);
            return true;
        }
    }
    false
}
