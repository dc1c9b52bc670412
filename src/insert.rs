use std::cmp::Ordering;

use crate::groups::{InsertionGroup, InsertionGroups};

/// Inserts every element of `pend` into the sorted `main` chain.
///
/// `pend` is consumed front to back in the groups yielded by [`InsertionGroups`]. Each group is
/// inserted back to front, so an insertion never moves an element that a later insertion of the
/// same group still has to search past.
pub(crate) fn insert_pend_chain<E, F>(
    main: &mut Vec<usize>,
    pend: &[usize],
    compare: &mut F,
) -> Result<(), E>
where
    F: FnMut(usize, usize) -> Result<Ordering, E>,
{
    let mut groups = InsertionGroups::new();
    let mut rest = pend;

    while !rest.is_empty() {
        // Unreachable for any chain that fits in memory, searching the whole chain is always
        // correct.
        let group = groups.next().unwrap_or(InsertionGroup {
            size: usize::MAX,
            max_idx: usize::MAX,
        });

        let (current, tail) = rest.split_at(group.size.min(rest.len()));

        for &id in current.iter().rev() {
            let idx = binary_insert_idx(id, main, group.max_idx, compare)?;
            main.insert(idx, id);
        }

        rest = tail;
    }

    Ok(())
}

/// Finds the insertion index of `id` in `chain`, only looking at the first `max_idx` elements.
///
/// The result is the first index in `0..=max_idx` whose element is not less than `id`. The
/// caller guarantees that such an element exists within that range or that `max_idx` covers the
/// whole chain.
pub(crate) fn binary_insert_idx<E, F>(
    id: usize,
    chain: &[usize],
    max_idx: usize,
    compare: &mut F,
) -> Result<usize, E>
where
    F: FnMut(usize, usize) -> Result<Ordering, E>,
{
    let mut min_idx = 0;
    let mut max_idx = max_idx.min(chain.len());

    while min_idx != max_idx {
        let mid_idx = min_idx + (max_idx - min_idx) / 2;

        if compare(id, chain[mid_idx])? == Ordering::Greater {
            min_idx = mid_idx + 1;
        } else {
            max_idx = mid_idx;
        }
    }

    Ok(min_idx)
}
