//! Group sizes and search bounds for inserting the pend chain.
//!
//! The pend chain is inserted in groups. The first group has two elements and the sums of sizes
//! of every two adjacent groups form the powers of two:
//!
//! 2, 2, 6, 10, 22, 42, 86, 170, 342, 682, 1366, 2730, 5462, ...
//!
//! These are the differences of adjacent values in the Jacobsthal sequence. Every element of the
//! group for `power` can be placed with a binary search over the first `2^(power + 1) - 1`
//! elements of the main chain, as long as the group is inserted back to front.

use std::iter::FusedIterator;

/// Number of groups [`InsertionGroups`] yields before it ends. The next bound would be
/// `2^65 - 1`, which no longer fits a 64 bit integer. The groups up to here already cover more
/// elements than any address space can hold.
pub const MAX_GROUPS: u32 = 63;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InsertionGroup {
    /// How many pend chain elements belong to this group.
    pub size: usize,
    /// Length of the main chain prefix searched for elements of this group, the insertion index
    /// lies in `0..=max_idx`. Clamped to the main chain length by the caller. Saturates at `usize::MAX` on targets with pointers narrower than 64 bit.
    pub max_idx: usize,
}

/// Yields [`InsertionGroup`]s in insertion order, see the module documentation.
///
/// ```
/// use merge_insertion::groups::InsertionGroups;
///
/// let sizes = InsertionGroups::new().take(6).map(|g| g.size).collect::<Vec<_>>();
/// assert_eq!(sizes, [2, 2, 6, 10, 22, 42]);
///
/// let bounds = InsertionGroups::new().take(4).map(|g| g.max_idx).collect::<Vec<_>>();
/// assert_eq!(bounds, [3, 7, 15, 31]);
/// ```
#[derive(Clone, Debug)]
pub struct InsertionGroups {
    previous_size: u64,
    power: u32,
}

impl InsertionGroups {
    pub fn new() -> Self {
        Self {
            previous_size: 0,
            power: 1,
        }
    }
}

impl Default for InsertionGroups {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for InsertionGroups {
    type Item = InsertionGroup;

    fn next(&mut self) -> Option<InsertionGroup> {
        if self.power > MAX_GROUPS {
            return None;
        }

        let size = (1u64 << self.power) - self.previous_size;
        // 2^(power + 1) - 1, without shifting past the width for power == 63.
        let max_idx = u64::MAX >> (u64::BITS - 1 - self.power);

        self.previous_size = size;
        self.power += 1;

        Some(InsertionGroup {
            size: saturating_usize(size),
            max_idx: saturating_usize(max_idx),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (MAX_GROUPS + 1).saturating_sub(self.power) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for InsertionGroups {}

impl FusedIterator for InsertionGroups {}

fn saturating_usize(val: u64) -> usize {
    usize::try_from(val).unwrap_or(usize::MAX)
}
