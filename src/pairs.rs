use std::cmp::Ordering;
use std::mem;

/// Two adjacent elements of one recursion level, referred to by id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Pair {
    pub lesser: usize,
    pub greater: usize,
}

impl Pair {
    fn swap(&mut self) {
        mem::swap(&mut self.lesser, &mut self.greater);
    }
}

/// Splits `ids` into adjacent pairs and the unpaired tail element, if any. Performs no
/// comparisons, the pairs are not yet ordered internally.
pub(crate) fn split(ids: &[usize]) -> (Vec<Pair>, Option<usize>) {
    let chunks = ids.chunks_exact(2);
    let straggler = chunks.remainder().first().copied();

    let pairs = chunks
        .map(|chunk| Pair {
            lesser: chunk[0],
            greater: chunk[1],
        })
        .collect();

    (pairs, straggler)
}

/// Orders every pair so that `lesser <= greater`, using exactly one comparison per pair.
pub(crate) fn normalize<E, F>(pairs: &mut [Pair], compare: &mut F) -> Result<(), E>
where
    F: FnMut(usize, usize) -> Result<Ordering, E>,
{
    for pair in pairs {
        if compare(pair.lesser, pair.greater)? == Ordering::Greater {
            pair.swap();
        }
    }

    Ok(())
}
