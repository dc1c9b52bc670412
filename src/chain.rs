use std::collections::HashMap;

use crate::pairs::Pair;

/// The two chains of one recursion level.
///
/// `main` is fully ordered and already holds the head insertion. `pend` holds the remaining
/// lesser elements in main chain order, followed by the straggler. The order of `pend` decides
/// which bound each element is searched with, so it must not be shuffled.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Chains {
    pub main: Vec<usize>,
    pub pend: Vec<usize>,
}

/// Builds the main and pend chains from the pairs and their greater elements in sorted order.
///
/// The partner of the smallest greater element is placed at the front of the main chain without
/// any comparison: it is no larger than its own partner, which is no larger than anything else in
/// the main chain.
pub(crate) fn assemble(pairs: &[Pair], sorted_greater: &[usize], straggler: Option<usize>) -> Chains {
    debug_assert_eq!(pairs.len(), sorted_greater.len());

    let partner_of = pairs
        .iter()
        .map(|pair| (pair.greater, pair.lesser))
        .collect::<HashMap<usize, usize>>();

    let len = pairs.len() * 2 + usize::from(straggler.is_some());
    let mut main = Vec::with_capacity(len);
    let mut pend = Vec::with_capacity(pairs.len());

    let mut lessers = sorted_greater.iter().map(|greater| partner_of[greater]);

    main.extend(lessers.next());
    main.extend_from_slice(sorted_greater);

    pend.extend(lessers);
    pend.extend(straggler);

    Chains { main, pend }
}
