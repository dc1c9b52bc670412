use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::prelude::*;

/// Provides a set of patterns useful for testing and benchmarking sorting algorithms.
/// Currently limited to i32 values.

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = seeded_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_permutation(len: usize) -> Vec<i32> {
    //   .  :
    // : :.::
    // ::::::
    // Every value in 1..=len exactly once.

    let mut vals = ascending(len).into_iter().map(|val| val + 1).collect::<Vec<_>>();
    vals.shuffle(&mut seeded_rng());

    vals
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = (len / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((len / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else if saw_directions[i] == 1 {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        } else {
            unreachable!();
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Overwrites the default behavior so that each call to a random derived pattern yields new random
/// values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation.
/// For benchmarks it's advised to use call this function.
pub fn use_random_seed_each_time() {
    if override_seed().is_some() {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    USE_RANDOM_SEED_EACH_TIME.store(true, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if let Some(seed) = override_seed() {
        return seed;
    }

    if USE_RANDOM_SEED_EACH_TIME.load(Ordering::Acquire) {
        thread_rng().gen()
    } else {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| thread_rng().gen())
    }
}

/// A generator seeded with [`random_init_seed`], for tests that need a stream of random values
/// rather than a single pattern.
pub fn seeded_rng() -> StdRng {
    // Random seed, but prints it for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

// --- Private ---

static USE_RANDOM_SEED_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn override_seed() -> Option<u64> {
    static OVERRIDE_SEED: OnceCell<Option<u64>> = OnceCell::new();

    *OVERRIDE_SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .map(|seed| u64::from_str(&seed).expect("OVERRIDE_SEED must be a u64"))
    })
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
