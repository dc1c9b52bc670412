use rand::seq::SliceRandom;
use rand::thread_rng;

pub fn shuffle_vec<T: Ord>(mut v: Vec<T>) -> Vec<T> {
    let mut rng = thread_rng();
    v.shuffle(&mut rng);

    v
}

pub fn split_len(size: usize, part_a_percent: f64) -> (usize, usize) {
    let len_a = ((size as f64 / 100.0) * part_a_percent).round() as usize;
    let len_b = size - len_a;

    (len_a, len_b)
}
