use rand::{thread_rng, RngCore};
use std::fmt::Debug;

pub fn gen_inputs(n: usize) -> Vec<u32> {
    let mut rng = thread_rng();
    let mut inputs = Vec::with_capacity(n);

    for _ in 0..n {
        inputs.push(rng.next_u32());
    }

    inputs
}

pub fn validate_sort<T, F>(mut inputs: Vec<T>, sort_fn: F)
where
    T: Ord + Copy + Debug,
    F: Fn(&mut [T]),
{
    let mut expected = inputs.clone();
    expected.sort();

    sort_fn(&mut inputs);

    assert_eq!(inputs, expected);
}

/// Runs `sort_fn` against the std stable sort over a ladder of input sizes,
/// starting at `workers` (smaller inputs would reject the worker count) and
/// deliberately including sizes the worker count does not divide.
pub fn sort_comparison_suite<F>(workers: usize, sort_fn: F)
where
    F: Fn(&mut [u32]),
{
    let sizes = [
        workers,
        workers + 1,
        (workers * 2) - 1,
        (workers * 7) + 3,
        1_000,
        10_000,
        50_000,
    ];

    for n in sizes {
        if n < workers {
            continue;
        }

        validate_sort(gen_inputs(n), &sort_fn);
    }
}
