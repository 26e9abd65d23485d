use std::cmp::Ordering;
use std::fmt::Debug;

use crate::patterns;
use crate::Sort;

#[cfg(not(feature = "large_test_sizes"))]
const TEST_SIZES: [usize; 17] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 15, 16, 17, 20, 24, 33, 50,
];

#[cfg(feature = "large_test_sizes")]
const TEST_SIZES: [usize; 22] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 15, 16, 17, 20, 24, 33, 50, 100, 171, 256, 500, 1_000,
];

fn sort_comp<T, S>(v: &mut [T])
where
    T: Ord + Clone + Debug,
    S: Sort,
{
    let seed = patterns::random_init_seed();
    let is_small_test = v.len() <= 100;
    let original_clone = v.to_vec();

    let mut stdlib_sorted_vec = v.to_vec();
    let stdlib_sorted = stdlib_sorted_vec.as_mut_slice();
    stdlib_sorted.sort();

    let testsort_sorted = v;
    S::sort(testsort_sorted);

    assert_eq!(stdlib_sorted.len(), testsort_sorted.len());

    for (a, b) in stdlib_sorted.iter().zip(testsort_sorted.iter()) {
        if a != b {
            if is_small_test {
                eprintln!("Orginal:  {:?}", original_clone);
                eprintln!("Expected: {:?}", stdlib_sorted);
                eprintln!("Got:      {:?}", testsort_sorted);
            } else {
                // Large arrays output them as files.
                let original_name = format!("original_{}.txt", seed);
                let std_name = format!("stdlib_sorted_{}.txt", seed);
                let testsort_name = format!("testsort_sorted_{}.txt", seed);

                std::fs::write(&original_name, format!("{:?}", original_clone)).unwrap();
                std::fs::write(&std_name, format!("{:?}", stdlib_sorted)).unwrap();
                std::fs::write(&testsort_name, format!("{:?}", testsort_sorted)).unwrap();

                eprintln!(
                    "Failed comparison, see files {original_name}, {std_name}, and {testsort_name}"
                );
            }

            panic!("Test assertion failed! {} seed: {}", S::name(), seed);
        }
    }
}

fn test_impl<T, S>(pattern_fn: impl Fn(usize) -> Vec<T>)
where
    T: Ord + Clone + Debug,
    S: Sort,
{
    for test_size in TEST_SIZES {
        let mut test_data = pattern_fn(test_size);
        sort_comp::<T, S>(test_data.as_mut_slice());
    }
}

// --- TESTS ---

pub fn basic<S: Sort>() {
    sort_comp::<i32, S>(&mut []);
    sort_comp::<(), S>(&mut []);
    sort_comp::<(), S>(&mut [()]);
    sort_comp::<(), S>(&mut [(), ()]);
    sort_comp::<(), S>(&mut [(), (), ()]);
    sort_comp::<i32, S>(&mut []);
    sort_comp::<i32, S>(&mut [77]);
    sort_comp::<i32, S>(&mut [2, 3]);
    sort_comp::<i32, S>(&mut [2, 3, 6]);
    sort_comp::<i32, S>(&mut [2, 3, 99, 6]);
    sort_comp::<i32, S>(&mut [2, 7709, 400, 90932]);
    sort_comp::<i32, S>(&mut [15, -1, 3, -1, -3, -1, 7]);
}

pub fn fixed_seed<S: Sort>() {
    let fixed_seed_a = patterns::random_init_seed();
    let fixed_seed_b = patterns::random_init_seed();

    assert_eq!(fixed_seed_a, fixed_seed_b);
}

pub fn random<S: Sort>() {
    test_impl::<i32, S>(patterns::random);
}

pub fn random_type_u64<S: Sort>() {
    test_impl::<u64, S>(|len| {
        patterns::random(len)
            .into_iter()
            .map(|val| (val as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
            .collect()
    });
}

pub fn random_str<S: Sort>() {
    test_impl::<String, S>(|len| {
        patterns::random(len)
            .into_iter()
            .map(|val| format!("{}", val))
            .collect()
    });
}

pub fn random_d2<S: Sort>() {
    test_impl::<i32, S>(|len| patterns::random_uniform(len, 0..2));
}

pub fn random_d20<S: Sort>() {
    test_impl::<i32, S>(|len| patterns::random_uniform(len, 0..20));
}

pub fn random_z1<S: Sort>() {
    test_impl::<i32, S>(|len| patterns::random_zipf(len, 1.0));
}

pub fn random_s95<S: Sort>() {
    test_impl::<i32, S>(|len| patterns::random_sorted(len, 95.0));
}

pub fn all_equal<S: Sort>() {
    test_impl::<i32, S>(patterns::all_equal);
}

pub fn ascending<S: Sort>() {
    test_impl::<i32, S>(patterns::ascending);
}

pub fn descending<S: Sort>() {
    test_impl::<i32, S>(patterns::descending);
}

pub fn saw_mixed<S: Sort>() {
    test_impl::<i32, S>(|test_size| {
        patterns::saw_mixed(test_size, (test_size as f64).log2().ceil() as usize)
    });
}

pub fn pipe_organ<S: Sort>() {
    test_impl::<i32, S>(patterns::pipe_organ);
}

pub fn stability<S: Sort>() {
    // Pair every key with its original position. A stable sort by key alone must leave the
    // positions of equal keys ascending.
    for test_size in TEST_SIZES {
        let keys = patterns::random_uniform(test_size, 0..10);
        let mut v: Vec<(i32, usize)> = keys.into_iter().zip(0..).collect();

        S::sort_by(&mut v, |a, b| a.0.cmp(&b.0));

        assert!(
            v.windows(2).all(|w| w[0] <= w[1]),
            "{} is not stable, seed: {}",
            S::name(),
            patterns::random_init_seed()
        );
    }
}

pub fn sort_by_reversed<S: Sort>() {
    for test_size in TEST_SIZES {
        let mut v = patterns::random(test_size);
        let mut expected = v.clone();
        expected.sort_by(|a, b| b.cmp(a));

        S::sort_by(&mut v, |a, b| b.cmp(a));

        assert_eq!(v, expected, "seed: {}", patterns::random_init_seed());
    }
}

pub fn sort_by_partial_cmp_f64<S: Sort>() {
    for test_size in TEST_SIZES {
        let mut v: Vec<f64> = patterns::random(test_size)
            .into_iter()
            .map(|val| val as f64 / 7.0)
            .collect();

        S::sort_by(&mut v, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[macro_export]
macro_rules! instantiate_sort_test_inner {
    ($sort_impl:ty, $test_fn_name:ident) => {
        $crate::paste::paste! {
            #[test]
            fn [<sort_ $test_fn_name>]() {
                $crate::tests::$test_fn_name::<$sort_impl>();
            }
        }
    };
}

#[macro_export]
macro_rules! instantiate_sort_tests_gen {
    ($sort_impl:ty, $($test_fn_name:ident),* $(,)?) => {
        $(
            $crate::instantiate_sort_test_inner!($sort_impl, $test_fn_name);
        )*
    };
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests_gen!(
            $sort_impl,
            basic,
            fixed_seed,
            random,
            random_type_u64,
            random_str,
            random_d2,
            random_d20,
            random_z1,
            random_s95,
            all_equal,
            ascending,
            descending,
            saw_mixed,
            pipe_organ,
            stability,
            sort_by_reversed,
            sort_by_partial_cmp_f64,
        );
    };
}
