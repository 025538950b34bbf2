/// Unordered keys with a wide spread, used for the insert/delete scenarios.
#[allow(dead_code)]
pub fn fixture_keys() -> Vec<i64> {
    vec![
        6, 4, 56, 8, 13, 54, 66, 48, 135, 486, 5, 65, 12, 456, 85, 431, 6614, 9646, 46, 11, 6594,
        5648, 1,
    ]
}

#[allow(dead_code)]
pub fn sequential_keys(n: i64) -> Vec<i64> {
    (0..n).collect()
}

/// `n` keys drawn from `0..n / 4`, so nearly every key repeats.
#[allow(dead_code)]
pub fn repeated_keys(n: i64) -> Vec<i64> {
    (0..n).map(|i| (i * 7) % (n / 4).max(1)).collect()
}
