/// Splits `items` into consecutive groups of `n`.
///
/// Every group holds exactly `n` elements except the last, which holds the
/// remainder. Panics if `n` is zero.
pub(crate) fn chunk<T: Clone>(items: &[T], n: usize) -> Vec<Vec<T>> {
    items.chunks(n).map(<[T]>::to_vec).collect()
}

/// Splits a string into groups of `n` characters.
pub(crate) fn chunk_str(s: &str, n: usize) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    chunk(&chars, n)
        .into_iter()
        .map(|group| group.into_iter().collect())
        .collect()
}
