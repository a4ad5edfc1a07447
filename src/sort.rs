/// Collects a batch of strings and orders it byte-wise.
///
/// Duplicates are kept; each copy gets its own id once encoded.
pub(crate) fn sort_batch<I, S>(strings: I) -> Vec<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut sorted: Vec<Vec<u8>> = strings
        .into_iter()
        .map(|s| s.as_ref().to_vec())
        .collect();
    // Ties may land in any order.
    sorted.sort_unstable();
    sorted
}
