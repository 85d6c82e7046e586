use bio::pattern_matching::horspool::Horspool;

/// Every occurrence of `pattern` in `text` as raw `[start, end)` spans.
///
/// Occurrences may overlap: `AA` in `AAAA` matches at 0, 1 and 2. The match
/// is literal and case-sensitive. An empty pattern, or one longer than the
/// text, matches nowhere.
#[must_use]
pub fn find_overlapping(text: &[u8], pattern: &[u8]) -> Vec<(usize, usize)> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    let horspool = Horspool::new(pattern);
    horspool
        .find_all(text)
        .map(|start| (start, start + pattern.len()))
        .collect()
}
