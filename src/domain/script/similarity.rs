//! Normalized string similarity used by the classifier's fuzzy fallback.
//!
//! Scores are in `0.0..=100.0` and computed over Unicode scalar values, so
//! Cyrillic text is measured per letter rather than per byte.

use dissimilar::Chunk;

/// Normalized similarity of two strings.
///
/// `200 * common_chars / (len_a + len_b)`, where common characters are the
/// equal chunks of a diff between the two. Two empty strings score 0.
pub fn ratio(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 0.0;
    }
    200.0 * common_chars(a, b) as f64 / total as f64
}

/// Best [`ratio`] of the shorter string against every same-length window of
/// the longer one.
///
/// Returns 0 when either side is empty.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let width = shorter.chars().count();
    let longer: Vec<char> = longer.chars().collect();

    let mut best = 0.0_f64;
    for window in longer.windows(width) {
        let window: String = window.iter().collect();
        let score = ratio(shorter, &window);
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }
    best
}

fn common_chars(a: &str, b: &str) -> usize {
    dissimilar::diff(a, b)
        .into_iter()
        .map(|chunk| match chunk {
            Chunk::Equal(s) => s.chars().count(),
            Chunk::Delete(_) | Chunk::Insert(_) => 0,
        })
        .sum()
}
