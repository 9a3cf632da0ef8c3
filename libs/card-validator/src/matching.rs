//! Fuzzy matching of field values against allowed sets.

/// A string similarity measure returning a ratio in `0.0..=1.0`.
///
/// Thresholds in [`crate::config`] are expressed against this ratio, so an
/// implementation can be swapped without touching the validation rules.
pub trait Similarity {
    fn ratio(&self, a: &str, b: &str) -> f64;
}

/// Similarity based on Levenshtein distance normalized by the longer length.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl Similarity for Levenshtein {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        let max_len = a.chars().count().max(b.chars().count());
        if max_len == 0 {
            return 1.0;
        }

        let distance = levenshtein_distance(a, b);
        1.0 - (distance as f64 / max_len as f64)
    }
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Pick the allowed value `value` most likely stands for.
///
/// The value is trimmed and lowercased first; an exact member of `allowed`
/// is returned as is. Otherwise the best match scoring at least `threshold`
/// wins, with ties going to the earlier entry of `allowed`.
pub fn fuzzy_pick<'a, S>(
    value: &str,
    allowed: &'a [S],
    threshold: f64,
    similarity: &dyn Similarity,
) -> Option<&'a str>
where
    S: AsRef<str>,
{
    let normalized = value.trim().to_lowercase();

    if let Some(exact) = allowed.iter().find(|c| c.as_ref() == normalized) {
        return Some(exact.as_ref());
    }

    let mut best: Option<(&str, f64)> = None;
    for candidate in allowed {
        let score = similarity.ratio(&normalized, candidate.as_ref());
        if score < threshold {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate.as_ref(), score)),
        }
    }

    best.map(|(candidate, _)| candidate)
}
