//! "Did you mean" suggestions for unknown names.

/// Default normalised-distance threshold for type name suggestions.
pub const SUGGESTION_THRESHOLD: f64 = 0.3;

/// Edit distance between `source` and `target`, counted in characters.
#[must_use]
pub fn levenshtein(source: &str, target: &str) -> usize {
    let target: Vec<char> = target.chars().collect();
    let mut previous: Vec<usize> = (0..=target.len()).collect();
    let mut current = vec![0; target.len() + 1];

    for (i, source_char) in source.chars().enumerate() {
        current[0] = i + 1;
        for (j, target_char) in target.iter().enumerate() {
            let substitution = previous[j] + usize::from(source_char != *target_char);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[target.len()]
}

/// Edit distance divided by the length of the longer string.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn levenshtein_norm(source: &str, target: &str) -> f64 {
    let longest = source.chars().count().max(target.chars().count());
    if longest == 0 {
        return 0.0;
    }
    levenshtein(source, target) as f64 / longest as f64
}

/// Suggestion text for `key` drawn from `candidates`, or an empty string.
///
/// At most two names are suggested, closest first, and only names whose
/// normalised distance is within `threshold`.
#[must_use]
pub fn get_levenshtein_error_suggestions<'a, I>(key: &str, candidates: I, threshold: f64) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    if key.is_empty() {
        return String::new();
    }
    let mut distances: Vec<(&str, f64)> = candidates
        .into_iter()
        .map(|candidate| (candidate, levenshtein_norm(key, candidate)))
        .collect();
    distances.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    match distances.as_slice() {
        [(first, d1), (second, d2), ..] if *d1 <= threshold && *d2 <= threshold => {
            format!("Did you mean '{first}', or maybe '{second}'?")
        }
        [(first, d1), ..] if *d1 <= threshold => format!("Did you mean '{first}'?"),
        _ => String::new(),
    }
}
