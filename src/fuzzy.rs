//! Ratcliff/Obershelp string similarity, for intent layers that pick the
//! closest of a few known phrases. Nothing in the extractors calls it.

/// Similarity of `a` and `b` in `[0, 1]`: twice the matched characters over
/// the total length. Two empty strings score 0.
pub(crate) fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    2.0 * matched(&a, &b) as f64 / total as f64
}

/// Characters covered by the recursive longest-common-block decomposition.
fn matched(a: &[char], b: &[char]) -> usize {
    let Some((i, j, k)) = longest_block(a, b) else {
        return 0;
    };
    k + matched(&a[..i], &b[..j]) + matched(&a[i + k..], &b[j + k..])
}

/// Start in `a`, start in `b` and length of the longest common run; the
/// earliest one wins ties.
fn longest_block(a: &[char], b: &[char]) -> Option<(usize, usize, usize)> {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        let mut row = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let k = prev[j] + 1;
                row[j + 1] = k;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            }
        }
        prev = row;
    }
    (best.2 > 0).then_some(best)
}

/// The best scoring choice; the first one wins ties.
pub(crate) fn best<'c, C, F>(query: &str, choices: &'c [C], key: F) -> Option<(&'c C, f64)>
where
    F: Fn(&C) -> &str,
{
    let mut winner: Option<(&C, f64)> = None;
    for choice in choices {
        let score = ratio(query, key(choice));
        if winner.is_none_or(|(_, s)| score > s) {
            winner = Some((choice, score));
        }
    }
    winner
}
