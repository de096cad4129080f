//! Character-level fuzzy matching (Ratcliff/Obershelp longest matching blocks).
//!
//! Used for resolving loosely-typed product names against a known list.

use std::collections::HashMap;

/// Sequences at least this long have their most common characters
/// excluded from block seeding.
const POPULAR_MIN_LEN: usize = 200;

/// Total length of all matching blocks between `a` and `b`.
///
/// Recursively takes the longest common block, then matches the pieces to
/// its left and right.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    // Index every position of each character in `b`.
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }
    if b.len() >= POPULAR_MIN_LEN {
        let limit = b.len() / 100 + 1;
        b2j.retain(|_, positions| positions.len() <= limit);
    }

    let mut total = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, k) = longest_match(a, b, &b2j, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        total += k;
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            queue.push((i + k, ahi, j + k, bhi));
        }
    }
    total
}

/// Longest block `a[i..i+k] == b[j..j+k]` inside the given ranges.
/// Ties go to the earliest `i`, then the earliest `j`.
fn longest_match(
    a: &[char],
    b: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(c) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j.checked_sub(1).and_then(|p| j2len.get(&p)).copied().unwrap_or(0) + 1;
                next.insert(j, k);
                if k > bestsize {
                    besti = i + 1 - k;
                    bestj = j + 1 - k;
                    bestsize = k;
                }
            }
        }
        j2len = next;
    }

    // Popular characters were left out of the index; grow the block over them.
    while besti > alo && bestj > blo && a[besti - 1] == b[bestj - 1] {
        besti -= 1;
        bestj -= 1;
        bestsize += 1;
    }
    while besti + bestsize < ahi && bestj + bestsize < bhi && a[besti + bestsize] == b[bestj + bestsize] {
        bestsize += 1;
    }

    (besti, bestj, bestsize)
}

fn directed_ratio(a: &[char], b: &[char]) -> u32 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }
    let ratio = 2.0 * matching_chars(a, b) as f64 / total as f64;
    (ratio * 100.0) as u32
}

fn ratio_chars(a: &[char], b: &[char]) -> u32 {
    // Block seeding depends on argument order; take the better direction so
    // the score is symmetric.
    directed_ratio(a, b).max(directed_ratio(b, a))
}

/// Case-insensitive similarity of two strings, 0..=100, rounded down.
pub fn similarity_ratio(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    ratio_chars(&a, &b)
}

/// Best `similarity_ratio` of the shorter string against every equal-length
/// window of the longer one. Zero if either string is empty.
pub fn partial_similarity_ratio(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let (short, long) = if a.len() > b.len() { (b, a) } else { (a, b) };
    if short.is_empty() {
        return 0;
    }

    let mut best = 0;
    for window in long.windows(short.len()) {
        best = best.max(ratio_chars(&short, window));
        if best == 100 {
            break;
        }
    }
    best
}

/// Rank `candidates` by partial similarity to `query`.
///
/// Highest score first; equal scores keep candidate order. At most `limit`
/// entries are returned.
pub fn rank_matches<'a>(query: &str, candidates: &'a [String], limit: usize) -> Vec<(&'a str, u32)> {
    let mut scored: Vec<(&str, u32)> = candidates
        .iter()
        .map(|c| (c.as_str(), partial_similarity_ratio(query, c)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored
}
