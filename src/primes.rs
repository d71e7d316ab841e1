//! Prime helpers used to size the bucket table.

/// Returns true if `n` is prime.
///
/// 2 and 3 are accepted up front, 0, 1 and every other even number are rejected, and the
/// rest are trial-divided by odd factors while `factor * factor <= n`.
#[must_use]
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n < 2 || n % 2 == 0 {
        return false;
    }

    let mut factor: usize = 3;
    while factor.checked_mul(factor).is_some_and(|square| square <= n) {
        if n % factor == 0 {
            return false;
        }
        factor = factor.saturating_add(2);
    }
    true
}

/// Returns the smallest prime reachable from `n` by the odd-step walk.
///
/// An even `n` is bumped to `n + 1` first, so the walk only visits odd numbers and the
/// result is never 2.
#[must_use]
pub fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { n.saturating_add(1) } else { n };
    while !is_prime(candidate) {
        candidate = candidate.saturating_add(2);
    }
    candidate
}
