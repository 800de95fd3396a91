use arrayvec::ArrayVec;

/// Largest `k` the enumerator supports: a Hold'em hand never has more than seven unseen cards to fill.
pub const MAX_K: usize = 7;

/// One combination: `k` strictly increasing positions into the pool.
pub type Indices = ArrayVec<usize, MAX_K>;

/// Number of ways to choose `k` items from `n`.
///
/// ```
/// use texas_rs::evaluator::combinations::binomial;
///
/// assert_eq!(binomial(50, 5), 2_118_760);
/// assert_eq!(binomial(45, 0), 1);
/// assert_eq!(binomial(3, 5), 0);
/// ```
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // acc == C(n, i) after each step, so the division is exact
    (0..k).fold(1u64, |acc, i| acc * (n - i) as u64 / (i + 1) as u64)
}

/// Lazy iterator over every `k`-combination of the positions `0..n`, in
/// lexicographic order. Nothing is materialised beyond the current combination;
/// build a new iterator to start over.
///
/// `k == 0` yields a single empty combination; `k > n` or `k > MAX_K` yields nothing.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Indices,
    remaining: u64,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self::starting_at(n, k, 0)
    }

    /// Start at the `rank`-th combination (0-based, lexicographic), so that
    /// disjoint rank ranges can be walked independently.
    pub fn starting_at(n: usize, k: usize, rank: u64) -> Self {
        let total = if k > MAX_K { 0 } else { binomial(n, k) };
        if rank >= total {
            return Self { n, k, indices: Indices::new(), remaining: 0 };
        }

        let mut indices = Indices::new();
        let mut r = rank;
        let mut x = 0;
        for i in 0..k {
            // combinations that put `x` at position `i` given the prefix so far
            loop {
                let block = binomial(n - x - 1, k - i - 1);
                if r < block {
                    break;
                }
                r -= block;
                x += 1;
            }
            indices.push(x);
            x += 1;
        }

        Self { n, k, indices, remaining: total - rank }
    }

    fn advance(&mut self) {
        let (n, k) = (self.n, self.k);
        // Find the rightmost index that can be incremented
        for i in (0..k).rev() {
            if self.indices[i] < n - (k - i) {
                self.indices[i] += 1;
                // Reset all indices to the right
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return;
            }
        }
    }
}

impl Iterator for Combinations {
    type Item = Indices;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let result = self.indices.clone();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Combinations {}
