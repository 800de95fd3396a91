use crate::cards::{Card, Rank};
use arrayvec::ArrayVec;

/// How many cards of one rank a hand holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankCount {
    pub rank: Rank,
    pub count: u8,
}

/// Distinct ranks of a hand with their frequency, sorted by (count asc, rank asc),
/// so the most frequent (and among equals, highest) rank comes last.
///
/// Example: AAAKQ groups as [(Queen, 1), (King, 1), (Ace, 3)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: ArrayVec<RankCount, 13>,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut rank_counts = [0u8; 15];
        for c in cards {
            rank_counts[c.rank().value() as usize] += 1;
        }

        // Rank::ALL is ascending, so a stable sort on count alone leaves rank asc within a count
        let mut groups: ArrayVec<RankCount, 13> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = rank_counts[rank.value() as usize];
                (count > 0).then_some(RankCount { rank, count })
            })
            .collect();
        groups.sort_by_key(|g| g.count);

        Self { groups }
    }

    /// The most frequent rank; the higher rank wins a tie.
    pub fn best(&self) -> Option<RankCount> {
        self.groups.last().copied()
    }

    /// The runner-up to [`RankGroups::best`].
    pub fn second_best(&self) -> Option<RankCount> {
        self.groups.len().checked_sub(2).map(|i| self.groups[i])
    }

    /// Number of distinct ranks.
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[RankCount] {
        &self.groups
    }
}
