use super::rank_groups::{RankCount, RankGroups};
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use arrayvec::ArrayVec;

/// Pre-computed analysis of 5 to 7 cards sorted by rank descending.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub cards: ArrayVec<Card, 7>,
    pub suit_info: SuitInfo,
    pub rank_groups: RankGroups,
}

impl HandAnalysis {
    /// Analyze `sorted` (rank descending). Anything past the seventh card is ignored.
    pub fn new(sorted: &[Card]) -> Self {
        let cards: ArrayVec<Card, 7> = sorted.iter().copied().take(7).collect();
        let suit_info = SuitInfo::detect(&cards);
        let rank_groups = RankGroups::from_cards(&cards);
        Self { cards, suit_info, rank_groups }
    }

    pub fn best(&self) -> Option<RankCount> {
        self.rank_groups.best()
    }

    pub fn second_best(&self) -> Option<RankCount> {
        self.rank_groups.second_best()
    }

    /// The `N` highest ranks among cards whose rank is not in `skip`.
    /// `None` if fewer than `N` such cards exist.
    pub fn top_ranks<const N: usize>(&self, skip: &[Rank]) -> Option<[Rank; N]> {
        top_ranks(&self.cards, skip)
    }
}

/// The `N` highest ranks of `sorted` (rank descending), skipping ranks in `skip`.
pub(crate) fn top_ranks<const N: usize>(sorted: &[Card], skip: &[Rank]) -> Option<[Rank; N]> {
    let picked: ArrayVec<Rank, N> =
        sorted.iter().map(|c| c.rank()).filter(|r| !skip.contains(r)).take(N).collect();
    picked.into_inner().ok()
}
