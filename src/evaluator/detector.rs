use super::hand_analysis::{top_ranks, HandAnalysis};
use super::straight_info::find_straight;
use crate::cards::Rank;
use crate::evaluator::HandCategory;

/// Strategy pattern: each detector recognises one family of categories and
/// builds it with its tie-break data. Detectors run in priority order and the
/// first match wins.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandCategory>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Five or more cards of one suite: royal flush, straight flush or plain flush.
/// Quads and full houses cannot coexist with a flush in seven cards.
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandCategory> {
        let flush = analysis.suit_info.flush_cards(&analysis.cards)?;
        match find_straight(&flush) {
            Some(Rank::Ace) => Some(HandCategory::RoyalFlush),
            Some(best_rank) => Some(HandCategory::StraightFlush { best_rank }),
            None => top_ranks::<5>(&flush, &[]).map(|ranks| HandCategory::Flush { ranks }),
        }
    }
}

/// Four of a Kind, kicker is the highest other card
pub struct FourOfKindDetector;

impl CategoryDetector for FourOfKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandCategory> {
        let best = analysis.best().filter(|b| b.count == 4)?;
        let [kicker] = analysis.top_ranks::<1>(&[best.rank])?;
        Some(HandCategory::FourOfKind { quad_rank: best.rank, kicker })
    }
}

/// Full House. Two triplets count too: the lower one serves as the pair.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandCategory> {
        let best = analysis.best().filter(|b| b.count == 3)?;
        let second = analysis.second_best().filter(|s| s.count >= 2)?;
        Some(HandCategory::FullHouse { triplet_rank: best.rank, twin_rank: second.rank })
    }
}

/// Straight over all cards regardless of suite; needs five distinct ranks.
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandCategory> {
        if analysis.rank_groups.distinct() < 5 {
            return None;
        }
        find_straight(&analysis.cards).map(|best_rank| HandCategory::Straight { best_rank })
    }
}

/// Three of a Kind with the two highest other cards
pub struct ThreeOfKindDetector;

impl CategoryDetector for ThreeOfKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandCategory> {
        let best = analysis.best().filter(|b| b.count == 3)?;
        let kickers = analysis.top_ranks::<2>(&[best.rank])?;
        Some(HandCategory::ThreeOfKind { triplet_rank: best.rank, kickers })
    }
}

/// Two Pair (the higher pair is the strong one) or a single Pair
pub struct PairDetector;

impl CategoryDetector for PairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandCategory> {
        let best = analysis.best().filter(|b| b.count == 2)?;
        match analysis.second_best().filter(|s| s.count == 2) {
            Some(second) => {
                let [kicker] = analysis.top_ranks::<1>(&[best.rank, second.rank])?;
                Some(HandCategory::TwoPair { strong_rank: best.rank, weak_rank: second.rank, kicker })
            }
            None => {
                let kickers = analysis.top_ranks::<3>(&[best.rank])?;
                Some(HandCategory::Pair { pair_rank: best.rank, kickers })
            }
        }
    }
}

/// High Card: the five highest cards. Only fails when fewer than five cards are given.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandCategory> {
        analysis.top_ranks::<5>(&[]).map(|ranks| HandCategory::HighCard { ranks })
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 7] = [
    &FlushDetector,
    &FourOfKindDetector,
    &FullHouseDetector,
    &StraightDetector,
    &ThreeOfKindDetector,
    &PairDetector,
    &HighCardDetector,
];
