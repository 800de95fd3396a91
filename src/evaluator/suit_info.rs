use crate::cards::{Card, Suite};
use arrayvec::ArrayVec;

/// Per-suite card counts and the suite holding the most cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub best_suite: Suite,
    pub best_count: u8,
}

impl SuitInfo {
    pub const FLUSH_LEN: u8 = 5;

    /// Count cards per suite. Ties keep the suite seen first in [`Suite::ALL`];
    /// with at most seven cards only one suite can reach five.
    pub fn detect(cards: &[Card]) -> Self {
        let mut counts = [0u8; 4];
        for c in cards {
            counts[c.suite().index()] += 1;
        }
        let mut best = SuitInfo { best_suite: Suite::ALL[0], best_count: counts[0] };
        for &s in &Suite::ALL[1..] {
            if counts[s.index()] > best.best_count {
                best = SuitInfo { best_suite: s, best_count: counts[s.index()] };
            }
        }
        best
    }

    pub fn is_flush(&self) -> bool {
        self.best_count >= Self::FLUSH_LEN
    }

    /// Cards of the flush suite, keeping the input order. `None` without a flush.
    pub fn flush_cards(&self, cards: &[Card]) -> Option<ArrayVec<Card, 7>> {
        if !self.is_flush() {
            return None;
        }
        Some(cards.iter().copied().filter(|c| c.suite() == self.best_suite).take(7).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn test_flush() {
        let cards =
            parse_cards("Spade 14, Heart 13, Spade 12, Spade 11, Club 9, Spade 4, Spade 3").unwrap();
        let info = SuitInfo::detect(&cards);
        assert!(info.is_flush());
        assert_eq!(info.best_suite, Suite::Spade);
        assert_eq!(info.best_count, 5);
        let flush = info.flush_cards(&cards).unwrap();
        assert_eq!(flush.len(), 5);
        assert!(flush.iter().all(|c| c.suite() == Suite::Spade));
    }

    #[test]
    fn test_not_flush() {
        let cards = parse_cards("Spade 14, Heart 13, Spade 12, Spade 11, Diamond 9").unwrap();
        let info = SuitInfo::detect(&cards);
        assert!(!info.is_flush());
        assert_eq!(info.best_suite, Suite::Spade);
        assert_eq!(info.best_count, 3);
        assert!(info.flush_cards(&cards).is_none());
    }

    #[test]
    fn test_six_clubs() {
        let cards = parse_cards("C 2, C 3, C 4, C 5, C 7, C 9, H 9").unwrap();
        let info = SuitInfo::detect(&cards);
        assert_eq!(info.best_suite, Suite::Club);
        assert_eq!(info.flush_cards(&cards).map(|f| f.len()), Some(6));
    }
}
