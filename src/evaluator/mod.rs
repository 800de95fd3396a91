pub mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{sort_desc, Card, Rank};
use crate::hand::find_duplicate;
use arrayvec::ArrayVec;
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const COUNT: usize = 10;

    /// All categories, strongest first. This is the row order of a histogram.
    pub const BEST_TO_WORST: [Category; Category::COUNT] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The best five-card hand found in a set of cards, with just enough data to
/// break ties against another hand of the same category.
///
/// Rank arrays are ordered highest first. Values of the same category compare
/// by their fields in declaration order; values of different categories are
/// not comparable (`partial_cmp` returns `None`). Use [`HandCategory::category`]
/// to compare categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCategory {
    HighCard { ranks: [Rank; 5] },
    Pair { pair_rank: Rank, kickers: [Rank; 3] },
    TwoPair { strong_rank: Rank, weak_rank: Rank, kicker: Rank },
    ThreeOfKind { triplet_rank: Rank, kickers: [Rank; 2] },
    Straight { best_rank: Rank },
    Flush { ranks: [Rank; 5] },
    FullHouse { triplet_rank: Rank, twin_rank: Rank },
    FourOfKind { quad_rank: Rank, kicker: Rank },
    StraightFlush { best_rank: Rank },
    RoyalFlush,
}

impl HandCategory {
    pub const fn category(&self) -> Category {
        match self {
            HandCategory::HighCard { .. } => Category::HighCard,
            HandCategory::Pair { .. } => Category::Pair,
            HandCategory::TwoPair { .. } => Category::TwoPair,
            HandCategory::ThreeOfKind { .. } => Category::ThreeOfKind,
            HandCategory::Straight { .. } => Category::Straight,
            HandCategory::Flush { .. } => Category::Flush,
            HandCategory::FullHouse { .. } => Category::FullHouse,
            HandCategory::FourOfKind { .. } => Category::FourOfKind,
            HandCategory::StraightFlush { .. } => Category::StraightFlush,
            HandCategory::RoyalFlush => Category::RoyalFlush,
        }
    }
}

impl PartialOrd for HandCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use HandCategory::*;
        let ord = match (self, other) {
            (HighCard { ranks: a }, HighCard { ranks: b }) | (Flush { ranks: a }, Flush { ranks: b }) => {
                a.cmp(b)
            }
            (Pair { pair_rank: a, kickers: ka }, Pair { pair_rank: b, kickers: kb }) => {
                a.cmp(b).then(ka.cmp(kb))
            }
            (
                TwoPair { strong_rank: a, weak_rank: wa, kicker: ka },
                TwoPair { strong_rank: b, weak_rank: wb, kicker: kb },
            ) => a.cmp(b).then(wa.cmp(wb)).then(ka.cmp(kb)),
            (
                ThreeOfKind { triplet_rank: a, kickers: ka },
                ThreeOfKind { triplet_rank: b, kickers: kb },
            ) => a.cmp(b).then(ka.cmp(kb)),
            (Straight { best_rank: a }, Straight { best_rank: b })
            | (StraightFlush { best_rank: a }, StraightFlush { best_rank: b }) => a.cmp(b),
            (
                FullHouse { triplet_rank: a, twin_rank: ta },
                FullHouse { triplet_rank: b, twin_rank: tb },
            ) => a.cmp(b).then(ta.cmp(tb)),
            (FourOfKind { quad_rank: a, kicker: ka }, FourOfKind { quad_rank: b, kicker: kb }) => {
                a.cmp(b).then(ka.cmp(kb))
            }
            (RoyalFlush, RoyalFlush) => Ordering::Equal,
            _ => return None,
        };
        Some(ord)
    }
}

fn join_names(ranks: &[Rank]) -> String {
    ranks.iter().map(|r| r.name()).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.category().name();
        match self {
            HandCategory::HighCard { ranks } | HandCategory::Flush { ranks } => {
                write!(f, "{name} ({})", join_names(ranks))
            }
            HandCategory::Pair { pair_rank, kickers } => {
                write!(f, "{name} of {} (kickers {})", pair_rank.name(), join_names(kickers))
            }
            HandCategory::TwoPair { strong_rank, weak_rank, kicker } => write!(
                f,
                "{name} ({} and {}, kicker {})",
                strong_rank.name(),
                weak_rank.name(),
                kicker.name()
            ),
            HandCategory::ThreeOfKind { triplet_rank, kickers } => {
                write!(f, "{name} ({}, kickers {})", triplet_rank.name(), join_names(kickers))
            }
            HandCategory::Straight { best_rank } | HandCategory::StraightFlush { best_rank } => {
                write!(f, "{name} ({} high)", best_rank.name())
            }
            HandCategory::FullHouse { triplet_rank, twin_rank } => {
                write!(f, "{name} ({} over {})", triplet_rank.name(), twin_rank.name())
            }
            HandCategory::FourOfKind { quad_rank, kicker } => {
                write!(f, "{name} ({}, kicker {})", quad_rank.name(), kicker.name())
            }
            HandCategory::RoyalFlush => f.write_str(name),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("not enough cards to classify: {0} (need at least 5)")]
    InsufficientCards(usize),
    #[error("too many cards to classify: {0} (at most 7)")]
    TooManyCards(usize),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

fn validate(cards: &[Card]) -> Result<(), EvalError> {
    match cards.len() {
        n if n < 5 => return Err(EvalError::InsufficientCards(n)),
        n if n > 7 => return Err(EvalError::TooManyCards(n)),
        _ => {}
    }
    find_duplicate(cards).map_or(Ok(()), |c| Err(EvalError::DuplicateCard(c)))
}

/// Classify the best five-card hand among 5 to 7 distinct cards.
///
/// `cards` must already be sorted by rank, highest first; use
/// [`decide_showdown_type_unsorted`] otherwise.
///
/// ```
/// use texas_rs::cards::{parse_cards, Rank};
/// use texas_rs::evaluator::{decide_showdown_type, HandCategory};
///
/// let cards = parse_cards("Spade 11, Diamond 11, Heart 11, Club 9, Spade 9").unwrap();
/// assert_eq!(
///     decide_showdown_type(&cards).unwrap(),
///     HandCategory::FullHouse { triplet_rank: Rank::Jack, twin_rank: Rank::Nine },
/// );
/// ```
pub fn decide_showdown_type(cards: &[Card]) -> Result<HandCategory, EvalError> {
    validate(cards)?;
    classify_sorted(cards).ok_or(EvalError::InsufficientCards(cards.len()))
}

/// Same as [`decide_showdown_type`] for cards in any order.
///
/// ```
/// use texas_rs::cards::parse_cards;
/// use texas_rs::evaluator::{decide_showdown_type_unsorted, Category};
///
/// let cards = parse_cards("H 13, H 14, C 5, S 6, H 12, H 11, H 10").unwrap();
/// let hand = decide_showdown_type_unsorted(&cards).unwrap();
/// assert_eq!(hand.category(), Category::RoyalFlush);
/// ```
pub fn decide_showdown_type_unsorted(cards: &[Card]) -> Result<HandCategory, EvalError> {
    validate(cards)?;
    let mut sorted: ArrayVec<Card, 7> = cards.iter().copied().collect();
    sort_desc(&mut sorted);
    classify_sorted(&sorted).ok_or(EvalError::InsufficientCards(cards.len()))
}

/// Run the detectors in priority order over rank-descending cards.
/// `None` only when fewer than five cards are given.
pub(crate) fn classify_sorted(sorted: &[Card]) -> Option<HandCategory> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(sorted);
    DETECTORS.iter().find_map(|d| d.detect(&analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suite};

    fn classify(s: &str) -> HandCategory {
        decide_showdown_type_unsorted(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn not_enough_cards_errors() {
        let cards = parse_cards("S 14, S 13, S 12, S 11").unwrap();
        assert_eq!(decide_showdown_type(&cards), Err(EvalError::InsufficientCards(4)));
        assert_eq!(decide_showdown_type_unsorted(&[]), Err(EvalError::InsufficientCards(0)));
    }

    #[test]
    fn too_many_and_duplicate_cards_error() {
        let eight = parse_cards("S 2, S 3, S 4, S 5, S 6, S 7, S 8, S 9").unwrap();
        assert_eq!(decide_showdown_type_unsorted(&eight), Err(EvalError::TooManyCards(8)));

        let dup = parse_cards("S 14, S 14, S 12, S 11, S 10").unwrap();
        assert_eq!(
            decide_showdown_type(&dup),
            Err(EvalError::DuplicateCard(Card::new(Suite::Spade, Rank::Ace)))
        );
    }

    #[test]
    fn flush_outranks_straight_and_trips() {
        let h = classify("H 9, S 8, H 7, H 6, H 5, H 2, D 9");
        assert_eq!(h.category(), Category::Flush);
    }

    #[test]
    fn straight_outranks_trips() {
        let h = classify("H 9, S 9, C 9, D 8, H 7, S 6, C 5");
        assert_eq!(h, HandCategory::Straight { best_rank: Rank::Nine });
    }

    #[test]
    fn full_house_from_trips_and_two_pairs_uses_higher_pair() {
        let h = classify("H 5, S 5, C 5, D 8, H 8, S 13, C 13");
        assert_eq!(h, HandCategory::FullHouse { triplet_rank: Rank::Five, twin_rank: Rank::King });
    }

    #[test]
    fn category_order_is_weakest_first() {
        assert!(Category::HighCard < Category::Pair);
        assert!(Category::StraightFlush < Category::RoyalFlush);
        let mut sorted = Category::BEST_TO_WORST;
        sorted.reverse();
        assert!(sorted.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Category::RoyalFlush.ordinal(), 9);
    }

    #[test]
    fn same_category_compares_by_fields() {
        let a = HandCategory::Pair { pair_rank: Rank::Jack, kickers: [Rank::Nine, Rank::Five, Rank::Two] };
        let b = HandCategory::Pair { pair_rank: Rank::Jack, kickers: [Rank::Nine, Rank::Four, Rank::Three] };
        let c = HandCategory::Pair { pair_rank: Rank::Queen, kickers: [Rank::Two, Rank::Three, Rank::Four] };
        assert!(a > b);
        assert!(c > a);
        assert_eq!(HandCategory::RoyalFlush.partial_cmp(&HandCategory::RoyalFlush), Some(Ordering::Equal));
    }

    #[test]
    fn different_categories_are_not_comparable() {
        let pair = HandCategory::Pair { pair_rank: Rank::Ace, kickers: [Rank::King, Rank::Queen, Rank::Jack] };
        let straight = HandCategory::Straight { best_rank: Rank::Five };
        assert_eq!(pair.partial_cmp(&straight), None);
        assert!(!(pair < straight) && !(pair > straight));
    }

    #[test]
    fn display_includes_tiebreak_data() {
        assert_eq!(
            HandCategory::FullHouse { triplet_rank: Rank::Jack, twin_rank: Rank::Nine }.to_string(),
            "Full House (Jack over 9)"
        );
        assert_eq!(HandCategory::Straight { best_rank: Rank::Five }.to_string(), "Straight (5 high)");
        assert_eq!(HandCategory::RoyalFlush.to_string(), "Royal Flush");
    }
}
