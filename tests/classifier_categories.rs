use texas_rs::cards::{parse_cards, Rank};
use texas_rs::evaluator::{decide_showdown_type, decide_showdown_type_unsorted, Category, HandCategory};

use Rank::*;

fn classify(s: &str) -> HandCategory {
    decide_showdown_type(&parse_cards(s).unwrap()).unwrap()
}

fn classify_unsorted(s: &str) -> HandCategory {
    decide_showdown_type_unsorted(&parse_cards(s).unwrap()).unwrap()
}

#[test]
fn category_royal_flush() {
    assert_eq!(classify("Spade 14, Spade 13, Spade 12, Spade 11, Spade 10"), HandCategory::RoyalFlush);
    // any suite will do
    assert_eq!(classify("Diamond 14, Diamond 13, Diamond 12, Diamond 11, Diamond 10"), HandCategory::RoyalFlush);
}

#[test]
fn category_straight_flush() {
    assert_eq!(
        classify("Spade 13, Spade 12, Spade 11, Spade 10, Spade 9"),
        HandCategory::StraightFlush { best_rank: King }
    );
}

#[test]
fn category_four_of_a_kind() {
    assert_eq!(
        classify("Spade 11, Diamond 11, Heart 11, Club 11, Spade 9"),
        HandCategory::FourOfKind { quad_rank: Jack, kicker: Nine }
    );
}

#[test]
fn category_full_house() {
    let hand = classify("Spade 11, Diamond 11, Heart 11, Club 9, Spade 9");
    assert_eq!(hand, HandCategory::FullHouse { triplet_rank: Jack, twin_rank: Nine });
    assert_eq!(hand.to_string(), "Full House (Jack over 9)");
}

#[test]
fn category_flush() {
    assert_eq!(
        classify("Spade 11, Spade 7, Spade 6, Spade 5, Spade 4"),
        HandCategory::Flush { ranks: [Jack, Seven, Six, Five, Four] }
    );
}

#[test]
fn category_straight() {
    assert_eq!(
        classify("Heart 8, Spade 7, Spade 6, Spade 5, Spade 4"),
        HandCategory::Straight { best_rank: Eight }
    );
}

#[test]
fn wheel_is_five_high() {
    // the ace sorts first but plays low
    let hand = classify("Heart 14, Spade 5, Spade 4, Spade 3, Spade 2");
    assert_eq!(hand, HandCategory::Straight { best_rank: Five });
    assert_eq!(hand.to_string(), "Straight (5 high)");
}

#[test]
fn category_three_of_a_kind() {
    assert_eq!(
        classify("Spade 11, Diamond 11, Heart 11, Club 9, Spade 8"),
        HandCategory::ThreeOfKind { triplet_rank: Jack, kickers: [Nine, Eight] }
    );
}

#[test]
fn category_two_pair() {
    assert_eq!(
        classify("Spade 11, Diamond 11, Heart 8, Club 8, Spade 3"),
        HandCategory::TwoPair { strong_rank: Jack, weak_rank: Eight, kicker: Three }
    );
}

#[test]
fn category_pair() {
    assert_eq!(
        classify("Spade 11, Diamond 11, Heart 7, Club 5, Spade 3"),
        HandCategory::Pair { pair_rank: Jack, kickers: [Seven, Five, Three] }
    );
}

#[test]
fn category_high_card() {
    assert_eq!(
        classify("Spade 11, Diamond 10, Heart 7, Club 5, Spade 3"),
        HandCategory::HighCard { ranks: [Jack, Ten, Seven, Five, Three] }
    );
}

#[test]
fn seven_card_royal_flush_unsorted() {
    let hand = classify_unsorted("Heart 13, Heart 14, Club 5, Spade 6, Heart 12, Heart 11, Heart 10");
    assert_eq!(hand, HandCategory::RoyalFlush);
}

#[test]
fn seven_card_straight_flush_unsorted() {
    let hand = classify_unsorted("Heart 4, Heart 3, Heart 5, Heart 6, Heart 7, Heart 8, Club 11");
    assert_eq!(hand, HandCategory::StraightFlush { best_rank: Eight });
}

#[test]
fn seven_cards_with_three_pairs_keep_best_two() {
    let hand = classify_unsorted("Club 4, Heart 9, Spade 4, Diamond 9, Club 13, Heart 2, Spade 2");
    assert_eq!(hand, HandCategory::TwoPair { strong_rank: Nine, weak_rank: Four, kicker: King });
}

#[test]
fn seven_cards_with_two_triplets_make_full_house() {
    let hand = classify_unsorted("Club 6, Heart 6, Spade 6, Club 10, Heart 10, Spade 10, Diamond 2");
    assert_eq!(hand, HandCategory::FullHouse { triplet_rank: Ten, twin_rank: Six });
}

#[test]
fn six_card_straight_uses_top_five() {
    let hand = classify_unsorted("Club 9, Heart 8, Spade 7, Diamond 6, Club 5, Heart 4");
    assert_eq!(hand, HandCategory::Straight { best_rank: Nine });
}

#[test]
fn quads_kicker_is_best_remaining_card() {
    let hand = classify_unsorted("Club 7, Heart 7, Spade 7, Diamond 7, Club 13, Heart 13, Spade 13");
    assert_eq!(hand, HandCategory::FourOfKind { quad_rank: Seven, kicker: King });
}

#[test]
fn category_names() {
    let names: Vec<&str> = Category::BEST_TO_WORST.iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        [
            "Royal Flush",
            "Straight Flush",
            "Four of a Kind",
            "Full House",
            "Flush",
            "Straight",
            "Three of a Kind",
            "Two Pair",
            "Pair",
            "High Card"
        ]
    );
}
