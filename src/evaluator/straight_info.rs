use crate::cards::{Card, Rank};

/// Length of a straight.
const STRAIGHT_LEN: usize = 5;

/// Find the highest straight in `cards`, returning its top rank.
///
/// `cards` must be sorted by rank, highest first. The scan walks down keeping a
/// run of consecutive ranks: a step of one extends the run, a repeated rank is
/// skipped, a larger gap starts a new run at the current card. The first run to
/// reach five is the highest straight. A run of four ending on a Two is
/// completed by an Ace anywhere in the hand (the wheel, top rank Five).
pub fn find_straight(cards: &[Card]) -> Option<Rank> {
    let (first, rest) = cards.split_first()?;
    let mut cursor = first.rank();
    let mut top = cursor;
    let mut run = 1;

    for card in rest {
        let (prev, next) = (cursor.value(), card.rank().value());
        if next + 1 == prev {
            cursor = card.rank();
            run += 1;
            if run == STRAIGHT_LEN {
                return Some(top);
            }
        } else if next + 1 < prev {
            cursor = card.rank();
            top = cursor;
            run = 1;
        }
    }

    let wheel = cursor == Rank::Two
        && run == STRAIGHT_LEN - 1
        && cards.iter().any(|c| c.rank() == Rank::Ace);
    wheel.then_some(top)
}
