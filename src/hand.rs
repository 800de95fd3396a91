use crate::cards::{parse_cards, Card, CardParseError};
use std::collections::HashSet;
use std::str::FromStr;

/// Most cards a Hold'em player can ever see: two hole cards and five on the board.
pub const MAX_KNOWN: usize = 7;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("too many known cards: {0} (at most 7)")]
    TooManyCards(usize),
    #[error(transparent)]
    CardParse(#[from] CardParseError),
}

/// The cards a player already knows (hole cards plus whatever board is out).
///
/// Holds 0..=7 distinct cards in the order they were given.
///
/// ```
/// use texas_rs::hand::KnownCards;
///
/// let known: KnownCards = "Heart 13, Heart 14".parse().unwrap();
/// assert_eq!(known.len(), 2);
/// assert_eq!(known.left_to_show(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownCards {
    cards: Vec<Card>,
}

impl KnownCards {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        validate_known(&cards)?;
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() == MAX_KNOWN
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Number of cards still to be revealed before the hand is complete.
    pub fn left_to_show(&self) -> usize {
        MAX_KNOWN - self.cards.len()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Add one more card, rejecting duplicates and an eighth card.
    pub fn push(&mut self, card: Card) -> Result<(), HandError> {
        if self.is_full() {
            return Err(HandError::TooManyCards(self.cards.len() + 1));
        }
        if self.contains(card) {
            return Err(HandError::DuplicateCard(card));
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromStr for KnownCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KnownCards::try_new(parse_cards(s)?)
    }
}

/// Check that `cards` can be a known set: at most seven, no card twice.
pub fn validate_known(cards: &[Card]) -> Result<(), HandError> {
    if cards.len() > MAX_KNOWN {
        return Err(HandError::TooManyCards(cards.len()));
    }
    find_duplicate(cards).map_or(Ok(()), |c| Err(HandError::DuplicateCard(c)))
}

/// First card that appears a second time, if any.
pub(crate) fn find_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().copied().find(|c| !seen.insert(*c))
}
