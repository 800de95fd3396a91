use crate::cards::{Card, Rank, Suite};
use crate::hand::{validate_known, HandError};

/// A standard 52-card deck in a fixed order (by rank, then suite).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use texas_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &r in &Rank::ALL {
            for &s in &Suite::ALL {
                cards.push(Card::new(s, r));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Drop every card that is in `known`, keeping the deck order.
    pub fn without(mut self, known: &[Card]) -> Self {
        self.cards.retain(|c| !known.contains(c));
        self
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// The unseen cards: the full deck minus `known`.
///
/// ```
/// use texas_rs::cards::parse_cards;
/// use texas_rs::deck::remaining_deck;
///
/// let known = parse_cards("Heart 13, Heart 14").unwrap();
/// assert_eq!(remaining_deck(&known).unwrap().len(), 50);
/// ```
pub fn remaining_deck(known: &[Card]) -> Result<Vec<Card>, HandError> {
    validate_known(known)?;
    Ok(Deck::standard().without(known).into_cards())
}
