use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
///
/// The derived order is for sorting only; hand strength is decided by
/// category first (see [`crate::evaluator`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a numeric value in `2..=14`.
    pub const fn from_value(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    /// Human readable label: numbers up to ten, then the face names.
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

/// Renders the numeric token (`2`..`14`), which is what [`Rank::from_str`] accepts back.
impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => s
                .parse::<u8>()
                .ok()
                .and_then(Rank::from_value)
                .ok_or_else(|| RankParseError::Invalid(s.to_string())),
        }
    }
}

/// Four suites. Only "same suite" grouping matters for hand value; the
/// derived order exists so cards can live in ordered collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suite {
    Diamond,
    Club,
    Heart,
    Spade,
}

impl Suite {
    pub const ALL: [Suite; 4] = [Suite::Diamond, Suite::Club, Suite::Heart, Suite::Spade];

    pub const fn name(self) -> &'static str {
        match self {
            Suite::Diamond => "Diamond",
            Suite::Club => "Club",
            Suite::Heart => "Heart",
            Suite::Spade => "Spade",
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suite::Diamond => '♦',
            Suite::Club => '♣',
            Suite::Heart => '♥',
            Suite::Spade => '♠',
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuiteParseError {
    #[error("invalid suite: '{0}'")]
    Invalid(String),
}

impl FromStr for Suite {
    type Err = SuiteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Diamond" | "D" => Ok(Suite::Diamond),
            "Club" | "C" => Ok(Suite::Club),
            "Heart" | "H" => Ok(Suite::Heart),
            "Spade" | "S" => Ok(Suite::Spade),
            _ => Err(SuiteParseError::Invalid(s.to_string())),
        }
    }
}

/// A playing card: suite + rank.
///
/// ```
/// use texas_rs::cards::{Card, Rank, Suite};
///
/// let card: Card = "H J".parse().unwrap();
/// assert_eq!(card, Card::new(Suite::Heart, Rank::Jack));
/// assert_eq!(card.to_string(), "Heart 11");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suite: Suite,
    rank: Rank,
}

impl Card {
    pub const fn new(suite: Suite, rank: Rank) -> Self {
        Self { suite, rank }
    }

    pub const fn suite(self) -> Suite {
        self.suite
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suite, self.rank)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card token: '{0}'")]
    InvalidCardToken(String),
}

impl From<RankParseError> for CardParseError {
    fn from(e: RankParseError) -> Self {
        match e {
            RankParseError::Invalid(t) => CardParseError::InvalidCardToken(t),
        }
    }
}

impl From<SuiteParseError> for CardParseError {
    fn from(e: SuiteParseError) -> Self {
        match e {
            SuiteParseError::Invalid(t) => CardParseError::InvalidCardToken(t),
        }
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (Some(suite), Some(rank), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(CardParseError::InvalidCardToken(s.to_string()));
        };
        Ok(Card::new(suite.parse()?, rank.parse()?))
    }
}

/// Parse a comma separated list of cards, e.g. `"Heart 13, Heart A"`.
///
/// ```
/// use texas_rs::cards::{parse_cards, Card, Rank, Suite};
///
/// let cards = parse_cards("Heart 13, S A").unwrap();
/// assert_eq!(cards, vec![
///     Card::new(Suite::Heart, Rank::King),
///     Card::new(Suite::Spade, Rank::Ace),
/// ]);
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input.split(',').map(str::trim).filter(|s| !s.is_empty()).map(Card::from_str).collect()
}

/// Sort cards by rank, highest first. Stable, so equal ranks keep their order.
pub fn sort_desc(cards: &mut [Card]) {
    cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "14");
        assert_eq!(Rank::from_str("A").unwrap(), Rank::Ace);
        assert_eq!(Rank::from_str("14").unwrap(), Rank::Ace);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert!(Rank::from_str("1").is_err());
        assert!(Rank::from_str("15").is_err());
        assert!(Rank::from_str("T").is_err());
    }

    #[test]
    fn suite_display_and_from_str() {
        assert_eq!(Suite::Spade.to_string(), "Spade");
        assert_eq!(Suite::from_str("S").unwrap(), Suite::Spade);
        assert_eq!(Suite::from_str("Heart").unwrap(), Suite::Heart);
        assert!(Suite::from_str("x").is_err());
        assert!(Suite::from_str("spades").is_err());
    }

    #[test]
    fn card_display_and_from_str() {
        let a = Card::new(Suite::Spade, Rank::Ace);
        assert_eq!(a.to_string(), "Spade 14");
        assert_eq!(Card::from_str("Spade 14").unwrap(), a);
        assert_eq!(Card::from_str("S A").unwrap(), a);
        assert_eq!(Card::from_str("Diamond 10").unwrap(), Card::new(Suite::Diamond, Rank::Ten));
    }

    #[test]
    fn card_rejects_malformed_tokens() {
        for bad in ["", "Spade", "Spade 14 extra", "X 10", "Heart 1", "Heart Z"] {
            assert!(
                matches!(Card::from_str(bad), Err(CardParseError::InvalidCardToken(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn sort_desc_orders_by_rank_only() {
        let mut xs = parse_cards("C 2, S A, D 9, H A").unwrap();
        sort_desc(&mut xs);
        let ranks: Vec<Rank> = xs.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::Ace, Rank::Nine, Rank::Two]);
        assert_eq!(xs[0].suite(), Suite::Spade);
    }

    #[test]
    fn parse_many_cards() {
        let xs = parse_cards(" Heart 13 ,Heart 14,").unwrap();
        assert_eq!(xs.len(), 2);
        assert_eq!(xs[1], Card::new(Suite::Heart, Rank::Ace));
        assert!(parse_cards("Heart 13, Moon 3").is_err());
    }
}
