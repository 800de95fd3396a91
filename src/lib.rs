//! texas-rs: Texas Hold'em hand classification and outcome histograms
//!
//! Goals:
//! - Classify the best five-card hand among 5 to 7 cards, with tie-break data
//! - Exact probability of each final category given the cards seen so far
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: classify a hand
//! ```
//! use texas_rs::cards::{parse_cards, Rank};
//! use texas_rs::evaluator::{decide_showdown_type_unsorted, HandCategory};
//!
//! let cards = parse_cards("Heart 14, Spade 5, Spade 4, Spade 3, Spade 2").unwrap();
//! let hand = decide_showdown_type_unsorted(&cards).unwrap();
//! assert_eq!(hand, HandCategory::Straight { best_rank: Rank::Five });
//! ```
//!
//! ## Quick start: histogram
//! ```no_run
//! use texas_rs::cards::parse_cards;
//! use texas_rs::histogram::{format_histogram, histogram_hand_types};
//!
//! let known = parse_cards("Heart 13, Heart 14").unwrap();
//! let rows = histogram_hand_types(&known).unwrap();
//! print!("{}", format_histogram(&rows));
//! ```
//!
//! ## TUI
//! Run the interactive card picker with:
//! ```sh
//! cargo run --bin texas-rs -- play
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod histogram;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
