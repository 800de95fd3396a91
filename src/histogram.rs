//! Exact distribution of final hand categories given some known cards.
//!
//! Every completion of the unseen deck up to seven cards is classified once.
//! Completions are enumerated lazily by lexicographic rank and split into
//! chunks that a bounded rayon pool works through; each worker keeps its own
//! [`Tally`] and the tallies are merged when the workers finish.

use crate::cards::{sort_desc, Card};
use crate::config::HistogramConfig;
use crate::deck::remaining_deck;
use crate::evaluator::combinations::{binomial, Combinations};
use crate::evaluator::{classify_sorted, Category};
use crate::hand::{HandError, MAX_KNOWN};
use arrayvec::ArrayVec;
use rayon::prelude::*;
use std::fmt::Write as _;
use std::time::Instant;

/// One row of a histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandProbability {
    pub category: Category,
    pub count: u64,
    pub probability: f64,
    /// Probability of ending with this category or a better one.
    pub cumulative_probability: f64,
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum HistogramError {
    #[error("invalid known cards: {0}")]
    InvalidKnownCards(#[from] HandError),
    #[error("cannot start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Per-category counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally([u64; Category::COUNT]);

impl Tally {
    pub fn add(&mut self, category: Category) {
        self.0[category.ordinal() as usize] += 1;
    }

    pub fn count(&self, category: Category) -> u64 {
        self.0[category.ordinal() as usize]
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    pub fn merge(mut self, other: Tally) -> Tally {
        for (mine, theirs) in self.0.iter_mut().zip(other.0) {
            *mine += theirs;
        }
        self
    }

    /// Rows best to worst, accumulating probability from the best category down.
    pub fn probabilities(&self) -> Vec<HandProbability> {
        let total = self.total();
        let mut cumulative = 0.0;
        Category::BEST_TO_WORST
            .iter()
            .map(|&category| {
                let count = self.count(category);
                let probability = if total == 0 { 0.0 } else { count as f64 / total as f64 };
                cumulative += probability;
                HandProbability { category, count, probability, cumulative_probability: cumulative }
            })
            .collect()
    }
}

/// [`histogram_hand_types_with`] using [`HistogramConfig::from_env`].
///
/// ```no_run
/// use texas_rs::cards::parse_cards;
/// use texas_rs::histogram::histogram_hand_types;
///
/// let hole = parse_cards("Heart 13, Heart 14").unwrap();
/// let rows = histogram_hand_types(&hole).unwrap();
/// assert_eq!(rows.iter().map(|r| r.count).sum::<u64>(), 2_118_760);
/// ```
pub fn histogram_hand_types(known: &[Card]) -> Result<Vec<HandProbability>, HistogramError> {
    histogram_hand_types_with(known, &HistogramConfig::from_env())
}

/// Classify every completion of `known` (0 to 7 distinct cards) to seven cards
/// and return ten rows, one per category, best to worst.
///
/// ```
/// use texas_rs::cards::parse_cards;
/// use texas_rs::config::HistogramConfig;
/// use texas_rs::evaluator::Category;
/// use texas_rs::histogram::histogram_hand_types_with;
///
/// let known = parse_cards("S 14, S 13, S 12, S 11, H 2, D 7").unwrap();
/// let rows = histogram_hand_types_with(&known, &HistogramConfig::default()).unwrap();
/// assert_eq!(rows[0].category, Category::RoyalFlush);
/// assert_eq!(rows[0].count, 1); // only the Spade 10 completes it
/// assert_eq!(rows.iter().map(|r| r.count).sum::<u64>(), 46);
/// ```
pub fn histogram_hand_types_with(
    known: &[Card],
    config: &HistogramConfig,
) -> Result<Vec<HandProbability>, HistogramError> {
    Ok(tally_completions(known, config)?.probabilities())
}

/// Count the category of every completion of `known` on a pool of `config.workers` threads.
pub fn tally_completions(known: &[Card], config: &HistogramConfig) -> Result<Tally, HistogramError> {
    let remaining = remaining_deck(known)?;
    let left_to_show = MAX_KNOWN - known.len();
    let total = binomial(remaining.len(), left_to_show);
    let chunk = config.chunk_size.max(1) as u64;
    let chunks = (total + chunk - 1) / chunk;

    let pool = rayon::ThreadPoolBuilder::new().num_threads(config.workers.max(1)).build()?;
    log::debug!(
        "enumerating {total} completions of {} known cards: {chunks} chunks of {chunk} on {} workers",
        known.len(),
        pool.current_num_threads(),
    );

    let started = Instant::now();
    let tally = pool.install(|| {
        (0..chunks)
            .into_par_iter()
            .fold(Tally::default, |mut tally, i| {
                let start = i * chunk;
                let len = chunk.min(total - start) as usize;
                for combo in Combinations::starting_at(remaining.len(), left_to_show, start).take(len) {
                    if let Some(category) = classify_completion(known, &remaining, &combo) {
                        tally.add(category);
                    }
                }
                tally
            })
            .reduce(Tally::default, Tally::merge)
    });
    log::info!("classified {} completions in {:.2?}", tally.total(), started.elapsed());
    Ok(tally)
}

/// Build `known` plus the chosen unseen cards on the stack and classify it.
fn classify_completion(known: &[Card], unseen: &[Card], combo: &[usize]) -> Option<Category> {
    let mut hand: ArrayVec<Card, MAX_KNOWN> =
        known.iter().copied().chain(combo.iter().map(|&i| unseen[i])).take(MAX_KNOWN).collect();
    sort_desc(&mut hand);
    classify_sorted(&hand).map(|h| h.category())
}

/// Render rows as `"<Category>: <p>%, acc: <cumulative>%"`, one per line.
///
/// ```
/// use texas_rs::evaluator::Category;
/// use texas_rs::histogram::{format_histogram, HandProbability};
///
/// let row = HandProbability {
///     category: Category::RoyalFlush,
///     count: 1084,
///     probability: 0.000_511_6,
///     cumulative_probability: 0.000_511_6,
/// };
/// assert_eq!(format_histogram(&[row]), "Royal Flush: 0.05%, acc: 0.05%\n");
/// ```
pub fn format_histogram(rows: &[HandProbability]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{}: {:.2}%, acc: {:.2}%",
            row.category,
            row.probability * 100.0,
            row.cumulative_probability * 100.0
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::decide_showdown_type_unsorted;

    fn config(workers: usize, chunk_size: usize) -> HistogramConfig {
        HistogramConfig::default().with_workers(workers).with_chunk_size(chunk_size)
    }

    #[test]
    fn seven_known_cards_have_one_completion() {
        let known = parse_cards("H 13, H 14, C 5, S 6, H 12, H 11, H 10").unwrap();
        let tally = tally_completions(&known, &config(2, 8)).unwrap();
        assert_eq!(tally.total(), 1);
        assert_eq!(tally.count(Category::RoyalFlush), 1);
    }

    #[test]
    fn matches_sequential_classification() {
        let known = parse_cards("S 9, H 9, D 4, C 13, S 2").unwrap();
        let unseen = remaining_deck(&known).unwrap();
        let mut expected = Tally::default();
        for i in 0..unseen.len() {
            for j in (i + 1)..unseen.len() {
                let mut hand = known.clone();
                hand.extend([unseen[i], unseen[j]]);
                expected.add(decide_showdown_type_unsorted(&hand).unwrap().category());
            }
        }
        assert_eq!(expected.total(), binomial(47, 2));

        for (workers, chunk) in [(1, 1), (3, 7), (4, 4096)] {
            assert_eq!(tally_completions(&known, &config(workers, chunk)).unwrap(), expected);
        }
    }

    #[test]
    fn rows_are_best_to_worst_and_accumulate() {
        let known = parse_cards("S 9, H 9, D 4, C 13").unwrap();
        let rows = histogram_hand_types_with(&known, &config(2, 64)).unwrap();
        assert_eq!(rows.len(), Category::COUNT);
        let order: Vec<Category> = rows.iter().map(|r| r.category).collect();
        assert_eq!(order, Category::BEST_TO_WORST.to_vec());
        assert_eq!(rows.iter().map(|r| r.count).sum::<u64>(), binomial(48, 3));
        assert!((rows[0].cumulative_probability - rows[0].probability).abs() < 1e-12);
        assert!(rows.windows(2).all(|w| w[1].cumulative_probability >= w[0].cumulative_probability));
        assert!((rows[9].cumulative_probability - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_invalid_known_cards() {
        let dup = parse_cards("S 9, S 9").unwrap();
        assert!(matches!(
            tally_completions(&dup, &HistogramConfig::default()),
            Err(HistogramError::InvalidKnownCards(HandError::DuplicateCard(_)))
        ));
        let eight = parse_cards("S 2, S 3, S 4, S 5, S 6, S 7, S 8, S 9").unwrap();
        assert!(matches!(
            tally_completions(&eight, &HistogramConfig::default()),
            Err(HistogramError::InvalidKnownCards(HandError::TooManyCards(8)))
        ));
    }

    #[test]
    fn empty_tally_has_zero_probabilities() {
        let rows = Tally::default().probabilities();
        assert!(rows.iter().all(|r| r.probability == 0.0 && r.cumulative_probability == 0.0));
    }

    #[test]
    fn format_has_one_line_per_row() {
        let mut tally = Tally::default();
        tally.add(Category::Pair);
        tally.add(Category::HighCard);
        let text = format_histogram(&tally.probabilities());
        assert_eq!(text.lines().count(), 10);
        assert!(text.contains("Pair: 50.00%, acc: 50.00%\n"));
        assert!(text.ends_with("High Card: 50.00%, acc: 100.00%\n"));
    }
}
