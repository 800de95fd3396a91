use crate::cards::{Card, Rank, Suite};
use crate::config::HistogramConfig;
use crate::evaluator::{decide_showdown_type_unsorted, HandCategory};
use crate::hand::{HandError, KnownCards};
use crate::histogram::{histogram_hand_types_with, HandProbability};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Which half of a card the picker is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    PickSuite,
    PickRank,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    PickSuite(Suite),
    PickRank(Rank),
    /// Drop a half-picked card and go back to suite selection.
    Back,
    Clear,
}

type HistogramResult = Result<Vec<HandProbability>, String>;

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    known: KnownCards,
    pending_suite: Option<Suite>,
    hand: Option<HandCategory>,
    histogram: Option<Vec<HandProbability>>,
    job: Option<Receiver<HistogramResult>>,
    /// The cards changed while `job` was running; its result is stale.
    rerun: bool,
    status: String,
    config: HistogramConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(HistogramConfig::from_env())
    }
}

impl AppState {
    /// Below this many cards the enumeration is too large to be interactive.
    pub const MIN_CARDS_FOR_HISTOGRAM: usize = 2;
    pub const MIN_CARDS_FOR_HAND: usize = 5;

    const PICK_SUITE: &'static str = "pick suite of card";
    const PICK_RANK: &'static str = "pick rank of card";

    pub fn new(config: HistogramConfig) -> Self {
        Self {
            scene: Scene::PickSuite,
            known: KnownCards::default(),
            pending_suite: None,
            hand: None,
            histogram: None,
            job: None,
            rerun: false,
            status: Self::PICK_SUITE.to_string(),
            config,
        }
    }

    pub fn cards(&self) -> &[Card] {
        self.known.as_slice()
    }

    pub fn pending_suite(&self) -> Option<Suite> {
        self.pending_suite
    }

    pub fn hand(&self) -> Option<&HandCategory> {
        self.hand.as_ref()
    }

    pub fn histogram(&self) -> Option<&[HandProbability]> {
        self.histogram.as_deref()
    }

    pub fn calculating(&self) -> bool {
        self.job.is_some() && self.known.len() >= Self::MIN_CARDS_FOR_HISTOGRAM
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Apply one input. Returns true if the action was accepted.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match (self.scene, action) {
            (_, InputAction::Clear) => {
                self.reset();
                self.status = "cards reset".to_string();
                true
            }
            (Scene::PickSuite, InputAction::PickSuite(suite)) => {
                if self.known.is_full() {
                    self.reset();
                }
                self.pending_suite = Some(suite);
                self.scene = Scene::PickRank;
                self.status = Self::PICK_RANK.to_string();
                true
            }
            (Scene::PickRank, InputAction::PickRank(rank)) => self.pick_rank(rank),
            (Scene::PickRank, InputAction::Back) => {
                self.pending_suite = None;
                self.scene = Scene::PickSuite;
                self.status = Self::PICK_SUITE.to_string();
                true
            }
            _ => false,
        }
    }

    fn pick_rank(&mut self, rank: Rank) -> bool {
        let Some(suite) = self.pending_suite.take() else {
            return false;
        };
        self.scene = Scene::PickSuite;
        let card = Card::new(suite, rank);
        if let Err(e) = self.known.push(card) {
            self.status = match e {
                HandError::DuplicateCard(c) => format!("{c} is already picked"),
                other => other.to_string(),
            };
            return false;
        }

        self.hand = if self.known.len() >= Self::MIN_CARDS_FOR_HAND {
            decide_showdown_type_unsorted(self.known.as_slice()).ok()
        } else {
            None
        };
        if self.known.len() >= Self::MIN_CARDS_FOR_HISTOGRAM {
            self.request_histogram();
            self.status = "calculating".to_string();
        } else {
            self.status = Self::PICK_SUITE.to_string();
        }
        true
    }

    /// At most one job runs at a time. A request while one is running is
    /// queued and served with the cards current when that job finishes.
    fn request_histogram(&mut self) {
        if self.job.is_some() {
            self.rerun = true;
            return;
        }
        let (tx, rx) = mpsc::channel();
        let cards = self.known.as_slice().to_vec();
        let config = self.config;
        thread::spawn(move || {
            let result = histogram_hand_types_with(&cards, &config).map_err(|e| e.to_string());
            let _ = tx.send(result);
        });
        self.job = Some(rx);
    }

    /// Pick up a finished background histogram. Returns true when the state changed.
    pub fn poll_histogram(&mut self) -> bool {
        let Some(rx) = self.job.as_ref() else {
            return false;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.finish_job(result);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.finish_job(Err("calculation failed".to_string()));
                true
            }
        }
    }

    /// Block until the histogram for the current cards (if any) is done.
    pub fn wait_for_histogram(&mut self) {
        while let Some(rx) = self.job.as_ref() {
            let result = rx.recv().unwrap_or_else(|_| Err("calculation failed".to_string()));
            self.finish_job(result);
        }
    }

    fn finish_job(&mut self, result: HistogramResult) {
        self.job = None;
        if std::mem::take(&mut self.rerun) {
            if self.known.len() >= Self::MIN_CARDS_FOR_HISTOGRAM {
                self.request_histogram();
            }
            return;
        }
        match result {
            Ok(rows) => {
                self.histogram = Some(rows);
                self.status = if self.known.is_full() {
                    "you picked 7 cards, the next card starts a new hand".to_string()
                } else {
                    Self::PICK_SUITE.to_string()
                };
            }
            Err(e) => self.status = e,
        }
    }

    fn reset(&mut self) {
        self.scene = Scene::PickSuite;
        self.known.clear();
        self.pending_suite = None;
        self.hand = None;
        self.histogram = None;
        // a running job is left to finish and its result dropped
        self.rerun = self.job.is_some();
        self.status = Self::PICK_SUITE.to_string();
    }
}
