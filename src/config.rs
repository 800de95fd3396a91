//! Tuning knobs for the histogram worker pool.
//!
//! Values come from, in increasing priority: built-in defaults, the
//! `TEXAS_WORKERS` / `TEXAS_CHUNK_SIZE` environment variables, and whatever
//! the caller sets with the `with_*` builders (the CLI maps its flags there).

use std::env;

pub const WORKERS_ENV: &str = "TEXAS_WORKERS";
pub const CHUNK_SIZE_ENV: &str = "TEXAS_CHUNK_SIZE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramConfig {
    /// Threads in the pool.
    pub workers: usize,
    /// Combinations per unit of work handed to a thread.
    pub chunk_size: usize,
}

impl HistogramConfig {
    pub const DEFAULT_CHUNK_SIZE: usize = 4096;

    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(workers) = env_positive(WORKERS_ENV) {
            config.workers = workers;
        }
        if let Some(chunk_size) = env_positive(CHUNK_SIZE_ENV) {
            config.chunk_size = chunk_size;
        }
        config
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self { workers: num_cpus::get().max(1), chunk_size: Self::DEFAULT_CHUNK_SIZE }
    }
}

fn env_positive(key: &str) -> Option<usize> {
    let raw = env::var(key).ok()?;
    let parsed = parse_positive(&raw);
    if parsed.is_none() {
        log::warn!("ignoring {key}={raw:?}: expected a positive integer");
    }
    parsed
}

fn parse_positive(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let c = HistogramConfig::default();
        assert!(c.workers >= 1);
        assert_eq!(c.chunk_size, HistogramConfig::DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn builders_clamp_to_one() {
        let c = HistogramConfig::default().with_workers(0).with_chunk_size(0);
        assert_eq!(c.workers, 1);
        assert_eq!(c.chunk_size, 1);
        assert_eq!(HistogramConfig::default().with_workers(3).workers, 3);
    }

    #[test]
    fn parse_positive_rejects_junk() {
        assert_eq!(parse_positive(" 8 "), Some(8));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-2"), None);
        assert_eq!(parse_positive("many"), None);
    }
}
