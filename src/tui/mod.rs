//! Interactive card picker: choose a suite, then a rank, up to seven cards.
//! The probability table refreshes after every card from the second one on.

pub mod app;
pub mod controller;
pub mod ui;
