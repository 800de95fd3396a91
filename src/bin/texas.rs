use anyhow::Context;
use clap::{Parser, Subcommand};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;
use texas_rs::cards::parse_cards;
use texas_rs::config::HistogramConfig;
use texas_rs::evaluator::decide_showdown_type_unsorted;
use texas_rs::histogram::{format_histogram, histogram_hand_types_with};
use texas_rs::tui::{app::AppState, controller};

#[derive(Parser, Debug)]
#[command(name = "texas-rs", version, about = "Texas Hold'em hand classifier and outcome histogram")]
struct Cli {
    /// Raise log level (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify 5 to 7 cards, e.g. "Spade 14, Spade 13, Heart 2, Club 2, Diamond 9"
    Classify { cards: String },
    /// Probability of each final hand category given 0 to 7 known cards
    Hist {
        /// Comma separated cards; empty for a blank hand
        #[arg(default_value = "")]
        cards: String,
        #[arg(long)]
        workers: Option<usize>,
        #[arg(long)]
        chunk_size: Option<usize>,
    },
    /// Interactive card picker
    Play,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn play(config: HistogramConfig) -> anyhow::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "texas-rs play requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            texas_rs::VERSION
        );
        return Ok(());
    }
    let mut terminal = setup_terminal().context("cannot set up terminal")?;
    let mut app = AppState::new(config);

    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(100));

    // Always attempt to restore terminal
    restore_terminal(terminal).context("cannot restore terminal")?;
    res.context("terminal loop failed")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Classify { cards } => {
            init_logging(cli.verbose);
            let cards = parse_cards(&cards).with_context(|| format!("cannot parse cards {cards:?}"))?;
            let hand = decide_showdown_type_unsorted(&cards)?;
            println!("{hand}");
        }
        Command::Hist { cards, workers, chunk_size } => {
            init_logging(cli.verbose);
            let known = parse_cards(&cards).with_context(|| format!("cannot parse cards {cards:?}"))?;
            let mut config = HistogramConfig::from_env();
            if let Some(workers) = workers {
                config = config.with_workers(workers);
            }
            if let Some(chunk_size) = chunk_size {
                config = config.with_chunk_size(chunk_size);
            }
            let rows = histogram_hand_types_with(&known, &config)?;
            print!("{}", format_histogram(&rows));
        }
        Command::Play => play(HistogramConfig::from_env())?,
    }
    Ok(())
}
