//! Text driver for the rat-screw engine.
//!
//! Reads one command per line from stdin and prints the table after each
//! action. Type `help` for the command list.

use std::io::{self, BufRead, Write};

use clap::Parser;
use rat_screw::{Command, InputBindings, Manager, Outcome, PlayerAction, TableConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rat_screw")]
#[command(about = "Play Egyptian Rat Screw from the terminal")]
struct Args {
    /// Number of players
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Standard decks shuffled together
    #[arg(short, long, default_value = "1")]
    decks: usize,

    /// Shuffle seed for a reproducible deal
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

const HELP: &str = "\
commands:
  play <id> | p <id>       play your top card
  slap <id> | s <id>       slap the pile
  reset [players] [decks]  deal a new game
  status                   show the table
  quit | q                 leave";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise quiet unless --verbose
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = TableConfig {
        player_count: args.players,
        deck_count: args.decks,
        seed: args.seed,
    };
    let mut table = Manager::new(config)?;
    let bindings = InputBindings::two_player();
    info!(players = args.players, decks = args.decks, "table ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{HELP}")?;
    for (key, action) in bindings.bound() {
        writeln!(out, "  {key}  {action}")?;
    }
    print_status(&mut out, &table)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case("help") {
            writeln!(out, "{HELP}")?;
            continue;
        }

        let command = match Command::parse(&line, &bindings) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Status => print_status(&mut out, &table)?,
            Command::Reset { players, decks } => match table.reset(players, decks) {
                Ok(()) => print_status(&mut out, &table)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Action(action) => {
                let outcome = match table.apply(action) {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        warn!(%err, "action rejected");
                        writeln!(out, "{err}")?;
                        continue;
                    }
                };
                print_outcome(&mut out, &table, action, outcome)?;
                print_status(&mut out, &table)?;

                if let Some(result) = table.result() {
                    writeln!(out, "Game over: {result:?}. Type 'reset' to play again.")?;
                }
            }
        }
    }

    Ok(())
}

fn print_outcome(
    out: &mut impl Write,
    table: &Manager,
    action: PlayerAction,
    outcome: Outcome,
) -> io::Result<()> {
    let player = action.player();
    match (action, outcome) {
        (_, Outcome::Normal) => Ok(()),
        (PlayerAction::Play(_), Outcome::Penalty) => {
            writeln!(out, "Playing out of turn. {player} burns a card.")
        }
        (PlayerAction::Slap(_), Outcome::Penalty) => {
            writeln!(out, "Illegal slap. {player} burns a card.")
        }
        (_, Outcome::PileTaken) => {
            let rule = table
                .last_action()
                .and_then(|record| record.rule)
                .map_or_else(String::new, |rule| format!(" ({rule})"));
            writeln!(out, "{player} takes the pile!{rule}")
        }
    }
}

fn print_status(out: &mut impl Write, table: &Manager) -> io::Result<()> {
    if let Some(card) = table.top_of_pile() {
        writeln!(out, "Top of pile: {card} ({} cards, {} burned)", table.pile_size(), table.burn_size())?;
    }
    for (player, count) in table.hand_sizes().iter() {
        writeln!(out, "{player} has {count} cards")?;
    }
    writeln!(out, "{} to play.", table.turn())
}
