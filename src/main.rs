use anyhow::Result;
use clap::Parser;
use log::info;

use hilo::core::{DEFAULT_MAX, DEFAULT_MIN};
use hilo::{ConsoleIo, GameConfig, GameError, GameIo, GameRng, GameSession, Player};

/// Guess your secret number. Alone or taking turns with a friend.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Lowest possible secret number
    #[arg(long, default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
    min: i32,

    /// Highest possible secret number
    #[arg(long, default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
    max: i32,

    /// Seed for the secret numbers, to replay a match
    #[arg(long)]
    seed: Option<u64>,
}

fn play<I: GameIo>(session: &mut GameSession, io: &mut I) -> Result<(), GameError> {
    loop {
        session.welcome(io)?;
        let summary = session.run_turn_loop(io)?;
        info!("Match over, {} total attempts", summary.total_attempts());

        if !session.end_session(io)? {
            return Ok(());
        }
        session.reset(Player::new());
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = GameConfig::new(args.min, args.max)?;
    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!("Using seed {} (pass --seed {} to replay)", rng.seed(), rng.seed());

    let mut session = GameSession::new(config, Player::new(), rng);
    let mut io = ConsoleIo::stdio();

    match play(&mut session, &mut io) {
        Err(GameError::InputClosed) => {
            info!("Input closed, exiting");
            Ok(())
        }
        other => Ok(other?),
    }
}
