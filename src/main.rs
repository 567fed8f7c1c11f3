use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    init_logging, AiPlayer, CliPlayer, ConsoleReporter, Game, GameConfig, NullReporter, Player,
    PlayerKind, DEFAULT_BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on this console.
    Play {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE as u16,
              value_parser = clap::value_parser!(u16).range(1..=26))]
        size: u16,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = PlayerKind::Human, help = "Who sits in the first seat")]
        player: PlayerKind,
    },
    /// Let two computer players fight and print a JSON summary.
    Sim {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE as u16,
              value_parser = clap::value_parser!(u16).range(1..=26))]
        size: u16,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { size, seed, player } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let first: Box<dyn Player> = match player {
                PlayerKind::Human => Box::new(CliPlayer::stdio()),
                PlayerKind::Ai => Box::new(AiPlayer::named("Computer 1")),
            };
            let config = GameConfig::with_board_size(size as usize);
            let mut game = Game::new(
                &config,
                [first, Box::new(AiPlayer::new())],
                make_rng(seed),
                Box::new(ConsoleReporter::stdout()),
            )
            .context("failed to set up the boards")?;
            game.greet()?;
            game.run()?;
        }
        Commands::Sim { size, seed } => {
            let config = GameConfig::with_board_size(size as usize);
            let mut game = Game::new(
                &config,
                [
                    Box::new(AiPlayer::named("Computer 1")),
                    Box::new(AiPlayer::named("Computer 2")),
                ],
                make_rng(seed),
                Box::new(NullReporter),
            )
            .context("failed to set up the boards")?;
            game.run()?;
            println!("{}", serde_json::to_string(&game.summary())?);
        }
    }
    Ok(())
}
