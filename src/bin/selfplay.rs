use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use flank_four::ai::{Agent, RandomAgent, Robot};
use flank_four::arena::{play_episode, ArenaMetrics};
use flank_four::config::AppConfig;
use flank_four::game::Side;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AgentKind {
    Robot,
    Random,
}

/// Pit two agents against each other over a series of headless games.
#[derive(Parser)]
#[command(name = "selfplay", about = "Run headless Flank Four matches")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Base rng seed; each agent derives its own from it
    #[arg(long)]
    seed: Option<u64>,

    /// Agent playing white
    #[arg(long, value_enum, default_value = "robot")]
    white: AgentKind,

    /// Agent playing black
    #[arg(long, value_enum, default_value = "random")]
    black: AgentKind,

    /// Print the final totals as JSON
    #[arg(long)]
    json: bool,
}

fn build_agent(kind: AgentKind, side: Side, seed: Option<u64>) -> Box<dyn Agent> {
    match (kind, seed) {
        (AgentKind::Robot, Some(seed)) => Box::new(Robot::with_seed(side, seed)),
        (AgentKind::Robot, None) => Box::new(Robot::new(side)),
        (AgentKind::Random, Some(seed)) => Box::new(RandomAgent::with_seed(side, seed)),
        (AgentKind::Random, None) => Box::new(RandomAgent::new(side)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    let seed = cli.seed.or(config.robot.seed);
    config.validate().context("validating overrides")?;

    let initial = config.board.initial_board()?;
    let mut white = build_agent(cli.white, Side::White, seed);
    let mut black = build_agent(cli.black, Side::Black, seed.map(|s| s.wrapping_add(1)));

    info!(
        games = config.arena.games,
        white = white.name(),
        black = black.name(),
        "starting matches"
    );

    let mut metrics = ArenaMetrics::new();
    for game in 0..config.arena.games {
        let result = play_episode(
            initial,
            config.board.first_mover,
            white.as_mut(),
            black.as_mut(),
            config.arena.max_ticks,
        );
        metrics.record_episode(&result);
        if !cli.json && (game + 1) % 10 == 0 {
            println!(
                "Games {:>5} | White {:>5.1}% | Black {:>5.1}% | Draws {:>5.1}%",
                game + 1,
                metrics.win_rate(Side::White) * 100.0,
                metrics.win_rate(Side::Black) * 100.0,
                metrics.draw_rate() * 100.0
            );
        }
    }

    if cli.json {
        println!("{}", metrics.to_json().context("serializing metrics")?);
    } else {
        println!(
            "{} ({}) vs {} ({}): {} games, {}-{}-{} (W-B-D), avg length {:.1} moves, {} captures",
            white.name(),
            Side::White.name(),
            black.name(),
            Side::Black.name(),
            metrics.games,
            metrics.white_wins,
            metrics.black_wins,
            metrics.draws,
            metrics.average_game_length(),
            metrics.total_captures
        );
    }
    Ok(())
}
