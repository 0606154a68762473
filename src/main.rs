#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_agent::{
    init_logging, ui::print_player_maps, AiPlayer, Referee, DEFAULT_BOARD_SIZE, DEFAULT_FLEET,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Only log warnings and errors unless BATTLESHIP_LOG says otherwise.
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(clap::Args, Clone, Debug)]
#[cfg(feature = "std")]
struct MatchArgs {
    #[arg(long, help = "Fix RNG seed for reproducible matches (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 100)]
    rounds: usize,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    board_size: usize,
    #[arg(long, help = "Shots per side before a round is declared a tie")]
    max_shots: Option<usize>,
}

#[derive(clap::Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play two heuristic agents against each other.
    Match {
        #[command(flatten)]
        args: MatchArgs,
        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },
    /// Play a match, then dump the first agent's maps.
    Maps {
        #[command(flatten)]
        args: MatchArgs,
    },
}

#[cfg(feature = "std")]
fn make_players(seed: Option<u64>, board_size: usize) -> anyhow::Result<(AiPlayer, AiPlayer)> {
    let (rng1, rng2) = match seed {
        Some(s) => (
            SmallRng::seed_from_u64(s),
            SmallRng::seed_from_u64(s.wrapping_add(1)),
        ),
        None => {
            let mut seed_rng = rand::rng();
            (
                SmallRng::from_rng(&mut seed_rng),
                SmallRng::from_rng(&mut seed_rng),
            )
        }
    };
    let p1 = AiPlayer::new(board_size, rng1).map_err(|e| anyhow::anyhow!(e))?;
    let p2 = AiPlayer::new(board_size, rng2).map_err(|e| anyhow::anyhow!(e))?;
    Ok((p1, p2))
}

#[cfg(feature = "std")]
fn run_match(args: &MatchArgs) -> anyhow::Result<(AiPlayer, battleship_agent::MatchSummary)> {
    let (mut p1, mut p2) = make_players(args.seed, args.board_size)?;
    let mut referee = Referee::new(args.board_size, &DEFAULT_FLEET);
    if let Some(limit) = args.max_shots {
        referee = referee.with_max_shots(limit);
    }
    let summary = referee
        .play_match(&mut p1, &mut p2, args.rounds)
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok((p1, summary))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    });

    match cli.command {
        Commands::Match { args, json } => {
            if let Some(s) = args.seed {
                log::info!("using fixed seed {} (match will be reproducible)", s);
            }
            let (_, summary) = run_match(&args)?;
            if json {
                let result = json!({
                    "board_size": args.board_size,
                    "summary": summary,
                });
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("Rounds played: {}", summary.rounds);
                println!("Player 1 wins: {}", summary.wins[0]);
                println!("Player 2 wins: {}", summary.wins[1]);
                println!("Ties:          {}", summary.ties);
                let avg = |shots: usize| shots as f64 / summary.rounds.max(1) as f64;
                println!(
                    "Average shots: {:.1} / {:.1}",
                    avg(summary.shots[0]),
                    avg(summary.shots[1])
                );
            }
        }
        Commands::Maps { args } => {
            let (p1, summary) = run_match(&args)?;
            println!("After {} rounds:", summary.rounds);
            print_player_maps(&p1);
        }
    }
    Ok(())
}
