//! Terminal replayer for the Fischer vs Spassky 1972 Game 6 record.
//!
//! Steps through the corrected move sequence with an ASCII board, either
//! synchronously (`--to <ply>`, default: whole game) or paced by a timer
//! (`--autoplay`, one move per `AUTOPLAY_INTERVAL_MS`).

use std::env;
use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use replay_core::board::{AsciiBoard, BoardView, NullBoard};
use replay_core::game_data::GameRecord;
use replay_core::i18n::{self, Lang};
use replay_core::{PlaybackController, ShakmatyRules, StepOutcome};

struct CliArgs {
    /// Stop after this many plies (None = play everything).
    to: Option<usize>,
    autoplay: bool,
    /// Suppress the per-step board diagram.
    quiet: bool,
}

/// Parse --to N / --autoplay / --quiet from CLI args.
fn parse_args() -> CliArgs {
    let args: Vec<String> = env::args().collect();
    let mut parsed = CliArgs {
        to: None,
        autoplay: false,
        quiet: false,
    };

    for i in 0..args.len() {
        match args[i].as_str() {
            "--to" => {
                parsed.to = args.get(i + 1).and_then(|s| s.parse().ok());
            }
            "--autoplay" => parsed.autoplay = true,
            "--quiet" => parsed.quiet = true,
            _ => {}
        }
    }
    parsed
}

fn interval_ms() -> u64 {
    env::var("AUTOPLAY_INTERVAL_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1000)
}

fn lang() -> Lang {
    env::var("REPLAY_LANG")
        .ok()
        .and_then(|v| Lang::from_code(&v))
        .unwrap_or(Lang::En)
}

async fn run<V: BoardView>(
    mut controller: PlaybackController<ShakmatyRules, V>,
    args: &CliArgs,
) -> Result<()> {
    if args.autoplay {
        controller.start_autoplay();
        let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms()));
        ticker.tick().await; // first tick completes immediately

        while controller.autoplay_active() {
            ticker.tick().await;
            if controller.tick() {
                println!("{}", controller.status_text());
            }
        }
    } else {
        let target = args.to.unwrap_or(controller.sequence_len());
        while controller.cursor() < target {
            match controller.step_forward() {
                Ok(StepOutcome::Advanced) => println!("{}", controller.status_text()),
                Ok(_) => break,
                Err(e) => {
                    eprintln!("{}", e.diagnostic_report());
                    return Err(e.into());
                }
            }
        }
    }

    if let Some(fault) = controller.fault() {
        eprintln!("{}", fault.diagnostic_report());
        anyhow::bail!("playback halted at ply {}", controller.cursor());
    }

    println!("{}", controller.status_text());
    println!("Final position: {}", controller.position_fen());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = parse_args();
    let lang = lang();
    let record = GameRecord::fischer_spassky_1972_g6();

    tracing::info!(
        autoplay = args.autoplay,
        quiet = args.quiet,
        plies = record.moves.len(),
        "Starting replayer"
    );

    println!("{}", i18n::translate(lang, "Interactive Chess Board"));
    println!(
        "{} vs {}, {} (Round {})",
        record.metadata.white,
        record.metadata.black,
        record.metadata.event,
        record.metadata.round.as_deref().unwrap_or("?"),
    );

    let result = record.metadata.result.clone();
    if args.quiet {
        let controller = PlaybackController::new(record.moves, ShakmatyRules::new(), NullBoard)
            .with_result(result);
        run(controller, &args).await
    } else {
        let controller = PlaybackController::new(record.moves, ShakmatyRules::new(), AsciiBoard)
            .with_result(result);
        run(controller, &args).await
    }
}
