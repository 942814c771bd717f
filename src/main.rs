//! Dragon Flight headless runner
//!
//! Plays a level with the demo pilot at a fixed 60 Hz frame step and prints
//! a one-line JSON summary. Handy for balancing levels and tuning files
//! without a presentation layer.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;
use serde::Serialize;

use dragon_flight::consts::FRAME_MS;
use dragon_flight::sim::{Level, RunEvent, RunPhase, RunState, autopilot, tick};
use dragon_flight::{Error, Resolution, Result, Tuning, Viewport};

#[derive(Debug, Parser)]
#[command(name = "dragon-flight", about = "Play a level headlessly with the demo pilot")]
struct Cli {
    /// Built-in level id (default: level-1)
    #[arg(long)]
    level: Option<String>,

    /// Load the level from a JSON file instead
    #[arg(long, conflicts_with_all = ["level", "generate"])]
    level_file: Option<PathBuf>,

    /// Generate a level from this seed instead
    #[arg(long, conflicts_with = "level")]
    generate: Option<u64>,

    /// Obstacle count for generated levels
    #[arg(long, default_value_t = 18)]
    count: usize,

    /// Tuning JSON file
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Fixed viewport width in game pixels
    #[arg(long, conflicts_with = "window", value_parser = parse_viewport)]
    viewport: Option<f32>,

    /// Host window size used to derive the viewport width, e.g. 1280x800
    #[arg(long, value_parser = parse_window)]
    window: Option<(f32, f32)>,

    /// Stop after this many ticks if the run has not ended
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,

    /// Log every event
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    level: String,
    outcome: RunPhase,
    ticks: u64,
    progress: f32,
    progress_ratio: f32,
    lives: u8,
    obstacles_passed: u32,
}

fn parse_window(s: &str) -> std::result::Result<(f32, f32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let parse = |v: &str| v.trim().parse::<f32>().map_err(|e| format!("'{v}': {e}"));
    Ok((parse(w)?, parse(h)?))
}

fn parse_viewport(s: &str) -> std::result::Result<f32, String> {
    let width = s.trim().parse::<f32>().map_err(|e| format!("'{s}': {e}"))?;
    if !width.is_finite() || width <= 0.0 {
        return Err(format!("viewport width must be positive, got '{s}'"));
    }
    Ok(width)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let env = Env::default().default_filter_or(level.to_string());
    // Only fails if a logger is already installed
    let _ = Builder::from_env(env).try_init();
}

fn load_level(cli: &Cli) -> Result<Level> {
    if let Some(path) = &cli.level_file {
        return Level::load(path);
    }
    if let Some(seed) = cli.generate {
        let level = Level::generate(&format!("generated-{seed}"), seed, cli.count);
        level.validate()?;
        return Ok(level);
    }
    Level::by_id(cli.level.as_deref().unwrap_or(dragon_flight::sim::LEVEL_1_ID))
}

fn run(cli: &Cli) -> Result<Summary> {
    let level = load_level(cli)?;
    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let summary = match (cli.viewport, cli.window) {
        (Some(width), _) => play(level, width, &tuning, cli.max_ticks),
        (None, Some((w, h))) => play(level, Resolution::from_window(w, h), &tuning, cli.max_ticks),
        (None, None) => play(level, Resolution::default(), &tuning, cli.max_ticks),
    };
    Ok(summary)
}

fn play<V: Viewport>(level: Level, viewport: V, tuning: &Tuning, max_ticks: u64) -> Summary {
    log::info!("Viewport width: {}", viewport.width());

    let level_id = level.id.clone();
    let mut state = RunState::new(level, viewport, tuning);

    while !state.is_finished() && state.time_ticks < max_ticks {
        let input = autopilot(&state);
        for event in tick(&mut state, &input, FRAME_MS) {
            match event {
                RunEvent::LifeLost { cause, remaining } => {
                    log::info!(
                        "Tick {}: life lost ({:?}), {} left",
                        state.time_ticks,
                        cause,
                        remaining
                    );
                }
                RunEvent::ObstaclePassed { id } => {
                    log::debug!("Tick {}: passed obstacle {}", state.time_ticks, id);
                }
                RunEvent::GameOver { .. } | RunEvent::LevelComplete => {}
            }
        }
    }

    if !state.is_finished() {
        log::warn!("Stopped after {} ticks without finishing", state.time_ticks);
    }

    Summary {
        level: level_id,
        outcome: state.phase,
        ticks: state.time_ticks,
        progress: state.scroll.progress(),
        progress_ratio: state.scroll.progress_ratio(),
        lives: state.lives,
        obstacles_passed: state.obstacles_passed,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli).and_then(|summary| serde_json::to_string(&summary).map_err(Error::from)) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_flag_pins_width() {
        let cli = Cli::try_parse_from(["dragon-flight", "--viewport", "740"]).unwrap();
        assert_eq!(cli.viewport, Some(740.0));
        assert!(cli.window.is_none());
    }

    #[test]
    fn test_viewport_conflicts_with_window() {
        let parsed = Cli::try_parse_from(["dragon-flight", "--viewport", "600", "--window", "1280x800"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_viewport_rejects_non_positive() {
        assert!(parse_viewport("0").is_err());
        assert!(parse_viewport("-5").is_err());
        assert!(parse_viewport("wide").is_err());
        assert_eq!(parse_viewport(" 512 "), Ok(512.0));
    }

    #[test]
    fn test_parse_window() {
        assert_eq!(parse_window("1280x800"), Ok((1280.0, 800.0)));
        assert!(parse_window("1280").is_err());
    }

    #[test]
    fn test_play_with_fixed_viewport_is_bounded() {
        let summary = play(Level::level_1(), 740.0_f32, &Tuning::default(), 300);
        assert_eq!(summary.level, "level-1");
        assert!(summary.ticks <= 300);
        assert!(summary.progress_ratio > 0.0);
    }
}
