mod reports;
mod seeds;
mod util;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::io::{BufWriter, Write, stdout};
use std::time::Instant;

use monty_game::{DEFAULT_TRIALS, SimulationConfig, Simulator};
use reports::SeedRun;
use seeds::resolve_seed_inputs;
use util::split_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored summary table
    Console,
    /// Pretty-printed JSON document
    Json,
    /// Markdown tables
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "monty-tester", version)]
#[command(about = "Play batches of Monty Hall games and compare stay against switch")]
struct Args {
    /// Games to play per seed
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Seeds to run (comma-separated); `random` draws from entropy
    #[arg(long, default_value = "random")]
    seeds: String,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Log every game (equivalent to RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let start_time = Instant::now();
    let configs = build_configs(&args)?;
    let runs = run_batches(&configs)?;

    let mut out = BufWriter::new(stdout());
    if args.report == ReportFormat::Console {
        announce_banner(&mut out)?;
    }
    write_report(&mut out, args.report, &runs, start_time)?;
    out.flush()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn announce_banner(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", "🚪 Monty Hall Simulator".bright_cyan().bold())?;
    writeln!(out, "{}", "=======================".cyan())?;
    Ok(())
}

fn build_configs(args: &Args) -> Result<Vec<SimulationConfig>> {
    let seeds = resolve_seed_inputs(&split_csv(&args.seeds))?;
    let configs: Vec<SimulationConfig> = seeds
        .into_iter()
        .map(|seed| SimulationConfig {
            trials: args.trials,
            seed,
        })
        .collect();
    for config in &configs {
        config
            .validate()
            .with_context(|| format!("invalid run configuration {config:?}"))?;
    }
    Ok(configs)
}

fn run_batches(configs: &[SimulationConfig]) -> Result<Vec<SeedRun>> {
    configs
        .iter()
        .map(|config| -> Result<SeedRun> {
            let mut simulator = Simulator::from_config(config)?;
            let batch = simulator
                .play_n_games(config.trials)
                .with_context(|| format!("batch for seed {:?} failed", config.seed))?;
            log::info!(
                "seed {:?}: {} games, {} draws",
                config.seed,
                batch.games(),
                simulator.source().draws()
            );
            Ok(SeedRun {
                seed: config.seed,
                summary: batch.summary(),
            })
        })
        .collect()
}

fn write_report(
    out: &mut dyn Write,
    format: ReportFormat,
    runs: &[SeedRun],
    start_time: Instant,
) -> Result<()> {
    match format {
        ReportFormat::Json => reports::generate_json_report(out, runs),
        ReportFormat::Markdown => reports::generate_markdown_report(out, runs),
        ReportFormat::Console => {
            reports::generate_console_report(out, runs, start_time.elapsed())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            trials: 50,
            seeds: "1337".to_string(),
            report: ReportFormat::Json,
            verbose: false,
        }
    }

    #[test]
    fn build_configs_expands_seed_list() {
        let args = Args {
            seeds: "1, 2,random".to_string(),
            ..base_args()
        };
        let configs = build_configs(&args).unwrap();
        assert_eq!(configs.len(), 3);
        assert_eq!(configs[0], SimulationConfig::seeded(50, 1));
        assert!(configs[2].seed.is_none());
    }

    #[test]
    fn build_configs_rejects_zero_trials() {
        let args = Args {
            trials: 0,
            ..base_args()
        };
        let err = build_configs(&args).unwrap_err();
        assert!(format!("{err:#}").contains("trial count must be positive"));
    }

    #[test]
    fn build_configs_rejects_bad_seed() {
        let args = Args {
            seeds: "abc".to_string(),
            ..base_args()
        };
        assert!(build_configs(&args).is_err());
    }

    #[test]
    fn seeded_batches_are_reproducible() {
        let configs = build_configs(&base_args()).unwrap();
        let first = run_batches(&configs).unwrap();
        let second = run_batches(&configs).unwrap();
        assert_eq!(first[0].summary, second[0].summary);
        assert_eq!(first[0].summary.games, 50);
        assert_eq!(
            first[0].summary.stay.wins + first[0].summary.switch.wins,
            50
        );
    }

    #[test]
    fn write_report_emits_each_format() {
        let configs = build_configs(&base_args()).unwrap();
        let runs = run_batches(&configs).unwrap();
        for (format, marker) in [
            (ReportFormat::Json, "\"runs\""),
            (ReportFormat::Markdown, "| Strategy |"),
            (ReportFormat::Console, "Strategy Summary"),
        ] {
            let mut buf = Vec::new();
            write_report(&mut buf, format, &runs, Instant::now()).unwrap();
            let text = String::from_utf8(buf).unwrap();
            assert!(text.contains(marker), "{format:?} missing {marker}");
        }
    }

    #[test]
    fn banner_names_the_tool() {
        let mut buf = Vec::new();
        announce_banner(&mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("Monty Hall Simulator"));
    }
}
