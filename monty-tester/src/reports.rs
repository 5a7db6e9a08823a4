use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use monty_game::BatchSummary;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// Statistics for one seeded batch.
#[derive(Debug, Clone, Serialize)]
pub struct SeedRun {
    /// `None` when the batch drew from operating-system entropy.
    pub seed: Option<u64>,
    pub summary: BatchSummary,
}

impl SeedRun {
    #[must_use]
    pub fn label(&self) -> String {
        self.seed
            .map_or_else(|| "entropy".to_string(), |seed| seed.to_string())
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    runs: &'a [SeedRun],
}

pub fn generate_console_report(
    out: &mut dyn Write,
    runs: &[SeedRun],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Strategy Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "===================".cyan())?;

    for run in runs {
        writeln!(
            out,
            "Seed {} ({} games)",
            run.label().bold(),
            run.summary.games
        )?;
        writeln!(
            out,
            "  {:<8} {:>8} {:>8} {:>6} {:>6}",
            "strategy", "wins", "losses", "win", "lose"
        )?;
        for row in run.summary.rows() {
            // Stay and switch split every game between them.
            let leading = row.wins.saturating_mul(2) >= run.summary.games;
            let label = format!("{:<8}", row.strategy.label());
            let label = if leading { label.green() } else { label.yellow() };
            writeln!(
                out,
                "  {label} {:>8} {:>8} {:>6.2} {:>6.2}",
                row.wins,
                row.losses,
                row.rounded_win_rate(),
                row.rounded_lose_rate()
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Total time: {total_duration:?}")?;
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, runs: &[SeedRun]) -> Result<()> {
    let report = JsonReport {
        generated_at: Utc::now().to_rfc3339(),
        runs,
    };
    let json_output = serde_json::to_string_pretty(&report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, runs: &[SeedRun]) -> Result<()> {
    writeln!(out, "# Monty Hall Simulation Results\n")?;
    writeln!(
        out,
        "_Generated {}_\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    for run in runs {
        writeln!(out, "## Seed {}\n", run.label())?;
        writeln!(out, "- **Games**: {}\n", run.summary.games)?;
        writeln!(out, "| Strategy | Wins | Losses | Win rate | Lose rate |")?;
        writeln!(out, "|---|---:|---:|---:|---:|")?;
        for row in run.summary.rows() {
            writeln!(
                out,
                "| {} | {} | {} | {:.2} | {:.2} |",
                row.strategy,
                row.wins,
                row.losses,
                row.rounded_win_rate(),
                row.rounded_lose_rate()
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}
