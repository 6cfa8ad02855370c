//! Command line driver: a wolf chasing a herd of sheep.

mod args;
mod report;
mod settings;
mod telemetry;

use anyhow::{Context, Result};
use args::Args;
use chase_world::{Hunt, RoundReport, Simulation};
use clap::Parser;
use report::ReportEmitter;
use std::io::{self, BufRead, Write};
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();
    let output = args.output_config();

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    telemetry::init_logging(args.log, &output.log_path)?;

    let config = args.simulation_config()?;
    let wait_each_round = config.wait_each_round;

    let mut simulation = Simulation::new(config)?;
    info!(seed = simulation.seed(), "Simulation created");

    let result = simulation.run_with(|report| {
        narrate(report);
        if wait_each_round && !report.state.is_terminal() {
            wait_for_enter()?;
        }
        Ok(())
    })?;

    println!("\n---GAME OVER---");

    ReportEmitter::write_all(&result, &output).with_context(|| {
        format!(
            "failed to write reports to {} and {}",
            output.positions_path.display(),
            output.survivors_path.display()
        )
    })?;

    Ok(())
}

/// Print a human readable account of one round.
fn narrate(report: &RoundReport) {
    println!("--------------\nNew round started! Get ready!");
    println!(
        "Round: {} Alive sheep: {}",
        report.record.round_number, report.alive_at_start
    );
    println!("Initial wolf position: {}", report.wolf_start);
    println!("Wolf moved to position: {}", report.record.wolf_position);

    match report.hunt {
        Hunt::Captured { prey, .. } => {
            println!("Sheep {} was hunted and eaten by the wolf!", prey + 1);
        }
        Hunt::Chasing { prey, .. } => {
            if let Some(Some(position)) = report.record.sheep_positions.get(prey) {
                println!(
                    "Wolf is chasing sheep {}, which is on the position: {}",
                    prey + 1,
                    position
                );
            }
            println!("Sheep {} has escaped the wolf!", prey + 1);
        }
    }
}

fn wait_for_enter() -> chase_core::Result<()> {
    print!("Press Enter to continue...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
