use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use palplan::config::PlannerConfig;
use palplan::io;
use palplan::io::cli::Cli;
use palplan::io::ext_repr::ExtPlan;
use palplan::planner;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: PlannerConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PlannerConfig::default()
        }
        Some(config_file) => {
            io::read_json(&config_file).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed PlannerConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_plan: ExtPlan = io::read_json(&args.input_file)?;
    let plan = planner::import_plan(&ext_plan)?;
    let results = planner::solve(&plan, &config);

    planner::write_solution(
        &ext_plan,
        &results,
        &config,
        &input_file_stem,
        &args.solution_folder,
    )
}
