use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pogo_app::{AppResult, RunOptions, RunRequest, Variable};
use pogo_sim::{parse_assignments, ParameterSet};

#[derive(Parser)]
#[command(name = "pogo-cli")]
#[command(about = "Pogosim CLI - pogo-effect oscillator simulation tool", long_about = None)]
struct Cli {
    /// Directory the run cache lives under (defaults to the current one)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation headlessly and cache the result
    Run {
        /// Parameter overrides as comma-separated key=value pairs,
        /// e.g. "m=1000, k=5000, c=200, F=20000, dt=0.01, t_max=10"
        #[arg(long)]
        params: Option<String>,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// List cached runs
    Runs,
    /// Show details of a cached run
    ShowRun {
        /// Run ID to display
        run_id: String,
    },
    /// Export one time series from a run as CSV
    ExportSeries {
        /// Run ID
        run_id: String,
        /// Variable name: position, velocity or acceleration
        variable: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete a cached run
    DeleteRun {
        /// Run ID to delete
        run_id: String,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let base_dir = cli.dir.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Commands::Run { params, no_cache } => cmd_run(&base_dir, params.as_deref(), !no_cache),
        Commands::Runs => cmd_runs(&base_dir),
        Commands::ShowRun { run_id } => cmd_show_run(&base_dir, &run_id),
        Commands::ExportSeries {
            run_id,
            variable,
            output,
        } => cmd_export_series(&base_dir, &run_id, &variable, output.as_deref()),
        Commands::DeleteRun { run_id } => cmd_delete_run(&base_dir, &run_id),
    }
}

/// Defaults overridden by the wire-format string, same as the GUI text box.
fn build_params(overrides: Option<&str>) -> AppResult<ParameterSet> {
    let mut params = ParameterSet::default();
    if let Some(input) = overrides {
        for assignment in parse_assignments(input).map_err(pogo_app::AppError::from)? {
            params.set(assignment.key, assignment.value);
        }
        params.validate().map_err(pogo_app::AppError::from)?;
    }
    Ok(params)
}

fn cmd_run(base_dir: &Path, overrides: Option<&str>, use_cache: bool) -> AppResult<()> {
    let params = build_params(overrides)?;
    println!("Running pogo simulation:");
    println!("  {}", params.wire_string_full());
    println!(
        "  {} ticks at dt = {:.4} s",
        params.steps_to_t_max(),
        params.dt_s
    );

    let response = pogo_app::ensure_run(&RunRequest {
        base_dir,
        params,
        options: RunOptions {
            use_cache,
            ..Default::default()
        },
    })?;

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Simulation completed: {}", response.run_id);
    }

    let (_manifest, frames) = pogo_app::load_run(base_dir, &response.run_id)?;
    let summary = pogo_app::get_run_summary(&frames)?;
    println!("  Frames: {}", summary.record_count);
    println!(
        "  Time range: {:.3} - {:.3} s",
        summary.time_range.0, summary.time_range.1
    );
    println!("  Peak position: {:.3} m", summary.peak_position_m);
    println!("  Wall bounces: {}", summary.bounce_count);

    Ok(())
}

fn cmd_runs(base_dir: &Path) -> AppResult<()> {
    let runs = pogo_app::list_runs(base_dir)?;

    if runs.is_empty() {
        println!("No cached runs found");
    } else {
        println!("Cached runs:");
        for manifest in runs {
            println!(
                "  {} ({}, {} frames)",
                manifest.run_id, manifest.timestamp, manifest.steps
            );
        }
    }
    Ok(())
}

fn cmd_show_run(base_dir: &Path, run_id: &str) -> AppResult<()> {
    println!("Loading run: {}", run_id);

    let (manifest, frames) = pogo_app::load_run(base_dir, run_id)?;
    let summary = pogo_app::get_run_summary(&frames)?;

    println!("\nRun Summary:");
    println!("  Recorded: {}", manifest.timestamp);
    println!("  Parameters: {}", manifest.params.wire_string_full());
    println!("  Frames: {}", summary.record_count);
    println!(
        "  Time range: {:.3} - {:.3} s",
        summary.time_range.0, summary.time_range.1
    );
    println!("  Peak position: {:.3} m", summary.peak_position_m);
    println!("  Wall bounces: {}", summary.bounce_count);

    Ok(())
}

fn cmd_export_series(
    base_dir: &Path,
    run_id: &str,
    variable: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let variable = Variable::from_str(variable)?;
    let (_manifest, frames) = pogo_app::load_run(base_dir, run_id)?;
    let series = pogo_app::extract_series(&frames, variable);

    // Build CSV
    let mut csv = String::from("time_s,value\n");
    for (t, val) in &series {
        csv.push_str(&format!("{},{}\n", t, val));
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} data points to {}",
            series.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn cmd_delete_run(base_dir: &Path, run_id: &str) -> AppResult<()> {
    pogo_app::delete_run(base_dir, run_id)?;
    println!("✓ Deleted run: {}", run_id);
    Ok(())
}
