mod config;
mod logging;
mod model;
mod pipeline;
mod plot;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::{error, info, warn};

use crate::config::performance::apply_overrides;
use crate::config::{
    ConfigError, ConfigPaths, ImageFormat, PlotParams, load_performance, load_sweeps,
};
use crate::model::compute_protocol_bounds;
use crate::pipeline::figures::create_figures;
use crate::pipeline::sweep::run_sweep;
use crate::plot::PlotError;
use crate::report::ReportError;
use crate::report::json::{PointReport, RunSummary, SweepSummary, TOOL_NAME, render_json, write_summary_json};
use crate::report::tsv::{sweep_file_name, write_sweep_tsv};

#[derive(Parser, Debug)]
#[command(name = "adaptive-mri-bounds", version, about)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sweep every configured parameter and write figures, data and a summary
    Run(RunArgs),
    /// Print the bounds of the baseline parameter set as JSON
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Directory to save the figures
    #[arg(long, visible_alias = "save_dir")]
    save_dir: PathBuf,

    /// Directory holding the *_parameters.toml files
    #[arg(long, default_value = "configs")]
    config_dir: PathBuf,

    /// Image format (overrides plot_parameters.toml)
    #[arg(long, value_enum)]
    format: Option<ImageFormat>,

    /// Write sweep data and summary only
    #[arg(long)]
    no_figures: bool,
}

#[derive(Args, Debug, Clone)]
struct EvaluateArgs {
    /// Directory holding performance_parameters.toml
    #[arg(long, default_value = "configs")]
    config_dir: PathBuf,

    /// Override a baseline field, e.g. --set prevalence=0.2
    #[arg(long = "set", value_name = "NAME=VALUE")]
    overrides: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Plot(#[from] PlotError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = dispatch(cli.command) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn dispatch(command: Command) -> Result<(), RunError> {
    match command {
        Command::Run(args) => {
            let summary = run(&args)?;
            info!(sweeps = summary.sweeps.len(), "run complete");
            println!("All figures generated and saved to {}.", args.save_dir.display());
            Ok(())
        }
        Command::Evaluate(args) => {
            let report = evaluate(&args)?;
            print!("{}", render_json(&report)?);
            Ok(())
        }
    }
}

fn run(args: &RunArgs) -> Result<RunSummary, RunError> {
    std::fs::create_dir_all(&args.save_dir).map_err(|source| RunError::CreateDir {
        path: args.save_dir.clone(),
        source,
    })?;

    let paths = ConfigPaths::in_dir(&args.config_dir);
    let baseline = load_performance(&paths.performance)?;
    let sweeps = load_sweeps(&paths.changing)?;
    let plot_params = if args.no_figures {
        PlotParams::default()
    } else {
        PlotParams::load(&paths.plot)?
    };
    let palette = plot_params.palette()?;
    let format = args.format.unwrap_or(plot_params.format);

    info!(
        config_dir = %args.config_dir.display(),
        save_dir = %args.save_dir.display(),
        sweeps = sweeps.len(),
        "starting run"
    );
    if sweeps.is_empty() {
        warn!("no sweeps configured in {}", paths.changing.display());
    }

    let mut summaries = Vec::with_capacity(sweeps.len());
    for (param, spec) in &sweeps {
        let series = run_sweep(&baseline, *param, &spec.parameter_range);
        info!(parameter = %param, samples = series.len(), "sweep evaluated");

        let data_file = sweep_file_name(&series);
        write_sweep_tsv(&series, &args.save_dir.join(&data_file))?;

        let figures = if args.no_figures {
            Vec::new()
        } else {
            create_figures(&series, spec, &plot_params, &palette, format, &args.save_dir)?
        };

        summaries.push(SweepSummary {
            parameter: *param,
            label: spec.name.clone(),
            range: spec.parameter_range,
            samples: series.len(),
            data_file,
            figures: figures.iter().map(|p| file_name(p)).collect(),
        });
    }

    let summary = RunSummary {
        tool: TOOL_NAME,
        version: env!("CARGO_PKG_VERSION"),
        baseline,
        baseline_metrics: compute_protocol_bounds(&baseline),
        sweeps: summaries,
    };
    write_summary_json(&summary, &args.save_dir.join("summary.json"))?;
    Ok(summary)
}

fn evaluate(args: &EvaluateArgs) -> Result<PointReport, RunError> {
    let paths = ConfigPaths::in_dir(&args.config_dir);
    let baseline = load_performance(&paths.performance)?;
    let params = apply_overrides(baseline, &args.overrides)?;
    Ok(PointReport::evaluate(params))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
