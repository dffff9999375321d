//! probscale command line tool
//!
//! Computes plotting positions and probability plot data for a sample read
//! from a file or stdin.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use probscale_core::{
    format_probability, probplot, read_sample, DataScale, PlotType, ProbAxis, ProbscaleConfig,
    ProbscaleResult,
};
use probscale_stats::{MissingPolicy, PlotPosOptions, PlottingPositionType, TieMethod};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "probscale", version, about = "Plotting positions and probability plots")]
struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print sorted values with their plotting positions
    Positions {
        /// Sample file, stdin when absent
        file: Option<PathBuf>,

        #[command(flatten)]
        formula: FormulaArgs,

        /// Report percentages instead of fractions
        #[arg(long)]
        percent: bool,

        /// Complement the positions (largest value nearest 0)
        #[arg(long)]
        descending: bool,

        /// Keep missing values in the output with NaN positions
        #[arg(long)]
        keep_missing: bool,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the points and axes of a probability plot
    Plot {
        /// Sample file, stdin when absent
        file: Option<PathBuf>,

        #[command(flatten)]
        formula: FormulaArgs,

        #[arg(long, value_enum)]
        plottype: Option<PlotTypeArg>,

        #[arg(long, value_enum)]
        probax: Option<ProbAxisArg>,

        /// Use a log scale on the data axis
        #[arg(long)]
        log: bool,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// List the plotting position presets
    Presets,
}

#[derive(clap::Args)]
struct FormulaArgs {
    /// Preset name, e.g. weibull, hazen, "type 8"
    #[arg(long, conflicts_with_all = ["alpha", "beta"])]
    postype: Option<String>,

    /// Custom alpha in [0, 1]
    #[arg(long, requires = "beta")]
    alpha: Option<f64>,

    /// Custom beta in [0, 1]
    #[arg(long, requires = "alpha")]
    beta: Option<f64>,

    /// Rank assignment for ties
    #[arg(long, value_enum)]
    ties: Option<TiesArg>,
}

impl FormulaArgs {
    fn apply(&self, mut options: PlotPosOptions) -> ProbscaleResult<PlotPosOptions> {
        if let Some(name) = &self.postype {
            options = options.with_postype(name)?;
        }
        if let (Some(alpha), Some(beta)) = (self.alpha, self.beta) {
            options = options.with_alpha_beta(alpha, beta)?;
        }
        if let Some(ties) = self.ties {
            options = options.with_ties(match ties {
                TiesArg::Average => TieMethod::Average,
                TiesArg::Ordinal => TieMethod::Ordinal,
            });
        }
        Ok(options)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TiesArg {
    Average,
    Ordinal,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlotTypeArg {
    Prob,
    Pp,
    Qq,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProbAxisArg {
    X,
    Y,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ProbscaleConfig::load(path)?,
        None => ProbscaleConfig::default(),
    };

    match cli.command {
        Command::Positions {
            file,
            formula,
            percent,
            descending,
            keep_missing,
            json,
        } => {
            let mut options = formula.apply(config.positions)?;
            if percent {
                options = options.as_percentage();
            }
            if descending {
                options = options.with_ascending(false);
            }
            if keep_missing {
                options = options.with_missing(MissingPolicy::Keep);
            }

            let data = load_sample(file)?;
            let result = options.compute(&data)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("value\tposition");
                for (value, position) in result.pairs() {
                    println!("{}\t{}", value, position);
                }
            }
        }
        Command::Plot {
            file,
            formula,
            plottype,
            probax,
            log,
            json,
        } => {
            let positions = formula.apply(config.positions)?;
            let mut options = config.plot;
            if let Some(plottype) = plottype {
                options.plottype = match plottype {
                    PlotTypeArg::Prob => PlotType::Prob,
                    PlotTypeArg::Pp => PlotType::Pp,
                    PlotTypeArg::Qq => PlotType::Qq,
                };
            }
            if let Some(probax) = probax {
                options.probax = match probax {
                    ProbAxisArg::X => ProbAxis::X,
                    ProbAxisArg::Y => ProbAxis::Y,
                };
            }
            if log {
                options.datascale = DataScale::Log;
            }

            let data = load_sample(file)?;
            let plot = probplot(&data, &options, &positions)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plot)?);
            } else {
                for (name, axis) in [("x", &plot.x_axis), ("y", &plot.y_axis)] {
                    let ticks: Vec<String> = probscale_core::calculate_ticks(axis)
                        .into_iter()
                        .filter_map(|tick| tick.label)
                        .collect();
                    println!(
                        "# {} axis: {:?} [{}, {}] ticks: {}",
                        name,
                        axis.scale,
                        axis.min,
                        axis.max,
                        ticks.join(" ")
                    );
                }
                println!("x\ty\tprobability\tquantile");
                for (i, (x, y)) in plot.points().into_iter().enumerate() {
                    println!(
                        "{}\t{}\t{}\t{}",
                        x,
                        y,
                        format_probability(plot.probabilities[i], false),
                        plot.quantiles[i]
                    );
                }
            }
        }
        Command::Presets => {
            println!("name\talpha\tbeta\taliases");
            for row in preset_rows() {
                println!("{}", row);
            }
        }
    }

    Ok(())
}

/// One tab-separated line per preset: name, alpha, beta, aliases
fn preset_rows() -> Vec<String> {
    PlottingPositionType::ALL
        .iter()
        .map(|preset| {
            let (alpha, beta) = preset.parameters();
            format!(
                "{}\t{}\t{}\t{}",
                preset.name(),
                alpha,
                beta,
                preset.aliases().join(", ")
            )
        })
        .collect()
}

fn load_sample(file: Option<PathBuf>) -> ProbscaleResult<Vec<f64>> {
    match file {
        Some(path) => read_sample(File::open(path)?),
        None => read_sample(io::stdin().lock()),
    }
}
