//! CLI Adapter.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, AngleLabels};
use crate::domain::messages::selection_summary;
use crate::domain::{AppError, Axis, DistanceLayer, LabelSet, Locale};

#[derive(Parser)]
#[command(name = "angle-prompts")]
#[command(version)]
#[command(
    about = "Translate camera-angle selections into <sks> viewpoint prompts",
    long_about = None
)]
struct Cli {
    /// Locale tag overriding settings and environment (e.g. zh_CN, en)
    #[arg(long, global = true)]
    lang: Option<String>,
    /// Settings file (defaults to ./angle-prompts.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a selected_points JSON array into one prompt per point
    #[clap(visible_alias = "m")]
    Multi {
        /// JSON array of {azimuth, elevation, distance} records, or '-' for stdin
        #[arg(default_value = "[]")]
        selected_points: String,
        /// Print the prompts as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Translate localized azimuth/elevation/distance labels into one prompt
    #[clap(visible_alias = "s")]
    Single {
        /// Azimuth label (e.g. Front, Right, Back-Left)
        #[arg(short, long)]
        azimuth: Option<String>,
        /// Elevation label (e.g. Low Angle, Eye Level, High Angle)
        #[arg(short, long)]
        elevation: Option<String>,
        /// Distance label (e.g. Close-up, Medium, Wide)
        #[arg(short, long)]
        distance: Option<String>,
    },
    /// Print node metadata for the host as JSON
    #[clap(visible_alias = "n")]
    Nodes,
    /// Build a selected_points document from layers and points
    #[clap(visible_alias = "sel")]
    Select {
        /// Select every point of a distance layer (close-up, medium, wide)
        #[arg(short, long = "layer")]
        layers: Vec<String>,
        /// Toggle one point given as AZIMUTH,ELEVATION,DISTANCE
        #[arg(short, long = "point", allow_hyphen_values = true)]
        points: Vec<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let Cli { lang, config, command } = cli;
    // Multi-point prompts are locale-free, so settings are only loaded for the other commands.
    let locale = || -> Result<Locale, AppError> {
        let ctx = api::create_context(config.as_deref())?;
        let locale = ctx.locale(lang.as_deref());
        log::debug!("active locale: {locale}");
        Ok(locale)
    };

    match command {
        Commands::Multi { selected_points, json } => run_multi(&selected_points, json),
        Commands::Single { azimuth, elevation, distance } => {
            run_single(locale()?, azimuth, elevation, distance);
            Ok(())
        }
        Commands::Nodes => {
            println!("{}", api::node_definitions_json(locale()?)?);
            Ok(())
        }
        Commands::Select { layers, points } => run_select(locale()?, &layers, &points),
    }
}

fn run_multi(selected_points: &str, json: bool) -> Result<(), AppError> {
    let input = if selected_points == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        selected_points.to_string()
    };

    let prompts = api::translate_points(&input);
    if json {
        println!("{}", serde_json::to_string_pretty(&prompts)?);
    } else {
        for prompt in &prompts {
            println!("{prompt}");
        }
    }
    Ok(())
}

fn run_single(
    locale: Locale,
    azimuth: Option<String>,
    elevation: Option<String>,
    distance: Option<String>,
) {
    let set = LabelSet::for_locale(locale);
    let pick = |label: Option<String>, axis: Axis| {
        label.unwrap_or_else(|| set.default_label(axis).to_string())
    };
    let labels = AngleLabels::new(
        pick(azimuth, Axis::Azimuth),
        pick(elevation, Axis::Elevation),
        pick(distance, Axis::Distance),
    );
    println!("{}", api::translate_labels(locale, &labels));
}

fn run_select(locale: Locale, layers: &[String], points: &[String]) -> Result<(), AppError> {
    let layers =
        layers.iter().map(|name| name.parse::<DistanceLayer>()).collect::<Result<Vec<_>, _>>()?;
    let points = points.iter().map(|text| api::parse_point(text)).collect::<Result<Vec<_>, _>>()?;

    let selection = api::build_selection(&layers, &points);
    eprintln!("{}", selection_summary(locale, selection.len()));
    println!("{}", selection.to_json()?);
    Ok(())
}
