//! `dials` - command-line front end for the strategy formulas.
//!
//! Dial defaults come from configuration; flags override them per run.
//! Metrics print to stdout, curves are rendered as CSV or JSON for an
//! external plotting tool.

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strategy_dials::adapters::renderer_for;
use strategy_dials::application::{
    EvaluateScalePowerCommand, EvaluateScalePowerHandler, PlotBrandingCommand,
    PlotBrandingHandler, PlotNetworkEffectCommand, PlotNetworkEffectHandler,
};
use strategy_dials::config::{AppConfig, LoggingConfig};
use strategy_dials::domain::foundation::Fraction;
use strategy_dials::ports::ChartFormat;

#[derive(Parser, Debug)]
#[command(name = "dials")]
#[command(version, about = "Explore value accretion, network effect and branding formulas")]
struct Cli {
    /// Config file with dial defaults (TOML, YAML or JSON)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Long-term value accretion from market scale and power
    Scale(ScaleArgs),
    /// Surplus leader margin over the network user differential
    Network(NetworkArgs),
    /// Branding multiplier and surplus leader margin over time
    Branding(BrandingArgs),
}

#[derive(Args, Debug)]
struct ScaleArgs {
    /// Current market size (bn)
    #[arg(long)]
    market_size: Option<f64>,

    /// Cost of capital (%)
    #[arg(long)]
    cost_of_capital: Option<f64>,

    /// Long-term revenue growth (%), must stay below cost of capital
    #[arg(long)]
    growth_rate: Option<f64>,

    /// Long-term market share (%)
    #[arg(long)]
    market_share: Option<f64>,

    /// Long-term net profit margin above cost of capital (%)
    #[arg(long)]
    margin: Option<f64>,

    /// Print metrics as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Args, Debug)]
struct ChartArgs {
    /// Chart output format (csv or json)
    #[arg(long, short = 'f', value_name = "FORMAT")]
    format: Option<ChartFormat>,

    /// Write the chart to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct NetworkArgs {
    /// Variable cost per unit served
    #[arg(long)]
    variable_cost: Option<f64>,

    /// Marginal value each additional user adds
    #[arg(long)]
    delta: Option<f64>,

    /// Lowest underdog share in the sweep (fraction, at most 0.5)
    #[arg(long)]
    low_share: Option<f64>,

    /// Highest underdog share in the sweep, exclusive (fraction, at most 0.5)
    #[arg(long)]
    high_share: Option<f64>,

    /// Users on the underdog platform
    #[arg(long)]
    underdog_users: Option<f64>,

    /// Number of samples in the share sweep
    #[arg(long)]
    resolution: Option<usize>,

    /// Draw the differential on a log-scaled axis
    #[arg(long, action = ArgAction::SetTrue)]
    log_x: bool,

    #[command(flatten)]
    chart: ChartArgs,
}

#[derive(Args, Debug)]
struct BrandingArgs {
    /// Asymptotic price multiple (at least 2)
    #[arg(long)]
    max_multiple: Option<f64>,

    /// Speed at which the brand approaches its maximum multiple
    #[arg(long)]
    compression: Option<f64>,

    /// Fraction of brand value kept after dilution (0-1)
    #[arg(long)]
    dilution: Option<f64>,

    /// Fraction of brand value kept after underinvestment (0-1)
    #[arg(long)]
    underinvestment: Option<f64>,

    #[command(flatten)]
    chart: ChartArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref()).context("loading configuration")?;
    cli.command.apply_to(&mut config)?;
    config.validate().context("validating configuration")?;

    init_tracing(&config.logging);

    match cli.command {
        Command::Scale(args) => run_scale(&config, args.json),
        Command::Network(args) => run_network(&config, args.chart.output),
        Command::Branding(args) => run_branding(&config, args.chart.output),
    }
}

impl Command {
    /// Overlays command-line dials on the configured defaults.
    fn apply_to(&self, config: &mut AppConfig) -> anyhow::Result<()> {
        match self {
            Command::Scale(args) => {
                let scale = &mut config.scale;
                override_dial(&mut scale.market_size, args.market_size);
                percent_dial("cost-of-capital", args.cost_of_capital, &mut scale.cost_of_capital)?;
                percent_dial("growth-rate", args.growth_rate, &mut scale.growth_rate)?;
                percent_dial("market-share", args.market_share, &mut scale.market_share)?;
                percent_dial("margin", args.margin, &mut scale.margin)?;
            }
            Command::Network(args) => {
                let network = &mut config.network;
                override_dial(&mut network.variable_cost, args.variable_cost);
                override_dial(&mut network.delta, args.delta);
                override_dial(&mut network.low_share, args.low_share);
                override_dial(&mut network.high_share, args.high_share);
                override_dial(&mut network.underdog_users, args.underdog_users);
                override_dial(&mut network.resolution, args.resolution);
                config.chart.network_log_x |= args.log_x;
                override_dial(&mut config.chart.format, args.chart.format);
            }
            Command::Branding(args) => {
                let branding = &mut config.branding;
                override_dial(&mut branding.max_multiple, args.max_multiple);
                override_dial(&mut branding.compression, args.compression);
                override_dial(&mut branding.dilution, args.dilution);
                override_dial(&mut branding.underinvestment, args.underinvestment);
                override_dial(&mut config.chart.format, args.chart.format);
            }
        }
        Ok(())
    }
}

fn init_tracing(logging: &LoggingConfig) {
    // RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    // Logs go to stderr so rendered charts on stdout stay clean
    if logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn override_dial<T>(dial: &mut T, flag: Option<T>) {
    if let Some(value) = flag {
        *dial = value;
    }
}

fn percent_dial(flag: &str, percent: Option<f64>, dial: &mut f64) -> anyhow::Result<()> {
    if let Some(p) = percent {
        *dial = Fraction::from_percent(p)
            .with_context(|| format!("--{} must be a percentage", flag))?
            .value();
    }
    Ok(())
}

fn run_scale(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let inputs = config.scale;
    info!(?inputs, "Evaluating scale-power model");

    let result = EvaluateScalePowerHandler::new().handle(EvaluateScalePowerCommand { inputs })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for metric in &result.metrics {
            println!("{}: {}", metric.label, metric.display);
        }
    }
    Ok(())
}

fn run_network(config: &AppConfig, output: Option<PathBuf>) -> anyhow::Result<()> {
    let inputs = config.network;
    let log_x = config.chart.network_log_x;
    info!(?inputs, log_x, "Plotting network effect curve");

    let renderer = renderer_for(config.chart.format, config.chart.pretty);
    let result = PlotNetworkEffectHandler::new(renderer)
        .handle(PlotNetworkEffectCommand { inputs, log_x })?;

    emit(&result.rendered, output)
}

fn run_branding(config: &AppConfig, output: Option<PathBuf>) -> anyhow::Result<()> {
    let inputs = config.branding;
    info!(?inputs, "Plotting branding curves");

    let renderer = renderer_for(config.chart.format, config.chart.pretty);
    let result = PlotBrandingHandler::new(renderer).handle(PlotBrandingCommand { inputs })?;

    emit(&result.rendered, output)
}

fn emit(rendered: &str, output: Option<PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("writing chart to {}", path.display()))?;
            info!(path = %path.display(), "Chart written");
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
