use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_reduce::config::{Overrides, ReduceConfig, StrategyKind};
use color_reduce::pipeline::{self, RawInput};
use palette_quant::KernelName;

#[derive(Parser)]
#[command(name = "color-reduce")]
#[command(about = "Reduce raw RGBA images to a small palette")]
struct Cli {
    /// Log debug events (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Raw RGBA input file (width * height * 4 bytes)
    input: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    width: usize,

    /// Image height in pixels
    #[arg(long)]
    height: usize,
}

impl InputArgs {
    fn raw(&self) -> RawInput<'_> {
        RawInput {
            path: &self.input,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Args)]
struct StrategyArgs {
    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Colors per channel for uniform, palette size otherwise
    #[arg(short = 'n', long)]
    colors: Option<usize>,

    /// Diffusion kernel for uniform: floyd_steinberg, burke, stucki
    #[arg(short, long)]
    kernel: Option<String>,

    /// K-means iteration count
    #[arg(short, long)]
    epsilon: Option<usize>,

    /// Seed for k-means centroid selection
    #[arg(long)]
    seed: Option<u64>,
}

impl StrategyArgs {
    /// Config file (or defaults) with the command-line values applied.
    fn resolve(&self, strategy: Option<StrategyKind>) -> anyhow::Result<ReduceConfig> {
        let base = match &self.config {
            Some(path) => ReduceConfig::load(path)?,
            None => ReduceConfig::default(),
        };
        Ok(base.apply_overrides(&Overrides {
            strategy,
            colors: self.colors,
            kernel: self.kernel.clone(),
            epsilon: self.epsilon,
            seed: self.seed,
        }))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce one image with a single palette strategy
    Reduce {
        #[command(flatten)]
        input: InputArgs,

        /// Output raw RGBA file
        #[arg(short, long)]
        output: PathBuf,

        /// Palette strategy (overrides config)
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyKind>,

        #[command(flatten)]
        settings: StrategyArgs,
    },
    /// Reduce one image with every palette strategy
    Compare {
        #[command(flatten)]
        input: InputArgs,

        /// Directory for <stem>.<strategy>.rgba outputs (default: beside input)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        #[command(flatten)]
        settings: StrategyArgs,
    },
    /// Print the palette an image would be reduced to
    Palette {
        #[command(flatten)]
        input: InputArgs,

        /// Print a JSON array instead of one color per line
        #[arg(long)]
        json: bool,

        /// Palette strategy (overrides config)
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyKind>,

        #[command(flatten)]
        settings: StrategyArgs,
    },
    /// List the diffusion kernels
    Kernels,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Reduce {
            input,
            output,
            strategy,
            settings,
        } => run_reduce_command(&input, &output, settings.resolve(strategy)?),
        Commands::Compare {
            input,
            out_dir,
            settings,
        } => run_compare_command(&input, out_dir.as_deref(), settings.resolve(None)?),
        Commands::Palette {
            input,
            json,
            strategy,
            settings,
        } => run_palette_command(&input, json, settings.resolve(strategy)?),
        Commands::Kernels => {
            run_kernels_command();
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "color_reduce=debug,palette_quant=debug"
    } else {
        "color_reduce=info,palette_quant=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run_reduce_command(input: &InputArgs, output: &Path, config: ReduceConfig) -> anyhow::Result<()> {
    let summary = pipeline::reduce_file(input.raw(), output, &config)?;
    println!(
        "{}: {} of {} palette colors used -> {}",
        summary.strategy,
        summary.colors_used,
        summary.palette_size,
        summary.output.display()
    );
    Ok(())
}

fn run_compare_command(
    input: &InputArgs,
    out_dir: Option<&Path>,
    config: ReduceConfig,
) -> anyhow::Result<()> {
    let settings = config.compare_settings()?;
    for summary in pipeline::compare_file(input.raw(), out_dir, &settings)? {
        println!(
            "{:<32} {:>4} colors  {}",
            summary.strategy.to_string(),
            summary.colors_used,
            summary.output.display()
        );
    }
    Ok(())
}

fn run_palette_command(input: &InputArgs, json: bool, config: ReduceConfig) -> anyhow::Result<()> {
    let palette = pipeline::build_palette_file(input.raw(), &config)?;
    let colors: Vec<String> = palette.iter().map(ToString::to_string).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&colors)?);
    } else {
        for color in colors {
            println!("{color}");
        }
    }
    Ok(())
}

fn run_kernels_command() {
    for name in KernelName::ALL {
        let kernel = name.kernel();
        println!(
            "{:<16} {:>2} taps  weight sum {:.4}",
            name.as_str(),
            kernel.taps().count(),
            kernel.total_weight()
        );
    }
}
