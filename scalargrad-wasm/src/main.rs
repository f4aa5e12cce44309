use clap::Parser;
use scalargrad_core::train::LogReporter;
use scalargrad_core::ScalarGradError;
use scalargrad_wasm::{train_with_config, SineConfig};

#[derive(Parser)]
#[command(name = "scalargrad")]
#[command(about = "Train a small MLP to approximate sin", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of training steps
    #[arg(short, long)]
    steps: Option<usize>,

    /// Seed of the parameter initializer
    #[arg(long)]
    seed: Option<u64>,

    /// SGD learning rate
    #[arg(short = 'l', long = "learning-rate")]
    learning_rate: Option<f64>,

    /// Log the loss every N steps
    #[arg(long = "report-every", value_name = "N")]
    report_every: Option<usize>,
}

fn run(cli: Cli) -> Result<(), ScalarGradError> {
    let mut config = SineConfig::from_env()?;
    if let Some(steps) = cli.steps {
        config.steps = steps;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(learning_rate) = cli.learning_rate {
        config.learning_rate = learning_rate;
    }
    if let Some(report_every) = cli.report_every {
        config.report_every = report_every;
    }

    let summary = train_with_config(&config, &mut LogReporter)?;
    print!("{}", summary);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
