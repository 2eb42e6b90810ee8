mod commands;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;

use assessment_engine::load_dotenv;
use shared_types::{AnalysisPurpose, CognitiveResult};

use commands::{CognitiveSource, TrialTask};

#[derive(Parser, Debug)]
#[command(
    name = "assess",
    version,
    about = "Score personality and cognitive assessments and request interpretations"
)]
struct Cli {
    /// Expose Prometheus metrics on this address (e.g. 127.0.0.1:9100)
    #[arg(long, global = true)]
    metrics_addr: Option<SocketAddr>,

    /// TOML configuration (provider settings, norm overrides)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Domain scores and reliability metrics for a questionnaire session
    Score {
        #[arg(long)]
        answers: PathBuf,
        /// Question set to score against; the built-in 120-item bank by default
        #[arg(long)]
        questions: Option<PathBuf>,
    },

    /// Score a cognitive session (trial battery or item bank)
    #[command(group(ArgGroup::new("session").required(true).args(["trials", "items"])))]
    Cognitive {
        #[arg(long)]
        trials: Option<PathBuf>,
        #[arg(long)]
        items: Option<PathBuf>,
        #[arg(long)]
        total_time_ms: Option<f64>,
    },

    /// Number-free payload for the interpretation service
    Payload {
        #[arg(long)]
        answers: PathBuf,
        #[arg(long, default_value = "individual_report")]
        purpose: AnalysisPurpose,
        /// Cognitive result JSON as printed by `assess cognitive`
        #[arg(long)]
        cognitive: Option<PathBuf>,
    },

    /// Score, then request a narrative interpretation
    Interpret {
        #[arg(long)]
        answers: PathBuf,
        #[arg(long, default_value = "individual_report")]
        purpose: AnalysisPurpose,
        #[arg(long)]
        cognitive: Option<PathBuf>,
        /// Print a labelled deterministic interpretation if the provider fails
        #[arg(long)]
        fallback_on_error: bool,
    },

    /// Seeded stimulus sequence for one task
    GenerateTrials {
        #[arg(long, value_enum)]
        task: TrialTask,
        #[arg(long, default_value_t = 30)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// n for the n-back task
        #[arg(long, default_value_t = 2)]
        n_level: usize,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Score { .. } => "score",
            Command::Cognitive { .. } => "cognitive",
            Command::Payload { .. } => "payload",
            Command::Interpret { .. } => "interpret",
            Command::GenerateTrials { .. } => "generate_trials",
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = commands::read_config(cli.config.as_deref())?;

    match cli.command {
        Command::Score { answers, questions } => {
            let scored = commands::score(&answers, questions.as_deref(), config.as_ref())?;
            print_json(&scored)
        }
        Command::Cognitive {
            trials,
            items,
            total_time_ms,
        } => {
            let source = match (trials.as_deref(), items.as_deref()) {
                (Some(path), _) => CognitiveSource::Trials(path),
                (None, Some(path)) => CognitiveSource::Items(path),
                (None, None) => anyhow::bail!("either --trials or --items is required"),
            };
            print_json(&commands::cognitive(source, total_time_ms)?)
        }
        Command::Payload {
            answers,
            purpose,
            cognitive,
        } => {
            let scored = commands::score(&answers, None, config.as_ref())?;
            print_json(&commands::payload(&scored, purpose, cognitive.as_deref())?)
        }
        Command::Interpret {
            answers,
            purpose,
            cognitive,
            fallback_on_error,
        } => {
            let scored = commands::score(&answers, None, config.as_ref())?;
            // Statistical results go out first so an interpretation failure never hides them.
            print_json(&scored)?;

            let cognitive_result: Option<CognitiveResult> =
                cognitive.as_deref().map(commands::read_json).transpose()?;
            let interpretation = commands::interpret(
                &scored,
                purpose,
                cognitive_result,
                commands::provider_config(config.as_ref()),
                fallback_on_error,
            )
            .await?;
            print_json(&interpretation)
        }
        Command::GenerateTrials {
            task,
            count,
            seed,
            n_level,
        } => print_json(&commands::generate_trials(task, count, seed, n_level)?),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv();
    platform::init_logging("assess");
    if let Some(addr) = cli.metrics_addr {
        platform::init_metrics(addr)?;
    }

    let span = platform::correlation_span(Uuid::new_v4(), cli.command.name());
    run(cli).instrument(span).await
}
