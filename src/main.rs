use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use learnpath_lib::config::engine::{get_engine_config, load_engine_config};
use learnpath_lib::logging;
use learnpath_lib::routes::{self, ProgressRequest};
use learnpath_lib::state::app::AppState;

#[derive(Parser)]
#[command(name = "learnpath")]
#[command(about = "Learning path recommendations and badges from stored quiz results")]
struct Cli {
    /// Path to configuration file (default: $LEARNPATH_CONFIG or learnpath.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data directory (overrides config file)
    #[arg(short, long, env = "LEARNPATH_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Personalized learning path
    Path {
        #[arg(long)]
        user: String,
        #[arg(long = "class")]
        class_level: u32,
    },
    /// Badge status for a user
    Badges {
        #[arg(long)]
        user: String,
    },
    /// All badge definitions
    Definitions,
    /// Progress summary for a user
    Summary {
        #[arg(long)]
        user: String,
    },
    /// Record a finished quiz
    Record {
        #[arg(long)]
        user: String,
        #[arg(long = "class")]
        class_name: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        chapter: String,
        #[arg(long)]
        score: f64,
        #[arg(long)]
        correct: u32,
        #[arg(long)]
        total: u32,
        #[arg(long)]
        quiz_id: Option<String>,
    },
    /// Topics of a class level
    Catalog {
        #[arg(long = "class")]
        class_level: u32,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => load_engine_config(path),
        None => get_engine_config().clone(),
    };
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }

    let state = AppState::from_config(config).await?;

    match cli.command {
        Command::Path { user, class_level } => {
            print_json(&routes::get_learning_path(&state, &user, class_level).await?)?
        }
        Command::Badges { user } => print_json(&routes::get_badges(&state, &user).await?)?,
        Command::Definitions => print_json(&routes::get_badge_definitions())?,
        Command::Summary { user } => print_json(&routes::get_progress_summary(&state, &user).await?)?,
        Command::Record {
            user,
            class_name,
            subject,
            chapter,
            score,
            correct,
            total,
            quiz_id,
        } => {
            let request = ProgressRequest {
                user_id: user,
                class_name,
                subject,
                chapter,
                score,
                correct,
                total,
                quiz_id,
            };
            print_json(&routes::save_progress(&state, request).await?)?
        }
        Command::Catalog { class_level } => print_json(&routes::get_catalog(&state, class_level)?)?,
    }

    tracing::debug!(metrics = ?state.metrics.snapshot(), "Done");
    Ok(())
}
