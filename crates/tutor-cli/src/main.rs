mod config;
mod lesson_cmd;
mod plan_cmds;
mod serve_cmd;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tutor_core::LearningGoals;
use tutor_core::backend::{CompletionBackend, OpenAiBackend};
use tutor_core::store::{PgPlanStore, PlanStore};
use tutor_db::pool;

use config::TutorConfig;

#[derive(Parser)]
#[command(name = "tutor", about = "LLM-backed language-learning plan generator")]
struct Cli {
    /// Database URL (overrides TUTOR_DATABASE_URL env var)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a tutor config file (no database required)
    Init {
        /// PostgreSQL connection URL
        #[arg(long, default_value = "postgresql://localhost:5432/tutor")]
        db_url: String,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Initialize the tutor database (create it if absent, run migrations)
    DbInit,
    /// Plan management
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Generate a lesson transcript for a plan item
    Lesson {
        /// Plan ID the item belongs to
        plan_id: String,
        /// Plan item ID to generate a lesson for
        item_id: String,
    },
    /// Run the HTTP API server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

#[derive(Subcommand)]
enum PlanCommands {
    /// Generate and persist a learning plan from goals
    Create {
        /// Language to learn (e.g. "Japanese")
        #[arg(long)]
        language: String,
        /// Number of lessons the plan should contain
        #[arg(long, default_value_t = 10)]
        lessons: i32,
        /// Desired duration per lesson (e.g. "15 minutes")
        #[arg(long, default_value = "15 minutes")]
        duration: String,
        /// Current proficiency (e.g. "a few greetings")
        #[arg(long, default_value = "nothing")]
        level: String,
    },
    /// Show plan details (or list all plans)
    Show {
        /// Plan ID to show (omit to list all)
        plan_id: Option<String>,
    },
}

/// Execute the `tutor init` command: write config file.
fn cmd_init(db_url: &str, force: bool) -> Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        database: config::DatabaseSection {
            url: db_url.to_string(),
        },
        ..config::ConfigFile::default()
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  database.url = {db_url}");
    println!("  openai.model = {}", cfg.openai.model);
    println!("  openai.api_key_env = {}", cfg.openai.api_key_env);
    println!();
    println!("Next: run `tutor db-init` to create and migrate the database.");

    Ok(())
}

/// Execute the `tutor db-init` command: create database and run migrations.
async fn cmd_db_init(cli_db_url: Option<&str>) -> Result<()> {
    let resolved = TutorConfig::resolve(cli_db_url)?;

    println!("Initializing tutor database...");

    pool::ensure_database_exists(&resolved.db_config).await?;

    let db_pool = pool::create_pool(&resolved.db_config).await?;
    pool::run_migrations(&db_pool).await?;
    db_pool.close().await;

    println!("tutor db-init complete.");
    Ok(())
}

/// Build the shared service dependencies for commands that talk to the
/// backend and the database.
async fn service_deps(
    resolved: &TutorConfig,
) -> Result<(Arc<dyn PlanStore>, Arc<dyn CompletionBackend>)> {
    let db_pool = pool::create_pool(&resolved.db_config).await?;
    let store: Arc<dyn PlanStore> = Arc::new(PgPlanStore::new(db_pool));
    let backend: Arc<dyn CompletionBackend> = Arc::new(OpenAiBackend::new(&resolved.openai)?);
    Ok((store, backend))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { db_url, force } => {
            cmd_init(&db_url, force)?;
        }
        Commands::DbInit => {
            cmd_db_init(cli.database_url.as_deref()).await?;
        }
        Commands::Plan { command } => {
            let resolved = TutorConfig::resolve(cli.database_url.as_deref())?;
            match command {
                PlanCommands::Create {
                    language,
                    lessons,
                    duration,
                    level,
                } => {
                    let (store, backend) = service_deps(&resolved).await?;
                    let goals = LearningGoals {
                        target_language: language,
                        number_of_lessons: lessons,
                        lesson_duration: duration,
                        target_language_level: level,
                    };
                    plan_cmds::run_plan_create(store.as_ref(), backend.as_ref(), goals).await?;
                }
                PlanCommands::Show { plan_id } => {
                    let db_pool = pool::create_pool(&resolved.db_config).await?;
                    let store = PgPlanStore::new(db_pool);
                    plan_cmds::run_plan_show(&store, plan_id.as_deref()).await?;
                }
            }
        }
        Commands::Lesson { plan_id, item_id } => {
            let resolved = TutorConfig::resolve(cli.database_url.as_deref())?;
            let (store, backend) = service_deps(&resolved).await?;
            lesson_cmd::run_lesson(store.as_ref(), backend.as_ref(), &plan_id, &item_id).await?;
        }
        Commands::Serve { bind, port } => {
            let resolved = TutorConfig::resolve(cli.database_url.as_deref())?;
            let (store, backend) = service_deps(&resolved).await?;
            serve_cmd::run_serve(serve_cmd::AppState { store, backend }, &bind, port).await?;
        }
    }

    Ok(())
}
