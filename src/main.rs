mod commands;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::cell::Cell;
use std::env;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

use civicwatch::gateway::gemini::{GeminiClient, DEFAULT_MODEL};
use civicwatch::gateway::PromptGateway;
use civicwatch::repo::{IssueRepository, JsonFileRepository};
use civicwatch::seed;
use civicwatch::store::IssueStore;

use commands::init::{SNAPSHOT_FILE, STATE_DIR};
use commands::submit::SubmitArgs;

#[derive(Parser)]
#[command(name = "civicwatch")]
#[command(about = "Report, browse, and triage civic issues")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize civicwatch in the current directory with the seed data
    Init {
        /// Re-seed even if a snapshot already exists
        #[arg(short, long)]
        force: bool,
    },

    /// List issues, most recent first
    List {
        /// Filter by category (pothole, street-light, waste-management, other)
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by status (open, in-progress, resolved)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Show one issue in full
    Show {
        /// Issue ID
        id: String,
    },

    /// Submit a new issue report
    Submit {
        /// Issue title
        #[arg(long)]
        title: String,
        /// Issue description
        #[arg(long)]
        description: String,
        /// Category (pothole, street-light, waste-management, other)
        #[arg(long)]
        category: String,
        /// Location or address
        #[arg(long)]
        location: String,
        /// Latitude (defaults to the city center)
        #[arg(long)]
        lat: Option<f64>,
        /// Longitude (defaults to the city center)
        #[arg(long)]
        lng: Option<f64>,
        /// Photo reference
        #[arg(long)]
        photo: Option<String>,
        /// Voice memo reference
        #[arg(long)]
        voice_memo: Option<String>,
        /// Reporting user, by id or name
        #[arg(long)]
        author: Option<String>,
    },

    /// Change an issue's status
    Status {
        /// Issue ID
        id: String,
        /// New status (open, in-progress, resolved)
        status: String,
    },

    /// Show the top citizens by points
    Leaderboard,

    /// List every issue's map pin
    Map,

    /// Summarize a report and its comments with the AI model
    Summarize {
        /// Issue ID
        id: String,
        #[command(flatten)]
        model: ModelArgs,
    },

    /// Analyze the sentiment of an issue's comments
    Sentiment {
        /// Issue ID
        id: String,
        #[command(flatten)]
        model: ModelArgs,
    },

    /// Transcribe an issue's voice memo or an audio file
    Transcribe {
        /// Issue ID (uses its voice memo)
        id: Option<String>,
        /// Audio file to transcribe instead
        #[arg(long)]
        file: Option<PathBuf>,
        #[command(flatten)]
        model: ModelArgs,
    },

    /// Export all issues
    Export {
        /// Output format (json, markdown)
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Args)]
struct ModelArgs {
    /// API key for the generative model
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,
    /// Model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
}

impl ModelArgs {
    fn gateway(&self) -> PromptGateway<GeminiClient> {
        PromptGateway::new(GeminiClient::new(&self.api_key, &self.model))
    }
}

fn find_state_dir() -> Result<PathBuf> {
    let mut current = env::current_dir()?;

    loop {
        let candidate = current.join(STATE_DIR);
        if candidate.exists() && candidate.is_dir() {
            return Ok(candidate);
        }

        if !current.pop() {
            bail!("Not a civicwatch directory (or any parent). Run 'civicwatch init' first.");
        }
    }
}

/// Loads the snapshot into a store and wires a dirty flag so the snapshot
/// is written back only after an actual mutation.
fn load_store() -> Result<(IssueStore, JsonFileRepository, Rc<Cell<bool>>)> {
    let repo = JsonFileRepository::new(find_state_dir()?.join(SNAPSHOT_FILE));
    let issues = repo
        .load()
        .context("Failed to load the issue snapshot")?;

    let mut store = IssueStore::with_issues(issues);
    let dirty = Rc::new(Cell::new(false));
    let flag = Rc::clone(&dirty);
    store.subscribe(move |_| flag.set(true));

    Ok((store, repo, dirty))
}

fn save_if_dirty(store: &IssueStore, repo: &JsonFileRepository, dirty: &Cell<bool>) -> Result<()> {
    if dirty.get() {
        repo.save(&store.list())?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            let cwd = env::current_dir()?;
            commands::init::run(&cwd, force)
        }

        Commands::List { category, status } => {
            let (store, _, _) = load_store()?;
            let category = category.map(|c| c.parse()).transpose()?;
            let status = status.map(|s| s.parse()).transpose()?;
            commands::list::run(&store, category, status)
        }

        Commands::Show { id } => {
            let (store, _, _) = load_store()?;
            commands::show::run(&store, &id)
        }

        Commands::Submit {
            title,
            description,
            category,
            location,
            lat,
            lng,
            photo,
            voice_memo,
            author,
        } => {
            let (mut store, repo, dirty) = load_store()?;
            let args = SubmitArgs {
                title,
                description,
                category: category.parse()?,
                location,
                lat,
                lng,
                photo,
                voice_memo,
                author,
            };
            commands::submit::run(&mut store, &seed::users(), args)?;
            save_if_dirty(&store, &repo, &dirty)
        }

        Commands::Status { id, status } => {
            let (mut store, repo, dirty) = load_store()?;
            commands::status::run(&mut store, &id, status.parse()?)?;
            save_if_dirty(&store, &repo, &dirty)
        }

        Commands::Leaderboard => commands::leaderboard::run(&seed::users()),

        Commands::Map => {
            let (store, _, _) = load_store()?;
            commands::map::run(&store)
        }

        Commands::Summarize { id, model } => {
            let (store, _, _) = load_store()?;
            commands::summarize::run(&store, &model.gateway(), &id).await
        }

        Commands::Sentiment { id, model } => {
            let (store, _, _) = load_store()?;
            commands::sentiment::run(&store, &model.gateway(), &id).await
        }

        Commands::Transcribe { id, file, model } => {
            let (store, _, _) = load_store()?;
            commands::transcribe::run(&store, &model.gateway(), id.as_deref(), file.as_deref())
                .await
        }

        Commands::Export { format, output } => {
            let (store, _, _) = load_store()?;
            match format.as_str() {
                "json" => commands::export::run_json(&store, output.as_deref()),
                "markdown" | "md" => commands::export::run_markdown(&store, output.as_deref()),
                other => bail!("Unknown export format '{}'. Must be json or markdown", other),
            }
        }
    }
}
