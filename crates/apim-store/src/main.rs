//! APIM Store CLI
//!
//! Applies migrations and runs operator queries against the document store.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use apim_core::{DomainError, PortalPage, PortalPageRepository, ScoringReportRepository};
use apim_store::{db, telemetry, PgPortalPageRepository, PgScoringReportRepository, StoreConfig};

#[derive(Parser)]
#[command(name = "apim-store")]
#[command(about = "Portal page and scoring report document store", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply embedded migrations
    Migrate,

    /// Portal page operations
    Page {
        #[command(subcommand)]
        action: PageAction,
    },

    /// Scoring report operations
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },
}

#[derive(Subcommand)]
enum PageAction {
    /// Show a page
    Get { id: String },

    /// List pages, optionally only those tagged with a context
    List {
        #[arg(short, long)]
        context: Option<String>,
    },

    /// Create a page
    Create {
        #[arg(short, long)]
        environment: String,
        #[arg(short, long)]
        name: String,
        #[arg(long, default_value = "")]
        content: String,
        /// Caller-assigned id (generated when omitted)
        #[arg(long)]
        id: Option<String>,
        /// Context tag, repeatable
        #[arg(long = "context")]
        contexts: Vec<String>,
    },

    /// Delete a page
    Delete { id: String },

    /// Tag a page with a context
    AssignContext { id: String, context: String },

    /// Remove a context tag from a page
    RemoveContext { id: String, context: String },
}

#[derive(Subcommand)]
enum ReportAction {
    /// Show the latest report of an API
    Latest { api_id: String },

    /// Delete every report of an API
    DeleteByApi { api_id: String },

    /// Show the latest report of each API in an environment
    Environment { environment_id: String },

    /// Delete every report of an environment
    DeleteByEnvironment { environment_id: String },
}

/// Exit status for failures worth retrying (sysexits `EX_TEMPFAIL`)
const EXIT_TEMPFAIL: u8 = 75;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

async fn run() -> Result<()> {
    telemetry::init()?;

    let cli = Cli::parse();
    let config = StoreConfig::from_env().context("Failed to load store configuration")?;
    let pool = db::connect(&config)
        .await
        .context("Failed to open the document store")?;

    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Migrate => db::migrate(&pool).await?,
        Commands::Page { action } => {
            run_page(&PgPortalPageRepository::new(pool), action, &mut out).await?
        }
        Commands::Report { action } => {
            run_report(&PgScoringReportRepository::new(pool), action, &mut out).await?
        }
    }

    Ok(())
}

/// Store failures that may succeed on retry exit with `EX_TEMPFAIL`
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<DomainError>() {
        Some(domain) if domain.is_transient() => EXIT_TEMPFAIL,
        _ => 1,
    }
}

async fn run_page<R: PortalPageRepository>(
    repo: &R,
    action: PageAction,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        PageAction::Get { id } => print_json(out, &repo.find_by_id(&id).await?),
        PageAction::List { context } => {
            let pages = match context {
                Some(context) => repo.find_by_context(&context).await?,
                None => repo.find_all().await?,
            };
            print_json(out, &pages)
        }
        PageAction::Create {
            environment,
            name,
            content,
            id,
            contexts,
        } => {
            let mut page = PortalPage::new(environment, name, content).with_contexts(Some(contexts));
            if let Some(id) = id {
                page = page.with_id(id);
            }
            print_json(out, &repo.create(&page).await?)
        }
        PageAction::Delete { id } => Ok(repo.delete(&id).await?),
        PageAction::AssignContext { id, context } => {
            repo.assign_context(&id, &context).await?;
            print_json(out, &repo.find_by_id(&id).await?)
        }
        PageAction::RemoveContext { id, context } => {
            repo.remove_context(&id, &context).await?;
            print_json(out, &repo.find_by_id(&id).await?)
        }
    }
}

async fn run_report<R: ScoringReportRepository>(
    repo: &R,
    action: ReportAction,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        ReportAction::Latest { api_id } => print_json(out, &repo.find_latest_for(&api_id).await?),
        ReportAction::DeleteByApi { api_id } => Ok(repo.delete_by_api(&api_id).await?),
        ReportAction::Environment { environment_id } => print_json(
            out,
            &repo.find_environment_latest_reports(&environment_id).await?,
        ),
        ReportAction::DeleteByEnvironment { environment_id } => {
            Ok(repo.delete_by_environment(&environment_id).await?)
        }
    }
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    writeln!(out, "{}", json)?;
    Ok(())
}
