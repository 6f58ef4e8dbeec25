//! ups - user-provided service manager for Cloud Foundry
//!
//! Usage:
//!   ups deploy dev                  # Create or update every service in space "dev"
//!   ups deploy dev --service db     # Only the named services
//!   ups list                        # Show spaces and services from the manifest

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ups_core::commands::{
    DeployCommand, DeployOptions, DeployReport, ListCommand, SpaceSummary,
};
use ups_core::config::ManifestStore;
use ups_core::deploy::OutcomeStatus;

#[derive(Parser)]
#[command(name = "ups")]
#[command(about = "Deploy Cloud Foundry user-provided services", long_about = None)]
struct Cli {
    /// Path to the manifest (defaults to ./ups.toml, then the global config dir)
    #[arg(long, short, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or update the user-provided services of a space
    Deploy {
        /// Space declared in the manifest
        space: String,

        /// Only deploy these services (repeatable). Deploys all when omitted.
        ///
        /// If any name is unknown, nothing is deployed.
        #[arg(long = "service", short = 's', value_name = "NAME")]
        services: Vec<String>,

        /// Path to the cf executable (overrides the manifest)
        #[arg(long = "cf", value_name = "PATH")]
        cf_binary: Option<String>,

        /// Print the cf commands without running them
        #[arg(long)]
        dry_run: bool,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        format: OutputFormat,
    },

    /// List spaces and services declared in the manifest
    #[command(alias = "ls")]
    List {
        /// Only show this space
        space: Option<String>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
    /// Only show issues (non-zero exit if problems)
    Quiet,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ups=info,ups_core=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let store = ManifestStore::discover(cli.manifest.as_deref())?;
    tracing::debug!(manifest = %store.manifest_path().display(), "Using manifest");

    match cli.command {
        Commands::Deploy {
            space,
            services,
            cf_binary,
            dry_run,
            format,
        } => {
            let mut options = DeployOptions::new(space)
                .with_services(&services)
                .with_dry_run(dry_run);
            if let Some(binary) = cf_binary {
                options = options.with_cf_binary(binary);
            }
            run_deploy(store, &options, format)?;
        }
        Commands::List { space, format } => {
            run_list(store, space.as_deref(), format)?;
        }
    }

    Ok(())
}

fn run_deploy(store: ManifestStore, options: &DeployOptions, format: OutputFormat) -> Result<()> {
    let cmd = DeployCommand::new(store);
    let report = cmd.execute(options)?;

    match format {
        OutputFormat::Table => print_deploy_table(&report, options.dry_run),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Quiet => {
            for failure in &report.failures {
                eprintln!("{}: {}", failure.message, failure.error);
            }
        }
    }

    if report.has_failures() {
        anyhow::bail!(
            "{} failure(s) while deploying space '{}'",
            report.failures.len(),
            report.space
        );
    }
    Ok(())
}

fn print_deploy_table(report: &DeployReport, dry_run: bool) {
    let header = if dry_run {
        format!("Space '{}' (dry run)", report.space)
    } else {
        format!("Space '{}'", report.space)
    };
    println!("{}", style(header).bold());

    for outcome in &report.outcomes {
        let status = match outcome.status {
            OutcomeStatus::Created => style("✓ created").green(),
            OutcomeStatus::Updated => style("✓ updated").cyan(),
            OutcomeStatus::Failed => style("✗ failed").red(),
        };
        println!("  {:<30} {}", outcome.name, status);
    }

    for failure in &report.failures {
        println!("  ⚠ {}: {}", failure.message, failure.error);
    }
}

fn run_list(store: ManifestStore, space: Option<&str>, format: OutputFormat) -> Result<()> {
    let cmd = ListCommand::new(store);
    let spaces = cmd.execute(space)?;

    match format {
        OutputFormat::Table => print_list_table(&spaces),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&spaces)?),
        OutputFormat::Quiet => {
            if spaces.is_empty() {
                println!("No spaces declared");
            }
        }
    }
    Ok(())
}

fn print_list_table(spaces: &[SpaceSummary]) {
    if spaces.is_empty() {
        println!("No spaces declared.");
        return;
    }

    println!("{:<20} {:<30} Kind", "Space", "Service");
    println!("{}", "-".repeat(65));

    for space in spaces {
        if space.services.is_empty() {
            println!("{:<20} {:<30} -", space.name, "(none)");
        }
        for service in &space.services {
            println!("{:<20} {:<30} {}", space.name, service.name, service.kind);
        }
    }
}
