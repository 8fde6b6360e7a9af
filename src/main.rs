//! clientbind CLI entrypoint
//! Loads a client model and prints the resolved bindings.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use clientbind::binding::{self, filter_methods, resolve_surface};
use clientbind::config::ResolverConfig;
use clientbind::infrastructure::CompositeModelLoader;
use clientbind::model::{Client, ModelLoader};
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::{Args, Parser};
use serde::Serialize;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clientbind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ModelArgs {
    /// Client model to load (file path or HTTP(S) URL)
    #[arg(long)]
    model: String,
    /// Resolver configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Client name to filter by (defaults to the model's client name)
    #[arg(long)]
    client_name: Option<String>,
    /// Expose every non-deprecated operation regardless of its client tag
    #[arg(long)]
    no_client_filter: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Resolve the bindings of the exposed operations as JSON
    Resolve {
        #[command(flatten)]
        model: ModelArgs,
        #[command(flatten)]
        filter: FilterArgs,
        /// Resolve a single operation by name, bypassing the method filter
        #[arg(long)]
        operation: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List the operations a client exposes
    Methods {
        #[command(flatten)]
        model: ModelArgs,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Print client-level surface facts as JSON
    Surface {
        #[command(flatten)]
        model: ModelArgs,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Resolve {
            model,
            filter,
            operation,
            pretty,
        } => run_resolve(model, filter, operation.as_deref(), *pretty).await?,
        Commands::Methods { model, filter } => run_methods(model, filter).await?,
        Commands::Surface { model, pretty } => run_surface(model, *pretty).await?,
    }
    Ok(())
}

async fn load_inputs(args: &ModelArgs) -> anyhow::Result<(Client, ResolverConfig)> {
    let config = match &args.config {
        Some(path) => ResolverConfig::load(path)
            .await
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ResolverConfig::default(),
    };

    let loader = CompositeModelLoader::new().context("Failed to initialize model loader")?;
    let client = loader
        .load(&args.model)
        .await
        .with_context(|| format!("Failed to load client model from {}", args.model))?;
    info!(
        "Loaded client '{}' with {} operations",
        client.name,
        client.operations.len()
    );
    Ok((client, config))
}

fn apply_filter_args(filter: &FilterArgs, client: &Client, config: &mut ResolverConfig) -> String {
    if filter.no_client_filter {
        config.filter_by_client_name = false;
    }
    filter
        .client_name
        .clone()
        .unwrap_or_else(|| client.name.clone())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

async fn run_resolve(
    model: &ModelArgs,
    filter: &FilterArgs,
    operation: Option<&str>,
    pretty: bool,
) -> anyhow::Result<()> {
    let (client, mut config) = load_inputs(model).await?;

    if let Some(name) = operation {
        let resolved = binding::resolve_operation(&client, name, &config)
            .with_context(|| format!("Failed to resolve operation '{name}'"))?;
        return print_json(&resolved, pretty);
    }

    let client_name = apply_filter_args(filter, &client, &mut config);
    let resolved = filter_methods(&client.operations, &client_name, &config)
        .into_iter()
        .map(|op| {
            binding::resolve(op, &config)
                .with_context(|| format!("Failed to resolve operation '{}'", op.name))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    info!("Resolved {} operations", resolved.len());
    print_json(&resolved, pretty)
}

async fn run_methods(model: &ModelArgs, filter: &FilterArgs) -> anyhow::Result<()> {
    let (client, mut config) = load_inputs(model).await?;
    let client_name = apply_filter_args(filter, &client, &mut config);

    for op in filter_methods(&client.operations, &client_name, &config) {
        println!(
            "{}\t{} {}",
            binding::method_name(&op.name),
            op.method,
            op.url
        );
    }
    Ok(())
}

async fn run_surface(model: &ModelArgs, pretty: bool) -> anyhow::Result<()> {
    let (client, config) = load_inputs(model).await?;
    print_json(&resolve_surface(&client, &config), pretty)
}
