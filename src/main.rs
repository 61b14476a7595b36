// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use docsearch::utils::logging::{
    format_error, format_info, format_step, format_success, format_warning,
};
use docsearch::{
    AppState, Config, OpenSearchClient, SearchEngine, SearchService, bootstrap, server,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(version = "0.1.0")]
#[command(about = "Web front-end over an OpenSearch index with seeded sample documents", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bootstrap the engine and serve the HTML page and JSON API
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    /// Provision the index and seed sample documents, then exit
    Bootstrap,

    /// Run a one-off search against the engine
    Search {
        /// Free-text query (empty matches all documents)
        #[arg(default_value = "")]
        query: String,

        #[arg(short = 't', long)]
        content_type: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    docsearch::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Serve { host, port } => {
            cmd_serve(config, host, port).await?;
        }
        Commands::Bootstrap => {
            cmd_bootstrap(&config).await?;
        }
        Commands::Search {
            query,
            content_type,
        } => {
            cmd_search(&config, &query, content_type.as_deref()).await?;
        }
    }

    Ok(())
}

async fn cmd_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let engine = Arc::new(OpenSearchClient::new(&config.engine));

    bootstrap::initialize(engine.as_ref(), &config)
        .await
        .context("Engine bootstrap failed")?;

    let search = SearchService::new(engine, config.index.clone());
    server::serve(AppState { search }, &config.server)
        .await
        .context("HTTP server failed")?;

    Ok(())
}

async fn cmd_bootstrap(config: &Config) -> Result<()> {
    println!("{}", format_step(1, 2, "connecting to engine"));

    let engine = OpenSearchClient::new(&config.engine);

    println!("{}", format_step(2, 2, "provisioning index and seed documents"));

    bootstrap::initialize(&engine, config)
        .await
        .context("Engine bootstrap failed")?;

    println!(
        "{}",
        format_success(&format!("index '{}' is ready", config.index.name))
    );

    Ok(())
}

async fn cmd_search(config: &Config, query: &str, content_type: Option<&str>) -> Result<()> {
    let engine = Arc::new(OpenSearchClient::new(&config.engine));

    if let Err(e) = engine.health().await {
        eprintln!("{}", format_error("cannot reach the search engine"));
        return Err(e).context("Engine health check failed");
    }

    let service = SearchService::new(engine, config.index.clone());
    let results = service
        .search(query, content_type)
        .await
        .context("Search failed")?;

    if results.is_empty() {
        println!("{}", format_warning(&format!("no results for \"{query}\"")));
        return Ok(());
    }

    println!(
        "{}",
        format_info(&format!("{} result(s) for \"{}\"", results.len(), query))
    );

    for (idx, result) in results.iter().enumerate() {
        println!("{}. {}", idx + 1, result.title);
        println!("   {}", result.snippet);
    }

    Ok(())
}
