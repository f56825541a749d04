//! brugen CLI entrypoint
//! Parses command-line arguments and dispatches to the generator.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::PathBuf;

use brugen::config::Config;
use brugen::generation::Generator;
use brugen::prompt::ConsolePrompter;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(name = "brugen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate bruno files according to your controller actions
    Make {
        /// Path to the route table exported by your framework (JSON or YAML)
        #[arg(long, default_value = "routes.json")]
        routes: PathBuf,
        /// Bruno collection directory
        #[arg(long, default_value = "bruno")]
        collection_dir: PathBuf,
        /// Namespace prefix of application-owned controllers
        #[arg(long, default_value = "App\\")]
        app_namespace: String,
        /// Base url offered when bootstrapping a new collection
        #[arg(long)]
        base_url: Option<Url>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Make {
            routes,
            collection_dir,
            app_namespace,
            base_url,
        } => run_make(routes, collection_dir, app_namespace, base_url).await?,
    }
    Ok(())
}

async fn run_make(
    routes: PathBuf,
    collection_dir: PathBuf,
    app_namespace: String,
    base_url: Option<Url>,
) -> anyhow::Result<()> {
    let mut config = Config {
        routes_path: routes,
        collection_dir,
        app_namespace,
        ..Config::default()
    };
    if let Some(base_url) = base_url {
        // Url renders host-only URLs with a trailing slash; the base-URL
        // variable must not end with one or every request URL doubles it
        config.default_base_url = base_url.as_str().trim_end_matches('/').to_string();
    }

    let generator = Generator::new(config);
    let prompter = ConsolePrompter::new();
    let report = generator
        .run(&prompter)
        .await
        .context("bruno generation failed")?;

    info!(
        collection = %report.collection_name,
        requests = report.generated.len(),
        "generation finished"
    );
    Ok(())
}
