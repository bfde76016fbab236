use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use na_core::{NewsStorage, RawNewsRecord, Result};
use na_web::AppState;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = "memory")]
    storage: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the JSON API server
    Serve {
        #[arg(long, default_value = "0.0.0.0:3000")]
        addr: String,
        /// JSON file holding an array of news records to preload
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

async fn seed_articles(storage: &Arc<dyn NewsStorage>, path: &Path) -> Result<usize> {
    let raw = tokio::fs::read_to_string(path).await?;
    let records: Vec<RawNewsRecord> = serde_json::from_str(&raw)?;
    let mut stored = 0;
    for record in records {
        let article = record.into_article()?;
        storage.store_article(&article).await?;
        stored += 1;
    }
    Ok(stored)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let storage = na_storage::create_storage(&cli.storage).await?;
    info!("💾 Storage initialized successfully (using {})", cli.storage);

    match cli.command {
        Commands::Serve { addr, seed } => {
            if let Some(path) = seed {
                let stored = seed_articles(&storage, &path).await?;
                info!("📰 Seeded {} articles from {}", stored, path.display());
            }

            let app = na_web::create_app(AppState { storage }).await;
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("🌐 Listening on {}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
