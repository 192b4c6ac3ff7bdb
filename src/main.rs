use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rice_prioritizer::api::{self, AppState, Board};
use rice_prioritizer::config::{ServerConfig, DEFAULT_PORT};
use rice_prioritizer::engine::{generate_prd, rank_and_score};
use rice_prioritizer::store::FeatureStore;

#[derive(Parser)]
#[command(name = "rice")]
#[command(about = "Score feature ideas with RICE and draft a mini-PRD for the winner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the prioritization board over HTTP
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Interface to bind (overrides RICE_HOST)
        #[arg(long)]
        host: Option<String>,
    },
    /// Print the ranked seed board
    Rank {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the mini-PRD for the top priority feature
    Prd {
        /// Print Markdown instead of JSON
        #[arg(long)]
        markdown: bool,
    },
}

/// Initialize tracing with output to stderr (for print commands) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(
        |_| "rice_prioritizer=debug,prioritizer_core=debug,tower_http=debug".into(),
    ));

    if use_stderr {
        // Keep stdout clean for the printed board or document
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(port: u16, host: Option<String>) -> anyhow::Result<()> {
    let mut config = ServerConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }

    let app = api::create_router(AppState::seeded(), &config);
    let addr = format!("{}:{}", config.host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Prioritization board listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn print_board(json: bool) -> anyhow::Result<()> {
    let board = Board::from_features(&FeatureStore::seeded().snapshot());

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    for entry in &board.features {
        let marker = if entry.is_top_priority { "*" } else { " " };
        println!(
            "{} {:<32} {:>6}  reach {:>6}  impact {:<4} {:<8} confidence {:>3}%  effort {}",
            marker,
            entry.feature.name,
            entry.score.round(),
            entry.feature.reach,
            entry.feature.impact,
            entry.impact_label.as_str(),
            entry.feature.confidence,
            entry.feature.effort,
        );
    }
    Ok(())
}

fn print_prd(markdown: bool) -> anyhow::Result<()> {
    let snapshot = FeatureStore::seeded().snapshot();
    let ranking = rank_and_score(&snapshot);
    let doc = generate_prd(ranking.top().map(|top| &top.feature))
        .ok_or_else(|| anyhow::anyhow!("No features to prioritize"))?;

    if markdown {
        print!("{}", doc.to_markdown());
    } else {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = matches!(cli.command, Some(Commands::Rank { .. } | Commands::Prd { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve { port, host }) => serve(port, host).await?,
        Some(Commands::Rank { json }) => print_board(json)?,
        Some(Commands::Prd { markdown }) => print_prd(markdown)?,
        None => serve(DEFAULT_PORT, None).await?,
    }

    Ok(())
}
