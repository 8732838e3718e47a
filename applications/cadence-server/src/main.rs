/// Cadence Server - playlist membership reordering over a media index
use cadence_core::{MoveRequest, PlaylistId, Position};
use cadence_server::{api, config::ServerConfig};
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence-server")]
#[command(about = "Cadence playlist reorder service", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "CADENCE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Move one playlist member and print whether the store accepted it
    Move {
        /// Playlist identifier
        playlist_id: i64,
        /// Current position of the member
        #[arg(allow_negative_numbers = true)]
        from: Position,
        /// Target position
        #[arg(allow_negative_numbers = true)]
        to: Position,
    },
    /// Print the member order of a playlist
    Members {
        /// Playlist identifier
        playlist_id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cadence_server=info,cadence_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(&config).await?,
        Commands::Move {
            playlist_id,
            from,
            to,
        } => move_item(&config, playlist_id, from, to).await?,
        Commands::Members { playlist_id } => list_members(&config, playlist_id).await?,
    }

    Ok(())
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Cadence Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let app_state = cadence_server::connect(config).await?;
    let app = api::router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn move_item(
    config: &ServerConfig,
    playlist_id: i64,
    from: Position,
    to: Position,
) -> anyhow::Result<()> {
    let app_state = cadence_server::connect(config).await?;
    let moved = app_state
        .dispatcher
        .move_item_to(MoveRequest::new(PlaylistId::new(playlist_id), from, to))
        .await?;

    println!("{}", moved);
    Ok(())
}

async fn list_members(config: &ServerConfig, playlist_id: i64) -> anyhow::Result<()> {
    let app_state = cadence_server::connect(config).await?;
    let members = app_state
        .dispatcher
        .playlist_members(PlaylistId::new(playlist_id))
        .await?;

    match members {
        Some(members) => {
            for member in members {
                println!("{}\t{}", member.position, member.member_id);
            }
        }
        None => {
            anyhow::bail!("Playlist not found: {}", playlist_id);
        }
    }

    Ok(())
}
