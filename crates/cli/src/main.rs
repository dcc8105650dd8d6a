use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use swatch_api::{PaletteClient, PaletteSource};
use swatch_util::{ConfigOverrides, SwatchConfig, config_root};
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "swatch.log";

/// Compose up to five creatives over a freshly fetched color palette.
#[derive(Debug, Parser)]
#[command(name = "swatch", version, about)]
struct Cli {
    /// Palette endpoint (overrides SWATCH_PALETTE_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    palette_url: Option<String>,

    /// Number of colors to request, 1 to 20
    #[arg(long, global = true, value_name = "N")]
    palette_count: Option<u32>,

    /// Path to the JSON config file
    #[arg(long = "config", global = true, value_name = "PATH")]
    config_path: Option<PathBuf>,

    /// Where the TUI writes its log
    #[arg(long, global = true, env = "SWATCH_LOG_PATH", value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the palette once and print it as JSON
    Palette,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        None => init_file_tracing(cli.log_file.clone().unwrap_or_else(|| config_root().join(LOG_FILE_NAME))),
        Some(Command::Palette) => init_stderr_tracing(),
    }

    let overrides = ConfigOverrides {
        config_path: cli.config_path,
        palette_url: cli.palette_url,
        palette_count: cli.palette_count,
    };
    let config = SwatchConfig::load(&overrides).context("failed to load configuration")?;
    let request_url = config.request_url().context("failed to build the palette URL")?;
    let client = PaletteClient::new(&request_url).context("failed to create the palette client")?;

    match cli.command {
        None => {
            info!(url = %client.url(), "starting board");
            swatch_tui::run(Arc::new(client)).await
        }
        Some(Command::Palette) => print_palette(&client).await,
    }
}

async fn print_palette(client: &PaletteClient) -> Result<()> {
    let colors = client
        .fetch_palette()
        .await
        .with_context(|| format!("failed to fetch the palette from {}", client.url()))?;
    println!("{}", serde_json::to_string_pretty(&colors)?);
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// The TUI owns the terminal, so its logs go to a file. When the file cannot
/// be opened, logs are dropped.
fn init_file_tracing(path: PathBuf) {
    match open_log_file(&path) {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        Err(_) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::sink)
                .try_init();
        }
    }
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_runs_board() {
        let cli = Cli::try_parse_from(["swatch", "--palette-count", "3"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.palette_count, Some(3));
    }

    #[test]
    fn palette_subcommand_accepts_global_flags() {
        let cli = Cli::try_parse_from(["swatch", "palette", "--palette-url", "http://localhost:8080/colors"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Palette)));
        assert_eq!(cli.palette_url.as_deref(), Some("http://localhost:8080/colors"));
    }

    #[tokio::test]
    async fn print_palette_succeeds_against_local_service() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await.unwrap();
            let body = r##"{"colors":["#FF0000"]}"##;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        let client = PaletteClient::new(&format!("http://127.0.0.1:{port}/api/random?count=1")).unwrap();
        print_palette(&client).await.unwrap();
    }

    #[tokio::test]
    async fn print_palette_reports_unreachable_service() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = PaletteClient::new(&format!("http://127.0.0.1:{port}/api/random")).unwrap();
        let error = print_palette(&client).await.unwrap_err();
        assert!(error.to_string().starts_with("failed to fetch the palette from"), "{error:#}");
    }

    #[test]
    fn log_file_is_created_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(LOG_FILE_NAME);
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
