// Terminal Notifier CLI
//
// Runs the hook receiver for an OpenCode session, or sends a one-off
// notification for checking terminal support. Logs go to stderr; stdout
// is the notification output.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use terminal_notifier::config::{self, NotifierConfig};
use terminal_notifier::hooks::{notification_title, run_receiver};
use terminal_notifier::notification::Dispatcher;
use terminal_notifier::session::{HttpSessionLookup, DEFAULT_SERVER_URL};
use terminal_notifier::{plugin, terminal, EventType};
use tokio::io::{AsyncBufRead, BufReader};

#[derive(Parser)]
#[command(name = "terminal-notifier", version, about)]
struct Cli {
    /// Config file (default: ~/.config/opencode/terminal-notifier.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read host hooks as JSON lines and emit notifications
    Run {
        /// Read hooks from a file or named pipe instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Project directory (default: current directory)
        #[arg(long)]
        directory: Option<PathBuf>,

        /// OpenCode server used for session lookups
        #[arg(long, env = "OPENCODE_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
        server_url: String,
    },
    /// Send one notification for an event type, even if it is disabled
    Test {
        #[arg(value_parser = parse_event_type)]
        event: EventType,
    },
    /// Show the detected terminal and the method `auto` resolves to
    Detect,
    /// Print the resolved configuration
    Config,
}

fn parse_event_type(value: &str) -> Result<EventType, String> {
    EventType::parse(value).ok_or_else(|| {
        let names: Vec<&str> = EventType::ALL.iter().map(|e| e.as_str()).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    match cli.command {
        Command::Run {
            input,
            directory,
            server_url,
        } => run(config, input.as_deref(), directory, server_url).await,
        Command::Test { event } => {
            send_test_notification(&config, event);
            Ok(())
        }
        Command::Detect => {
            let identity = terminal::current_identity();
            let shown = if identity.is_empty() { "(unset)" } else { identity };
            println!("{}: {}", terminal::TERM_PROGRAM_VAR, shown);
            println!("auto method: {}", terminal::resolve_auto_method(identity));
            Ok(())
        }
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

async fn run(
    config: NotifierConfig,
    input: Option<&Path>,
    directory: Option<PathBuf>,
    server_url: String,
) -> anyhow::Result<()> {
    let directory = directory.or_else(|| std::env::current_dir().ok());
    let lookup = HttpSessionLookup::new(&server_url).context("failed to build session client")?;

    let router = plugin::activate(config, Arc::new(lookup), directory.as_deref(), io::stdout());
    let Some(router) = router else {
        return Ok(());
    };

    let reader: Box<dyn AsyncBufRead + Unpin> = match input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("failed to open hook input {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let stats = run_receiver(reader, &router).await?;
    stats.log_summary();
    Ok(())
}

fn send_test_notification(config: &NotifierConfig, event: EventType) {
    let directory = std::env::current_dir().ok();
    let title = notification_title(config, plugin::project_name(directory.as_deref()).as_deref());
    let method = config.event_method(event, terminal::current_identity());

    tracing::info!(%event, %method, "sending test notification");
    if !Dispatcher::stdout().dispatch(method, &title, config.message(event)) {
        eprintln!("failed to write {} notification", method);
    }
}
