mod common;
mod config;
mod network;
mod ui;

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use network::{HttpReplyService, ReplyClient, ReplyService};
use tokio::sync::mpsc;
use ui::{ChatApp, ConversationView};

#[derive(Parser)]
#[command(
    name = "serverless_chat",
    version,
    about = "Desktop chat widget for a serverless reply endpoint"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Reply endpoint URL (overrides the config file)
    #[arg(long, env = "CHAT_ENDPOINT", value_name = "URL")]
    endpoint: Option<String>,
    /// Static user id sent with every prompt
    #[arg(long, env = "CHAT_USER_ID", value_name = "ID")]
    user_id: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env must be loaded before clap reads env-backed flags
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config).with_overrides(cli.endpoint, cli.user_id);

    let endpoint = app_config.endpoint_url().inspect_err(|err| {
        log::error!("Cannot start: {err}");
    })?;
    let timeout = app_config
        .request_timeout()
        .inspect_err(|err| log::error!("Cannot start: {err}"))?;
    let service = HttpReplyService::new(endpoint, timeout)
        .inspect_err(|err| log::error!("Cannot build HTTP client: {err}"))?;
    log::info!(
        "Using reply endpoint {} as `{}`",
        service.endpoint(),
        app_config.user_id
    );

    // UI -> worker
    let (cmd_tx, cmd_rx) = mpsc::channel(32);
    // worker -> UI
    let (event_tx, event_rx) = mpsc::channel(32);

    let service: Arc<dyn ReplyService> = Arc::new(service);
    let worker = ReplyClient::new(
        service,
        app_config.user_id.clone(),
        event_tx,
        cmd_rx,
    );
    tokio::spawn(worker.run());

    let view = ConversationView::new(cmd_tx, event_rx, app_config.error_message.clone());
    let title = app_config.window_title.clone();
    let heading = title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([420.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(ChatApp::new(cc, view, heading)))),
    )?;

    Ok(())
}
