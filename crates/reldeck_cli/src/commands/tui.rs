//! `reldeck tui` — run the interactive chat TUI against the backend.

use std::sync::Arc;

use anyhow::Result;
use reldeck_api::{ApiConfig, ChatClient};
use reldeck_core::ChatEvent;
use reldeck_observability::{ObservabilityConfig, init};
use reldeck_tui::messages::error::QUERY_FAILED_TEXT;
use reldeck_tui::run_tui;
use tokio::sync::mpsc;

use crate::output;

async fn run_query_loop(
    client: ChatClient,
    event_tx: mpsc::Sender<ChatEvent>,
    mut query_rx: mpsc::Receiver<String>,
) {
    while let Some(query) = query_rx.recv().await {
        match client.execute_query(&query).await {
            Ok(result) => {
                let _ = event_tx.send(ChatEvent::reply(result.result)).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "query failed");
                let _ = event_tx.send(ChatEvent::error(QUERY_FAILED_TEXT)).await;
            }
        }
    }
}

pub async fn handle(api_url: Option<String>, token: Option<String>) -> Result<()> {
    // Channel for tracing logs → TUI debug traces screen (Ctrl+D)
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let log_sink: Arc<dyn Fn(String) + Send + Sync> = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });

    // Init tracing without console; the terminal belongs to the TUI.
    let obs_config = ObservabilityConfig::from_env()
        .with_console(false)
        .with_log_sink(log_sink);
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Observability init failed (continuing): {}", e));
    }

    let mut config = ApiConfig::from_env()?;
    if let Some(url) = api_url {
        config.base_url = url;
    }
    if let Some(token) = token {
        config.token = Some(token);
    }
    let client = ChatClient::new(config);

    let (event_tx, event_rx) = mpsc::channel(256);
    let (query_tx, query_rx) = mpsc::channel::<String>(64);

    tokio::spawn(run_query_loop(client, event_tx, query_rx));

    run_tui(event_rx, query_tx, Some(log_rx))?;
    Ok(())
}
