//! `reldeck ask` — one-shot query with rendered output.

use anyhow::{Context, Result};
use reldeck_api::{ApiConfig, ChatClient};
use reldeck_core::ChatReply;
use reldeck_core::reply::parse_reply;

use crate::output;
use crate::render::print_blocks;

pub async fn handle(
    query: String,
    api_url: Option<String>,
    token: Option<String>,
    raw: bool,
) -> Result<()> {
    let mut config = ApiConfig::from_env()?;
    if let Some(url) = api_url {
        config.base_url = url;
    }
    if let Some(token) = token {
        config.token = Some(token);
    }
    let client = ChatClient::new(config);

    let spinner = output::spinner("Querying…");
    let result = match client.execute_query(&query).await {
        Ok(r) => {
            spinner.finish_and_clear();
            r
        }
        Err(e) => {
            output::spinner_error(&spinner, "Query failed");
            return Err(e).context("backend query");
        }
    };

    if raw {
        println!("{}", result.result);
        return Ok(());
    }

    match parse_reply(&result.result) {
        ChatReply::Blocks { blocks, follow_ups } => {
            print_blocks(&blocks);
            if !follow_ups.is_empty() {
                println!();
                output::dim("Follow-ups:");
                for (i, q) in follow_ups.iter().enumerate().take(9) {
                    output::kv(&format!("[{}]", i + 1), q);
                }
            }
        }
        ChatReply::Text(text) => println!("{text}"),
    }
    Ok(())
}
