//! Command dispatch.

pub mod ask;
pub mod render;
pub mod tui;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Tui { api_url, token } => tui::handle(api_url, token).await,
        Command::Ask {
            query,
            api_url,
            token,
            raw,
        } => ask::handle(query, api_url, token, raw).await,
        Command::Render {
            file,
            sort_by,
            desc,
        } => render::handle(file, sort_by, desc),
    }
}
